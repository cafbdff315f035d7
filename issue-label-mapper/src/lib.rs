//! Derives target-tracker labels from source issue fields during issue
//! migrations.
//!
//! Mappings from field values (issue type, status, components, ...) to labels
//! are registered once, usually from a TOML mapping file, into a read-only
//! [`LabelMappings`] table. The table then yields the catalogue of labels to
//! create on the target tracker and the ordered label names of every issue.

pub mod config;
pub mod fields;
pub mod issue;
pub mod labels;
pub mod mapping;

pub use config::{load_mappings, ConfigError, MappingConfig, MappingEntry};
pub use fields::FieldType;
pub use issue::{IssueFields, JiraFields, JiraIssue, NamedValue};
pub use labels::{LabelAttributes, LabelFactory, LabelStyle};
pub use mapping::{LabelMappings, LabelMappingsBuilder, LabelNames, MappingError};
