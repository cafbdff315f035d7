//! Label mapping table and label derivation.
//!
//! Mappings are registered on a [`LabelMappingsBuilder`] during configuration
//! and frozen into a [`LabelMappings`] table, which then derives the labels of
//! each migrated issue:
//!
//! ```
//! use issue_label_mapper::{FieldType, JiraIssue, LabelMappingsBuilder, LabelStyle};
//!
//! let mut builder = LabelMappingsBuilder::new();
//! builder.add_mapping(FieldType::IssueType, "Bug", "Bug")?;
//! builder.add_mapping_with(FieldType::Label, "help-wanted", "help-wanted", &LabelStyle::PLAIN);
//! let mappings = builder.build();
//!
//! let mut issue = JiraIssue::new("SPR-1");
//! issue.fields.labels = Some(vec!["help-wanted".to_string()]);
//! let labels = mappings.labels_for(&issue);
//! assert_eq!(labels.first().map(String::as_str), Some("help-wanted"));
//! # Ok::<(), issue_label_mapper::MappingError>(())
//! ```

mod builder;
mod derivation;
mod error;
mod table;

pub use builder::LabelMappingsBuilder;
pub use derivation::LabelNames;
pub use error::MappingError;
pub use table::LabelMappings;

use crate::fields::FieldType;

/// Builds the table key for a field value: the field tag followed by the
/// lowercased value, e.g. `ISSUE_TYPEbug`.
fn mapping_key(field: FieldType, value: &str) -> String {
    format!("{field}{}", value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lowercases_value_only() {
        assert_eq!(mapping_key(FieldType::IssueType, "Bug"), "ISSUE_TYPEbug");
        assert_eq!(mapping_key(FieldType::Label, " Help "), "LABEL help ");
    }
}
