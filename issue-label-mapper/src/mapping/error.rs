//! Mapping registration error types.

use crate::fields::FieldType;
use thiserror::Error;

/// Errors that can occur while registering label mappings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The field has no default label factory and none was supplied.
    #[error("No default label factory for {field}, an explicit factory is required")]
    NoDefaultLabelFactory { field: FieldType },
}
