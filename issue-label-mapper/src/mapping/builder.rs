//! Registration of label mappings.

use super::{mapping_key, LabelMappings, MappingError};
use crate::fields::FieldType;
use crate::labels::{LabelAttributes, LabelFactory};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Collects label mappings during configuration.
///
/// Once every mapping is registered, [`build`][Self::build] freezes the
/// builder into a read-only [`LabelMappings`].
#[derive(Debug, Clone, Default)]
pub struct LabelMappingsBuilder {
    mappings: HashMap<String, LabelAttributes>,
}

impl LabelMappingsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `value` of `field` to a label created by the field's default factory.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::NoDefaultLabelFactory`] for fields without a
    /// default factory (free-form labels). Use
    /// [`add_mapping_with`][Self::add_mapping_with] for those.
    pub fn add_mapping(
        &mut self,
        field: FieldType,
        value: &str,
        label_name: &str,
    ) -> Result<&mut Self, MappingError> {
        let factory = field
            .default_label_factory()
            .ok_or(MappingError::NoDefaultLabelFactory { field })?;
        Ok(self.add_mapping_with(field, value, label_name, factory))
    }

    /// Maps `value` of `field` to a label created by `factory`.
    ///
    /// Values are matched case-insensitively. Registering the same field and
    /// value again replaces the earlier label.
    pub fn add_mapping_with<F>(
        &mut self,
        field: FieldType,
        value: &str,
        label_name: &str,
        factory: &F,
    ) -> &mut Self
    where
        F: LabelFactory + ?Sized,
    {
        let label = factory.create(label_name);
        debug!(%field, value, label = label.name(), "Registering label mapping");

        if let Some(previous) = self.mappings.insert(mapping_key(field, value), label) {
            warn!(
                %field,
                value,
                previous = previous.name(),
                "Label mapping replaced an earlier mapping"
            );
        }
        self
    }

    /// Returns the number of registered mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Ends configuration and returns the read-only mapping table.
    #[must_use]
    pub fn build(self) -> LabelMappings {
        debug!(count = self.mappings.len(), "Built label mapping table");
        LabelMappings::from_entries(self.mappings)
    }
}
