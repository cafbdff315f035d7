//! The read-only label mapping table.

use super::mapping_key;
use crate::fields::FieldType;
use crate::labels::LabelAttributes;
use std::collections::{BTreeSet, HashMap};

/// Label mappings keyed by field and case-insensitive field value.
///
/// Produced by [`LabelMappingsBuilder::build`][super::LabelMappingsBuilder::build].
/// The table cannot be modified afterwards, so it can be shared freely between
/// workers deriving labels in parallel.
#[derive(Debug, Clone, Default)]
pub struct LabelMappings {
    mappings: HashMap<String, LabelAttributes>,
}

impl LabelMappings {
    pub(super) fn from_entries(mappings: HashMap<String, LabelAttributes>) -> Self {
        Self { mappings }
    }

    /// Returns the label mapped to `value` of `field`, if any.
    #[must_use]
    pub fn get(&self, field: FieldType, value: &str) -> Option<&LabelAttributes> {
        self.mappings.get(&mapping_key(field, value))
    }

    /// Returns every distinct label the table can produce.
    ///
    /// Used to create the labels on the target tracker before issues are
    /// imported. Labels registered under several keys appear once.
    #[must_use]
    pub fn all_labels(&self) -> BTreeSet<&LabelAttributes> {
        self.mappings.values().collect()
    }

    /// Returns the number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if the table has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelStyle;
    use crate::mapping::LabelMappingsBuilder;

    fn sample_mappings() -> LabelMappings {
        let mut builder = LabelMappingsBuilder::new();
        builder
            .add_mapping(FieldType::IssueType, "Bug", "Bug")
            .unwrap()
            .add_mapping(FieldType::IssueType, "Defect", "Bug")
            .unwrap()
            .add_mapping(FieldType::Component, "Core", "core")
            .unwrap();
        builder.add_mapping_with(FieldType::Label, "docs", "documentation", &LabelStyle::PLAIN);
        builder.build()
    }

    #[test]
    fn get_is_case_insensitive() {
        let mappings = sample_mappings();

        let expected = mappings.get(FieldType::IssueType, "Bug");
        assert!(expected.is_some());
        assert_eq!(mappings.get(FieldType::IssueType, "BUG"), expected);
        assert_eq!(mappings.get(FieldType::IssueType, "bug"), expected);
    }

    #[test]
    fn get_miss_returns_none() {
        let mappings = sample_mappings();

        assert_eq!(mappings.get(FieldType::IssueType, "Epic"), None);
        assert_eq!(mappings.get(FieldType::Status, "Bug"), None);
    }

    #[test]
    fn get_does_not_trim() {
        let mappings = sample_mappings();

        assert_eq!(mappings.get(FieldType::Component, " core"), None);
    }

    #[test]
    fn all_labels_deduplicates_equal_attributes() {
        let mappings = sample_mappings();

        assert_eq!(mappings.len(), 4);
        let names: Vec<_> = mappings
            .all_labels()
            .into_iter()
            .map(LabelAttributes::name)
            .collect();
        assert_eq!(names, ["documentation", "in: core", "type: Bug"]);
    }

    #[test]
    fn all_labels_keeps_labels_differing_only_in_color() {
        let mut builder = LabelMappingsBuilder::new();
        builder
            .add_mapping(FieldType::IssueType, "Bug", "bug")
            .unwrap()
            .add_mapping_with(
                FieldType::IssueType,
                "Defect",
                "bug",
                &LabelStyle::with_prefix("type: "),
            );

        assert_eq!(builder.build().all_labels().len(), 2);
    }

    #[test]
    fn empty_table() {
        let mappings = LabelMappings::default();

        assert!(mappings.is_empty());
        assert!(mappings.all_labels().is_empty());
    }
}
