//! Derivation of an issue's labels from the mapping table.

use super::LabelMappings;
use crate::fields::FieldType;
use crate::issue::IssueFields;
use indexmap::IndexSet;
use tracing::trace;

/// Ordered, duplicate-free label names derived for one issue.
pub type LabelNames = IndexSet<String>;

impl LabelMappings {
    /// Returns the names of the labels that apply to `issue`.
    ///
    /// Fields are visited in a fixed order: issue type, resolution, status,
    /// components, fix version, free-form labels, priority. Names appear in
    /// the order they are first found; later duplicates are dropped. Fields
    /// that are absent or have no mapping contribute nothing.
    #[must_use]
    pub fn labels_for(&self, issue: &impl IssueFields) -> LabelNames {
        let mut labels = LabelNames::new();

        self.add_label(&mut labels, FieldType::IssueType, issue.issue_type());
        self.add_label(&mut labels, FieldType::Resolution, issue.resolution());
        self.add_label(&mut labels, FieldType::Status, issue.status());
        for component in issue.components() {
            self.add_label(&mut labels, FieldType::Component, Some(component));
        }
        self.add_label(&mut labels, FieldType::Version, issue.fix_version());
        for label in issue.labels() {
            self.add_label(&mut labels, FieldType::Label, Some(label));
        }
        self.add_label(&mut labels, FieldType::Priority, issue.priority());

        labels
    }

    fn add_label(&self, labels: &mut LabelNames, field: FieldType, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };

        match self.get(field, value) {
            Some(label) => {
                if !labels.contains(label.name()) {
                    labels.insert(label.name().to_string());
                }
            }
            None => trace!(%field, value, "No label mapping"),
        }
    }
}
