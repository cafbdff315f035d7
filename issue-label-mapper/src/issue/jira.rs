//! Jira issue model.

use super::IssueFields;
use serde::{Deserialize, Serialize};

/// A Jira issue as returned by the REST API (`/rest/api/2/issue/{key}`).
///
/// Only the fields relevant to label mapping are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraIssue {
    /// Issue key, e.g. "SPR-1234".
    pub key: String,

    /// Issue fields.
    #[serde(default)]
    pub fields: JiraFields,
}

/// The `fields` object of a Jira issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraFields {
    pub issuetype: Option<NamedValue>,
    pub resolution: Option<NamedValue>,
    pub status: Option<NamedValue>,
    pub components: Option<Vec<NamedValue>>,
    pub fix_versions: Option<Vec<NamedValue>>,
    pub labels: Option<Vec<String>>,
    pub priority: Option<NamedValue>,
}

/// Any Jira object identified by name (issue type, status, component, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
}

impl NamedValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl JiraIssue {
    /// Creates an issue with no fields set.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: JiraFields::default(),
        }
    }
}

impl IssueFields for JiraIssue {
    fn issue_type(&self) -> Option<&str> {
        name_of(&self.fields.issuetype)
    }

    fn resolution(&self) -> Option<&str> {
        name_of(&self.fields.resolution)
    }

    fn status(&self) -> Option<&str> {
        name_of(&self.fields.status)
    }

    fn components(&self) -> impl Iterator<Item = &str> {
        self.fields
            .components
            .iter()
            .flatten()
            .map(|component| component.name.as_str())
    }

    /// The first of the issue's fix versions.
    fn fix_version(&self) -> Option<&str> {
        self.fields
            .fix_versions
            .as_ref()
            .and_then(|versions| versions.first())
            .map(|version| version.name.as_str())
    }

    fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.labels.iter().flatten().map(String::as_str)
    }

    fn priority(&self) -> Option<&str> {
        name_of(&self.fields.priority)
    }
}

fn name_of(value: &Option<NamedValue>) -> Option<&str> {
    value.as_ref().map(|value| value.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_rest_payload() {
        let issue: JiraIssue = serde_json::from_value(json!({
            "id": "10001",
            "key": "SPR-1",
            "fields": {
                "summary": "NPE in bean factory",
                "issuetype": { "id": "1", "name": "Bug" },
                "status": { "id": "6", "name": "Closed" },
                "resolution": null,
                "components": [{ "name": "Core" }, { "name": "Web" }],
                "fixVersions": [{ "name": "5.0 GA" }, { "name": "4.3.9" }],
                "labels": ["regression"],
                "priority": { "name": "Major" }
            }
        }))
        .unwrap();

        assert_eq!(issue.key, "SPR-1");
        assert_eq!(issue.issue_type(), Some("Bug"));
        assert_eq!(issue.status(), Some("Closed"));
        assert_eq!(issue.resolution(), None);
        assert_eq!(issue.components().collect::<Vec<_>>(), ["Core", "Web"]);
        assert_eq!(issue.fix_version(), Some("5.0 GA"));
        assert_eq!(issue.labels().collect::<Vec<_>>(), ["regression"]);
        assert_eq!(issue.priority(), Some("Major"));
    }

    #[test]
    fn missing_fields_are_absent() {
        let issue: JiraIssue = serde_json::from_value(json!({ "key": "SPR-2" })).unwrap();

        assert_eq!(issue.issue_type(), None);
        assert_eq!(issue.components().count(), 0);
        assert_eq!(issue.fix_version(), None);
        assert_eq!(issue.labels().count(), 0);
    }

    #[test]
    fn empty_fix_versions_have_no_fix_version() {
        let mut issue = JiraIssue::new("SPR-3");
        issue.fields.fix_versions = Some(Vec::new());

        assert_eq!(issue.fix_version(), None);
    }
}
