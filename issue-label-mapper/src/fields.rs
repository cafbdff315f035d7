//! Source issue fields that can be mapped to labels.

use crate::labels::LabelStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

static TYPE_LABEL: LabelStyle = LabelStyle::TYPE;
static STATUS_LABEL: LabelStyle = LabelStyle::STATUS;
static IN_LABEL: LabelStyle = LabelStyle::IN;
static PRIORITY_LABEL: LabelStyle = LabelStyle::PRIORITY;

/// Issue fields for which label mappings can be registered.
///
/// In mapping files the fields are spelled in kebab-case (`issue-type`,
/// `component`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Issue type, e.g. "Bug" or "New Feature".
    IssueType,
    /// Resolution, e.g. "Won't Fix".
    Resolution,
    /// Workflow status, e.g. "Waiting for Feedback".
    Status,
    /// Each of the issue's components.
    Component,
    /// Priority, e.g. "Blocker".
    Priority,
    /// The issue's fix version.
    Version,
    /// Each of the issue's free-form labels.
    Label,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [FieldType; 7] = [
        FieldType::IssueType,
        FieldType::Resolution,
        FieldType::Status,
        FieldType::Component,
        FieldType::Priority,
        FieldType::Version,
        FieldType::Label,
    ];

    /// Returns the label factory used when a mapping does not supply one.
    ///
    /// Free-form labels have no default and always need an explicit factory.
    #[must_use]
    pub fn default_label_factory(self) -> Option<&'static LabelStyle> {
        match self {
            Self::IssueType | Self::Version => Some(&TYPE_LABEL),
            Self::Resolution | Self::Status => Some(&STATUS_LABEL),
            Self::Component => Some(&IN_LABEL),
            Self::Priority => Some(&PRIORITY_LABEL),
            Self::Label => None,
        }
    }

    /// Returns the tag used to prefix mapping keys, e.g. `ISSUE_TYPE`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IssueType => "ISSUE_TYPE",
            Self::Resolution => "RESOLUTION",
            Self::Status => "STATUS",
            Self::Component => "COMPONENT",
            Self::Priority => "PRIORITY",
            Self::Version => "VERSION",
            Self::Label => "LABEL",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
