//! The issue fields label derivation reads.

mod jira;

pub use jira::{JiraFields, JiraIssue, NamedValue};

/// Read-only view of the issue fields that can be mapped to labels.
///
/// Every field is optional. List-valued fields must iterate in a stable
/// order, since that order determines the order of the derived labels.
pub trait IssueFields {
    /// Name of the issue type.
    fn issue_type(&self) -> Option<&str>;

    /// Name of the resolution.
    fn resolution(&self) -> Option<&str>;

    /// Name of the workflow status.
    fn status(&self) -> Option<&str>;

    /// Names of the issue's components.
    fn components(&self) -> impl Iterator<Item = &str>;

    /// Name of the fix version.
    fn fix_version(&self) -> Option<&str>;

    /// Free-form labels.
    fn labels(&self) -> impl Iterator<Item = &str>;

    /// Name of the priority.
    fn priority(&self) -> Option<&str>;
}
