//! Data-described label factories.

use super::{LabelAttributes, LabelFactory};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A label factory described by data: the label name is `prefix` followed by
/// the requested name, and the color and description are copied as-is.
///
/// Styles can be written inline in a mapping file:
///
/// ```toml
/// style = { prefix = "theme: ", color = "0e8a16" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LabelStyle {
    /// Prepended to every label name.
    #[serde(default)]
    pub prefix: Cow<'static, str>,

    /// Label color (hex, without the leading `#`).
    #[serde(default)]
    pub color: Option<Cow<'static, str>>,

    /// Label description.
    #[serde(default)]
    pub description: Option<Cow<'static, str>>,
}

impl LabelStyle {
    /// `type: {name}` labels, used for issue types and versions.
    pub const TYPE: LabelStyle = LabelStyle::preset("type: ", "e3d9fc");

    /// `status: {name}` labels, used for statuses and resolutions.
    pub const STATUS: LabelStyle = LabelStyle::preset("status: ", "fef2c0");

    /// `in: {name}` labels, used for components.
    pub const IN: LabelStyle = LabelStyle::preset("in: ", "e8f9de");

    /// `priority: {name}` labels.
    pub const PRIORITY: LabelStyle = LabelStyle::preset("priority: ", "e99695");

    /// Identity labels: the name is used verbatim, no color.
    pub const PLAIN: LabelStyle = LabelStyle {
        prefix: Cow::Borrowed(""),
        color: None,
        description: None,
    };

    const fn preset(prefix: &'static str, color: &'static str) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
            color: Some(Cow::Borrowed(color)),
            description: None,
        }
    }

    /// Creates a style with the given name prefix and no color.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Cow::Owned(prefix.into()),
            ..Self::PLAIN
        }
    }

    /// Sets the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Cow::Owned(color.into()));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Cow::Owned(description.into()));
        self
    }
}

impl LabelFactory for LabelStyle {
    fn create(&self, name: &str) -> LabelAttributes {
        let mut label = LabelAttributes::new(format!("{}{name}", self.prefix));
        if let Some(color) = &self.color {
            label = label.with_color(color.as_ref());
        }
        if let Some(description) = &self.description {
            label = label.with_description(description.as_ref());
        }
        label
    }
}
