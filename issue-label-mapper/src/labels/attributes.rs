//! Label attribute records.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Key under which the label name is stored.
pub const NAME_KEY: &str = "name";

/// Key under which the label color is stored.
pub const COLOR_KEY: &str = "color";

/// Key under which the label description is stored.
pub const DESCRIPTION_KEY: &str = "description";

/// The attributes of a label on the target tracker.
///
/// Always carries a `name`. Factories may add a `color`, a `description` or any
/// other string attribute the target tracker understands. Two records are equal
/// when all of their attributes are equal.
///
/// Records order by name first.
///
/// Serializes as a flat JSON object, e.g. `{"color":"e3d9fc","name":"type: Bug"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LabelAttributes(BTreeMap<String, String>);

impl LabelAttributes {
    /// Creates a record holding only a name.
    pub fn new(name: impl Into<String>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(NAME_KEY.to_string(), name.into());
        Self(attributes)
    }

    /// Sets the label color (hex, without the leading `#`).
    #[must_use]
    pub fn with_color(self, color: impl Into<String>) -> Self {
        self.with_attribute(COLOR_KEY, color)
    }

    /// Sets the label description.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_attribute(DESCRIPTION_KEY, description)
    }

    /// Sets an arbitrary attribute, replacing any previous value.
    ///
    /// Setting [`NAME_KEY`] renames the label.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the label name.
    pub fn name(&self) -> &str {
        self.get(NAME_KEY).unwrap_or_default()
    }

    /// Returns the label color, if set.
    pub fn color(&self) -> Option<&str> {
        self.get(COLOR_KEY)
    }

    /// Returns the label description, if set.
    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION_KEY)
    }

    /// Returns an attribute by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl Ord for LabelAttributes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for LabelAttributes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
