//! Mapping file deserialization.

use crate::config::ConfigError;
use crate::fields::FieldType;
use crate::labels::LabelStyle;
use crate::mapping::{LabelMappings, LabelMappingsBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parsed contents of a mapping file.
///
/// ```toml
/// [[mapping]]
/// field = "issue-type"
/// value = "Bug"
/// label = "Bug"
///
/// [[mapping]]
/// field = "label"
/// value = "help-wanted"
/// label = "help-wanted"
/// style = { color = "008672" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MappingConfig {
    /// Mapping entries, registered in file order.
    #[serde(default, rename = "mapping")]
    pub mappings: Vec<MappingEntry>,
}

/// A single `[[mapping]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MappingEntry {
    /// The issue field the value belongs to.
    pub field: FieldType,

    /// Source field value, matched case-insensitively.
    pub value: String,

    /// Name handed to the label factory.
    pub label: String,

    /// Explicit label style. Falls back to the field's default factory.
    #[serde(default)]
    pub style: Option<LabelStyle>,
}

impl MappingConfig {
    /// Reads and parses a mapping file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, or an
    /// I/O or TOML error if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading mapping file");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses mapping file content. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlError`] if the content is not a valid
    /// mapping file.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Checks that no entry has an empty value or label.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first offending entry.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        for (index, entry) in self.mappings.iter().enumerate() {
            if entry.value.is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: format!("mapping #{} ({}) has an empty value", index + 1, entry.field),
                });
            }

            if entry.label.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: format!(
                        "mapping #{} ({} '{}') has an empty label",
                        index + 1,
                        entry.field,
                        entry.value
                    ),
                });
            }
        }

        Ok(())
    }

    /// Validates and registers every entry, returning the finished mapping
    /// table. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an entry fails
    /// [`validate`][Self::validate], or [`ConfigError::Mapping`] for an entry
    /// whose field has no default factory and that has no `style`.
    pub fn build_mappings(&self, path: &Path) -> Result<LabelMappings, ConfigError> {
        self.validate(path)?;

        let mut builder = LabelMappingsBuilder::new();
        for entry in &self.mappings {
            match &entry.style {
                Some(style) => {
                    builder.add_mapping_with(entry.field, &entry.value, &entry.label, style);
                }
                None => {
                    builder
                        .add_mapping(entry.field, &entry.value, &entry.label)
                        .map_err(|source| ConfigError::Mapping {
                            path: path.display().to_string(),
                            source,
                        })?;
                }
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelAttributes;
    use crate::mapping::MappingError;

    fn parse(content: &str) -> MappingConfig {
        MappingConfig::parse(content, Path::new("mappings.toml")).unwrap()
    }

    #[test]
    fn parses_entries_in_order() {
        let config = parse(
            r#"
[[mapping]]
field = "issue-type"
value = "Bug"
label = "Bug"

[[mapping]]
field = "component"
value = "Core"
label = "core"
style = { prefix = "module: " }
"#,
        );

        assert_eq!(config.mappings.len(), 2);
        assert_eq!(config.mappings[0].field, FieldType::IssueType);
        assert!(config.mappings[0].style.is_none());
        assert_eq!(config.mappings[1].field, FieldType::Component);
        assert_eq!(
            config.mappings[1].style,
            Some(LabelStyle::with_prefix("module: "))
        );
    }

    #[test]
    fn empty_file_has_no_mappings() {
        let config = parse("");

        assert!(config.mappings.is_empty());
        assert!(config
            .build_mappings(Path::new("mappings.toml"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn rejects_unknown_field() {
        let result = MappingConfig::parse(
            r#"
[[mapping]]
field = "assignee"
value = "jdoe"
label = "jdoe"
"#,
            Path::new("mappings.toml"),
        );

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::TomlError { .. }));
        assert!(err
            .to_string()
            .starts_with("Invalid TOML in label mapping file 'mappings.toml'"));
    }

    #[test]
    fn validate_rejects_empty_value() {
        let config = parse(
            r#"
[[mapping]]
field = "status"
value = ""
label = "closed"
"#,
        );

        let result = config.validate(Path::new("mappings.toml"));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn validate_rejects_blank_label() {
        let config = parse(
            r#"
[[mapping]]
field = "status"
value = "Closed"
label = "  "
"#,
        );

        let result = config.validate(Path::new("mappings.toml"));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn build_uses_style_when_given() {
        let config = parse(
            r#"
[[mapping]]
field = "label"
value = "help-wanted"
label = "help-wanted"
style = { color = "008672" }
"#,
        );

        let mappings = config.build_mappings(Path::new("mappings.toml")).unwrap();
        assert_eq!(
            mappings.get(FieldType::Label, "Help-Wanted"),
            Some(&LabelAttributes::new("help-wanted").with_color("008672"))
        );
    }

    #[test]
    fn build_rejects_label_without_style() {
        let config = parse(
            r#"
[[mapping]]
field = "label"
value = "help-wanted"
label = "help-wanted"
"#,
        );

        match config.build_mappings(Path::new("mappings.toml")) {
            Err(ConfigError::Mapping { source, .. }) => assert_eq!(
                source,
                MappingError::NoDefaultLabelFactory {
                    field: FieldType::Label
                }
            ),
            other => panic!("expected a mapping error, got {other:?}"),
        }
    }

    #[test]
    fn build_validates_entries_first() {
        let config = parse(
            r#"
[[mapping]]
field = "status"
value = ""
label = "  "
"#,
        );

        let result = config.build_mappings(Path::new("mappings.toml"));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
