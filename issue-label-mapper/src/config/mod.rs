//! Mapping file loading.
//!
//! Label mappings are usually declared in a TOML file rather than registered
//! by hand. Each `[[mapping]]` entry maps one value of one issue field to a
//! label, optionally with an explicit [`LabelStyle`][crate::LabelStyle].

mod error;
mod mapping_file;

pub use error::ConfigError;
pub use mapping_file::{MappingConfig, MappingEntry};

use crate::mapping::LabelMappings;
use std::path::Path;
use tracing::info;

/// Loads, validates and registers a mapping file.
///
/// # Arguments
///
/// * `path` - Path to the TOML mapping file
///
/// # Returns
///
/// The read-only mapping table. Loading is all-or-nothing: no table is
/// returned if any entry is invalid.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, malformed,
/// fails validation, or maps a free-form label without a `style`.
pub fn load_mappings(path: &Path) -> Result<LabelMappings, ConfigError> {
    info!(path = %path.display(), "Loading label mappings");

    let config = MappingConfig::load(path)?;
    let mappings = config.build_mappings(path)?;

    info!(
        entries = config.mappings.len(),
        mappings = mappings.len(),
        labels = mappings.all_labels().len(),
        "Loaded label mappings"
    );
    Ok(mappings)
}
