//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;
use tracing::warn;

use super::defaults::default_storage_file;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [storage] section
    if let Some(section) = ini.section(Some("storage")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() {
                let fallback = default_storage_file();
                warn!(
                    path = %fallback.display(),
                    "storage.file is empty, using default listing path"
                );
                config.storage.file = fallback;
            } else {
                config.storage.file = expand_tilde(v);
            }
        }
    }

    // [query] section
    if let Some(section) = ini.section(Some("query")) {
        if let Some(v) = section.get("page_size") {
            let invalid = || ConfigFileError::InvalidValue {
                section: "query".to_string(),
                key: "page_size".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer".to_string(),
            };
            let page_size: usize = v.trim().parse().map_err(|_| invalid())?;
            if page_size == 0 {
                return Err(invalid());
            }
            config.query.page_size = page_size;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
