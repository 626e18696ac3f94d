//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[storage]
; Platform listing read by `update` and `platforms`.
; One platform per line: "Name: /loc1, /loc2"
file = {}

[query]
; Platforms per page (default: 10, minimum: 1)
page_size = {}

[logging]
; Log file path. Verbosity is controlled with RUST_LOG (default: info)
file = {}
"#,
        path_to_string(&config.storage.file),
        config.query.page_size,
        path_to_string(&config.logging.file),
    )
}

/// Render a path, collapsing the home directory back to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
