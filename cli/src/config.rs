//! Flag table loading.
//!
//! Tables are YAML when the file ends in `.yml` or `.yaml`, JSON otherwise:
//!
//! ```yaml
//! flags:
//!   - name: foo
//!     short: f
//!     aliases: [foozie]
//!   - name: bar
//!     short: b
//!     boolean: true
//! ```

use std::fs;
use std::path::Path;

use argscan_core::FlagTable;
use tracing::debug;

use crate::error::CliError;

/// Reads a flag table from `path`.
pub fn load_flag_table(path: &Path) -> Result<FlagTable, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: FlagTable = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml" | "yaml") => serde_yaml::from_str(&raw)?,
        _ => serde_json::from_str(&raw)?,
    };
    debug!(path = %path.display(), flags = table.flags.len(), "Loaded flag table");
    Ok(table)
}
