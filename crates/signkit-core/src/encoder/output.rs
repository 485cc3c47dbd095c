//! JSON serialization and output writing.

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SecretsError};

/// Serializes a value as 2-space indented JSON.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Creates or truncates `path` and writes `text` to it.
///
/// The write is not atomic: a failure part way can leave a truncated file.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| SecretsError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = text.len(), "Wrote output file");
    Ok(())
}
