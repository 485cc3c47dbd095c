//! Encoder configuration.
//!
//! Defaults reproduce the fixed layout CI expects: read `Secrets/` and write
//! `Secrets/certificates.json`. Callers may override each value.

use std::path::{Path, PathBuf};

use crate::encoder::match_filename;
use crate::error::{Result, SecretsError};

/// Default directory scanned for signing files.
pub const DEFAULT_SECRETS_DIR: &str = "Secrets";

/// Default name of the JSON file written inside the secrets directory.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "certificates.json";

/// Order of keys in the written JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Order in which the directory listing returned the files.
    #[default]
    Discovery,
    /// Alphabetical by key name.
    Sorted,
}

/// Settings for a single encoder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Directory containing the signing files.
    pub secrets_dir: PathBuf,
    /// File name of the JSON output, written inside `secrets_dir`.
    pub output_file_name: String,
    /// Key ordering of the output object.
    pub key_order: KeyOrder,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            secrets_dir: PathBuf::from(DEFAULT_SECRETS_DIR),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            key_order: KeyOrder::Discovery,
        }
    }
}

impl EncoderConfig {
    /// Creates a config that reads from `secrets_dir` with default output settings.
    pub fn with_secrets_dir(secrets_dir: impl Into<PathBuf>) -> Self {
        Self {
            secrets_dir: secrets_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the JSON output file.
    pub fn output_path(&self) -> PathBuf {
        self.secrets_dir.join(&self.output_file_name)
    }

    /// Checks the config for values the encoder cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.secrets_dir.as_os_str().is_empty() {
            return Err(SecretsError::Configuration(
                "Secrets directory must not be empty".to_string(),
            ));
        }

        let name = self.output_file_name.as_str();
        if name.is_empty() {
            return Err(SecretsError::Configuration(
                "Output file name must not be empty".to_string(),
            ));
        }

        // Must be a single normal path component, so the output lands inside secrets_dir.
        let mut components = Path::new(name).components();
        let is_plain = matches!(
            (components.next(), components.next()),
            (Some(std::path::Component::Normal(_)), None)
        );
        if !is_plain || name.contains(['/', '\\']) {
            return Err(SecretsError::Configuration(format!(
                "Output file name must be a bare file name, got '{}'",
                name
            )));
        }

        if let Some(key) = match_filename(name) {
            return Err(SecretsError::Configuration(format!(
                "Output file name '{}' would overwrite the {} input",
                name, key
            )));
        }

        Ok(())
    }
}
