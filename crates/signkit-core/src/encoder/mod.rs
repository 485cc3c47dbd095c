//! Certificate encoder.
//!
//! Scans the secrets directory for the files named in the lookup table,
//! base64-encodes each match, and writes the resulting record as JSON:
//! - enumerate the directory's direct children
//! - match each name against [`lookup::CERTIFICATE_FILES`]
//! - encode matched files with the standard padded alphabet
//! - serialize and write the record inside the secrets directory
//!
//! Every failure is returned to the caller. Nothing is retried.

pub mod lookup;
pub mod output;

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::config::{EncoderConfig, KeyOrder};
use crate::error::{Result, SecretsError};
use crate::models::{CertificateKey, CertificatesRecord};

pub use lookup::{filename_for, known_filenames, match_filename, CERTIFICATE_FILES};
pub use output::{serialize, write_output};

/// Outcome of a successful encoder run.
#[derive(Debug, Clone)]
pub struct EncodeSummary {
    /// Path of the JSON file that was written.
    pub output_path: PathBuf,
    /// Keys written, in output order.
    pub keys: Vec<CertificateKey>,
}

/// Lists the names of the direct children of `directory`, in listing order.
///
/// Names that are not valid UTF-8 cannot match the lookup table and are skipped.
pub fn enumerate(directory: &Path) -> Result<Vec<String>> {
    let read_error = |source: std::io::Error| SecretsError::DirectoryRead {
        path: directory.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::debug!(name = ?raw, "Skipping entry with non UTF-8 name");
            }
        }
    }

    Ok(names)
}

/// Reads a file and returns its contents as standard base64.
///
/// An empty file is an error: every published key must carry a payload.
pub fn encode_file(path: &Path) -> Result<String> {
    let data = std::fs::read(path).map_err(|source| SecretsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if data.is_empty() {
        return Err(SecretsError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(BASE64.encode(&data))
}

/// Builds the certificates record for the configured directory.
pub fn build_record(config: &EncoderConfig) -> Result<CertificatesRecord> {
    let mut record = CertificatesRecord::new();

    for filename in enumerate(&config.secrets_dir)? {
        let Some(key) = match_filename(&filename) else {
            tracing::debug!(file = %filename, "Ignoring unrecognized file");
            continue;
        };

        let encoded = encode_file(&config.secrets_dir.join(&filename))?;
        tracing::debug!(file = %filename, key = %key, "Encoded signing file");
        record.insert(key, encoded);
    }

    if config.key_order == KeyOrder::Sorted {
        record.sort_keys();
    }

    Ok(record)
}

/// Runs the whole pipeline and writes the JSON output file.
pub fn encode_certificates(config: &EncoderConfig) -> Result<EncodeSummary> {
    config.validate()?;

    let record = build_record(config)?;
    if record.is_empty() {
        tracing::warn!(
            dir = %config.secrets_dir.display(),
            "No known signing files found"
        );
    }

    let output_path = config.output_path();
    write_output(&output_path, &serialize(&record)?)?;

    Ok(EncodeSummary {
        output_path,
        keys: record.keys().collect(),
    })
}
