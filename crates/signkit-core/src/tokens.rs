//! Build-time token file.
//!
//! Writes the API tokens the app reads at build time to a JSON file. The
//! parent directory is expected to exist already.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoder::{serialize, write_output};
use crate::error::Result;

/// Default location of the generated tokens file.
pub const DEFAULT_TOKENS_PATH: &str = "Tasktive/Resources/Tokens.json";

/// Tokens written to the tokens file. A missing token is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensFile {
    pub github_token: Option<String>,
}

impl TokensFile {
    pub fn new(github_token: Option<String>) -> Self {
        Self { github_token }
    }
}

/// Serializes `tokens` as pretty JSON and writes it to `path`.
pub fn write_tokens_file(path: &Path, tokens: &TokensFile) -> Result<()> {
    write_output(path, &serialize(tokens)?)
}
