//! `signkit tokens` writes the build-time tokens file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use signkit_core::tokens::{write_tokens_file, TokensFile, DEFAULT_TOKENS_PATH};

use crate::output::print_success;

#[derive(Args, Debug)]
pub struct TokensArgs {
    /// GitHub token to embed in the app
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path of the tokens file
    #[arg(long, default_value = DEFAULT_TOKENS_PATH)]
    pub output: PathBuf,
}

pub fn handle_tokens_command(args: &TokensArgs) -> Result<()> {
    if args.github_token.is_none() {
        tracing::warn!("No GitHub token given, writing null");
    }

    let tokens = TokensFile::new(args.github_token.clone());
    write_tokens_file(&args.output, &tokens)
        .with_context(|| format!("Failed to create tokens file {}", args.output.display()))?;

    print_success("successfully created tokens file ✨");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_tokens_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = TokensArgs {
            github_token: Some("ghp_example".to_string()),
            output: dir.path().join("Tokens.json"),
        };

        handle_tokens_command(&args).unwrap();

        let content = std::fs::read_to_string(&args.output).unwrap();
        assert!(content.contains("\"github_token\": \"ghp_example\""));
    }

    #[test]
    fn test_handle_tokens_command_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let args = TokensArgs {
            github_token: None,
            output: dir.path().join("Tasktive/Resources/Tokens.json"),
        };

        let result = handle_tokens_command(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to create tokens file"));
    }
}
