//! Certificate encoding, the default command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{builder::FalseyValueParser, Args};
use signkit_core::encoder::encode_certificates;

use crate::config::resolve_encoder_config;
use crate::output::print_success;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Directory containing the signing files [default: Secrets]
    #[arg(long, env = "SIGNKIT_SECRETS_DIR")]
    pub secrets_dir: Option<PathBuf>,

    /// File name of the JSON output, written inside the secrets directory [default: certificates.json]
    #[arg(long, env = "SIGNKIT_OUTPUT_NAME")]
    pub output_name: Option<String>,

    /// Write keys in alphabetical order instead of directory listing order
    #[arg(long, env = "SIGNKIT_SORT_KEYS", value_parser = FalseyValueParser::new())]
    pub sort_keys: bool,
}

pub fn handle_encode_command(args: &EncodeArgs) -> Result<()> {
    let config = resolve_encoder_config(args)?;

    let summary = encode_certificates(&config).with_context(|| {
        format!(
            "Failed to encode certificates in {}",
            config.secrets_dir.display()
        )
    })?;

    tracing::debug!(
        path = %summary.output_path.display(),
        keys = summary.keys.len(),
        "Encoding finished"
    );

    print_success("done encoding certificates ✨✨✨");
    Ok(())
}
