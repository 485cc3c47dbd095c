//! Encoder configuration resolution.
//!
//! Priority order: CLI flags > environment variables > defaults. Clap fills
//! flags and environment values; this module applies the defaults and
//! validates the result.

use anyhow::{Context, Result};
use signkit_core::{EncoderConfig, KeyOrder};

use crate::commands::encode::EncodeArgs;

/// Builds the encoder config from parsed arguments.
pub fn resolve_encoder_config(args: &EncodeArgs) -> Result<EncoderConfig> {
    let mut config = EncoderConfig::default();

    if let Some(dir) = &args.secrets_dir {
        config.secrets_dir = dir.clone();
    }
    if let Some(name) = &args.output_name {
        config.output_file_name = name.clone();
    }
    if args.sort_keys {
        config.key_order = KeyOrder::Sorted;
    }

    config.validate().context("Invalid encoder configuration")?;
    Ok(config)
}
