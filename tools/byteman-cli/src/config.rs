//! CLI configuration
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables (`BYTEMAN_*`)
//! 3. Config file (`byteman.toml`, or `--config PATH`)
//! 4. Default values

use std::path::Path;

use anyhow::{bail, Context, Result};
use byteman::ByteOrder;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "byteman.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "BYTEMAN_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Byte order used by encode/decode
    pub byte_order: ByteOrder,
    /// Print hex output in uppercase
    pub uppercase_hex: bool,
    /// Reject wrong-length input instead of decoding it as zero
    pub strict_decode: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            uppercase_hex: false,
            strict_decode: false,
        }
    }
}

impl CliConfig {
    pub fn format_hex(&self, bytes: &[u8]) -> String {
        if self.uppercase_hex {
            byteman::to_hex_upper(bytes)
        } else {
            byteman::to_hex(bytes)
        }
    }
}

/// Load configuration from defaults, the config file, and the environment
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path
        },
        None => Path::new(DEFAULT_CONFIG_FILE),
    };

    Figment::from(Serialized::defaults(CliConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .with_context(|| {
            format!(
                "Failed to load configuration from {} / {}* environment",
                file.display(),
                ENV_PREFIX
            )
        })
}
