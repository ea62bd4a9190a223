//! Command handlers
//!
//! Each handler returns the text to print on stdout.

use anyhow::{bail, Context, Result};
use byteman::{
    combine, decode_kind, encode, from_string, parse_hex, resize, try_decode_kind, ByteOrder,
    NativeWidth, NumericKind,
};
use clap::Subcommand;
use tracing::debug;

use crate::config::CliConfig;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a number into hex bytes
    Encode {
        /// Numeric kind: u8, u16, u32, u64, uint, i8, i16, i32, i64, int
        kind: NumericKind,

        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Decode hex bytes into a number
    Decode {
        /// Numeric kind: u8, u16, u32, u64, uint, i8, i16, i32, i64, int
        kind: NumericKind,

        /// Hex digits, e.g. 499602d2
        hex: String,

        /// Fail on wrong-length input instead of printing 0
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the bytes of a text string as hex
    #[command(name = "string")]
    Text {
        /// Text to convert
        text: String,

        /// Resize: 0 keeps, >0 truncates or zero-pads, <0 trims from the end
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        size: isize,
    },

    /// Resize hex bytes
    Resize {
        /// Hex digits
        hex: String,

        /// 0 keeps, >0 truncates or zero-pads, <0 trims from the end
        #[arg(allow_negative_numbers = true)]
        size: isize,
    },

    /// Concatenate hex byte sequences
    Concat {
        /// Hex digit sequences
        hex: Vec<String>,
    },

    /// Show native width and effective configuration
    Info,
}

/// Largest positive `--size` / `<size>` accepted (16 MiB)
pub const MAX_SIZE: isize = 16 * 1024 * 1024;

fn check_size(size: isize) -> Result<isize> {
    if size > MAX_SIZE {
        bail!("Size {} exceeds the maximum of {} bytes", size, MAX_SIZE);
    }
    Ok(size)
}

fn decode_hex_arg(hex: &str) -> Result<Vec<u8>> {
    parse_hex(hex, 0).with_context(|| format!("Invalid hex input: {:?}", hex))
}

pub fn run(command: &Command, config: &CliConfig) -> Result<String> {
    let order = config.byte_order;

    match command {
        Command::Encode { kind, value } => {
            let value = kind.parse_value(value)?;
            let bytes = encode(value, order);
            debug!(kind = %kind, len = bytes.len(), "Encoded value with {}", order);
            Ok(config.format_hex(&bytes))
        },
        Command::Decode { kind, hex, strict } => {
            let bytes = decode_hex_arg(hex)?;
            let value = if *strict || config.strict_decode {
                try_decode_kind(*kind, &bytes, order)
                    .with_context(|| format!("Cannot decode {} from {} bytes", kind, bytes.len()))?
            } else {
                decode_kind(*kind, &bytes, order)
            };
            debug!(kind = %kind, len = bytes.len(), "Decoded value with {}", order);
            Ok(value.to_string())
        },
        Command::Text { text, size } => {
            let size = check_size(*size)?;
            Ok(config.format_hex(&from_string(text, size)))
        },
        Command::Resize { hex, size } => {
            let size = check_size(*size)?;
            let bytes = decode_hex_arg(hex)?;
            Ok(config.format_hex(&resize(&bytes, size)))
        },
        Command::Concat { hex } => {
            let parts = hex
                .iter()
                .map(|h| decode_hex_arg(h))
                .collect::<Result<Vec<_>>>()?;
            let slices: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
            Ok(config.format_hex(&combine(&slices)))
        },
        Command::Info => Ok(format!(
            "native width: {}\nhost byte order: {}\nbyte order: {}\nuppercase hex: {}\nstrict decode: {}",
            NativeWidth::HOST,
            ByteOrder::host(),
            order,
            config.uppercase_hex,
            config.strict_decode
        )),
    }
}
