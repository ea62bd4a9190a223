//! Byteman CLI
//!
//! Encode and decode integers, text, and hex byte sequences from the
//! command line.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use byteman::ByteOrder;
use clap::Parser;
use colored::*;
use tracing::debug;

use crate::commands::Command;

#[derive(Parser)]
#[command(name = "byteman")]
#[command(about = "Byte order aware integer, text, and hex conversions")]
#[command(long_about = "Byte order aware integer, text, and hex conversions

Examples:
  byteman encode u16 12345              # 3039
  byteman -o le encode u16 12345        # 3930
  byteman decode u32 499602d2           # 1234567890
  byteman decode --strict u16 01        # error: wrong length
  byteman string foo --size -1          # 666f
  byteman resize 666f6f 4               # 666f6f00
  byteman concat 666f 6f                # 666f6f

Configuration is read from byteman.toml and BYTEMAN_* environment variables.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: ./byteman.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Byte order: be, le, big_endian, little_endian, ABCD, DCBA
    #[arg(short = 'o', long = "order", global = true)]
    byte_order: Option<ByteOrder>,

    /// Print hex output in uppercase
    #[arg(short = 'u', long = "upper", global = true)]
    uppercase_hex: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    logging::init_logging(cli.verbose, !cli.no_color);

    let mut config = config::load_config(cli.config_path.as_deref())?;

    // Override with CLI arguments if provided
    if let Some(order) = cli.byte_order {
        config.byte_order = order;
    }
    if cli.uppercase_hex {
        config.uppercase_hex = true;
    }
    debug!("Effective configuration: {:?}", config);

    match commands::run(&cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        },
        Err(e) => {
            eprintln!("{} {:#}", "error:".bright_red().bold(), e);
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use byteman::NumericKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_string_size() {
        let cli = parse(&["byteman", "string", "foo", "--size", "-1"]);
        let Command::Text { text, size } = cli.command else {
            panic!("expected string command");
        };
        assert_eq!(text, "foo");
        assert_eq!(size, -1);
    }

    #[test]
    fn test_negative_resize_size() {
        let cli = parse(&["byteman", "resize", "666f6f", "-1"]);
        let Command::Resize { hex, size } = cli.command else {
            panic!("expected resize command");
        };
        assert_eq!(hex, "666f6f");
        assert_eq!(size, -1);
    }

    #[test]
    fn test_negative_encode_value() {
        let cli = parse(&["byteman", "encode", "i8", "-1"]);
        let Command::Encode { kind, value } = cli.command else {
            panic!("expected encode command");
        };
        assert_eq!(kind, NumericKind::I8);
        assert_eq!(value, "-1");
    }

    #[test]
    fn test_global_byte_order() {
        let cli = parse(&["byteman", "-o", "DCBA", "decode", "int", "fffffffe"]);
        assert_eq!(cli.byte_order, Some(ByteOrder::LittleEndian));
        let Command::Decode { kind, hex, strict } = cli.command else {
            panic!("expected decode command");
        };
        assert_eq!(kind, NumericKind::Int);
        assert_eq!(hex, "fffffffe");
        assert!(!strict);

        assert!(Cli::try_parse_from(["byteman", "-o", "CDAB", "info"]).is_err());
    }
}
