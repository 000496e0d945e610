//! OxiHuff CLI - The Oxidized Huffman Coder
//!
//! Encodes and decodes files with a deterministic Huffman tree and a
//! human-readable frequency header.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{BodyArg, cmd_decode, cmd_encode, cmd_info, cmd_test, encode::EncodeOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(
    author,
    version,
    about = "The Oxidized Huffman Coder - Pure Rust Huffman compression"
)]
#[command(long_about = "
OxiHuff encodes files with a canonical Huffman tree rebuilt from a textual
frequency header. Bodies are written as ASCII '0'/'1' by default; use
--body packed for real compression. The same --body must be given when
decoding.

Examples:
  oxihuff encode notes.txt
  oxihuff encode notes.txt --body packed --verify
  oxihuff decode notes.txt.huf
  oxihuff info notes.txt.huf
  oxihuff test *.txt
  oxihuff test --no-progress --body packed *.bin
  oxihuff completions bash
")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file
    #[command(alias = "e")]
    Encode {
        /// File to encode
        input: PathBuf,

        /// Output file (default: <input>.huf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Body format
        #[arg(short, long, value_enum, default_value_t = BodyArg::Text)]
        body: BodyArg,

        /// Decode the result again and compare before writing
        #[arg(long)]
        verify: bool,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,

        /// Output statistics as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a file
    #[command(alias = "d")]
    Decode {
        /// File to decode
        input: PathBuf,

        /// Output file (default: input without .huf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Body format the file was encoded with
        #[arg(short, long, value_enum, default_value_t = BodyArg::Text)]
        body: BodyArg,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Show header statistics and codes of an encoded file
    #[command(alias = "i")]
    Info {
        /// Encoded file
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Number of most frequent bytes to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Round-trip files through the codec without writing output
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Body format
        #[arg(short, long, value_enum, default_value_t = BodyArg::Text)]
        body: BodyArg,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            body,
            verify,
            force,
            json,
        } => cmd_encode(
            &input,
            &EncodeOptions {
                output,
                body,
                verify,
                force,
                json,
            },
        ),
        Commands::Decode {
            input,
            output,
            body,
            force,
        } => cmd_decode(&input, output.as_ref(), body, force),
        Commands::Info { file, json, top } => cmd_info(&file, json, top),
        Commands::Test {
            files,
            body,
            no_progress,
        } => cmd_test(&files, body, !no_progress),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxihuff", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from(["oxihuff", "encode", "in.txt", "--body", "packed", "-f"])
            .unwrap();
        match cli.command {
            Commands::Encode {
                input, body, force, ..
            } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert_eq!(body, BodyArg::Packed);
                assert!(force);
            }
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_parse_decode_defaults() {
        let cli = Cli::try_parse_from(["oxihuff", "-v", "d", "in.txt.huf"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Decode { body, output, .. } => {
                assert_eq!(body, BodyArg::Text);
                assert!(output.is_none());
            }
            _ => panic!("expected decode"),
        }
    }

    #[test]
    fn test_parse_test_progress() {
        let cli = Cli::try_parse_from(["oxihuff", "test", "a"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Test {
                no_progress: false,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["oxihuff", "test", "a", "--no-progress"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Test {
                no_progress: true,
                ..
            }
        ));
    }

    #[test]
    fn test_test_requires_files() {
        assert!(Cli::try_parse_from(["oxihuff", "test"]).is_err());
    }
}
