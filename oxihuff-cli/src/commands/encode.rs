//! Encode command implementation.

use super::BodyArg;
use crate::utils::{confirm_overwrite, encoded_path, format_savings, write_output};
use oxihuff::{CodecConfig, HuffmanEncoder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for the encode command.
pub struct EncodeOptions {
    pub output: Option<PathBuf>,
    pub body: BodyArg,
    pub verify: bool,
    pub force: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    input: &'a Path,
    output: &'a Path,
    #[serde(flatten)]
    stats: oxihuff::EncodeStats,
    space_savings: f64,
}

pub fn cmd_encode(input: &Path, options: &EncodeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| encoded_path(input));

    if !confirm_overwrite(&output, options.force)? {
        println!("Skipped {}", output.display());
        return Ok(());
    }

    let data = std::fs::read(input)?;
    let config = CodecConfig::new()
        .with_body(options.body.into())
        .with_verify(options.verify);
    let (encoded, stats) = HuffmanEncoder::new(config).encode_with_stats(&data)?;
    write_output(&output, &encoded, input)?;
    info!(input = %input.display(), output = %output.display(), "wrote encoded file");

    if options.json {
        let report = EncodeReport {
            input,
            output: &output,
            stats,
            space_savings: stats.space_savings(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Encoded: {} -> {}", input.display(), output.display());
    println!("  Body format: {}", stats.body);
    println!("  Distinct bytes: {}", stats.distinct_symbols);
    println!("  Input size: {} bytes", stats.input_len);
    println!(
        "  Output size: {} bytes (header {} bytes)",
        stats.output_len, stats.header_len
    );
    println!("  Bits per byte: {:.3}", stats.bits_per_symbol());
    println!(
        "  Space savings: {}",
        format_savings(stats.input_len, stats.output_len)
    );
    if options.verify {
        println!("  Verified: OK");
    }

    Ok(())
}
