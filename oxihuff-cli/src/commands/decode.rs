//! Decode command implementation.

use super::BodyArg;
use crate::utils::{confirm_overwrite, decoded_path, write_output};
use oxihuff::{CodecConfig, HuffmanDecoder};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn cmd_decode(
    input: &Path,
    output: Option<&PathBuf>,
    body: BodyArg,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.cloned().unwrap_or_else(|| decoded_path(input));

    if !confirm_overwrite(&output, force)? {
        println!("Skipped {}", output.display());
        return Ok(());
    }

    let data = std::fs::read(input)?;
    let decoder = HuffmanDecoder::new(CodecConfig::new().with_body(body.into()));
    let decoded = decoder.decode(&data)?;
    write_output(&output, &decoded, input)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        body = %decoder.config().body,
        "wrote decoded file"
    );

    println!("Decoded: {} -> {}", input.display(), output.display());
    println!("  Encoded size: {} bytes", data.len());
    println!("  Decoded size: {} bytes", decoded.len());

    Ok(())
}
