//! Info command implementation.

use crate::utils::display_byte;
use oxihuff::{CodeTable, build_tree, decode_header};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct SymbolInfo {
    byte: u8,
    count: u64,
    code: String,
}

#[derive(Serialize)]
struct InfoReport<'a> {
    file: &'a Path,
    file_size: u64,
    header_len: u64,
    body_len: u64,
    total_bytes: u64,
    distinct_symbols: usize,
    max_code_len: usize,
    encoded_bits: u64,
    symbols: Vec<SymbolInfo>,
}

/// Header line length in bytes, newline excluded.
fn header_len(data: &[u8]) -> u64 {
    data.iter()
        .position(|&b| b == b'\n')
        .unwrap_or(data.len()) as u64
}

pub fn cmd_info(file: &Path, json: bool, top: usize) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let (frequencies, body) = decode_header(&data)?;
    let tree = build_tree(&frequencies);
    let codes = CodeTable::from_tree(tree.as_ref());

    let mut symbols: Vec<SymbolInfo> = frequencies
        .iter_nonzero()
        .map(|(byte, count)| SymbolInfo {
            byte,
            count,
            code: codes.get(byte).to_string(),
        })
        .collect();
    symbols.sort_by(|a, b| b.count.cmp(&a.count).then(a.byte.cmp(&b.byte)));

    let body_len = body.len() as u64;
    let report = InfoReport {
        file,
        file_size: data.len() as u64,
        header_len: header_len(&data),
        body_len,
        total_bytes: frequencies.total(),
        distinct_symbols: frequencies.distinct(),
        max_code_len: codes.max_len(),
        encoded_bits: codes.encoded_bits(&frequencies),
        symbols,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", file.display());
    println!("Size: {} bytes", report.file_size);
    println!("Header: {} bytes", report.header_len);
    println!("Body: {} bytes", report.body_len);
    println!();
    println!("Contents:");
    println!("  Decoded size: {} bytes", report.total_bytes);
    println!("  Distinct bytes: {}", report.distinct_symbols);
    println!("  Longest code: {} bits", report.max_code_len);
    println!("  Code bits: {}", report.encoded_bits);

    if !report.symbols.is_empty() && top > 0 {
        println!();
        println!("{:>6}  {:>12}  Code", "Byte", "Count");
        println!("{}", "-".repeat(40));
        for symbol in report.symbols.iter().take(top) {
            println!(
                "{:>6}  {:>12}  {}",
                display_byte(symbol.byte),
                symbol.count,
                symbol.code
            );
        }
        if report.symbols.len() > top {
            println!("  ... {} more", report.symbols.len() - top);
        }
    }

    Ok(())
}
