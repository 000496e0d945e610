//! Utility functions for the CLI.

use dialoguer::Confirm;
use filetime::FileTime;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension given to encoded files.
pub const ENCODED_EXTENSION: &str = "huf";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Default output path for `encode`: `<input>.huf`.
pub fn encoded_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(ENCODED_EXTENSION);
    PathBuf::from(name)
}

/// Default output path for `decode`: strip `.huf`, otherwise append `.out`.
pub fn decoded_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == ENCODED_EXTENSION) {
        return input.with_extension("");
    }
    let mut name = input.as_os_str().to_owned();
    name.push(".out");
    PathBuf::from(name)
}

/// Ask before replacing an existing file. Returns `true` to proceed.
pub fn confirm_overwrite(path: &Path, force: bool) -> io::Result<bool> {
    if force || !path.exists() {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(io::Error::other)
}

/// Write `data` to `path` in one step and copy the source's modification time.
///
/// Data goes to a sibling temporary file first, so a failed write never
/// leaves a truncated output behind.
pub fn write_output(path: &Path, data: &[u8], source: &Path) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    if let Err(e) = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    let metadata = fs::metadata(source)?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(path, mtime)
}

/// Format a space-savings percentage for display.
pub fn format_savings(input_len: u64, output_len: u64) -> String {
    if input_len == 0 {
        return "-".to_string();
    }
    let savings = (1.0 - output_len as f64 / input_len as f64) * 100.0;
    format!("{:.1}%", savings)
}

/// Printable form of a byte for tables.
pub fn display_byte(byte: u8) -> String {
    match byte {
        b'\n' => "\\n".to_string(),
        b'\r' => "\\r".to_string(),
        b'\t' => "\\t".to_string(),
        b' ' => "' '".to_string(),
        0x21..=0x7E => (byte as char).to_string(),
        _ => format!("0x{:02X}", byte),
    }
}
