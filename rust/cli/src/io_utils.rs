//! File I/O for round traces.
//!
//! A trace is one JSON array of round records followed by a newline. Traces
//! are read back with any UTF-8 BOM stripped, so files touched by editors
//! that add one still parse.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, TimeZone};
use unosim_engine::logger::RoundRecord;

/// Read a text file, stripping a leading UTF-8 BOM.
///
/// # Example
///
/// ```rust,no_run
/// # use unosim_cli::io_utils::read_text;
/// let content = read_text("Round-20240101_120000.json").unwrap();
/// ```
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Parse a trace file into its round records.
pub fn load_trace(path: &str) -> Result<Vec<RoundRecord>, String> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

/// Write `records` as one JSON array terminated by a newline.
pub fn write_trace(path: &Path, records: &[RoundRecord]) -> std::io::Result<()> {
    ensure_parent_dir(path).map_err(std::io::Error::other)?;
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut w, records)?;
    writeln!(w)?;
    w.flush()
}

/// Default trace file name, `Round-YYYYMMDD_HHMMSS.json`.
pub fn trace_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("Round-{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use unosim_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("traces/2024/Round-20240101_120000.json");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
