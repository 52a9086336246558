//! Input loading for CLI commands: manual grids, character ranges, job files.

use anyhow::{bail, Context, Result};
use glyphpack_spec::{JobSpec, PixelGrid};
use std::fs;
use std::path::Path;

/// Parses a character range argument.
///
/// Accepts `START-END` or a single code, in decimal or `0x` hex
/// (e.g. `32-126`, `0x41-0x5A`, `65`).
pub fn parse_char_range(s: &str) -> Result<[u32; 2], String> {
    let (start, end) = match s.split_once('-') {
        Some((start, end)) => (start, end),
        None => (s, s),
    };
    Ok([parse_code(start)?, parse_code(end)?])
}

fn parse_code(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|_| format!("invalid character code '{}'", s))
}

/// Builds the manual grid from a grid file or inline `--row` values.
///
/// Exactly one of the two sources must be given.
pub fn load_manual_grid(grid_file: Option<&str>, rows: &[String]) -> Result<PixelGrid> {
    let text = match (grid_file, rows.is_empty()) {
        (Some(path), true) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file: {}", path))?,
        (None, false) => rows.join("\n"),
        (Some(_), false) => bail!("Use either --grid or --row, not both"),
        (None, true) => bail!("No pixels given: pass --grid <FILE> or one --row per pixel row"),
    };

    PixelGrid::parse(&text).with_context(|| match grid_file {
        Some(path) => format!("Invalid grid in {}", path),
        None => "Invalid grid rows".to_string(),
    })
}

/// Loads and parses a job file.
pub fn load_job(path: &str) -> Result<JobSpec> {
    JobSpec::load(Path::new(path)).with_context(|| format!("Failed to load job file: {}", path))
}
