//! Convert command implementation
//!
//! Rasterizes a character range of a TrueType font and prints the C header.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphpack_backend_bitmap::generate_font_table;
use glyphpack_spec::{BitDepth, TtfSource};
use std::process::ExitCode;

use super::json_output::{generate_errors, missing_glyph_warnings, ConvertResult};
use super::reporting::{emit_source, json_failure, json_success};

/// Run the convert command
///
/// # Arguments
/// * `font` - Path to the font file
/// * `width` - Glyph box width in pixels
/// * `height` - Glyph box height in pixels (also the rasterization size)
/// * `bit_depth` - Packed word size
/// * `char_range` - Inclusive character code range
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    font: &str,
    width: u32,
    height: u32,
    bit_depth: BitDepth,
    char_range: [u32; 2],
    json_output: bool,
) -> Result<ExitCode> {
    let params = TtfSource::new(font)
        .with_size(width, height)
        .with_char_range(char_range[0], char_range[1]);

    if json_output {
        return match generate_font_table(&params, bit_depth) {
            Ok(result) => json_success(
                ConvertResult::from(&result),
                missing_glyph_warnings(&result.missing_glyphs),
            ),
            Err(e) => json_failure(generate_errors(&e)),
        };
    }

    eprintln!("{} {}", "Converting:".cyan().bold(), font);
    eprintln!(
        "  {} {}x{}, {}, chars {}..={}",
        "Box:".dimmed(),
        width,
        height,
        bit_depth,
        char_range[0],
        char_range[1]
    );

    let result = generate_font_table(&params, bit_depth)
        .with_context(|| format!("Failed to convert font: {}", font))?;

    emit_source(
        &ConvertResult::from(&result),
        &missing_glyph_warnings(&result.missing_glyphs),
    );
    Ok(ExitCode::SUCCESS)
}
