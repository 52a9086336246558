//! Preview command implementation
//!
//! Rasterizes one character and prints it as `#`/`.` art, each row followed
//! by its packed words.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphpack_backend_bitmap::pack::pack;
use glyphpack_backend_bitmap::{format_words, rasterize, FontResource};
use glyphpack_spec::{BitDepth, PixelGrid};
use std::path::Path;
use std::process::ExitCode;

/// Run the preview command
///
/// # Arguments
/// * `font` - Path to the font file
/// * `ch` - Character to render
/// * `width` - Glyph box width in pixels
/// * `height` - Glyph box height in pixels
/// * `bit_depth` - Packed word size for the word column
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(font: &str, ch: char, width: u32, height: u32, bit_depth: BitDepth) -> Result<ExitCode> {
    let resource = FontResource::load(Path::new(font))
        .with_context(|| format!("Failed to load font: {}", font))?;

    eprintln!(
        "{} {:?} from {} in {}x{}",
        "Preview:".cyan().bold(),
        ch,
        resource.name(),
        width,
        height
    );
    if !resource.has_glyph(ch) {
        eprintln!("  {} font has no glyph for {:?}", "!".yellow(), ch);
    }

    let grid = rasterize(&resource, ch, width, height)
        .with_context(|| format!("Failed to rasterize {:?}", ch))?;
    let words = pack(&grid, bit_depth).context("Failed to pack glyph")?;

    print!("{}", render_preview(&grid, &words_by_row(&grid, bit_depth, &words)));
    Ok(ExitCode::SUCCESS)
}

fn words_by_row(grid: &PixelGrid, bit_depth: BitDepth, words: &[u16]) -> Vec<String> {
    let per_row = bit_depth.words_per_row(grid.width()).max(1);
    words
        .chunks(per_row)
        .map(|chunk| format_words(chunk, bit_depth).join(", "))
        .collect()
}

/// Renders grid rows next to their formatted words.
fn render_preview(grid: &PixelGrid, row_words: &[String]) -> String {
    let art = grid.to_string();
    art.lines()
        .zip(row_words)
        .map(|(line, words)| format!("{}  {}\n", line, words))
        .collect()
}
