//! Manual command implementation
//!
//! Packs a hand-drawn character and prints its array declaration.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use glyphpack_backend_bitmap::generate_manual_char;
use glyphpack_spec::{validate_dimension, BitDepth, PixelGrid};
use std::process::ExitCode;

use crate::input::load_manual_grid;

use super::json_output::{generate_errors, input_error, ConvertResult};
use super::reporting::{emit_source, json_failure, json_success};

/// Run the manual command
///
/// # Arguments
/// * `grid_file` - Grid text file (one line per row)
/// * `rows` - Inline rows, used when no grid file is given
/// * `bit_depth` - Packed word size
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    grid_file: Option<&str>,
    rows: &[String],
    bit_depth: BitDepth,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        let grid = match load_manual_grid(grid_file, rows) {
            Ok(grid) => grid,
            Err(e) => {
                let mut error = input_error(&e);
                if let Some(path) = grid_file {
                    error = error.with_file(path);
                }
                return json_failure(vec![error]);
            }
        };
        return match generate_manual_char(&grid, bit_depth) {
            Ok(result) => json_success(ConvertResult::from(&result), Vec::new()),
            Err(e) => json_failure(generate_errors(&e)),
        };
    }

    let grid = load_manual_grid(grid_file, rows)?;
    eprintln!(
        "{} {}x{} character, {}",
        "Packing:".cyan().bold(),
        grid.width(),
        grid.height(),
        bit_depth
    );

    let result = generate_manual_char(&grid, bit_depth).context("Failed to pack character")?;
    emit_source(&ConvertResult::from(&result), &[]);
    Ok(ExitCode::SUCCESS)
}

/// Prints a blank grid of the given size to stdout, ready to edit and pass
/// back with `--grid`.
pub fn template(width: u32, height: u32) -> Result<ExitCode> {
    for value in [width, height] {
        validate_dimension(value).map_err(|e| anyhow!("template size {}", e))?;
    }
    print!("{}", blank_template(width as usize, height as usize));
    Ok(ExitCode::SUCCESS)
}

fn blank_template(width: usize, height: usize) -> String {
    PixelGrid::blank(width, height).to_string()
}
