//! glyphpack CLI - TrueType and hand-drawn glyphs to C bitmap tables
//!
//! Converts fonts into packed row-major words for monochrome display firmware.

use clap::{Parser, Subcommand};
use glyphpack_spec::{BitDepth, DEFAULT_MANUAL_SIZE, DEFAULT_TTF_HEIGHT, DEFAULT_TTF_WIDTH};
use std::process::ExitCode;

use glyphpack_cli::commands;
use glyphpack_cli::input::parse_char_range;

/// glyphpack - Bitmap font table generator
#[derive(Parser)]
#[command(name = "glyphpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a range of font characters into a C header
    Convert {
        /// Path to the TrueType/OpenType font file
        #[arg(short, long)]
        font: String,

        /// Glyph box width in pixels
        #[arg(long, default_value_t = DEFAULT_TTF_WIDTH)]
        width: u32,

        /// Glyph box height in pixels
        #[arg(long, default_value_t = DEFAULT_TTF_HEIGHT)]
        height: u32,

        /// Packed word size (8 or 16)
        #[arg(short, long, default_value = "16")]
        bit_depth: BitDepth,

        /// Inclusive character code range, e.g. 32-126 or 0x41-0x5A
        #[arg(short, long, default_value = "32-126", value_parser = parse_char_range)]
        range: [u32; 2],

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Pack a hand-drawn character into a C array
    Manual {
        /// Grid text file, one line per pixel row
        #[arg(short, long, conflicts_with = "row")]
        grid: Option<String>,

        /// Inline pixel row (repeat once per row), e.g. --row "#..#"
        #[arg(long = "row")]
        row: Vec<String>,

        /// Print a blank grid to edit instead of packing one
        #[arg(long, conflicts_with_all = ["grid", "row"])]
        template: bool,

        /// Template width in pixels
        #[arg(long, default_value_t = DEFAULT_MANUAL_SIZE, requires = "template")]
        width: u32,

        /// Template height in pixels
        #[arg(long, default_value_t = DEFAULT_MANUAL_SIZE, requires = "template")]
        height: u32,

        /// Packed word size (8 or 16)
        #[arg(short, long, default_value = "16")]
        bit_depth: BitDepth,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print one rasterized character as ASCII art with its packed words
    Preview {
        /// Path to the TrueType/OpenType font file
        #[arg(short, long)]
        font: String,

        /// Character to render
        #[arg(short, long = "char")]
        ch: char,

        /// Glyph box width in pixels
        #[arg(long, default_value_t = DEFAULT_TTF_WIDTH)]
        width: u32,

        /// Glyph box height in pixels
        #[arg(long, default_value_t = DEFAULT_TTF_HEIGHT)]
        height: u32,

        /// Packed word size (8 or 16)
        #[arg(short, long, default_value = "16")]
        bit_depth: BitDepth,
    },

    /// Run a JSON job file and print the generated source
    Run {
        /// Path to the job file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON job file without converting anything
    Validate {
        /// Path to the job file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            font,
            width,
            height,
            bit_depth,
            range,
            json,
        } => commands::convert::run(&font, width, height, bit_depth, range, json),
        Commands::Manual {
            template: true,
            width,
            height,
            ..
        } => commands::manual::template(width, height),
        Commands::Manual {
            grid,
            row,
            bit_depth,
            json,
            ..
        } => commands::manual::run(grid.as_deref(), &row, bit_depth, json),
        Commands::Preview {
            font,
            ch,
            width,
            height,
            bit_depth,
        } => commands::preview::run(&font, ch, width, height, bit_depth),
        Commands::Run { spec, json } => commands::run::run(&spec, json),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
