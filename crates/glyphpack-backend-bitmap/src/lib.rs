//! glyphpack Bitmap Backend
//!
//! Turns glyphs into packed monochrome bitmap tables for embedded displays.
//! Output is byte-identical for the same font, box, range, and bit depth.
//!
//! # Pipeline
//!
//! - **Rasterize** ([`raster`]): render one character into a fixed
//!   width x height [`PixelGrid`], ink centered in the box
//! - **Pack** ([`pack`](mod@pack)): split each row into 8- or 16-bit words, MSB-first
//! - **Format** ([`table`]): emit a C header (font tables) or a single array
//!   (manual characters)
//!
//! # Example
//!
//! ```
//! use glyphpack_backend_bitmap::pack::{pack, join_words};
//! use glyphpack_spec::{BitDepth, PixelGrid};
//!
//! let grid: PixelGrid = "#.#.#.#.".parse().unwrap();
//! let words = pack(&grid, BitDepth::Eight).unwrap();
//! assert_eq!(join_words(&words, BitDepth::Eight), "0xAA");
//! ```

pub mod generate;
pub mod pack;
pub mod raster;
pub mod table;

pub use generate::{
    generate_font_table, generate_font_table_with, generate_job, generate_manual_char,
    FontTableResult, GenerateError, JobOutput, ManualCharResult,
};
pub use glyphpack_spec::{BitDepth, PixelGrid};
pub use pack::{format_word, format_words, join_words, pack_bits, PackError, PackedWord};
pub use raster::{rasterize, FontResource, RasterError};
pub use table::{comment_token, CharacterRecord};
