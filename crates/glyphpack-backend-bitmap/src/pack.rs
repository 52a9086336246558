//! Bit packing of pixel grids into fixed-width words.
//!
//! Each row is split into `bits`-pixel segments. Pixel `c` of a segment sets
//! bit `(bits - 1) - (c % bits)`, so the leftmost pixel is the MSB. The last
//! segment of a row is zero-filled in its unused low bits. Words are emitted
//! row-major, which is the layout display drivers read.

use glyphpack_spec::{BitDepth, ErrorCode, PixelGrid};
use thiserror::Error;

/// A packed word. 8-bit words use only the low byte.
pub type PackedWord = u16;

/// Errors from packing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Bit depth outside {8, 16}.
    #[error("invalid bit depth {0}: expected 8 or 16")]
    InvalidBitDepth(u32),

    /// Grid has zero width or height.
    #[error("cannot pack an empty {width}x{height} grid")]
    EmptyGrid { width: usize, height: usize },
}

impl PackError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PackError::InvalidBitDepth(_) => ErrorCode::InvalidBitDepth,
            PackError::EmptyGrid { .. } => ErrorCode::EmptyGrid,
        }
    }
}

/// Packs a grid into words, MSB-first, row-major.
///
/// Returns `height * ceil(width / bits)` words.
pub fn pack(grid: &PixelGrid, depth: BitDepth) -> Result<Vec<PackedWord>, PackError> {
    if grid.is_empty() {
        return Err(PackError::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let bits = depth.bits() as usize;
    let width = grid.width();
    let mut words = Vec::with_capacity(grid.height() * depth.words_per_row(width));

    for row in grid.rows() {
        let mut acc: PackedWord = 0;
        for (col, &pixel) in row.iter().enumerate() {
            if pixel {
                acc |= 1 << ((bits - 1) - (col % bits));
            }
            if (col + 1) % bits == 0 || col == width - 1 {
                words.push(acc);
                acc = 0;
            }
        }
    }

    Ok(words)
}

/// Packs a grid with a raw bit count, rejecting anything but 8 or 16.
pub fn pack_bits(grid: &PixelGrid, bits: u32) -> Result<Vec<PackedWord>, PackError> {
    let depth = BitDepth::try_from(bits).map_err(|_| PackError::InvalidBitDepth(bits))?;
    pack(grid, depth)
}

/// Formats one word as `0x` plus exactly `bits / 4` uppercase hex digits.
///
/// Bits above the depth are dropped.
pub fn format_word(word: PackedWord, depth: BitDepth) -> String {
    format!(
        "0x{:0width$X}",
        word & depth.max_word(),
        width = depth.hex_digits()
    )
}

/// Formats every word with [`format_word`].
pub fn format_words(words: &[PackedWord], depth: BitDepth) -> Vec<String> {
    words.iter().map(|&w| format_word(w, depth)).collect()
}

/// Formats words and joins them with `", "`.
pub fn join_words(words: &[PackedWord], depth: BitDepth) -> String {
    format_words(words, depth).join(", ")
}
