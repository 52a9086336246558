//! Monochrome pixel grid.
//!
//! A [`PixelGrid`] is the hand-off format between the rasterizer (or a
//! hand-drawn character) and the bit packer. Pixels are stored row-major,
//! `true` meaning foreground.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Marks accepted as a set pixel in grid text.
const SET_MARKS: &[char] = &['#', '1', 'X', 'x', '@'];

/// Marks accepted as a clear pixel in grid text.
const CLEAR_MARKS: &[char] = &['.', '0', '-', '_', ' '];

/// A `width` x `height` grid of boolean pixels.
///
/// Grids with a zero dimension can be built; the packer rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl PixelGrid {
    /// Creates an all-clear grid.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Creates a grid from rows. Every row must have the same length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[bool]>,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            pixels.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    /// Creates a grid from a flat row-major buffer of 0/1 values.
    ///
    /// Any non-zero value is treated as set.
    pub fn from_flat(width: usize, height: usize, values: &[u8]) -> Result<Self, GridError> {
        let expected = width * height;
        if values.len() != expected {
            return Err(GridError::BufferSize {
                width,
                height,
                expected,
                found: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: values.iter().map(|&v| v != 0).collect(),
        })
    }

    /// Parses grid text: one line per row, `#1Xx@` set and `.0-_` or space clear.
    ///
    /// Trailing empty lines are ignored and `\r` line endings are accepted. A
    /// line of spaces is a row of clear pixels and is kept.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let rows = lines
            .iter()
            .enumerate()
            .map(|(line_index, line)| parse_row(line, line_index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the pixel at (x, y), or false when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x]
    }

    /// Sets the pixel at (x, y). Out-of-bounds writes are clipped.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
        }
    }

    /// Sets the pixel at signed coordinates, clipping anything outside the grid.
    pub fn set_clipped(&mut self, x: i64, y: i64, value: bool) {
        if x < 0 || y < 0 {
            return;
        }
        self.set(x as usize, y as usize, value);
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics, and a zero-width grid has no pixels anyway
        self.pixels.chunks(self.width.max(1))
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>, GridError> {
    line.chars()
        .enumerate()
        .map(|(column, mark)| {
            if SET_MARKS.contains(&mark) {
                Ok(true)
            } else if CLEAR_MARKS.contains(&mark) {
                Ok(false)
            } else {
                Err(GridError::InvalidMark {
                    mark,
                    line: line_number,
                    column: column + 1,
                })
            }
        })
        .collect()
}

impl FromStr for PixelGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the grid as `#`/`.` text, one line per row.
impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.rows() {
            for &pixel in row {
                f.write_str(if pixel { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
