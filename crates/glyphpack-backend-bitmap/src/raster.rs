//! Glyph rasterization into fixed-size monochrome grids.
//!
//! The font is rendered at `box_height` pixels per em and the glyph's ink
//! box is placed with floor-division offsets:
//!
//! ```text
//! draw_x   = floor((box_width  - ink_width)  / 2)
//! ink_left = draw_x + left_bearing
//! ink_top  = floor((box_height - ink_height) / 2)
//! ```
//!
//! The left bearing is added, not cancelled; display firmware built against
//! this output depends on the exact placement.
//! Coverage at or above [`COVERAGE_THRESHOLD`] becomes a set pixel and
//! anything outside the box is clipped.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use glyphpack_spec::{ErrorCode, PixelGrid, MAX_DIMENSION};
use thiserror::Error;

/// Minimum 8-bit coverage for a pixel to count as ink.
pub const COVERAGE_THRESHOLD: u8 = 128;

/// Errors from loading fonts or rasterizing glyphs.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The font file could not be read.
    #[error("failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The font data could not be parsed.
    #[error("failed to parse font {name}: {reason}")]
    FontParse { name: String, reason: String },

    /// A box dimension is zero or above the allocation cap.
    #[error("invalid glyph box {width}x{height}: dimensions must be in 1..={max}")]
    InvalidDimension { width: u32, height: u32, max: u32 },
}

impl RasterError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RasterError::FontRead { .. } | RasterError::FontParse { .. } => ErrorCode::FontLoad,
            RasterError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
        }
    }
}

/// A parsed font plus the name used for generated identifiers.
pub struct FontResource {
    font: Font,
    name: String,
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl FontResource {
    /// Reads and parses a font file. The name is the file stem.
    pub fn load(path: &Path) -> Result<Self, RasterError> {
        let data = std::fs::read(path).map_err(|source| RasterError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "font".to_string());
        Self::from_bytes(name, data)
    }

    /// Parses font data held in memory.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, RasterError> {
        let name = name.into();
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            RasterError::FontParse {
                name: name.clone(),
                reason: reason.to_string(),
            }
        })?;
        Ok(Self { font, name })
    }

    /// Name used for generated identifiers (file stem for loaded fonts).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the font maps `ch` to a real glyph.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }
}

/// Rasterizes `ch` into a `box_width` x `box_height` grid, centered as described
/// in the module docs.
pub fn rasterize(
    font: &FontResource,
    ch: char,
    box_width: u32,
    box_height: u32,
) -> Result<PixelGrid, RasterError> {
    let valid = |d: u32| (1..=MAX_DIMENSION).contains(&d);
    if !valid(box_width) || !valid(box_height) {
        return Err(RasterError::InvalidDimension {
            width: box_width,
            height: box_height,
            max: MAX_DIMENSION,
        });
    }

    let (metrics, coverage) = font.font.rasterize(ch, box_height as f32);
    let ink_width = metrics.width as i64;
    let ink_height = metrics.height as i64;

    let draw_x = (box_width as i64 - ink_width).div_euclid(2);
    let ink_left = draw_x + metrics.xmin as i64;
    let ink_top = (box_height as i64 - ink_height).div_euclid(2);

    let mut grid = PixelGrid::blank(box_width as usize, box_height as usize);
    if ink_width == 0 {
        return Ok(grid);
    }

    for (y, row) in coverage.chunks(metrics.width).enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value >= COVERAGE_THRESHOLD {
                grid.set_clipped(ink_left + x as i64, ink_top + y as i64, true);
            }
        }
    }

    Ok(grid)
}
