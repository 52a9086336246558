//! Conversion drivers: whole font tables, manual characters, and job files.

use glyphpack_spec::{
    source_hash, validate_char_range, validate_job, BitDepth, ErrorCode, GridError, JobSource,
    JobSpec, PixelGrid, TtfSource, ValidationError,
};
use thiserror::Error;

use crate::pack::{pack, PackError, PackedWord};
use crate::raster::{rasterize, FontResource, RasterError};
use crate::table::{render_font_header, render_manual_array, sanitize_identifier, CharacterRecord};

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Font loading or rasterization failed.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// Packing failed.
    #[error(transparent)]
    Pack(#[from] PackError),

    /// A manual grid could not be built.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Character range out of order or outside printable ASCII.
    #[error("{0}")]
    InvalidCharRange(String),

    /// The job failed validation.
    #[error("job validation failed: {}", format_validation_errors(.0))]
    InvalidJob(Vec<ValidationError>),
}

impl GenerateError {
    /// Returns the stable error code for this error.
    ///
    /// For an invalid job this is the code of the first validation error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerateError::Raster(e) => e.code(),
            GenerateError::Pack(e) => e.code(),
            GenerateError::Grid(e) => e.code(),
            GenerateError::InvalidCharRange(_) => ErrorCode::InvalidCharRange,
            GenerateError::InvalidJob(errors) => errors
                .first()
                .map(|e| e.code)
                .unwrap_or(ErrorCode::UnsupportedJobVersion),
        }
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of a TTF batch conversion.
#[derive(Debug, Clone)]
pub struct FontTableResult {
    /// Generated C header.
    pub source: String,
    /// BLAKE3 hash of `source`.
    pub hash: String,
    /// Sanitized font name used for the include guard.
    pub font_name: String,
    /// Glyph box width.
    pub width: u32,
    /// Glyph box height.
    pub height: u32,
    /// Packed word size.
    pub bit_depth: BitDepth,
    /// One record per character, in code order.
    pub records: Vec<CharacterRecord>,
    /// Characters the font has no glyph for (rendered with the fallback glyph).
    pub missing_glyphs: Vec<char>,
}

impl FontTableResult {
    /// Total number of packed words across all characters.
    pub fn word_count(&self) -> usize {
        self.records.iter().map(|r| r.words.len()).sum()
    }
}

/// Result of a manual character conversion.
#[derive(Debug, Clone)]
pub struct ManualCharResult {
    /// Generated array declaration.
    pub source: String,
    /// BLAKE3 hash of `source`.
    pub hash: String,
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Packed word size.
    pub bit_depth: BitDepth,
    /// Packed words, row-major.
    pub words: Vec<PackedWord>,
}

/// Result of running a job file.
#[derive(Debug, Clone)]
pub enum JobOutput {
    /// Output of a TTF job.
    FontTable(FontTableResult),
    /// Output of a manual job.
    ManualChar(ManualCharResult),
}

impl JobOutput {
    /// Generated C source.
    pub fn source(&self) -> &str {
        match self {
            JobOutput::FontTable(r) => &r.source,
            JobOutput::ManualChar(r) => &r.source,
        }
    }

    /// BLAKE3 hash of the generated source.
    pub fn hash(&self) -> &str {
        match self {
            JobOutput::FontTable(r) => &r.hash,
            JobOutput::ManualChar(r) => &r.hash,
        }
    }

    /// Total number of packed words.
    pub fn word_count(&self) -> usize {
        match self {
            JobOutput::FontTable(r) => r.word_count(),
            JobOutput::ManualChar(r) => r.words.len(),
        }
    }

    /// Packed word size.
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            JobOutput::FontTable(r) => r.bit_depth,
            JobOutput::ManualChar(r) => r.bit_depth,
        }
    }
}

/// Loads the font named by `params` and converts its character range.
pub fn generate_font_table(
    params: &TtfSource,
    depth: BitDepth,
) -> Result<FontTableResult, GenerateError> {
    let font = FontResource::load(&params.font_path)?;
    generate_font_table_with(&font, params.width, params.height, params.char_range, depth)
}

/// Converts `char_range` (inclusive) of an already loaded font.
///
/// Either every character converts or an error is returned; there is no
/// partial table.
pub fn generate_font_table_with(
    font: &FontResource,
    width: u32,
    height: u32,
    char_range: [u32; 2],
    depth: BitDepth,
) -> Result<FontTableResult, GenerateError> {
    let [start, end] = char_range;
    validate_char_range(start, end).map_err(GenerateError::InvalidCharRange)?;

    let mut records = Vec::with_capacity((end - start + 1) as usize);
    let mut missing_glyphs = Vec::new();

    for char_code in start..=end {
        // Printable ASCII is always a valid scalar value
        let Some(ch) = char::from_u32(char_code) else {
            continue;
        };
        if ch != ' ' && !font.has_glyph(ch) {
            missing_glyphs.push(ch);
        }

        let grid = rasterize(font, ch, width, height)?;
        let words = pack(&grid, depth)?;
        records.push(CharacterRecord::new(char_code, words, depth));
    }

    let font_name = sanitize_identifier(font.name());
    let source = render_font_header(&font_name, width, height, depth, &records);
    let hash = source_hash(&source);

    Ok(FontTableResult {
        source,
        hash,
        font_name,
        width,
        height,
        bit_depth: depth,
        records,
        missing_glyphs,
    })
}

/// Packs a manually drawn character and renders its array declaration.
pub fn generate_manual_char(
    grid: &PixelGrid,
    depth: BitDepth,
) -> Result<ManualCharResult, GenerateError> {
    let words = pack(grid, depth)?;
    let source = render_manual_array(grid.width(), grid.height(), depth, &words);
    let hash = source_hash(&source);

    Ok(ManualCharResult {
        source,
        hash,
        width: grid.width(),
        height: grid.height(),
        bit_depth: depth,
        words,
    })
}

/// Validates and runs a job.
pub fn generate_job(job: &JobSpec) -> Result<JobOutput, GenerateError> {
    let validation = validate_job(job);
    if !validation.is_ok() {
        return Err(GenerateError::InvalidJob(validation.errors));
    }

    match &job.source {
        JobSource::Ttf(ttf) => generate_font_table(ttf, job.bit_depth).map(JobOutput::FontTable),
        JobSource::Manual(manual) => {
            let grid = PixelGrid::parse(&manual.rows.join("\n"))?;
            generate_manual_char(&grid, job.bit_depth).map(JobOutput::ManualChar)
        }
    }
}
