//! Job validation logic.

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::grid::PixelGrid;
use crate::job::{JobSource, JobSpec, ManualSource, TtfSource, ASCII_FIRST, ASCII_LAST, JOB_VERSION};

/// Largest accepted glyph box or grid side, in pixels.
pub const MAX_DIMENSION: u32 = 4096;

/// Validates a job and returns every problem found.
///
/// Does not touch the file system: a missing font is reported at generation time.
pub fn validate_job(job: &JobSpec) -> ValidationResult {
    let mut errors = Vec::new();

    if job.version != JOB_VERSION {
        errors.push(ValidationError::with_path(
            ErrorCode::UnsupportedJobVersion,
            format!("unsupported job version {}, expected {}", job.version, JOB_VERSION),
            "version",
        ));
    }

    match &job.source {
        JobSource::Ttf(ttf) => validate_ttf_source(ttf, &mut errors),
        JobSource::Manual(manual) => validate_manual_source(manual, &mut errors),
    }

    ValidationResult::from_errors(errors)
}

fn validate_ttf_source(ttf: &TtfSource, errors: &mut Vec<ValidationError>) {
    if let Err(message) = validate_dimension(ttf.width) {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidDimension,
            format!("width {}", message),
            "source.width",
        ));
    }
    if let Err(message) = validate_dimension(ttf.height) {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidDimension,
            format!("height {}", message),
            "source.height",
        ));
    }
    if let Err(message) = validate_char_range(ttf.char_range[0], ttf.char_range[1]) {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidCharRange,
            message,
            "source.char_range",
        ));
    }
    if ttf.font_path.as_os_str().is_empty() {
        errors.push(ValidationError::with_path(
            ErrorCode::FontLoad,
            "font_path must not be empty",
            "source.font_path",
        ));
    }
}

fn validate_manual_source(manual: &ManualSource, errors: &mut Vec<ValidationError>) {
    match PixelGrid::parse(&manual.rows.join("\n")) {
        Ok(grid) if grid.is_empty() => errors.push(ValidationError::with_path(
            ErrorCode::EmptyGrid,
            "manual grid has no pixels",
            "source.rows",
        )),
        Ok(grid) => {
            let too_large = [grid.width(), grid.height()]
                .iter()
                .any(|&d| d > MAX_DIMENSION as usize);
            if too_large {
                errors.push(ValidationError::with_path(
                    ErrorCode::InvalidDimension,
                    format!(
                        "manual grid is {}x{}, max is {}x{}",
                        grid.width(),
                        grid.height(),
                        MAX_DIMENSION,
                        MAX_DIMENSION
                    ),
                    "source.rows",
                ));
            }
        }
        Err(err) => errors.push(ValidationError::with_path(
            err.code(),
            err.to_string(),
            "source.rows",
        )),
    }
}

/// Checks that a glyph box or grid side is in `1..=MAX_DIMENSION`.
pub fn validate_dimension(value: u32) -> Result<(), String> {
    if value == 0 {
        return Err("must be a positive integer, got 0".to_string());
    }
    if value > MAX_DIMENSION {
        return Err(format!("must be at most {}, got {}", MAX_DIMENSION, value));
    }
    Ok(())
}

/// Checks that `start..=end` is ordered and inside printable ASCII (32..=126).
pub fn validate_char_range(start: u32, end: u32) -> Result<(), String> {
    if start > end {
        return Err(format!("char range start {} is after end {}", start, end));
    }
    if start < ASCII_FIRST || end > ASCII_LAST {
        return Err(format!(
            "char range [{}, {}] must lie within [{}, {}]",
            start, end, ASCII_FIRST, ASCII_LAST
        ));
    }
    Ok(())
}
