//! Error types for grid construction, job validation, and conversion.

use thiserror::Error;

/// Stable error codes shared by every glyphpack crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Width or height is zero, negative, or too large
    InvalidDimension,
    /// E002: Font file missing, unreadable, or not a valid font
    FontLoad,
    /// E003: Bit depth is not 8 or 16
    InvalidBitDepth,
    /// E004: Grid with zero width or height handed to the packer
    EmptyGrid,
    /// E005: Grid rows of unequal length
    RaggedGrid,
    /// E006: Character range out of order or outside printable ASCII
    InvalidCharRange,
    /// E007: Job file version not supported
    UnsupportedJobVersion,
    /// E008: Unknown pixel mark in grid text
    InvalidGridText,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDimension => "E001",
            ErrorCode::FontLoad => "E002",
            ErrorCode::InvalidBitDepth => "E003",
            ErrorCode::EmptyGrid => "E004",
            ErrorCode::RaggedGrid => "E005",
            ErrorCode::InvalidCharRange => "E006",
            ErrorCode::UnsupportedJobVersion => "E007",
            ErrorCode::InvalidGridText => "E008",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "source.width").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while building pixel grids or parsing bit depths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row `row` has a different length than row 0.
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat buffer length does not match `width * height`.
    #[error("pixel buffer holds {found} values, expected {expected} ({width}x{height})")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },

    /// Unknown pixel mark in grid text (1-based line and column).
    #[error("unknown pixel mark {mark:?} at line {line}, column {column}")]
    InvalidMark {
        mark: char,
        line: usize,
        column: usize,
    },

    /// Bit depth outside {8, 16}.
    #[error("invalid bit depth {0}: expected 8 or 16")]
    InvalidBitDepth(String),
}

impl GridError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GridError::RaggedRows { .. } | GridError::BufferSize { .. } => ErrorCode::RaggedGrid,
            GridError::InvalidMark { .. } => ErrorCode::InvalidGridText,
            GridError::InvalidBitDepth(_) => ErrorCode::InvalidBitDepth,
        }
    }
}

/// Top-level error type for job file operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of job validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self { ok: false, errors }
    }

    /// Builds a result from collected errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::success()
        } else {
            Self::failure(errors)
        }
    }

    /// Returns true if validation passed.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if validation failed.
    pub fn is_err(&self) -> bool {
        !self.ok
    }
}
