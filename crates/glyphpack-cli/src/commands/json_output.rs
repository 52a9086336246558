//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints exactly one of these envelopes to
//! stdout instead of colored status lines and raw source.

use glyphpack_backend_bitmap::{FontTableResult, GenerateError, JobOutput, ManualCharResult};
use glyphpack_spec::{GridError, SpecError, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures.
///
/// Library failures pass their own `E0xx` codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Invalid command-line argument
    pub const INVALID_ARGUMENT: &str = "CLI_003";
}

/// Warning codes for CLI output.
pub mod warning_codes {
    /// Font has no glyph for a requested character
    pub const MISSING_GLYPH: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
            file: None,
        }
    }
}

impl From<&GenerateError> for JsonError {
    fn from(err: &GenerateError) -> Self {
        match err {
            GenerateError::InvalidJob(errors) if errors.len() == 1 => JsonError::from(&errors[0]),
            other => JsonError::new(other.code().code(), other.to_string()),
        }
    }
}

/// Converts an input loading failure into a JSON error.
///
/// Grid text errors keep their library code, unreadable files map to
/// `CLI_001` and malformed job JSON to `CLI_002`. Anything else is an
/// argument problem.
pub fn input_error(err: &anyhow::Error) -> JsonError {
    let code = if let Some(grid) = err.downcast_ref::<GridError>() {
        grid.code().code()
    } else if let Some(spec) = err.downcast_ref::<SpecError>() {
        match spec {
            SpecError::Io(_) => error_codes::FILE_READ,
            SpecError::JsonParse(_) => error_codes::JSON_PARSE,
        }
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        error_codes::FILE_READ
    } else {
        error_codes::INVALID_ARGUMENT
    };
    JsonError::new(code, format!("{:#}", err))
}

/// Converts a generation error into one or more JSON errors.
pub fn generate_errors(err: &GenerateError) -> Vec<JsonError> {
    match err {
        GenerateError::InvalidJob(errors) => errors.iter().map(JsonError::from).collect(),
        other => vec![JsonError::from(other)],
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Summary of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertResult {
    /// Conversion mode ("ttf" or "manual")
    pub mode: String,
    /// Generated C source
    pub source: String,
    /// BLAKE3 hash of the source
    pub hash: String,
    /// Bits per packed word
    pub bit_depth: u32,
    /// Glyph width in pixels
    pub width: u32,
    /// Glyph height in pixels
    pub height: u32,
    /// Number of characters in the table
    pub char_count: usize,
    /// Total number of packed words
    pub word_count: usize,
}

impl From<&FontTableResult> for ConvertResult {
    fn from(result: &FontTableResult) -> Self {
        Self {
            mode: "ttf".to_string(),
            source: result.source.clone(),
            hash: result.hash.clone(),
            bit_depth: result.bit_depth.bits(),
            width: result.width,
            height: result.height,
            char_count: result.records.len(),
            word_count: result.word_count(),
        }
    }
}

impl From<&ManualCharResult> for ConvertResult {
    fn from(result: &ManualCharResult) -> Self {
        Self {
            mode: "manual".to_string(),
            source: result.source.clone(),
            hash: result.hash.clone(),
            bit_depth: result.bit_depth.bits(),
            width: result.width as u32,
            height: result.height as u32,
            char_count: 1,
            word_count: result.words.len(),
        }
    }
}

impl From<&JobOutput> for ConvertResult {
    fn from(output: &JobOutput) -> Self {
        match output {
            JobOutput::FontTable(r) => r.into(),
            JobOutput::ManualChar(r) => r.into(),
        }
    }
}

/// JSON output for `convert`, `manual`, and `run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOutput {
    /// Whether the conversion succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Non-fatal warnings
    pub warnings: Vec<JsonWarning>,
    /// Conversion summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ConvertResult>,
}

impl ConvertOutput {
    /// Creates a successful output.
    pub fn success(result: ConvertResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// JSON output for `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the job is valid
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Canonical hash of the job (when it parsed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_hash: Option<String>,
}

impl ValidateOutput {
    /// Builds output from a validation result.
    pub fn from_result(result: &ValidationResult, job_hash: Option<String>) -> Self {
        Self {
            success: result.is_ok(),
            errors: result.errors.iter().map(JsonError::from).collect(),
            job_hash,
        }
    }

    /// Creates a failed output for a job that could not be loaded.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            job_hash: None,
        }
    }
}

/// Warnings for characters the font had no glyph for.
pub fn missing_glyph_warnings(missing: &[char]) -> Vec<JsonWarning> {
    if missing.is_empty() {
        return Vec::new();
    }
    let list: String = missing.iter().collect();
    vec![JsonWarning::new(
        warning_codes::MISSING_GLYPH,
        format!("font has no glyph for {} character(s): {}", missing.len(), list),
    )]
}
