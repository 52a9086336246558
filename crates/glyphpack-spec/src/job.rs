//! Job files: JSON documents describing one conversion run.
//!
//! ```json
//! {
//!   "version": 1,
//!   "bit_depth": 16,
//!   "source": {
//!     "kind": "ttf",
//!     "font_path": "fonts/DejaVuSansMono.ttf",
//!     "width": 11,
//!     "height": 18
//!   }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bit_depth::BitDepth;
use crate::error::SpecError;

/// Current job file version.
pub const JOB_VERSION: u32 = 1;

/// First character code of the printable ASCII window.
pub const ASCII_FIRST: u32 = 32;

/// Last character code of the printable ASCII window.
pub const ASCII_LAST: u32 = 126;

/// Default TTF glyph box width.
pub const DEFAULT_TTF_WIDTH: u32 = 11;

/// Default TTF glyph box height.
pub const DEFAULT_TTF_HEIGHT: u32 = 18;

/// Default manual character size (both dimensions).
pub const DEFAULT_MANUAL_SIZE: u32 = 8;

/// A conversion job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSpec {
    /// Job file version. Must be [`JOB_VERSION`].
    pub version: u32,

    /// Packed word size.
    #[serde(default)]
    pub bit_depth: BitDepth,

    /// Where the pixels come from.
    pub source: JobSource,
}

/// Glyph source for a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobSource {
    /// Rasterize a range of characters from a font file.
    Ttf(TtfSource),
    /// A single hand-drawn character.
    Manual(ManualSource),
}

/// Parameters for TTF batch conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtfSource {
    /// Path to the font file. Relative paths resolve against the job file's directory.
    pub font_path: PathBuf,

    /// Glyph box width in pixels.
    #[serde(default = "default_ttf_width")]
    pub width: u32,

    /// Glyph box height in pixels. Also used as the rasterization size.
    #[serde(default = "default_ttf_height")]
    pub height: u32,

    /// Inclusive character code range, within 32..=126.
    #[serde(default = "default_char_range")]
    pub char_range: [u32; 2],
}

/// A hand-drawn character, one string per row in grid text format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManualSource {
    /// Rows of pixel marks (`#` set, `.` clear).
    pub rows: Vec<String>,
}

fn default_ttf_width() -> u32 {
    DEFAULT_TTF_WIDTH
}

fn default_ttf_height() -> u32 {
    DEFAULT_TTF_HEIGHT
}

fn default_char_range() -> [u32; 2] {
    [ASCII_FIRST, ASCII_LAST]
}

impl TtfSource {
    /// Creates TTF source params with the default box and the full ASCII range.
    pub fn new(font_path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: font_path.into(),
            width: DEFAULT_TTF_WIDTH,
            height: DEFAULT_TTF_HEIGHT,
            char_range: default_char_range(),
        }
    }

    /// Sets the glyph box size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the character range.
    pub fn with_char_range(mut self, start: u32, end: u32) -> Self {
        self.char_range = [start, end];
        self
    }
}

impl JobSpec {
    /// Creates a TTF conversion job.
    pub fn ttf(source: TtfSource, bit_depth: BitDepth) -> Self {
        Self {
            version: JOB_VERSION,
            bit_depth,
            source: JobSource::Ttf(source),
        }
    }

    /// Creates a manual character job.
    pub fn manual<S: Into<String>>(rows: impl IntoIterator<Item = S>, bit_depth: BitDepth) -> Self {
        Self {
            version: JOB_VERSION,
            bit_depth,
            source: JobSource::Manual(ManualSource {
                rows: rows.into_iter().map(Into::into).collect(),
            }),
        }
    }

    /// Parses a job from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the job to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the job to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Reads and parses a job file.
    ///
    /// A relative `font_path` is resolved against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path)?;
        let mut job = Self::from_json(&text)?;

        if let JobSource::Ttf(ref mut ttf) = job.source {
            if ttf.font_path.is_relative() {
                if let Some(dir) = path.parent() {
                    ttf.font_path = dir.join(&ttf.font_path);
                }
            }
        }

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ttf_job_with_defaults() {
        let json = r#"{
            "version": 1,
            "source": { "kind": "ttf", "font_path": "DejaVuSans.ttf" }
        }"#;
        let job = JobSpec::from_json(json).unwrap();
        assert_eq!(job.bit_depth, BitDepth::Sixteen);
        match job.source {
            JobSource::Ttf(ttf) => {
                assert_eq!(ttf.width, 11);
                assert_eq!(ttf.height, 18);
                assert_eq!(ttf.char_range, [32, 126]);
            }
            other => panic!("expected ttf source, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_manual_job() {
        let json = r##"{
            "version": 1,
            "bit_depth": 8,
            "source": { "kind": "manual", "rows": ["#.", ".#"] }
        }"##;
        let job = JobSpec::from_json(json).unwrap();
        assert_eq!(job, JobSpec::manual(["#.", ".#"], BitDepth::Eight));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{
            "version": 1,
            "source": { "kind": "ttf", "font_path": "a.ttf", "size": 12 }
        }"#;
        assert!(JobSpec::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_invalid_bit_depth() {
        let json = r##"{
            "version": 1,
            "bit_depth": 12,
            "source": { "kind": "manual", "rows": ["#"] }
        }"##;
        assert!(JobSpec::from_json(json).is_err());
    }

    #[test]
    fn test_roundtrip_builder() {
        let job = JobSpec::ttf(
            TtfSource::new("fonts/Mono.ttf")
                .with_size(8, 12)
                .with_char_range(48, 57),
            BitDepth::Eight,
        );
        let json = job.to_json_pretty().unwrap();
        assert!(json.contains("\"kind\": \"ttf\""));
        assert_eq!(JobSpec::from_json(&json).unwrap(), job);
    }

    #[test]
    fn test_load_resolves_relative_font_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(
            &path,
            r#"{"version": 1, "source": {"kind": "ttf", "font_path": "fonts/a.ttf"}}"#,
        )
        .unwrap();

        let job = JobSpec::load(&path).unwrap();
        match job.source {
            JobSource::Ttf(ttf) => assert_eq!(ttf.font_path, dir.path().join("fonts/a.ttf")),
            other => panic!("expected ttf source, got {:?}", other),
        }
    }
}
