//! Test fixture utilities for job files, grid files, and fonts.

use glyphpack_spec::JobSpec;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// System font locations tried in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Finds a TrueType font to test against.
///
/// `GLYPHPACK_TEST_FONT` wins when it names an existing file.
pub fn find_test_font() -> Option<PathBuf> {
    if let Ok(path) = env::var("GLYPHPACK_TEST_FONT") {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// A temporary directory holding job files and their inputs.
pub struct JobFixture {
    pub root: TempDir,
}

impl JobFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Serialize a job into `{name}.json`.
    pub fn write_job(&self, name: &str, job: &JobSpec) -> PathBuf {
        let json = job.to_json_pretty().expect("Failed to serialize job");
        self.write_raw(&format!("{}.json", name), &json)
    }

    /// Write arbitrary text, e.g. a malformed job or a grid file.
    pub fn write_raw(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(file_name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Copy a font into `fonts/` so jobs can reference it relatively.
    ///
    /// Returns the path relative to the fixture root.
    pub fn add_font(&self, font: &Path) -> PathBuf {
        let fonts_dir = self.root.path().join("fonts");
        fs::create_dir_all(&fonts_dir).expect("Failed to create fonts dir");
        let file_name = font.file_name().expect("Font path has no file name");
        fs::copy(font, fonts_dir.join(file_name)).expect("Failed to copy font");
        Path::new("fonts").join(file_name)
    }
}

impl Default for JobFixture {
    fn default() -> Self {
        Self::new()
    }
}
