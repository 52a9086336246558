//! glyphpack End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the generation flows:
//!
//! - Generation: job file -> C source text
//! - Validation: job files rejected with stable error codes
//! - **Determinism**: identical source and hashes across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p glyphpack-tests
//! ```
//!
//! Font-backed tests rasterize a system TrueType font (DejaVu or Liberation).
//! Set `GLYPHPACK_TEST_FONT` to point at another font; tests that need a font
//! print a note and return early when none is found.

pub mod determinism;
pub mod fixtures;

pub use determinism::{verify_determinism, DeterminismResult, LineDiff};
pub use fixtures::{find_test_font, JobFixture};

/// Returns the test font path, or returns from the calling test with a note.
#[macro_export]
macro_rules! require_font {
    () => {
        match $crate::fixtures::find_test_font() {
            Some(path) => path,
            None => {
                println!("skipping: no TrueType font available");
                return;
            }
        }
    };
}
