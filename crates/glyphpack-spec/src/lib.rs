//! glyphpack shared types.
//!
//! This crate holds the data model shared by the bitmap backend and the CLI:
//!
//! - [`PixelGrid`]: a width x height monochrome pixel grid
//! - [`BitDepth`]: packed word size (8 or 16 bits)
//! - [`JobSpec`]: JSON job files describing one conversion
//! - [`ErrorCode`]: stable error codes (`E001`..)
//!
//! # Example
//!
//! ```
//! use glyphpack_spec::{BitDepth, JobSpec, PixelGrid};
//! use glyphpack_spec::validation::validate_job;
//!
//! let grid: PixelGrid = "#.#.\n.#.#".parse().unwrap();
//! assert_eq!(grid.width(), 4);
//!
//! let job = JobSpec::manual(["#.#.", ".#.#"], BitDepth::Eight);
//! assert!(validate_job(&job).is_ok());
//! ```

pub mod bit_depth;
pub mod error;
pub mod grid;
pub mod hash;
pub mod job;
pub mod validation;

pub use bit_depth::BitDepth;
pub use error::{ErrorCode, GridError, SpecError, ValidationError, ValidationResult};
pub use grid::PixelGrid;
pub use hash::{canonical_job_hash, source_hash};
pub use job::{
    JobSource, JobSpec, ManualSource, TtfSource, ASCII_FIRST, ASCII_LAST, DEFAULT_MANUAL_SIZE,
    DEFAULT_TTF_HEIGHT, DEFAULT_TTF_WIDTH, JOB_VERSION,
};
pub use validation::{validate_char_range, validate_dimension, validate_job, MAX_DIMENSION};
