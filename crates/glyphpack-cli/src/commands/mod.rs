//! CLI command implementations

pub mod convert;
pub mod json_output;
pub mod manual;
pub mod preview;
pub mod run;
pub mod validate;

mod reporting;
