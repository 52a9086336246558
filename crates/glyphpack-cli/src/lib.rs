//! glyphpack CLI library.
//!
//! Command implementations and input loading for the `glyphpack` binary.

pub mod commands;
pub mod input;
