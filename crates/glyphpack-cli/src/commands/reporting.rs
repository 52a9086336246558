//! Output helpers shared by the converting commands.
//!
//! Generated source goes to stdout and status lines to stderr, so the source
//! can be redirected into a header file. JSON envelopes also go to stdout.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{ConvertOutput, ConvertResult, JsonError, JsonWarning};

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a failed conversion envelope and returns exit code 1.
pub(crate) fn json_failure(errors: Vec<JsonError>) -> Result<ExitCode> {
    print_json(&ConvertOutput::failure(errors))?;
    Ok(ExitCode::from(1))
}

/// Prints a successful conversion envelope.
pub(crate) fn json_success(result: ConvertResult, warnings: Vec<JsonWarning>) -> Result<ExitCode> {
    print_json(&ConvertOutput::success(result, warnings))?;
    Ok(ExitCode::SUCCESS)
}

/// Writes generated source to stdout and a summary to stderr.
pub(crate) fn emit_source(result: &ConvertResult, warnings: &[JsonWarning]) {
    print!("{}", result.source);

    for warning in warnings {
        eprintln!("  {} {}", "!".yellow(), warning.message);
    }

    eprintln!(
        "{} {} char(s), {} word(s) at {}-bit",
        "SUCCESS".green().bold(),
        result.char_count,
        result.word_count,
        result.bit_depth
    );
    eprintln!("  {} {}", "Hash:".dimmed(), &result.hash[..16]);
}
