//! Validate command implementation
//!
//! Checks a job file without converting anything.

use anyhow::Result;
use colored::Colorize;
use glyphpack_spec::{canonical_job_hash, validate_job};
use std::process::ExitCode;

use crate::input::load_job;

use super::json_output::{input_error, ValidateOutput};
use super::reporting::print_json;

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the job JSON file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 valid, 1 invalid or unreadable
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    let job = match load_job(spec_path) {
        Ok(job) => job,
        Err(e) if json_output => {
            let error = input_error(&e).with_file(spec_path);
            print_json(&ValidateOutput::failure(vec![error]))?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    let result = validate_job(&job);
    let job_hash = canonical_job_hash(&job).ok();

    if json_output {
        print_json(&ValidateOutput::from_result(&result, job_hash))?;
    } else {
        eprintln!("{} {}", "Validating:".cyan().bold(), spec_path);
        if result.is_ok() {
            eprintln!("{} Job is valid", "SUCCESS".green().bold());
            if let Some(hash) = job_hash {
                eprintln!("  {} {}", "Job hash:".dimmed(), hash);
            }
        } else {
            eprintln!(
                "{} {} error(s)",
                "FAILED".red().bold(),
                result.errors.len()
            );
            for error in &result.errors {
                eprintln!("  {} {}", "-".red(), error);
            }
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
