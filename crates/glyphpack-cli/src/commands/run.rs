//! Run command implementation
//!
//! Executes a JSON job file and prints the generated source.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphpack_backend_bitmap::{generate_job, JobOutput};
use glyphpack_spec::{canonical_job_hash, JobSource};
use std::process::ExitCode;

use crate::input::load_job;

use super::json_output::{
    generate_errors, input_error, missing_glyph_warnings, ConvertResult, JsonWarning,
};
use super::reporting::{emit_source, json_failure, json_success};

/// Run the run command
///
/// # Arguments
/// * `spec_path` - Path to the job JSON file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let job = match load_job(spec_path) {
            Ok(job) => job,
            Err(e) => {
                return json_failure(vec![input_error(&e).with_file(spec_path)]);
            }
        };
        return match generate_job(&job) {
            Ok(output) => json_success(ConvertResult::from(&output), output_warnings(&output)),
            Err(e) => json_failure(
                generate_errors(&e)
                    .into_iter()
                    .map(|err| err.with_file(spec_path))
                    .collect(),
            ),
        };
    }

    let job = load_job(spec_path)?;
    let job_hash = canonical_job_hash(&job).context("Failed to hash job")?;

    let mode = match job.source {
        JobSource::Ttf(_) => "ttf",
        JobSource::Manual(_) => "manual",
    };
    eprintln!("{} {}", "Running:".cyan().bold(), spec_path);
    eprintln!("  {} {}, {}", "Mode:".dimmed(), mode, job.bit_depth);
    eprintln!("  {} {}", "Job hash:".dimmed(), &job_hash[..16]);

    let output = generate_job(&job).with_context(|| format!("Job failed: {}", spec_path))?;
    emit_source(&ConvertResult::from(&output), &output_warnings(&output));
    Ok(ExitCode::SUCCESS)
}

fn output_warnings(output: &JobOutput) -> Vec<JsonWarning> {
    match output {
        JobOutput::FontTable(result) => missing_glyph_warnings(&result.missing_glyphs),
        JobOutput::ManualChar(_) => Vec::new(),
    }
}
