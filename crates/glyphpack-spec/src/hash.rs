//! Canonical hashing of jobs and generated output.
//!
//! Job hashes are computed over key-sorted, whitespace-free JSON so that
//! two job files differing only in formatting hash identically.

use crate::error::SpecError;
use crate::job::JobSpec;

/// Computes the canonical BLAKE3 hash of a job.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use glyphpack_spec::{BitDepth, JobSpec};
/// use glyphpack_spec::hash::canonical_job_hash;
///
/// let job = JobSpec::manual(["#.", ".#"], BitDepth::Eight);
/// let hash = canonical_job_hash(&job).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_job_hash(job: &JobSpec) -> Result<String, SpecError> {
    let value = job.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the BLAKE3 hash of a canonicalized JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Computes the BLAKE3 hash of generated source text.
pub fn source_hash(source: &str) -> String {
    blake3::hash(source.as_bytes()).to_hex().to_string()
}

/// Produces JSON with object keys sorted and no whitespace.
///
/// Job files only carry integers and strings, so numbers are written as-is.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}:{}",
                        serde_json::Value::String(k.clone()),
                        canonicalize_json(v)
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        // Scalars serialize compactly already
        scalar => scalar.to_string(),
    }
}
