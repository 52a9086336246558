#![no_main]

use glyphpack_spec::{canonical_job_hash, validate_job, JobSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(job) = JobSpec::from_json(text) else {
        return;
    };

    let _ = validate_job(&job);

    // A parsed job always serializes and hashes
    let json = job.to_json_pretty().unwrap();
    let reparsed = JobSpec::from_json(&json).unwrap();
    assert_eq!(
        canonical_job_hash(&job).unwrap(),
        canonical_job_hash(&reparsed).unwrap()
    );
});
