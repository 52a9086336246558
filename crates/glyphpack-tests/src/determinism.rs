//! Determinism checks for generated source.
//!
//! Generation must be a pure function of its inputs: the same job yields the
//! same source text and hash on every run. Outputs are compared line by line
//! so a failure points at the offending table row.
//!
//! # Example
//!
//! ```rust,ignore
//! use glyphpack_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| generate_job(&job).unwrap().source().to_string(), 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First differing line, if any.
    pub diff: Option<LineDiff>,
}

/// The first line that differs between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    /// 1-based line number.
    pub line: usize,
    /// Line from the first run (`None` past its end).
    pub expected: Option<String>,
    /// Line from the differing run (`None` past its end).
    pub actual: Option<String>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at line {} (run {}):\n  expected: {}\n  actual:   {}",
            self.line,
            self.run_index,
            self.expected.as_deref().unwrap_or("<end of output>"),
            self.actual.as_deref().unwrap_or("<end of output>")
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\nRuns: {}\nHash: {}\n{}",
                self.runs, self.hash, diff
            );
        }
    }
}

/// Runs `generate_fn` `runs` times and compares every output to the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<str>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = blake3::hash(reference.as_bytes()).to_hex().to_string();

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(mut diff) = first_line_diff(reference, output.as_ref()) {
            diff.run_index = run_index;
            return DeterminismResult {
                is_deterministic: false,
                runs,
                hash,
                diff: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        diff: None,
    }
}

fn first_line_diff(expected: &str, actual: &str) -> Option<LineDiff> {
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut line = 0;
    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (e, a) if e == a => continue,
            (e, a) => {
                return Some(LineDiff {
                    line,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                    run_index: 0,
                })
            }
        }
    }
}
