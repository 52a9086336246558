//! End-to-end validation tests: malformed job files are rejected with stable
//! error codes before any font is touched.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p glyphpack-tests --test e2e_validation
//! ```

use pretty_assertions::assert_eq;

use glyphpack_backend_bitmap::{generate_job, GenerateError};
use glyphpack_spec::{
    validate_job, BitDepth, ErrorCode, JobSource, JobSpec, SpecError, TtfSource,
};
use glyphpack_tests::JobFixture;

fn codes_and_paths(job: &JobSpec) -> Vec<(ErrorCode, Option<String>)> {
    validate_job(job)
        .errors
        .into_iter()
        .map(|e| (e.code, e.path))
        .collect()
}

fn ttf_job(source: TtfSource) -> JobSpec {
    JobSpec::ttf(source, BitDepth::Sixteen)
}

#[test]
fn valid_jobs_pass() {
    assert!(validate_job(&ttf_job(TtfSource::new("mono.ttf"))).is_ok());
    assert!(validate_job(&JobSpec::manual(["#."], BitDepth::Eight)).is_ok());
}

#[test]
fn unsupported_version() {
    let mut job = JobSpec::manual(["#"], BitDepth::Eight);
    job.version = 2;
    assert_eq!(
        codes_and_paths(&job),
        vec![(ErrorCode::UnsupportedJobVersion, Some("version".to_string()))]
    );
}

#[test]
fn zero_and_oversized_dimensions() {
    let job = ttf_job(TtfSource::new("mono.ttf").with_size(0, 5000));
    assert_eq!(
        codes_and_paths(&job),
        vec![
            (ErrorCode::InvalidDimension, Some("source.width".to_string())),
            (ErrorCode::InvalidDimension, Some("source.height".to_string())),
        ]
    );
}

#[test]
fn char_range_out_of_order_or_outside_ascii() {
    for (start, end) in [(126, 32), (0, 126), (32, 200)] {
        let job = ttf_job(TtfSource::new("mono.ttf").with_char_range(start, end));
        assert_eq!(
            codes_and_paths(&job),
            vec![(ErrorCode::InvalidCharRange, Some("source.char_range".to_string()))],
            "range {}-{}",
            start,
            end
        );
    }
}

#[test]
fn all_errors_are_collected() {
    let mut job = ttf_job(
        TtfSource::new("")
            .with_size(0, 18)
            .with_char_range(90, 80),
    );
    job.version = 9;

    let codes: Vec<ErrorCode> = codes_and_paths(&job).into_iter().map(|(c, _)| c).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::UnsupportedJobVersion,
            ErrorCode::InvalidDimension,
            ErrorCode::InvalidCharRange,
            ErrorCode::FontLoad,
        ]
    );
}

#[test]
fn manual_grid_problems() {
    let cases: [(&[&str], ErrorCode); 4] = [
        (&["##", "#"], ErrorCode::RaggedGrid),
        (&["#?#"], ErrorCode::InvalidGridText),
        (&[], ErrorCode::EmptyGrid),
        (&["", ""], ErrorCode::EmptyGrid),
    ];
    for (rows, code) in cases {
        let job = JobSpec::manual(rows.iter().copied(), BitDepth::Sixteen);
        assert_eq!(
            codes_and_paths(&job),
            vec![(code, Some("source.rows".to_string()))],
            "rows {:?}",
            rows
        );
    }
}

#[test]
fn generate_refuses_invalid_jobs() {
    let job = ttf_job(TtfSource::new("mono.ttf").with_size(11, 0));
    match generate_job(&job) {
        Err(GenerateError::InvalidJob(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code.code(), "E001");
        }
        other => panic!("expected InvalidJob, got {:?}", other),
    }
}

// ============================================================================
// Job file parsing
// ============================================================================

#[test]
fn unknown_fields_are_rejected() {
    let json = r##"{
        "version": 1,
        "source": { "kind": "manual", "rows": ["#"], "scale": 2 }
    }"##;
    assert!(matches!(JobSpec::from_json(json), Err(SpecError::JsonParse(_))));
}

#[test]
fn bit_depth_outside_eight_and_sixteen_is_rejected() {
    for bits in [0, 4, 12, 32] {
        let json = format!(
            r##"{{"version": 1, "bit_depth": {}, "source": {{"kind": "manual", "rows": ["#"]}}}}"##,
            bits
        );
        assert!(JobSpec::from_json(&json).is_err(), "bit_depth {}", bits);
    }
}

#[test]
fn negative_dimensions_do_not_parse() {
    let json = r#"{
        "version": 1,
        "source": { "kind": "ttf", "font_path": "mono.ttf", "width": -11 }
    }"#;
    assert!(JobSpec::from_json(json).is_err());
}

#[test]
fn ttf_defaults_fill_in() {
    let fixture = JobFixture::new();
    let path = fixture.write_raw(
        "defaults.json",
        r#"{"version": 1, "source": {"kind": "ttf", "font_path": "fonts/mono.ttf"}}"#,
    );

    let job = JobSpec::load(&path).unwrap();
    assert_eq!(job.bit_depth, BitDepth::Sixteen);
    match job.source {
        JobSource::Ttf(ttf) => {
            assert_eq!((ttf.width, ttf.height), (11, 18));
            assert_eq!(ttf.char_range, [32, 126]);
            assert_eq!(ttf.font_path, fixture.path().join("fonts/mono.ttf"));
        }
        other => panic!("expected ttf source, got {:?}", other),
    }
}

#[test]
fn cli_validate_reports_failure_exit() {
    let fixture = JobFixture::new();
    let mut job = JobSpec::manual(["#"], BitDepth::Eight);
    job.version = 3;
    let path = fixture.write_job("old", &job);

    let code = glyphpack_cli::commands::validate::run(&path.to_string_lossy(), true).unwrap();
    assert_eq!(format!("{:?}", code), format!("{:?}", std::process::ExitCode::from(1)));

    let good = fixture.write_job("good", &JobSpec::manual(["#"], BitDepth::Eight));
    let code = glyphpack_cli::commands::validate::run(&good.to_string_lossy(), false).unwrap();
    assert_eq!(
        format!("{:?}", code),
        format!("{:?}", std::process::ExitCode::SUCCESS)
    );
}
