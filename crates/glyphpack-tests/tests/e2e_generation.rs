//! End-to-end generation tests: job files on disk through to C source.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p glyphpack-tests --test e2e_generation
//! ```

use pretty_assertions::assert_eq;
use std::process::ExitCode;

use glyphpack_backend_bitmap::{generate_job, JobOutput};
use glyphpack_spec::{source_hash, BitDepth, ErrorCode, JobSpec, TtfSource};
use glyphpack_tests::{require_font, JobFixture};

fn is_success(code: ExitCode) -> bool {
    format!("{:?}", code) == format!("{:?}", ExitCode::SUCCESS)
}

// ============================================================================
// Manual jobs
// ============================================================================

#[test]
fn manual_job_generates_array() {
    let fixture = JobFixture::new();
    let path = fixture.write_job("diag", &JobSpec::manual(["#..#", ".##."], BitDepth::Eight));

    let job = JobSpec::load(&path).unwrap();
    let output = generate_job(&job).unwrap();

    assert_eq!(
        output.source(),
        "\n// Manually created character, 4x2\n\
         // Total elements (uint8_t): 2\n\
         const uint8_t custom_char_4x2[2] = {\n    0x90, 0x60\n};\n"
    );
    assert_eq!(output.word_count(), 2);
    assert_eq!(output.hash(), source_hash(output.source()));
}

#[test]
fn manual_job_sixteen_bit_row_spills() {
    let rows = ["#################", "................#"];
    let output = generate_job(&JobSpec::manual(rows, BitDepth::Sixteen)).unwrap();

    match output {
        JobOutput::ManualChar(result) => {
            assert_eq!((result.width, result.height), (17, 2));
            assert_eq!(result.words, vec![0xFFFF, 0x8000, 0x0000, 0x8000]);
            assert!(result
                .source
                .contains("const uint16_t custom_char_17x2[4] = {\n    0xFFFF, 0x8000, 0x0000, 0x8000\n};"));
        }
        other => panic!("expected manual output, got {:?}", other),
    }
}

#[test]
fn manual_job_from_json_text() {
    let fixture = JobFixture::new();
    let path = fixture.write_raw(
        "heart.json",
        r##"{
            "version": 1,
            "bit_depth": 8,
            "source": {
                "kind": "manual",
                "rows": [".#.#.", "XXXXX", ".###.", "..#.."]
            }
        }"##,
    );

    let output = generate_job(&JobSpec::load(&path).unwrap()).unwrap();
    match output {
        JobOutput::ManualChar(result) => {
            assert_eq!(result.words, vec![0x50, 0xF8, 0x70, 0x20]);
        }
        other => panic!("expected manual output, got {:?}", other),
    }
}

// ============================================================================
// TTF jobs
// ============================================================================

#[test]
fn ttf_job_with_relative_font_path() {
    let font = require_font!();
    let fixture = JobFixture::new();
    let relative = fixture.add_font(&font);
    let job = JobSpec::ttf(
        TtfSource::new(&relative).with_char_range(65, 70),
        BitDepth::Eight,
    );
    let path = fixture.write_job("upper", &job);

    let loaded = JobSpec::load(&path).unwrap();
    let output = generate_job(&loaded).unwrap();

    let result = match output {
        JobOutput::FontTable(result) => result,
        other => panic!("expected font table, got {:?}", other),
    };
    assert_eq!(result.records.len(), 6);
    assert_eq!(result.records[0].comment, "A");
    assert_eq!(result.records[5].comment, "F");
    // 11 pixels need two 8-bit words per row
    assert!(result.records.iter().all(|r| r.words.len() == 18 * 2));
    assert!(result.missing_glyphs.is_empty());

    let source = &result.source;
    assert!(source.contains("#include <stdint.h>"));
    assert!(source.contains("static const uint8_t Font11x18[] = {"));
    assert!(source.contains("// Format: 18 rows, 36 words (uint8_t) per character, row-wise."));

    let data_lines: Vec<&str> = source
        .lines()
        .filter(|line| line.trim_start().starts_with("0x"))
        .collect();
    assert_eq!(data_lines.len(), 6);
    assert!(data_lines[..5].iter().all(|line| line.contains(",  // ")));
    assert!(data_lines[5].ends_with("  // F"));
    assert!(!data_lines[5].contains(",  //"));
}

#[test]
fn ttf_job_full_ascii_sixteen_bit() {
    let font = require_font!();
    let job = JobSpec::ttf(TtfSource::new(&font), BitDepth::Sixteen);

    let output = generate_job(&job).unwrap();
    assert_eq!(output.word_count(), 95 * 18);
    assert_eq!(output.bit_depth(), BitDepth::Sixteen);

    let result = match output {
        JobOutput::FontTable(result) => result,
        other => panic!("expected font table, got {:?}", other),
    };
    let space = &result.records[0];
    assert_eq!(space.char_code, 32);
    assert_eq!(space.comment, "sp");
    assert!(space.words.iter().all(|&w| w == 0));

    // Width 11 leaves the low 5 bits of every 16-bit word unused
    for record in &result.records {
        assert!(record.words.iter().all(|&w| w & 0x1F == 0), "{}", record.comment);
    }

    let backslash = &result.records[(92 - 32) as usize];
    assert_eq!(backslash.comment, "\\\\");
    assert!(result.source.contains("// \\\\ (backslash)"));
}

#[test]
fn ttf_job_missing_font_reports_font_load() {
    let fixture = JobFixture::new();
    let job = JobSpec::ttf(TtfSource::new("fonts/missing.ttf"), BitDepth::Sixteen);
    let path = fixture.write_job("missing", &job);

    let err = generate_job(&JobSpec::load(&path).unwrap()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FontLoad);
}

// ============================================================================
// CLI entry points
// ============================================================================

#[test]
fn cli_run_manual_job() {
    let fixture = JobFixture::new();
    let path = fixture.write_job("dot", &JobSpec::manual(["#"], BitDepth::Eight));
    let path = path.to_string_lossy();

    let code = glyphpack_cli::commands::run::run(&path, false).unwrap();
    assert!(is_success(code));

    let code = glyphpack_cli::commands::run::run(&path, true).unwrap();
    assert!(is_success(code));
}

#[test]
fn cli_run_unreadable_job_is_an_error() {
    let fixture = JobFixture::new();
    let path = fixture.path().join("absent.json");

    assert!(glyphpack_cli::commands::run::run(&path.to_string_lossy(), false).is_err());

    // JSON mode reports through the envelope instead
    let code = glyphpack_cli::commands::run::run(&path.to_string_lossy(), true).unwrap();
    assert!(!is_success(code));
}

#[test]
fn cli_manual_grid_file() {
    let fixture = JobFixture::new();
    let grid = fixture.write_raw("glyph.txt", "#..#\n.##.\n\n");

    let code = glyphpack_cli::commands::manual::run(
        Some(grid.to_string_lossy().as_ref()),
        &[],
        BitDepth::Sixteen,
        false,
    )
    .unwrap();
    assert!(is_success(code));
}

#[test]
fn cli_convert_full_range() {
    let font = require_font!();
    let code = glyphpack_cli::commands::convert::run(
        &font.to_string_lossy(),
        11,
        18,
        BitDepth::Sixteen,
        [32, 126],
        true,
    )
    .unwrap();
    assert!(is_success(code));
}
