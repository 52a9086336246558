//! Determinism tests: the same job yields byte-identical source and the same
//! hashes on every run.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p glyphpack-tests --test e2e_determinism
//! ```

use pretty_assertions::assert_eq;

use glyphpack_backend_bitmap::{generate_font_table_with, generate_job, FontResource};
use glyphpack_spec::{canonical_job_hash, source_hash, BitDepth, JobSpec, TtfSource};
use glyphpack_tests::{require_font, verify_determinism, JobFixture};

#[test]
fn manual_job_is_deterministic() {
    let job = JobSpec::manual(["#.#.#.#.#", ".#.#.#.#.", "#########"], BitDepth::Sixteen);
    let result = verify_determinism(|| generate_job(&job).unwrap().source().to_string(), 5);
    result.assert_deterministic();
    assert_eq!(result.hash, generate_job(&job).unwrap().hash());
}

#[test]
fn ttf_table_is_deterministic() {
    let font = require_font!();
    let job = JobSpec::ttf(TtfSource::new(&font), BitDepth::Eight);
    let result = verify_determinism(|| generate_job(&job).unwrap().source().to_string(), 3);
    result.assert_deterministic();
}

#[test]
fn reloading_the_font_does_not_change_output() {
    let font = require_font!();
    let run = || {
        let resource = FontResource::load(&font).unwrap();
        generate_font_table_with(&resource, 8, 16, [48, 57], BitDepth::Eight)
            .unwrap()
            .source
    };
    verify_determinism(run, 3).assert_deterministic();
}

#[test]
fn source_hash_is_blake3_of_source() {
    let output = generate_job(&JobSpec::manual(["##", ".."], BitDepth::Eight)).unwrap();
    assert_eq!(
        output.hash(),
        blake3::hash(output.source().as_bytes()).to_hex().to_string()
    );
    assert_eq!(output.hash(), source_hash(output.source()));
}

#[test]
fn job_hash_ignores_key_order_and_whitespace() {
    let a = JobSpec::from_json(
        r##"{"version": 1, "bit_depth": 8, "source": {"kind": "manual", "rows": ["#."]}}"##,
    )
    .unwrap();
    let b = JobSpec::from_json(
        r##"{
            "source": { "rows": ["#."], "kind": "manual" },
            "bit_depth": 8,
            "version": 1
        }"##,
    )
    .unwrap();
    assert_eq!(canonical_job_hash(&a).unwrap(), canonical_job_hash(&b).unwrap());
}

#[test]
fn job_hash_tracks_content() {
    let eight = JobSpec::manual(["#."], BitDepth::Eight);
    let sixteen = JobSpec::manual(["#."], BitDepth::Sixteen);
    let other_rows = JobSpec::manual([".#"], BitDepth::Eight);

    let hashes = [
        canonical_job_hash(&eight).unwrap(),
        canonical_job_hash(&sixteen).unwrap(),
        canonical_job_hash(&other_rows).unwrap(),
    ];
    assert_ne!(hashes[0], hashes[1]);
    assert_ne!(hashes[0], hashes[2]);
    assert_ne!(hashes[1], hashes[2]);
}

#[test]
fn job_hash_survives_a_file_round_trip() {
    let fixture = JobFixture::new();
    let job = JobSpec::manual(["#..#", "####"], BitDepth::Sixteen);
    let path = fixture.write_job("square", &job);

    let loaded = JobSpec::load(&path).unwrap();
    assert_eq!(canonical_job_hash(&loaded).unwrap(), canonical_job_hash(&job).unwrap());
}
