//! Integration tests for manifest_runtime.
//!
//! All tests use temporary directories for isolation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use manifest_engine::catalogue::PantacleKind;
use manifest_engine::domain::QuantumCode;
use manifest_engine::request::ManifestationRequest;

use manifest_runtime::config::RuntimeConfig;
use manifest_runtime::report::{unseal_request, unseal_request_with};
use manifest_runtime::report_codec::{import_report_from_file, report_hash, ReportError};
use manifest_runtime::session::Session;

/// Reference code for the reference request at 2026-10-18T12:00:00.
const GOLDEN_CODE: &str = "5790-8362-1745";

fn reference_request() -> ManifestationRequest {
    ManifestationRequest::new("Eu sou próspero e abundante", "João Silva", "15/08/1990")
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Create a temp directory for a test.
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("manifest_runtime_tests")
        .join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

fn session_in(dir: &Path, seal: bool) -> Session {
    Session::new(RuntimeConfig {
        output_dir: dir.to_path_buf(),
        seal_reports: seal,
        ..RuntimeConfig::default()
    })
}

// ─────────────────────────────────────────────────────────────
// Test 1: session writes the golden report
// ─────────────────────────────────────────────────────────────

#[test]
fn session_writes_golden_report() {
    let dir = temp_dir("golden_report");
    let session = session_in(&dir, true);

    let outcome = session.manifest_at(&reference_request(), &noon()).expect("manifest");
    assert_eq!(outcome.report.reading.quantum_code.as_str(), GOLDEN_CODE);
    assert_eq!(outcome.path, dir.join("report_5790_8362_1745.json"));
    assert!(outcome.path.exists());

    let n = &outcome.report.reading.numerology;
    assert_eq!(
        (n.destiny_number, n.soul_number, n.personality_number, n.expression_number),
        (6, 4, 9, 4)
    );
}

// ─────────────────────────────────────────────────────────────
// Test 2: written report reloads identically
// ─────────────────────────────────────────────────────────────

#[test]
fn written_report_reloads_identically() {
    let dir = temp_dir("reload");
    let session = session_in(&dir, true);
    let outcome = session.manifest_at(&reference_request(), &noon()).unwrap();

    let code: QuantumCode = GOLDEN_CODE.parse().unwrap();
    let loaded = session.load(&code).unwrap();
    assert_eq!(loaded, outcome.report);
    assert_eq!(report_hash(&loaded).unwrap(), outcome.hash);
}

// ─────────────────────────────────────────────────────────────
// Test 3: sealed payload recovers the request
// ─────────────────────────────────────────────────────────────

#[test]
fn sealed_payload_recovers_request() {
    let dir = temp_dir("sealed");
    let session = session_in(&dir, true);
    let request = reference_request().with_pantacle(PantacleKind::Protection);
    let outcome = session.manifest_at(&request, &noon()).unwrap();

    let raw = fs::read_to_string(&outcome.path).unwrap();
    let sealed = outcome.report.sealed_payload.as_deref().unwrap();
    assert!(raw.contains(sealed));

    let imported = import_report_from_file(&outcome.path).unwrap();
    assert_eq!(unseal_request(&imported).unwrap(), Some(request));

    let wrong: QuantumCode = "1234-5678-9012".parse().unwrap();
    assert!(unseal_request_with(&imported, &wrong).is_err());
}

// ─────────────────────────────────────────────────────────────
// Test 4: unsealed sessions store no payload
// ─────────────────────────────────────────────────────────────

#[test]
fn unsealed_session_stores_no_payload() {
    let dir = temp_dir("unsealed");
    let session = session_in(&dir, false);
    let outcome = session.manifest_at(&reference_request(), &noon()).unwrap();
    assert!(outcome.report.sealed_payload.is_none());
    assert_eq!(outcome.report.request, Some(reference_request()));
    assert!(fs::read_to_string(&outcome.path).unwrap().contains("João Silva"));
}

// ─────────────────────────────────────────────────────────────
// Test 4b: sealed report file holds no plaintext personal data
// ─────────────────────────────────────────────────────────────

#[test]
fn sealed_report_file_has_no_plaintext_request() {
    let dir = temp_dir("sealed_plaintext");
    let session = session_in(&dir, true);
    let outcome = session.manifest_at(&reference_request(), &noon()).unwrap();
    assert!(outcome.report.request.is_none());

    let raw = fs::read_to_string(&outcome.path).unwrap();
    assert!(!raw.contains("João Silva"));
    assert!(!raw.contains("15/08/1990"));
    assert!(!raw.contains("\"request\""));
}

// ─────────────────────────────────────────────────────────────
// Test 5: different instants produce different reports
// ─────────────────────────────────────────────────────────────

#[test]
fn different_instants_produce_different_codes() {
    let dir = temp_dir("instants");
    let session = session_in(&dir, false);
    let later = noon() + chrono::Duration::milliseconds(250);

    let a = session.manifest_at(&reference_request(), &noon()).unwrap();
    let b = session.manifest_at(&reference_request(), &later).unwrap();
    assert_ne!(a.report.reading.quantum_code, b.report.reading.quantum_code);
    assert_ne!(a.path, b.path);
    assert_eq!(a.report.reading.numerology, b.report.reading.numerology);
}

// ─────────────────────────────────────────────────────────────
// Test 6: edited report is rejected on load
// ─────────────────────────────────────────────────────────────

#[test]
fn edited_report_is_rejected() {
    let dir = temp_dir("edited");
    let session = session_in(&dir, false);
    let outcome = session.manifest_at(&reference_request(), &noon()).unwrap();

    let mut v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&outcome.path).unwrap()).unwrap();
    v["reading"]["numerology"]["expression_number"] = serde_json::json!(7);
    fs::write(&outcome.path, serde_json::to_string(&v).unwrap()).unwrap();

    match session.load(&outcome.report.reading.quantum_code) {
        Err(ReportError::InvariantViolation(msg)) => assert!(msg.contains("expression")),
        other => panic!("Expected InvariantViolation, got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 6b: report whose request no longer matches its reading
// ─────────────────────────────────────────────────────────────

#[test]
fn report_with_swapped_request_is_rejected() {
    let dir = temp_dir("swapped_request");
    let session = session_in(&dir, false);
    let outcome = session.manifest_at(&reference_request(), &noon()).unwrap();

    let mut v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&outcome.path).unwrap()).unwrap();
    v["request"]["name"] = serde_json::json!("Maria Souza");
    fs::write(&outcome.path, serde_json::to_string(&v).unwrap()).unwrap();

    match session.load(&outcome.report.reading.quantum_code) {
        Err(ReportError::InvariantViolation(msg)) => {
            assert!(msg.contains("request_numerology"), "{}", msg)
        }
        other => panic!("Expected InvariantViolation, got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 7: malformed inputs still produce a complete report
// ─────────────────────────────────────────────────────────────

#[test]
fn malformed_inputs_still_manifest() {
    let dir = temp_dir("malformed");
    let session = session_in(&dir, true);
    let request = ManifestationRequest::new("", "", "not-a-date");
    let outcome = session.manifest_at(&request, &noon()).unwrap();

    let n = &outcome.report.reading.numerology;
    assert_eq!(n.name_value, 0);
    assert_eq!(n.soul_number, 9);
    assert_eq!(n.personality_number, 9);
    assert_eq!(
        n.date_value,
        "not-a-date".chars().map(|c| c as i64).sum::<i64>()
    );
    assert_eq!(outcome.report.reading.sigil.condensed_text, "");
}

// ─────────────────────────────────────────────────────────────
// Test 8: wall-clock manifest matches the code pattern
// ─────────────────────────────────────────────────────────────

#[test]
fn wall_clock_manifest_has_valid_code() {
    let dir = temp_dir("wall_clock");
    let session = session_in(&dir, true);
    let outcome = session.manifest(&reference_request()).unwrap();
    let code = outcome.report.reading.quantum_code.as_str();
    assert!(code.parse::<QuantumCode>().is_ok(), "{}", code);
    assert!(outcome.path.exists());
}
