//! Contract tests for the registry read path against a mock relay.
//!
//! These tests use wiremock to simulate the zero-gas relay endpoint. The
//! envelope and response shapes mirror the live relay: a POST with
//! `{ abi, to, method, id, arguments }` answered by
//! `{ success, output: [fileRecord, isReference, referenceRecord] }`.
//!
//! ## Behavior Tested
//!
//! | Relay behavior | Test |
//! |----------------|------|
//! | Well-formed record tuple | `verify_file_returns_record_*` |
//! | Zero-value "no record" sentinel | `*_zero_*` |
//! | Out-of-range category code | `out_of_range_category_*` |
//! | `success: false` / marker absent | `*_success_false`, `missing_success_marker_*` |
//! | Transport and body failures | `*_http_500`, `*_malformed_body`, `*_connection_error` |

use gtn_core::{ZERO_ADDRESS, ZERO_HASH};
use gtn_ledger_client::config::DEFAULT_CONTRACT_ADDRESS;
use gtn_ledger_client::{FileCategory, LedgerClient, LedgerClientError, LedgerConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OWNER: &str = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";
const HASH: &str = "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// Build a client pointed at a wiremock relay.
fn test_client(mock_server: &MockServer) -> LedgerClient {
    LedgerClient::new(LedgerConfig::for_endpoint(mock_server.uri().parse().unwrap())).unwrap()
}

/// A successful read body wrapping the given file record tuple.
fn read_body(file_record: serde_json::Value) -> serde_json::Value {
    json!({
        "success": true,
        "output": [file_record, false, [ZERO_HASH, ZERO_HASH, "0", "0x"]],
    })
}

// ── Well-formed records ──────────────────────────────────────────────

#[tokio::test]
async fn verify_file_returns_record_and_normalizes_fingerprint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "getFile",
            "to": DEFAULT_CONTRACT_ADDRESS,
            "arguments": [HASH],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(read_body(json!([
            OWNER, "song.mp3", HASH, "1700000000", "0x6869", 2
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    // Bare fingerprint: the client must prepend the wire prefix itself.
    let record = client.verify_file(HASH.trim_start_matches("0x")).await.unwrap();

    assert_eq!(record.file_name, "song.mp3");
    assert_eq!(record.file_hash, HASH);
    assert_eq!(record.timestamp, 1_700_000_000);
    assert_eq!(record.category, FileCategory::Audio);
    assert_eq!(record.data, "hi");
}

#[tokio::test]
async fn verify_file_keeps_prefixed_fingerprint_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({ "arguments": [HASH] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(read_body(json!([
            OWNER, "a.png", HASH, "1", "0x", 0
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client.verify_file(HASH).await.unwrap();
    assert_eq!(record.category, FileCategory::Image);
}

#[tokio::test]
async fn out_of_range_category_maps_to_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(read_body(json!([
            OWNER, "a.bin", HASH, "1700000000", "0x", 7
        ]))))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client.verify_file(HASH).await.unwrap();
    assert_eq!(record.category, FileCategory::Unknown);
}

// ── Zero-value sentinel ──────────────────────────────────────────────

#[tokio::test]
async fn verify_file_returns_none_for_zero_owner() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(read_body(json!([
            ZERO_ADDRESS, "ghost.png", HASH, "1700000000", "0x6869", 0
        ]))))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());
}

#[tokio::test]
async fn verify_file_returns_none_for_zero_hash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(read_body(json!([
            OWNER, "ghost.png", ZERO_HASH, "1700000000", "0x", 0
        ]))))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());

    // The structured surface agrees: absence, not an error.
    let lookup = client.try_verify_file(HASH).await.unwrap();
    assert!(lookup.is_none());
}

// ── Protocol failures ────────────────────────────────────────────────

#[tokio::test]
async fn verify_file_returns_none_on_success_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());

    match client.try_verify_file(HASH).await.unwrap_err() {
        LedgerClientError::Protocol { endpoint, .. } => assert_eq!(endpoint, "getFile"),
        other => panic!("expected Protocol, got: {other:?}"),
    }
}

#[tokio::test]
async fn missing_success_marker_reads_as_failure() {
    let mock_server = MockServer::start().await;

    // No `success` field at all — must behave exactly like `success: false`.
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": [[OWNER, "a.png", HASH, "1700000000", "0x", 0], false, []],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());
    assert!(client.try_verify_file(HASH).await.is_err());
}

#[tokio::test]
async fn malformed_output_shape_reads_as_not_found() {
    let mock_server = MockServer::start().await;

    // Two-element output: wrong arity, treated as absence rather than error.
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "output": [[OWNER, "a.png", HASH, "1700000000", "0x", 0], false],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());
    assert!(client.try_verify_file(HASH).await.unwrap().is_none());
}

// ── Transport failures ───────────────────────────────────────────────

#[tokio::test]
async fn verify_file_returns_none_on_http_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());

    match client.try_verify_file(HASH).await.unwrap_err() {
        LedgerClientError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn verify_file_returns_none_on_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.verify_file(HASH).await.is_none());

    match client.try_verify_file(HASH).await.unwrap_err() {
        LedgerClientError::Json { .. } => {}
        other => panic!("expected Json, got: {other:?}"),
    }
}

#[tokio::test]
async fn verify_file_returns_none_on_connection_error() {
    // Port 1 is never listening: a pure transport failure, no mock at all.
    let config = LedgerConfig::for_endpoint("http://127.0.0.1:1/".parse().unwrap());
    let client = LedgerClient::new(config).unwrap();
    assert!(client.verify_file(HASH).await.is_none());
}

// ── Reference records ────────────────────────────────────────────────

#[tokio::test]
async fn try_verify_file_surfaces_reference_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "output": [
                [OWNER, "v2.png", HASH, "1700000000", "0x", 0],
                true,
                ["0xaaaa", HASH, "1700000001", "0x6d6f646966696564"],
            ],
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let lookup = client.try_verify_file(HASH).await.unwrap().unwrap();

    let reference = lookup.reference.expect("reference should be surfaced");
    assert_eq!(reference.original_file_hash, "0xaaaa");
    assert_eq!(reference.modified_file_hash, HASH);
    assert_eq!(reference.ref_data, "modified");

    // The compatibility surface still returns the bare record.
    let record = client.verify_file(HASH).await.unwrap();
    assert_eq!(record.file_name, "v2.png");
}
