//! Advisory client behavior against a local HTTP stub: every failure mode
//! collapses to the fixed fallback, a well-formed reply parses, and
//! overlapping scans are rejected while one is in flight.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use serde_json::json;

use sentinel_advisor::{AdvisoryClient, AdvisoryConfig, AdvisoryError, RiskAssessment, RiskLevel};
use sentinel_core::prelude::{TeamEngine, TeamSnapshot};

// ── Helpers ────────────────────────────────────────────────────────────

fn stub_client(endpoint: &str) -> AdvisoryClient {
    let mut config = AdvisoryConfig::new("test-key");
    config.endpoint = endpoint.to_string();
    config.timeout = Duration::from_secs(2);
    AdvisoryClient::new(config)
}

fn squad_snapshot() -> TeamSnapshot {
    TeamEngine::new(Local::now()).snapshot()
}

/// Wrap a model reply the way generateContent does.
fn envelope(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "parts": [{ "text": text }] } }
        ]
    })
    .to_string()
}

fn valid_text() -> String {
    json!({
        "summary": "All members nominal.",
        "immediateActions": ["Continue sweep"],
        "riskLevel": "LOW"
    })
    .to_string()
}

/// Serve the given `(status, body, hold)` replies in order on a fresh local
/// port, sleeping `hold` before each answer.
fn serve_replies(replies: Vec<(u16, String, Duration)>) -> (String, thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind stub server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("stub server has an ip listener")
        .port();
    let endpoint = format!("http://127.0.0.1:{port}");

    let handle = thread::spawn(move || {
        for (status, body, hold) in replies {
            let request = match server.recv_timeout(Duration::from_secs(5)) {
                Ok(Some(request)) => request,
                _ => return,
            };
            thread::sleep(hold);
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    (endpoint, handle)
}

async fn assess_against(status: u16, body: String) -> RiskAssessment {
    let (endpoint, server) = serve_replies(vec![(status, body, Duration::ZERO)]);
    let client = stub_client(&endpoint);
    let assessment = client
        .assess(&squad_snapshot())
        .await
        .expect("only a busy client returns an error");
    server.join().expect("stub server thread panicked");
    assessment
}

// ── Fallback paths ─────────────────────────────────────────────────────

#[tokio::test]
async fn connection_failure_returns_the_fallback() {
    // Discard port, nothing listens here.
    let client = stub_client("http://127.0.0.1:9");
    let assessment = client
        .assess(&squad_snapshot())
        .await
        .expect("connection failures must not surface as errors");
    assert_eq!(assessment, RiskAssessment::fallback());
}

#[tokio::test]
async fn request_timeout_returns_the_fallback() {
    // The stub holds its reply far past the client deadline.
    let (endpoint, server) =
        serve_replies(vec![(200, envelope(&valid_text()), Duration::from_secs(2))]);
    let mut config = AdvisoryConfig::new("test-key");
    config.endpoint = endpoint;
    config.timeout = Duration::from_millis(300);
    let client = AdvisoryClient::new(config);

    let assessment = client
        .assess(&squad_snapshot())
        .await
        .expect("timeouts must not surface as errors");
    assert_eq!(assessment, RiskAssessment::fallback());

    server.join().expect("stub server thread panicked");
}

#[tokio::test]
async fn http_error_status_returns_the_fallback() {
    let assessment = assess_against(500, envelope(&valid_text())).await;
    assert_eq!(assessment, RiskAssessment::fallback());
}

#[tokio::test]
async fn non_json_body_returns_the_fallback() {
    let assessment = assess_against(200, "upstream proxy error".to_string()).await;
    assert_eq!(assessment, RiskAssessment::fallback());
}

#[tokio::test]
async fn envelope_with_no_candidates_returns_the_fallback() {
    let assessment = assess_against(200, json!({ "candidates": [] }).to_string()).await;
    assert_eq!(assessment, RiskAssessment::fallback());
}

#[tokio::test]
async fn reply_missing_a_field_returns_the_fallback() {
    let text = json!({
        "summary": "Teams stable.",
        "riskLevel": "LOW"
    })
    .to_string();
    let assessment = assess_against(200, envelope(&text)).await;
    assert_eq!(assessment, RiskAssessment::fallback());
}

#[tokio::test]
async fn reply_with_unknown_risk_level_returns_the_fallback() {
    let text = json!({
        "summary": "Teams stable.",
        "immediateActions": ["Hold position"],
        "riskLevel": "CATASTROPHIC"
    })
    .to_string();
    let assessment = assess_against(200, envelope(&text)).await;
    assert_eq!(assessment, RiskAssessment::fallback());
}

// ── Happy path ─────────────────────────────────────────────────────────

#[tokio::test]
async fn well_formed_reply_is_parsed_into_an_assessment() {
    let text = json!({
        "summary": "CO trending up on the breach team.",
        "immediateActions": ["Rotate NDRF-03 out", "Stage medics at the entry"],
        "riskLevel": "HIGH"
    })
    .to_string();
    let assessment = assess_against(200, envelope(&text)).await;

    assert_eq!(assessment.summary, "CO trending up on the breach team.");
    assert_eq!(
        assessment.immediate_actions,
        vec!["Rotate NDRF-03 out", "Stage medics at the entry"]
    );
    assert_eq!(assessment.risk_level, RiskLevel::High);
}

// ── Single flight ──────────────────────────────────────────────────────

#[tokio::test]
async fn overlapping_scan_is_rejected_then_allowed_again() {
    let (endpoint, server) = serve_replies(vec![
        (200, envelope(&valid_text()), Duration::from_millis(400)),
        (200, envelope(&valid_text()), Duration::ZERO),
    ]);
    let client = Arc::new(stub_client(&endpoint));

    let first = {
        let client = Arc::clone(&client);
        let snapshot = squad_snapshot();
        tokio::spawn(async move { client.assess(&snapshot).await })
    };

    // Give the first scan time to take the flag and park on the stub.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let second = client.assess(&squad_snapshot()).await;
    assert!(
        matches!(second, Err(AdvisoryError::ScanInFlight)),
        "second scan should be rejected, got {second:?}"
    );

    let first = first
        .await
        .expect("first scan task panicked")
        .expect("first scan should complete");
    assert_eq!(first.risk_level, RiskLevel::Low);

    // With the first scan done the client accepts work again.
    let again = client
        .assess(&squad_snapshot())
        .await
        .expect("client should accept a scan after the first finishes");
    assert_eq!(again.risk_level, RiskLevel::Low);

    server.join().expect("stub server thread panicked");
}
