//! End-to-end tests for the public HTTP API.

use axum_test::TestServer;
use serde_json::{json, Value};

use protect::server::{router, state::AppState};

fn server() -> TestServer {
    TestServer::new(router::build(AppState::default())).unwrap()
}

#[tokio::test]
async fn encrypt_then_decrypt_recovers_the_payload() {
    let server = server();

    let resp = server
        .post("/encrypt")
        .json(&json!({"json_field": {"name": "John Doe", "age": 30}}))
        .await;
    assert_eq!(resp.status_code(), 200);

    let encrypted: Value = resp.json();
    let encrypted_json = encrypted["encrypted_json"].as_object().unwrap();
    assert_eq!(encrypted_json.len(), 2);
    for value in encrypted_json.values() {
        // Encoded strings are printable and a multiple of 4 long.
        assert_eq!(value.as_str().unwrap().len() % 4, 0);
    }

    let resp = server
        .post("/decrypt")
        .json(&json!({"json_field": encrypted["encrypted_json"]}))
        .await;
    assert_eq!(resp.status_code(), 200);

    let decrypted: Value = resp.json();
    assert_eq!(decrypted["json_field"]["name"], "John Doe");
    assert_eq!(decrypted["json_field"]["age"], 30);
}

#[tokio::test]
async fn nested_values_survive_the_round_trip() {
    let server = server();

    let resp = server
        .post("/encrypt")
        .json(&json!({"json_field": {"contact": {"email": "a@b.com"}}}))
        .await;
    let encrypted: Value = resp.json();

    let resp = server
        .post("/decrypt")
        .json(&json!({"json_field": encrypted["encrypted_json"]}))
        .await;
    let decrypted: Value = resp.json();
    assert_eq!(decrypted["json_field"]["contact"]["email"], "a@b.com");
}

#[tokio::test]
async fn decrypt_passes_unencoded_values_through_unchanged() {
    let server = server();

    let resp = server
        .post("/encrypt")
        .json(&json!({"json_field": {"secret": "payload"}}))
        .await;
    let encrypted: Value = resp.json();
    let encoded = encrypted["encrypted_json"]["secret"].clone();

    let resp = server
        .post("/decrypt")
        .json(&json!({"json_field": {
            "secret": encoded,
            "greeting": "hello there",
            "count": 7,
            "flag": true,
            "nothing": null,
            "nested": {"a": [1, 2]}
        }}))
        .await;
    assert_eq!(resp.status_code(), 200);

    let decrypted: Value = resp.json();
    let out = decrypted["json_field"].as_object().unwrap();
    assert_eq!(out.len(), 6);
    assert_eq!(out["secret"], "payload");
    assert_eq!(out["greeting"], "hello there");
    assert_eq!(out["count"], 7);
    assert_eq!(out["flag"], true);
    assert_eq!(out["nothing"], Value::Null);
    assert_eq!(out["nested"], json!({"a": [1, 2]}));
}

#[tokio::test]
async fn decrypt_rejects_corrupt_encoded_looking_strings() {
    let server = server();

    // Matches the encoded grammar but decodes to bytes that are not JSON.
    let resp = server
        .post("/decrypt")
        .json(&json!({"json_field": {"bogus": "Word"}}))
        .await;
    assert_eq!(resp.status_code(), 400);

    let err: Value = resp.json();
    assert_eq!(err["code"], "decode_failure");
    assert!(err["message"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn sign_is_order_invariant_and_verify_round_trips() {
    let server = server();

    let resp = server
        .post("/sign")
        .json(&json!({"json_field": {"message": "Hello World", "timestamp": 1616161616}}))
        .await;
    assert_eq!(resp.status_code(), 200);
    let signed: Value = resp.json();
    let signature = signed["signature"].as_str().unwrap().to_owned();
    assert_eq!(signature.len(), 64);

    // Same pairs supplied in reverse key order verify successfully.
    let resp = server
        .post("/verify")
        .json(&json!({
            "json_field": {"timestamp": 1616161616, "message": "Hello World"},
            "signature": signature
        }))
        .await;
    assert_eq!(resp.status_code(), 204);

    // A tampered payload with the original signature is rejected.
    let resp = server
        .post("/verify")
        .json(&json!({
            "json_field": {"message": "Goodbye World", "timestamp": 1616161616},
            "signature": signature
        }))
        .await;
    assert_eq!(resp.status_code(), 400);
}

#[tokio::test]
async fn verify_rejects_a_foreign_signature() {
    let server = server();

    let resp = server
        .post("/verify")
        .json(&json!({
            "json_field": {"k": "v"},
            "signature": "0".repeat(64)
        }))
        .await;
    assert_eq!(resp.status_code(), 400);
    let err: Value = resp.json();
    assert_eq!(err["code"], "signature_mismatch");
}

#[tokio::test]
async fn health_is_ok() {
    let server = server();
    let resp = server.get("/health").await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let server = server();
    let resp = server.post("/sign").json(&json!({"wrong_field": {}})).await;
    assert_eq!(resp.status_code(), 422);
}
