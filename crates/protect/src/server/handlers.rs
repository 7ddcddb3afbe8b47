//! Axum request handlers for all service endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    EncryptedResponse, ErrorResponse, HealthResponse, RawJsonBody, SignResponse, VerifyRequest,
};
use common::ServiceError;
use tracing::warn;

use super::policy::looks_encoded;
use super::state::AppState;

/// Render a [`ServiceError`] as its mapped status code plus the standard
/// error body.
fn service_error(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.code(), err.to_string()))).into_response()
}

/// `POST /encrypt` — encode every value of `json_field` at depth one.
///
/// Nested objects and arrays are encoded whole, as the value of their
/// top-level key. Encoding never fails, so the endpoint always returns 200
/// for a well-formed body.
pub async fn encrypt(State(state): State<AppState>, Json(req): Json<RawJsonBody>) -> Response {
    let mut encrypted = BTreeMap::new();
    for (key, value) in &req.json_field {
        encrypted.insert(key.clone(), state.codec.encode(value));
    }
    (
        StatusCode::OK,
        Json(EncryptedResponse {
            encrypted_json: encrypted,
        }),
    )
        .into_response()
}

/// `POST /decrypt` — decode encoded-looking string values at depth one.
///
/// Each string value matching the encoded-string grammar (see
/// [`looks_encoded`]) is replaced by its decoded value; every other value
/// passes through unchanged. A value that matches the grammar but fails to
/// decode fails the whole request with 400 rather than being silently
/// passed through.
pub async fn decrypt(State(state): State<AppState>, Json(req): Json<RawJsonBody>) -> Response {
    let mut decrypted = serde_json::Map::with_capacity(req.json_field.len());
    for (key, value) in req.json_field {
        match value {
            serde_json::Value::String(ref text) if looks_encoded(text) => {
                match state.codec.decode(text) {
                    Ok(decoded) => {
                        decrypted.insert(key, decoded);
                    }
                    Err(e) => {
                        warn!(key = %key, error = %e, "decode failed for encoded-looking value");
                        let err = ServiceError::DecodeFailure(format!(
                            "value under key '{key}' matches the encoded format but failed to decode"
                        ));
                        return service_error(&err);
                    }
                }
            }
            other => {
                decrypted.insert(key, other);
            }
        }
    }
    (
        StatusCode::OK,
        Json(RawJsonBody {
            json_field: decrypted,
        }),
    )
        .into_response()
}

/// `POST /sign` — generate an order-invariant signature over `json_field`.
pub async fn sign(State(state): State<AppState>, Json(req): Json<RawJsonBody>) -> Response {
    let payload = serde_json::Value::Object(req.json_field);
    match state.signer.generate(&payload) {
        Ok(signature) => (StatusCode::OK, Json(SignResponse { signature })).into_response(),
        Err(e) => {
            warn!(error = %e, "signature generation rejected payload");
            service_error(&ServiceError::BadRequest(e.to_string()))
        }
    }
}

/// `POST /verify` — recompute the signature for `json_field` and compare.
///
/// Responds 204 with no body on a match, 400 otherwise. A mismatch is the
/// only failure surfaced; callers learn nothing about how close the
/// candidate was.
pub async fn verify(State(state): State<AppState>, Json(req): Json<VerifyRequest>) -> Response {
    let payload = serde_json::Value::Object(req.json_field);
    match state.signer.verify(&payload, &req.signature) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {
            let err = ErrorResponse::new("signature_mismatch", "access denied");
            (StatusCode::BAD_REQUEST, Json(err)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "signature verification rejected payload");
            service_error(&ServiceError::BadRequest(e.to_string()))
        }
    }
}

/// `GET /health` — liveness check.
///
/// The service holds no mutable state, so readiness is unconditional; the
/// body reports which algorithm implementations are active.
pub async fn health(State(state): State<AppState>) -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        codec: state.codec.name().into(),
        signer: state.signer.name().into(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}
