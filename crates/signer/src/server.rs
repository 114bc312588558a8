use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::SignerServerError;
use crate::signing::DsaKeyPair;

#[derive(Clone)]
pub struct AppState {
    pub keypair: Arc<DsaKeyPair>,
}

#[derive(Debug, Deserialize)]
pub struct SignRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SignResponse {
    pub signature: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub message: String,
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/healthcheck",
            get(|| async move { (StatusCode::OK, "Ok").into_response() }),
        )
        .route("/sign", post(sign_handler))
        .route("/verify", post(verify_handler))
        // The reference deployment serves browser clients from any origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(host: String, port: u16, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(%host, port, "listening");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn sign_handler(
    State(state): State<AppState>,
    body: Result<Json<SignRequest>, JsonRejection>,
) -> Result<Json<SignResponse>, SignerServerError> {
    let Json(request) = body.map_err(|e| SignerServerError::BadRequest(e.body_text()))?;

    let signature = state.keypair.sign(request.message.as_bytes())?;

    Ok(Json(SignResponse {
        signature: hex::encode(signature),
    }))
}

async fn verify_handler(
    State(state): State<AppState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, SignerServerError> {
    let Json(request) = body.map_err(|e| SignerServerError::BadRequest(e.body_text()))?;

    // Mismatch, bad hex, bad DER: all collapse to `valid: false`, never an
    // error status.
    let outcome = state
        .keypair
        .verify_hex(request.message.as_bytes(), &request.signature);

    Ok(Json(VerifyResponse {
        valid: outcome.is_valid(),
    }))
}
