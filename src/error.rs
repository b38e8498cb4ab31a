use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum BibliaError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
    #[error("Join error: {0}")]
    Join(String),
    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, BibliaError>;

// Helper conversions
impl From<rusqlite::Error> for BibliaError {
    fn from(e: rusqlite::Error) -> Self { Self::Persistence(e.to_string()) }
}
impl From<serde_json::Error> for BibliaError {
    fn from(e: serde_json::Error) -> Self { Self::Decode(e.to_string()) }
}
impl From<config::ConfigError> for BibliaError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<tokio::task::JoinError> for BibliaError {
    fn from(e: tokio::task::JoinError) -> Self { Self::Join(e.to_string()) }
}
impl From<std::io::Error> for BibliaError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}

impl BibliaError {
    /// Status code a request fault of this kind is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

impl IntoResponse for BibliaError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        warn!(%msg, code=%status.as_u16(), "request error");
        (status, Json(ErrorBody { status: "error", error: msg })).into_response()
    }
}
