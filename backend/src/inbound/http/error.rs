//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`crate::domain::Error`] into Actix responses here. Every failure is
//! rendered as `{"error": "<message>"}`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::middleware::trace::TraceId;

const REDACTED_MESSAGE: &str = "Internal server error";

/// Wire envelope for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    #[schema(example = "user not found")]
    pub error: String,
}

/// Domain failure decorated with the trace identifier of the request that
/// produced it.
#[derive(Debug, Clone)]
pub struct ApiError {
    inner: Error,
    trace_id: Option<String>,
}

impl ApiError {
    /// Wrap a domain failure, capturing any ambient trace identifier.
    pub fn from_domain(error: Error) -> Self {
        Self {
            inner: error,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.inner.code()
    }

    /// Message as produced by the domain, before any redaction.
    pub fn message(&self) -> &str {
        self.inner.message()
    }

    /// Trace identifier propagated into the response header.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    fn body(&self) -> ErrorResponse {
        let error = match self.code() {
            ErrorCode::InternalError => REDACTED_MESSAGE.to_owned(),
            _ => self.message().to_owned(),
        };
        ErrorResponse { error }
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        Self::from_domain(value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(message = %self.message(), trace_id = ?self.trace_id, "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        builder.json(self.body())
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON extractor configuration that reports unreadable bodies with the
/// standard error envelope instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "rejected request body");
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Deserialize(source) => format!("invalid JSON body: {source}"),
        _ => "request body could not be read".to_owned(),
    };
    ApiError::from_domain(Error::invalid_request(message)).into()
}
