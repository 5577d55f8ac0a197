use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lifecraft_core::LifecraftError;

// ---------------------------------------------------------------------------
// Internal sentinels for explicit statuses
// ---------------------------------------------------------------------------

/// Carries an explicit HTTP 401 through the `anyhow::Error` chain.
#[derive(Debug)]
struct UnauthorizedError(String);

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnauthorizedError {}

/// Carries an explicit HTTP 400 for request-shape problems the core never sees.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(UnauthorizedError(msg.into()).into())
    }

    pub fn join(err: tokio::task::JoinError) -> Self {
        Self(anyhow::anyhow!("task join error: {err}"))
    }
}

fn status_for(err: &LifecraftError) -> StatusCode {
    match err {
        LifecraftError::NotInitialized => StatusCode::BAD_REQUEST,
        LifecraftError::PrerequisitesNotMet { .. } => StatusCode::FORBIDDEN,
        e if e.is_invalid_argument() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<UnauthorizedError>() {
            let body = serde_json::json!({ "error": u.0.clone() });
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }
        if let Some(b) = self.0.downcast_ref::<BadRequestError>() {
            let body = serde_json::json!({ "error": b.0.clone() });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let Some(core) = self.0.downcast_ref::<LifecraftError>() else {
            tracing::error!(error = %self.0, "unhandled error");
            let body = serde_json::json!({ "error": self.0.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
        };

        let status = status_for(core);
        if status.is_server_error() {
            tracing::error!(error = %core, "request failed");
        }
        let body = match core {
            LifecraftError::PrerequisitesNotMet { module, missing } => serde_json::json!({
                "error": core.to_string(),
                "moduleId": module,
                "missingPrerequisites": missing,
            }),
            _ => serde_json::json!({ "error": core.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
