use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body whose decode failures answer 400 with the usual
/// `{"error": ...}` body instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        value: u8,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<JsonBody<Sample>, AppError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();
        JsonBody::<Sample>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn valid_body_decodes() {
        let JsonBody(sample) = extract(Some("application/json"), r#"{"value": 3}"#)
            .await
            .unwrap();
        assert_eq!(sample.value, 3);
    }

    #[tokio::test]
    async fn type_mismatch_is_400() {
        let err = extract(Some("application/json"), r#"{"value": 300}"#)
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn syntax_error_and_missing_content_type_are_400() {
        let err = extract(Some("application/json"), "{").await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        let err = extract(None, r#"{"value": 3}"#).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
