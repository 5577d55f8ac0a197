use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lifecraft_core::types::UserId;
use lifecraft_core::LifecraftError;

use crate::error::AppError;

/// Header set by the upstream auth proxy to the authenticated user's id.
pub const USER_HEADER: &str = "x-lifecraft-user";

/// The caller, as identified by [`USER_HEADER`].
///
/// Missing, empty or blank header → 401. A header that is not a valid user id → 400.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_HEADER) else {
            return Err(AppError::unauthorized(format!("missing {USER_HEADER} header")));
        };
        let raw = value
            .to_str()
            .map_err(|_| LifecraftError::InvalidUserId("<non-ascii>".into()))?
            .trim();
        if raw.is_empty() {
            return Err(AppError::unauthorized(format!("empty {USER_HEADER} header")));
        }
        Ok(CurrentUser(UserId::parse(raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    async fn extract(header: Option<&str>) -> Result<CurrentUser, AppError> {
        let mut builder = Request::builder().uri("/api/journey");
        if let Some(h) = header {
            builder = builder.header(USER_HEADER, h);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CurrentUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn valid_header_is_accepted() {
        let user = extract(Some("alice@example.com")).await.unwrap();
        assert_eq!(user.0.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        let err = extract(Some("")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_header_is_401() {
        let err = extract(Some("   ")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_header_is_400() {
        let err = extract(Some("not a user")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
