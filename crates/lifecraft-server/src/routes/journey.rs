use axum::extract::State;
use axum::Json;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/journey: the caller's full journey view.
pub async fn get_journey(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = app.service.clone();
    let status = tokio::task::spawn_blocking(move || service.journey(&user))
        .await
        .map_err(AppError::join)??;
    Ok(Json(serde_json::to_value(status)?))
}

/// GET /api/journey/next: recommended next module and overall progress.
pub async fn get_next(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = app.service.clone();
    let summary = tokio::task::spawn_blocking(move || service.next_module(&user))
        .await
        .map_err(AppError::join)??;
    Ok(Json(serde_json::json!({
        "nextModule": summary.next_module,
        "journeyComplete": summary.next_module.is_none(),
        "overallProgress": summary.overall_progress,
        "currentPart": summary.current_part,
        "completedModules": summary.completed_modules,
    })))
}

/// DELETE /api/journey: remove every progress record the caller has.
pub async fn reset_journey(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = app.service.clone();
    let log_user = user.clone();
    let deleted = tokio::task::spawn_blocking(move || service.reset(&user))
        .await
        .map_err(AppError::join)??;
    tracing::info!(user = %log_user, deleted, "journey reset");
    Ok(Json(serde_json::json!({ "success": true, "deleted": deleted })))
}
