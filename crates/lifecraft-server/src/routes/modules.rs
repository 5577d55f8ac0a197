use axum::extract::{Path, Query, State};
use axum::Json;
use lifecraft_core::progress::ProgressUpdate;
use lifecraft_core::registry::Registry;
use lifecraft_core::types::{ModuleId, ModuleStatus};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/modules: the module registry in journey order.
pub async fn list_modules(State(app): State<AppState>) -> Json<serde_json::Value> {
    let registry: &Registry = app.service.registry();
    let modules: Vec<serde_json::Value> = registry
        .modules()
        .iter()
        .enumerate()
        .map(|(index, def)| {
            serde_json::json!({
                "id": def.id,
                "name": def.name,
                "nameKo": def.name_ko,
                "description": def.description,
                "route": def.route,
                "part": def.part,
                "order": index + 1,
                "stages": def.stages,
                "prerequisites": def.prerequisites,
            })
        })
        .collect();
    Json(serde_json::json!({ "modules": modules }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    #[serde(default)]
    module_id: Option<String>,
}

/// GET /api/modules/progress: every module with the caller's progress and
/// gate result. `?moduleId=` narrows the response to one module.
pub async fn get_progress(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = app.service.clone();
    let result = tokio::task::spawn_blocking(move || -> lifecraft_core::Result<serde_json::Value> {
        if let Some(raw) = query.module_id {
            let module: ModuleId = raw.parse()?;
            let state = service.module_progress(&user, module)?;
            return Ok(serde_json::json!({ "module": state }));
        }
        let modules = service.all_progress(&user)?;
        let summary = service.next_module(&user)?;
        Ok(serde_json::json!({
            "modules": modules,
            "overallProgress": summary.overall_progress,
            "nextModule": summary.next_module,
            "isAdmin": service.access(&user)?.is_admin(),
        }))
    })
    .await
    .map_err(AppError::join)??;

    Ok(Json(result))
}

/// Body accepted by POST /api/modules/progress. Fields arrive as raw
/// strings and numbers and are parsed here, so a bad value is reported with
/// the core's own message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressBody {
    #[serde(default)]
    module_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    current_stage: Option<String>,
    #[serde(default)]
    completion_percentage: Option<i64>,
}

impl UpdateProgressBody {
    fn into_update(self) -> Result<(ModuleId, ProgressUpdate), AppError> {
        let module: ModuleId = self
            .module_id
            .ok_or_else(|| AppError::bad_request("moduleId is required"))?
            .parse()?;
        let status = self
            .status
            .map(|s| s.parse::<ModuleStatus>())
            .transpose()?;
        let completion_percentage = self
            .completion_percentage
            .map(|p| {
                u32::try_from(p).map_err(|_| {
                    AppError::bad_request(format!(
                        "invalid completion percentage {p}: must be 0-100"
                    ))
                })
            })
            .transpose()?;
        Ok((
            module,
            ProgressUpdate {
                status,
                current_stage: self.current_stage,
                completion_percentage,
            },
        ))
    }
}

/// POST /api/modules/progress: record a status or stage change.
pub async fn update_progress(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(body): JsonBody<UpdateProgressBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (module, update) = body.into_update()?;
    let service = app.service.clone();
    let log_user = user.clone();
    let record = tokio::task::spawn_blocking(move || service.update_progress(&user, module, &update))
        .await
        .map_err(AppError::join)?
        .inspect_err(|e| {
            tracing::info!(user = %log_user, module = %module, error = %e, "progress update refused");
        })?;

    tracing::info!(
        user = %record.user_id,
        module = %record.module_id,
        status = %record.status,
        "progress updated"
    );
    Ok(Json(serde_json::json!({
        "success": true,
        "progress": record,
    })))
}

/// GET /api/modules/{module}/gate: can the caller start this module?
pub async fn get_gate(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(module): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let module: ModuleId = module.parse()?;
    let service = app.service.clone();
    let check = tokio::task::spawn_blocking(move || service.can_start(&user, module))
        .await
        .map_err(AppError::join)??;
    Ok(Json(serde_json::to_value(check)?))
}
