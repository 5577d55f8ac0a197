use axum::extract::{Path, Query};
use axum::Json;
use lifecraft_core::enneagram::{self, profiles, Instinct, Locale, Response};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::extract::JsonBody;

fn parse_locale(raw: Option<&str>) -> Result<Locale, AppError> {
    Ok(raw.map(str::parse).transpose()?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct ScoreBody {
    #[serde(default)]
    responses: Vec<Response>,
    #[serde(default)]
    instincts: Option<Vec<Response>>,
    #[serde(default)]
    locale: Option<String>,
}

/// POST /api/enneagram/score: score screener (and optional instinct) answers.
pub async fn score(
    CurrentUser(_user): CurrentUser,
    JsonBody(body): JsonBody<ScoreBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let locale = parse_locale(body.locale.as_deref())?;
    let assessment = enneagram::assess(&body.responses, body.instincts.as_deref(), locale)?;
    Ok(Json(serde_json::to_value(assessment)?))
}

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    locale: Option<String>,
}

/// GET /api/enneagram/items?locale=: screener and instinct item banks.
pub async fn items(
    CurrentUser(_user): CurrentUser,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let locale = parse_locale(query.locale.as_deref())?;
    Ok(Json(serde_json::json!({
        "locale": locale,
        "screener": enneagram::screener_items(locale),
        "instincts": enneagram::instinct_items(locale),
        "likert": { "min": enneagram::LIKERT_MIN, "max": enneagram::LIKERT_MAX },
    })))
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    wing: Option<String>,
    #[serde(default)]
    instinct: Option<String>,
}

/// GET /api/enneagram/profiles/{type}?locale=&wing=&instinct=: one type's
/// profile, with wing and subtype text when asked for.
pub async fn profile(
    CurrentUser(_user): CurrentUser,
    Path(raw_type): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let locale = parse_locale(query.locale.as_deref())?;
    let profile = profiles::lookup(&raw_type)?;
    let t = profile.enneagram_type;

    let mut body = serde_json::json!({ "profile": profile.localized(locale) });
    if let Some(raw) = query.wing {
        let wing = profiles::lookup(&raw)?.enneagram_type;
        body["wing"] = serde_json::json!({
            "wing": wing,
            "description": enneagram::wing_description(t, wing, locale)?,
        });
    }
    if let Some(raw) = query.instinct {
        let instinct: Instinct = raw.parse()?;
        body["subtype"] = serde_json::json!({
            "instinct": instinct,
            "name": instinct.display_name(locale),
            "description": enneagram::subtype_description(t, instinct, locale)?,
        });
    }
    Ok(Json(body))
}
