use crate::error::{ApiError, ApiResult, DEVELOPER};
use crate::normalize::normalize;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Query parameters for the lookup endpoint
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// The TikTok post URL to resolve
    #[serde(default)]
    pub url: Option<String>,
}

/// Resolve a TikTok URL into downloadable media.
///
/// Forwards the URL to the TikWM resolver and normalizes its payload into
/// the stable `{video, foto, ...data}` contract. An empty or missing `url`
/// fails fast with 400 before any upstream call is made.
///
/// # Response
///
/// ```json
/// {
///   "status": true,
///   "developer": "@Al_Azet",
///   "result": {
///     "video": {"jumlah": 2, "watermark": "...", "nowatermark": "...", "nowatermark_hd": null},
///     "foto": {"jumlah": 0, "links": []},
///     "title": "...", "author": {"...": "..."}
///   }
/// }
/// ```
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> ApiResult<impl IntoResponse> {
    let target = query
        .url
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingParameter)?;

    tracing::debug!(url = %target, "Resolving TikTok URL");

    let payload = state.resolver.resolve(target).await?;
    let result = normalize(&payload)?;

    Ok(Json(json!({
        "status": true,
        "developer": DEVELOPER,
        "result": result,
    })))
}
