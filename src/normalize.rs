//! Response normalization
//!
//! TikWM answers with a loosely-typed `{ code, msg, data }` envelope whose
//! `data` object looks completely different for photo posts and video posts.
//! [`normalize`] turns that into the stable outbound contract: a `video`
//! summary, a `foto` summary, and every other `data` field passed through
//! verbatim. This is the only piece of real logic in the crate, so it is
//! kept pure and side-effect free.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary of the available video renditions.
///
/// `jumlah` is the count of populated variants (0-3). Absent variants
/// serialize as `null`, matching the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoVariants {
    pub jumlah: usize,
    pub watermark: Option<String>,
    pub nowatermark: Option<String>,
    pub nowatermark_hd: Option<String>,
}

/// Summary of a photo post's image set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhotoSet {
    pub jumlah: usize,
    pub links: Vec<String>,
}

/// The stable contract handed to API clients and the web UI.
///
/// `extra` holds every original `data` field so consumers that need more
/// than the summaries (author, stats, music metadata) still get them; it is
/// flattened to the top level on serialization. The computed `video`/`foto`
/// keys always win over same-named upstream keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub video: VideoVariants,
    pub foto: PhotoSet,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JavaScript-style truthiness for a JSON value.
///
/// The upstream schema is versionless and inconsistent, so presence checks
/// follow JS semantics: `null`, `false`, `0`, and `""` are falsy; arrays and
/// objects are always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn field_truthy(data: &Map<String, Value>, key: &str) -> bool {
    data.get(key).map(is_truthy).unwrap_or(false)
}

/// A variant URL counts only when the field is a truthy string.
fn variant_url(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Normalize a raw TikWM payload into the outbound contract.
///
/// Pure and total over JSON input: missing optional fields never error, only
/// a structurally invalid payload or an upstream-declared error code does.
///
/// # Errors
///
/// - [`ApiError::InvalidUpstreamResponse`] when the payload is not a JSON
///   object.
/// - [`ApiError::UpstreamDeclared`] when the payload carries a truthy `code`,
///   with the upstream `msg` (or a generic fallback) and the raw payload for
///   diagnostics.
pub fn normalize(payload: &Value) -> Result<NormalizedResult, ApiError> {
    let envelope = match payload {
        Value::Object(map) => map,
        _ => return Err(ApiError::InvalidUpstreamResponse),
    };

    // TikWM signals its own failures through `code`; zero or absent is
    // success. A truthy non-numeric code is treated as failure as well.
    if let Some(code) = envelope.get("code") {
        if is_truthy(code) {
            let message = envelope
                .get("msg")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or("Upstream returned an error")
                .to_string();
            return Err(ApiError::UpstreamDeclared {
                message,
                payload: payload.clone(),
            });
        }
    }

    let data = envelope
        .get("data")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let mut video = VideoVariants::default();
    let mut foto = PhotoSet::default();

    // Photo vs. video is inferred from the absence of all three size
    // fields; TikWM exposes no explicit content-type flag. Known risk: a
    // video without any size field would be misread as a photo post. Kept
    // as-is for parity with observed upstream behavior.
    let is_photo = !field_truthy(&data, "size")
        && !field_truthy(&data, "wm_size")
        && !field_truthy(&data, "hd_size");

    if is_photo {
        foto.links = data
            .get("images")
            .and_then(Value::as_array)
            .map(|images| {
                images
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        foto.jumlah = foto.links.len();
    } else {
        // Fixed order: watermarked, clean, HD. The checks are independent
        // but the order keeps counting deterministic.
        if let Some(url) = variant_url(&data, "wmplay") {
            video.watermark = Some(url);
            video.jumlah += 1;
        }
        if let Some(url) = variant_url(&data, "play") {
            video.nowatermark = Some(url);
            video.jumlah += 1;
        }
        if let Some(url) = variant_url(&data, "hdplay") {
            video.nowatermark_hd = Some(url);
            video.jumlah += 1;
        }
    }

    // Pass the remaining upstream fields through verbatim; the computed
    // summaries shadow any same-named upstream keys.
    let mut extra = data;
    extra.remove("video");
    extra.remove("foto");

    Ok(NormalizedResult { video, foto, extra })
}
