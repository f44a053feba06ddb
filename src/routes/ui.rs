use axum::response::Html;

/// The bundled single-page UI, compiled into the binary.
static INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the web UI.
///
/// Registered as the router fallback: every path that is not `/api` gets the
/// full HTML page, matching the original edge function's behavior.
pub async fn page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
