//! Wire-behavior tests for the TikWM client against a mockito server.

use mockito::{Matcher, Server};
use tikfetch::{ApiError, MediaResolver, TikwmClient};

const TARGET: &str = "https://www.tiktok.com/@scout2015/video/6718335390845095173";

#[tokio::test]
async fn test_resolve_success_returns_parsed_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("url".into(), TARGET.into()),
            Matcher::UrlEncoded("hd".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":0,"data":{"play":"c.mp4","size":9000}}"#)
        .create_async()
        .await;

    let client = TikwmClient::new(server.url());
    let payload = client.resolve(TARGET).await.unwrap();

    assert_eq!(payload["code"], 0);
    assert_eq!(payload["data"]["play"], "c.mp4");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_resolve_sends_browser_like_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_query(Matcher::Any)
        .match_header("origin", "https://www.tikwm.com")
        .match_header("referer", "https://www.tikwm.com/")
        .match_header("user-agent", "Mozilla/5.0")
        .match_header(
            "accept",
            "application/json, text/javascript, */*;q=0.1",
        )
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = TikwmClient::new(server.url());
    client.resolve(TARGET).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_transport_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = TikwmClient::new(server.url());
    let err = client.resolve(TARGET).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::UpstreamTransport { status: 503 }
    ));
}

#[tokio::test]
async fn test_unparsable_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let client = TikwmClient::new(server.url());
    let err = client.resolve(TARGET).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidUpstreamResponse));
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal() {
    // Port 1 is never listening.
    let client = TikwmClient::new("http://127.0.0.1:1");
    let err = client.resolve(TARGET).await.unwrap_err();

    assert!(matches!(err, ApiError::Internal(_)));
}
