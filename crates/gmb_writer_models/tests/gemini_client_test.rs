//! Tests for the Gemini client against a local one-shot HTTP server.

use gmb_writer_error::{GeminiErrorKind, GmbError, GmbErrorKind};
use gmb_writer_models::{GeminiClient, GeminiSettings, GenerativeBackend};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one canned response and hands back the raw request it received.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> anyhow::Result<(String, JoinHandle<anyhow::Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let endpoint = format!("http://{}", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request_complete(&request) {
            let n = socket.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;
        Ok(String::from_utf8_lossy(&request).into_owned())
    });

    Ok((endpoint, handle))
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            line.to_ascii_lowercase()
                .strip_prefix("content-length:")
                .map(|value| value.trim().parse::<usize>().unwrap_or(0))
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn client_for(endpoint: &str) -> anyhow::Result<GeminiClient> {
    let settings = GeminiSettings::builder()
        .endpoint(endpoint)
        .model("test-model")
        .request_timeout_secs(5u64)
        .build()?;
    Ok(GeminiClient::new(settings)?)
}

fn gemini_kind(err: &GmbError) -> &GeminiErrorKind {
    match err.kind() {
        GmbErrorKind::Gemini(e) => &e.kind,
        other => panic!("expected a Gemini error, got {other}"),
    }
}

#[tokio::test]
async fn success_returns_first_candidate_text() -> anyhow::Result<()> {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"Fresh bread daily"}]}}]}"#,
    )
    .await?;

    let text = client_for(&endpoint)?
        .generate("secret-key", "Write a post")
        .await?;
    assert_eq!(text, "Fresh bread daily");

    let request = server.await??;
    let lowered = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /test-model:generateContent HTTP/1.1"));
    assert!(lowered.contains("x-goog-api-key: secret-key"));
    assert!(request.contains(r#""text":"Write a post""#));
    assert!(request.contains(r#""maxOutputTokens":2048"#));
    Ok(())
}

#[tokio::test]
async fn error_status_surfaces_upstream_message() -> anyhow::Result<()> {
    let (endpoint, server) = serve_once(
        "400 Bad Request",
        r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
    )
    .await?;

    let err = client_for(&endpoint)?
        .generate("bad-key", "prompt")
        .await
        .unwrap_err();
    server.await??;

    assert_eq!(
        gemini_kind(&err),
        &GeminiErrorKind::HttpError {
            status_code: 400,
            message: "API key not valid".to_string(),
        }
    );
    assert_eq!(err.user_message(), "API error: API key not valid");
    Ok(())
}

#[tokio::test]
async fn missing_text_is_an_invalid_response() -> anyhow::Result<()> {
    let (endpoint, server) = serve_once("200 OK", r#"{"candidates":[]}"#).await?;

    let err = client_for(&endpoint)?
        .generate("key", "prompt")
        .await
        .unwrap_err();
    server.await??;

    assert!(matches!(
        gemini_kind(&err),
        GeminiErrorKind::InvalidResponse(_)
    ));
    Ok(())
}

#[tokio::test]
async fn non_json_success_body_is_an_invalid_response() -> anyhow::Result<()> {
    let (endpoint, server) = serve_once("200 OK", "<html>oops</html>").await?;

    let err = client_for(&endpoint)?
        .generate("key", "prompt")
        .await
        .unwrap_err();
    server.await??;

    assert!(matches!(
        gemini_kind(&err),
        GeminiErrorKind::InvalidResponse(_)
    ));
    Ok(())
}
