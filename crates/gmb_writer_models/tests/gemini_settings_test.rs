//! Tests for Gemini settings and client construction.

use gmb_writer_error::{BuilderError, BuilderErrorKind};
use gmb_writer_models::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, GeminiClient, GeminiSettings, GenerativeBackend,
};

#[test]
fn defaults_match_documented_values() {
    let settings = GeminiSettings::default();
    assert_eq!(settings.endpoint(), DEFAULT_GEMINI_ENDPOINT);
    assert_eq!(settings.model(), DEFAULT_GEMINI_MODEL);
    assert_eq!(*settings.top_k(), 40);
    assert_eq!(*settings.max_output_tokens(), 2048);
    assert_eq!(*settings.request_timeout_secs(), None);
}

#[test]
fn builder_defaults_equal_struct_defaults() -> anyhow::Result<()> {
    assert_eq!(GeminiSettings::builder().build()?, GeminiSettings::default());
    Ok(())
}

#[test]
fn generate_url_joins_endpoint_and_model() -> anyhow::Result<()> {
    assert_eq!(
        GeminiSettings::default().generate_url(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro:generateContent"
    );

    let custom = GeminiSettings::builder()
        .endpoint("http://localhost:8080/models/")
        .model("test-model")
        .build()?;
    assert_eq!(
        custom.generate_url(),
        "http://localhost:8080/models/test-model:generateContent"
    );
    Ok(())
}

#[test]
fn builder_rejects_out_of_range_sampling() {
    let err = BuilderError::from(GeminiSettings::builder().temperature(3.5f32).build().unwrap_err());
    assert!(matches!(err.kind(), BuilderErrorKind::ValidationFailed(msg) if msg.contains("temperature")));

    let err = BuilderError::from(GeminiSettings::builder().top_p(0.0f32).build().unwrap_err());
    assert!(matches!(err.kind(), BuilderErrorKind::ValidationFailed(msg) if msg.contains("top_p")));

    let err = BuilderError::from(GeminiSettings::builder().model("  ").build().unwrap_err());
    assert!(err.to_string().contains("model must not be blank"));
}

#[test]
fn partial_settings_deserialize_with_defaults() -> anyhow::Result<()> {
    let settings: GeminiSettings =
        serde_json::from_str(r#"{"model":"gemini-1.5-flash","request_timeout_secs":30}"#)?;
    assert_eq!(settings.model(), "gemini-1.5-flash");
    assert_eq!(settings.endpoint(), DEFAULT_GEMINI_ENDPOINT);
    assert_eq!(*settings.request_timeout_secs(), Some(30));
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_reports_request_failure() -> anyhow::Result<()> {
    let settings = GeminiSettings::builder()
        .endpoint("http://127.0.0.1:9")
        .request_timeout_secs(2u64)
        .build()?;
    let client = GeminiClient::new(settings)?;

    assert_eq!(client.provider_name(), "gemini");
    let err = client.generate("key", "prompt").await.unwrap_err();
    assert!(err.to_string().contains("request failed"));
    Ok(())
}
