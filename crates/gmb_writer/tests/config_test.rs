//! Tests for configuration loading.

use gmb_writer::{GmbErrorKind, GmbWriterConfig};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() -> anyhow::Result<()> {
    let file = toml_file(
        r#"
[gemini]
model = "gemini-1.5-flash"
request_timeout_secs = 45

[dispatch]
example_delay_ms = 0
"#,
    )?;

    let config = GmbWriterConfig::from_file(file.path())?;

    assert_eq!(config.gemini().model(), "gemini-1.5-flash");
    assert_eq!(*config.gemini().request_timeout_secs(), Some(45));
    assert_eq!(*config.gemini().top_k(), 40);
    assert_eq!(config.dispatch().example_delay(), Duration::ZERO);
    assert_eq!(*config.storage().profile_path(), None);
    Ok(())
}

#[test]
fn bundled_defaults_file_parses() -> anyhow::Result<()> {
    let bundled = concat!(env!("CARGO_MANIFEST_DIR"), "/../../gmb_writer.toml");
    let config = GmbWriterConfig::from_file(bundled)?;

    assert_eq!(config, GmbWriterConfig::default());
    Ok(())
}

#[test]
fn malformed_file_is_a_config_error() -> anyhow::Result<()> {
    let file = toml_file("[gemini\nmodel = ")?;

    let err = GmbWriterConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), GmbErrorKind::Config(_)));
    Ok(())
}

#[test]
fn profile_path_prefers_cli_then_config() -> anyhow::Result<()> {
    let file = toml_file("[storage]\nprofile_path = \"/tmp/from-config.json\"\n")?;
    let config = GmbWriterConfig::from_file(file.path())?;

    assert_eq!(
        config.resolve_profile_path(Some(PathBuf::from("/tmp/from-cli.json")))?,
        PathBuf::from("/tmp/from-cli.json")
    );
    assert_eq!(
        config.resolve_profile_path(None)?,
        PathBuf::from("/tmp/from-config.json")
    );
    Ok(())
}
