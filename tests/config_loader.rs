use std::fs;

use charisma_quiz::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(dir.path().join("nope.toml")).expect("defaults");
    assert_eq!(config.provider.model, "gemini-2.5-flash");
    assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.quiz.question_count, 5);
    assert!(!config.funnel.sales_url.is_empty());
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[provider]
model = "gemini-2.0-pro"

[quiz]
question_count = 3
"#,
    );
    let config = Config::load_from(path).expect("valid config");
    assert_eq!(config.provider.model, "gemini-2.0-pro");
    assert_eq!(config.quiz.question_count, 3);
    // Untouched sections keep their defaults.
    assert_eq!(config.provider.timeout_seconds, 30);
    assert!(!config.funnel.quiz_url.is_empty());
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("provider = not toml");
    let err = Config::load_from(path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_question_count_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[quiz]
question_count = 0
"#,
    );
    let err = Config::load_from(path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn empty_model_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[provider]
model = "  "
"#,
    );
    let err = Config::load_from(path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
