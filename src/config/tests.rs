//! Tests for config functionality.

use crate::config::types::DEFAULT_NO_LIMIT_TOKEN;
use crate::config::{CONFIG_ENV_VAR, Config, PromptTemplates};
use crate::error::AppError;
use crate::form::{Difficulty, QuestionType};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.default_difficulty, Difficulty::Normal);
    assert_eq!(config.default_question_type, QuestionType::Descriptive);
    assert_eq!(config.default_num_choices, 5);
    assert_eq!(config.choices_min, 2);
    assert_eq!(config.choices_max, 8);
    assert_eq!(config.no_limit_token, DEFAULT_NO_LIMIT_TOKEN);
    assert_eq!(config.templates, PromptTemplates::default());
    assert!(config.clipboard_command.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
default_difficulty: hard
default_num_choices: 4
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_difficulty, Difficulty::Hard);
    assert_eq!(config.default_num_choices, 4);

    // Unspecified values should use defaults
    assert_eq!(config.choices_max, 8);
    assert_eq!(config.default_question_type, QuestionType::Descriptive);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
default_difficulty: 難関大入試レベル
default_question_type: 多肢択一
default_num_choices: 4
choices_min: 3
choices_max: 6
no_limit_token: 制限なし
clipboard_command: "xclip -selection clipboard"
templates:
  descriptive: "{problem_text} / {word_limit}"
  multiple_choice: "{problem_text} / {num_choices}"
  difficulty: "[{difficulty}] {body}"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_difficulty, Difficulty::EntranceExam);
    assert_eq!(config.default_question_type, QuestionType::MultipleChoice);
    assert_eq!(config.default_num_choices, 4);
    assert_eq!(config.choices_min, 3);
    assert_eq!(config.choices_max, 6);
    assert_eq!(config.no_limit_token, "制限なし");
    assert_eq!(
        config.clipboard_command.as_deref(),
        Some("xclip -selection clipboard")
    );
    assert_eq!(config.templates.difficulty, "[{difficulty}] {body}");
}

#[test]
fn test_partial_templates_keep_other_defaults() {
    let yaml = r#"
templates:
  difficulty: "{body} ({difficulty})"
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(
        config.templates.descriptive,
        PromptTemplates::default().descriptive
    );
    assert_eq!(config.templates.difficulty, "{body} ({difficulty})");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
window_title: 試験問題作成アプリ
default_num_choices: 6
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.default_num_choices, 6);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("default_num_choices: [").unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
}

#[test]
fn test_unknown_difficulty_is_config_error() {
    let err = Config::from_yaml("default_difficulty: legendary").unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
}

#[test]
fn test_validate_choices_min_floor() {
    let err = Config::from_yaml("choices_min: 1").unwrap_err();
    assert!(err.to_string().contains("choice range"));
}

#[test]
fn test_validate_choices_max_ceiling() {
    let err = Config::from_yaml("choices_max: 20").unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("choice range"));

    assert!(Config::from_yaml("choices_max: 9").is_err());
    assert_eq!(Config::from_yaml("choices_max: 8").unwrap().choices_max, 8);
}

#[test]
fn test_validate_choices_max_below_min() {
    let yaml = r#"
choices_min: 6
choices_max: 4
default_num_choices: 5
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_validate_default_outside_range() {
    let err = Config::from_yaml("default_num_choices: 9").unwrap_err();
    assert!(err.to_string().contains("default_num_choices"));
}

#[test]
fn test_validate_no_limit_token() {
    assert!(Config::from_yaml("no_limit_token: \"  \"").is_err());
    let err = Config::from_yaml("no_limit_token: \"0\"").unwrap_err();
    assert!(err.to_string().contains("indistinguishable"));
}

#[test]
fn test_validate_templates() {
    let yaml = r#"
templates:
  multiple_choice: "only {problem_text}"
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, AppError::Template(_)));
    assert!(err.to_string().contains("num_choices"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        default_difficulty: Difficulty::Easy,
        clipboard_command: Some("wl-copy".to_string()),
        ..Config::default()
    };
    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_form_defaults() {
    let config = Config::from_yaml("default_question_type: multiple_choice").unwrap();
    let defaults = config.form_defaults().unwrap();

    assert_eq!(defaults.question_type, QuestionType::MultipleChoice);
    assert_eq!(defaults.num_choices, 5);
    assert_eq!(defaults.choice_bounds.min(), 2);
    assert_eq!(defaults.choice_bounds.max(), 8);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "default_difficulty: easy\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.default_difficulty, Difficulty::Easy);
}

#[test]
fn test_load_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_write_default_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("exam-prompt.yaml");

    Config::write_default(&path, false).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());

    let err = Config::write_default(&path, false).unwrap_err();
    assert!(matches!(err, AppError::UserError(_)));

    Config::write_default(&path, true).unwrap();
}

#[test]
#[serial]
fn test_resolve_prefers_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let explicit = temp_dir.path().join("explicit.yaml");
    let from_env = temp_dir.path().join("env.yaml");
    std::fs::write(&explicit, "default_difficulty: hard\n").unwrap();
    std::fs::write(&from_env, "default_difficulty: easy\n").unwrap();

    unsafe { std::env::set_var(CONFIG_ENV_VAR, &from_env) };
    let config = Config::resolve(Some(explicit.as_path())).unwrap();
    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

    assert_eq!(config.default_difficulty, Difficulty::Hard);
}

#[test]
#[serial]
fn test_resolve_uses_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let from_env = temp_dir.path().join("env.yaml");
    std::fs::write(&from_env, "default_difficulty: easy\n").unwrap();

    unsafe { std::env::set_var(CONFIG_ENV_VAR, &from_env) };
    let config = Config::resolve(None);
    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

    assert_eq!(config.unwrap().default_difficulty, Difficulty::Easy);
}

#[test]
#[serial]
fn test_resolve_defaults_without_path() {
    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
    let config = Config::resolve(None).unwrap();
    assert_eq!(config, Config::default());
}
