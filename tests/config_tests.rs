//! Integration tests for configuration management

use course_path::config::{Config, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.transcripts_dir.is_empty(),
        "Default transcripts_dir should not be empty"
    );
    assert_eq!(config.academics.total_credits, 120);
    assert!((config.academics.credits_per_term - 15.0).abs() < f64::EPSILON);
    assert!((config.academics.min_gpa - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/coursepath.log"
verbose = true

[academics]
total_credits = 128
credits_per_term = 12.0
min_gpa = 2.5

[paths]
transcripts_dir = "./transcripts"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/coursepath.log");
    assert!(config.logging.verbose);
    assert_eq!(config.academics.total_credits, 128);
    assert!((config.academics.credits_per_term - 12.0).abs() < f64::EPSILON);
    assert!((config.academics.min_gpa - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.paths.transcripts_dir, "./transcripts");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"

[academics]
min_gpa = 3.0
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.academics.total_credits, 120);
    assert!((config.academics.credits_per_term - 15.0).abs() < f64::EPSILON);
    assert!((config.academics.min_gpa - 3.0).abs() < f64::EPSILON);
    assert_eq!(config.paths.transcripts_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_PATH/test.log"

[paths]
transcripts_dir = "$COURSE_PATH/transcripts"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("coursepath"));
    assert!(!config.logging.file.contains("$COURSE_PATH"));
    assert!(config.paths.transcripts_dir.ends_with("transcripts"));
    assert!(!config.paths.transcripts_dir.contains("$COURSE_PATH"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("total-credits", "130")
        .expect("Failed to set total credits");
    assert_eq!(config.get("total_credits").unwrap(), "130");

    config
        .set("credits_per_term", "12.5")
        .expect("Failed to set credits per term");
    assert_eq!(config.get("credits-per-term").unwrap(), "12.5");

    config.set("min_gpa", "3").expect("Failed to set min gpa");
    assert!((config.academics.min_gpa - 3.0).abs() < f64::EPSILON);

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("total_credits", "-4").is_err());
    assert!(config.set("credits_per_term", "0").is_err());
    assert!(config.set("min_gpa", "4.5").is_err());

    // Failed sets leave the config untouched
    let defaults = Config::from_defaults();
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.academics.total_credits, defaults.academics.total_credits);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("total_credits", "90").expect("Failed to set credits");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("total_credits", &defaults)
        .expect("Failed to unset credits");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.academics.total_credits, defaults.academics.total_credits);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_serialize_roundtrip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("min_gpa", "2.7").expect("Failed to set min gpa");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert!((loaded.academics.min_gpa - 2.7).abs() < f64::EPSILON);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        total_credits: Some(96),
        credits_per_term: Some(18.0),
        transcripts_dir: Some("./mine".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.academics.total_credits, 96);
    assert!((config.academics.credits_per_term - 18.0).abs() < f64::EPSILON);
    assert_eq!(config.paths.transcripts_dir, "./mine");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    let overrides = ConfigOverrides {
        total_credits: Some(60),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.academics.total_credits, 60);
    assert_eq!(config.logging.level, before.logging.level);
    assert_eq!(config.paths.transcripts_dir, before.paths.transcripts_dir);
}

#[test]
fn test_config_display_format() {
    let display_str = format!("{}", Config::from_defaults());

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[academics]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("total_credits = 120"));
    assert!(display_str.contains("transcripts_dir"));
}

#[test]
fn test_merge_defaults_fills_empty_strings() {
    let toml_str = r#"
[logging]
level = ""
file = ""

[paths]
transcripts_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.transcripts_dir, defaults.paths.transcripts_dir);

    // Nothing left to merge the second time
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
transcripts_dir = "/srv/transcripts"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.transcripts_dir, "/srv/transcripts");
}

#[test]
fn test_config_paths() {
    let dir = Config::get_coursepath_dir();
    assert!(dir.ends_with("coursepath"));

    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
