// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system.

use std::io::Write;

use meshwright_config::diagnostic::ConfigError;
use meshwright_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with every known field deserializes.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[agent]
name = "studio-bot"
log_level = "debug"

[skill]
modeling = true
shading = false
disabled = ["subdivide_surface"]

[output]
pretty = true
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "studio-bot");
    assert_eq!(config.agent.log_level, "debug");
    assert!(config.skill.modeling);
    assert!(!config.skill.shading);
    assert_eq!(config.skill.disabled, vec!["subdivide_surface"]);
    assert!(config.output.pretty);
}

/// Omitted sections fall back to defaults.
#[test]
fn partial_toml_keeps_defaults() {
    let config = load_config_from_str("[output]\npretty = true\n").unwrap();
    assert_eq!(config.agent.name, "meshwright");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.skill.modeling && config.skill.shading);
    assert!(config.skill.disabled.is_empty());
    assert!(config.output.pretty);
}

/// Unknown keys become diagnostics with a suggestion.
#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[skill]
modelling = false
"#;

    let errors = load_and_validate_str(toml).expect_err("unknown key should fail");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "modelling");
            assert_eq!(suggestion.as_deref(), Some("modeling"));
            assert!(valid_keys.contains("shading"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level sections are rejected too.
#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[ouput]\npretty = true\n").unwrap_err();
    assert!(matches!(
        &errors[0],
        ConfigError::UnknownKey { suggestion: Some(s), .. } if s == "output"
    ));
}

/// Wrong value types are reported as type errors.
#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[output]\npretty = \"yes\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::InvalidType { .. }));
    assert!(errors[0].to_string().contains("boolean"));
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_through_loader() {
    let toml = r#"
[agent]
log_level = "loud"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("agent.log_level"));
}

/// An explicit file path is loaded and validated.
#[test]
fn explicit_path_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[agent]\nname = \"from-file\"\n\n[skill]\nshading = false").unwrap();

    let config = load_and_validate_path(file.path()).expect("file config should load");
    assert_eq!(config.agent.name, "from-file");
    assert!(!config.skill.shading);
}

/// A missing explicit file is an error rather than a silent fallback.
#[test]
fn missing_explicit_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typo.toml");
    let errors = load_and_validate_path(&path).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::NotFound { path: reported } => {
            assert!(reported.ends_with("typo.toml"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

/// A directory is not a config file either.
#[test]
fn directory_as_explicit_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let errors = load_and_validate_path(dir.path()).unwrap_err();
    assert!(matches!(&errors[0], ConfigError::NotFound { .. }));
}

/// Unknown keys in a file are diagnosed the same way as inline ones.
#[test]
fn file_errors_suggest_corrections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[agent]\nnaem = \"typo\"").unwrap();

    let errors = load_and_validate_path(file.path()).unwrap_err();
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "naem");
            assert_eq!(suggestion.as_deref(), Some("name"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}
