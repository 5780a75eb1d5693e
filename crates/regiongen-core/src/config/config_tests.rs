#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

const KNOWN: &[&str] = &["actor", "stage"];

#[test]
fn GenConfig___default___uses_game_builder_tokens() {
    let config = GenConfig::default();

    assert_eq!(config.markers.begin, "BEGIN_GAME_BUILDER_CODE_GEN");
    assert_eq!(config.markers.end, "END_GAME_BUILDER_CODE_GEN");
    assert_eq!(config.annotation.suffix, "    // GENERATED");
    assert_eq!(config.annotation.min_line_len, 8);
    assert!(!config.schema.strict_networking);
    assert!(config.targets.is_empty());
}

#[test]
fn GenConfig___from_str___empty_content_returns_defaults() {
    let config = GenConfig::from_str("").unwrap();

    assert_eq!(config, GenConfig::default());
}

#[test]
fn GenConfig___from_str___partial_sections_keep_other_defaults() {
    let content = r#"
[markers]
begin = "@gen-begin"

[annotation]
min_line_len = 4
"#;

    let config = GenConfig::from_str(content).unwrap();

    assert_eq!(config.markers.begin, "@gen-begin");
    assert_eq!(config.markers.end, "END_GAME_BUILDER_CODE_GEN");
    assert_eq!(config.annotation.min_line_len, 4);
    assert_eq!(config.annotation.suffix, "    // GENERATED");
}

#[test]
fn GenConfig___from_str___parses_targets_in_order() {
    let content = r#"
[schema]
strict_networking = true

[[targets]]
path = "Assets/VoosActor.cs"
registry = "actor"

[[targets]]
path = "Assets/Stage.cs"
registry = "stage"
"#;

    let config = GenConfig::from_str(content).unwrap();

    assert!(config.schema.strict_networking);
    assert_eq!(config.targets.len(), 2);
    assert_eq!(config.targets[0].path, PathBuf::from("Assets/VoosActor.cs"));
    assert_eq!(config.targets[1].registry, "stage");
}

#[test]
fn GenConfig___from_str___invalid_toml_is_config_error() {
    let err = GenConfig::from_str("[markers\nbegin = ").unwrap_err();

    assert!(matches!(err, GenError::Config(_)));
}

#[test]
fn GenConfig___from_str___target_without_registry_is_config_error() {
    let err = GenConfig::from_str("[[targets]]\npath = \"a.cs\"\n").unwrap_err();

    assert!(matches!(err, GenError::Config(_)));
}

#[test]
fn GenConfig___from_file___resolves_targets_against_config_dir() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(
        &config_path,
        "[[targets]]\npath = \"src/A.cs\"\nregistry = \"actor\"\n",
    )
    .unwrap();

    let config = GenConfig::from_file(&config_path).unwrap();

    assert_eq!(config.targets[0].path, dir.path().join("src/A.cs"));
}

#[test]
fn GenConfig___from_file___missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = GenConfig::from_file(dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, GenError::Io { .. }));
}

#[test]
fn GenConfig___validate___rejects_unknown_registry() {
    let config = GenConfig {
        targets: vec![TargetSpec {
            path: PathBuf::from("a.cs"),
            registry: "props".to_string(),
        }],
        ..GenConfig::default()
    };

    let err = config.validate(KNOWN).unwrap_err();

    assert!(matches!(err, GenError::Config(msg) if msg.contains("props")));
}

#[test]
fn GenConfig___validate___rejects_duplicate_target() {
    let target = TargetSpec {
        path: PathBuf::from("a.cs"),
        registry: "actor".to_string(),
    };
    let config = GenConfig {
        targets: vec![target.clone(), target],
        ..GenConfig::default()
    };

    assert!(config.validate(KNOWN).is_err());
}

#[test]
fn GenConfig___validate___rejects_identical_tokens() {
    let mut config = GenConfig::default();
    config.markers.end = config.markers.begin.clone();

    assert!(config.validate(KNOWN).is_err());
}

#[test]
fn GenConfig___validate___rejects_whitespace_in_tokens() {
    let mut config = GenConfig::default();
    config.markers.begin = "BEGIN GEN".to_string();

    assert!(config.validate(KNOWN).is_err());
}

#[test]
fn GenConfig___validate___accepts_defaults() {
    assert!(GenConfig::default().validate(KNOWN).is_ok());
}

#[test]
fn GenConfig___to_toml___parses_back_to_same_config() {
    let config = GenConfig {
        targets: vec![TargetSpec {
            path: PathBuf::from("Assets/VoosActor.cs"),
            registry: "actor".to_string(),
        }],
        ..GenConfig::default()
    };

    let toml = config.to_toml().unwrap();

    assert_eq!(GenConfig::from_str(&toml).unwrap(), config);
}
