use halloween_runner::{ConfigError, GameConfig};

#[test]
fn defaults_are_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.width, 800.0);
    assert_eq!(config.candy_interval_ms, 2000.0);
    assert_eq!(config.slide_ticks, 30);
}

#[test]
fn empty_document_gives_defaults() {
    let config = GameConfig::from_toml_str("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn named_fields_override_defaults() {
    let config = GameConfig::from_toml_str(
        r#"
        max_speed = 14.0
        dragon_interval_ms = 10000.0
        candy_cluster_max = 6
        "#,
    )
    .unwrap();
    assert_eq!(config.max_speed, 14.0);
    assert_eq!(config.dragon_interval_ms, 10000.0);
    assert_eq!(config.candy_cluster_max, 6);
    assert_eq!(config.initial_speed, 3.5);
}

#[test]
fn max_speed_below_initial_is_rejected() {
    let err = GameConfig::from_toml_str("max_speed = 1.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err:?}");
}

#[test]
fn empty_cluster_range_is_rejected() {
    let err = GameConfig::from_toml_str("candy_cluster_min = 8\ncandy_cluster_max = 4").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn zero_interval_is_rejected() {
    let err = GameConfig::from_toml_str("obstacle_interval_ms = 0.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn oversized_hitbox_margin_is_rejected() {
    let config = GameConfig {
        hitbox_margin: 30.0,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = GameConfig::from_toml_str("width = \"wide\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load("/definitely/not/here/runner.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("runner.toml")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn loads_from_disk() {
    let path = std::env::temp_dir().join(format!("runner-config-{}.toml", std::process::id()));
    std::fs::write(&path, "candy_points = 25\n").unwrap();
    let config = GameConfig::load(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(config.unwrap().candy_points, 25);
}
