//! Configuration loading and validation tests

use paketkalk_rs::config::{Config, EngineConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn load_full_config_from_yaml() {
    let content = r#"
tier_levels:
  - Basis
  - Gold
  - Allin
  - Allin Black
reference_markup_percent: 30.0
currency: EUR
catalog_source: /var/lib/paketkalk/catalog.json
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.engine.reference_markup_percent, 30.0);
    assert_eq!(
        config.engine.catalog_source.as_deref(),
        Some("/var/lib/paketkalk/catalog.json")
    );

    // Ladder names normalize regardless of the YAML spelling.
    let ladder = config.engine.ladder();
    assert_eq!(ladder.tier_index("allin_black"), Some(3));
}

#[tokio::test]
async fn invalid_yaml_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"tier_levels: [unclosed").unwrap();

    let result = Config::from_file(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn duplicate_ladder_entries_fail_validation() {
    let content = "tier_levels: [basis, gold, Gold]\n";
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    assert!(Config::from_file(file.path()).await.is_err());
}

#[test]
fn default_engine_config_round_trips_through_yaml() {
    let config = Config {
        engine: EngineConfig::default(),
    };
    let yaml = config.to_yaml().unwrap();
    let parsed: EngineConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.tier_levels, config.engine.tier_levels);
    assert_eq!(parsed.currency, config.engine.currency);
}
