use std::fs;

use crate::ngcc::config::{BundleFormat, NgccParsingOptions};
use crate::ngtsc::logging::{LogLevel, Logger};

#[test]
fn should_default_to_esm2015() {
    let options = NgccParsingOptions::default();
    assert_eq!(options.format, BundleFormat::Esm2015);
    assert_eq!(options.max_alias_hops, 64);
    assert_eq!(options.log_level, LogLevel::Warn);
}

#[test]
fn should_parse_camel_case_json() {
    let options =
        NgccParsingOptions::from_json(r#"{ "format": "esm5", "maxAliasHops": 8, "logLevel": "debug" }"#)
            .unwrap();
    assert_eq!(options.format, BundleFormat::Esm5);
    assert_eq!(options.max_alias_hops, 8);
    assert_eq!(options.create_logger().level(), LogLevel::Debug);
}

#[test]
fn should_fill_missing_fields_with_defaults() {
    let options = NgccParsingOptions::from_json(r#"{ "logLevel": "info" }"#).unwrap();
    assert_eq!(
        options,
        NgccParsingOptions {
            log_level: LogLevel::Info,
            ..NgccParsingOptions::default()
        }
    );
}

#[test]
fn should_reject_unknown_formats() {
    assert!(NgccParsingOptions::from_json(r#"{ "format": "umd" }"#).is_err());
}

#[test]
fn should_load_from_a_file() {
    let dir = std::env::temp_dir().join(format!("ngcc-config-spec-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ngcc.json");
    fs::write(&path, r#"{ "format": "esm2015", "maxAliasHops": 3 }"#).unwrap();

    let options = NgccParsingOptions::load(&path).unwrap();
    assert_eq!(options.max_alias_hops, 3);

    let missing = NgccParsingOptions::load(&dir.join("missing.json")).unwrap_err();
    assert!(missing.to_string().contains("failed to read ngcc options"));
    fs::remove_dir_all(&dir).unwrap();
}
