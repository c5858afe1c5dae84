// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for loading `CarouselConfig` from serialized data.

#![cfg(feature = "serde")]

use slideway::CarouselConfig;

#[test]
fn missing_json_fields_take_defaults() {
    let config: CarouselConfig = serde_json::from_str(r#"{ "touch_threshold_px": 25.0 }"#).unwrap();
    assert_eq!(config.touch_threshold_px, 25.0);
    assert_eq!(config.wheel_cooldown_ms, 700);
    assert_eq!(config.touch_cooldown_ms, 600);
    assert_eq!(config.remeasure_delay_ms, 100);
}

#[test]
fn json_round_trip() {
    let config = CarouselConfig {
        navigation_cooldown_ms: 450,
        ..CarouselConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: CarouselConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[cfg(feature = "toml")]
mod toml_config {
    use core::error::Error;

    use slideway::{CarouselConfig, ConfigError};

    #[test]
    fn parses_partial_documents() {
        let config = CarouselConfig::from_toml_str(
            r#"
            wheel_cooldown_ms = 500
            touch_threshold_px = 32.0
            "#,
        )
        .unwrap();
        assert_eq!(config.wheel_cooldown_ms, 500);
        assert_eq!(config.touch_threshold_px, 32.0);
        assert_eq!(config.navigation_cooldown_ms, 700);
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(
            CarouselConfig::from_toml_str("").unwrap(),
            CarouselConfig::default()
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = CarouselConfig::from_toml_str("navigation_cooldown_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroCooldown {
                field: "navigation_cooldown_ms"
            }
        ));
        assert!(err.source().is_none());
    }

    #[test]
    fn parse_errors_keep_their_source() {
        let err = CarouselConfig::from_toml_str("wheel_cooldown_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("TOML parse error"));
    }
}
