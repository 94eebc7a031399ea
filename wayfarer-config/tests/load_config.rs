use std::fs;

use tempfile::TempDir;
use wayfarer_config::{
    CarouselTuning, ConfigGuardRailError, EasingKind, MotionConfig,
    MotionConfigSource,
};

const CONFIG_TOML: &str = r#"
[carousel]
tick_period_ms = 4000
quiet_delay_ms = 5000
transition_ms = 350

[panel]
drag_slop_px = 12.0
easing = "ease_in_out"

[panel.snap_fractions]
collapsed = 0.9
half = 0.55
expanded = 0.05
"#;

#[test]
fn toml_file_overrides_only_listed_fields() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("motion.toml");
    fs::write(&path, CONFIG_TOML).expect("write config");

    let config = MotionConfig::load_from_file(&path).expect("load");

    assert_eq!(config.carousel.tick_period_ms, 4000);
    assert_eq!(config.carousel.transition_ms, 350);
    // Unlisted fields fall back to compiled defaults.
    assert_eq!(
        config.carousel.settle_margin_ms,
        CarouselTuning::default().settle_margin_ms
    );
    assert_eq!(config.carousel.settle_delay().as_millis(), 450);
    assert_eq!(config.panel.drag_slop_px, 12.0);
    assert_eq!(config.panel.easing, EasingKind::EaseInOut);
    assert_eq!(config.panel.snap_fractions.half, 0.55);
    assert!(config.validate().is_ok());
}

#[test]
fn json_file_and_extensionless_fallback() {
    let dir = TempDir::new().expect("tempdir");
    let json = r#"{ "carousel": { "tick_period_ms": 3200 } }"#;

    let json_path = dir.path().join("motion.json");
    fs::write(&json_path, json).expect("write json");
    let from_json = MotionConfig::load_from_file(&json_path).expect("json");
    assert_eq!(from_json.carousel.tick_period_ms, 3200);

    let bare_path = dir.path().join("motion");
    fs::write(&bare_path, json).expect("write bare");
    let from_bare = MotionConfig::load_from_file(&bare_path).expect("bare");
    assert_eq!(from_bare, from_json);
}

#[test]
fn unparsable_file_reports_both_formats() {
    let err = MotionConfig::parse_from_str("carousel = [", "inline")
        .expect_err("garbage must not parse");
    let msg = err.to_string();
    assert!(msg.contains("toml error"), "{msg}");
    assert!(msg.contains("json error"), "{msg}");
}

#[test]
fn missing_file_is_an_error_with_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = MotionConfig::load_from_file(&path).expect_err("missing");
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn guard_rail_rejects_settle_inside_transition() {
    let config = MotionConfig::parse_json(
        r#"{ "carousel": { "transition_ms": 500, "settle_delay_ms": 450 } }"#,
    )
    .expect("parse");
    assert_eq!(
        config.validate(),
        Err(ConfigGuardRailError::SettleNotAfterTransition {
            settle_ms: 450,
            transition_ms: 500,
        })
    );
}

#[test]
fn rendered_toml_round_trips_defaults() {
    let config = MotionConfig::default();
    let rendered = config.to_toml_string().expect("render");
    let parsed = MotionConfig::parse_from_str(&rendered, "rendered")
        .expect("parse rendered");
    assert_eq!(parsed, config);
}

// The only test in this binary that touches the process environment.
#[test]
fn env_lookup_order() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("screen.toml");
    fs::write(&path, CONFIG_TOML).expect("write config");

    // SAFETY: no other test in this binary reads or writes these variables.
    unsafe {
        std::env::set_var("WAYFARER_MOTION_CONFIG_PATH", &path);
        std::env::set_var(
            "WAYFARER_MOTION_CONFIG_JSON",
            r#"{ "carousel": { "tick_period_ms": 9000 } }"#,
        );
    }
    let (config, source) = MotionConfig::load_from_env().expect("env path");
    assert_eq!(source, MotionConfigSource::EnvPath(path.clone()));
    assert_eq!(config.carousel.tick_period_ms, 4000);

    unsafe {
        std::env::remove_var("WAYFARER_MOTION_CONFIG_PATH");
    }
    let (config, source) = MotionConfig::load_from_env().expect("env json");
    assert_eq!(source, MotionConfigSource::EnvInline);
    assert_eq!(config.carousel.tick_period_ms, 9000);

    unsafe {
        std::env::set_var(
            "WAYFARER_MOTION_CONFIG_JSON",
            r#"{ "carousel": { "tick_period_ms": 50 } }"#,
        );
    }
    let err = MotionConfig::load_from_env().expect_err("guard rail");
    assert!(format!("{err:#}").contains("below"), "{err:#}");

    unsafe {
        std::env::remove_var("WAYFARER_MOTION_CONFIG_JSON");
    }
}
