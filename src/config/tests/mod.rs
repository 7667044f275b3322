//! Unit tests for settings files
//!
//! All in-memory; file loading with imports lives in the integration tests.

#![allow(clippy::panic)]

use crate::{
    builder::preset,
    clock::{ClockSkinType, Color, LcdDesign, Repetition},
    config::{ClockFile, ConfigPaths},
    core::ClockError,
};

#[test]
fn empty_file_has_no_settings() {
    let file = ClockFile::from_toml_str("").unwrap();

    assert_eq!(file, ClockFile::default());
}

#[test]
fn reads_clock_table() {
    let file = ClockFile::from_toml_str(
        r##"
        [clock]
        skin_type = "lcd"
        title = "Platform 3"
        seconds_visible = true
        background_paint = "#202020"
        lcd_design = "blue"
        pref_size = { width = 200.0, height = 120.0 }

        [[clock.alarms]]
        time = "2026-10-17T07:30:00"
        repetition = "daily"
        text = "wake up"
        "##,
    )
    .unwrap();

    let clock = file.clock;
    assert_eq!(clock.skin_type, Some(ClockSkinType::Lcd));
    assert_eq!(clock.title.as_deref(), Some("Platform 3"));
    assert_eq!(clock.seconds_visible, Some(true));
    assert_eq!(clock.background_paint, Some(Color::rgb(0x20, 0x20, 0x20)));
    assert_eq!(clock.lcd_design, Some(LcdDesign::Blue));
    assert_eq!(clock.pref_size.map(|d| d.width), Some(200.0));

    let alarms = clock.alarms.unwrap();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].repetition, Repetition::Daily);
    assert!(alarms[0].armed);
}

#[test]
fn unknown_clock_key_is_rejected() {
    let result = ClockFile::from_toml_str(
        r#"
        [clock]
        second_visible = true
        "#,
    );

    assert!(matches!(result, Err(ClockError::TomlParseError { .. })));
}

#[test]
fn bad_color_is_rejected() {
    let result = ClockFile::from_toml_str(
        r#"
        [clock]
        knob_color = "red"
        "#,
    );

    assert!(matches!(result, Err(ClockError::TomlParseError { .. })));
}

#[test]
fn imports_need_a_file() {
    let result = ClockFile::from_toml_str(
        r#"
        "@base" = {}

        [clock]
        title = "x"
        "#,
    );

    let Err(ClockError::ConfigValidation { component, .. }) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert_eq!(component, "import system");
}

#[test]
fn into_builder_parses_locale() {
    let file = ClockFile::from_toml_str(
        r#"
        [clock]
        locale = "de_DE"
        "#,
    )
    .unwrap();

    assert!(file.into_builder().is_ok());

    let file = ClockFile::from_toml_str(
        r#"
        [clock]
        locale = "xx_NOPE"
        "#,
    )
    .unwrap();

    assert!(matches!(
        file.into_builder(),
        Err(ClockError::InvalidSetting { .. })
    ));
}

#[test]
fn settings_serialize_roundtrip() {
    let original = ClockFile::from_toml_str(
        r#"
        [clock]
        skin_type = "pear"
        discrete_seconds = false
        "#,
    )
    .unwrap();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = ClockFile::from_toml_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn presets_survive_a_file_roundtrip() {
    for skin_type in [
        ClockSkinType::Clock,
        ClockSkinType::Yota2,
        ClockSkinType::Lcd,
        ClockSkinType::Pear,
        ClockSkinType::Plain,
        ClockSkinType::Db,
    ] {
        let file = ClockFile {
            clock: preset(skin_type),
        };

        let toml_str = toml::to_string(&file).unwrap();

        assert_eq!(ClockFile::from_toml_str(&toml_str).unwrap(), file, "{skin_type}");
    }
}

#[test]
fn schema_describes_clock_table() {
    let schema = serde_json::to_string(&ClockFile::schema()).unwrap();

    assert!(schema.contains("\"clock\""));
    assert!(schema.contains("seconds_visible"));
}

#[test]
fn main_config_is_named_clock_toml() {
    if let Ok(path) = ConfigPaths::main_config() {
        assert!(path.ends_with("clockface/clock.toml"));
    }
}
