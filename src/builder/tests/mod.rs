//! Unit tests for the clock builder
//!
//! Presets, override precedence, alarm precedence and settings parsing.

use chrono::{Locale, NaiveDate, NaiveDateTime};

use crate::{
    builder::{ClockBuilder, ClockSettings, preset},
    clock::{Alarm, Clock, ClockSkinType, Color, DEFAULT_FOREGROUND, Repetition},
    core::ClockError,
};

const ALL_SKIN_TYPES: [ClockSkinType; 6] = [
    ClockSkinType::Clock,
    ClockSkinType::Yota2,
    ClockSkinType::Lcd,
    ClockSkinType::Pear,
    ClockSkinType::Plain,
    ClockSkinType::Db,
];

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap()
}

/// Asserts every key present in `expected` matches the clock.
fn assert_matches(clock: &Clock, expected: &ClockSettings) {
    macro_rules! check {
        ($($field:ident),+) => {
            $(
                if let Some(value) = expected.$field {
                    assert_eq!(clock.$field(), value, stringify!($field));
                }
            )+
        };
    }

    check!(
        discrete_seconds,
        discrete_minutes,
        seconds_visible,
        title_visible,
        text_visible,
        date_visible,
        background_paint,
        hour_tick_mark_color,
        minute_tick_mark_color,
        hour_needle_color,
        minute_needle_color,
        second_needle_color,
        knob_color,
        text_color,
        date_color
    );
}

#[test]
fn every_preset_is_applied_verbatim() {
    for skin_type in ALL_SKIN_TYPES {
        let clock = ClockBuilder::new().skin_type(skin_type).build();

        assert_eq!(clock.skin_type(), skin_type);
        assert_matches(&clock, &preset(skin_type));
    }
}

#[test]
fn pear_preset() {
    let clock = ClockBuilder::new().skin_type(ClockSkinType::Pear).build();

    assert!(clock.seconds_visible());
    assert!(!clock.title_visible());
    assert!(clock.date_visible());
    assert_eq!(clock.background_paint(), Color::BLACK);
}

#[test]
fn db_preset() {
    let clock = ClockBuilder::new().skin_type(ClockSkinType::Db).build();

    assert!(clock.discrete_minutes());
    assert!(!clock.discrete_seconds());
    assert!(clock.seconds_visible());
    assert_eq!(clock.second_needle_color(), Color::rgb(167, 0, 0));
}

#[test]
fn explicit_keys_beat_the_preset() {
    let clock = ClockBuilder::new()
        .skin_type(ClockSkinType::Pear)
        .date_visible(false)
        .background_paint(Color::rgb(1, 2, 3))
        .build();

    assert!(!clock.date_visible());
    assert_eq!(clock.background_paint(), Color::rgb(1, 2, 3));
    assert_eq!(clock.second_needle_color(), Color::rgb(255, 165, 24));
}

#[test]
fn explicit_keys_win_regardless_of_call_order() {
    let clock = ClockBuilder::new()
        .date_visible(false)
        .skin_type(ClockSkinType::Pear)
        .build();

    assert!(!clock.date_visible());
}

#[test]
fn no_skin_type_means_defaults_and_no_preset() {
    let clock = ClockBuilder::new().title("Office").build();

    assert_eq!(clock.skin_type(), ClockSkinType::Clock);
    assert_eq!(clock.title(), "Office");
    assert_eq!(clock.hour_needle_color(), DEFAULT_FOREGROUND);
    assert!(clock.discrete_minutes());
    assert!(!clock.seconds_visible());
}

#[test]
fn last_write_per_key_wins() {
    let clock = ClockBuilder::new()
        .title("first")
        .title("second")
        .seconds_visible(true)
        .seconds_visible(false)
        .build();

    assert_eq!(clock.title(), "second");
    assert!(!clock.seconds_visible());
}

#[test]
fn list_alarms_beat_array_alarms() {
    let from_array = [Alarm::new(morning(), Repetition::Once, "array")];
    let from_list = vec![
        Alarm::new(morning(), Repetition::Daily, "list"),
        Alarm::new(morning(), Repetition::Hourly, "list too"),
    ];

    let list_last = ClockBuilder::new()
        .alarms_from_slice(&from_array)
        .alarms(from_list.clone())
        .build();
    let list_first = ClockBuilder::new()
        .alarms(from_list.clone())
        .alarms_from_slice(&from_array)
        .build();

    assert_eq!(list_last.alarms(), from_list.as_slice());
    assert_eq!(list_first.alarms(), from_list.as_slice());
}

#[test]
fn array_alarms_used_alone() {
    let from_array = [Alarm::new(morning(), Repetition::Once, "array")];

    let clock = ClockBuilder::new().alarms_from_slice(&from_array).build();

    assert_eq!(clock.alarms(), &from_array);
}

#[test]
fn dimension_pairs_map_to_both_axes() {
    let clock = ClockBuilder::new()
        .pref_size(300.0, 200.0)
        .min_size(40.0, 30.0)
        .max_size(800.0, 600.0)
        .build();
    let size = clock.size_constraints();

    assert_eq!((size.pref_width, size.pref_height), (300.0, 200.0));
    assert_eq!((size.min_width, size.min_height), (40.0, 30.0));
    assert_eq!((size.max_width, size.max_height), (800.0, 600.0));
}

#[test]
fn single_axis_key_beats_dimension_pair() {
    let clock = ClockBuilder::new()
        .pref_width(120.0)
        .pref_size(300.0, 200.0)
        .build();
    let size = clock.size_constraints();

    assert_eq!((size.pref_width, size.pref_height), (120.0, 200.0));
}

#[test]
fn transform_keys_are_applied() {
    let clock = ClockBuilder::new()
        .scale_x(2.0)
        .layout_y(15.0)
        .translate_x(-3.0)
        .build();
    let t = clock.transform();

    assert_eq!(t.scale_x, 2.0);
    assert_eq!(t.scale_y, 1.0);
    assert_eq!(t.layout_y, 15.0);
    assert_eq!(t.translate_x, -3.0);
}

#[test]
fn built_clock_has_no_pending_updates() {
    let mut clock = ClockBuilder::new()
        .skin_type(ClockSkinType::Plain)
        .time(morning())
        .build();

    assert_eq!(clock.time(), morning());
    assert!(clock.take_updates().is_empty());
}

#[test]
fn settings_locale_is_parsed() {
    let settings = ClockSettings {
        locale: Some("de_DE".to_string()),
        ..ClockSettings::default()
    };

    let clock = ClockBuilder::from_settings(settings).unwrap().build();

    assert_eq!(clock.locale(), Locale::de_DE);
}

#[test]
fn unknown_locale_is_rejected() {
    let settings = ClockSettings {
        locale: Some("xx_NOWHERE".to_string()),
        ..ClockSettings::default()
    };

    let err = ClockBuilder::from_settings(settings).unwrap_err();

    assert!(matches!(err, ClockError::InvalidSetting { ref field, .. } if field == "locale"));
}

#[test]
fn wrong_type_in_settings_fails_to_parse() {
    let result: Result<ClockSettings, _> = toml::from_str("seconds_visible = \"yes\"");

    assert!(result.is_err());
}

#[test]
fn settings_parse_from_toml() {
    let settings: ClockSettings = toml::from_str(
        r##"
        skin_type = "db"
        title = "Hauptbahnhof"
        second_needle_color = "#ff0000"
        pref_size = { width = 320.0, height = 320.0 }

        [[alarms]]
        time = "2026-10-17T07:00:00"
        repetition = "daily"
        text = "Train"
        "##,
    )
    .unwrap();

    assert_eq!(settings.skin_type, Some(ClockSkinType::Db));
    assert_eq!(settings.second_needle_color, Some(Color::rgb(255, 0, 0)));
    assert_eq!(settings.alarms.as_ref().map(Vec::len), Some(1));

    let clock = ClockBuilder::from_settings(settings).unwrap().build();
    assert_eq!(clock.second_needle_color(), Color::rgb(255, 0, 0));
    assert!(clock.discrete_minutes());
    assert_eq!(clock.alarms()[0].repetition, Repetition::Daily);
    assert!(clock.alarms()[0].armed);
}
