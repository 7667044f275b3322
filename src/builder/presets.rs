use crate::clock::{ClockSkinType, Color};

use super::ClockSettings;

/// Default values a skin type brings along.
///
/// The builder applies the returned settings before any explicitly set
/// key, so explicit keys always win. `Clock` and `Lcd` have no preset.
pub fn preset(skin_type: ClockSkinType) -> ClockSettings {
    match skin_type {
        ClockSkinType::Clock | ClockSkinType::Lcd => ClockSettings::default(),
        ClockSkinType::Yota2 => ClockSettings {
            background_paint: Some(Color::rgb(40, 42, 48)),
            hour_tick_mark_color: Some(Color::rgb(255, 255, 255)),
            minute_tick_mark_color: Some(Color::rgba(255, 255, 255, 0.5)),
            hour_needle_color: Some(Color::WHITE),
            minute_needle_color: Some(Color::WHITE),
            knob_color: Some(Color::WHITE),
            text_color: Some(Color::rgba(255, 255, 255, 0.5)),
            date_color: Some(Color::rgb(255, 255, 255)),
            ..ClockSettings::default()
        },
        ClockSkinType::Pear => ClockSettings {
            background_paint: Some(Color::BLACK),
            hour_needle_color: Some(Color::WHITE),
            minute_needle_color: Some(Color::WHITE),
            second_needle_color: Some(Color::rgb(255, 165, 24)),
            hour_tick_mark_color: Some(Color::WHITE),
            minute_tick_mark_color: Some(Color::rgb(115, 115, 115)),
            date_color: Some(Color::WHITE),
            date_visible: Some(true),
            seconds_visible: Some(true),
            text_visible: Some(false),
            title_visible: Some(false),
            ..ClockSettings::default()
        },
        ClockSkinType::Plain => ClockSettings {
            background_paint: Some(Color::rgb(29, 29, 29)),
            hour_needle_color: Some(Color::rgb(190, 190, 190)),
            minute_needle_color: Some(Color::rgb(190, 190, 190)),
            second_needle_color: Some(Color::rgb(0, 244, 0)),
            date_color: Some(Color::rgb(190, 190, 190)),
            seconds_visible: Some(true),
            hour_tick_mark_color: Some(Color::rgb(240, 240, 240)),
            minute_tick_mark_color: Some(Color::rgb(240, 240, 240)),
            ..ClockSettings::default()
        },
        ClockSkinType::Db => ClockSettings {
            discrete_seconds: Some(false),
            discrete_minutes: Some(true),
            second_needle_color: Some(Color::rgb(167, 0, 0)),
            seconds_visible: Some(true),
            ..ClockSettings::default()
        },
    }
}
