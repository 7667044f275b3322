//! Typed fluent builder for [`Clock`].
//!
//! Every option is a typed field of [`ClockSettings`] whose presence is
//! tracked with `Option`. Setting a key twice keeps the last value.
//! [`ClockBuilder::build`] applies, in this order: the preset profile of the
//! skin type, the alarms (array form, then list form), then every other key.

mod presets;

pub use presets::preset;

use chrono::{Locale, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    clock::{Alarm, AlarmListener, Clock, ClockSkinType, Color, LcdDesign, LcdFont},
    core::{ClockError, Result},
};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dimension {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

/// Every option a clock can be built with.
///
/// Unset options keep the clock's (or the preset's) value. This is also the
/// shape of the `[clock]` table in settings files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ClockSettings {
    /// Visual style and preset profile.
    pub skin_type: Option<ClockSkinType>,

    /// Initially displayed time (`YYYY-MM-DDTHH:MM:SS`).
    #[schemars(with = "Option<String>")]
    pub time: Option<NaiveDateTime>,

    /// Title text.
    pub title: Option<String>,

    /// Free text.
    pub text: Option<String>,

    /// Second needle jumps in whole seconds.
    pub discrete_seconds: Option<bool>,

    /// Minute needle jumps in whole minutes.
    pub discrete_minutes: Option<bool>,

    /// Show the second needle.
    pub seconds_visible: Option<bool>,

    /// Show the title.
    pub title_visible: Option<bool>,

    /// Show the digital time text.
    pub text_visible: Option<bool>,

    /// Show the date.
    pub date_visible: Option<bool>,

    /// Start in night mode.
    pub night_mode: Option<bool>,

    /// Switch night mode by time of day.
    pub auto_night_mode: Option<bool>,

    /// Whether the clock should be driven by a time source.
    pub running: Option<bool>,

    /// Face fill (`#rrggbb` or `#rrggbbaa`).
    #[schemars(with = "Option<String>")]
    pub background_paint: Option<Color>,

    /// Face border.
    #[schemars(with = "Option<String>")]
    pub border_paint: Option<Color>,

    /// Foreground paint.
    #[schemars(with = "Option<String>")]
    pub foreground_paint: Option<Color>,

    /// Title color.
    #[schemars(with = "Option<String>")]
    pub title_color: Option<Color>,

    /// Time text color.
    #[schemars(with = "Option<String>")]
    pub text_color: Option<Color>,

    /// Date color.
    #[schemars(with = "Option<String>")]
    pub date_color: Option<Color>,

    /// Color of the twelve hour ticks.
    #[schemars(with = "Option<String>")]
    pub hour_tick_mark_color: Option<Color>,

    /// Color of the minute ticks.
    #[schemars(with = "Option<String>")]
    pub minute_tick_mark_color: Option<Color>,

    /// Hour needle color.
    #[schemars(with = "Option<String>")]
    pub hour_needle_color: Option<Color>,

    /// Minute needle color.
    #[schemars(with = "Option<String>")]
    pub minute_needle_color: Option<Color>,

    /// Second needle color.
    #[schemars(with = "Option<String>")]
    pub second_needle_color: Option<Color>,

    /// Centre knob color.
    #[schemars(with = "Option<String>")]
    pub knob_color: Option<Color>,

    /// LCD panel scheme.
    pub lcd_design: Option<LcdDesign>,

    /// Check alarms while ticking.
    pub alarms_enabled: Option<bool>,

    /// Alarms (list form).
    pub alarms: Option<Vec<Alarm>>,

    /// Crystal overlay on LCD panels.
    pub lcd_crystal_enabled: Option<bool>,

    /// Drop shadow under the needles.
    pub shadows_enabled: Option<bool>,

    /// LCD digit font.
    pub lcd_font: Option<LcdFont>,

    /// Locale for the weekday name, e.g. `de_DE`.
    pub locale: Option<String>,

    /// Preferred width and height.
    pub pref_size: Option<Dimension>,

    /// Minimum width and height.
    pub min_size: Option<Dimension>,

    /// Maximum width and height.
    pub max_size: Option<Dimension>,

    /// Preferred width; overrides the width of `pref_size`.
    pub pref_width: Option<f64>,

    /// Preferred height; overrides the height of `pref_size`.
    pub pref_height: Option<f64>,

    /// Minimum width.
    pub min_width: Option<f64>,

    /// Minimum height.
    pub min_height: Option<f64>,

    /// Maximum width.
    pub max_width: Option<f64>,

    /// Maximum height.
    pub max_height: Option<f64>,

    /// Horizontal scale.
    pub scale_x: Option<f64>,

    /// Vertical scale.
    pub scale_y: Option<f64>,

    /// Layout x position.
    pub layout_x: Option<f64>,

    /// Layout y position.
    pub layout_y: Option<f64>,

    /// Extra x offset.
    pub translate_x: Option<f64>,

    /// Extra y offset.
    pub translate_y: Option<f64>,
}

/// Parses a POSIX locale name such as `en_US`.
///
/// # Errors
/// Returns `InvalidSetting` for names chrono does not know.
pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name)
        .map_err(|_| ClockError::invalid_setting("locale", format!("unknown locale '{name}'")))
}

macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty;)+) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, value: $ty) -> Self {
                self.settings.$name = Some(value);
                self
            }
        )+
    };
}

macro_rules! apply {
    ($clock:ident, $applied:ident, $settings:ident { $($field:ident => $setter:ident),+ $(,)? }) => {
        $(
            if let Some(value) = $settings.$field.clone() {
                $clock.$setter(value);
                $applied += 1;
            }
        )+
    };
}

/// Fluent builder producing a fully configured [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct ClockBuilder {
    settings: ClockSettings,
    alarms_array: Option<Vec<Alarm>>,
    locale: Option<Locale>,
    on_alarm: Option<AlarmListener>,
}

impl ClockBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from settings, e.g. a parsed file.
    ///
    /// # Errors
    /// Returns `InvalidSetting` when the locale name is unknown.
    pub fn from_settings(mut settings: ClockSettings) -> Result<Self> {
        let locale = settings.locale.take().map(|name| parse_locale(&name)).transpose()?;

        Ok(Self {
            settings,
            locale,
            ..Self::default()
        })
    }

    /// Settings recorded so far.
    pub fn settings(&self) -> &ClockSettings {
        &self.settings
    }

    setters! {
        /// Sets the skin type; its preset is applied first on build.
        skin_type: ClockSkinType;
        /// Sets the initial time.
        time: NaiveDateTime;
        discrete_seconds: bool;
        discrete_minutes: bool;
        seconds_visible: bool;
        title_visible: bool;
        text_visible: bool;
        date_visible: bool;
        night_mode: bool;
        auto_night_mode: bool;
        running: bool;
        background_paint: Color;
        border_paint: Color;
        foreground_paint: Color;
        title_color: Color;
        text_color: Color;
        date_color: Color;
        hour_tick_mark_color: Color;
        minute_tick_mark_color: Color;
        hour_needle_color: Color;
        minute_needle_color: Color;
        second_needle_color: Color;
        knob_color: Color;
        lcd_design: LcdDesign;
        alarms_enabled: bool;
        lcd_crystal_enabled: bool;
        shadows_enabled: bool;
        lcd_font: LcdFont;
        pref_width: f64;
        pref_height: f64;
        min_width: f64;
        min_height: f64;
        max_width: f64;
        max_height: f64;
        scale_x: f64;
        scale_y: f64;
        layout_x: f64;
        layout_y: f64;
        translate_x: f64;
        translate_y: f64;
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = Some(title.into());
        self
    }

    /// Sets the free text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.settings.text = Some(text.into());
        self
    }

    /// Sets alarms from a list. Wins over [`ClockBuilder::alarms_from_slice`]
    /// regardless of call order.
    pub fn alarms(mut self, alarms: impl Into<Vec<Alarm>>) -> Self {
        self.settings.alarms = Some(alarms.into());
        self
    }

    /// Sets alarms from an array.
    pub fn alarms_from_slice(mut self, alarms: &[Alarm]) -> Self {
        self.alarms_array = Some(alarms.to_vec());
        self
    }

    /// Sets the listener for fired alarms.
    pub fn on_alarm(mut self, listener: AlarmListener) -> Self {
        self.on_alarm = Some(listener);
        self
    }

    /// Sets the locale for the date text.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets preferred width and height.
    pub fn pref_size(mut self, width: f64, height: f64) -> Self {
        self.settings.pref_size = Some(Dimension { width, height });
        self
    }

    /// Sets minimum width and height.
    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.settings.min_size = Some(Dimension { width, height });
        self
    }

    /// Sets maximum width and height.
    pub fn max_size(mut self, width: f64, height: f64) -> Self {
        self.settings.max_size = Some(Dimension { width, height });
        self
    }

    /// Produces the configured clock.
    pub fn build(self) -> Clock {
        let mut clock = match self.settings.skin_type {
            Some(skin_type) => {
                let mut clock = Clock::with_skin_type(skin_type);
                let preset_keys = apply_settings(&mut clock, &preset(skin_type));
                debug!(%skin_type, preset_keys, "applied skin preset");
                clock
            }
            None => Clock::new(),
        };

        if let Some(alarms) = self.alarms_array {
            clock.set_alarms(alarms);
        }
        if let Some(alarms) = self.settings.alarms.clone() {
            clock.set_alarms(alarms);
        }

        let mut applied = apply_settings(&mut clock, &self.settings);

        if let Some(locale) = self.locale {
            clock.set_locale(locale);
            applied += 1;
        }
        if let Some(listener) = self.on_alarm {
            clock.set_on_alarm(listener);
            applied += 1;
        }

        debug!(applied, alarms = clock.alarms().len(), "built clock");

        clock.take_updates();
        clock
    }
}

/// Assigns every present key except skin type, alarms and locale.
///
/// Dimension pairs go before their single-axis keys so the single-axis keys
/// win when both are set.
fn apply_settings(clock: &mut Clock, settings: &ClockSettings) -> usize {
    let mut applied = 0;

    if let Some(Dimension { width, height }) = settings.pref_size {
        clock.set_pref_size(width, height);
        applied += 1;
    }
    if let Some(Dimension { width, height }) = settings.min_size {
        clock.set_min_size(width, height);
        applied += 1;
    }
    if let Some(Dimension { width, height }) = settings.max_size {
        clock.set_max_size(width, height);
        applied += 1;
    }

    apply!(clock, applied, settings {
        pref_width => set_pref_width,
        pref_height => set_pref_height,
        min_width => set_min_width,
        min_height => set_min_height,
        max_width => set_max_width,
        max_height => set_max_height,
    });

    apply!(clock, applied, settings {
        scale_x => set_scale_x,
        scale_y => set_scale_y,
        layout_x => set_layout_x,
        layout_y => set_layout_y,
        translate_x => set_translate_x,
        translate_y => set_translate_y,
    });

    apply!(clock, applied, settings {
        time => set_time,
        title => set_title,
        text => set_text,
        discrete_seconds => set_discrete_seconds,
        discrete_minutes => set_discrete_minutes,
        seconds_visible => set_seconds_visible,
        title_visible => set_title_visible,
        text_visible => set_text_visible,
        date_visible => set_date_visible,
        night_mode => set_night_mode,
        auto_night_mode => set_auto_night_mode,
        running => set_running,
        background_paint => set_background_paint,
        border_paint => set_border_paint,
        foreground_paint => set_foreground_paint,
        title_color => set_title_color,
        text_color => set_text_color,
        date_color => set_date_color,
        hour_tick_mark_color => set_hour_tick_mark_color,
        minute_tick_mark_color => set_minute_tick_mark_color,
        hour_needle_color => set_hour_needle_color,
        minute_needle_color => set_minute_needle_color,
        second_needle_color => set_second_needle_color,
        knob_color => set_knob_color,
        lcd_design => set_lcd_design,
        alarms_enabled => set_alarms_enabled,
        lcd_crystal_enabled => set_lcd_crystal_enabled,
        shadows_enabled => set_shadows_enabled,
        lcd_font => set_lcd_font,
    });

    applied
}

#[cfg(test)]
mod tests;
