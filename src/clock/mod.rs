//! Clock control state.
//!
//! [`Clock`] is the configuration holder a skin renders from. It owns the
//! displayed time, colors, visibility and stepping flags, alarms and the
//! size constraints a host layout needs. Setters record which skin passes
//! they invalidate instead of notifying observers directly.

mod alarm;
mod color;
mod lcd;
mod skin_type;
mod updates;

pub use alarm::{Alarm, AlarmEvent, AlarmListener, Repetition};
pub use color::Color;
pub use lcd::{LcdDesign, LcdFont};
pub use skin_type::ClockSkinType;
pub use updates::Updates;

use alarm::AlarmCheck;
use chrono::{Local, Locale, NaiveDateTime, SubsecRound, Timelike};
use kurbo::{Affine, Insets, Point, Size};
use tracing::{debug, info};

/// Light grey used by every default text, needle and tick color.
pub const DEFAULT_FOREGROUND: Color = Color::rgb(242, 242, 242);

/// Size value meaning "let the layout compute it".
pub const USE_COMPUTED_SIZE: f64 = -1.0;

/// Preferred, minimum and maximum dimensions of the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraints {
    /// Preferred width
    pub pref_width: f64,
    /// Preferred height
    pub pref_height: f64,
    /// Minimum width
    pub min_width: f64,
    /// Minimum height
    pub min_height: f64,
    /// Maximum width
    pub max_width: f64,
    /// Maximum height
    pub max_height: f64,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            pref_width: USE_COMPUTED_SIZE,
            pref_height: USE_COMPUTED_SIZE,
            min_width: USE_COMPUTED_SIZE,
            min_height: USE_COMPUTED_SIZE,
            max_width: USE_COMPUTED_SIZE,
            max_height: USE_COMPUTED_SIZE,
        }
    }
}

/// Placement of the control inside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Horizontal scale about the control's centre
    pub scale_x: f64,
    /// Vertical scale about the control's centre
    pub scale_y: f64,
    /// Layout position x
    pub layout_x: f64,
    /// Layout position y
    pub layout_y: f64,
    /// Additional x offset
    pub translate_x: f64,
    /// Additional y offset
    pub translate_y: f64,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            layout_x: 0.0,
            layout_y: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

fn assign<T: PartialEq>(slot: &mut T, value: T, pending: &mut Updates, update: Updates) {
    if *slot != value {
        *slot = value;
        pending.insert(update);
    }
}

/// Hours 0-5 and 21-23 count as night for automatic night mode.
fn is_night(hour: u32) -> bool {
    hour <= 5 || hour >= 21
}

macro_rules! clock_properties {
    ($($(#[$doc:meta])* $field:ident / $setter:ident : $ty:ty => $update:expr;)+) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> $ty {
                self.$field
            }

            #[doc = concat!("Sets `", stringify!($field), "`.")]
            pub fn $setter(&mut self, value: $ty) {
                assign(&mut self.$field, value, &mut self.pending, $update);
            }
        )+
    };
}

macro_rules! transform_setters {
    ($($(#[$doc:meta])* $field:ident / $setter:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $setter(&mut self, value: f64) {
                assign(&mut self.transform.$field, value, &mut self.pending, Updates::REDRAW);
            }
        )+
    };
}

/// An analog clock control.
#[derive(Debug, Clone)]
pub struct Clock {
    skin_type: ClockSkinType,
    time: NaiveDateTime,
    title: String,
    text: String,

    discrete_seconds: bool,
    discrete_minutes: bool,
    seconds_visible: bool,
    title_visible: bool,
    text_visible: bool,
    date_visible: bool,
    night_mode: bool,
    auto_night_mode: bool,
    running: bool,

    background_paint: Color,
    border_paint: Color,
    foreground_paint: Color,
    title_color: Color,
    text_color: Color,
    date_color: Color,
    hour_tick_mark_color: Color,
    minute_tick_mark_color: Color,
    hour_needle_color: Color,
    minute_needle_color: Color,
    second_needle_color: Color,
    knob_color: Color,

    lcd_design: LcdDesign,
    lcd_font: LcdFont,
    lcd_crystal_enabled: bool,
    shadows_enabled: bool,
    locale: Locale,

    alarms_enabled: bool,
    alarms: Vec<Alarm>,
    on_alarm: Option<AlarmListener>,
    last_alarm_check: Option<NaiveDateTime>,

    size: SizeConstraints,
    transform: NodeTransform,
    width: f64,
    height: f64,
    insets: Insets,

    pending: Updates,
}

impl Default for Clock {
    fn default() -> Self {
        Self::with_skin_type(ClockSkinType::default())
    }
}

impl Clock {
    /// Creates a clock with default settings showing the local time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock for the given skin type. No preset is applied; see
    /// [`ClockBuilder`](crate::builder::ClockBuilder) for that.
    pub fn with_skin_type(skin_type: ClockSkinType) -> Self {
        Self {
            skin_type,
            time: Local::now().naive_local(),
            title: String::new(),
            text: String::new(),
            discrete_seconds: true,
            discrete_minutes: true,
            seconds_visible: false,
            title_visible: false,
            text_visible: false,
            date_visible: false,
            night_mode: false,
            auto_night_mode: false,
            running: false,
            background_paint: Color::TRANSPARENT,
            border_paint: Color::TRANSPARENT,
            foreground_paint: Color::TRANSPARENT,
            title_color: DEFAULT_FOREGROUND,
            text_color: DEFAULT_FOREGROUND,
            date_color: DEFAULT_FOREGROUND,
            hour_tick_mark_color: DEFAULT_FOREGROUND,
            minute_tick_mark_color: DEFAULT_FOREGROUND,
            hour_needle_color: DEFAULT_FOREGROUND,
            minute_needle_color: DEFAULT_FOREGROUND,
            second_needle_color: DEFAULT_FOREGROUND,
            knob_color: DEFAULT_FOREGROUND,
            lcd_design: LcdDesign::default(),
            lcd_font: LcdFont::default(),
            lcd_crystal_enabled: false,
            shadows_enabled: false,
            locale: Locale::en_US,
            alarms_enabled: false,
            alarms: Vec::new(),
            on_alarm: None,
            last_alarm_check: None,
            size: SizeConstraints::default(),
            transform: NodeTransform::default(),
            width: 0.0,
            height: 0.0,
            insets: Insets::ZERO,
            pending: Updates::empty(),
        }
    }

    /// Skin type the clock was created with.
    pub fn skin_type(&self) -> ClockSkinType {
        self.skin_type
    }

    /// Drains the skin passes accumulated since the last call.
    pub fn take_updates(&mut self) -> Updates {
        std::mem::take(&mut self.pending)
    }

    /// Currently displayed time.
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Sets the displayed time.
    pub fn set_time(&mut self, time: NaiveDateTime) {
        assign(&mut self.time, time, &mut self.pending, Updates::TIME);
    }

    /// Title shown in the upper half of the face.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        assign(&mut self.title, title.into(), &mut self.pending, Updates::REDRAW);
    }

    /// Free text of the control.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the free text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        assign(&mut self.text, text.into(), &mut self.pending, Updates::REDRAW);
    }

    clock_properties! {
        /// Whether the second needle jumps in whole seconds.
        discrete_seconds / set_discrete_seconds: bool => Updates::TIME;
        /// Whether the minute needle jumps in whole minutes.
        discrete_minutes / set_discrete_minutes: bool => Updates::TIME;
        /// Whether the second needle is shown.
        seconds_visible / set_seconds_visible: bool => Updates::VISIBILITY;
        /// Whether the title is shown.
        title_visible / set_title_visible: bool => Updates::VISIBILITY;
        /// Whether the digital time text is shown.
        text_visible / set_text_visible: bool => Updates::VISIBILITY;
        /// Whether the date text is shown.
        date_visible / set_date_visible: bool => Updates::VISIBILITY;
        /// Night mode flag for hosts that dim the display.
        night_mode / set_night_mode: bool => Updates::REDRAW;
        /// Whether night mode follows the time of day.
        auto_night_mode / set_auto_night_mode: bool => Updates::empty();
        /// Whether the owner should keep feeding time ticks.
        running / set_running: bool => Updates::empty();
        /// Fill of the round face.
        background_paint / set_background_paint: Color => Updates::REDRAW;
        /// Stroke around the face.
        border_paint / set_border_paint: Color => Updates::REDRAW;
        foreground_paint / set_foreground_paint: Color => Updates::REDRAW;
        title_color / set_title_color: Color => Updates::REDRAW;
        text_color / set_text_color: Color => Updates::REDRAW;
        date_color / set_date_color: Color => Updates::REDRAW;
        hour_tick_mark_color / set_hour_tick_mark_color: Color => Updates::REDRAW;
        minute_tick_mark_color / set_minute_tick_mark_color: Color => Updates::REDRAW;
        hour_needle_color / set_hour_needle_color: Color => Updates::REDRAW;
        minute_needle_color / set_minute_needle_color: Color => Updates::REDRAW;
        second_needle_color / set_second_needle_color: Color => Updates::REDRAW;
        knob_color / set_knob_color: Color => Updates::REDRAW;
        lcd_design / set_lcd_design: LcdDesign => Updates::REDRAW;
        lcd_font / set_lcd_font: LcdFont => Updates::REDRAW;
        lcd_crystal_enabled / set_lcd_crystal_enabled: bool => Updates::REDRAW;
        /// Whether needles cast a drop shadow.
        shadows_enabled / set_shadows_enabled: bool => Updates::REDRAW;
        /// Locale used for the weekday in the date text.
        locale / set_locale: Locale => Updates::REDRAW;
        /// Whether [`Clock::tick`] checks alarms.
        alarms_enabled / set_alarms_enabled: bool => Updates::empty();
    }

    /// Registered alarms.
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    /// Replaces all alarms.
    pub fn set_alarms(&mut self, alarms: impl Into<Vec<Alarm>>) {
        self.alarms = alarms.into();
    }

    /// Registers one more alarm.
    pub fn add_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    /// Removes every alarm equal to `alarm`.
    pub fn remove_alarm(&mut self, alarm: &Alarm) {
        self.alarms.retain(|a| a != alarm);
    }

    /// Removes all alarms.
    pub fn clear_alarms(&mut self) {
        self.alarms.clear();
    }

    /// Sets the callback invoked for fired alarms.
    pub fn set_on_alarm(&mut self, listener: AlarmListener) {
        self.on_alarm = Some(listener);
    }

    /// Size constraints for the host layout.
    pub fn size_constraints(&self) -> SizeConstraints {
        self.size
    }

    /// Sets preferred width and height.
    pub fn set_pref_size(&mut self, width: f64, height: f64) {
        self.size.pref_width = width;
        self.size.pref_height = height;
    }

    /// Sets minimum width and height.
    pub fn set_min_size(&mut self, width: f64, height: f64) {
        self.size.min_width = width;
        self.size.min_height = height;
    }

    /// Sets maximum width and height.
    pub fn set_max_size(&mut self, width: f64, height: f64) {
        self.size.max_width = width;
        self.size.max_height = height;
    }

    /// Sets the preferred width.
    pub fn set_pref_width(&mut self, width: f64) {
        self.size.pref_width = width;
    }

    /// Sets the preferred height.
    pub fn set_pref_height(&mut self, height: f64) {
        self.size.pref_height = height;
    }

    /// Sets the minimum width.
    pub fn set_min_width(&mut self, width: f64) {
        self.size.min_width = width;
    }

    /// Sets the minimum height.
    pub fn set_min_height(&mut self, height: f64) {
        self.size.min_height = height;
    }

    /// Sets the maximum width.
    pub fn set_max_width(&mut self, width: f64) {
        self.size.max_width = width;
    }

    /// Sets the maximum height.
    pub fn set_max_height(&mut self, height: f64) {
        self.size.max_height = height;
    }

    /// Placement values of the control.
    pub fn transform(&self) -> NodeTransform {
        self.transform
    }

    transform_setters! {
        /// Sets the horizontal scale.
        scale_x / set_scale_x;
        /// Sets the vertical scale.
        scale_y / set_scale_y;
        layout_x / set_layout_x;
        layout_y / set_layout_y;
        translate_x / set_translate_x;
        translate_y / set_translate_y;
    }

    /// Affine mapping control-local coordinates into the parent: scale about
    /// the control's centre, then layout position plus translation.
    pub fn node_transform(&self) -> Affine {
        let t = self.transform;
        let centre = Point::new(self.width * 0.5, self.height * 0.5).to_vec2();

        Affine::translate((t.layout_x + t.translate_x, t.layout_y + t.translate_y))
            * Affine::translate(centre)
            * Affine::scale_non_uniform(t.scale_x, t.scale_y)
            * Affine::translate(-centre)
    }

    /// Laid-out size assigned by the host.
    pub fn bounds(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Assigns the laid-out size.
    pub fn resize_to(&mut self, width: f64, height: f64) {
        assign(&mut self.width, width, &mut self.pending, Updates::RESIZE);
        assign(&mut self.height, height, &mut self.pending, Updates::RESIZE);
    }

    /// Padding between the bounds and the face.
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Sets the padding between the bounds and the face.
    pub fn set_insets(&mut self, insets: Insets) {
        assign(&mut self.insets, insets, &mut self.pending, Updates::RESIZE);
    }

    /// Advances the clock to `now`.
    ///
    /// Updates automatic night mode and, when alarms are enabled, checks
    /// them at most once per wall-clock second. Returns the alarms that
    /// fired after the listener has seen them.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<AlarmEvent> {
        self.set_time(now);

        if self.auto_night_mode {
            self.set_night_mode(is_night(now.hour()));
        }

        if !self.alarms_enabled {
            return Vec::new();
        }

        let second = now.trunc_subsecs(0);
        if self.last_alarm_check == Some(second) {
            return Vec::new();
        }
        self.last_alarm_check = Some(second);

        self.check_alarms(now)
    }

    /// Checks every alarm against `now`, fires the due ones and drops
    /// one-shot alarms whose time has passed.
    pub fn check_alarms(&mut self, now: NaiveDateTime) -> Vec<AlarmEvent> {
        let mut fired = Vec::new();

        self.alarms.retain(|alarm| {
            let (fire, keep) = match alarm.check(now) {
                AlarmCheck::Pending => (false, true),
                AlarmCheck::Fire => (true, true),
                AlarmCheck::Expired { fire } => (fire, false),
            };
            if fire {
                fired.push(AlarmEvent {
                    alarm: alarm.clone(),
                    fired_at: now,
                });
            }
            if !keep {
                debug!(alarm = %alarm.text, "removing expired one-shot alarm");
            }
            keep
        });

        for event in &fired {
            info!(alarm = %event.alarm.text, at = %event.fired_at, "alarm fired");
            if let Some(listener) = &self.on_alarm {
                listener.notify(event);
            }
        }

        fired
    }
}
