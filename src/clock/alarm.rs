use std::{fmt, sync::Arc};

use chrono::{Datelike, NaiveDateTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Color;

/// How often an alarm recurs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Repetition {
    /// Fires the first time the clock passes the alarm time, then is removed.
    #[default]
    Once,
    /// Fires at the alarm's minute and thirty minutes later, every hour.
    HalfHourly,
    /// Fires at the alarm's minute and second of every hour.
    Hourly,
    /// Fires at the alarm's time of day.
    Daily,
    /// Fires at the alarm's time of day on the alarm's weekday.
    Weekly,
}

/// A point in time the clock reports through its alarm listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Alarm {
    /// When the alarm is due. Only the fields relevant to the repetition
    /// are compared.
    #[schemars(with = "String")]
    pub time: NaiveDateTime,

    /// Recurrence of the alarm.
    #[serde(default)]
    pub repetition: Repetition,

    /// Disarmed alarms are kept but never fire.
    #[serde(default = "armed_default")]
    pub armed: bool,

    /// Message carried by the alarm event.
    #[serde(default)]
    pub text: String,

    /// Accent color for hosts that display alarms.
    #[serde(default = "alarm_color_default")]
    #[schemars(with = "String")]
    pub color: Color,
}

fn armed_default() -> bool {
    true
}

fn alarm_color_default() -> Color {
    Color::WHITE
}

/// Result of checking one alarm against the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlarmCheck {
    /// Not due.
    Pending,
    /// Due now; stays registered.
    Fire,
    /// A one-shot alarm whose time has passed; `fire` is false when disarmed.
    Expired {
        /// Whether an event is emitted before removal
        fire: bool,
    },
}

impl Alarm {
    /// Creates an armed alarm.
    pub fn new(time: NaiveDateTime, repetition: Repetition, text: impl Into<String>) -> Self {
        Self {
            time,
            repetition,
            armed: true,
            text: text.into(),
            color: alarm_color_default(),
        }
    }

    pub(crate) fn check(&self, now: NaiveDateTime) -> AlarmCheck {
        let at = self.time;
        let same_second = at.second() == now.second();

        let due = match self.repetition {
            Repetition::Once => {
                return if now > at {
                    AlarmCheck::Expired { fire: self.armed }
                } else {
                    AlarmCheck::Pending
                };
            }
            Repetition::HalfHourly => {
                same_second
                    && (at.minute() == now.minute() || (at.minute() + 30) % 60 == now.minute())
            }
            Repetition::Hourly => same_second && at.minute() == now.minute(),
            Repetition::Daily => at.time().with_nanosecond(0) == now.time().with_nanosecond(0),
            Repetition::Weekly => {
                at.weekday() == now.weekday()
                    && at.time().with_nanosecond(0) == now.time().with_nanosecond(0)
            }
        };

        if due && self.armed {
            AlarmCheck::Fire
        } else {
            AlarmCheck::Pending
        }
    }
}

/// Emitted when an alarm fires.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmEvent {
    /// The alarm that fired.
    pub alarm: Alarm,
    /// Clock time at which it fired.
    pub fired_at: NaiveDateTime,
}

/// Callback invoked for every fired alarm.
#[derive(Clone)]
pub struct AlarmListener(Arc<dyn Fn(&AlarmEvent) + Send + Sync>);

impl AlarmListener {
    /// Wraps a closure as a listener.
    pub fn new(callback: impl Fn(&AlarmEvent) + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    pub(crate) fn notify(&self, event: &AlarmEvent) {
        (self.0)(event);
    }
}

impl fmt::Debug for AlarmListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AlarmListener")
    }
}
