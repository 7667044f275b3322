use chrono::{NaiveDateTime, Timelike};

/// Rotation of each needle in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeedleAngles {
    /// Hour needle; always sweeps with the minutes.
    pub hour: f64,
    /// Minute needle.
    pub minute: f64,
    /// Second needle.
    pub second: f64,
}

impl NeedleAngles {
    /// Angles for `time`.
    ///
    /// Discrete needles stop on whole units; continuous ones add the
    /// fraction contributed by the next smaller unit.
    pub fn at(time: NaiveDateTime, discrete_minutes: bool, discrete_seconds: bool) -> Self {
        let hour = f64::from(time.hour());
        let minute = f64::from(time.minute());
        let second = f64::from(time.second());
        let millis = f64::from(time.nanosecond().min(999_999_999) / 1_000_000);

        let minute_angle = if discrete_minutes {
            minute * 6.0
        } else {
            minute * 6.0 + second * 0.1
        };

        let second_angle = if discrete_seconds {
            second * 6.0
        } else {
            second * 6.0 + millis * 0.006
        };

        Self {
            hour: 0.5 * (60.0 * hour + minute),
            minute: minute_angle,
            second: second_angle,
        }
    }
}
