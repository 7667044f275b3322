use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual style a clock is created with.
///
/// Besides naming the look, a skin type selects the preset profile that the
/// builder applies before any explicit setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockSkinType {
    /// Plain analog face with toolkit defaults.
    #[default]
    Clock,

    /// Dark face with white needles and translucent minute ticks.
    Yota2,

    /// Digital LCD display.
    Lcd,

    /// Black face, orange second needle and a visible date.
    Pear,

    /// Charcoal face with a green second needle.
    Plain,

    /// Station clock with a red second needle and jumping minutes.
    Db,
}

impl fmt::Display for ClockSkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockSkinType::Clock => write!(f, "clock"),
            ClockSkinType::Yota2 => write!(f, "yota2"),
            ClockSkinType::Lcd => write!(f, "lcd"),
            ClockSkinType::Pear => write!(f, "pear"),
            ClockSkinType::Plain => write!(f, "plain"),
            ClockSkinType::Db => write!(f, "db"),
        }
    }
}
