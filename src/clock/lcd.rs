use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color scheme of the LCD panel used by LCD-type skins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LcdDesign {
    /// Grey-green classic panel.
    #[default]
    Standard,
    /// Green backlit panel.
    StandardGreen,
    /// Blue backlit panel.
    Blue,
    /// Orange backlit panel.
    Orange,
    /// Red backlit panel.
    Red,
    /// Yellow backlit panel.
    Yellow,
    /// White panel.
    White,
    /// Grey panel.
    Gray,
    /// Black panel.
    Black,
}

/// Font used for LCD digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LcdFont {
    /// Proportional sans-serif.
    Standard,
    /// Segmented LCD digits.
    Lcd,
    /// Seven-segment digits.
    Digital,
    /// Bold seven-segment digits.
    #[default]
    DigitalBold,
    /// Elektra dot-matrix style.
    Elektra,
}
