//! Draw primitives produced by the skin.
//!
//! A [`FaceScene`] is a complete, toolkit-neutral description of one frame.
//! Face elements use face coordinates with the origin at the pane's top-left
//! corner; [`FaceScene::pane`] places the face inside the control and
//! [`FaceScene::transform`] places the control inside its parent.

use kurbo::{Affine, Circle, Point, Rect, RoundedRect, Size};
use serde::Serialize;

use crate::clock::Color;

use super::ticks::TickMark;

/// Font family of the title, time and date texts.
pub const TEXT_FONT_FAMILY: &str = "Lato Light";

/// Stroke width of the face border.
pub const BORDER_WIDTH: f64 = 1.0;

/// A rotatable clock hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Needle {
    /// Unrotated needle pointing at 12 o'clock.
    pub shape: RoundedRect,
    /// Rotation centre.
    pub pivot: Point,
    /// Clockwise rotation in degrees.
    pub angle: f64,
    /// Fill color.
    pub fill: Color,
    /// Whether the needle is drawn.
    pub visible: bool,
}

impl Needle {
    /// Rotation about the pivot to apply to [`Needle::shape`].
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(self.angle.to_radians(), self.pivot)
    }
}

/// The centre cap covering the needle pivots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Knob {
    /// Knob outline.
    pub circle: Circle,
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
}

/// Shadow cast by the needles and knob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropShadow {
    /// Shadow color.
    pub color: Color,
    /// Blur radius.
    pub radius: f64,
    /// Vertical offset.
    pub offset_y: f64,
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    /// Displayed string.
    pub content: String,
    /// Font size after fitting.
    pub font_size: f64,
    /// Top-left corner of the layout bounds.
    pub origin: Point,
    /// Measured layout bounds.
    pub bounds: Size,
    /// Fill color.
    pub fill: Color,
    /// Whether the text is drawn.
    pub visible: bool,
}

impl TextNode {
    pub(crate) fn empty() -> Self {
        Self {
            content: String::new(),
            font_size: 0.0,
            origin: Point::ZERO,
            bounds: Size::ZERO,
            fill: Color::TRANSPARENT,
            visible: false,
        }
    }

    /// Layout bounds in face coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.bounds)
    }
}

/// Everything needed to draw one frame of the clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceScene {
    /// Control-to-parent transform.
    pub transform: Affine,
    /// Square face area inside the control.
    pub pane: Rect,
    /// Fill of the round face.
    pub background: Color,
    /// Stroke around the face, [`BORDER_WIDTH`] wide.
    pub border: Color,
    /// The sixty tick marks.
    pub ticks: Vec<TickMark>,
    /// Hour hand.
    pub hour_needle: Needle,
    /// Minute hand.
    pub minute_needle: Needle,
    /// Second hand.
    pub second_needle: Needle,
    /// Centre knob.
    pub knob: Knob,
    /// Shadow under needles and knob, when enabled.
    pub shadow: Option<DropShadow>,
    /// Title above the centre.
    pub title: TextNode,
    /// Digital time below the centre.
    pub text: TextNode,
    /// Date at 3 o'clock.
    pub date: TextNode,
}

impl FaceScene {
    /// The face as a circle in face coordinates.
    pub fn dial(&self) -> Circle {
        let radius = self.pane.width() * 0.5;
        Circle::new((radius, radius), radius)
    }
}
