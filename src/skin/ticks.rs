use kurbo::{Line, Point};
use serde::Serialize;

use crate::clock::Color;

use super::geometry::{
    HOUR_TICK_INNER_RADIUS, HOUR_TICK_WIDTH, MINUTE_TICK_INNER_RADIUS, MINUTE_TICK_WIDTH,
    TICK_OUTER_RADIUS,
};

/// Number of tick positions around the dial.
pub const TICK_COUNT: usize = 60;

const START_ANGLE: f64 = 180.0;
const ANGLE_STEP: f64 = 360.0 / TICK_COUNT as f64;

/// Whether a tick marks an hour or a minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    /// Every fifth position, long and bold.
    Hour,
    /// Every other position.
    Minute,
}

impl TickKind {
    /// Kind of the tick at `index`, counted clockwise from 12 o'clock.
    pub fn of(index: usize) -> Self {
        if index % 5 == 0 {
            TickKind::Hour
        } else {
            TickKind::Minute
        }
    }
}

/// One stroked tick, drawn with round caps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickMark {
    /// Position, 0 at 12 o'clock, increasing clockwise.
    pub index: usize,
    /// Hour or minute tick.
    pub kind: TickKind,
    /// From the inner to the outer radius, in face coordinates.
    pub line: Line,
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Builds all sixty ticks for a face of edge length `size`.
pub fn tick_marks(size: f64, hour_color: Color, minute_color: Color) -> Vec<TickMark> {
    let centre = Point::new(size * 0.5, size * 0.5);

    (0..TICK_COUNT)
        .map(|index| {
            let angle = (START_ANGLE - ANGLE_STEP * index as f64).to_radians();
            let (sin, cos) = angle.sin_cos();
            let at = |radius: f64| {
                Point::new(
                    centre.x + size * radius * sin,
                    centre.y + size * radius * cos,
                )
            };

            let kind = TickKind::of(index);
            let (inner, width, color) = match kind {
                TickKind::Hour => (HOUR_TICK_INNER_RADIUS, HOUR_TICK_WIDTH, hour_color),
                TickKind::Minute => (MINUTE_TICK_INNER_RADIUS, MINUTE_TICK_WIDTH, minute_color),
            };

            TickMark {
                index,
                kind,
                line: Line::new(at(inner), at(TICK_OUTER_RADIUS)),
                width: size * width,
                color,
            }
        })
        .collect()
}
