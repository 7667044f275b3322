//! Proportional layout of the clock face.
//!
//! Every length is a fixed fraction of the face edge `size`, so the face
//! keeps its proportions at any pixel size.

use kurbo::{Circle, Point, Rect, RoundedRect};

/// Preferred edge length applied when the host gave none.
pub const PREFERRED_SIZE: f64 = 250.0;
/// Minimum edge length applied when the host gave none.
pub const MINIMUM_SIZE: f64 = 50.0;
/// Maximum edge length applied when the host gave none.
pub const MAXIMUM_SIZE: f64 = 1024.0;

/// Hour needle width.
pub const HOUR_NEEDLE_WIDTH: f64 = 0.015;
/// Hour needle length.
pub const HOUR_NEEDLE_HEIGHT: f64 = 0.29;
/// Top edge of the unrotated hour needle.
pub const HOUR_NEEDLE_TOP: f64 = 0.21;
/// Minute needle width.
pub const MINUTE_NEEDLE_WIDTH: f64 = 0.015;
/// Minute and second needle length.
pub const LONG_NEEDLE_HEIGHT: f64 = 0.47;
/// Top edge of the unrotated minute and second needles.
pub const LONG_NEEDLE_TOP: f64 = 0.03;
/// Second needle width.
pub const SECOND_NEEDLE_WIDTH: f64 = 0.005;
/// Corner arc diameter of every needle.
pub const NEEDLE_ARC: f64 = 0.015;
/// Radius of the centre knob.
pub const KNOB_RADIUS: f64 = 0.0225;
/// Drop shadow blur radius and vertical offset.
pub const SHADOW_EXTENT: f64 = 0.008;
/// Shadow extent before the first layout, relative to [`PREFERRED_SIZE`].
pub const INITIAL_SHADOW_EXTENT: f64 = 0.015;

/// Outer radius of every tick.
pub const TICK_OUTER_RADIUS: f64 = 0.465;
/// Inner radius of hour ticks.
pub const HOUR_TICK_INNER_RADIUS: f64 = 0.405;
/// Inner radius of minute ticks.
pub const MINUTE_TICK_INNER_RADIUS: f64 = 0.435;
/// Stroke width of hour ticks.
pub const HOUR_TICK_WIDTH: f64 = 0.01;
/// Stroke width of minute ticks.
pub const MINUTE_TICK_WIDTH: f64 = 0.005;

/// An unrotated needle and the point it rotates about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleGeometry {
    /// Needle pointing at 12 o'clock, in face coordinates.
    pub rect: Rect,
    /// Corner radius, at most half the needle width.
    pub corner_radius: f64,
    /// Base-centre of the needle; sits on the face centre.
    pub pivot: Point,
}

impl NeedleGeometry {
    fn centred(size: f64, width: f64, top: f64, height: f64) -> Self {
        let width = size * width;
        let height = size * height;
        let x = (size - width) * 0.5;
        let y = size * top;

        Self {
            rect: Rect::new(x, y, x + width, y + height),
            corner_radius: (size * NEEDLE_ARC * 0.5).min(width * 0.5),
            pivot: Point::new(x + width * 0.5, y + height),
        }
    }

    /// The needle as a rounded rectangle.
    pub fn shape(&self) -> RoundedRect {
        self.rect.to_rounded_rect(self.corner_radius)
    }
}

/// Geometry of every sized element for one face edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Face edge length.
    pub size: f64,
    /// Hour needle.
    pub hour: NeedleGeometry,
    /// Minute needle.
    pub minute: NeedleGeometry,
    /// Second needle.
    pub second: NeedleGeometry,
    /// Centre knob.
    pub knob: Circle,
    /// Drop shadow blur radius.
    pub shadow_radius: f64,
    /// Drop shadow vertical offset.
    pub shadow_offset_y: f64,
}

impl FaceGeometry {
    /// Lays out a face of edge length `size`.
    pub fn new(size: f64) -> Self {
        let centre = size * 0.5;

        Self {
            size,
            hour: NeedleGeometry::centred(
                size,
                HOUR_NEEDLE_WIDTH,
                HOUR_NEEDLE_TOP,
                HOUR_NEEDLE_HEIGHT,
            ),
            minute: NeedleGeometry::centred(
                size,
                MINUTE_NEEDLE_WIDTH,
                LONG_NEEDLE_TOP,
                LONG_NEEDLE_HEIGHT,
            ),
            second: NeedleGeometry::centred(
                size,
                SECOND_NEEDLE_WIDTH,
                LONG_NEEDLE_TOP,
                LONG_NEEDLE_HEIGHT,
            ),
            knob: Circle::new((centre, centre), size * KNOB_RADIUS),
            shadow_radius: size * SHADOW_EXTENT,
            shadow_offset_y: size * SHADOW_EXTENT,
        }
    }

    /// Centre of the face.
    pub fn centre(&self) -> Point {
        Point::new(self.size * 0.5, self.size * 0.5)
    }
}
