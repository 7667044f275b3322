//! Analog face renderer.
//!
//! [`ClockSkin`] keeps a [`FaceScene`] in sync with a [`Clock`]. It reacts to
//! three independent passes:
//!
//! - resize: recompute the face edge length and all proportional geometry
//! - redraw: reapply paints and effects and re-render text and ticks
//! - time: rotate the needles and refresh the time and date texts
//!
//! Each pass recomputes from the clock's current state, so repeating one
//! with unchanged input yields an identical scene.

pub mod geometry;
mod needles;
pub mod scene;
mod text;
mod ticks;

pub use geometry::FaceGeometry;
pub use needles::NeedleAngles;
pub use scene::{DropShadow, FaceScene, Knob, Needle, TextNode};
pub use text::{ApproximateMetrics, FONT_STEP, TextMetrics, fit_font_size};
pub use ticks::{TICK_COUNT, TickKind, TickMark, tick_marks};

use chrono::NaiveDateTime;
use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::clock::{Clock, Color, Updates};

use geometry::{
    INITIAL_SHADOW_EXTENT, MAXIMUM_SIZE, MINIMUM_SIZE, NeedleGeometry, PREFERRED_SIZE,
};

const TITLE_FONT: f64 = 0.12;
const TITLE_MAX_WIDTH: f64 = 0.6;
const TITLE_Y: f64 = 0.25;
const TIME_FONT: f64 = 0.12;
const TIME_MAX_WIDTH: f64 = 0.6;
const TIME_Y: f64 = 0.6;
const DATE_FONT: f64 = 0.05;
const DATE_MAX_WIDTH: f64 = 0.3;
const DATE_X: f64 = 0.45;

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%a %-d";

const SHADOW_COLOR: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 64,
};
const KNOB_STROKE: Color = Color {
    r: 0x28,
    g: 0x2a,
    b: 0x32,
    a: 128,
};

/// Gives the clock default size constraints where the host set none.
fn apply_size_defaults(clock: &mut Clock) {
    let size = clock.size_constraints();

    if size.pref_width < 0.0 && size.pref_height < 0.0 {
        clock.set_pref_size(PREFERRED_SIZE, PREFERRED_SIZE);
    }
    if size.min_width <= 0.0 || size.min_height <= 0.0 {
        clock.set_min_size(MINIMUM_SIZE, MINIMUM_SIZE);
    }
    if size.max_width <= 0.0 || size.max_height <= 0.0 {
        clock.set_max_size(MAXIMUM_SIZE, MAXIMUM_SIZE);
    }
}

/// Renders a [`Clock`] as an analog face.
#[derive(Debug, Clone)]
pub struct ClockSkin<M = ApproximateMetrics> {
    size: f64,
    geometry: FaceGeometry,
    drop_shadow: DropShadow,
    scene: FaceScene,
    metrics: M,
}

impl ClockSkin {
    /// Creates a skin measuring text with [`ApproximateMetrics`].
    pub fn new(clock: &mut Clock) -> Self {
        Self::with_metrics(clock, ApproximateMetrics::default())
    }
}

impl<M: TextMetrics> ClockSkin<M> {
    /// Creates a skin using the host's text metrics.
    ///
    /// Fills in default size constraints on the clock once, lays the face
    /// out at the preferred size and then at the clock's bounds if it has
    /// been laid out already.
    pub fn with_metrics(clock: &mut Clock, metrics: M) -> Self {
        apply_size_defaults(clock);

        let geometry = FaceGeometry::new(PREFERRED_SIZE);
        let needle = |g: &NeedleGeometry, fill: Color| Needle {
            shape: g.shape(),
            pivot: g.pivot,
            angle: 0.0,
            fill,
            visible: true,
        };
        let drop_shadow = DropShadow {
            color: SHADOW_COLOR,
            radius: INITIAL_SHADOW_EXTENT * PREFERRED_SIZE,
            offset_y: INITIAL_SHADOW_EXTENT * PREFERRED_SIZE,
        };

        let scene = FaceScene {
            transform: clock.node_transform(),
            pane: Rect::new(0.0, 0.0, PREFERRED_SIZE, PREFERRED_SIZE),
            background: clock.background_paint(),
            border: clock.border_paint(),
            ticks: Vec::new(),
            hour_needle: needle(&geometry.hour, clock.hour_needle_color()),
            minute_needle: needle(&geometry.minute, clock.minute_needle_color()),
            second_needle: needle(&geometry.second, clock.second_needle_color()),
            knob: Knob {
                circle: geometry.knob,
                fill: clock.knob_color(),
                stroke: KNOB_STROKE,
            },
            shadow: clock.shadows_enabled().then_some(drop_shadow),
            title: TextNode::empty(),
            text: TextNode::empty(),
            date: TextNode::empty(),
        };

        let mut skin = Self {
            size: PREFERRED_SIZE,
            geometry,
            drop_shadow,
            scene,
            metrics,
        };

        skin.draw_ticks(clock);
        skin.redraw(clock);
        skin.apply_visibility(clock);
        skin.handle(Updates::RESIZE, clock);
        skin
    }

    /// Current frame.
    pub fn scene(&self) -> &FaceScene {
        &self.scene
    }

    /// Face edge length of the last successful layout.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Geometry of the last successful layout.
    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    /// Runs the passes named by `updates`.
    ///
    /// A resize is followed by a redraw; a redraw includes the time pass.
    /// A resize to a degenerate size is skipped and does not force a redraw.
    pub fn handle(&mut self, updates: Updates, clock: &Clock) {
        let resized = updates.contains(Updates::RESIZE) && self.resize(clock);

        if resized || updates.contains(Updates::REDRAW) {
            self.redraw(clock);
        } else if updates.contains(Updates::TIME) {
            self.update_time(clock.time(), clock);
        }

        if updates.contains(Updates::VISIBILITY) {
            self.apply_visibility(clock);
        }
    }

    /// Recomputes all geometry from the clock's bounds and insets.
    ///
    /// Returns `false` and leaves the scene untouched when the face would
    /// have no area.
    pub fn resize(&mut self, clock: &Clock) -> bool {
        let bounds = clock.bounds();
        let insets = clock.insets();
        let width = bounds.width - insets.x0 - insets.x1;
        let height = bounds.height - insets.y0 - insets.y1;
        let size = width.min(height);

        if size.is_nan() || size <= 0.0 {
            debug!(width, height, "skipping resize to degenerate face");
            return false;
        }

        self.size = size;
        self.geometry = FaceGeometry::new(size);
        trace!(size, "laying out clock face");

        self.scene.pane = Rect::from_origin_size(
            Point::new((bounds.width - size) * 0.5, (bounds.height - size) * 0.5),
            (size, size),
        );
        self.scene.transform = clock.node_transform();

        self.drop_shadow.radius = self.geometry.shadow_radius;
        self.drop_shadow.offset_y = self.geometry.shadow_offset_y;
        if self.scene.shadow.is_some() {
            self.scene.shadow = Some(self.drop_shadow);
        }

        self.draw_ticks(clock);

        let g = self.geometry;
        for (needle, layout) in [
            (&mut self.scene.hour_needle, g.hour),
            (&mut self.scene.minute_needle, g.minute),
            (&mut self.scene.second_needle, g.second),
        ] {
            needle.shape = layout.shape();
            needle.pivot = layout.pivot;
        }
        self.scene.knob.circle = g.knob;

        self.place_title(clock);
        self.place_time_texts(clock.time(), clock);
        true
    }

    /// Reapplies paints and effects and re-renders ticks and texts at the
    /// current size.
    pub fn redraw(&mut self, clock: &Clock) {
        self.scene.background = clock.background_paint();
        self.scene.border = clock.border_paint();
        self.scene.transform = clock.node_transform();
        self.scene.shadow = clock.shadows_enabled().then_some(self.drop_shadow);

        self.scene.hour_needle.fill = clock.hour_needle_color();
        self.scene.minute_needle.fill = clock.minute_needle_color();
        self.scene.second_needle.fill = clock.second_needle_color();
        self.scene.knob.fill = clock.knob_color();

        self.draw_ticks(clock);
        self.update_time(clock.time(), clock);
        self.place_title(clock);
    }

    /// Rotates the needles for `time` and refreshes the time and date texts.
    pub fn update_time(&mut self, time: NaiveDateTime, clock: &Clock) {
        let angles = NeedleAngles::at(time, clock.discrete_minutes(), clock.discrete_seconds());

        self.scene.hour_needle.angle = angles.hour;
        self.scene.minute_needle.angle = angles.minute;
        self.scene.second_needle.angle = angles.second;

        self.place_time_texts(time, clock);
    }

    /// Shows or hides title, time text, date and second needle.
    pub fn apply_visibility(&mut self, clock: &Clock) {
        self.scene.title.visible = clock.title_visible();
        self.scene.text.visible = clock.text_visible();
        self.scene.date.visible = clock.date_visible();
        self.scene.second_needle.visible = clock.seconds_visible();
    }

    fn draw_ticks(&mut self, clock: &Clock) {
        self.scene.ticks = tick_marks(
            self.size,
            clock.hour_tick_mark_color(),
            clock.minute_tick_mark_color(),
        );
    }

    fn place_title(&mut self, clock: &Clock) {
        let size = self.size;
        let node = &mut self.scene.title;

        node.content = clock.title().to_string();
        node.fill = clock.title_color();
        fit(&self.metrics, node, size * TITLE_MAX_WIDTH, size * TITLE_FONT);
        node.origin = Point::new((size - node.bounds.width) * 0.5, size * TITLE_Y);
    }

    fn place_time_texts(&mut self, time: NaiveDateTime, clock: &Clock) {
        let size = self.size;

        let text = &mut self.scene.text;
        text.content = time.format(TIME_FORMAT).to_string();
        text.fill = clock.text_color();
        fit(&self.metrics, text, size * TIME_MAX_WIDTH, size * TIME_FONT);
        text.origin = Point::new((size - text.bounds.width) * 0.5, size * TIME_Y);

        let date = &mut self.scene.date;
        date.content = time
            .and_utc()
            .format_localized(DATE_FORMAT, clock.locale())
            .to_string()
            .to_uppercase();
        date.fill = clock.date_color();
        fit(&self.metrics, date, size * DATE_MAX_WIDTH, size * DATE_FONT);
        date.origin = Point::new(
            (size * 0.5 - date.bounds.width) * 0.5 + size * DATE_X,
            (size - date.bounds.height) * 0.5,
        );
    }
}

/// Fits `node`'s content into `max_width` starting from `font_size` and
/// records the resulting bounds.
fn fit(metrics: &impl TextMetrics, node: &mut TextNode, max_width: f64, font_size: f64) {
    node.font_size = fit_font_size(metrics, &node.content, max_width, font_size);
    node.bounds = metrics.measure(&node.content, node.font_size);
}

#[cfg(test)]
mod tests;
