//! Unit tests for the clock skin
//!
//! Resize, redraw, time and visibility passes against a built clock.

use chrono::{Locale, NaiveDate, NaiveDateTime};
use kurbo::{Insets, Point, Size};

use crate::{
    builder::ClockBuilder,
    clock::{Clock, ClockSkinType, Color, Updates},
    skin::{ClockSkin, TextMetrics, TickKind, geometry::PREFERRED_SIZE},
};

fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_milli_opt(h, m, s, ms)
        .unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn laid_out(width: f64, height: f64) -> (Clock, ClockSkin) {
    let mut clock = ClockBuilder::new()
        .skin_type(ClockSkinType::Pear)
        .time(at(3, 30, 0, 0))
        .discrete_minutes(false)
        .discrete_seconds(false)
        .title("Office")
        .build();
    let mut skin = ClockSkin::new(&mut clock);

    clock.resize_to(width, height);
    skin.handle(clock.take_updates(), &clock);
    (clock, skin)
}

#[test]
fn new_skin_fills_in_size_defaults() {
    let mut clock = Clock::new();

    let skin = ClockSkin::new(&mut clock);
    let size = clock.size_constraints();

    assert_eq!((size.pref_width, size.pref_height), (250.0, 250.0));
    assert_eq!((size.min_width, size.min_height), (50.0, 50.0));
    assert_eq!((size.max_width, size.max_height), (1024.0, 1024.0));
    assert_eq!(skin.size(), PREFERRED_SIZE);
}

#[test]
fn explicit_size_constraints_are_kept() {
    let mut clock = ClockBuilder::new()
        .pref_size(400.0, 300.0)
        .min_size(80.0, 80.0)
        .max_size(500.0, 500.0)
        .build();

    ClockSkin::new(&mut clock);
    let size = clock.size_constraints();

    assert_eq!((size.pref_width, size.pref_height), (400.0, 300.0));
    assert_eq!((size.min_width, size.min_height), (80.0, 80.0));
    assert_eq!((size.max_width, size.max_height), (500.0, 500.0));
}

#[test]
fn face_is_the_smaller_edge_and_centred() {
    let (_, skin) = laid_out(400.0, 300.0);
    let scene = skin.scene();

    assert_eq!(skin.size(), 300.0);
    assert_eq!(scene.pane.origin(), Point::new(50.0, 0.0));
    assert_eq!(scene.pane.size(), Size::new(300.0, 300.0));
    assert!(close(scene.dial().radius, 150.0));
}

#[test]
fn insets_shrink_the_face() {
    let (mut clock, mut skin) = laid_out(300.0, 300.0);

    clock.set_insets(Insets::new(10.0, 20.0, 10.0, 20.0));
    skin.handle(clock.take_updates(), &clock);

    assert_eq!(skin.size(), 260.0);
}

#[test]
fn resize_is_idempotent() {
    let (clock, mut skin) = laid_out(320.0, 320.0);
    let before = skin.scene().clone();

    skin.handle(Updates::RESIZE, &clock);
    skin.handle(Updates::RESIZE, &clock);

    assert_eq!(*skin.scene(), before);
}

#[test]
fn degenerate_resize_keeps_previous_geometry() {
    let (mut clock, mut skin) = laid_out(320.0, 320.0);
    let before = skin.scene().clone();
    let geometry = *skin.geometry();

    clock.resize_to(0.0, 320.0);
    skin.handle(clock.take_updates(), &clock);
    assert_eq!(*skin.scene(), before);

    clock.resize_to(320.0, 320.0);
    clock.set_insets(Insets::uniform(200.0));
    skin.handle(clock.take_updates(), &clock);

    assert_eq!(*skin.scene(), before);
    assert_eq!(*skin.geometry(), geometry);
    assert_eq!(skin.size(), 320.0);
}

#[test]
fn needles_rotate_about_the_face_centre() {
    let (_, skin) = laid_out(200.0, 200.0);
    let scene = skin.scene();

    for needle in [scene.hour_needle, scene.minute_needle, scene.second_needle] {
        assert!(close(needle.pivot.x, 100.0));
        assert!(close(needle.pivot.y, 100.0));
    }
    assert!(close(scene.hour_needle.angle, 105.0));
    assert!(close(scene.minute_needle.angle, 180.0));
    assert!(close(scene.second_needle.angle, 0.0));

    let tip = scene.minute_needle.transform() * Point::new(100.0, 6.0);
    assert!(close(tip.x, 100.0));
    assert!(close(tip.y, 194.0));
}

#[test]
fn time_pass_only_moves_needles_and_texts() {
    let (mut clock, mut skin) = laid_out(200.0, 200.0);
    let ticks = skin.scene().ticks.clone();

    clock.set_time(at(9, 15, 45, 500));
    skin.handle(clock.take_updates(), &clock);
    let scene = skin.scene();

    assert!(close(scene.hour_needle.angle, 277.5));
    assert!(close(scene.minute_needle.angle, 94.5));
    assert!(close(scene.second_needle.angle, 273.0));
    assert_eq!(scene.text.content, "09:15");
    assert_eq!(scene.ticks, ticks);
}

#[test]
fn discrete_minutes_toggle_reaches_the_needle() {
    let (mut clock, mut skin) = laid_out(200.0, 200.0);
    clock.set_time(at(9, 15, 45, 0));
    skin.handle(clock.take_updates(), &clock);

    clock.set_discrete_minutes(true);
    skin.handle(clock.take_updates(), &clock);

    assert!(close(skin.scene().minute_needle.angle, 90.0));
}

#[test]
fn full_redraw_draws_sixty_ticks_in_preset_colors() {
    let (_, skin) = laid_out(200.0, 200.0);
    let ticks = &skin.scene().ticks;

    assert_eq!(ticks.len(), 60);
    assert!(
        ticks
            .iter()
            .filter(|t| t.kind == TickKind::Hour)
            .all(|t| t.color == Color::WHITE)
    );
    assert!(
        ticks
            .iter()
            .filter(|t| t.kind == TickKind::Minute)
            .all(|t| t.color == Color::rgb(115, 115, 115))
    );
}

#[test]
fn redraw_picks_up_new_paints() {
    let (mut clock, mut skin) = laid_out(200.0, 200.0);

    clock.set_background_paint(Color::rgb(10, 20, 30));
    clock.set_hour_tick_mark_color(Color::rgb(255, 0, 0));
    clock.set_shadows_enabled(true);
    skin.handle(clock.take_updates(), &clock);
    let scene = skin.scene();

    assert_eq!(scene.background, Color::rgb(10, 20, 30));
    assert_eq!(scene.ticks[0].color, Color::rgb(255, 0, 0));
    let shadow = scene.shadow.expect("shadow enabled");
    assert!(close(shadow.radius, 1.6));
    assert!(close(shadow.offset_y, 1.6));
}

#[test]
fn visibility_pass_follows_flags() {
    let (mut clock, mut skin) = laid_out(200.0, 200.0);
    let scene = skin.scene();
    assert!(scene.second_needle.visible);
    assert!(!scene.title.visible);
    assert!(scene.date.visible);

    clock.set_seconds_visible(false);
    clock.set_title_visible(true);
    skin.handle(clock.take_updates(), &clock);
    let scene = skin.scene();

    assert!(!scene.second_needle.visible);
    assert!(scene.title.visible);
}

#[test]
fn texts_are_placed_proportionally() {
    let (_, skin) = laid_out(200.0, 200.0);
    let scene = skin.scene();

    assert_eq!(scene.title.content, "Office");
    assert!(close(scene.title.origin.y, 50.0));
    assert!(close(scene.title.origin.x, (200.0 - scene.title.bounds.width) * 0.5));

    assert_eq!(scene.text.content, "03:30");
    assert!(close(scene.text.origin.y, 120.0));
    assert!(close(scene.text.font_size, 24.0));

    assert_eq!(scene.date.content, "SAT 17");
    assert!(close(scene.date.font_size, 10.0));
    assert!(close(
        scene.date.origin.x,
        (100.0 - scene.date.bounds.width) * 0.5 + 90.0
    ));
    assert!(close(
        scene.date.origin.y,
        (200.0 - scene.date.bounds.height) * 0.5
    ));
}

#[test]
fn date_follows_locale() {
    let (mut clock, mut skin) = laid_out(200.0, 200.0);

    clock.set_locale(Locale::de_DE);
    skin.handle(clock.take_updates(), &clock);

    assert_eq!(skin.scene().date.content, "SA 17");
}

struct WideMetrics;

impl TextMetrics for WideMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        Size::new(text.len() as f64 * font_size, font_size)
    }
}

#[test]
fn long_title_is_shrunk_with_host_metrics() {
    let mut clock = ClockBuilder::new()
        .title("Hauptbahnhof")
        .title_visible(true)
        .build();
    let mut skin = ClockSkin::with_metrics(&mut clock, WideMetrics);
    clock.resize_to(200.0, 200.0);
    skin.handle(clock.take_updates(), &clock);
    let title = &skin.scene().title;

    assert!(title.font_size < 24.0);
    assert!(title.bounds.width <= 120.0);
    assert!(title.font_size > 10.0 - 0.01);
}

#[test]
fn placement_change_reaches_the_scene() {
    let (mut clock, mut skin) = laid_out(200.0, 200.0);

    clock.set_translate_x(50.0);
    clock.set_scale_y(0.5);
    skin.handle(clock.take_updates(), &clock);

    assert_eq!(skin.scene().transform, clock.node_transform());
    let origin = skin.scene().transform * Point::new(0.0, 0.0);
    assert!(close(origin.x, 50.0));
    assert!(close(origin.y, 50.0));
}

#[test]
fn huge_face_with_long_title_still_lays_out() {
    let mut clock = ClockBuilder::new()
        .title("Hauptbahnhof Berlin")
        .title_visible(true)
        .build();
    let mut skin = ClockSkin::new(&mut clock);

    clock.resize_to(1e17, 1e17);
    skin.handle(clock.take_updates(), &clock);

    let title = &skin.scene().title;
    assert_eq!(skin.size(), 1e17);
    assert!(title.font_size > 0.0);
    assert!(title.bounds.width <= 1e17 * 0.6);
}
