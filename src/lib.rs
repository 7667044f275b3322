//! Clockface - a skinnable analog clock.
//!
//! The crate is split along the data flow of a running clock:
//!
//! - [`clock`] holds the control state and records what changed
//! - [`builder`] assembles a clock from a skin preset plus overrides
//! - [`skin`] turns a clock into a [`skin::FaceScene`] of shapes and texts
//! - [`ticker`] drives a clock from wall-clock time
//! - [`config`] loads builder settings from TOML files
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clockface::{builder::ClockBuilder, clock::ClockSkinType, skin::ClockSkin};
//!
//! let mut clock = ClockBuilder::new()
//!     .skin_type(ClockSkinType::Pear)
//!     .title("Lisbon")
//!     .build();
//! let mut skin = ClockSkin::new(&mut clock);
//!
//! clock.resize_to(300.0, 300.0);
//! skin.handle(clock.take_updates(), &clock);
//! println!("{:?}", skin.scene().hour_needle);
//! ```

/// Preset-aware clock construction.
pub mod builder;

/// Clock control state and its value types.
pub mod clock;

/// TOML settings files with imports.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Analog face rendering.
pub mod skin;

/// Wall-clock time source.
pub mod ticker;

/// Logging setup for the binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{ClockError, Result};
