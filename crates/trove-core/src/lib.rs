//! **trove-core**: core types for small grid games.
//!
//! Geometry primitives, an owned fixed-size grid, styled display glyphs,
//! input messages and the Model/Driver application loop shared by the
//! terminal driver and the game crate.

pub mod app;
pub mod geom;
pub mod glyph;
pub mod grid;
pub mod headless;
pub mod messages;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use geom::{Bounds, Direction, Position};
pub use glyph::{AttrMask, Color, Glyph, Style};
pub use grid::{Frame, FrameCell, Grid};
pub use headless::ScriptedDriver;
pub use messages::{Key, Msg};
