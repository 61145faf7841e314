//! Core functionality for solid
//!
//! This crate contains the shape capability set, the Rectangle and Square
//! variants, the consistency-checking transform and the scenario runner
//! used to show where substituting one variant for the other breaks a
//! caller.

pub mod config;
pub mod output;
pub mod scenario;
pub mod shapes;

pub use config::{Config, ConfigError};
pub use output::{BufferSink, ConsoleSink, OutputSink};
pub use scenario::{Outcome, Scenario, ScenarioReport};
pub use shapes::{
    Dimension, Rectangle, Shape, ShapeError, ShapeKind, ShapeSpec, Square, draw, resize,
};
