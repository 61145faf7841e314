//! Shape capability set and its two variants
//!
//! `Rectangle` and `Square` implement [`Shape`] independently. Neither is
//! derived from the other: a square keeps `width == height` after every
//! mutation, a rectangle lets both axes move freely. Callers that assume
//! independent axes (see [`resize`]) observe the difference.

pub mod draw;
pub mod rectangle;
pub mod square;
pub mod transform;


pub use draw::draw;
pub use rectangle::Rectangle;
pub use square::Square;
pub use transform::resize;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Consistency violation: requested {dimension} {requested}, read back {actual}")]
    ConsistencyViolation { dimension: Dimension, requested: i64, actual: i64 },
}

pub type Result<T> = std::result::Result<T, ShapeError>;

/// Axis named in a consistency violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

/// Concrete variant behind a `dyn Shape`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Square,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Square => write!(f, "square"),
        }
    }
}

/// Width/height accessors and mutators shared by every shape.
///
/// Inputs are unconstrained: zero and negative dimensions are accepted.
pub trait Shape: fmt::Debug {
    fn width(&self) -> i64;
    fn set_width(&mut self, width: i64);
    fn height(&self) -> i64;
    fn set_height(&mut self, height: i64);

    /// Human-readable summary of the current dimensions
    fn describe(&self) -> String;

    fn kind(&self) -> ShapeKind;

    fn area(&self) -> i64 {
        self.width().wrapping_mul(self.height())
    }
}

/// Serializable description of a shape, used by scenarios and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle { width: i64, height: i64 },
    Square { side: i64 },
}

impl ShapeSpec {
    pub fn build(&self) -> Box<dyn Shape> {
        match *self {
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)),
            ShapeSpec::Square { side } => Box::new(Square::new(side)),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeSpec::Square { .. } => ShapeKind::Square,
        }
    }
}
