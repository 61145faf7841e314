use super::{Shape, ShapeKind};
use tracing::trace;

/// Shape that keeps `width == height` after every mutation.
///
/// Only one side is stored, so the invariant cannot be broken from inside
/// the type either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    side: i64,
}

impl Square {
    pub fn new(side: i64) -> Self {
        Self { side }
    }

    pub fn side(&self) -> i64 {
        self.side
    }
}

impl Shape for Square {
    fn width(&self) -> i64 {
        self.side
    }

    // Setting either axis moves both.
    fn set_width(&mut self, width: i64) {
        trace!(from = self.side, to = width, "square side via width");
        self.side = width;
    }

    fn height(&self) -> i64 {
        self.side
    }

    fn set_height(&mut self, height: i64) {
        trace!(from = self.side, to = height, "square side via height");
        self.side = height;
    }

    fn describe(&self) -> String {
        format!("Square with side {}", self.side)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}
