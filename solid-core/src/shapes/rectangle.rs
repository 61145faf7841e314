use super::{Shape, ShapeKind};
use tracing::trace;

/// Shape whose width and height move independently
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    width: i64,
    height: i64,
}

impl Rectangle {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn width(&self) -> i64 {
        self.width
    }

    fn set_width(&mut self, width: i64) {
        trace!(from = self.width, to = width, "rectangle width");
        self.width = width;
    }

    fn height(&self) -> i64 {
        self.height
    }

    fn set_height(&mut self, height: i64) {
        trace!(from = self.height, to = height, "rectangle height");
        self.height = height;
    }

    fn describe(&self) -> String {
        format!("Rectangle with width {} and height {}", self.width, self.height)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}
