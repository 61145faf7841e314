use super::Shape;
use crate::output::OutputSink;

/// Report one line describing the shape's current state
pub fn draw(shape: &dyn Shape, sink: &mut dyn OutputSink) {
    sink.report(&format!("Drawing {} (area {})", shape.describe(), shape.area()));
}
