//! Mutate-then-verify transform
//!
//! Sets height, then width, then reads both back. A caller written
//! against a rectangle assumes the second write leaves the first alone;
//! a square breaks that assumption whenever the two targets differ.

use super::{Dimension, Result, Shape, ShapeError};
use tracing::{debug, warn};

/// Resize `shape` and check that both requested dimensions stuck.
///
/// The shape keeps whatever state the two writes produced, even when a
/// [`ShapeError::ConsistencyViolation`] is returned.
pub fn resize(shape: &mut dyn Shape, new_height: i64, new_width: i64) -> Result<()> {
    debug!(kind = %shape.kind(), new_height, new_width, "resizing shape");

    shape.set_height(new_height);
    shape.set_width(new_width);

    verify(Dimension::Height, new_height, shape.height())?;
    verify(Dimension::Width, new_width, shape.width())?;

    debug!(kind = %shape.kind(), width = shape.width(), height = shape.height(), "resize consistent");
    Ok(())
}

fn verify(dimension: Dimension, requested: i64, actual: i64) -> Result<()> {
    if requested == actual {
        return Ok(());
    }
    warn!(%dimension, requested, actual, "read-back does not match request");
    Err(ShapeError::ConsistencyViolation { dimension, requested, actual })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Square};

    #[test]
    fn test_rectangle_resize_succeeds() {
        let mut rect = Rectangle::new(20, 10);
        resize(&mut rect, 5, 10).unwrap();
        assert_eq!((rect.width(), rect.height()), (10, 5));
    }

    #[test]
    fn test_square_resize_with_unequal_targets_fails() {
        let mut square = Square::new(5);
        let err = resize(&mut square, 10, 20).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ConsistencyViolation {
                dimension: Dimension::Height,
                requested: 10,
                actual: 20,
            }
        );
        // No rollback: the last write wins.
        assert_eq!(square.side(), 20);
    }

    #[test]
    fn test_square_resize_with_equal_targets_succeeds() {
        let mut square = Square::new(5);
        resize(&mut square, 9, 9).unwrap();
        assert_eq!(square.side(), 9);
    }

    #[test]
    fn test_violation_message() {
        let err = ShapeError::ConsistencyViolation {
            dimension: Dimension::Height,
            requested: 10,
            actual: 20,
        };
        assert_eq!(err.to_string(), "Consistency violation: requested height 10, read back 20");
    }
}
