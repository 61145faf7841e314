use crate::cli::app::ResizeArgs;
use anyhow::{Context, Result};
use solid_core::{ConsoleSink, OutputSink, ShapeSpec, draw, resize};

/// Resize the shape; a consistency violation becomes the command's error
pub fn execute(args: ResizeArgs) -> Result<()> {
    let spec = ShapeSpec::from(args.shape);
    let mut shape = spec.build();
    let mut sink = ConsoleSink;

    draw(shape.as_ref(), &mut sink);
    let result = resize(shape.as_mut(), args.new_height, args.new_width);
    draw(shape.as_ref(), &mut sink);

    result.with_context(|| {
        format!(
            "Resizing {} to height {} and width {} failed",
            spec.kind(),
            args.new_height,
            args.new_width
        )
    })?;

    sink.report("Resize consistent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::app::ShapeArgs;

    #[test]
    fn test_square_with_unequal_targets_fails() {
        let args = ResizeArgs { new_height: 10, new_width: 20, shape: ShapeArgs::Square { side: 5 } };
        let err = execute(args).unwrap_err();

        let chain = format!("{:#}", err);
        assert!(chain.contains("Resizing square to height 10 and width 20 failed"), "{chain}");
        assert!(chain.contains("Consistency violation"), "{chain}");
    }

    #[test]
    fn test_square_with_equal_targets_succeeds() {
        let args = ResizeArgs { new_height: 7, new_width: 7, shape: ShapeArgs::Square { side: 5 } };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_rectangle_succeeds() {
        let args = ResizeArgs {
            new_height: 10,
            new_width: 20,
            shape: ShapeArgs::Rectangle { width: 20, height: 10 },
        };
        assert!(execute(args).is_ok());
    }
}
