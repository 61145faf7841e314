use crate::cli::app::DescribeArgs;
use anyhow::Result;
use solid_core::{ConsoleSink, OutputSink, ShapeSpec, draw};

pub fn execute(args: DescribeArgs) -> Result<()> {
    describe(args, &mut ConsoleSink);
    Ok(())
}

fn describe(args: DescribeArgs, sink: &mut dyn OutputSink) {
    let shape = ShapeSpec::from(args.shape).build();
    draw(shape.as_ref(), sink);
}
