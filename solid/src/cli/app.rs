use clap::{Args, Parser, Subcommand};
use solid_core::ShapeSpec;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solid",
    version,
    about = "Solid - Watch a square break a caller written for rectangles",
    long_about = "Solid builds rectangles and squares behind one shape interface, resizes them with a mutate-then-verify transform and reports where substituting one variant for the other violates the caller's expectations."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a shape
    #[command(about = "Draw a shape and report its dimensions")]
    Describe(DescribeArgs),

    /// Resize a shape and verify the result
    #[command(about = "Set height then width on a shape and check both stuck")]
    Resize(ResizeArgs),

    /// Run the configured scenarios
    #[command(about = "Run every configured scenario and compare against its expected outcome")]
    Demo,

    /// Write the default configuration
    #[command(about = "Write the built-in scenarios to a TOML configuration file")]
    Init(InitArgs),
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ShapeArgs {
    /// Rectangle with independent width and height
    Rectangle {
        #[arg(long, allow_hyphen_values = true)]
        width: i64,
        #[arg(long, allow_hyphen_values = true)]
        height: i64,
    },

    /// Square whose sides always match
    Square {
        #[arg(long, allow_hyphen_values = true)]
        side: i64,
    },
}

impl From<ShapeArgs> for ShapeSpec {
    fn from(args: ShapeArgs) -> Self {
        match args {
            ShapeArgs::Rectangle { width, height } => ShapeSpec::Rectangle { width, height },
            ShapeArgs::Square { side } => ShapeSpec::Square { side },
        }
    }
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[command(subcommand)]
    pub shape: ShapeArgs,
}

#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Height to set first
    #[arg(long, allow_hyphen_values = true)]
    pub new_height: i64,

    /// Width to set second
    #[arg(long, allow_hyphen_values = true)]
    pub new_width: i64,

    #[command(subcommand)]
    pub shape: ShapeArgs,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(default_value = "solid.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resize_square() {
        let cli = Cli::parse_from([
            "solid", "resize", "--new-height", "10", "--new-width", "20", "square", "--side", "5",
        ]);
        let Commands::Resize(args) = cli.command else {
            panic!("expected resize command");
        };
        assert_eq!((args.new_height, args.new_width), (10, 20));
        assert_eq!(ShapeSpec::from(args.shape), ShapeSpec::Square { side: 5 });
    }

    #[test]
    fn test_parse_negative_dimensions() {
        let cli = Cli::parse_from([
            "solid", "-vv", "describe", "rectangle", "--width", "-3", "--height", "4",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Describe(args) = cli.command else {
            panic!("expected describe command");
        };
        assert_eq!(ShapeSpec::from(args.shape), ShapeSpec::Rectangle { width: -3, height: 4 });
    }
}
