//! Global flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] so verbosity, color, and config selection
//! behave identically on `generate`, `preview`, `init`, and `completions`.

use clap::Args;
use std::path::PathBuf;

/// Flags that apply regardless of subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity, counted.
    ///
    /// The default shows warnings only; `-v` adds generation progress,
    /// `-vv` per-phase diagnostics, `-vvv` everything.  `RUST_LOG`
    /// overrides the whole mapping when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress everything except errors.
    ///
    /// Also skips the confirmation prompt, the interactive style
    /// questions, and the next-steps block after generation.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI color codes.
    ///
    /// Also honoured through the `NO_COLOR` environment convention
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default location.
    ///
    /// A missing file named here is an error; a missing file at the
    /// default location silently falls back to built-in defaults.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Rendering style for listings and status lines.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How status output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colored status lines.
    Human,
    /// Undecorated text, stable enough to grep.
    Plain,
}
