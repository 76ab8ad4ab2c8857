//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "uigen",
    bin_name = "uigen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Declarative UI specification to SPA project",
    long_about = "Uigen turns a JSON UI specification into a complete \
                  single-page-application project: component classes, \
                  form markup, a routing table, and a navigation shell.",
    after_help = "EXAMPLES:\n\
        \x20 uigen generate app.json\n\
        \x20 uigen generate app.json --columns 3 --output ./build\n\
        \x20 uigen preview app.json\n\
        \x20 uigen completions bash > /usr/share/bash-completion/completions/uigen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project from a specification file.
    #[command(
        visible_alias = "g",
        about = "Generate a project from a specification",
        after_help = "EXAMPLES:\n\
            \x20 uigen generate app.json\n\
            \x20 uigen generate app.json --no-styled --columns 4\n\
            \x20 uigen generate app.json --dry-run"
    )]
    Generate(GenerateArgs),

    /// Print the artifacts a specification would produce.
    #[command(
        visible_alias = "p",
        about = "Preview generated artifacts without writing",
        after_help = "EXAMPLES:\n\
            \x20 uigen preview app.json\n\
            \x20 uigen preview app.json --show src/app/app-routing.module.ts"
    )]
    Preview(PreviewArgs),

    /// Write a sample specification file.
    #[command(
        about = "Write a sample specification",
        after_help = "EXAMPLES:\n\
            \x20 uigen init              # writes ./app.json\n\
            \x20 uigen init --path spec/my-app.json"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 uigen completions bash > ~/.local/share/bash-completion/completions/uigen\n\
            \x20 uigen completions zsh  > ~/.zfunc/_uigen\n\
            \x20 uigen completions fish > ~/.config/fish/completions/uigen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `uigen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the specification JSON document.
    #[arg(value_name = "SPEC", help = "Specification file (JSON)")]
    pub spec: PathBuf,

    /// Output directory the project is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Use the bootstrap grid for layout (default).
    #[arg(long = "styled", overrides_with = "no_styled", help = "Use the bootstrap grid")]
    pub styled: bool,

    /// Use plain custom CSS classes instead of bootstrap.
    #[arg(long = "no-styled", help = "Use custom CSS classes instead of bootstrap")]
    pub no_styled: bool,

    /// Fields per form row.
    #[arg(
        long = "columns",
        value_enum,
        value_name = "N",
        help = "Fields per form row"
    )]
    pub columns: Option<Columns>,

    /// Reject recoverable specification problems instead of papering over
    /// them.
    #[arg(long = "strict", help = "Treat recoverable spec problems as errors")]
    pub strict: bool,

    /// Generate artifacts without running ng/npm.
    #[arg(long = "skip-tools", help = "Skip external tool invocations")]
    pub skip_tools: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing project directory (destructive).
    #[arg(long = "force", help = "Overwrite existing project directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Supported form column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Columns {
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
    #[value(name = "4")]
    Four,
}

impl std::fmt::Display for Columns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Two => write!(f, "2"),
            Self::Three => write!(f, "3"),
            Self::Four => write!(f, "4"),
        }
    }
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `uigen preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Path to the specification JSON document.
    #[arg(value_name = "SPEC", help = "Specification file (JSON)")]
    pub spec: PathBuf,

    /// Print one artifact's full content instead of the listing.
    #[arg(
        long = "show",
        value_name = "PATH",
        help = "Print the content of one artifact"
    )]
    pub show: Option<PathBuf>,

    /// Use the bootstrap grid even when the config defaults it off.
    #[arg(long = "styled", overrides_with = "no_styled", help = "Use the bootstrap grid")]
    pub styled: bool,

    /// Use plain custom CSS classes instead of bootstrap.
    #[arg(long = "no-styled", help = "Use custom CSS classes instead of bootstrap")]
    pub no_styled: bool,

    /// Fields per form row.
    #[arg(long = "columns", value_enum, value_name = "N", help = "Fields per form row")]
    pub columns: Option<Columns>,

    /// Reject recoverable specification problems.
    #[arg(long = "strict", help = "Treat recoverable spec problems as errors")]
    pub strict: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `uigen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the sample specification.
    #[arg(
        long = "path",
        value_name = "FILE",
        default_value = "app.json",
        help = "Target path for the sample specification"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `uigen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "uigen", "generate", "app.json", "--columns", "3", "--output", "./build",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.spec, PathBuf::from("app.json"));
                assert_eq!(args.columns, Some(Columns::Three));
                assert_eq!(args.output, Some(PathBuf::from("./build")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["uigen", "g", "app.json"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn columns_display() {
        assert_eq!(Columns::Two.to_string(), "2");
        assert_eq!(Columns::Three.to_string(), "3");
        assert_eq!(Columns::Four.to_string(), "4");
    }

    #[test]
    fn invalid_column_count_is_rejected() {
        let result = Cli::try_parse_from(["uigen", "generate", "app.json", "--columns", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn styled_and_no_styled_last_one_wins() {
        let cli = Cli::parse_from(["uigen", "generate", "app.json", "--styled", "--no-styled"]);
        if let Commands::Generate(args) = cli.command {
            assert!(args.no_styled);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn preview_accepts_both_style_flags() {
        let cli = Cli::parse_from(["uigen", "preview", "app.json", "--styled"]);
        if let Commands::Preview(args) = cli.command {
            assert!(args.styled);
            assert!(!args.no_styled);
        } else {
            panic!("expected Preview command");
        }

        let cli = Cli::parse_from(["uigen", "preview", "app.json", "--no-styled"]);
        if let Commands::Preview(args) = cli.command {
            assert!(args.no_styled);
        } else {
            panic!("expected Preview command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["uigen", "--quiet", "--verbose", "preview", "a.json"]);
        assert!(result.is_err());
    }
}
