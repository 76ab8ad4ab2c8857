//! Terminal output for command status and listings.
//!
//! Every user-facing status line goes through [`OutputManager`] so quiet
//! mode and color resolution happen in exactly one place.  Errors do not:
//! failures surface as `CliError` and are formatted on stderr in `main`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    quiet: bool,
    /// Color on status lines; off for plain/piped output.
    decorated: bool,
    term: Term,
}

impl OutputManager {
    /// Resolve flags and config into a concrete output policy.
    ///
    /// `Auto` decorates only when stdout is a terminal; `--no-color` and
    /// the config's `output.no_color` both strip color from any format.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let human = match args.output_format {
            OutputFormat::Human => true,
            OutputFormat::Plain => false,
            OutputFormat::Auto => io::stdout().is_terminal(),
        };

        Self {
            quiet: args.quiet,
            decorated: human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓`-prefixed success line.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.decorated {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}")
        };
        self.term.write_line(&line)
    }

    /// `⚠`-prefixed warning line.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.decorated {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        } else {
            format!("\u{26a0} {msg}")
        };
        self.term.write_line(&line)
    }

    /// `ℹ`-prefixed informational line.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.decorated {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        } else {
            format!("\u{2139} {msg}")
        };
        self.term.write_line(&line)
    }

    /// Section header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.decorated {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
