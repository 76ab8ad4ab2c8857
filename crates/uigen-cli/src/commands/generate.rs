//! Implementation of the `uigen generate` command.
//!
//! Responsibility: translate CLI arguments into generation options, call
//! the core generation service, and display results. No business logic
//! lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use uigen_adapters::{JsonSpecLoader, LocalSink, ShellRunner};
use uigen_core::{
    application::{GenerationOptions, GenerationService, ports::SpecSource},
    domain::{AppSpec, GridColumns, StyleOptions, ValidationMode},
};

use crate::{
    cli::{Columns, GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `uigen generate` command.
///
/// Dispatch sequence:
/// 1. Load and parse the specification file
/// 2. Resolve style options (flags > config > interactive prompt)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute generation via `GenerationService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(spec = %args.spec.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Load the specification
    if !args.spec.exists() {
        return Err(CliError::SpecNotFound {
            path: args.spec.clone(),
        });
    }
    let spec = JsonSpecLoader::new().load(&args.spec)?;

    // 2. Resolve options
    let style = resolve_style(&args, &global, &config)?;
    let options = GenerationOptions {
        style,
        mode: if args.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        },
        skip_tools: args.skip_tools,
    };
    let output_dir = resolve_output_dir(&args, &config);

    debug!(
        project = %spec.name,
        styled = style.styled_grid,
        columns = style.columns.count(),
        strict = args.strict,
        "Options resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&spec, &options, &output_dir, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.  This exits before the
    //    existing-directory handling so that `--dry-run --force` cannot
    //    remove anything.
    let project_path = output_dir.join(&spec.name);
    if args.dry_run {
        let service = GenerationService::new(Box::new(LocalSink::new()), Box::new(ShellRunner::new()));
        let plan = service.plan(&spec, &options)?;
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            spec.name,
            project_path.display(),
        ))?;
        for invocation in &plan.invocations {
            output.info(&format!("  tool: {invocation}"))?;
        }
        for artifact in plan.artifacts.iter() {
            output.info(&format!("  write: {}", artifact.path.display()))?;
        }
        return Ok(());
    }

    // 5. Check for existing directory
    if project_path.exists() {
        if !args.force {
            return Err(CliError::ProjectExists { path: project_path });
        }
        std::fs::remove_dir_all(&project_path).map_err(|e| CliError::IoError {
            message: format!("Failed to remove '{}'", project_path.display()),
            source: e,
        })?;
    }

    // 6. Create adapters and generate
    let service = GenerationService::new(Box::new(LocalSink::new()), Box::new(ShellRunner::new()));

    output.header(&format!("Generating '{}'...", spec.name))?;
    info!(project = %spec.name, path = %project_path.display(), "Generation started");

    let summary = service.generate(&spec, &options, &output_dir)?;

    info!(
        project = %spec.name,
        artifacts = summary.artifacts_written,
        "Generation completed"
    );

    // 7. Success + next steps
    output.success(&format!(
        "Project '{}' created ({} artifacts)!",
        spec.name, summary.artifacts_written,
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", spec.name))?;
        if args.skip_tools {
            output.print("  ng new was skipped; wire the artifacts into an existing app")?;
        } else {
            output.print("  npm install")?;
            output.print("  ng serve")?;
        }
    }

    Ok(())
}

// ── Option resolution ─────────────────────────────────────────────────────────

/// Resolve style options: explicit flags beat config, config beats the
/// interactive prompt, and the prompt only fires on a TTY.
fn resolve_style(
    args: &GenerateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<StyleOptions> {
    let styled_flag = if args.no_styled {
        Some(false)
    } else if args.styled {
        Some(true)
    } else {
        None
    };
    let columns_flag = args.columns.map(convert_columns);

    if styled_flag.is_none() && columns_flag.is_none() {
        if let Some(style) = prompt_style(global)? {
            return Ok(style);
        }
    }

    let config_columns = GridColumns::try_from(config.defaults.columns).map_err(|e| {
        CliError::ConfigError {
            message: e.to_string(),
            source: None,
        }
    })?;

    Ok(StyleOptions {
        styled_grid: styled_flag.unwrap_or(config.defaults.styled),
        columns: columns_flag.unwrap_or(config_columns),
    })
}

fn resolve_output_dir(args: &GenerateArgs, config: &AppConfig) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn convert_columns(columns: Columns) -> GridColumns {
    match columns {
        Columns::Two => GridColumns::Two,
        Columns::Three => GridColumns::Three,
        Columns::Four => GridColumns::Four,
    }
}

// ── Interactive prompting ─────────────────────────────────────────────────────

/// Ask for style options on a TTY when no flags were given.
///
/// Returns `Ok(None)` when prompting is unavailable (quiet mode, piped
/// stdin, or the `interactive` feature is disabled), in which case the
/// caller falls back to config defaults.
#[cfg(feature = "interactive")]
fn prompt_style(global: &GlobalArgs) -> CliResult<Option<StyleOptions>> {
    use std::io::IsTerminal as _;

    if global.quiet || !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let styled = dialoguer::Confirm::new()
        .with_prompt("Use the bootstrap grid?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("prompt failed: {e}"),
            source: None,
        })?;

    let choice = dialoguer::Select::new()
        .with_prompt("Fields per form row")
        .items(&["2", "3", "4"])
        .default(0)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("prompt failed: {e}"),
            source: None,
        })?;

    let columns = match choice {
        0 => GridColumns::Two,
        1 => GridColumns::Three,
        _ => GridColumns::Four,
    };

    Ok(Some(StyleOptions {
        styled_grid: styled,
        columns,
    }))
}

#[cfg(not(feature = "interactive"))]
fn prompt_style(_global: &GlobalArgs) -> CliResult<Option<StyleOptions>> {
    Ok(None)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    spec: &AppSpec,
    options: &GenerationOptions,
    output_dir: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:    {}", spec.name))?;
    out.print(&format!("  Components: {}", spec.components.len()))?;
    out.print(&format!(
        "  Layout:     {} ({} per row)",
        if options.style.styled_grid {
            "bootstrap grid"
        } else {
            "custom css"
        },
        options.style.columns.count(),
    ))?;
    out.print(&format!("  Location:   {}", output_dir.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
