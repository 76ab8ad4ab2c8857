//! `uigen preview` — print the plan for a specification without writing.

use tracing::instrument;

use uigen_adapters::JsonSpecLoader;
use uigen_core::{
    application::{GenerationOptions, GenerationService, ports::SpecSource},
    domain::{GridColumns, StyleOptions, ValidationMode},
};

use crate::{
    cli::{Columns, PreviewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// List every tool invocation and artifact the specification would
/// produce, or print a single artifact's content with `--show`.
#[instrument(skip_all, fields(spec = %args.spec.display()))]
pub fn execute(
    args: PreviewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if !args.spec.exists() {
        return Err(CliError::SpecNotFound {
            path: args.spec.clone(),
        });
    }
    let spec = JsonSpecLoader::new().load(&args.spec)?;

    let columns = match args.columns {
        Some(Columns::Two) => GridColumns::Two,
        Some(Columns::Three) => GridColumns::Three,
        Some(Columns::Four) => GridColumns::Four,
        None => GridColumns::try_from(config.defaults.columns).map_err(|e| {
            CliError::ConfigError {
                message: e.to_string(),
                source: None,
            }
        })?,
    };
    // Same flag precedence as generate: explicit flags beat config.
    let styled_grid = if args.no_styled {
        false
    } else if args.styled {
        true
    } else {
        config.defaults.styled
    };
    let options = GenerationOptions {
        style: StyleOptions {
            styled_grid,
            columns,
        },
        mode: if args.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        },
        skip_tools: true,
    };

    // Plan only; the ports are never touched, so production adapters are
    // safe here.
    let service = GenerationService::new(
        Box::new(uigen_adapters::LocalSink::new()),
        Box::new(uigen_adapters::ShellRunner::new()),
    );
    let plan = service.plan(&spec, &options)?;

    if let Some(wanted) = &args.show {
        let content = plan
            .artifacts
            .get(wanted)
            .ok_or_else(|| CliError::ArtifactNotFound {
                path: wanted.clone(),
            })?;
        // Raw content on stdout so it can be piped or diffed.
        print!("{content}");
        return Ok(());
    }

    output.header(&format!(
        "{} ({} components)",
        spec.name,
        spec.components.len()
    ))?;
    output.print("")?;
    output.print("Tool invocations:")?;
    for invocation in &plan.invocations {
        output.print(&format!("  {invocation}"))?;
    }
    output.print("")?;
    output.print("Artifacts:")?;
    for artifact in plan.artifacts.iter() {
        output.print(&format!(
            "  {:<55} {:>6} B",
            artifact.path.display(),
            artifact.content.len()
        ))?;
    }

    Ok(())
}
