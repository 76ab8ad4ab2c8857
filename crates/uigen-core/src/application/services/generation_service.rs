//! Generation service - the project assembly orchestrator.
//!
//! A linear state machine with no branching back:
//!
//! `Init → SkeletonRequested → ComponentsGenerated → RoutingGenerated →
//! ShellAssembled → Done`
//!
//! [`GenerationService::plan`] walks the phases as a pure composition of
//! the generators in `crate::generate` and yields the complete artifact
//! set plus the ordered external-tool invocations.
//! [`GenerationService::generate`] then executes the plan through the
//! ports: tools first (skeleton, then styling), artifact writes last.
//!
//! The contract is all-or-nothing: any fatal condition aborts the run
//! before artifacts reach the sink, and a failed write triggers a
//! best-effort rollback of the project root.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::{ArtifactSink, ToolRunner}},
    domain::{
        AppSpec, ArtifactSet, StyleOptions, ToolCwd, ToolInvocation, ValidationMode,
        validate_spec,
    },
    error::UigenResult,
    generate::{component, routing, shell},
};

/// Orchestration phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    SkeletonRequested,
    ComponentsGenerated,
    RoutingGenerated,
    ShellAssembled,
    Done,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::SkeletonRequested => "skeleton-requested",
            Self::ComponentsGenerated => "components-generated",
            Self::RoutingGenerated => "routing-generated",
            Self::ShellAssembled => "shell-assembled",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run-level options for one generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOptions {
    pub style: StyleOptions,
    pub mode: ValidationMode,
    /// Produce and write artifacts without running external tools.
    pub skip_tools: bool,
}

/// The plan produced by the terminal `Done` phase: every artifact keyed by
/// its project-relative path, plus the tool invocations to perform first.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub invocations: Vec<ToolInvocation>,
    pub artifacts: ArtifactSet,
}

/// What a completed [`GenerationService::generate`] run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub project_root: PathBuf,
    pub invocations_run: usize,
    pub artifacts_written: usize,
}

/// Main generation service.
pub struct GenerationService {
    sink: Box<dyn ArtifactSink>,
    tools: Box<dyn ToolRunner>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(sink: Box<dyn ArtifactSink>, tools: Box<dyn ToolRunner>) -> Self {
        Self { sink, tools }
    }

    /// Compose the full artifact set and tool invocations for `spec`.
    ///
    /// Pure with respect to the ports: nothing is executed or written.
    /// Running this twice on identical input yields identical output.
    #[instrument(skip_all, fields(project = %spec.name))]
    pub fn plan(&self, spec: &AppSpec, options: &GenerationOptions) -> UigenResult<GenerationOutput> {
        debug!(phase = %Phase::Init, "validating specification");
        validate_spec(spec, options.mode)?;

        debug!(phase = %Phase::SkeletonRequested, "collecting tool invocations");
        let invocations = tool_invocations(spec, &options.style);

        let mut artifacts = ArtifactSet::new();

        debug!(phase = %Phase::ComponentsGenerated, count = spec.components.len());
        for c in spec.components.iter() {
            let dir = PathBuf::from("src/app").join(c.route_path());
            let stem = c.route_path();
            artifacts.add(
                dir.join(format!("{stem}.component.ts")),
                component::component_class(c),
            );
            artifacts.add(
                dir.join(format!("{stem}.component.html")),
                component::component_markup(c, &options.style),
            );
            // Empty stub; per-component styling is left to the user.
            artifacts.add(dir.join(format!("{stem}.component.css")), "");
        }

        debug!(phase = %Phase::RoutingGenerated);
        artifacts.add("src/app/app-routing.module.ts", routing::routing_module(spec)?);
        artifacts.add("src/app/app.module.ts", routing::app_module(spec)?);

        debug!(phase = %Phase::ShellAssembled);
        artifacts.add(
            "src/app/app.component.html",
            shell::shell_page(spec, &options.style),
        );
        if options.style.styled_grid {
            // The shell references bootstrap classes; the stylesheet import
            // only works once the styling install invocation has run.
            artifacts.add(
                "src/styles.css",
                "@import \"bootstrap/dist/css/bootstrap.min.css\";\n",
            );
        }

        artifacts.validate()?;
        debug!(phase = %Phase::Done, artifacts = artifacts.len());

        Ok(GenerationOutput {
            invocations,
            artifacts,
        })
    }

    /// Plan and execute: run tools in order, then write every artifact.
    #[instrument(skip_all, fields(project = %spec.name, output = %output_root.display()))]
    pub fn generate(
        &self,
        spec: &AppSpec,
        options: &GenerationOptions,
        output_root: &Path,
    ) -> UigenResult<GenerationSummary> {
        let output = self.plan(spec, options)?;
        let project_root = output_root.join(&spec.name);

        if self.sink.exists(&project_root) {
            return Err(ApplicationError::ProjectExists {
                path: project_root,
            }
            .into());
        }

        // Tool invocations run strictly before artifact writes; a failure
        // here is fatal and nothing has been written yet.
        let mut invocations_run = 0;
        if options.skip_tools {
            info!("skipping external tool invocations");
        } else {
            for invocation in &output.invocations {
                info!(command = %invocation, "running external tool");
                self.tools.run(invocation, output_root, &project_root)?;
                invocations_run += 1;
            }
        }

        match self.write_artifacts(&project_root, &output.artifacts) {
            Ok(()) => {
                info!(
                    artifacts = output.artifacts.len(),
                    "generation completed successfully"
                );
                Ok(GenerationSummary {
                    project_root,
                    invocations_run,
                    artifacts_written: output.artifacts.len(),
                })
            }
            Err(e) => {
                warn!("artifact write failed, attempting rollback");
                self.rollback(&project_root);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write every artifact under the project root (full overwrite).
    fn write_artifacts(&self, project_root: &Path, artifacts: &ArtifactSet) -> UigenResult<()> {
        self.sink.create_dir_all(project_root)?;

        for artifact in artifacts.iter() {
            let path = project_root.join(&artifact.path);
            if let Some(parent) = path.parent() {
                self.sink.create_dir_all(parent)?;
            }
            self.sink.write_file(&path, &artifact.content)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.sink.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}

/// The ordered external-tool invocations for one run: skeleton creation
/// first, styling-package installation second.
fn tool_invocations(spec: &AppSpec, style: &StyleOptions) -> Vec<ToolInvocation> {
    let mut invocations = vec![ToolInvocation::new(
        "ng",
        &["new", &spec.name, "--routing", "--skip-install"],
        ToolCwd::OutputRoot,
    )];
    if style.styled_grid {
        invocations.push(ToolInvocation::new(
            "npm",
            &["install", "bootstrap"],
            ToolCwd::ProjectRoot,
        ));
    }
    invocations
}

// ── tests ─────────────────────────────────────────────────────────────────────
