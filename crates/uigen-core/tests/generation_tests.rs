//! End-to-end tests for the generation service, driven through in-test
//! port implementations so the engine is exercised exactly as adapters do.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uigen_core::{
    application::{GenerationOptions, GenerationService, ports::{ArtifactSink, ToolRunner}},
    domain::{
        AppSpec, ComponentSpec, FieldSpec, FieldType, MenuOrientation, StyleOptions,
        ToolInvocation, ValidationMode,
    },
    error::{UigenError, UigenResult},
};

// ── Test ports ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TestSink {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<HashSet<PathBuf>>,
}

impl TestSink {
    fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl ArtifactSink for TestSink {
    fn create_dir_all(&self, path: &Path) -> UigenResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> UigenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> UigenResult<()> {
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        self.dirs.lock().unwrap().retain(|p| !p.starts_with(path));
        Ok(())
    }
}

#[derive(Default)]
struct TestRunner {
    commands: Mutex<Vec<String>>,
    fail: bool,
}

impl ToolRunner for TestRunner {
    fn run(
        &self,
        invocation: &ToolInvocation,
        _output_root: &Path,
        _project_root: &Path,
    ) -> UigenResult<()> {
        if self.fail {
            return Err(uigen_core::application::ApplicationError::ToolFailed {
                command: invocation.command_line(),
                reason: "simulated failure".into(),
            }
            .into());
        }
        self.commands.lock().unwrap().push(invocation.command_line());
        Ok(())
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// The worked example: project "my-angular-app", components Register and
/// About, horizontal menu, footer present.
fn example_spec() -> AppSpec {
    let mut email = FieldSpec::new("email", FieldType::Textbox);
    email.required = true;
    email.pattern = Some("^\\S+@\\S+$".into());

    let mut country = FieldSpec::new("country", FieldType::Dropdown);
    country.options = vec!["USA".into(), "Canada".into(), "India".into()];

    AppSpec {
        name: "my-angular-app".into(),
        components: vec![
            ComponentSpec {
                name: "Register".into(),
                menu_label: None,
                fields: vec![email, country],
                buttons: vec!["Register".into()],
            },
            ComponentSpec {
                name: "About".into(),
                menu_label: Some("About Us".into()),
                fields: vec![],
                buttons: vec![],
            },
        ],
        menu: MenuOrientation::Horizontal,
        footer: Some("All rights reserved".into()),
    }
}

fn service_with(fail_tools: bool) -> (GenerationService, &'static TestSink, &'static TestRunner) {
    // Leak the test ports so the boxed trait objects and the assertions can
    // share them without lifetime gymnastics.
    let sink: &'static TestSink = Box::leak(Box::new(TestSink::default()));
    let runner: &'static TestRunner = Box::leak(Box::new(TestRunner {
        fail: fail_tools,
        ..Default::default()
    }));

    struct SinkRef(&'static TestSink);
    impl ArtifactSink for SinkRef {
        fn create_dir_all(&self, path: &Path) -> UigenResult<()> {
            self.0.create_dir_all(path)
        }
        fn write_file(&self, path: &Path, content: &str) -> UigenResult<()> {
            self.0.write_file(path, content)
        }
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }
        fn remove_dir_all(&self, path: &Path) -> UigenResult<()> {
            self.0.remove_dir_all(path)
        }
    }

    struct RunnerRef(&'static TestRunner);
    impl ToolRunner for RunnerRef {
        fn run(
            &self,
            invocation: &ToolInvocation,
            output_root: &Path,
            project_root: &Path,
        ) -> UigenResult<()> {
            self.0.run(invocation, output_root, project_root)
        }
    }

    let service = GenerationService::new(Box::new(SinkRef(sink)), Box::new(RunnerRef(runner)));
    (service, sink, runner)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn plan_produces_the_complete_artifact_set() {
    let (service, _, _) = service_with(false);
    let output = service
        .plan(&example_spec(), &GenerationOptions::default())
        .unwrap();

    // 3 per component + routing + app module + shell + styles.css
    assert_eq!(output.artifacts.len(), 2 * 3 + 4);
    assert!(output.artifacts.get("src/app/register/register.component.ts").is_some());
    assert!(output.artifacts.get("src/app/register/register.component.html").is_some());
    assert!(output.artifacts.get("src/app/register/register.component.css").is_some());
    assert!(output.artifacts.get("src/app/about/about.component.ts").is_some());
    assert!(output.artifacts.get("src/app/app-routing.module.ts").is_some());
    assert!(output.artifacts.get("src/app/app.module.ts").is_some());
    assert!(output.artifacts.get("src/app/app.component.html").is_some());
    assert!(output.artifacts.get("src/styles.css").is_some());
}

#[test]
fn plan_is_deterministic() {
    let (service, _, _) = service_with(false);
    let options = GenerationOptions::default();
    let first = service.plan(&example_spec(), &options).unwrap();
    let second = service.plan(&example_spec(), &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shell_has_two_links_an_outlet_and_a_footer() {
    let (service, _, _) = service_with(false);
    let output = service
        .plan(&example_spec(), &GenerationOptions::default())
        .unwrap();

    let shell = output.artifacts.get("src/app/app.component.html").unwrap();
    assert_eq!(shell.matches("<a ").count(), 2);
    assert!(shell.contains("<router-outlet></router-outlet>"));
    assert!(shell.contains("<footer class=\"footer\">All rights reserved</footer>"));

    let routing = output.artifacts.get("src/app/app-routing.module.ts").unwrap();
    assert!(routing.contains("redirectTo: '/register'"));
}

#[test]
fn generate_writes_artifacts_under_the_project_root() {
    let (service, sink, runner) = service_with(false);
    let summary = service
        .generate(
            &example_spec(),
            &GenerationOptions::default(),
            Path::new("/out"),
        )
        .unwrap();

    assert_eq!(summary.project_root, PathBuf::from("/out/my-angular-app"));
    assert_eq!(summary.invocations_run, 2);
    assert_eq!(summary.artifacts_written, sink.file_count());

    let ts = sink
        .file("/out/my-angular-app/src/app/register/register.component.ts")
        .unwrap();
    assert!(ts.contains("export class RegisterComponent"));

    let commands = runner.commands.lock().unwrap();
    assert_eq!(
        *commands,
        vec![
            "ng new my-angular-app --routing --skip-install".to_string(),
            "npm install bootstrap".to_string(),
        ]
    );
}

#[test]
fn tool_failure_aborts_before_any_artifact_is_written() {
    let (service, sink, _) = service_with(true);
    let result = service.generate(
        &example_spec(),
        &GenerationOptions::default(),
        Path::new("/out"),
    );

    assert!(matches!(result, Err(UigenError::Application(_))));
    assert_eq!(sink.file_count(), 0);
}

#[test]
fn skip_tools_still_writes_all_artifacts() {
    let (service, sink, runner) = service_with(true); // would fail if invoked
    let options = GenerationOptions {
        skip_tools: true,
        ..Default::default()
    };
    let summary = service
        .generate(&example_spec(), &options, Path::new("/out"))
        .unwrap();

    assert_eq!(summary.invocations_run, 0);
    assert!(runner.commands.lock().unwrap().is_empty());
    assert!(sink.file_count() > 0);
    assert_eq!(summary.artifacts_written, sink.file_count());
}

#[test]
fn existing_project_root_is_rejected() {
    let (service, sink, _) = service_with(false);
    sink.create_dir_all(Path::new("/out/my-angular-app")).unwrap();

    let result = service.generate(
        &example_spec(),
        &GenerationOptions::default(),
        Path::new("/out"),
    );
    assert!(matches!(result, Err(UigenError::Application(_))));
}

#[test]
fn empty_specification_aborts_with_no_output() {
    let (service, sink, _) = service_with(false);
    let spec = AppSpec {
        name: "empty".into(),
        components: vec![],
        menu: MenuOrientation::Horizontal,
        footer: None,
    };

    let result = service.generate(&spec, &GenerationOptions::default(), Path::new("/out"));
    assert!(matches!(result, Err(UigenError::Domain(_))));
    assert_eq!(sink.file_count(), 0);
}

#[test]
fn strict_mode_rejects_colliding_components() {
    let (service, _, _) = service_with(false);
    let mut spec = example_spec();
    spec.components.push(ComponentSpec {
        name: "REGISTER".into(),
        menu_label: None,
        fields: vec![],
        buttons: vec![],
    });

    let permissive = GenerationOptions::default();
    assert!(service.plan(&spec, &permissive).is_ok());

    let strict = GenerationOptions {
        mode: ValidationMode::Strict,
        ..Default::default()
    };
    assert!(service.plan(&spec, &strict).is_err());
}

#[test]
fn unstyled_plan_has_no_styles_import_and_one_invocation() {
    let (service, _, _) = service_with(false);
    let options = GenerationOptions {
        style: StyleOptions {
            styled_grid: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let output = service.plan(&example_spec(), &options).unwrap();
    assert_eq!(output.invocations.len(), 1);
    assert!(output.artifacts.get("src/styles.css").is_none());
}
