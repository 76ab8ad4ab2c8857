//! `uigen init` — write a sample specification file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// A small but representative specification: two components, required
/// and pattern validation, a dropdown, and a footer.
const SAMPLE_SPEC: &str = r#"{
  "name": "my-angular-app",
  "components": [
    {
      "name": "Register",
      "fields": [
        { "name": "username", "type": "textbox", "required": true },
        {
          "name": "email",
          "type": "textbox",
          "required": true,
          "pattern": "^\\S+@\\S+$",
          "message": "Enter a valid email address"
        },
        {
          "name": "country",
          "type": "dropdown",
          "options": ["USA", "Canada", "India"]
        },
        { "name": "subscribe", "type": "checkbox" }
      ],
      "buttons": ["Register"]
    },
    {
      "name": "About",
      "menu_label": "About Us"
    }
  ],
  "menu": "horizontal",
  "footer": "All rights reserved"
}
"#;

/// Write the sample specification to the requested path.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Bail early if the file already exists and --force was not given.
    if args.path.exists() && !args.force {
        output.warning(&format!(
            "Specification already exists at {}  (use --force to overwrite)",
            args.path.display(),
        ))?;
        return Ok(());
    }

    if let Some(parent) = args.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&args.path, SAMPLE_SPEC).map_err(|e| CliError::IoError {
        message: format!("Failed to write '{}'", args.path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Sample specification written to {}",
        args.path.display(),
    ))?;
    output.print(&format!("  uigen generate {}", args.path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigen_adapters::JsonSpecLoader;

    #[test]
    fn sample_spec_parses() {
        let spec = JsonSpecLoader::new().parse(SAMPLE_SPEC).unwrap();
        assert_eq!(spec.name, "my-angular-app");
        assert_eq!(spec.components.len(), 2);
    }
}
