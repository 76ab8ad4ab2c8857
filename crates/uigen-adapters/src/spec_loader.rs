//! Specification loading from JSON documents.

use std::path::Path;

use tracing::debug;

use uigen_core::{
    application::{ApplicationError, ports::SpecSource},
    domain::AppSpec,
    error::UigenResult,
};

/// Loads an [`AppSpec`] from a JSON file via serde_json.
///
/// Unknown field types in the document are folded to textboxes during
/// deserialization, so a loaded specification is always renderable.
#[derive(Debug, Clone, Copy)]
pub struct JsonSpecLoader;

impl JsonSpecLoader {
    /// Create a new JSON specification loader.
    pub fn new() -> Self {
        Self
    }

    /// Parse a specification from an in-memory JSON string.
    pub fn parse(&self, source: &str) -> UigenResult<AppSpec> {
        serde_json::from_str(source).map_err(|e| {
            ApplicationError::SpecLoadFailed {
                path: "<inline>".into(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for JsonSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecSource for JsonSpecLoader {
    fn load(&self, path: &Path) -> UigenResult<AppSpec> {
        debug!(path = %path.display(), "loading specification");

        let source =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::SpecLoadFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to read: {}", e),
            })?;

        serde_json::from_str(&source).map_err(|e| {
            ApplicationError::SpecLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uigen_core::domain::{FieldType, MenuOrientation};

    const EXAMPLE: &str = r#"{
        "name": "my-angular-app",
        "components": [
            {
                "name": "Register",
                "fields": [
                    { "name": "email", "type": "textbox", "required": true },
                    { "name": "country", "type": "dropdown",
                      "options": ["USA", "Canada", "India"] }
                ],
                "buttons": ["Register"]
            },
            { "name": "About", "menu_label": "About Us" }
        ],
        "menu": "horizontal",
        "footer": "All rights reserved"
    }"#;

    #[test]
    fn parses_the_worked_example() {
        let spec = JsonSpecLoader::new().parse(EXAMPLE).unwrap();
        assert_eq!(spec.name, "my-angular-app");
        assert_eq!(spec.components.len(), 2);
        assert_eq!(spec.menu, MenuOrientation::Horizontal);
        assert_eq!(spec.footer.as_deref(), Some("All rights reserved"));

        let register = &spec.components[0];
        assert_eq!(register.fields.len(), 2);
        assert!(register.fields[0].required);
        assert_eq!(register.fields[1].field_type, FieldType::Dropdown);
        assert_eq!(register.fields[1].options.len(), 3);
    }

    #[test]
    fn unknown_field_type_becomes_a_textbox() {
        let spec = JsonSpecLoader::new()
            .parse(
                r#"{
                    "name": "app",
                    "components": [
                        { "name": "Home",
                          "fields": [{ "name": "x", "type": "slider" }] }
                    ]
                }"#,
            )
            .unwrap();
        assert_eq!(spec.components[0].fields[0].field_type, FieldType::Textbox);
    }

    #[test]
    fn malformed_json_is_a_load_failure() {
        let result = JsonSpecLoader::new().parse("{ not json");
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, EXAMPLE).unwrap();

        let spec = JsonSpecLoader::new().load(&path).unwrap();
        assert_eq!(spec.name, "my-angular-app");
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let result = JsonSpecLoader::new().load(Path::new("/no/such/spec.json"));
        assert!(result.is_err());
    }
}
