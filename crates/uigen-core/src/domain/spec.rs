//! The specification model: project, components, fields, style options.
//!
//! # Design
//!
//! These are plain data types mirroring the specification document. They
//! hold no generation logic; generators live in `crate::generate`. The
//! only behaviour here is identifier derivation (delegating to
//! `naming`) and the lenient field-type parser.
//!
//! # Adding New Field Types
//!
//! 1. Add the enum variant here and its `as_str` / `parse_lenient` arms
//! 2. Add the rendering arm in `generate::markup`
//! 3. Done — the exhaustive match in the renderer enforces coverage

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::naming;

// ── AppSpec ───────────────────────────────────────────────────────────────────

/// Root specification entity.
///
/// Invariant: at least one component must exist — the first component is
/// the default and wildcard redirect target. Enforced by
/// [`crate::domain::validation::validate_spec`] before any generation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Project name; display name and root path segment.
    pub name: String,

    /// Ordered components. Order defines the default route and the route
    /// array order.
    pub components: Vec<ComponentSpec>,

    /// Menu orientation for the shell navigation.
    #[serde(default)]
    pub menu: MenuOrientation,

    /// Footer text. `None` means the shell carries no footer element.
    #[serde(default)]
    pub footer: Option<String>,
}

impl AppSpec {
    /// The route path the empty-path and wildcard routes redirect to.
    ///
    /// Returns an error on an empty component list; routing generation is
    /// ill-defined without a default target.
    pub fn default_route(&self) -> Result<String, DomainError> {
        self.components
            .first()
            .map(|c| c.route_path())
            .ok_or(DomainError::EmptySpecification)
    }
}

// ── ComponentSpec ─────────────────────────────────────────────────────────────

/// One UI component: name, fields, and action buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Identifier-safe name; source of the class name, selector, route
    /// path, and directory name.
    pub name: String,

    /// Display name for the navigation menu; falls back to `name`.
    #[serde(default)]
    pub menu_label: Option<String>,

    /// Ordered form fields.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// Ordered button labels. Empty means a single default "Submit".
    #[serde(default)]
    pub buttons: Vec<String>,
}

impl ComponentSpec {
    /// Generated class name, e.g. `"RegisterComponent"`.
    pub fn class_name(&self) -> String {
        format!("{}Component", naming::class_case(&self.name))
    }

    /// Route path segment and directory name, e.g. `"register"`.
    pub fn route_path(&self) -> String {
        naming::path_case(&self.name)
    }

    /// Element selector, e.g. `"app-register"`.
    pub fn selector(&self) -> String {
        format!("app-{}", naming::path_case(&self.name))
    }

    /// Menu link label: explicit display name, else the raw name.
    pub fn menu_label(&self) -> &str {
        self.menu_label.as_deref().unwrap_or(&self.name)
    }
}

// ── FieldSpec ─────────────────────────────────────────────────────────────────

/// One form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Source of the label, input id/name, and error-message text.
    pub name: String,

    /// Control type; unrecognized document values fall back to `Textbox`.
    #[serde(default, rename = "type")]
    pub field_type: FieldType,

    /// Flat required flag. Superseded by `validation` when that is present.
    #[serde(default)]
    pub required: bool,

    /// Flat pattern constraint. Superseded by `validation` when present.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Option strings for `dropdown` / `checkboxlist` / `radiobuttonlist`;
    /// ignored by the other control types.
    #[serde(default)]
    pub options: Vec<String>,

    /// Explicit validation message, overriding the derived defaults.
    #[serde(default)]
    pub message: Option<String>,

    /// Structured validation bundle. Takes precedence over the flat
    /// `required` / `pattern` attributes when present.
    #[serde(default)]
    pub validation: Option<ValidationSpec>,
}

impl FieldSpec {
    /// A minimal field of the given type, used heavily in tests.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            pattern: None,
            options: Vec::new(),
            message: None,
            validation: None,
        }
    }

    /// Human-readable label derived from the field name.
    pub fn label(&self) -> String {
        naming::label_case(&self.name)
    }
}

/// Structured validation bundle attached to a field.
///
/// Invariant: `range` is a two-element ascending numeric pair. Not
/// enforced here; permissive mode tolerates descending pairs, strict mode
/// rejects them in `validate_spec`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationSpec {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub pattern: Option<String>,
    /// Ascending `[min, max]` numeric range.
    #[serde(default)]
    pub range: Option<(f64, f64)>,
    /// Initial value seeded into the generated form control.
    #[serde(default)]
    pub default: Option<String>,
}

// ── FieldType ─────────────────────────────────────────────────────────────────

/// Closed enumeration of supported control types.
///
/// The renderer matches exhaustively on this enum; there is deliberately
/// no catch-all arm. Unknown document strings are folded to `Textbox` at
/// the parse boundary instead, so "silently falls through to default"
/// bugs cannot hide inside the dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Textbox,
    Textarea,
    Dropdown,
    Checkbox,
    Checkboxlist,
    Radiobutton,
    Radiobuttonlist,
}

impl FieldType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Textbox => "textbox",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::Checkboxlist => "checkboxlist",
            Self::Radiobutton => "radiobutton",
            Self::Radiobuttonlist => "radiobuttonlist",
        }
    }

    /// Case-insensitive parse with the textbox fallback for unknown input.
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "textbox" => Self::Textbox,
            "textarea" => Self::Textarea,
            "dropdown" => Self::Dropdown,
            "checkbox" => Self::Checkbox,
            "checkboxlist" => Self::Checkboxlist,
            "radiobutton" => Self::Radiobutton,
            "radiobuttonlist" => Self::Radiobuttonlist,
            _ => Self::Textbox,
        }
    }

    /// Whether this control type draws its values from `options`.
    pub const fn takes_options(&self) -> bool {
        matches!(self, Self::Dropdown | Self::Checkboxlist | Self::Radiobuttonlist)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

// ── MenuOrientation ───────────────────────────────────────────────────────────

/// Layout direction of the shell navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl MenuOrientation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for MenuOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuOrientation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(DomainError::InvalidSpecification(format!(
                "unknown menu orientation: {other}"
            ))),
        }
    }
}

// ── Style options ─────────────────────────────────────────────────────────────

/// Run-level layout configuration supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    /// Bootstrap-style column grid and nav classes when `true`; the custom
    /// grid classes otherwise.
    pub styled_grid: bool,
    /// Fields per row in the generated form layout.
    pub columns: GridColumns,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            styled_grid: true,
            columns: GridColumns::Two,
        }
    }
}

/// Column count, restricted by type to the supported grid divisors.
///
/// The original tool accepted any integer and divided 12 by it unguarded;
/// the closed enum removes the zero/non-divisor gap wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridColumns {
    #[default]
    Two,
    Three,
    Four,
}

impl GridColumns {
    pub const fn count(&self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Bootstrap column span: `12 / count`.
    pub const fn span(&self) -> u32 {
        12 / self.count()
    }
}

impl TryFrom<u32> for GridColumns {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(DomainError::InvalidSpecification(format!(
                "column count must be 2, 3, or 4, got {other}"
            ))),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_derivations() {
        let c = ComponentSpec {
            name: "register".into(),
            menu_label: None,
            fields: vec![],
            buttons: vec![],
        };
        assert_eq!(c.class_name(), "RegisterComponent");
        assert_eq!(c.route_path(), "register");
        assert_eq!(c.selector(), "app-register");
        assert_eq!(c.menu_label(), "register");
    }

    #[test]
    fn menu_label_prefers_explicit_display_name() {
        let c = ComponentSpec {
            name: "aboutus".into(),
            menu_label: Some("About Us".into()),
            fields: vec![],
            buttons: vec![],
        };
        assert_eq!(c.menu_label(), "About Us");
    }

    #[test]
    fn field_type_parse_lenient_falls_back_to_textbox() {
        assert_eq!(FieldType::parse_lenient("dropdown"), FieldType::Dropdown);
        assert_eq!(FieldType::parse_lenient("DropDown"), FieldType::Dropdown);
        assert_eq!(FieldType::parse_lenient("datepicker"), FieldType::Textbox);
        assert_eq!(FieldType::parse_lenient(""), FieldType::Textbox);
    }

    #[test]
    fn field_type_deserializes_unknown_as_textbox() {
        let field: FieldSpec =
            serde_json::from_str(r#"{ "name": "dob", "type": "datepicker" }"#).unwrap();
        assert_eq!(field.field_type, FieldType::Textbox);
    }

    #[test]
    fn field_defaults_are_permissive() {
        let field: FieldSpec = serde_json::from_str(r#"{ "name": "bio" }"#).unwrap();
        assert_eq!(field.field_type, FieldType::Textbox);
        assert!(!field.required);
        assert!(field.options.is_empty());
        assert!(field.validation.is_none());
    }

    #[test]
    fn option_bearing_types() {
        assert!(FieldType::Dropdown.takes_options());
        assert!(FieldType::Checkboxlist.takes_options());
        assert!(FieldType::Radiobuttonlist.takes_options());
        assert!(!FieldType::Textbox.takes_options());
        assert!(!FieldType::Checkbox.takes_options());
    }

    #[test]
    fn grid_columns_span_is_integer_division() {
        assert_eq!(GridColumns::Two.span(), 6);
        assert_eq!(GridColumns::Three.span(), 4);
        assert_eq!(GridColumns::Four.span(), 3);
    }

    #[test]
    fn grid_columns_rejects_unsupported_counts() {
        assert!(GridColumns::try_from(2).is_ok());
        assert!(GridColumns::try_from(0).is_err());
        assert!(GridColumns::try_from(5).is_err());
    }

    #[test]
    fn default_route_requires_a_component() {
        let spec = AppSpec {
            name: "app".into(),
            components: vec![],
            menu: MenuOrientation::Horizontal,
            footer: None,
        };
        assert_eq!(spec.default_route(), Err(DomainError::EmptySpecification));
    }

    #[test]
    fn spec_deserializes_from_document_json() {
        let json = r#"{
            "name": "my-angular-app",
            "menu": "horizontal",
            "footer": "All rights reserved",
            "components": [
                {
                    "name": "Register",
                    "fields": [
                        { "name": "email", "type": "textbox", "required": true },
                        { "name": "country", "type": "dropdown", "options": ["USA", "Canada"] }
                    ],
                    "buttons": ["Register"]
                }
            ]
        }"#;
        let spec: AppSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.components.len(), 1);
        assert_eq!(spec.components[0].fields[1].options.len(), 2);
        assert_eq!(spec.default_route().unwrap(), "register");
    }
}
