//! Validation-rule compilation and specification validation.
//!
//! [`compile_field`] turns a field's declared constraints into the ordered
//! [`Directive`] list consumed by both the component-class generator and
//! the markup renderer. Directive order is significant: some target
//! frameworks evaluate validators in declaration order, and `required`
//! must run before format and range checks, so emission order is part of
//! the contract here.
//!
//! [`validate_spec`] is the run-level gate. Permissive mode checks only
//! the hard preconditions (non-empty name, non-empty component list);
//! strict mode additionally rejects route-path collisions, empty option
//! sets on option-bearing fields, and non-ascending ranges.

use std::collections::HashMap;

use crate::domain::error::DomainError;
use crate::domain::naming;
use crate::domain::spec::{AppSpec, FieldSpec};

// ── Directive ─────────────────────────────────────────────────────────────────

/// One compiled validation rule.
///
/// Created fresh per generation run; never part of the input document.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Required,
    MinLength(u32),
    MaxLength(u32),
    Pattern(String),
    Min(f64),
    Max(f64),
}

impl Directive {
    /// The validator expression emitted into the component class.
    pub fn validator_expr(&self) -> String {
        match self {
            Self::Required => "Validators.required".into(),
            Self::MinLength(n) => format!("Validators.minLength({n})"),
            Self::MaxLength(n) => format!("Validators.maxLength({n})"),
            Self::Pattern(expr) => format!("Validators.pattern(/{expr}/)"),
            Self::Min(n) => format!("Validators.min({})", format_number(*n)),
            Self::Max(n) => format!("Validators.max({})", format_number(*n)),
        }
    }

    /// The error key the markup's conditional error blocks test against.
    pub const fn error_key(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "minlength",
            Self::MaxLength(_) => "maxlength",
            Self::Pattern(_) => "pattern",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
        }
    }
}

/// Render a numeric bound without a trailing `.0` for whole values.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ── Compiler ──────────────────────────────────────────────────────────────────

/// A field's compiled validation: ordered directives plus the resolved
/// error messages used by the markup error blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledValidation {
    pub directives: Vec<Directive>,
    /// Message for the required-error block.
    pub required_message: String,
    /// Message for the pattern-error block.
    pub pattern_message: String,
}

impl CompiledValidation {
    pub fn is_required(&self) -> bool {
        self.directives.contains(&Directive::Required)
    }

    pub fn pattern(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            Directive::Pattern(expr) => Some(expr.as_str()),
            _ => None,
        })
    }
}

/// Compile one field's constraints into an ordered directive list.
///
/// Precedence: a structured validation bundle, when present, supersedes
/// the flat `required` / `pattern` attributes entirely. Within the bundle
/// the emission order is Required, MinLength, MaxLength, Pattern, Min,
/// Max (min before max). Absent validation information yields an empty
/// list: the field is optional and unconstrained.
pub fn compile_field(field: &FieldSpec) -> CompiledValidation {
    let mut directives = Vec::new();

    if let Some(bundle) = &field.validation {
        if bundle.required {
            directives.push(Directive::Required);
        }
        if let Some(n) = bundle.min_length {
            directives.push(Directive::MinLength(n));
        }
        if let Some(n) = bundle.max_length {
            directives.push(Directive::MaxLength(n));
        }
        if let Some(expr) = &bundle.pattern {
            directives.push(Directive::Pattern(expr.clone()));
        }
        if let Some((min, max)) = bundle.range {
            directives.push(Directive::Min(min));
            directives.push(Directive::Max(max));
        }
    } else {
        if field.required {
            directives.push(Directive::Required);
        }
        if let Some(expr) = &field.pattern {
            directives.push(Directive::Pattern(expr.clone()));
        }
    }

    let label = naming::label_case(&field.name);
    let required_message = field
        .message
        .clone()
        .unwrap_or_else(|| format!("{label} is required"));
    let pattern_message = field
        .message
        .clone()
        .unwrap_or_else(|| format!("{} format is invalid", field.name));

    CompiledValidation {
        directives,
        required_message,
        pattern_message,
    }
}

// ── Specification validation ──────────────────────────────────────────────────

/// How tolerant a generation run is of degenerate specification input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reproduce the original tolerances: name collisions, empty option
    /// sets, and descending ranges pass through as degenerate output.
    #[default]
    Permissive,
    /// Promote the tolerated gaps to hard validation errors.
    Strict,
}

/// Validate a specification before generation.
///
/// The empty-name and empty-component-list preconditions are fatal in
/// both modes; everything else only fires under [`ValidationMode::Strict`].
pub fn validate_spec(spec: &AppSpec, mode: ValidationMode) -> Result<(), DomainError> {
    if spec.name.trim().is_empty() {
        return Err(DomainError::EmptyProjectName);
    }
    if spec.components.is_empty() {
        return Err(DomainError::EmptySpecification);
    }

    if mode == ValidationMode::Permissive {
        return Ok(());
    }

    let mut seen: HashMap<String, &str> = HashMap::new();
    for component in &spec.components {
        let path = component.route_path();
        if let Some(first) = seen.insert(path.clone(), &component.name) {
            return Err(DomainError::DuplicateRoutePath {
                first: first.to_string(),
                second: component.name.clone(),
                path,
            });
        }

        for field in &component.fields {
            if field.field_type.takes_options() && field.options.is_empty() {
                return Err(DomainError::EmptyOptions {
                    field: field.name.clone(),
                    field_type: field.field_type.as_str(),
                });
            }
            if let Some((min, max)) = field.validation.as_ref().and_then(|v| v.range) {
                if min > max {
                    return Err(DomainError::RangeNotAscending {
                        field: field.name.clone(),
                        min,
                        max,
                    });
                }
            }
        }
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
