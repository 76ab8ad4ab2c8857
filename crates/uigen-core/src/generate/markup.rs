//! Field markup rendering.
//!
//! This module is the single source of truth for how a schema-level field
//! type maps to a runtime control. The dispatch is an exhaustive match on
//! [`FieldType`]; adding a control type means adding an arm here and the
//! compiler enforces total coverage.
//!
//! Per-type behaviour:
//!
//! | type            | control                     | required err | pattern err |
//! |-----------------|-----------------------------|--------------|-------------|
//! | textbox         | single-line text input      | yes          | if present  |
//! | textarea        | multi-line text input       | yes          | no          |
//! | dropdown        | select with blank seed      | yes          | no          |
//! | checkbox        | single toggle               | no           | no          |
//! | checkboxlist    | one toggle per option       | no           | no          |
//! | radiobutton     | single exclusive toggle     | no           | no          |
//! | radiobuttonlist | one exclusive per option    | yes          | no          |
//!
//! Unrecognized document types never reach this module; they are folded to
//! `Textbox` when the specification is parsed.

use crate::domain::spec::{FieldSpec, FieldType};
use crate::domain::validation::CompiledValidation;

/// Render one field into a markup fragment, wiring in the validation-driven
/// error blocks.
pub fn render_field(field: &FieldSpec, validation: &CompiledValidation) -> String {
    match field.field_type {
        FieldType::Textbox => render_textbox(field, validation),
        FieldType::Textarea => render_textarea(field, validation),
        FieldType::Dropdown => render_dropdown(field, validation),
        FieldType::Checkbox => render_single_toggle(field, validation, "checkbox"),
        FieldType::Checkboxlist => render_toggle_list(field, validation, ToggleKind::Checkbox),
        FieldType::Radiobutton => render_single_toggle(field, validation, "radio"),
        FieldType::Radiobuttonlist => render_toggle_list(field, validation, ToggleKind::Radio),
    }
}

// ── Per-type renderers ────────────────────────────────────────────────────────

fn render_textbox(field: &FieldSpec, validation: &CompiledValidation) -> String {
    let control = format!(
        "    <input type=\"text\" id=\"{name}\" formControlName=\"{name}\" class=\"form-control\" />",
        name = field.name
    );
    let errors = error_block(
        field,
        validation,
        validation.is_required(),
        validation.pattern().is_some(),
    );
    wrap(field, validation, &control, &errors)
}

fn render_textarea(field: &FieldSpec, validation: &CompiledValidation) -> String {
    let control = format!(
        "    <textarea id=\"{name}\" formControlName=\"{name}\" rows=\"3\" class=\"form-control\"></textarea>",
        name = field.name
    );
    let errors = error_block(field, validation, validation.is_required(), false);
    wrap(field, validation, &control, &errors)
}

fn render_dropdown(field: &FieldSpec, validation: &CompiledValidation) -> String {
    let mut control = format!(
        "    <select id=\"{name}\" formControlName=\"{name}\" class=\"form-control\">\n",
        name = field.name
    );
    // Blank "none selected" seed option, then one option per declared value.
    control.push_str("        <option value=\"\">-- select --</option>\n");
    for option in &field.options {
        control.push_str(&format!(
            "        <option value=\"{option}\">{option}</option>\n"
        ));
    }
    control.push_str("    </select>");

    let errors = error_block(field, validation, validation.is_required(), false);
    wrap(field, validation, &control, &errors)
}

fn render_single_toggle(
    field: &FieldSpec,
    validation: &CompiledValidation,
    input_type: &str,
) -> String {
    let control = format!(
        "    <input type=\"{input_type}\" id=\"{name}\" formControlName=\"{name}\" class=\"form-check-input\" />",
        name = field.name
    );
    // Toggles carry no error block; the required marker on the label is the
    // only visible hint.
    wrap(field, validation, &control, "")
}

#[derive(Clone, Copy)]
enum ToggleKind {
    Checkbox,
    Radio,
}

fn render_toggle_list(
    field: &FieldSpec,
    validation: &CompiledValidation,
    kind: ToggleKind,
) -> String {
    let mut control = String::new();
    for (idx, option) in field.options.iter().enumerate() {
        let id = format!("{}-{}", field.name, idx);
        let input = match kind {
            // Independent toggles share the field's name attribute.
            ToggleKind::Checkbox => format!(
                "        <input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"{option}\" class=\"form-check-input\" />",
                name = field.name
            ),
            // Exclusive toggles share one form control.
            ToggleKind::Radio => format!(
                "        <input type=\"radio\" id=\"{id}\" formControlName=\"{name}\" value=\"{option}\" class=\"form-check-input\" />",
                name = field.name
            ),
        };
        control.push_str("    <div class=\"form-check\">\n");
        control.push_str(&input);
        control.push('\n');
        control.push_str(&format!(
            "        <label class=\"form-check-label\" for=\"{id}\">{option}</label>\n"
        ));
        control.push_str("    </div>\n");
    }
    let control = control.trim_end_matches('\n');

    let show_required = matches!(kind, ToggleKind::Radio) && validation.is_required();
    let errors = error_block(field, validation, show_required, false);
    wrap(field, validation, control, &errors)
}

// ── Shared pieces ─────────────────────────────────────────────────────────────

/// Uniform field container: label (with required marker), control, errors.
fn wrap(
    field: &FieldSpec,
    validation: &CompiledValidation,
    control: &str,
    errors: &str,
) -> String {
    // The marker tracks the compiled Required directive, independent of
    // which validation path (flat or bundle) produced it.
    let marker = if validation.is_required() {
        "<span class=\"required-marker\">*</span>"
    } else {
        ""
    };

    let mut fragment = String::from("<div class=\"form-group\">\n");
    fragment.push_str(&format!(
        "    <label for=\"{name}\">{label}{marker}</label>\n",
        name = field.name,
        label = field.label(),
    ));
    fragment.push_str(control);
    fragment.push('\n');
    if !errors.is_empty() {
        fragment.push_str(errors);
        fragment.push('\n');
    }
    fragment.push_str("</div>");
    fragment
}

/// Conditional error container shown once the form was submitted.
fn error_block(
    field: &FieldSpec,
    validation: &CompiledValidation,
    show_required: bool,
    show_pattern: bool,
) -> String {
    if !show_required && !show_pattern {
        return String::new();
    }

    let name = &field.name;
    let mut block = format!(
        "    <div class=\"invalid-feedback\" *ngIf=\"submitted && f.{name}.errors\">\n"
    );
    if show_required {
        block.push_str(&format!(
            "        <div *ngIf=\"f.{name}.errors.required\">{}</div>\n",
            validation.required_message
        ));
    }
    if show_pattern {
        block.push_str(&format!(
            "        <div *ngIf=\"f.{name}.errors.pattern\">{}</div>\n",
            validation.pattern_message
        ));
    }
    block.push_str("    </div>");
    block
}

// ── tests ─────────────────────────────────────────────────────────────────────
