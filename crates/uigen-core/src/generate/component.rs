//! Per-component artifact generation: the component class and its form.

use crate::domain::naming;
use crate::domain::spec::{ComponentSpec, StyleOptions};
use crate::domain::validation::compile_field;
use crate::generate::{indent, markup};

/// Generate the component class artifact.
///
/// The class holds a typed form model seeded from each field's compiled
/// validation directives, and a submit handler that branches on the form's
/// validity state: the valid path forwards the value payload, the invalid
/// path reports the validation failure.
pub fn component_class(component: &ComponentSpec) -> String {
    let class = component.class_name();
    let selector = component.selector();
    let path = component.route_path();
    let form = form_property(component);

    let mut controls = String::new();
    for field in &component.fields {
        let compiled = compile_field(field);
        let seed = field
            .validation
            .as_ref()
            .and_then(|v| v.default.as_deref())
            .unwrap_or("");

        let exprs: Vec<String> = compiled
            .directives
            .iter()
            .map(|d| d.validator_expr())
            .collect();

        let line = if exprs.is_empty() {
            format!("      {}: ['{}'],", field.name, seed)
        } else {
            format!("      {}: ['{}', [{}]],", field.name, seed, exprs.join(", "))
        };
        controls.push_str(&line);
        controls.push('\n');
    }
    let controls = controls.trim_end_matches('\n');

    format!(
        "import {{ Component, OnInit }} from '@angular/core';\n\
         import {{ FormBuilder, FormGroup, Validators }} from '@angular/forms';\n\
         \n\
         @Component({{\n\
         \x20 selector: '{selector}',\n\
         \x20 templateUrl: './{path}.component.html',\n\
         \x20 styleUrls: ['./{path}.component.css']\n\
         }})\n\
         export class {class} implements OnInit {{\n\
         \x20 {form}!: FormGroup;\n\
         \x20 submitted = false;\n\
         \n\
         \x20 constructor(private formBuilder: FormBuilder) {{ }}\n\
         \n\
         \x20 ngOnInit(): void {{\n\
         \x20   this.{form} = this.formBuilder.group({{\n\
         {controls}\n\
         \x20   }});\n\
         \x20 }}\n\
         \n\
         \x20 get f() {{ return this.{form}.controls; }}\n\
         \n\
         \x20 onSubmit(): void {{\n\
         \x20   this.submitted = true;\n\
         \x20   if (this.{form}.invalid) {{\n\
         \x20     console.log('{class}: validation failed');\n\
         \x20     return;\n\
         \x20   }}\n\
         \x20   console.log(JSON.stringify(this.{form}.value));\n\
         \x20 }}\n\
         }}\n"
    )
}

/// Generate the full form markup: field fragments inside the layout grid,
/// then one actionable element per declared button label.
pub fn component_markup(component: &ComponentSpec, style: &StyleOptions) -> String {
    let title = naming::label_case(&component.name);
    let form = form_property(component);

    let (container, row, column) = if style.styled_grid {
        (
            "container".to_string(),
            "row".to_string(),
            format!("col-md-{}", style.columns.span()),
        )
    } else {
        (
            "custom-container".to_string(),
            "custom-row".to_string(),
            format!("custom-col-{}", style.columns.count()),
        )
    };

    let mut out = format!(
        "<div class=\"{container}\">\n\
         \x20   <h2>{title}</h2>\n\
         \x20   <form [formGroup]=\"{form}\" (ngSubmit)=\"onSubmit()\">\n\
         \x20       <div class=\"{row}\">\n"
    );

    for field in &component.fields {
        let compiled = compile_field(field);
        let fragment = markup::render_field(field, &compiled);
        out.push_str(&format!("            <div class=\"{column}\">\n"));
        out.push_str(&indent(&fragment, 16));
        out.push_str("\n            </div>\n");
    }

    out.push_str("        </div>\n");

    let button_class = if style.styled_grid {
        "btn btn-primary"
    } else {
        "custom-button"
    };
    if component.buttons.is_empty() {
        out.push_str(&format!(
            "        <button type=\"submit\" class=\"{button_class}\">Submit</button>\n"
        ));
    } else {
        for label in &component.buttons {
            out.push_str(&format!(
                "        <button type=\"submit\" class=\"{button_class}\">{label}</button>\n"
            ));
        }
    }

    out.push_str("    </form>\n</div>\n");
    out
}

/// Name of the form-group property inside the class, e.g. `registerForm`.
fn form_property(component: &ComponentSpec) -> String {
    format!("{}Form", component.route_path())
}

// ── tests ─────────────────────────────────────────────────────────────────────
