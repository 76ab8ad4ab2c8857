//! Routing table and application module generation.

use crate::domain::error::DomainError;
use crate::domain::spec::AppSpec;

/// One entry of the generated routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEntry {
    /// A concrete path-to-component mapping.
    Component { path: String, class: String },
    /// A synthetic redirect (empty-path or wildcard).
    Redirect { path: String, to: String },
}

impl RouteEntry {
    /// Render as one line of the routes array.
    pub fn render(&self) -> String {
        match self {
            Self::Component { path, class } => {
                format!("  {{ path: '{path}', component: {class} }}")
            }
            Self::Redirect { path, to } => {
                format!("  {{ path: '{path}', redirectTo: '/{to}', pathMatch: 'full' }}")
            }
        }
    }
}

/// Build the route entries: one per component in input order, then the
/// empty-path and wildcard redirects to the first component's path.
///
/// The first component is dereferenced unconditionally by design; an empty
/// component list is a fatal precondition violation.
pub fn route_entries(spec: &AppSpec) -> Result<Vec<RouteEntry>, DomainError> {
    let default = spec.default_route()?;

    let mut entries: Vec<RouteEntry> = spec
        .components
        .iter()
        .map(|c| RouteEntry::Component {
            path: c.route_path(),
            class: c.class_name(),
        })
        .collect();

    entries.push(RouteEntry::Redirect {
        path: String::new(),
        to: default.clone(),
    });
    entries.push(RouteEntry::Redirect {
        path: "**".into(),
        to: default,
    });

    Ok(entries)
}

/// Per-component import declarations, one per route entry, in route order.
pub fn import_lines(spec: &AppSpec) -> Vec<String> {
    spec.components
        .iter()
        .map(|c| {
            format!(
                "import {{ {class} }} from './{path}/{path}.component';",
                class = c.class_name(),
                path = c.route_path(),
            )
        })
        .collect()
}

/// Generate the routing module artifact.
pub fn routing_module(spec: &AppSpec) -> Result<String, DomainError> {
    let entries = route_entries(spec)?;
    let routes = entries
        .iter()
        .map(RouteEntry::render)
        .collect::<Vec<_>>()
        .join(",\n");
    let imports = import_lines(spec).join("\n");

    Ok(format!(
        "import {{ NgModule }} from '@angular/core';\n\
         import {{ Routes, RouterModule }} from '@angular/router';\n\
         \n\
         {imports}\n\
         \n\
         const routes: Routes = [\n\
         {routes}\n\
         ];\n\
         \n\
         @NgModule({{\n\
         \x20 imports: [RouterModule.forRoot(routes)],\n\
         \x20 exports: [RouterModule]\n\
         }})\n\
         export class AppRoutingModule {{ }}\n"
    ))
}

/// Generate the application module artifact declaring every component.
pub fn app_module(spec: &AppSpec) -> Result<String, DomainError> {
    if spec.components.is_empty() {
        return Err(DomainError::EmptySpecification);
    }

    let component_imports = import_lines(spec).join("\n");
    let declarations = spec
        .components
        .iter()
        .map(|c| format!("    {}", c.class_name()))
        .collect::<Vec<_>>()
        .join(",\n");

    Ok(format!(
        "import {{ NgModule }} from '@angular/core';\n\
         import {{ BrowserModule }} from '@angular/platform-browser';\n\
         import {{ ReactiveFormsModule }} from '@angular/forms';\n\
         \n\
         import {{ AppRoutingModule }} from './app-routing.module';\n\
         import {{ AppComponent }} from './app.component';\n\
         {component_imports}\n\
         \n\
         @NgModule({{\n\
         \x20 declarations: [\n\
         \x20   AppComponent,\n\
         {declarations}\n\
         \x20 ],\n\
         \x20 imports: [\n\
         \x20   BrowserModule,\n\
         \x20   ReactiveFormsModule,\n\
         \x20   AppRoutingModule\n\
         \x20 ],\n\
         \x20 providers: [],\n\
         \x20 bootstrap: [AppComponent]\n\
         }})\n\
         export class AppModule {{ }}\n"
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────
