//! Navigation and shell-page assembly.

use crate::domain::spec::{AppSpec, MenuOrientation, StyleOptions};

/// Build the navigation fragment: one link per component, laid out per the
/// requested orientation.
pub fn navigation(spec: &AppSpec, style: &StyleOptions) -> String {
    let nav_class = match (style.styled_grid, spec.menu) {
        (true, MenuOrientation::Horizontal) => "nav flex-row",
        (true, MenuOrientation::Vertical) => "nav flex-column",
        (false, MenuOrientation::Horizontal) => "custom-nav custom-nav-horizontal",
        (false, MenuOrientation::Vertical) => "custom-nav custom-nav-vertical",
    };
    let link_class = if style.styled_grid {
        "nav-link"
    } else {
        "custom-nav-link"
    };

    let mut nav = format!("<nav class=\"{nav_class}\">\n");
    for component in &spec.components {
        nav.push_str(&format!(
            "    <a class=\"{link_class}\" routerLink=\"/{path}\">{label}</a>\n",
            path = component.route_path(),
            label = component.menu_label(),
        ));
    }
    nav.push_str("</nav>");
    nav
}

/// Build the shell markup: navigation, router placeholder, optional footer.
///
/// A missing footer produces no footer element at all, never an empty
/// `<footer>` tag.
pub fn shell_page(spec: &AppSpec, style: &StyleOptions) -> String {
    let mut page = navigation(spec, style);
    page.push_str("\n<router-outlet></router-outlet>\n");
    if let Some(footer) = &spec.footer {
        page.push_str(&format!("<footer class=\"footer\">{footer}</footer>\n"));
    }
    page
}

// ── tests ─────────────────────────────────────────────────────────────────────
