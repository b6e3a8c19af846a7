use handlebars::{Handlebars, TemplateError};
use std::path::Path;

/// Every page the app renders. Each name maps to `<dir>/<name>.hbs`.
pub const PAGES: &[&str] = &[
    "home",
    "about",
    "contact",
    "login",
    "register",
    "dashboard",
];

/// Loads all page templates into one registry. Called once at startup;
/// a missing or malformed template is a startup failure, not a per-request
/// one.
pub fn load_templates(dir: &Path) -> Result<Handlebars<'static>, Box<TemplateError>> {
    let mut registry = Handlebars::new();
    for page in PAGES {
        registry
            .register_template_file(page, dir.join(format!("{page}.hbs")))
            .map_err(Box::new)?;
    }
    Ok(registry)
}
