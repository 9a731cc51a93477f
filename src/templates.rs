//! Template loading and the `render` shortcut used by every HTML handler.

use std::collections::HashMap;
use std::path::Path;

use axum::{http::StatusCode, response::Html};
use tera::{Context, Tera, Value};

use crate::entities::chai_table::ChaiType;
use crate::models::Chai;

/// Load every `*.html` file under `dir`; names are paths relative to `dir`.
pub fn load(dir: impl AsRef<Path>) -> tera::Result<Tera> {
    let glob = format!("{}/**/*.html", dir.as_ref().display());
    let mut tera = Tera::new(&glob)?;
    tera.register_filter("chai_type_label", chai_type_label);
    tracing::info!(
        "Loaded {} templates from {}",
        tera.get_template_names().count(),
        dir.as_ref().display()
    );
    Ok(tera)
}

/// Render `name` with `context` into an HTML response.
pub fn render(
    tera: &Tera,
    name: &str,
    context: &Context,
) -> Result<Html<String>, (StatusCode, String)> {
    tera.render(name, context).map(Html).map_err(|e| {
        tracing::error!("Failed to render template {name}: {e:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {name}"),
        )
    })
}

pub fn chai_list_context(chai_list: &[Chai]) -> Context {
    let mut context = Context::new();
    context.insert("chai_list", chai_list);
    context
}

/// `{{ chai.chai_type | chai_type_label }}` -> "Masale Tea"
pub fn chai_type_label(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let code = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("chai_type_label filter requires a string"))?;
    let chai_type: ChaiType = code.parse().map_err(tera::Error::msg)?;
    Ok(Value::String(chai_type.label().to_string()))
}

#[cfg(test)]
pub fn test_templates() -> Tera {
    load(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap()
}
