//! Template rendering

use std::sync::Arc;

use axum::response::Html;
use chrono::Datelike;
use minijinja::Environment;
use serde::Serialize;

use crate::AppResult;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("klasifikasi.html", include_str!("../../templates/klasifikasi.html")),
    ("model_error.html", include_str!("../../templates/model_error.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Compiled templates, shared across requests
#[derive(Clone)]
pub struct Renderer {
    env: Arc<Environment<'static>>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_function("current_year", current_year);

        Ok(Self { env: Arc::new(env) })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> AppResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view::HomeView;

    #[test]
    fn test_all_templates_compile() {
        let renderer = Renderer::new().unwrap();
        for (name, _) in TEMPLATES {
            assert!(renderer.env.get_template(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_home_uses_layout() {
        let renderer = Renderer::new().unwrap();
        let Html(body) = renderer.render("home.html", HomeView::default()).unwrap();
        assert!(body.contains("FabricAI"));
        assert!(body.contains(&format!("© {} FabricAI", current_year())));
        assert!(body.contains("Elastisitas Bahan Pakaian"));
        assert!(body.contains("Berpori"));
    }

    #[test]
    fn test_output_is_escaped() {
        let renderer = Renderer::new().unwrap();
        let view = crate::page::view::ModelErrorView {
            error: "<script>alert(1)</script>".to_string(),
        };
        let Html(body) = renderer.render("model_error.html", view).unwrap();
        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
