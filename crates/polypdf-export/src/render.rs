use std::path::Path;

use tera::{Context, Tera};
use tracing::info;

use polypdf_core::context::RenderContext;

use crate::error::{ExportError, error_chain};

/// Named HTML templates, parsed once and shared read-only.
///
/// Templates ending in `.html` are autoescaped, so translation strings are
/// inserted as text.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Load every `*.html` template under `dir`, named by relative path.
    pub fn from_dir(dir: &Path) -> Result<Self, ExportError> {
        let pattern = dir.join("**").join("*.html");
        let pattern = pattern.to_str().ok_or_else(|| {
            ExportError::TemplateParse(format!("non UTF-8 template path: {}", dir.display()))
        })?;

        let tera = Tera::new(pattern).map_err(|e| ExportError::TemplateParse(error_chain(&e)))?;
        let renderer = Self { tera };
        info!(dir = %dir.display(), templates = ?renderer.template_names(), "templates loaded");
        Ok(renderer)
    }

    /// Build from `(name, source)` pairs.
    pub fn from_raw<'a, I>(templates: I) -> Result<Self, ExportError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|e| ExportError::TemplateParse(error_chain(&e)))?;
        Ok(Self { tera })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|candidate| candidate == name)
    }

    /// Template names in sorted order.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Render `template_name` with the flat context.
    pub fn render(
        &self,
        template_name: &str,
        context: &RenderContext,
    ) -> Result<String, ExportError> {
        let context = Context::from_serialize(context)
            .map_err(|e| ExportError::TemplateRender(error_chain(&e)))?;
        let rendered = self.tera.render(template_name, &context)?;
        Ok(rendered)
    }
}
