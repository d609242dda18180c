use std::sync::Arc;

use tracing::debug;

use polypdf_core::context::RenderContext;

use crate::error::ExportError;
use crate::pdf::PdfEngine;
use crate::render::TemplateRenderer;

/// Template → HTML → PDF.
///
/// The flow is:
/// 1. RenderContext → HTML (via Tera)
/// 2. HTML → PDF bytes (via the configured [`PdfEngine`])
pub struct PdfPipeline {
    templates: TemplateRenderer,
    engine: Arc<dyn PdfEngine>,
}

impl PdfPipeline {
    pub fn new(templates: TemplateRenderer, engine: Arc<dyn PdfEngine>) -> Self {
        Self { templates, engine }
    }

    pub fn render_html(
        &self,
        template_name: &str,
        context: &RenderContext,
    ) -> Result<String, ExportError> {
        self.templates.render(template_name, context)
    }

    /// Render `template_name` to PDF bytes. Blocking; call it off the async
    /// runtime.
    pub fn render(
        &self,
        template_name: &str,
        context: &RenderContext,
    ) -> Result<Vec<u8>, ExportError> {
        let html = self.render_html(template_name, context)?;
        debug!(template = template_name, html_bytes = html.len(), "template rendered");
        self.engine.render_pdf(&html)
    }
}
