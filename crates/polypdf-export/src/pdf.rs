use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use tracing::debug;

use crate::error::ExportError;

/// HTML → PDF conversion seam.
///
/// Implementations are called from a blocking thread and shared across
/// requests.
pub trait PdfEngine: Send + Sync {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// Converts HTML with printpdf's built-in layout engine.
///
/// No images or extra fonts are embedded; the built-in fonts are used.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintPdfEngine;

impl PdfEngine for PrintPdfEngine {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let mut warnings = Vec::new();
        let document = PdfDocument::from_html(
            html,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &GeneratePdfOptions::default(),
            &mut warnings,
        )
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let bytes = document.save(&PdfSaveOptions::default(), &mut warnings);
        if bytes.is_empty() {
            return Err(ExportError::Pdf("engine produced an empty document".to_string()));
        }

        debug!(bytes = bytes.len(), warnings = warnings.len(), "pdf rendered");
        Ok(bytes)
    }
}
