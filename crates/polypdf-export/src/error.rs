use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        match &e.kind {
            tera::ErrorKind::TemplateNotFound(name) => ExportError::TemplateNotFound(name.clone()),
            _ => ExportError::TemplateRender(error_chain(&e)),
        }
    }
}

/// Tera keeps the useful detail (line, variable name) in the source chain.
pub(crate) fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
