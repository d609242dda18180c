//! polypdf-export
//!
//! HTML templating (Tera) and HTML → PDF conversion (printpdf).

pub mod chunks;
pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod render;
