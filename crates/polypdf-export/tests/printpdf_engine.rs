//! Tests against the real printpdf engine.

use std::sync::Arc;

use polypdf_core::app_data;
use polypdf_core::catalog::TranslationSet;
use polypdf_core::context::build;
use polypdf_export::pdf::{PdfEngine, PrintPdfEngine};
use polypdf_export::pipeline::PdfPipeline;
use polypdf_export::render::TemplateRenderer;
use sha2::{Digest, Sha256};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><style>body { font-family: 'Helvetica'; }</style></head>
<body>
  <h1>{{ title }}</h1>
  <p>{{ data_point_1 }}</p>
  <p>{{ data_point_2 }}</p>
  <p>{{ data_point_3 }}</p>
</body>
</html>
"#;

fn render_sample() -> Vec<u8> {
    let templates = TemplateRenderer::from_raw([("pdf_template.html", TEMPLATE)]).unwrap();
    let pipeline = PdfPipeline::new(templates, Arc::new(PrintPdfEngine));
    let translations: TranslationSet = [("title".to_string(), "Hello".to_string())].into();
    let context = build(&translations, &app_data::generate_pdf()).unwrap();

    pipeline.render("pdf_template.html", &context).unwrap()
}

/// Blank out values the engine derives from the clock or a random source.
fn scrub(bytes: &[u8]) -> Vec<u8> {
    fn blank_after(data: &mut [u8], marker: &[u8], terminator: u8) {
        let mut index = 0;
        while let Some(found) = data[index..]
            .windows(marker.len())
            .position(|window| window == marker)
        {
            let mut cursor = index + found + marker.len();
            while cursor < data.len() && data[cursor] != terminator {
                if !matches!(data[cursor], b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                    data[cursor] = b'0';
                }
                cursor += 1;
            }
            index = cursor;
        }
    }

    let mut scrubbed = bytes.to_vec();
    blank_after(&mut scrubbed, b"/CreationDate(", b')');
    blank_after(&mut scrubbed, b"/ModDate(", b')');
    blank_after(&mut scrubbed, b"/ID[", b']');
    blank_after(&mut scrubbed, b"<xmp:CreateDate>", b'/');
    blank_after(&mut scrubbed, b"<xmp:ModifyDate>", b'/');
    blank_after(&mut scrubbed, b"<xmp:MetadataDate>", b'/');
    blank_after(&mut scrubbed, b"<xmpMM:DocumentID>", b'/');
    blank_after(&mut scrubbed, b"<xmpMM:InstanceID>", b'/');
    scrubbed
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub(bytes)).into()
}

#[test]
fn produces_a_pdf_document() {
    let bytes = render_sample();
    assert!(bytes.starts_with(b"%PDF"), "missing PDF header");
}

#[test]
fn rendering_is_deterministic_after_metadata_scrub() {
    let first = render_sample();
    let second = render_sample();

    assert_eq!(first.len(), second.len(), "PDF sizes should match");
    assert_eq!(digest(&first), digest(&second));
}

#[test]
fn engine_accepts_minimal_html() {
    let bytes = PrintPdfEngine
        .render_pdf("<html><body><p>x</p></body></html>")
        .unwrap();
    assert!(!bytes.is_empty());
}
