//! Splitting a finished PDF into response body chunks.

use bytes::Bytes;

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const CHUNK_SIZE: usize = 64 * 1024;

/// Lazily yield `pdf` in fixed-size chunks, optionally preceded by a
/// standalone [`UTF8_BOM`] chunk. Slices share the original buffer.
pub fn pdf_chunks(pdf: Vec<u8>, with_bom: bool) -> impl Iterator<Item = Bytes> + Send + 'static {
    let pdf = Bytes::from(pdf);
    let len = pdf.len();
    let bom = with_bom.then(|| Bytes::from_static(UTF8_BOM));

    bom.into_iter().chain(
        (0..len)
            .step_by(CHUNK_SIZE)
            .map(move |start| pdf.slice(start..(start + CHUNK_SIZE).min(len))),
    )
}
