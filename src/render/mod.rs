//! Rendering layer: block mapping, document assembly and pagination.

pub mod blocks;
pub mod document;
pub mod pdf;

pub use blocks::{map_line, map_text};
pub use document::{assemble, assemble_at};
pub use pdf::{render_pdf, render_pdf_to_file, FontConfig, PageMargins, PaperSize, PdfConfig};

use crate::error::Result;
use crate::metadata::DocumentMetadata;

/// Assemble both texts and paginate them into PDF bytes.
pub fn render_document(
    primary: &str,
    secondary: &str,
    metadata: &DocumentMetadata,
    config: &PdfConfig,
) -> Result<Vec<u8>> {
    render_pdf(&assemble(primary, secondary, metadata), config)
}
