//! # fp-situacion
//!
//! Turns the markdown-like text returned by a completion provider into a
//! paginated PDF for FP Sanitaria learning situations.
//!
//! ## Pipeline
//!
//! 1. [`parser`] classifies each line of the generated text into a
//!    [`LineClass`].
//! 2. [`render::blocks`] maps each classified line to [`LayoutBlock`]s with a
//!    fixed visual style.
//! 3. [`render::document`] wraps both texts with the title, the metadata
//!    table, the page break, the secondary title and the footer.
//! 4. [`render::pdf`] paginates the blocks into PDF bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use fp_situacion::{assemble, DocumentMetadata, LayoutBlock};
//!
//! let metadata = DocumentMetadata {
//!     level: "Grado Medio".into(),
//!     cycle: "Cuidados Auxiliares de Enfermería".into(),
//!     module: "Técnicas básicas de enfermería".into(),
//!     methodology: "Gamificación".into(),
//!     duration: "3-5 sesiones (6-10 horas)".into(),
//! };
//!
//! let doc = assemble("## Objetivos\n- Lavado de manos", "# Rúbrica", &metadata);
//! assert_eq!(doc.page_breaks(), 1);
//! assert!(matches!(doc.blocks[0], LayoutBlock::Title(_)));
//! ```
//!
//! ## Supported syntax
//!
//! | Line (after trimming)  | Result                       |
//! |------------------------|------------------------------|
//! | empty                  | small vertical gap           |
//! | `# text`               | section heading and a gap    |
//! | `## text`              | subsection heading           |
//! | `### text`             | minor heading                |
//! | `- text`               | bullet paragraph             |
//! | `**text**`             | bold paragraph               |
//! | anything else          | justified body paragraph     |
//!
//! Inline emphasis, numbered lists, tables and code blocks are not
//! interpreted; they come through as body text.
//!
//! ## Features
//!
//! - `cli`: builds the `fp-situacion` binary (requires `clap` and `env_logger`)

pub mod ast;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metadata;
pub mod parser;
pub mod provider;
pub mod render;
pub mod session;

// Convenience re-exports
pub use ast::{BlockStyle, LayoutBlock, LineClass, MetadataRow, RenderedDocument};
pub use catalog::{CatalogData, CatalogStore, Level};
pub use config::AppConfig;
pub use error::{ConfigError, Error, GenerationError, RenderError, Result, SelectionError};
pub use metadata::{download_file_name, DocumentMetadata};
pub use parser::{classify_line, classify_text};
pub use provider::{CompletionProvider, GenerationOptions};
pub use render::{
    assemble, assemble_at, map_line, map_text, render_document, render_pdf, PdfConfig,
};
pub use session::{GeneratedTexts, GenerationRequest, Generator, Prompts, Selection};
