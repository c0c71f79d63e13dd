//! Assembly of the two generated texts into one block sequence.

use crate::ast::{BlockStyle, LayoutBlock, RenderedDocument};
use crate::metadata::DocumentMetadata;
use crate::render::blocks::map_text;
use chrono::NaiveDateTime;

pub const PRIMARY_TITLE: &str = "SITUACIÓN DE APRENDIZAJE";
pub const SUBTITLE: &str = "Formación Profesional Sanitaria - Aragón";
pub const SECONDARY_TITLE: &str = "RÚBRICA DE EVALUACIÓN";
pub const FOOTER_LINES: [&str; 2] = [
    "Gobierno de Aragón - Departamento de Educación, Cultura y Deporte",
    "Generado con Asistente IA para FP Sanitaria",
];

const TITLE_SPACE: f64 = 20.0;
const FOOTER_SPACE: f64 = 30.0;

/// Assemble the block sequence, stamping it with the current local time.
pub fn assemble(primary: &str, secondary: &str, metadata: &DocumentMetadata) -> RenderedDocument {
    assemble_at(primary, secondary, metadata, crate::metadata::now())
}

/// Assemble the block sequence with an explicit generation timestamp.
pub fn assemble_at(
    primary: &str,
    secondary: &str,
    metadata: &DocumentMetadata,
    generated_at: NaiveDateTime,
) -> RenderedDocument {
    let mut blocks = vec![
        LayoutBlock::Title(PRIMARY_TITLE.to_string()),
        LayoutBlock::Heading {
            text: SUBTITLE.to_string(),
            style: BlockStyle::Subtitle,
        },
        LayoutBlock::Spacer(TITLE_SPACE),
        LayoutBlock::MetadataTable(metadata.table_rows(generated_at)),
        LayoutBlock::Spacer(TITLE_SPACE),
    ];

    map_text(primary, &mut blocks);

    blocks.push(LayoutBlock::PageBreak);
    blocks.push(LayoutBlock::Title(SECONDARY_TITLE.to_string()));
    blocks.push(LayoutBlock::Spacer(TITLE_SPACE));

    map_text(secondary, &mut blocks);

    blocks.push(LayoutBlock::Spacer(FOOTER_SPACE));
    blocks.push(LayoutBlock::Footer(
        FOOTER_LINES.iter().map(|l| l.to_string()).collect(),
    ));

    log::debug!("assembled {} layout blocks", blocks.len());

    RenderedDocument { blocks }
}
