//! Mapping of classified lines onto layout blocks.

use crate::ast::{BlockStyle, LayoutBlock, LineClass};
use crate::parser::classify_text;

/// Height of the spacer emitted for a blank line, in points.
pub const BLANK_LINE_SPACE: f64 = 6.0;
/// Height of the spacer emitted after a `#` heading, in points.
pub const SECTION_SPACE: f64 = 12.0;
/// Glyph prepended to bullet items.
pub const BULLET: &str = "•";

/// Append the blocks for one classified line to `out`.
pub fn map_line(class: &LineClass, out: &mut Vec<LayoutBlock>) {
    match class {
        LineClass::BlankLine => out.push(LayoutBlock::Spacer(BLANK_LINE_SPACE)),
        LineClass::Heading1(text) => {
            out.push(heading(text, BlockStyle::Section));
            out.push(LayoutBlock::Spacer(SECTION_SPACE));
        }
        LineClass::Heading2(text) => out.push(heading(text, BlockStyle::Subsection)),
        LineClass::Heading3(text) => out.push(heading(text, BlockStyle::Minor)),
        LineClass::BulletItem(text) => {
            out.push(paragraph(format!("{BULLET} {text}"), BlockStyle::Bullet))
        }
        LineClass::BoldLine(text) => out.push(paragraph(text.clone(), BlockStyle::BodyBold)),
        LineClass::PlainText(text) => {
            if !text.is_empty() {
                out.push(paragraph(text.clone(), BlockStyle::Body));
            }
        }
    }
}

/// Classify `text` line by line and append the resulting blocks to `out`.
pub fn map_text(text: &str, out: &mut Vec<LayoutBlock>) {
    for class in classify_text(text) {
        map_line(&class, out);
    }
}

fn heading(text: &str, style: BlockStyle) -> LayoutBlock {
    LayoutBlock::Heading {
        text: text.to_string(),
        style,
    }
}

fn paragraph(text: String, style: BlockStyle) -> LayoutBlock {
    LayoutBlock::Paragraph { text, style }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::classify_line;
    use pretty_assertions::assert_eq;

    fn blocks_for(line: &str) -> Vec<LayoutBlock> {
        let mut out = Vec::new();
        map_line(&classify_line(line), &mut out);
        out
    }

    #[test]
    fn test_heading2_scenario() {
        assert_eq!(
            blocks_for("## Contenidos"),
            vec![LayoutBlock::Heading {
                text: "Contenidos".into(),
                style: BlockStyle::Subsection,
            }]
        );
    }

    #[test]
    fn test_bullet_scenario() {
        assert_eq!(
            blocks_for("- Aplica técnicas básicas"),
            vec![LayoutBlock::Paragraph {
                text: "• Aplica técnicas básicas".into(),
                style: BlockStyle::Bullet,
            }]
        );
    }

    #[test]
    fn test_bold_scenario() {
        assert_eq!(
            blocks_for("**Importante**"),
            vec![LayoutBlock::Paragraph {
                text: "Importante".into(),
                style: BlockStyle::BodyBold,
            }]
        );
    }

    #[test]
    fn test_heading1_adds_spacer() {
        assert_eq!(
            blocks_for("# Evaluación"),
            vec![
                LayoutBlock::Heading {
                    text: "Evaluación".into(),
                    style: BlockStyle::Section,
                },
                LayoutBlock::Spacer(SECTION_SPACE),
            ]
        );
    }

    #[test]
    fn test_heading3_style() {
        assert_eq!(
            blocks_for("### Fase 2"),
            vec![LayoutBlock::Heading {
                text: "Fase 2".into(),
                style: BlockStyle::Minor,
            }]
        );
    }

    #[test]
    fn test_blank_line_is_single_spacer() {
        assert_eq!(blocks_for("   "), vec![LayoutBlock::Spacer(BLANK_LINE_SPACE)]);
    }

    #[test]
    fn test_empty_plain_text_emits_nothing() {
        let mut out = Vec::new();
        map_line(&LineClass::PlainText(String::new()), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_line_yields_blocks() {
        let text = "# T\n\n## S\n### M\n- b\n**x**\n****\nplain\n\t\n";
        for line in text.split('\n') {
            let blocks = blocks_for(line);
            let text_blocks = blocks.iter().filter(|b| b.is_text()).count();
            if line.trim().is_empty() {
                assert_eq!(blocks, vec![LayoutBlock::Spacer(BLANK_LINE_SPACE)]);
            } else {
                assert_eq!(text_blocks, 1, "line {line:?} produced {blocks:?}");
            }
        }
    }

    #[test]
    fn test_map_text_order() {
        let mut out = Vec::new();
        map_text("## A\nb", &mut out);
        assert_eq!(
            out,
            vec![
                LayoutBlock::Heading {
                    text: "A".into(),
                    style: BlockStyle::Subsection,
                },
                LayoutBlock::Paragraph {
                    text: "b".into(),
                    style: BlockStyle::Body,
                },
            ]
        );
    }

    #[test]
    fn test_style_table() {
        let section = BlockStyle::Section.text_style();
        let subsection = BlockStyle::Subsection.text_style();
        let minor = BlockStyle::Minor.text_style();
        let body = BlockStyle::Body.text_style();

        assert!(section.font_size > subsection.font_size);
        assert!(section.color.is_some());
        assert!(minor.bold);
        assert_eq!(minor.font_size, 11);
        assert_eq!(body.font_size, 10);
        assert!(BlockStyle::BodyBold.text_style().bold);
    }
}
