//! Line classes and layout blocks produced while rendering generated text.

/// Classification of a single stripped source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `# text`
    Heading1(String),
    /// `## text`
    Heading2(String),
    /// `### text`
    Heading3(String),
    /// `- text`
    BulletItem(String),
    /// `**text**` spanning the whole line
    BoldLine(String),
    /// Empty after stripping
    BlankLine,
    /// Anything else, kept verbatim
    PlainText(String),
}

impl LineClass {
    /// The text carried by the line, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            LineClass::Heading1(t)
            | LineClass::Heading2(t)
            | LineClass::Heading3(t)
            | LineClass::BulletItem(t)
            | LineClass::BoldLine(t)
            | LineClass::PlainText(t) => Some(t),
            LineClass::BlankLine => None,
        }
    }
}

/// Named styles of the fixed style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Document titles.
    Title,
    /// The line under the primary title.
    Subtitle,
    /// `#` headings.
    Section,
    /// `##` headings.
    Subsection,
    /// `###` headings.
    Minor,
    Body,
    BodyBold,
    Bullet,
    Footer,
}

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Justified,
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Accent used by document titles (`#1f77b4`).
    pub const ACCENT: Rgb = Rgb(0x1f, 0x77, 0xb4);
    /// Dark slate used by headings and table labels (`#2c3e50`).
    pub const SLATE: Rgb = Rgb(0x2c, 0x3e, 0x50);
    /// Muted grey used by the footer (`#7f8c8d`).
    pub const MUTED: Rgb = Rgb(0x7f, 0x8c, 0x8d);
}

/// Concrete text attributes resolved from a [`BlockStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: u8,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub align: TextAlign,
    /// Vertical space after the block, in points.
    pub space_after: f64,
}

impl BlockStyle {
    /// Look up the attributes of this style.
    pub fn text_style(self) -> TextStyle {
        let body = TextStyle {
            font_size: 10,
            bold: false,
            color: None,
            align: TextAlign::Justified,
            space_after: 6.0,
        };

        match self {
            BlockStyle::Title => TextStyle {
                font_size: 18,
                bold: true,
                color: Some(Rgb::ACCENT),
                align: TextAlign::Center,
                space_after: 30.0,
            },
            BlockStyle::Subtitle | BlockStyle::Section => TextStyle {
                font_size: 14,
                bold: true,
                color: Some(Rgb::SLATE),
                align: TextAlign::Left,
                space_after: 12.0,
            },
            BlockStyle::Subsection => TextStyle {
                font_size: 12,
                bold: true,
                color: Some(Rgb::SLATE),
                align: TextAlign::Left,
                space_after: 8.0,
            },
            BlockStyle::Minor => TextStyle {
                font_size: 11,
                bold: true,
                ..body
            },
            BlockStyle::Body | BlockStyle::Bullet => body,
            BlockStyle::BodyBold => TextStyle { bold: true, ..body },
            BlockStyle::Footer => TextStyle {
                font_size: 8,
                bold: false,
                color: Some(Rgb::MUTED),
                align: TextAlign::Center,
                space_after: 0.0,
            },
        }
    }
}

/// One row of the metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: String,
    pub value: String,
}

impl MetadataRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A typed, styled element ready for page layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutBlock {
    /// A document title (primary or secondary).
    Title(String),
    /// A heading in one of the heading styles.
    Heading { text: String, style: BlockStyle },
    /// A paragraph in one of the paragraph styles.
    Paragraph { text: String, style: BlockStyle },
    /// Vertical space, in points.
    Spacer(f64),
    /// Two-column key/value table.
    MetadataTable(Vec<MetadataRow>),
    /// Forces the following blocks onto a new page.
    PageBreak,
    /// Centered closing lines.
    Footer(Vec<String>),
}

impl LayoutBlock {
    /// Whether this block carries text (as opposed to spacing or structure).
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            LayoutBlock::Title(_) | LayoutBlock::Heading { .. } | LayoutBlock::Paragraph { .. }
        )
    }
}

/// The complete block sequence of one generated document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedDocument {
    pub blocks: Vec<LayoutBlock>,
}

impl RenderedDocument {
    /// Number of forced page breaks in the sequence.
    pub fn page_breaks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, LayoutBlock::PageBreak))
            .count()
    }

    /// Titles in document order.
    pub fn titles(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                LayoutBlock::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}
