//! PDF paginator for assembled documents.
//!
//! Lays the block sequence out on fixed-size pages using the `genpdf` crate.
//! A fresh `genpdf::Document` is built for every call, so concurrent renders
//! share nothing but the configuration.

use crate::ast::{
    BlockStyle, LayoutBlock, MetadataRow, RenderedDocument, Rgb, TextAlign, TextStyle,
};
use crate::error::{RenderError, Result};
use genpdf::elements::{Break, FrameCellDecorator, PageBreak, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Element, Margins, SimplePageDecorator};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for PDF rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Title stored in the PDF metadata.
    pub title: String,
    /// Paper size: "letter" or "a4".
    pub paper_size: PaperSize,
    /// Default font size in points, used as the base for spacer heights.
    pub font_size: u8,
    /// Line height multiplier.
    pub line_height: f64,
    /// Page margins in millimeters.
    pub margins: PageMargins,
    pub fonts: FontConfig,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            title: "Situación de aprendizaje".to_string(),
            paper_size: PaperSize::A4,
            font_size: 10,
            line_height: 1.2,
            margins: PageMargins::default(),
            fonts: FontConfig::default(),
        }
    }
}

/// Paper size options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    Letter,
    #[default]
    A4,
}

impl PaperSize {
    fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (215.9, 279.4), // 8.5" x 11" in mm
            PaperSize::A4 => (210.0, 297.0),
        }
    }
}

/// Page margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: 25.4, // 1 inch
            bottom: 6.35,
            left: 25.4,
            right: 25.4,
        }
    }
}

/// Where to look for TrueType fonts.
///
/// `genpdf` expects `<family>-Regular.ttf`, `-Bold`, `-Italic` and
/// `-BoldItalic` in the same directory. Families that do not follow that
/// naming are listed file by file in `files`, tried after `search_dirs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    /// Directories tried in order.
    pub search_dirs: Vec<PathBuf>,
    /// Explicit font files, tried in order.
    pub files: Vec<FontFiles>,
}

/// One font family named file by file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontFiles {
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub italic: PathBuf,
    pub bold_italic: PathBuf,
}

impl FontFiles {
    /// DejaVu Sans as shipped in `dir`.
    pub fn dejavu_sans(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regular: dir.join("DejaVuSans.ttf"),
            bold: dir.join("DejaVuSans-Bold.ttf"),
            italic: dir.join("DejaVuSans-Oblique.ttf"),
            bold_italic: dir.join("DejaVuSans-BoldOblique.ttf"),
        }
    }

    fn load(&self) -> std::result::Result<FontFamily<FontData>, genpdf::error::Error> {
        Ok(FontFamily {
            regular: FontData::load(&self.regular, None)?,
            bold: FontData::load(&self.bold, None)?,
            italic: FontData::load(&self.italic, None)?,
            bold_italic: FontData::load(&self.bold_italic, None)?,
        })
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "LiberationSans".to_string(),
            search_dirs: [
                "/usr/share/fonts/liberation",
                "/usr/share/fonts/truetype/liberation",
                "/usr/share/fonts/truetype/liberation2",
                "/usr/share/fonts/TTF",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            files: [
                "/usr/share/fonts/truetype/dejavu",
                "/usr/share/fonts/dejavu-sans-fonts",
                "/usr/share/fonts/dejavu",
                "/usr/share/fonts/TTF",
            ]
            .into_iter()
            .map(FontFiles::dejavu_sans)
            .collect(),
        }
    }
}

impl FontConfig {
    fn load(&self) -> Result<FontFamily<FontData>> {
        let mut last_error = String::from("no fonts configured");

        for dir in &self.search_dirs {
            match genpdf::fonts::from_files(dir, &self.family, None) {
                Ok(family) => {
                    log::debug!("loaded font family {} from {}", self.family, dir.display());
                    return Ok(family);
                }
                Err(e) => {
                    log::debug!("font family {} not in {}: {}", self.family, dir.display(), e);
                    last_error = format!("{}: {}", dir.display(), e);
                }
            }
        }

        for files in &self.files {
            match files.load() {
                Ok(family) => {
                    log::debug!("loaded fonts from {}", files.regular.display());
                    return Ok(family);
                }
                Err(e) => {
                    log::debug!("fonts not loaded from {}: {}", files.regular.display(), e);
                    last_error = format!("{}: {}", files.regular.display(), e);
                }
            }
        }

        Err(RenderError::Fonts(format!(
            "{} not found (install Liberation or DejaVu fonts, or set fonts.search_dirs \
             or fonts.files); last error: {}",
            self.family, last_error
        ))
        .into())
    }
}

/// Render an assembled document to PDF bytes.
pub fn render_pdf(doc: &RenderedDocument, config: &PdfConfig) -> Result<Vec<u8>> {
    let renderer = PdfRenderer::new(doc, config);
    renderer.render()
}

/// Render an assembled document to a PDF file.
pub fn render_pdf_to_file(
    doc: &RenderedDocument,
    config: &PdfConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = render_pdf(doc, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

struct PdfRenderer<'a> {
    doc: &'a RenderedDocument,
    config: &'a PdfConfig,
}

impl<'a> PdfRenderer<'a> {
    fn new(doc: &'a RenderedDocument, config: &'a PdfConfig) -> Self {
        Self { doc, config }
    }

    fn render(self) -> Result<Vec<u8>> {
        let font_family = self.config.fonts.load()?;
        let (width, height) = self.config.paper_size.dimensions();

        let mut pdf = Document::new(font_family);
        pdf.set_title(self.config.title.clone());
        pdf.set_paper_size(genpdf::Size::new(width, height));

        let margins = self.config.margins;
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(
            margins.top,
            margins.right,
            margins.bottom,
            margins.left,
        ));
        pdf.set_page_decorator(decorator);

        pdf.set_font_size(self.config.font_size);
        pdf.set_line_spacing(self.config.line_height);

        for block in &self.doc.blocks {
            self.render_block(&mut pdf, block)?;
        }

        let mut buffer = Vec::new();
        pdf.render(&mut buffer)
            .map_err(|e| RenderError::Engine(e.to_string()))?;

        log::info!(
            "rendered {} blocks into {} bytes of PDF",
            self.doc.blocks.len(),
            buffer.len()
        );
        Ok(buffer)
    }

    fn render_block(&self, pdf: &mut Document, block: &LayoutBlock) -> Result<()> {
        match block {
            LayoutBlock::Title(text) => self.push_text(pdf, text, BlockStyle::Title),
            LayoutBlock::Heading { text, style } | LayoutBlock::Paragraph { text, style } => {
                self.push_text(pdf, text, *style)
            }
            LayoutBlock::Spacer(points) => pdf.push(Break::new(self.lines(*points))),
            LayoutBlock::MetadataTable(rows) => self.render_table(pdf, rows)?,
            LayoutBlock::PageBreak => pdf.push(PageBreak::new()),
            LayoutBlock::Footer(lines) => {
                for line in lines {
                    self.push_text(pdf, line, BlockStyle::Footer);
                }
            }
        }

        Ok(())
    }

    fn push_text(&self, pdf: &mut Document, text: &str, style: BlockStyle) {
        let text_style = style.text_style();

        let mut paragraph = Paragraph::default();
        paragraph.push_styled(text.to_string(), pdf_style(&text_style));
        paragraph.set_alignment(pdf_alignment(text_style.align));
        pdf.push(paragraph);

        if text_style.space_after > 0.0 {
            pdf.push(Break::new(self.lines(text_style.space_after)));
        }
    }

    fn render_table(&self, pdf: &mut Document, rows: &[MetadataRow]) -> Result<()> {
        let label_style = Style::new()
            .bold()
            .with_font_size(9)
            .with_color(rgb(Rgb::SLATE));
        let value_style = Style::new().with_font_size(9);

        let mut table = TableLayout::new(vec![2, 4]);
        table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        for row in rows {
            let mut label = Paragraph::default();
            label.push_styled(row.label.clone(), label_style.clone());
            let mut value = Paragraph::default();
            value.push_styled(row.value.clone(), value_style.clone());

            table
                .row()
                .element(label.padded(Margins::trbl(1.0, 2.0, 1.0, 2.0)))
                .element(value.padded(Margins::trbl(1.0, 2.0, 1.0, 2.0)))
                .push()
                .map_err(|e| RenderError::Layout(format!("metadata row {:?}: {}", row.label, e)))?;
        }

        pdf.push(table);
        Ok(())
    }

    /// Convert a height in points to lines of the default style.
    fn lines(&self, points: f64) -> f64 {
        points / (f64::from(self.config.font_size) * self.config.line_height)
    }
}

fn pdf_style(style: &TextStyle) -> Style {
    let mut pdf_style = Style::new().with_font_size(style.font_size);
    if style.bold {
        pdf_style = pdf_style.bold();
    }
    if let Some(color) = style.color {
        pdf_style = pdf_style.with_color(rgb(color));
    }
    pdf_style
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

// genpdf has no justified alignment, so justified text is set flush left.
fn pdf_alignment(align: TextAlign) -> Alignment {
    match align {
        TextAlign::Left | TextAlign::Justified => Alignment::Left,
        TextAlign::Center => Alignment::Center,
    }
}
