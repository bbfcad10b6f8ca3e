//! PDF Document Export
//!
//! Export runs in two steps. `layout` turns a report into a flat list of
//! blocks (cover, property table, designation, one subsection per strategy,
//! footer). `render` writes those blocks onto Letter pages with printpdf,
//! breaking pages as the cursor reaches the bottom margin.
//!
//! Strategy images are best effort: an image that cannot be opened or decoded
//! is replaced by a placeholder note and reported in
//! [`ExportedDocument::skipped_images`].

use std::path::{Path, PathBuf};

use printpdf::image_crate::{self, GenericImageView};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Rgb,
};

use crate::error::{ClimateError, Result};
use crate::report::{Report, REPORT_TITLE};

// US Letter, 0.5" margins
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 12.7;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size
const GLYPH_WIDTH: f32 = 0.5;
const LEADING: f32 = 1.35;

// Images are fitted into a 4" x 3" box
const IMAGE_BOX_WIDTH: f32 = 101.6;
const IMAGE_BOX_HEIGHT: f32 = 76.2;
const IMAGE_DPI: f32 = 300.0;

const TABLE_LABEL_WIDTH: f32 = 50.8;

const TITLE_SIZE: f32 = 28.0;
const HEADING_SIZE: f32 = 18.0;
const SUBHEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 10.0;

pub const IMAGE_PLACEHOLDER: &str = "[Image not available]";
pub const CLOSING_NOTE: &str = "This report provides climate-specific design strategies for sustainable \
     and energy-efficient buildings. For more information, visit the Climate Zone Finder dashboard.";

const TITLE_COLOR: &str = "#02a0c5";
const HEADING_COLOR: &str = "#1f1f1f";
const SUBHEADING_COLOR: &str = "#333333";
const BODY_COLOR: &str = "#000000";

/// Layout unit
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    /// Strategy heading drawn in the catalog entry's accent color
    Subheading { text: String, color: String },
    Paragraph(String),
    /// Italic body text
    Note(String),
    /// Two-column property table; the first row is the header
    Table(Vec<(String, String)>),
    Image(PathBuf),
    /// Vertical gap in mm
    Spacer(f32),
    PageBreak,
}

/// Rendered document plus what could not be embedded
#[derive(Debug)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
    /// One `ClimateError::ImageEmbed` per strategy image that was replaced
    pub skipped_images: Vec<ClimateError>,
}

/// Render a report to PDF.
///
/// `image_root` is joined with each strategy's `image_ref`.
pub fn export_document(report: &Report, image_root: &Path) -> Result<ExportedDocument> {
    let blocks = layout(report, image_root);
    let (bytes, skipped_images) = render(&blocks, REPORT_TITLE)?;

    tracing::info!(
        "Exported report for {} ({} bytes, {} images skipped)",
        report.location,
        bytes.len(),
        skipped_images.len()
    );

    Ok(ExportedDocument {
        bytes,
        file_name: report.file_name(),
        skipped_images,
    })
}

/// Document structure for a report
pub fn layout(report: &Report, image_root: &Path) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title(REPORT_TITLE.to_string()),
        Block::Paragraph(format!("Generated: {}", report.generated_display())),
        Block::Paragraph(format!("Standard: {}", report.standard.display_name())),
        Block::Spacer(5.0),
        Block::Heading("Project Information".to_string()),
    ];

    let mut table = vec![("Property".to_string(), "Value".to_string())];
    table.extend(
        report
            .property_rows()
            .into_iter()
            .map(|(label, value)| (label.to_string(), value)),
    );
    blocks.push(Block::Table(table));
    blocks.push(Block::Spacer(8.0));

    blocks.push(Block::Heading("Climate Zone Designation".to_string()));
    blocks.push(Block::Paragraph(report.designation_text()));
    blocks.push(Block::Spacer(8.0));

    if report.has_strategies() {
        blocks.push(Block::Heading(format!(
            "Design Strategies: {}",
            report.strategy_heading()
        )));
    }

    let accent = report.strategy_accent.unwrap_or(SUBHEADING_COLOR);
    for strategy in &report.strategies {
        blocks.push(Block::Subheading {
            text: strategy.name.to_string(),
            color: accent.to_string(),
        });
        blocks.push(Block::Image(image_root.join(strategy.image_ref)));
        blocks.push(Block::Paragraph(strategy.description.to_string()));
        blocks.push(Block::Spacer(8.0));
    }

    blocks.push(Block::PageBreak);
    blocks.push(Block::Paragraph(format!(
        "Report Generated: {}",
        report.generated_display()
    )));
    blocks.push(Block::Paragraph(format!(
        "Classification Standard: {}",
        report.standard.display_name()
    )));
    blocks.push(Block::Spacer(4.0));
    blocks.push(Block::Note(CLOSING_NOTE.to_string()));

    blocks
}

/// Write blocks to PDF bytes. Image failures are collected, never returned.
pub fn render(blocks: &[Block], title: &str) -> Result<(Vec<u8>, Vec<ClimateError>)> {
    let mut writer = PageWriter::new(title)?;
    let mut skipped = Vec::new();

    for block in blocks {
        match block {
            Block::Title(text) => writer.centered(text, TITLE_SIZE, FontStyle::Bold, TITLE_COLOR),
            Block::Heading(text) => {
                writer.space(3.0);
                writer.wrapped(text, HEADING_SIZE, FontStyle::Bold, HEADING_COLOR);
                writer.space(2.0);
            }
            Block::Subheading { text, color } => {
                writer.space(2.0);
                writer.wrapped(text, SUBHEADING_SIZE, FontStyle::Bold, color);
                writer.space(1.5);
            }
            Block::Paragraph(text) => {
                writer.wrapped(text, BODY_SIZE, FontStyle::Regular, BODY_COLOR);
                writer.space(2.0);
            }
            Block::Note(text) => {
                writer.wrapped(text, BODY_SIZE, FontStyle::Italic, BODY_COLOR);
                writer.space(2.0);
            }
            Block::Table(rows) => writer.table(rows),
            Block::Image(path) => {
                if let Err(err) = writer.image(path) {
                    tracing::warn!("{}", err);
                    writer.wrapped(IMAGE_PLACEHOLDER, BODY_SIZE, FontStyle::Regular, BODY_COLOR);
                    writer.space(2.0);
                    skipped.push(err);
                }
            }
            Block::Spacer(mm) => writer.space(*mm),
            Block::PageBreak => writer.new_page(),
        }
    }

    Ok((writer.finish()?, skipped))
}

#[derive(Debug, Clone, Copy)]
enum FontStyle {
    Regular,
    Bold,
    Italic,
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    /// Distance of the next line's top from the page bottom, in mm
    cursor: f32,
    pages: usize,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let layer = doc.get_page(page).get_layer(layer);

        let regular = builtin_font(&doc, BuiltinFont::Helvetica)?;
        let bold = builtin_font(&doc, BuiltinFont::HelveticaBold)?;
        let italic = builtin_font(&doc, BuiltinFont::HelveticaOblique)?;

        Ok(Self {
            doc,
            layer,
            cursor: PAGE_HEIGHT - MARGIN,
            pages: 1,
            regular,
            bold,
            italic,
        })
    }

    fn font(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    /// Break the page unless `height` mm still fit above the bottom margin
    fn ensure_space(&mut self, height: f32) {
        if self.cursor - height < MARGIN {
            self.new_page();
        }
    }

    fn space(&mut self, mm: f32) {
        self.cursor = (self.cursor - mm).max(MARGIN);
    }

    fn line(&mut self, text: &str, size: f32, style: FontStyle, color: &str, x: f32) {
        let height = size * PT_TO_MM * LEADING;
        self.ensure_space(height);
        self.cursor -= height;
        self.layer.set_fill_color(Color::Rgb(hex_to_rgb(color)));
        self.layer
            .use_text(text, size, Mm(x), Mm(self.cursor), self.font(style));
    }

    fn wrapped(&mut self, text: &str, size: f32, style: FontStyle, color: &str) {
        for line in wrap_text(text, chars_per_line(CONTENT_WIDTH, size)) {
            self.line(&line, size, style, color, MARGIN);
        }
    }

    fn centered(&mut self, text: &str, size: f32, style: FontStyle, color: &str) {
        let width = text.chars().count() as f32 * size * PT_TO_MM * GLYPH_WIDTH * 1.1;
        let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN);
        self.line(text, size, style, color, x);
        self.space(4.0);
    }

    fn table(&mut self, rows: &[(String, String)]) {
        let value_x = MARGIN + TABLE_LABEL_WIDTH;
        let value_chars = chars_per_line(CONTENT_WIDTH - TABLE_LABEL_WIDTH, TABLE_SIZE);

        for (idx, (label, value)) in rows.iter().enumerate() {
            let (label_style, value_style, color) = if idx == 0 {
                (FontStyle::Bold, FontStyle::Bold, TITLE_COLOR)
            } else {
                (FontStyle::Bold, FontStyle::Regular, BODY_COLOR)
            };

            let lines = wrap_text(value, value_chars);
            let row_height = lines.len().max(1) as f32 * TABLE_SIZE * PT_TO_MM * LEADING;
            self.ensure_space(row_height);

            let top = self.cursor;
            self.line(label, TABLE_SIZE, label_style, color, MARGIN);
            self.cursor = top;
            for line in &lines {
                self.line(line, TABLE_SIZE, value_style, color, value_x);
            }
            self.cursor = top - row_height;
            self.space(1.5);
        }
    }

    fn image(&mut self, path: &Path) -> Result<()> {
        let embed_error = |reason: String| ClimateError::ImageEmbed {
            path: path.to_path_buf(),
            reason,
        };

        let picture = image_crate::open(path).map_err(|e| embed_error(e.to_string()))?;
        let (width_px, height_px) = picture.dimensions();
        if width_px == 0 || height_px == 0 {
            return Err(embed_error("image has no pixels".to_string()));
        }

        let natural_width = width_px as f32 / IMAGE_DPI * 25.4;
        let natural_height = height_px as f32 / IMAGE_DPI * 25.4;
        let scale = (IMAGE_BOX_WIDTH / natural_width).min(IMAGE_BOX_HEIGHT / natural_height);
        let (width, height) = (natural_width * scale, natural_height * scale);

        self.ensure_space(height + 4.0);
        self.cursor -= height;

        Image::from_dynamic_image(&picture).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_WIDTH - width) / 2.0)),
                translate_y: Some(Mm(self.cursor)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );

        self.space(4.0);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let PageWriter { doc, layer, .. } = self;
        drop(layer);
        doc.save_to_bytes().map_err(|e| ClimateError::Document {
            reason: format!("{:?}", e),
        })
    }
}

fn builtin_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font).map_err(|e| ClimateError::Document {
        reason: format!("{:?}", e),
    })
}

fn chars_per_line(width_mm: f32, size: f32) -> usize {
    ((width_mm / (size * PT_TO_MM * GLYPH_WIDTH)) as usize).max(10)
}

/// Greedy word wrap on whitespace; words longer than a line are split
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let head: String = word.chars().take(max_chars).collect();
                word = word.chars().skip(max_chars).collect();
                lines.push(head);
            }

            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// `#rrggbb` to printpdf color; malformed input falls back to black
fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(|v| v as f32 / 255.0)
            .unwrap_or(0.0)
    };

    if digits.len() != 6 {
        return Rgb::new(0.0, 0.0, 0.0, None);
    }
    Rgb::new(channel(0..2), channel(2..4), channel(4..6), None)
}
