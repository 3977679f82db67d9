//! PDF summary rendering
//!
//! Writes the selected sentences into a new paginated PDF through `lopdf`:
//! a title line, a "Topic:" line, then one bullet per sentence,
//! word-wrapped with a hanging indent and continued onto fresh pages as
//! needed. Text is emitted as Helvetica with WinAnsi encoding; characters
//! outside that encoding render as `?`, but sentence text is never
//! truncated or re-ordered.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::traits::SummaryRenderer;
use crate::types::{SummarizeConfig, Summary};

/// Bullet glyph prefixing the first line of each sentence.
const BULLET_PREFIX: &str = "\u{2022} ";
/// Hanging indent for continuation lines of a wrapped sentence.
const BULLET_INDENT: &str = "  ";

/// Page geometry and type sizes for the rendered document.
///
/// Defaults match a US-letter page: a 16 pt title at y = 750, the topic
/// line at y = 730, and 12 pt body text from y = 700 with 15 pt leading
/// inside a 50 pt margin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
    /// Margin on all sides, in points.
    pub margin: f32,
    /// Title font size.
    pub title_size: f32,
    /// Body font size.
    pub body_size: f32,
    /// Vertical distance between body lines.
    pub leading: f32,
    /// Baseline of the title on the first page.
    pub title_y: f32,
    /// Baseline of the topic line on the first page.
    pub topic_y: f32,
    /// Baseline of the first body line on the first page.
    pub body_start_y: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 50.0,
            title_size: 16.0,
            body_size: 12.0,
            leading: 15.0,
            title_y: 750.0,
            topic_y: 730.0,
            body_start_y: 700.0,
        }
    }
}

impl PageLayout {
    /// Rough per-line character budget for the body font. Helvetica
    /// averages about half the point size per glyph.
    fn max_line_chars(&self) -> usize {
        let content_width = self.width - 2.0 * self.margin;
        (content_width / (self.body_size * 0.5)).floor() as usize
    }

    fn check(&self) -> Result<()> {
        if self.width <= 2.0 * self.margin
            || self.body_start_y <= self.margin
            || self.max_line_chars() <= BULLET_INDENT.len()
        {
            return Err(Error::InvalidParameter(
                "page layout leaves no usable content area".to_string(),
            ));
        }
        Ok(())
    }
}

/// Renders a [`Summary`] into PDF bytes.
#[derive(Debug, Clone, Default)]
pub struct PdfSummaryRenderer {
    layout: PageLayout,
}

impl PdfSummaryRenderer {
    /// Create a renderer with the default page layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl SummaryRenderer for PdfSummaryRenderer {
    fn render(&self, summary: &Summary, cfg: &SummarizeConfig) -> Result<Vec<u8>> {
        self.layout.check()?;
        let layout = &self.layout;
        let budget = layout.max_line_chars() - BULLET_INDENT.len();

        // First page carries the title block; body lines flow below it and
        // continue onto fresh pages.
        let mut pages: Vec<Vec<Operation>> = Vec::new();
        let mut ops = Vec::new();
        ops.extend(text_ops(layout.margin, layout.title_y, layout.title_size, &cfg.title));
        ops.extend(text_ops(
            layout.margin,
            layout.topic_y,
            layout.body_size,
            &format!("Topic: {}", summary.topic),
        ));

        let mut y = layout.body_start_y;
        for text in summary.texts() {
            for (i, line) in wrap_line(text, budget).iter().enumerate() {
                if y < layout.margin {
                    pages.push(std::mem::take(&mut ops));
                    y = layout.height - layout.margin;
                }
                let prefixed = if i == 0 {
                    format!("{BULLET_PREFIX}{line}")
                } else {
                    format!("{BULLET_INDENT}{line}")
                };
                ops.extend(text_ops(layout.margin, y, layout.body_size, &prefixed));
                y -= layout.leading;
            }
        }
        pages.push(ops);

        build_document(layout, pages)
    }
}

/// Operations for one line of text at (x, y).
fn text_ops(x: f32, y: f32, size: f32, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Real(size)]),
        Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Assemble per-page content streams into a finished PDF.
fn build_document(layout: &PageLayout, pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content.encode().map_err(|e| Error::Render(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(layout.width),
                Object::Real(layout.height),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| Error::Render(e.to_string()))?;
    Ok(out)
}

/// Greedy whitespace wrap. Words longer than the budget are split hard so
/// no output line ever exceeds it.
fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for word in text.split_whitespace() {
        for chunk in split_chunks(word, max_chars) {
            let chunk_len = chunk.chars().count();
            let needed = if current.is_empty() { chunk_len } else { chunk_len + 1 };
            if count + needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                count = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                count += 1;
            }
            current.push_str(chunk);
            count += chunk_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a single word into chunks of at most `max_chars` characters.
fn split_chunks(word: &str, max_chars: usize) -> Vec<&str> {
    if word.chars().count() <= max_chars {
        return vec![word];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (i, _) in word.char_indices() {
        if count == max_chars {
            chunks.push(&word[start..i]);
            start = i;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&word[start..]);
    chunks
}

/// Encode text for the Helvetica/WinAnsi surface; unmappable characters
/// become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
