//! Plain-text PDF rendering.
//!
//! Single built-in font, single size, A4 pages. Built-in PDF fonts only
//! cover Latin-1, so anything outside that range is replaced before layout.

use anyhow::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const FONT_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 6.0;
// Fits 12pt Helvetica into the printable width for average prose.
const MAX_LINE_CHARS: usize = 88;

pub const ATTACHMENT_FILENAME: &str = "summary.pdf";

/// Render `text` as a PDF document and return its bytes.
pub fn render(text: &str) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("summary", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "text");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("failed to load built-in font")?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for paragraph in latin1_lossy(text).lines() {
        for line in wrap_line(paragraph, MAX_LINE_CHARS) {
            if y < MARGIN_MM {
                let (page, page_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "text");
                layer = doc.get_page(page).get_layer(page_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            y -= LINE_HEIGHT_MM;
        }
    }

    doc.save_to_bytes().context("failed to serialize PDF")
}

/// Replace every character outside the Latin-1 range with `?`, keeping
/// line structure intact.
fn latin1_lossy(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

/// Greedy word wrap; words longer than `max_chars` are hard-broken.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    if line.trim().is_empty() {
        // Blank paragraph still consumes a line.
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let cut = word
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..cut].to_string());
            word = &word[cut..];
        }
        let word_len = word.chars().count();
        let needed = if current.is_empty() {
            word_len
        } else {
            current.chars().count() + 1 + word_len
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
