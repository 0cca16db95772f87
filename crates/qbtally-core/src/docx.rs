//! DOCX paragraph reading and answer extraction
//!
//! DOCX files are ZIP archives; the body content lives in
//! `word/document.xml`. Parsed with a streaming XML reader rather than
//! a document model: `w:p` delimits a paragraph, `w:t` carries run
//! text, `w:br`/`w:cr` are hard line breaks inside a paragraph and
//! `w:tab` is a tab stop. A paragraph with hard breaks therefore comes
//! back as one string with embedded `'\n'` characters, which is exactly
//! what the docx answer rule needs.

use crate::error::Result;
use crate::extract;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Extract the answer strings from one docx file.
pub fn extract_answers(path: &Path) -> Result<Vec<String>> {
    let paragraphs = read_paragraphs(path)?;
    let answers = extract::paragraph_answers(&paragraphs);
    tracing::debug!(
        "{}: {} paragraphs, {} answer lines",
        path.display(),
        paragraphs.len(),
        answers.len()
    );
    Ok(answers)
}

/// Read the paragraph sequence of a docx file.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    parse_paragraphs(&xml)
}

fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // w:p can nest (textboxes); nested content flattens into the
    // enclosing paragraph.
    let mut depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    if depth == 0 {
                        current.clear();
                    }
                    depth += 1;
                }
                b"w:t" if depth > 0 => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:br" | b"w:cr" if depth > 0 => current.push('\n'),
                b"w:tab" if depth > 0 => current.push('\t'),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
