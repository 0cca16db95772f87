//! End-to-end pipeline test: scan, extract, tally, report.
//!
//! The docx fixture is written with `zip::ZipWriter` so the test does
//! not depend on binary fixtures or external converters.

use qbtally_core::{extract_file, report, scan_directories, DocFormat, Frequencies};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:r><w:t>This capital hosts the Eiffel Tower. ANSWER: Paris [10 pts]</w:t></w:r></w:p>
<w:p><w:r><w:t>Bonus prompt.</w:t><w:br/><w:t xml:space="preserve">ANSWER: Tokyo</w:t></w:r></w:p>
<w:p><w:r><w:t>For ten points, name this French capital. ANSWER: Paris</w:t></w:r></w:p>
<w:p><w:r><w:t>No marker in this paragraph.</w:t></w:r></w:p>
</w:body>
</w:document>"#;

fn write_docx(path: &Path, document_xml: &str) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

#[test]
fn test_docx_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let packet = dir.path().join("round1");
    fs::create_dir(&packet).unwrap();
    write_docx(&packet.join("quiz.docx"), DOCUMENT_XML);
    fs::write(packet.join("notes.txt"), "ANSWER: ignored").unwrap();

    let missing = dir.path().join("round2");
    let scan = scan_directories(&[packet, missing.clone()]);

    // The missing packet contributes zero documents and a diagnostic
    // entry, not an abort.
    assert_eq!(scan.skipped.len(), 1);
    assert_eq!(scan.skipped[0].path, missing);
    assert_eq!(scan.documents.docx.len(), 1);
    assert!(scan.documents.doc.is_empty());
    assert!(scan.documents.pdf.is_empty());

    let mut frequencies = Frequencies::new();
    let mut observed_lines = 0u64;
    for format in DocFormat::SCAN_ORDER {
        for path in scan.documents.bucket(format) {
            let answers = extract_file(format, path).unwrap();
            observed_lines += answers.len() as u64;
            frequencies.extend(answers);
        }
    }

    // Paris twice (once with the bracket annotation stripped), Tokyo
    // once from the line after the embedded hard break.
    assert_eq!(frequencies.count("Paris"), 2);
    assert_eq!(frequencies.count("Tokyo"), 1);
    assert_eq!(frequencies.total(), observed_lines);
    assert_eq!(frequencies.distinct(), 2);

    let mut out = Vec::new();
    report::write_report(&mut out, &frequencies).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "(Tokyo, 1)");
    assert_eq!(lines[1], "(Paris, 2)");
    assert_eq!(
        lines[2],
        "Extracted 2 different answer lines from 3 questions."
    );
}

#[test]
fn test_unreadable_docx_is_a_per_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("broken.docx");
    fs::write(&bogus, b"not a zip archive").unwrap();

    let result = extract_file(DocFormat::Docx, &bogus);
    assert!(result.is_err());
}

#[test]
fn test_docx_without_document_xml_is_a_per_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.docx");
    let file = File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("word/other.xml", options).unwrap();
    zip.write_all(b"<w:document/>").unwrap();
    zip.finish().unwrap();

    assert!(extract_file(DocFormat::Docx, &path).is_err());
}
