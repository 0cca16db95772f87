//! Answer-line filtering rules
//!
//! Two rules exist because the source formats behave differently:
//! converter text output (pdf, doc) keeps answer markers at the start
//! of their own lines, while docx paragraphs carry surrounding prose
//! and bracketed point-value annotations. The asymmetry (anchored
//! prefix vs contains-anywhere) is deliberate and matches the observed
//! packet corpus.

/// Literal marker that introduces an answer line.
pub const ANSWER_MARKER: &str = "ANSWER:";

/// Strict prefix rule used for converter text output (pdf, doc): only
/// lines that start with the marker qualify. The answer is the trimmed
/// text after the marker.
pub fn prefix_answers(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.strip_prefix(ANSWER_MARKER))
        .map(|rest| rest.trim().to_string())
        .collect()
}

/// docx rule, applied to the paragraph sequence of a document.
///
/// Paragraphs are selected case-insensitively, then split on embedded
/// hard line breaks; a split can surface non-answer lines inside an
/// answer paragraph, so sub-lines are re-filtered (case-sensitively)
/// before cleaning.
pub fn paragraph_answers(paragraphs: &[String]) -> Vec<String> {
    let mut answers = Vec::new();
    for paragraph in paragraphs {
        if !paragraph.to_uppercase().contains(ANSWER_MARKER) {
            continue;
        }
        for line in paragraph.split('\n') {
            if line.contains(ANSWER_MARKER) {
                answers.push(clean_answer(line));
            }
        }
    }
    answers
}

/// Everything after the first marker occurrence (later markers are
/// removed, their surrounding text joined), trimmed, truncated at the
/// first `[` to strip bracketed point values or citations, trimmed
/// again.
fn clean_answer(line: &str) -> String {
    let after = line.split(ANSWER_MARKER).skip(1).collect::<Vec<_>>().join("");
    let after = after.trim();
    after.split('[').next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_prefix_rule_takes_anchored_lines() {
        assert_eq!(prefix_answers("ANSWER: Tokyo"), vec!["Tokyo"]);
    }

    #[test]
    fn test_prefix_rule_rejects_mid_line_marker() {
        assert!(prefix_answers("The ANSWER: is Tokyo").is_empty());
    }

    #[test]
    fn test_prefix_rule_multiple_lines() {
        let text = "Who wrote Hamlet?\nANSWER: Shakespeare\n\nANSWER: Marlowe\n";
        assert_eq!(prefix_answers(text), vec!["Shakespeare", "Marlowe"]);
    }

    #[test]
    fn test_paragraph_rule_strips_bracket_annotation() {
        let answers = paragraph_answers(&paragraphs(&["Some text ANSWER: Paris [10 pts]"]));
        assert_eq!(answers, vec!["Paris"]);
    }

    #[test]
    fn test_paragraph_rule_marker_mid_paragraph_qualifies() {
        // Unlike the prefix rule, docx matches the marker anywhere.
        let answers = paragraph_answers(&paragraphs(&["The ANSWER: is Tokyo"]));
        assert_eq!(answers, vec!["is Tokyo"]);
    }

    #[test]
    fn test_paragraph_rule_embedded_break_yields_one_answer() {
        // Only the second physical line carries the marker.
        let answers = paragraph_answers(&paragraphs(&["Bonus prompt.\nANSWER: Tokyo"]));
        assert_eq!(answers, vec!["Tokyo"]);
    }

    #[test]
    fn test_paragraph_rule_repeated_marker_joins_remainder() {
        let answers = paragraph_answers(&paragraphs(&["ANSWER: alpha ANSWER: beta"]));
        assert_eq!(answers, vec!["alpha  beta"]);
    }

    #[test]
    fn test_paragraph_rule_case_sensitive_refilter() {
        // Selected case-insensitively at the paragraph level, but the
        // sub-line re-filter is exact, so a lowercase marker yields
        // nothing.
        let answers = paragraph_answers(&paragraphs(&["Answer: Paris"]));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_paragraph_without_marker_is_ignored() {
        let answers = paragraph_answers(&paragraphs(&["Just a question body."]));
        assert!(answers.is_empty());
    }
}
