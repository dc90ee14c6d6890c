use crate::hint::{Hint, Severity};
use lazy_static::lazy_static;
use regex::Regex;

/// Canonical signature delimiter: a blank line, then the "-- " separator
/// line on its own.
const SIG_DELIMITER: &str = "\r\n\r\n-- \r\n";

lazy_static! {
    // Two non-newline characters directly before the separator means the
    // blank line above it is missing.
    static ref MISSING_BLANK_LINE: Regex = Regex::new(r"[^\r\n]{2}\r\n-- ?\r\n").unwrap();
}

/// Body and signature checks over CRLF-separated text.
pub fn check_body(body: &str, hints: &mut Vec<Hint>) {
    let pieces: Vec<&str> = body.split(SIG_DELIMITER).collect();
    match pieces.len() {
        1 => {
            hints.push(Hint::new(Severity::Error, "No signature detected").with_reference("2.3"));
        }
        2 => check_signature(pieces[1], hints),
        _ => {
            // Ambiguous split: piece 0 is still checked as the body, the
            // rest is ignored.
            hints.push(
                Hint::new(
                    Severity::Error,
                    format!(
                        "Too many signatures, make sure the string {SIG_DELIMITER:?} only appears once"
                    ),
                )
                .with_reference("2.3"),
            );
        }
    }

    for line in split_lines(pieces[0]) {
        let len = line.chars().count();
        if len > 80 {
            hints.push(
                Hint::new(Severity::Error, "Body line is too long (> 80)")
                    .with_reference("2.2.2.1")
                    .with_context(line),
            );
        }
        if len > 72 && !line.starts_with('>') {
            hints.push(
                Hint::new(Severity::Error, "Message line is too long (> 72)")
                    .with_reference("2.2.2.1")
                    .with_context(line),
            );
        }
        if line != "-- " && line.ends_with(|c: char| c.is_whitespace()) {
            hints.push(
                Hint::new(Severity::Error, "Body line has a trailing whitespace")
                    .with_reference("2.2.2.5")
                    .with_context(line),
            );
        }
    }

    if body.contains("\r\n--\r\n") {
        hints.push(
            Hint::new(
                Severity::Warning,
                "Possibly missing space at end of signature separator",
            )
            .with_reference("2.3"),
        );
    }
    if MISSING_BLANK_LINE.is_match(body) {
        hints.push(
            Hint::new(Severity::Warning, "Possibly missing newline before signature")
                .with_reference("2.3"),
        );
    }
}

fn check_signature(signature: &str, hints: &mut Vec<Hint>) {
    let lines = split_lines(signature);
    for line in &lines {
        if line.chars().count() > 80 {
            hints.push(
                Hint::new(Severity::Error, "Signature line is too long (> 80)")
                    .with_reference("2.3")
                    .with_context(*line),
            );
        }
    }
    if lines.len() > 4 {
        hints.push(Hint::new(Severity::Error, "Signature size is too long (> 4)").with_reference("2.3"));
    }
    if lines.is_empty() {
        hints.push(Hint::new(Severity::Error, "Signature is empty").with_reference("2.3"));
    } else if lines[0].trim().is_empty() {
        hints.push(
            Hint::new(Severity::Error, "First line of signature is empty").with_reference("2.3"),
        );
    }
}

/// CRLF split with trailing empty fragments dropped, so text ending in a
/// newline does not yield a phantom last line and empty text yields no
/// lines at all.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split("\r\n").collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints_for(body: &str) -> Vec<Hint> {
        let mut hints = Vec::new();
        check_body(body, &mut hints);
        hints
    }

    fn errors(hints: &[Hint]) -> Vec<&Hint> {
        hints.iter().filter(|h| h.severity == Severity::Error).collect()
    }

    #[test]
    fn test_well_formed_body_and_signature() {
        assert!(hints_for("Hello everyone.\r\n\r\n-- \r\nName\r\nTeam").is_empty());
    }

    #[test]
    fn test_signature_with_trailing_newline() {
        assert!(hints_for("Hello.\r\n\r\n-- \r\nName\r\nTeam\r\n").is_empty());
    }

    #[test]
    fn test_no_signature() {
        let hints = hints_for("Just a body with no separator.");
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].message, "No signature detected");
        assert_eq!(hints[0].reference.as_deref(), Some("2.3"));
    }

    #[test]
    fn test_no_signature_still_checks_whole_body() {
        let long = "x".repeat(75);
        let hints = hints_for(&format!("first\r\n{long}"));
        assert!(hints.iter().any(|h| h.message == "No signature detected"));
        assert!(hints.iter().any(|h| h.message == "Message line is too long (> 72)"));
    }

    #[test]
    fn test_too_many_signatures() {
        let body = "body\r\n\r\n-- \r\nsig one\r\n\r\n-- \r\nsig two";
        let hints = hints_for(body);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].message.starts_with("Too many signatures"));
        assert_eq!(hints[0].severity, Severity::Error);
    }

    #[test]
    fn test_too_many_signatures_still_checks_first_piece() {
        let long = "y".repeat(85);
        let body = format!("{long}\r\n\r\n-- \r\na\r\n\r\n-- \r\nb");
        let hints = hints_for(&body);
        assert!(hints.iter().any(|h| h.message == "Body line is too long (> 80)"));
    }

    #[test]
    fn test_signature_line_too_long() {
        let long = "s".repeat(81);
        let hints = hints_for(&format!("body\r\n\r\n-- \r\n{long}"));
        let errs = errors(&hints);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Signature line is too long (> 80)");
        assert_eq!(errs[0].context.as_deref(), Some(long.as_str()));
    }

    #[test]
    fn test_signature_too_many_lines() {
        let hints = hints_for("body\r\n\r\n-- \r\na\r\nb\r\nc\r\nd\r\ne");
        assert!(hints.iter().any(|h| h.message == "Signature size is too long (> 4)"));
    }

    #[test]
    fn test_four_signature_lines_are_fine() {
        assert!(hints_for("body\r\n\r\n-- \r\na\r\nb\r\nc\r\nd").is_empty());
    }

    #[test]
    fn test_empty_signature() {
        let hints = hints_for("body\r\n\r\n-- \r\n");
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].message, "Signature is empty");
    }

    #[test]
    fn test_first_signature_line_blank() {
        let hints = hints_for("body\r\n\r\n-- \r\n   \r\nName");
        assert!(hints
            .iter()
            .any(|h| h.message == "First line of signature is empty"));
    }

    #[test]
    fn test_body_line_between_72_and_80() {
        let line = "z".repeat(75);
        let hints = hints_for(&format!("{line}\r\n\r\n-- \r\nName"));
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].message, "Message line is too long (> 72)");
        assert_eq!(hints[0].context.as_deref(), Some(line.as_str()));
    }

    #[test]
    fn test_quoted_long_line_only_triggers_80_rule() {
        let line = format!("> {}", "q".repeat(88));
        assert_eq!(line.chars().count(), 90);
        let hints = hints_for(&format!("{line}\r\n\r\n-- \r\nName"));
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].message, "Body line is too long (> 80)");
    }

    #[test]
    fn test_very_long_line_triggers_both_rules() {
        let line = "w".repeat(85);
        let hints = hints_for(&format!("{line}\r\n\r\n-- \r\nName"));
        assert!(hints.iter().any(|h| h.message == "Body line is too long (> 80)"));
        assert!(hints.iter().any(|h| h.message == "Message line is too long (> 72)"));
    }

    #[test]
    fn test_trailing_whitespace() {
        let hints = hints_for("oops \r\nfine\r\n\r\n-- \r\nName");
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].message, "Body line has a trailing whitespace");
        assert_eq!(hints[0].context.as_deref(), Some("oops "));
    }

    #[test]
    fn test_separator_line_is_exempt_from_trailing_whitespace() {
        // Without the canonical delimiter the "-- " line stays in the body.
        let hints = hints_for("body\r\n-- \r\nName");
        assert!(hints.iter().all(|h| h.message != "Body line has a trailing whitespace"));
    }

    #[test]
    fn test_missing_space_in_separator() {
        let hints = hints_for("body\r\n\r\n--\r\nName");
        assert!(hints
            .iter()
            .any(|h| h.message == "Possibly missing space at end of signature separator"));
    }

    #[test]
    fn test_missing_blank_line_before_separator() {
        let hints = hints_for("body text\r\n-- \r\nName");
        assert!(hints
            .iter()
            .any(|h| h.message == "Possibly missing newline before signature"));
    }

    #[test]
    fn test_proper_blank_line_does_not_trip_heuristic() {
        let hints = hints_for("body\r\n\r\n-- \r\nName");
        assert!(hints
            .iter()
            .all(|h| h.message != "Possibly missing newline before signature"));
    }
}
