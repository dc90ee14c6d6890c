use crate::hint::{Hint, Severity};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Optional "Re: " prefix, then exactly two bracketed tag groups.
    static ref TAG_BLOCK: Regex = Regex::new(r"^(Re: )?(\[[A-Z0-9/_+-]+\]){2}$").unwrap();
    static ref BRACKET_GROUP: Regex = Regex::new(r"\[([^\]]*)\]").unwrap();
    static ref TAG_CHARS: Regex = Regex::new(r"^[A-Z0-9/_+-]*$").unwrap();
}

/// English determiners that have no place in a subject line.
const DETERMINERS: [&str; 20] = [
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "much", "many", "most", "some", "any", "enough",
];

/// Subject checks: length, tag block shape, determiners. The subject is
/// already known to be present.
pub fn check_subject(subject: &str, hints: &mut Vec<Hint>) {
    if subject.chars().count() > 80 {
        hints.push(Hint::new(Severity::Error, "Subject is too long (> 80 chars)").with_reference("2.1.1.2"));
    }

    if !subject.contains(' ') {
        hints.push(Hint::new(Severity::Error, "Malformed subject").with_reference("2.1.1"));
    }
    check_tags(tag_block(subject), hints);

    if subject
        .to_lowercase()
        .split(' ')
        .any(|token| DETERMINERS.contains(&token))
    {
        hints.push(
            Hint::new(Severity::Warning, "Determiners should be removed")
                .with_reference("2.1.1.2")
                .with_context(subject),
        );
    }
}

/// The candidate tag block: any leading "Re: " repetitions plus the next
/// space-delimited token. "Re: Re: [A][B] hi" yields "Re: Re: [A][B]";
/// a subject with no space past the prefixes is taken whole.
fn tag_block(subject: &str) -> &str {
    let mut prefix = 0;
    while subject[prefix..].starts_with("Re: ") {
        prefix += 4;
    }
    match subject[prefix..].find(' ') {
        Some(pos) => &subject[..prefix + pos],
        None => subject,
    }
}

/// Validates one tag block. The mismatch warning, the Re: repetition error
/// and the disallowed-character error are independent and may all fire for
/// the same block; the MISC advisory fires regardless of shape validity.
pub fn check_tags(block: &str, hints: &mut Vec<Hint>) {
    if !TAG_BLOCK.is_match(block) {
        hints.push(
            Hint::new(
                Severity::Warning,
                "Tags mismatch, too many tags or no tags detected",
            )
            .with_reference("2.1.1")
            .with_context(block),
        );

        if block.matches("Re:").count() >= 2 {
            hints.push(Hint::new(Severity::Error, "Too many Re: ").with_reference("2.1.1.3"));
        }

        let has_disallowed = BRACKET_GROUP
            .captures_iter(block)
            .any(|group| !TAG_CHARS.is_match(&group[1]));
        if has_disallowed {
            hints.push(
                Hint::new(Severity::Error, "Disallowed character in tags").with_reference("2.1.1.1"),
            );
        }
    }

    if block.to_lowercase().contains("[misc]") {
        hints.push(
            Hint::new(Severity::Info, "MISC tag use is discouraged")
                .with_reference("2.1.1.1")
                .with_context(block),
        );
    }
}
