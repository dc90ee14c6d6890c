use crate::hint::{Hint, Severity};
use crate::message::MessageView;

/// Newsgroups that require special authorization to post to.
const RESTRICTED_NEWSGROUPS: [&str; 9] = [
    "assistants.news",
    "assistants.acu",
    "assistants.yaka",
    "epita.adm",
    "epita.cri",
    "epita.assistants",
    "epita.moderation",
    "epita.netiquette",
    "epita.news.moderated",
];

/// Header checks: restricted newsgroups, Cc/Reply-To/In-Reply-To advisories,
/// and the From-domain rule. Runs independently of subject and body checks.
pub fn check_headers(msg: &MessageView, hints: &mut Vec<Hint>) {
    for value in msg.header_values("Newsgroups") {
        for group in value.split([',', ' ']).filter(|g| !g.is_empty()) {
            if RESTRICTED_NEWSGROUPS.contains(&group) {
                hints.push(
                    Hint::new(
                        Severity::Warning,
                        "This message is bound for a restricted newsgroup: \
                         make sure you are allowed to post there",
                    )
                    .with_context(group),
                );
            }
        }
    }

    if let Some(cc) = msg.first_header("Cc") {
        hints.push(
            Hint::new(
                Severity::Info,
                "This message has a Cc field: check the recipients carefully",
            )
            .with_reference("2.1.2")
            .with_context(cc),
        );
    }

    if let Some(reply_to) = msg.first_header("Reply-To") {
        hints.push(
            Hint::new(
                Severity::Info,
                "This message has a Reply-To field: check the address carefully",
            )
            .with_reference("2.1.2")
            .with_context(reply_to),
        );
    }

    if msg.has_header("In-Reply-To") {
        hints.push(
            Hint::new(
                Severity::Info,
                "This message has an In-Reply-To field: \
                 check that the original message's id is correct",
            )
            .with_reference("2.1.2"),
        );
    }

    // Absent From means we cannot tell, so the check does not fire.
    let from_values = msg.header_values("From");
    if !from_values.is_empty() && !from_values.iter().any(|v| v.contains("@epita.fr")) {
        hints.push(
            Hint::new(
                Severity::Warning,
                "The From field does not contain an address with the epita.fr domain: \
                 use your school address",
            )
            .with_reference("2.1.3")
            .with_context(from_values[0]),
        );
    }
}
