use crate::body::check_body;
use crate::headers::check_headers;
use crate::hint::{Hint, Severity};
use crate::message::MessageView;
use crate::subject::check_subject;

/// Runs every check against one message in a fixed order: structure first,
/// then headers, subject, body. Emission order is deterministic for
/// identical input.
pub fn check_eml(msg: &MessageView, hints: &mut Vec<Hint>) {
    let body = extract_body(msg, hints);

    check_headers(msg, hints);

    match msg.first_header("Subject") {
        None => hints.push(Hint::new(Severity::Error, "No subject")),
        Some(subject) => check_subject(subject, hints),
    }

    // No body after a structural problem is expected and already reported.
    if let Some(body) = body {
        check_body(&body, hints);
    }
}

/// Validates the Content-Type and MIME shape of the message and selects the
/// plain-text body for downstream checks, if any.
pub fn extract_body(msg: &MessageView, hints: &mut Vec<Hint>) -> Option<String> {
    if !msg.has_header("Content-Type") {
        hints.push(
            Hint::new(
                Severity::Error,
                "No Content-Type specified: assuming text/plain",
            )
            .with_reference("2.2.2.2"),
        );
        // The parser already falls back to text/plain, so a body may still
        // be extractable.
    }

    match msg.mime_type() {
        "text/plain" => msg.body().map(str::to_owned),
        "multipart/mixed" => {
            let found = msg
                .parts()
                .iter()
                .enumerate()
                .find(|(_, part)| part.mime_type.starts_with("text/plain"));
            match found {
                Some((index, part)) => {
                    if index != 0 {
                        hints.push(
                            Hint::new(Severity::Error, "Body is not first part in multipart")
                                .with_reference("2.2.2.2"),
                        );
                    }
                    Some(part.text.clone())
                }
                None => {
                    hints.push(
                        Hint::new(Severity::Error, "No message body in multipart")
                            .with_reference("2.2.2.2"),
                    );
                    None
                }
            }
        }
        "application/pgp-signature" => {
            hints.push(Hint::new(
                Severity::Info,
                "Cannot lint message: PGP Signatures are not supported",
            ));
            None
        }
        other => {
            log::debug!("Unsupported Content-Type: {other}");
            hints.push(Hint::new(Severity::Error, "Invalid Content-Type").with_reference("2.2.2.2"));
            None
        }
    }
}
