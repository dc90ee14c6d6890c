use anyhow::{Context, Result};
use mailparse::parse_mail;

/// One MIME part of a multipart message.
#[derive(Debug, Clone)]
pub struct MessagePart {
    pub mime_type: String,
    pub text: String,
}

/// Read-only view of one parsed message, owned for the duration of a single
/// analysis. Header multiplicity and order are preserved; the MIME type is
/// normalized to lowercase; body text is normalized to CRLF line endings so
/// the line-discipline checks see the canonical form regardless of how the
/// file was saved.
#[derive(Debug, Clone)]
pub struct MessageView {
    headers: Vec<(String, String)>,
    mime_type: String,
    body: Option<String>,
    parts: Vec<MessagePart>,
}

impl MessageView {
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let parsed = parse_mail(raw).context("Failed to parse MIME message")?;

        let headers = parsed
            .headers
            .iter()
            .map(|h| (h.get_key(), h.get_value()))
            .collect();

        let mime_type = parsed.ctype.mimetype.to_lowercase();

        let mut body = None;
        let mut parts = Vec::new();
        if parsed.subparts.is_empty() {
            let text = parsed.get_body().context("Failed to decode message body")?;
            body = Some(normalize_crlf(&text));
        } else {
            for part in &parsed.subparts {
                let text = part
                    .get_body()
                    .context("Failed to decode multipart body part")?;
                parts.push(MessagePart {
                    mime_type: part.ctype.mimetype.to_lowercase(),
                    text: normalize_crlf(&text),
                });
            }
        }

        Ok(MessageView {
            headers,
            mime_type,
            body,
            parts,
        })
    }

    /// All values of a header, in order of appearance. Name matching is
    /// case-insensitive.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn first_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.first_header(name).is_some()
    }

    /// Normalized lowercase MIME type of the whole message.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Decoded body text of a single-part message.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Ordered parts of a multipart message.
    pub fn parts(&self) -> &[MessagePart] {
        &self.parts
    }
}

fn normalize_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
