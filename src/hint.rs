use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Severity of a netiquette finding. Fixed set, no custom severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Display priority: lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 5,
            Severity::Info => 10,
        }
    }

    /// Single-character symbol for compact display.
    pub fn symbol(&self) -> char {
        match self {
            Severity::Error => 'E',
            Severity::Warning => 'W',
            Severity::Info => 'I',
        }
    }
}

/// One finding produced by a check: severity, message, optional policy
/// section reference, optional excerpt of the offending text.
///
/// A hint is a pure value. Augmentation via `with_reference`/`with_context`
/// returns a new hint and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    pub severity: Severity,
    pub message: String,
    pub reference: Option<String>,
    pub context: Option<String>,
}

impl Hint {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Hint {
            severity,
            message: message.into(),
            reference: None,
            context: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

// Presentation order: priority ascending, then message, then context with
// absent contexts first. The reference is a last tie-break so the order is
// total and consistent with equality.
impl Ord for Hint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity
            .priority()
            .cmp(&other.severity.priority())
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.context.cmp(&other.context))
            .then_with(|| self.reference.cmp(&other.reference))
    }
}

impl PartialOrd for Hint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
