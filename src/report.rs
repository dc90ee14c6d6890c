use crate::hint::{Hint, Severity};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The hints produced for one input, keyed by its source name. A batch is a
/// sequence of these; merging two batches is plain concatenation, duplicates
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub source: String,
    pub hints: Vec<Hint>,
}

impl AnalysisResult {
    pub fn new(source: impl Into<String>, hints: Vec<Hint>) -> Self {
        AnalysisResult {
            source: source.into(),
            hints,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.hints.iter().any(|h| h.severity == Severity::Error)
    }

    /// Hints in presentation order. The raw emission order is left intact.
    pub fn sorted_hints(&self) -> Vec<Hint> {
        let mut sorted = self.hints.clone();
        sorted.sort();
        sorted
    }
}

pub fn save_results(path: &str, results: &[AnalysisResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write results to {path}"))?;
    log::debug!("Saved {} result(s) to {path}", results.len());
    Ok(())
}

pub fn load_results(path: &str) -> Result<Vec<AnalysisResult>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read results from {path}"))?;
    let results = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse results from {path}"))?;
    Ok(results)
}

/// Loads a previously saved batch. A failure does not abort the run: it is
/// converted into a single meta-level error result and the batch proceeds
/// with no prior results.
pub fn import_results(path: &str) -> Vec<AnalysisResult> {
    match load_results(path) {
        Ok(results) => results,
        Err(e) => {
            log::warn!("Import of {path} failed: {e:#}");
            vec![AnalysisResult::new(
                path,
                vec![Hint::new(
                    Severity::Error,
                    format!("Could not import previous results: {e:#}"),
                )],
            )]
        }
    }
}
