use crate::hint::Severity;
use crate::report::AnalysisResult;
use owo_colors::OwoColorize;

/// Prints a batch of results to the terminal. Hints are shown in
/// presentation order (most severe first); sources with no findings get a
/// short confirmation line.
pub fn print_results(results: &[AnalysisResult], color: bool) {
    for result in results {
        print_result(result, color);
    }

    let (errors, warnings, infos) = count_by_severity(results);
    let summary = format!(
        "{} file(s), {errors} error(s), {warnings} warning(s), {infos} info(s)",
        results.len()
    );
    if color {
        println!("{}", summary.bold());
    } else {
        println!("{summary}");
    }
}

fn print_result(result: &AnalysisResult, color: bool) {
    if color {
        println!("{}", result.source.bold());
    } else {
        println!("{}", result.source);
    }

    if result.hints.is_empty() {
        println!("  no netiquette issues found");
        return;
    }

    for hint in result.sorted_hints() {
        let label = format!("[{}]", hint.severity.symbol());
        let label = if color {
            match hint.severity {
                Severity::Error => label.red().bold().to_string(),
                Severity::Warning => label.yellow().bold().to_string(),
                Severity::Info => label.cyan().bold().to_string(),
            }
        } else {
            label
        };

        match &hint.reference {
            Some(reference) => println!("  {label} ({reference}) {}", hint.message),
            None => println!("  {label} {}", hint.message),
        }
        if let Some(context) = &hint.context {
            println!("      {:?}", context);
        }
    }
}

fn count_by_severity(results: &[AnalysisResult]) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for hint in results.iter().flat_map(|r| &r.hints) {
        match hint.severity {
            Severity::Error => counts.0 += 1,
            Severity::Warning => counts.1 += 1,
            Severity::Info => counts.2 += 1,
        }
    }
    counts
}
