use clap::{Arg, Command};
use log::LevelFilter;
use netlint::hint::{Hint, Severity};
use netlint::message::MessageView;
use netlint::render::print_results;
use netlint::report::{self, AnalysisResult};
use netlint::structure::check_eml;
use std::path::{Path, PathBuf};
use std::process;
use walkdir::WalkDir;

fn main() {
    let matches = Command::new("netlint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lints email messages against the school netiquette policy")
        .arg(
            Arg::new("inputs")
                .value_name("PATH")
                .num_args(1..)
                .required_unless_present("import")
                .help(".eml files or directories to lint"),
        )
        .arg(
            Arg::new("import")
                .long("import")
                .value_name("FILE")
                .help("Merge previously exported results into this run"),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .value_name("FILE")
                .help("Write the merged results to FILE as JSON"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let mut results = Vec::new();

    // Prior results are concatenated as-is; an import failure surfaces as a
    // meta-level error result rather than aborting the run.
    if let Some(import_path) = matches.get_one::<String>("import") {
        results.extend(report::import_results(import_path));
    }

    if let Some(inputs) = matches.get_many::<String>("inputs") {
        for input in inputs {
            for file in collect_eml_files(Path::new(input)) {
                results.push(lint_file(&file));
            }
        }
    }

    let color = !matches.get_flag("no-color") && std::env::var_os("NO_COLOR").is_none();
    print_results(&results, color);

    if let Some(export_path) = matches.get_one::<String>("export") {
        if let Err(e) = report::save_results(export_path, &results) {
            log::error!("Export failed: {e:#}");
            process::exit(2);
        }
    }

    if results.iter().any(|r| r.has_errors()) {
        process::exit(1);
    }
}

fn collect_eml_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry)
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "eml") =>
            {
                Some(entry.into_path())
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", path.display());
                None
            }
        })
        .collect()
}

/// One result per input file. Read and parse failures are recorded against
/// that file and the batch continues.
fn lint_file(path: &Path) -> AnalysisResult {
    let source = path.display().to_string();
    log::debug!("Linting {source}");

    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(e) => {
            return AnalysisResult::new(
                source,
                vec![Hint::new(Severity::Error, format!("Could not read file: {e}"))],
            )
        }
    };

    match MessageView::parse(&raw) {
        Ok(msg) => {
            let mut hints = Vec::new();
            check_eml(&msg, &mut hints);
            AnalysisResult::new(source, hints)
        }
        Err(e) => AnalysisResult::new(
            source,
            vec![Hint::new(
                Severity::Error,
                format!("Could not parse message: {e:#}"),
            )],
        ),
    }
}
