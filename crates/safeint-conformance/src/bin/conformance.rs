//! CLI entrypoint for the safeint conformance runner.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use safeint_conformance::{FixtureSet, SuiteReport, TestRunner};

/// Conformance tooling for safeint.
#[derive(Debug, Parser)]
#[command(name = "conformance")]
#[command(about = "Fixture verification for the safeint library")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the library against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Only run cases whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
        /// Emit JSONL results to stdout instead of the text summary.
        #[arg(long)]
        json: bool,
        /// Also write JSONL results to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List the cases in fixture files without running them.
    List {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            filter,
            json,
            report,
        } => {
            let fixture_sets = load_fixture_sets(&fixture)?;

            let mut runner = TestRunner::new("fixture-verify");
            if let Some(filter) = filter {
                runner = runner.with_filter(filter);
            }

            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(runner.run(set));
            }
            // Stabilize ordering for reproducible report output.
            results.sort_by(|a, b| {
                a.operation
                    .cmp(&b.operation)
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let suite = SuiteReport::from_results("fixture-verify", results);
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                suite.total, suite.passed, suite.failed
            );

            if json {
                let stdout = std::io::stdout().lock();
                suite.write_jsonl(stdout)?;
            } else {
                print!("{}", suite.to_text());
            }

            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let file = std::fs::File::create(&report_path)?;
                suite.write_jsonl(file)?;
                eprintln!("Wrote JSONL report to {}", report_path.display());
            }

            if !suite.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::List { fixture } => {
            for set in load_fixture_sets(&fixture)? {
                println!(
                    "{} (version {}, {} cases)",
                    set.suite,
                    set.version,
                    set.cases.len()
                );
                for case in &set.cases {
                    println!("  {} [{}]", case.name, case.operation.name());
                }
            }
        }
    }

    Ok(())
}

fn load_fixture_sets(root: &Path) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    let paths: Vec<PathBuf> = if root.is_dir() {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(root)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
            .collect();
        paths.sort();
        paths
    } else {
        vec![root.to_path_buf()]
    };

    let mut sets = Vec::new();
    for path in paths {
        match FixtureSet::from_file(&path) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }
    if sets.is_empty() {
        return Err(format!("No fixture JSON files found at {}", root.display()).into());
    }
    Ok(sets)
}
