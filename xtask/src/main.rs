use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "keygraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the prefix index and relation graph benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["prefix_index_benchmark", "relation_graph_benchmark"];

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    group_id: String,
    function_id: Option<String>,
    /// Externally tagged, e.g. `{"Elements": 1000}`; only `Elements` is reported.
    throughput: Option<BTreeMap<String, u64>>,
}

struct Measurement {
    mean_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd.status().with_context(|| format!("Failed to run bench {}", bench))?;

        if !status.success() {
            anyhow::bail!("Benchmark {} exited with {}", bench, status);
        }
        println!("Finished {} in {:.2?}", bench, start.elapsed());
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> function -> measurement
    let mut results: BTreeMap<String, BTreeMap<String, Measurement>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::fmt::Write;
    let mut out = String::new();
    writeln!(out, "# keygraph Benchmark Report")?;
    writeln!(out)?;
    writeln!(out, "| Group | Benchmark | Mean | Throughput |")?;
    writeln!(out, "|---|---|---|---|")?;

    for (group, functions) in &results {
        for (function, m) in functions {
            let throughput = match m.elements {
                Some(n) if m.mean_ns > 0.0 => format_ops((n as f64 * 1e9) / m.mean_ns),
                _ => "-".to_string(),
            };
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                group,
                function,
                format_time(m.mean_ns),
                throughput
            )?;
        }
    }

    fs::write(report_path, out)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;
    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks criterion's output tree looking for `new/estimates.json` files.
fn collect_results(
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<String, Measurement>>,
) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(&path, results)?;
            continue;
        }

        let in_new_baseline = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|s| s.to_str())
            == Some("new");
        if !in_new_baseline || path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let info: BenchmarkInfo = read_json(&baseline_dir.join("benchmark.json"))?;
        let estimates: Estimates = read_json(&path)?;

        let elements = info
            .throughput
            .as_ref()
            .and_then(|t| t.get("Elements").copied());

        results.entry(info.group_id).or_default().insert(
            info.function_id.unwrap_or_default(),
            Measurement {
                mean_ns: estimates.mean.point_estimate,
                elements,
            },
        );
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.0} ns", ns)
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M elem/s", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K elem/s", ops / 1_000.0)
    } else {
        format!("{:.0} elem/s", ops)
    }
}
