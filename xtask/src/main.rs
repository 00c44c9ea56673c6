use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lattice_topology::{
    AdjacencyStore, DenseMatrix, Graph, NeighbourLevels, SparseMatrix, TopologySpec,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "lattice-topology workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benches and compare dense against sparse storage
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Build a topology from a JSON description and print it as JSON
    Dump {
        /// Path to the JSON topology description
        #[arg(long, conflicts_with = "json")]
        spec: Option<PathBuf>,

        /// Inline JSON topology description
        #[arg(long)]
        json: Option<String>,

        /// Adjacency store to build into
        #[arg(long, value_enum, default_value_t = Store::Sparse)]
        store: Store,

        /// Also print neighbour levels for this node
        #[arg(long)]
        node: Option<usize>,

        /// Depth of the neighbour levels
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Store {
    Dense,
    Sparse,
}

const BENCHES: &[&str] = &["topology_benchmark", "neighbourhood_benchmark"];
const STORES: &[&str] = &["dense", "sparse"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Dump {
            spec,
            json,
            store,
            node,
            depth,
        } => {
            let text = match (spec, json) {
                (Some(path), _) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, Some(json)) => json,
                (None, None) => bail!("dump needs --spec <file> or --json <text>"),
            };
            let spec = TopologySpec::from_json(&text)?;
            let out = match store {
                Store::Dense => dump(&spec, &spec.build::<DenseMatrix<bool>>()?, node, depth),
                Store::Sparse => dump(&spec, &spec.build::<SparseMatrix<bool>>()?, node, depth),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct Dump<'a> {
    spec: &'a TopologySpec,
    nodes: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_reason: Option<String>,
    edges: Vec<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    levels: Option<NeighbourLevels>,
}

fn dump<'a, S: AdjacencyStore>(
    spec: &'a TopologySpec,
    graph: &Graph<S>,
    node: Option<usize>,
    depth: usize,
) -> Dump<'a> {
    Dump {
        spec,
        nodes: graph.node_count(),
        valid: graph.is_valid(),
        invalid_reason: graph.invalid_reason().map(|r| r.to_string()),
        edges: graph.edges().collect(),
        levels: node.map(|n| graph.neighbours(n, depth)),
    }
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let mut build = Command::new("cargo");
    build.args(["build", "--release"]);
    for bench in BENCHES {
        build.arg("--bench").arg(bench);
    }
    if !build.status()?.success() {
        bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Benchmarking {}", bench);
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
            eprintln!("Warning: bench {} failed", bench);
        } else {
            println!("Finished {} in {:.2?}", bench, start.elapsed());
        }
    }

    Ok(())
}

/// Mean time in nanoseconds, keyed by workload then store.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results = Results::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Dense vs Sparse Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | dense | sparse | sparse / dense |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, stores) in &results {
        write!(file, "| {} |", workload)?;
        for store in STORES {
            match stores.get(*store) {
                Some(ns) => write!(file, " {} |", format_time(*ns))?,
                None => write!(file, " - |")?,
            }
        }
        match (stores.get("dense"), stores.get("sparse")) {
            (Some(dense), Some(sparse)) if *dense > 0.0 => writeln!(file, " **{:.2}x** |", sparse / dense)?,
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
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

/// Walks `dir` for `<group>/<dense|sparse>[/<param>]/new/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let parts: Vec<&str> = relative.iter().filter_map(|s| s.to_str()).collect();
        // Drop "new/estimates.json"; skip saved baselines and criterion's own report.
        let Some((&"estimates.json", rest)) = parts.split_last() else {
            continue;
        };
        let Some((&"new", id)) = rest.split_last() else {
            continue;
        };
        if id.is_empty() || id.contains(&"report") {
            continue;
        }

        let (workload, store) = match id {
            [group, function, param @ ..] if STORES.contains(function) => {
                let mut workload = group.to_string();
                for p in param {
                    workload.push('/');
                    workload.push_str(p);
                }
                (workload, function.to_string())
            }
            _ => continue,
        };

        let Some(mean) = read_mean(&path) else {
            continue;
        };
        results.entry(workload).or_default().insert(store, mean);
    }
}

fn read_mean(path: &Path) -> Option<f64> {
    let content = fs::read_to_string(path).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;
    json.get("mean")?
        .get("point_estimate")?
        .as_f64()
        .filter(|ns| *ns > 0.0)
}
