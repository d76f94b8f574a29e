use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use jdepgraph::formatters::{Formatter, OutputFormat};
use jdepgraph::{logging, DependencyExtractor, DependencyGraph, Dialect};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "jdepgraph",
    version,
    about = "Convert jdeps output into a dependency graph"
)]
struct Cli {
    /// Report dialect of the input
    #[arg(short = 't', long = "deptype", value_enum, default_value_t = Dialect::Package)]
    deptype: Dialect,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// jdeps reports to read; standard input when omitted
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        deptype,
        format,
        pretty,
        verbose: _,
        files,
    } = cli;

    let start_time = Instant::now();
    let extractor = DependencyExtractor::new(deptype)?;
    let mut graph = DependencyGraph::new();

    if files.is_empty() {
        extractor
            .extract_reader(io::stdin().lock(), &mut graph)
            .context("failed to read standard input")?;
    } else {
        for path in &files {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let stats = extractor
                .extract_reader(BufReader::new(file), &mut graph)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            info!(file = %path.display(), lines = stats.lines, edges = stats.edges, "report.parsed");
        }
    }

    info!(
        dialect = %deptype,
        sources = graph.source_count(),
        edges = graph.edge_count(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "graph.built"
    );

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    Formatter::new(format)
        .with_pretty(pretty)
        .format_to_writer(&graph, writer)?;

    Ok(())
}
