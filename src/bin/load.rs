use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use jdepgraph::loader::{
    CypherScriptSink, GraphLoader, GraphSink, LoadConfig, Neo4jSink, DEFAULT_BATCH_SIZE,
    DEFAULT_NODE_LABEL, DEFAULT_PASSWORD, DEFAULT_REL_TYPE, DEFAULT_URL, DEFAULT_USERNAME,
};
use jdepgraph::{logging, DependencyGraph};

/// Load JSON dependency graphs into Neo4j, or render them as a Cypher script.
#[derive(Debug, Clone, Parser)]
#[command(name = "jdepgraph-load", version, about)]
struct Cli {
    /// Bolt endpoint of the Neo4j server
    #[arg(short = 'U', long, default_value = DEFAULT_URL)]
    url: String,

    /// Neo4j user
    #[arg(short = 'u', long, env = "NEO4J_USERNAME", default_value = DEFAULT_USERNAME)]
    username: String,

    /// Neo4j password
    #[arg(
        short = 'p',
        long,
        env = "NEO4J_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    password: String,

    /// Label given to every node
    #[arg(short = 'n', long = "nodelabel", default_value = DEFAULT_NODE_LABEL)]
    node_label: String,

    /// Type given to every dependency relationship
    #[arg(short = 'r', long = "reltype", default_value = DEFAULT_REL_TYPE)]
    rel_type: String,

    /// Edges per transaction
    #[arg(short = 'b', long = "batchsize", default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Write a cypher-shell script instead of connecting to the server
    #[arg(long)]
    script: bool,

    /// Script destination (implies --script); standard output when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON graphs produced by `jdepgraph -f json`; standard input when omitted
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> LoadConfig {
        LoadConfig {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            node_label: self.node_label.clone(),
            rel_type: self.rel_type.clone(),
            batch_size: self.batch_size,
        }
    }

    fn writes_script(&self) -> bool {
        self.script || self.output.is_some()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let loader = GraphLoader::new(cli.load_config());
    loader.config().validate()?;

    let mut sink: Box<dyn GraphSink> = if cli.writes_script() {
        let writer: Box<dyn Write> = match &cli.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout().lock()),
        };
        Box::new(CypherScriptSink::new(BufWriter::new(writer)))
    } else {
        Box::new(
            Neo4jSink::connect(loader.config())
                .with_context(|| format!("failed to connect to {}", cli.url))?,
        )
    };

    if cli.files.is_empty() {
        let graph = DependencyGraph::from_json_reader(io::stdin().lock())
            .context("failed to read graph from standard input")?;
        loader.load(&graph, sink.as_mut())?;
    } else {
        for path in &cli.files {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let graph = DependencyGraph::from_json_reader(BufReader::new(file))
                .with_context(|| format!("failed to read graph from {}", path.display()))?;
            let stats = loader.load(&graph, sink.as_mut())?;
            info!(file = %path.display(), edges = stats.edges, commits = stats.commits, "graph.loaded");
        }
    }

    Ok(())
}
