use std::io::BufRead;
use tracing::debug;

use super::{DependencyGraph, Dialect};
use crate::error::Result;
use crate::parsers::{ParseStats, ParserFactory, ReportParser};

/// Drives one dialect's parser over line-oriented input.
///
/// The graph is owned by the caller and passed in on every call, so several
/// reports (even of different dialects) can be merged by threading the same
/// graph through sequential extractions.
pub struct DependencyExtractor {
    parser: Box<dyn ReportParser>,
}

impl DependencyExtractor {
    pub fn new(dialect: Dialect) -> Result<Self> {
        Ok(Self {
            parser: ParserFactory::new().get_parser(dialect)?,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.parser.dialect()
    }

    pub fn extract_reader<R: BufRead>(
        &self,
        reader: R,
        graph: &mut DependencyGraph,
    ) -> Result<ParseStats> {
        self.run(&mut reader.lines(), graph)
    }

    pub fn extract_lines<I, S>(&self, lines: I, graph: &mut DependencyGraph) -> Result<ParseStats>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines = lines
            .into_iter()
            .map(|line| Ok::<String, std::io::Error>(line.into()));
        self.run(&mut lines, graph)
    }

    fn run(
        &self,
        lines: &mut dyn Iterator<Item = std::io::Result<String>>,
        graph: &mut DependencyGraph,
    ) -> Result<ParseStats> {
        let before = graph.edge_count();
        let stats = self.parser.parse_lines(lines, graph)?;
        debug!(
            dialect = %self.dialect(),
            lines = stats.lines,
            matched = stats.edges,
            new_edges = graph.edge_count() - before,
            "extract.done"
        );
        Ok(stats)
    }
}

/// Parse a whole report into a fresh graph.
pub fn extract_graph<R: BufRead>(reader: R, dialect: Dialect) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::new();
    DependencyExtractor::new(dialect)?.extract_reader(reader, &mut graph)?;
    Ok(graph)
}
