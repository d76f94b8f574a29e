pub mod line;
pub mod package;
pub mod patterns;

use crate::core::{DependencyGraph, Dialect};
use crate::error::Result;

/// Counters reported by a single parse pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines consumed from the input
    pub lines: usize,
    /// Lines that yielded an edge, including edges already in the graph
    pub edges: usize,
}

pub trait ReportParser {
    /// Feed `lines` into `graph`. Edges registered before an error are kept.
    fn parse_lines(
        &self,
        lines: &mut dyn Iterator<Item = std::io::Result<String>>,
        graph: &mut DependencyGraph,
    ) -> Result<ParseStats>;

    fn dialect(&self) -> Dialect;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_parser(&self, dialect: Dialect) -> Result<Box<dyn ReportParser>> {
        match dialect {
            Dialect::Package => Ok(Box::new(package::PackageParser::new()?)),
            Dialect::Class => Ok(Box::new(line::LineParser::class()?)),
            Dialect::Jar => Ok(Box::new(line::LineParser::jar()?)),
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
