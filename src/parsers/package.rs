use tracing::trace;

use super::patterns::PatternRegistry;
use super::{ParseStats, ReportParser};
use crate::core::{DependencyGraph, Dialect};
use crate::error::{JdepsError, Result};

/// Parser for the default jdeps package report.
///
/// A block opens with a source header and lists its destinations on the
/// following indented `->` lines:
///
/// ```text
///    org.apache.commons.lang3 (commons-lang3-3.4.jar)
///       -> java.io
///       -> java.lang
/// ```
///
/// Any line that is neither a header nor a destination closes the block.
pub struct PackageParser {
    patterns: PatternRegistry,
}

/// Source of the block currently being read
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    NoActiveSource,
    ActiveSource(String),
}

impl PackageParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: PatternRegistry::new()?,
        })
    }
}

impl ReportParser for PackageParser {
    fn parse_lines(
        &self,
        lines: &mut dyn Iterator<Item = std::io::Result<String>>,
        graph: &mut DependencyGraph,
    ) -> Result<ParseStats> {
        let mut cursor = Cursor::NoActiveSource;
        let mut stats = ParseStats::default();

        for (index, line) in lines.enumerate() {
            let line = line?;
            let line_number = index + 1;
            stats.lines = line_number;

            // Header wins when a line could be read either way.
            if let Some(source) = self.patterns.match_package_source(&line) {
                trace!(line = line_number, source, "package.block_open");
                cursor = Cursor::ActiveSource(source.to_string());
                continue;
            }

            match self.patterns.match_package_destination(&line) {
                Some(destination) => match &cursor {
                    Cursor::ActiveSource(source) => {
                        graph.register(source, destination);
                        stats.edges += 1;
                    }
                    Cursor::NoActiveSource => {
                        return Err(JdepsError::MalformedInput {
                            line: line_number,
                            destination: destination.to_string(),
                        });
                    }
                },
                None => cursor = Cursor::NoActiveSource,
            }
        }

        Ok(stats)
    }

    fn dialect(&self) -> Dialect {
        Dialect::Package
    }
}
