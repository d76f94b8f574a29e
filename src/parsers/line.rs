use super::patterns::PatternRegistry;
use super::{ParseStats, ReportParser};
use crate::core::{DependencyGraph, Dialect};
use crate::error::Result;

/// Parser for the one-edge-per-line reports (`-summary` and
/// `-verbose:class`). Lines that do not match are skipped: these reports mix
/// in warnings and summary text.
pub struct LineParser {
    patterns: PatternRegistry,
    rule: LineRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRule {
    Jar,
    Class,
}

impl LineParser {
    pub fn jar() -> Result<Self> {
        Self::with_rule(LineRule::Jar)
    }

    pub fn class() -> Result<Self> {
        Self::with_rule(LineRule::Class)
    }

    fn with_rule(rule: LineRule) -> Result<Self> {
        Ok(Self {
            patterns: PatternRegistry::new()?,
            rule,
        })
    }

    fn match_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        match self.rule {
            LineRule::Jar => self.patterns.match_jar(line),
            LineRule::Class => self.patterns.match_class(line),
        }
    }
}

impl ReportParser for LineParser {
    fn parse_lines(
        &self,
        lines: &mut dyn Iterator<Item = std::io::Result<String>>,
        graph: &mut DependencyGraph,
    ) -> Result<ParseStats> {
        let mut stats = ParseStats::default();

        for line in lines {
            let line = line?;
            stats.lines += 1;
            if let Some((source, destination)) = self.match_line(&line) {
                graph.register(source, destination);
                stats.edges += 1;
            }
        }

        Ok(stats)
    }

    fn dialect(&self) -> Dialect {
        match self.rule {
            LineRule::Jar => Dialect::Jar,
            LineRule::Class => Dialect::Class,
        }
    }
}
