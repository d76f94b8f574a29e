use std::io::Write;

use crate::core::DependencyGraph;
use crate::error::Result;

/// Plain edge list: `source destination` per line, sources in the order they
/// were first seen and destinations sorted within each source.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_writer<W: Write>(&self, graph: &DependencyGraph, mut writer: W) -> Result<()> {
        for source in graph.sources() {
            for destination in graph.destinations(source) {
                writeln!(writer, "{} {}", source, destination)?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let mut buf = Vec::new();
        self.format_to_writer(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
