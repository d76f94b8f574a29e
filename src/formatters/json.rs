use std::io::Write;

use crate::core::DependencyGraph;
use crate::error::Result;

/// JSON object mapping every source to its sorted destinations.
///
/// This is the interchange format read back by
/// [`DependencyGraph::from_json_str`] and by the graph loader.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_writer<W: Write>(&self, graph: &DependencyGraph, mut writer: W) -> Result<()> {
        let map = graph.to_sorted_map();
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &map)?;
        } else {
            serde_json::to_writer(&mut writer, &map)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let map = graph.to_sorted_map();
        let json = if self.pretty {
            serde_json::to_string_pretty(&map)?
        } else {
            serde_json::to_string(&map)?
        };
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
