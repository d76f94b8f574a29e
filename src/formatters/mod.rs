pub mod json;
pub mod text;

use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::core::DependencyGraph;
use crate::error::{JdepsError, Result};

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"source": ["dest", ...]}` with sorted destinations
    #[default]
    Json,
    /// `source destination`, one edge per line
    Txt,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Txt => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = JdepsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "txt" => Ok(OutputFormat::Txt),
            other => Err(JdepsError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output settings chosen once by the caller and applied to any graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    format: OutputFormat,
    pretty: bool,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Indent JSON output. Has no effect on `txt`.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render `graph` to `writer`. The graph is only read.
    pub fn format_to_writer<W: Write>(&self, graph: &DependencyGraph, writer: W) -> Result<()> {
        match self.format {
            OutputFormat::Json => JsonFormatter::new()
                .with_pretty(self.pretty)
                .format_to_writer(graph, writer),
            OutputFormat::Txt => TextFormatter::new().format_to_writer(graph, writer),
        }
    }
}

/// Render `graph` in `format` with default settings.
pub fn format_to_writer<W: Write>(
    graph: &DependencyGraph,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    Formatter::new(format).format_to_writer(graph, writer)
}
