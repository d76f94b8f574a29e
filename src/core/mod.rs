pub mod dialect;
pub mod extractor;
pub mod graph;

pub use dialect::Dialect;
pub use extractor::{extract_graph, DependencyExtractor};
pub use graph::DependencyGraph;
