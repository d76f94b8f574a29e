//! Push a finished dependency graph into a property-graph store.
//!
//! Every edge becomes two `MERGE`d nodes named after its endpoints and one
//! `MERGE`d relationship between them, so reloading the same graph is a
//! no-op. Statements are grouped into transactions of `batch_size` edges.

pub mod cypher;
pub mod neo4j;

use std::fmt;
use tracing::{debug, info};

use crate::core::DependencyGraph;
use crate::error::{JdepsError, Result};

pub use cypher::CypherScriptSink;
pub use neo4j::Neo4jSink;

pub const DEFAULT_URL: &str = "bolt://localhost:7687";
pub const DEFAULT_USERNAME: &str = "neo4j";
pub const DEFAULT_PASSWORD: &str = "neo4j";
pub const DEFAULT_NODE_LABEL: &str = "Package";
pub const DEFAULT_REL_TYPE: &str = "PDEPENDS";
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Store endpoint, credentials, node and relationship naming, and
/// transaction sizing
#[derive(Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub node_label: String,
    pub rel_type: String,
    pub batch_size: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            node_label: DEFAULT_NODE_LABEL.to_string(),
            rel_type: DEFAULT_REL_TYPE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl fmt::Debug for LoadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("node_label", &self.node_label)
            .field("rel_type", &self.rel_type)
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl LoadConfig {
    /// Labels and types are spliced into statement text, so they must be
    /// plain identifiers: a letter followed by letters, digits or `_`.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.node_label) {
            return Err(JdepsError::InvalidIdentifier {
                kind: "node label",
                value: self.node_label.clone(),
            });
        }
        if !is_valid_identifier(&self.rel_type) {
            return Err(JdepsError::InvalidIdentifier {
                kind: "relationship type",
                value: self.rel_type.clone(),
            });
        }
        if self.batch_size == 0 {
            return Err(JdepsError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Upsert for one edge; `$src` and `$dest` are bound per call.
    pub fn merge_statement(&self) -> String {
        format!(
            "MERGE (src:{label} {{name: $src}}) \
             MERGE (dest:{label} {{name: $dest}}) \
             MERGE (src)-[:{rel}]->(dest)",
            label = self.node_label,
            rel = self.rel_type
        )
    }
}

/// Idempotent index creation on `label(property)`.
pub fn index_statement(label: &str, property: &str) -> String {
    format!("CREATE INDEX IF NOT EXISTS FOR (n:{label}) ON (n.{property})")
}

pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Connection to a graph store, one open transaction at a time.
pub trait GraphSink {
    /// Index nodes carrying `label` on `property`.
    fn create_index(&mut self, label: &str, property: &str) -> Result<()>;

    fn begin(&mut self) -> Result<()>;

    /// Execute `statement` inside the open transaction with `$src` / `$dest`
    /// bound to `source` / `destination`.
    fn run(&mut self, statement: &str, source: &str, destination: &str) -> Result<()>;

    fn commit(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub edges: usize,
    pub commits: usize,
}

pub struct GraphLoader {
    config: LoadConfig,
}

impl GraphLoader {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Write every edge of `graph` into `sink`.
    ///
    /// Configuration is validated before anything reaches the sink. A final
    /// commit always closes the last transaction, even when it is empty.
    pub fn load<S: GraphSink + ?Sized>(
        &self,
        graph: &DependencyGraph,
        sink: &mut S,
    ) -> Result<LoadStats> {
        self.config.validate()?;

        sink.create_index(&self.config.node_label, "name")?;
        let statement = self.config.merge_statement();
        let batch_size = self.config.batch_size;
        let mut stats = LoadStats::default();

        sink.begin()?;
        for source in graph.sources() {
            for destination in graph.destinations(source) {
                sink.run(&statement, source, destination)?;
                stats.edges += 1;
                if stats.edges % batch_size == 0 {
                    info!(edges = stats.edges, "load.commit");
                    sink.commit()?;
                    stats.commits += 1;
                    sink.begin()?;
                }
            }
        }
        sink.commit()?;
        stats.commits += 1;

        debug!(edges = stats.edges, commits = stats.commits, "load.done");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_rules() {
        assert!(is_valid_identifier("Package"));
        assert!(is_valid_identifier("P_DEPENDS2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1Package"));
        assert!(!is_valid_identifier("_Package"));
        assert!(!is_valid_identifier("Pack age"));
        assert!(!is_valid_identifier("Pkg})-[r]-("));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(LoadConfig::default().validate().is_ok());
    }

    #[test]
    fn node_label_is_checked_first() {
        let config = LoadConfig {
            node_label: "bad label".to_string(),
            rel_type: "bad type".to_string(),
            batch_size: 1,
            ..LoadConfig::default()
        };
        match config.validate() {
            Err(JdepsError::InvalidIdentifier { kind, value }) => {
                assert_eq!(kind, "node label");
                assert_eq!(value, "bad label");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = LoadConfig {
            batch_size: 0,
            ..LoadConfig::default()
        };
        assert!(matches!(config.validate(), Err(JdepsError::InvalidBatchSize)));
    }

    #[test]
    fn default_connection_settings() {
        let config = LoadConfig::default();
        assert_eq!(config.url, "bolt://localhost:7687");
        assert_eq!(config.username, "neo4j");
        assert_eq!(config.password, "neo4j");
    }

    #[test]
    fn debug_output_hides_password() {
        let config = LoadConfig {
            password: "hunter2".to_string(),
            ..LoadConfig::default()
        };
        let shown = format!("{:?}", config);
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("bolt://localhost:7687"));
    }

    #[test]
    fn index_statement_targets_label_property() {
        assert_eq!(
            index_statement("Package", "name"),
            "CREATE INDEX IF NOT EXISTS FOR (n:Package) ON (n.name)"
        );
    }

    #[test]
    fn merge_statement_uses_label_and_type() {
        let stmt = LoadConfig::default().merge_statement();
        assert!(stmt.contains("MERGE (src:Package {name: $src})"));
        assert!(stmt.contains("MERGE (dest:Package {name: $dest})"));
        assert!(stmt.contains("MERGE (src)-[:PDEPENDS]->(dest)"));
    }
}
