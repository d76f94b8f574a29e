use neo4rs::{query, Graph, Txn};
use tokio::runtime::{Builder, Runtime};
use tracing::info;

use super::{index_statement, GraphSink, LoadConfig};
use crate::error::{JdepsError, Result};

/// Sink that executes statements against a Neo4j server over Bolt.
///
/// The driver is async; the sink owns a current-thread runtime and blocks on
/// each call so the loader itself stays synchronous.
pub struct Neo4jSink {
    runtime: Runtime,
    graph: Graph,
    txn: Option<Txn>,
}

impl Neo4jSink {
    /// Connect with the endpoint and credentials in `config`.
    pub fn connect(config: &LoadConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let graph = runtime.block_on(Graph::new(
            config.url.as_str(),
            config.username.as_str(),
            config.password.as_str(),
        ))?;
        info!(url = %config.url, user = %config.username, "neo4j.connected");
        Ok(Self {
            runtime,
            graph,
            txn: None,
        })
    }
}

impl GraphSink for Neo4jSink {
    fn create_index(&mut self, label: &str, property: &str) -> Result<()> {
        let statement = index_statement(label, property);
        self.runtime.block_on(self.graph.run(query(&statement)))?;
        Ok(())
    }

    fn begin(&mut self) -> Result<()> {
        let txn = self.runtime.block_on(self.graph.start_txn())?;
        self.txn = Some(txn);
        Ok(())
    }

    fn run(&mut self, statement: &str, source: &str, destination: &str) -> Result<()> {
        let txn = self.txn.as_mut().ok_or(JdepsError::NoTransaction)?;
        let q = query(statement)
            .param("src", source)
            .param("dest", destination);
        self.runtime.block_on(txn.run(q))?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let txn = self.txn.take().ok_or(JdepsError::NoTransaction)?;
        self.runtime.block_on(txn.commit())?;
        Ok(())
    }
}
