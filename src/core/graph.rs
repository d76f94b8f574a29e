use petgraph::graph::{DiGraph, NodeIndex};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;

use crate::error::Result;

/// Accumulated dependency edges, keyed by source identifier.
///
/// Identifiers are package names, fully-qualified class names or jar file
/// names depending on the dialect that produced them. Every identifier is a
/// single node; each edge is stored once no matter how often it is
/// registered. Sources are remembered in the order they were first seen so
/// serialization and incremental merging are stable.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    sources: Vec<NodeIndex>,
    edges: HashSet<(NodeIndex, NodeIndex)>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge `source -> destination`.
    ///
    /// Returns `true` when the edge is new and `false` when it was already
    /// present, in which case the graph is left untouched.
    pub fn register(&mut self, source: &str, destination: &str) -> bool {
        let source_idx = self.node_index(source);
        let dest_idx = self.node_index(destination);

        if !self.edges.insert((source_idx, dest_idx)) {
            return false;
        }
        if self.graph.neighbors(source_idx).next().is_none() {
            self.sources.push(source_idx);
        }
        self.graph.add_edge(source_idx, dest_idx, ());
        true
    }

    /// Register every edge of `other` into this graph.
    pub fn merge(&mut self, other: &DependencyGraph) {
        for source in other.sources() {
            for destination in other.destinations(source) {
                self.register(source, destination);
            }
        }
    }

    /// Sources in first-registration order.
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.sources.iter().map(|&idx| self.graph[idx].as_str())
    }

    /// Destinations of `source`, sorted lexicographically. Empty when
    /// `source` never appeared as a source.
    pub fn destinations(&self, source: &str) -> Vec<&str> {
        let Some(&idx) = self.node_map.get(source) else {
            return Vec::new();
        };
        let mut dests: Vec<&str> = self
            .graph
            .neighbors(idx)
            .map(|dest| self.graph[dest].as_str())
            .collect();
        dests.sort_unstable();
        dests
    }

    pub fn contains_edge(&self, source: &str, destination: &str) -> bool {
        match (self.node_map.get(source), self.node_map.get(destination)) {
            (Some(&s), Some(&d)) => self.edges.contains(&(s, d)),
            _ => false,
        }
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sorted view of the whole graph, used by the JSON formatter.
    pub fn to_sorted_map(&self) -> BTreeMap<&str, Vec<&str>> {
        self.sources()
            .map(|source| (source, self.destinations(source)))
            .collect()
    }

    /// Rebuild a graph from its JSON rendering: an object mapping each
    /// source to an array of destinations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawGraph = serde_json::from_str(json)?;
        Ok(raw.into_graph())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawGraph = serde_json::from_reader(reader)?;
        Ok(raw.into_graph())
    }

    fn node_index(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), idx);
        idx
    }
}

#[derive(Deserialize)]
#[serde(transparent)]
struct RawGraph(BTreeMap<String, Vec<String>>);

impl RawGraph {
    fn into_graph(self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for (source, dests) in &self.0 {
            for dest in dests {
                graph.register(source, dest);
            }
        }
        graph
    }
}
