//! Read-only dependency graph of modules.

use std::collections::HashMap;
use std::sync::Arc;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::module::{Module, ModuleRef};

/// Read-only enumeration capability over a module graph.
///
/// Consumers see the main module and the set of all modules, never the
/// node or edge storage behind them.
pub trait ModuleSource {
    /// The main (root) module, if the graph has one.
    fn main_module(&self) -> Option<ModuleRef>;

    /// Every module of the graph, the main module included.
    fn modules(&self) -> Vec<ModuleRef>;
}

/// A module graph backed by petgraph.
///
/// Only the modules are kept, in insertion order. Module listings carry no
/// requirement edges and nothing downstream walks them, so the graph has none.
#[derive(Debug, Default)]
pub struct DepGraph {
    graph: DiGraph<ModuleRef, ()>,
    /// Lookup from identifying path to node index.
    index: HashMap<String, NodeIndex>,
    main: Option<NodeIndex>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or retrieve a module. If its path already exists, returns the existing index
    /// and the new module is discarded.
    pub fn add_module(&mut self, module: impl Into<ModuleRef>) -> NodeIndex {
        let module = module.into();
        if let Some(&idx) = self.index.get(&module.path) {
            tracing::debug!("module {} already in graph, keeping first entry", module.path);
            return idx;
        }
        let key = module.path.clone();
        let idx = self.graph.add_node(module);
        self.index.insert(key, idx);
        idx
    }

    /// Set the main module of the graph.
    pub fn set_main(&mut self, idx: NodeIndex) {
        self.main = Some(idx);
    }

    /// Look up a module by identifying path.
    pub fn find(&self, path: &str) -> Option<NodeIndex> {
        self.index.get(path).copied()
    }

    /// Get the module for an index.
    pub fn node(&self, idx: NodeIndex) -> &ModuleRef {
        &self.graph[idx]
    }

    /// Number of modules, the main module included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModuleSource for DepGraph {
    fn main_module(&self) -> Option<ModuleRef> {
        self.main.map(|idx| Arc::clone(&self.graph[idx]))
    }

    fn modules(&self) -> Vec<ModuleRef> {
        self.graph
            .node_indices()
            .map(|idx| Arc::clone(&self.graph[idx]))
            .collect()
    }
}

impl From<Module> for DepGraph {
    /// A graph containing only `main`, set as its main module.
    fn from(main: Module) -> Self {
        let mut graph = Self::new();
        let idx = graph.add_module(main);
        graph.set_main(idx);
        graph
    }
}
