//! The core [`Graph`] container.
//!
//! A directed, simple graph: at most one edge per ordered `(v, w)` pair. Node and edge
//! enumeration follows insertion order, which layout code relies on for determinism.

use rustc_hash::FxBuildHasher;

mod entries;

use entries::{EdgeEntry, NodeEntry};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Stable handle of a node inside one [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIx(usize);

impl NodeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle of an edge inside one [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIx(usize);

impl EdgeIx {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, NodeIx>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<(NodeIx, NodeIx), EdgeIx>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.edge_index.clear();
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts a node, or replaces the label of an existing one. The handle of an existing
    /// node never changes, so its edges stay attached.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> NodeIx {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(&id) {
            self.nodes[ix.0].label = label;
            return ix;
        }
        let ix = NodeIx(self.nodes.len());
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        });
        self.node_index.insert(id, ix);
        ix
    }

    pub fn node_ix(&self, id: &str) -> Option<NodeIx> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_ix(id).map(|ix| &self.nodes[ix.0].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_ix(id).map(move |ix| &mut self.nodes[ix.0].label)
    }

    pub fn node_id(&self, ix: NodeIx) -> &str {
        &self.nodes[ix.0].id
    }

    pub fn label(&self, ix: NodeIx) -> &N {
        &self.nodes[ix.0].label
    }

    pub fn label_mut(&mut self, ix: NodeIx) -> &mut N {
        &mut self.nodes[ix.0].label
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIx> + use<N, E> {
        (0..self.nodes.len()).map(NodeIx)
    }

    /// Inserts an edge `v -> w`, or replaces the label of an existing one.
    ///
    /// Returns `None` and leaves the graph untouched when either endpoint is unknown.
    pub fn set_edge(&mut self, v: &str, w: &str, label: E) -> Option<EdgeIx> {
        let v = self.node_ix(v)?;
        let w = self.node_ix(w)?;
        if let Some(&ix) = self.edge_index.get(&(v, w)) {
            self.edges[ix.0].label = label;
            return Some(ix);
        }
        let ix = EdgeIx(self.edges.len());
        self.edges.push(EdgeEntry { v, w, label });
        self.edge_index.insert((v, w), ix);
        self.nodes[v.0].out_edges.push(ix);
        self.nodes[w.0].in_edges.push(ix);
        Some(ix)
    }

    pub fn edge_ix(&self, v: &str, w: &str) -> Option<EdgeIx> {
        let v = self.node_ix(v)?;
        let w = self.node_ix(w)?;
        self.edge_index.get(&(v, w)).copied()
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_ix(v, w).is_some()
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_ix(v, w).map(|ix| &self.edges[ix.0].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        self.edge_ix(v, w).map(move |ix| &mut self.edges[ix.0].label)
    }

    pub fn edge_label(&self, ix: EdgeIx) -> &E {
        &self.edges[ix.0].label
    }

    pub fn edge_label_mut(&mut self, ix: EdgeIx) -> &mut E {
        &mut self.edges[ix.0].label
    }

    /// `(source, target)` handles of an edge.
    pub fn endpoints(&self, ix: EdgeIx) -> (NodeIx, NodeIx) {
        let e = &self.edges[ix.0];
        (e.v, e.w)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIx> + use<N, E> {
        (0..self.edges.len()).map(EdgeIx)
    }

    pub fn out_edges(&self, v: NodeIx) -> &[EdgeIx] {
        &self.nodes[v.0].out_edges
    }

    pub fn in_edges(&self, v: NodeIx) -> &[EdgeIx] {
        &self.nodes[v.0].in_edges
    }

    pub fn successors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.out_edges(v).iter().map(|&e| self.edges[e.0].w)
    }

    pub fn predecessors(&self, v: NodeIx) -> impl Iterator<Item = NodeIx> + '_ {
        self.in_edges(v).iter().map(|&e| self.edges[e.0].v)
    }

    /// Nodes without outgoing edges, in insertion order.
    pub fn sinks(&self) -> Vec<NodeIx> {
        self.node_indices()
            .filter(|&ix| self.nodes[ix.0].out_edges.is_empty())
            .collect()
    }
}
