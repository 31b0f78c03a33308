//! The [`Tdag`] facade: declare nodes and edges, run a layout pass, read projections.

use tdag_graphlib::{EdgeIx, NodeIx};

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::layering::{self, LayoutGraph};
use crate::model::{Bounds, EdgeLayout, EdgePath, NodeBox, VertexLayout};
use crate::routing;

#[derive(Debug, Clone, Default)]
pub struct Tdag {
    graph: LayoutGraph,
    config: LayoutConfig,
    root: Option<NodeIx>,
}

impl Tdag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Declares a rendering node spanning `[x0, x1]`.
    pub fn set_node(&mut self, id: impl Into<String>, x0: f64, x1: f64) -> &mut Self {
        self.set_node_with_render(id, x0, x1, true)
    }

    /// Declares a node, or replaces the extent and `render` flag of an existing one. A row
    /// computed by an earlier layout pass is kept until the next pass.
    pub fn set_node_with_render(
        &mut self,
        id: impl Into<String>,
        x0: f64,
        x1: f64,
        render: bool,
    ) -> &mut Self {
        let id = id.into();
        let mut label = VertexLayout::new(x0, x1, render);
        if let Some(prev) = self.graph.node(&id) {
            label.y = prev.y;
        }
        self.graph.set_node(id, label);
        self
    }

    /// Declares the edge `src -> dst`. Both endpoints must already exist; otherwise the graph
    /// is left unchanged and [`Error::UnknownNode`] names the missing one.
    pub fn set_edge(&mut self, src: &str, dst: &str) -> Result<&mut Self> {
        for id in [src, dst] {
            if !self.graph.has_node(id) {
                tracing::warn!(src, dst, missing = id, "can't find node; edge ignored");
                return Err(Error::UnknownNode { id: id.to_string() });
            }
        }
        self.graph.set_edge(src, dst, EdgeLayout::default());
        Ok(self)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.graph.has_node(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, id: &str) -> Option<NodeBox> {
        self.graph
            .node(id)
            .map(|n| routing::project_node(id, n, &self.config))
    }

    /// Node boxes in declaration order.
    pub fn nodes(&self) -> Vec<NodeBox> {
        self.graph
            .node_indices()
            .map(|v| {
                routing::project_node(self.graph.node_id(v), self.graph.label(v), &self.config)
            })
            .collect()
    }

    pub fn edge(&self, src: &str, dst: &str) -> Option<EdgePath> {
        let e = self.graph.edge_ix(src, dst)?;
        Some(self.project_edge(e))
    }

    /// Edge paths in declaration order.
    pub fn edges(&self) -> Vec<EdgePath> {
        self.graph
            .edge_indices()
            .map(|e| self.project_edge(e))
            .collect()
    }

    fn project_edge(&self, e: EdgeIx) -> EdgePath {
        let (v, w) = self.graph.endpoints(e);
        routing::project_edge(
            (self.graph.node_id(v), self.graph.label(v)),
            (self.graph.node_id(w), self.graph.label(w)),
            self.graph.edge_label(e),
            &self.config,
        )
    }

    pub fn vertex(&self, id: &str) -> Option<&VertexLayout> {
        self.graph.node(id)
    }

    pub fn edge_layout(&self, src: &str, dst: &str) -> Option<&EdgeLayout> {
        self.graph.edge(src, dst)
    }

    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    /// Root of the last layout pass.
    pub fn root(&self) -> Option<&str> {
        self.root.map(|v| self.graph.node_id(v))
    }

    pub fn bounds(&self) -> Bounds {
        routing::bounds(
            self.graph.node_indices().map(|v| self.graph.label(v)),
            &self.config,
        )
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn gap(&self) -> f64 {
        self.config.gap
    }

    pub fn set_gap(&mut self, gap: f64) -> &mut Self {
        self.config.gap = gap;
        self
    }

    pub fn line_height(&self) -> f64 {
        self.config.line_height
    }

    pub fn set_line_height(&mut self, line_height: f64) -> &mut Self {
        self.config.line_height = line_height;
        self
    }

    pub fn line_space(&self) -> f64 {
        self.config.line_space
    }

    pub fn set_line_space(&mut self, line_space: f64) -> &mut Self {
        self.config.line_space = line_space;
        self
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.root = None;
    }

    /// Recomputes every row and turning point. Does nothing on an empty graph.
    pub fn layout(&mut self) {
        let Some(root) = layering::solve_forest(&mut self.graph, self.config.gap) else {
            return;
        };
        self.root = Some(root);
        tracing::debug!(
            root = self.graph.node_id(root),
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            rows = self.row_count(),
            "tdag layout"
        );
    }

    fn row_count(&self) -> usize {
        self.graph
            .node_indices()
            .map(|v| self.graph.label(v).y + 1)
            .max()
            .unwrap_or(0)
    }
}
