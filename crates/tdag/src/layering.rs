//! Row assignment and turning-point selection.
//!
//! Rows grow away from a root sink. The walk follows incoming edges depth-first, so a node's
//! first-declared predecessor chain is laid out before its siblings. A predecessor stays on its
//! successor's row when the straight connector is unobstructed; otherwise it drops to the first
//! row below that has room for its span plus the horizontal run to the bend. A node never lands
//! on a row where one of its other edges would have to bend, and a bend moves right until its
//! vertical run clears every row it crosses.

use rustc_hash::FxHashSet;
use tdag_graphlib::{EdgeIx, Graph, NodeIx};

use crate::model::{EdgeLayout, VertexLayout};

mod rows;

use rows::Rows;

pub type LayoutGraph = Graph<VertexLayout, EdgeLayout>;

/// Follows the first outgoing edge from `start` until a node without outgoing edges.
///
/// The walk is bounded by the node count. On a cyclic graph the node reached at the bound is
/// returned.
pub fn find_root(g: &LayoutGraph, start: NodeIx) -> NodeIx {
    let mut v = start;
    for _ in 0..g.node_count() {
        match g.out_edges(v).first() {
            None => return v,
            Some(&e) => v = g.endpoints(e).1,
        }
    }
    tracing::warn!(
        start = g.node_id(start),
        stopped_at = g.node_id(v),
        "root walk did not reach a sink; the graph has a cycle"
    );
    v
}

/// Bend coordinate for an edge leaving a span ending at `src_x1` toward a span starting at
/// `dst_x0`, ignoring obstacles.
pub fn turning_x(src_x1: f64, dst_x0: f64, gap: f64) -> f64 {
    let lead = dst_x0 - gap / 2.0;
    if gap > 0.0 && src_x1 <= lead {
        lead
    } else if src_x1 < dst_x0 {
        (src_x1 + dst_x0) / 2.0
    } else {
        src_x1 + gap / 2.0
    }
}

/// Lays out the nodes that reach `root`, with `root` on row 0.
///
/// Nodes that do not reach `root` are left on row 0 and their edges stay hidden.
pub fn solve(g: &mut LayoutGraph, root: NodeIx, gap: f64) {
    let mut layering = Layering::new(g, gap);
    layering.grow(root, 0);
    layering.finish();
}

/// Lays out every node. The root of the first node's component goes on row 0; every other
/// component is stacked below, rooted at its own sink. Returns the first root.
pub fn solve_forest(g: &mut LayoutGraph, gap: f64) -> Option<NodeIx> {
    let first = g.node_indices().next()?;
    let root = find_root(g, first);

    let mut layering = Layering::new(g, gap);
    layering.grow(root, 0);

    for v in layering.g.node_indices() {
        if layering.placed[v.index()] {
            continue;
        }
        let sink = find_root(layering.g, v);
        let start = if layering.placed[sink.index()] { v } else { sink };
        let row = layering.rows.len();
        layering.grow(start, row);
    }

    layering.finish();
    Some(root)
}

struct Layering<'a> {
    g: &'a mut LayoutGraph,
    gap: f64,
    rows: Rows,
    placed: Vec<bool>,
    primary: FxHashSet<EdgeIx>,
    /// Secondary edges whose endpoints share a row with nothing in between.
    straight: FxHashSet<EdgeIx>,
}

impl<'a> Layering<'a> {
    fn new(g: &'a mut LayoutGraph, gap: f64) -> Self {
        for v in g.node_indices() {
            g.label_mut(v).y = 0;
        }
        for e in g.edge_indices() {
            let dst_x0 = g.label(g.endpoints(e).1).x0;
            let edge = g.edge_label_mut(e);
            edge.turning_x = dst_x0;
            edge.is_hidden = true;
        }
        let placed = vec![false; g.node_count()];
        Self {
            g,
            gap,
            rows: Rows::default(),
            placed,
            primary: FxHashSet::default(),
            straight: FxHashSet::default(),
        }
    }

    fn grow(&mut self, root: NodeIx, row: usize) {
        self.place_root(root, row);
        self.walk(root);
    }

    fn place_root(&mut self, v: NodeIx, row: usize) {
        let (x0, x1) = {
            let n = self.g.label(v);
            (n.x0, n.x1)
        };
        self.rows.reserve(row, x0, x1, Some(v));
        self.g.label_mut(v).y = row;
        self.placed[v.index()] = true;
        tracing::trace!(node = self.g.node_id(v), row, "placed root");
    }

    fn walk(&mut self, root: NodeIx) {
        let mut stack: Vec<(NodeIx, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            let Some(&e) = self.g.in_edges(v).get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let u = self.g.endpoints(e).0;
            if self.placed[u.index()] {
                continue;
            }
            self.place_predecessor(u, v, e);
            stack.push((u, 0));
        }
    }

    fn place_predecessor(&mut self, u: NodeIx, v: NodeIx, e: EdgeIx) {
        let row = self.g.label(v).y;
        let v_x0 = self.g.label(v).x0;
        let (u_x0, u_x1) = {
            let n = self.g.label(u);
            (n.x0, n.x1)
        };

        let same_row = u_x1 <= v_x0
            && self.rows.is_free(row, u_x0, v_x0, self.gap, &[v])
            && self.joins_row_straight(u, e, row);
        let (u_row, tx) = if same_row {
            self.rows.reserve(row, u_x0, v_x0, Some(u));
            (row, v_x0)
        } else {
            let (k, tx) = self.drop_below(u, v, e);
            self.rows.reserve(k, u_x0, tx, Some(u));
            for between in row + 1..k {
                self.rows.reserve(between, tx, tx, None);
            }
            if tx < v_x0 {
                self.rows.reserve(row, tx, v_x0, None);
            }
            (k, tx)
        };

        for f in self.row_neighbours(u, e, u_row) {
            let (lo, hi) = self.run(f);
            self.rows.reserve(u_row, lo, hi, None);
            self.straight.insert(f);
        }

        self.g.label_mut(u).y = u_row;
        self.placed[u.index()] = true;
        let edge = self.g.edge_label_mut(e);
        edge.turning_x = tx;
        edge.is_hidden = false;
        self.primary.insert(e);

        tracing::trace!(
            node = self.g.node_id(u),
            successor = self.g.node_id(v),
            row = u_row,
            same_row,
            "placed predecessor"
        );
    }

    /// Row below `v` for `u` and the bend of `u -> v`. The bend moves right until its vertical
    /// run clears every row it crosses.
    fn drop_below(&self, u: NodeIx, v: NodeIx, e: EdgeIx) -> (usize, f64) {
        let row = self.g.label(v).y;
        let v_x0 = self.g.label(v).x0;
        let (u_x0, u_x1) = {
            let n = self.g.label(u);
            (n.x0, n.x1)
        };

        let mut tx = self.bend_toward(u_x1, v, &[v]);
        loop {
            let mut k = row + 1;
            while !self.rows.is_free(k, u_x0, tx, self.gap, &[])
                || !self.joins_row_straight(u, e, k)
            {
                k += 1;
            }
            let Some(hi) = (row + 1..k)
                .filter_map(|between| self.rows.covering(between, tx))
                .reduce(f64::max)
            else {
                return (k, tx);
            };
            tx = hi + self.gap / 2.0;
            // A bend on the destination start would read as a same-row edge.
            if tx == v_x0 {
                tx += self.gap / 2.0;
            }
        }
    }

    /// Picks the bend for an edge ending at `v`. A bend left of `v` enters `v`'s row on its
    /// centerline; when that stretch is taken the edge lands on `v`'s box from below instead.
    fn bend_toward(&self, src_x1: f64, v: NodeIx, ignore: &[NodeIx]) -> f64 {
        let dst = self.g.label(v);
        let tx = turning_x(src_x1, dst.x0, self.gap);
        if tx < dst.x0 && !self.rows.is_free(dst.y, tx, dst.x0, 0.0, ignore) {
            src_x1.max(dst.x0) + self.gap / 2.0
        } else {
            tx
        }
    }

    /// Edges other than `primary` between `u` and nodes already placed on `row`.
    fn row_neighbours(&self, u: NodeIx, primary: EdgeIx, row: usize) -> Vec<EdgeIx> {
        self.g
            .out_edges(u)
            .iter()
            .chain(self.g.in_edges(u))
            .copied()
            .filter(|&f| f != primary)
            .filter(|&f| {
                let (a, b) = self.g.endpoints(f);
                let w = if a == u { b } else { a };
                w != u && self.placed[w.index()] && self.g.label(w).y == row
            })
            .collect()
    }

    /// Whether `u` can sit on `row` with every edge to a node already there drawn as a straight
    /// two-point segment.
    fn joins_row_straight(&self, u: NodeIx, primary: EdgeIx, row: usize) -> bool {
        self.row_neighbours(u, primary, row).into_iter().all(|f| {
            let (a, b) = self.g.endpoints(f);
            let (lo, hi) = self.run(f);
            lo <= hi && self.rows.is_free(row, lo, hi, 0.0, &[a, b])
        })
    }

    /// Horizontal stretch from the end of an edge's source to the start of its destination.
    fn run(&self, e: EdgeIx) -> (f64, f64) {
        let (a, b) = self.g.endpoints(e);
        (self.g.label(a).x1, self.g.label(b).x0)
    }

    fn finish(&mut self) {
        for e in self.g.edge_indices() {
            let (u, v) = self.g.endpoints(e);
            if !self.placed[u.index()] || !self.placed[v.index()] {
                continue;
            }
            let src = self.g.label(u).clone();
            let dst = self.g.label(v).clone();

            if !self.primary.contains(&e) {
                let tx = if self.straight.contains(&e) {
                    dst.x0
                } else {
                    self.bend_toward(src.x1, v, &[u, v])
                };
                let edge = self.g.edge_label_mut(e);
                edge.turning_x = tx;
                edge.is_hidden = true;
            }

            if !src.render || !dst.render {
                self.g.edge_label_mut(e).is_hidden = true;
            }
        }
    }
}
