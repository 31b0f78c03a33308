//! Layout records and the projections handed to renderers.
//!
//! [`VertexLayout`] and [`EdgeLayout`] are the labels stored in the graph and mutated by the
//! layering pass. [`NodeBox`] and [`EdgePath`] are computed views in pixel space.

use serde::Serialize;

/// Per-node layout data.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexLayout {
    pub x0: f64,
    pub x1: f64,
    /// Row index. Only the layering pass writes this.
    pub y: usize,
    pub render: bool,
}

impl VertexLayout {
    pub fn new(x0: f64, x1: f64, render: bool) -> Self {
        Self {
            x0,
            x1,
            y: 0,
            render,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Per-edge routing data, written by the layering pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeLayout {
    pub turning_x: f64,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeBox {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub x0: f64,
    pub x1: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgePath {
    /// `"{src}->{dst}"`.
    pub id: String,
    pub src: String,
    pub dst: String,
    pub render: bool,
    /// Empty when either endpoint does not render.
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub(crate) fn edge_id(src: &str, dst: &str) -> String {
    format!("{src}->{dst}")
}
