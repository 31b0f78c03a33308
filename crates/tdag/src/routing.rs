//! Projection of solved layout data into pixel space.
//!
//! Every function here is pure: it reads rows, extents and turning points written by
//! [`crate::layering`] and never mutates them.

use crate::config::LayoutConfig;
use crate::model::{Bounds, EdgeLayout, EdgePath, NodeBox, Point, VertexLayout, edge_id};

pub fn y_top(row: usize, config: &LayoutConfig) -> f64 {
    row as f64 * config.row_pitch()
}

pub fn y_center(row: usize, config: &LayoutConfig) -> f64 {
    y_top(row, config) + config.line_height / 2.0
}

pub fn project_node(id: &str, node: &VertexLayout, config: &LayoutConfig) -> NodeBox {
    NodeBox {
        id: id.to_string(),
        x: node.x0,
        y: y_top(node.y, config),
        x0: node.x0,
        x1: node.x1,
        width: node.width(),
        height: config.line_height,
    }
}

pub fn project_edge(
    (src_id, src): (&str, &VertexLayout),
    (dst_id, dst): (&str, &VertexLayout),
    edge: &EdgeLayout,
    config: &LayoutConfig,
) -> EdgePath {
    let render = src.render && dst.render;
    let points = if render {
        route_edge(src, dst, edge, config)
    } else {
        Vec::new()
    };
    EdgePath {
        id: edge_id(src_id, dst_id),
        src: src_id.to_string(),
        dst: dst_id.to_string(),
        render,
        points,
    }
}

/// Polyline from the trailing end of `src` to `dst`.
///
/// No branch ends past `dst.x1`.
pub fn route_edge(
    src: &VertexLayout,
    dst: &VertexLayout,
    edge: &EdgeLayout,
    config: &LayoutConfig,
) -> Vec<Point> {
    let y0 = y_center(src.y, config);
    let y1 = y_center(dst.y, config);

    if edge.turning_x == dst.x0 {
        return vec![Point::new(src.x1, y0), Point::new(dst.x0, y1)];
    }

    let gap = config.gap;
    let x0 = src.x1;
    let x1 = dst.x0;
    let x2 = dst.x0 + gap;
    let x3 = dst.x1;
    // Land on the destination box edge facing the source.
    let offset = if y0 < y1 {
        -config.line_height / 2.0
    } else {
        config.line_height / 2.0
    };
    let y2 = y1 + offset;

    let (cx, end) = if edge.is_hidden {
        if x0 >= x1 && x2 >= x3 {
            ((x0 + x3) / 2.0, Point::new(x3, y2))
        } else if x0 >= x1 {
            (x0 + gap / 2.0, Point::new(x2, y2))
        } else {
            ((x0 + x1) / 2.0, Point::new(x1, y1))
        }
    } else {
        let tx = edge.turning_x;
        if tx >= x1 && tx + gap / 2.0 >= x3 {
            (tx, Point::new(x3, y2))
        } else if tx >= x1 {
            (tx, Point::new(tx + gap / 2.0, y2))
        } else {
            (tx, Point::new(x1, y1))
        }
    };

    vec![
        Point::new(x0, y0),
        Point::new(cx, y0),
        Point::new(cx, end.y),
        end,
    ]
}

/// Smallest box covering every node box; all zero when there are no nodes.
pub fn bounds<'a>(
    nodes: impl IntoIterator<Item = &'a VertexLayout>,
    config: &LayoutConfig,
) -> Bounds {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_row: Option<usize> = None;
    for n in nodes {
        min_x = min_x.min(n.x0);
        max_x = max_x.max(n.x1);
        max_row = Some(max_row.map_or(n.y, |r| r.max(n.y)));
    }
    let Some(max_row) = max_row else {
        return Bounds::default();
    };
    Bounds {
        x: min_x,
        y: 0.0,
        width: max_x - min_x,
        height: y_top(max_row, config) + config.line_height,
    }
}
