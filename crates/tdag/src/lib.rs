#![forbid(unsafe_code)]

//! Row layout and orthogonal edge routing for DAGs whose nodes occupy a horizontal span.
//!
//! Callers supply each node's extent `[x0, x1]`; a layout pass assigns rows, starting from a
//! root sink, and picks a turning point per edge. Node boxes and edge polylines are then
//! projected on demand:
//!
//! ```
//! let mut tdag = tdag::Tdag::new();
//! tdag.set_node("a", 0.0, 10.0).set_node("b", 20.0, 30.0);
//! tdag.set_edge("a", "b").unwrap();
//! tdag.layout();
//!
//! assert_eq!(tdag.root(), Some("b"));
//! assert_eq!(tdag.edge("a", "b").unwrap().points.len(), 2);
//! ```

pub use tdag_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod layering;
mod layout;
pub mod model;
pub mod routing;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use layout::Tdag;
pub use model::{Bounds, EdgeLayout, EdgePath, NodeBox, Point, VertexLayout};
