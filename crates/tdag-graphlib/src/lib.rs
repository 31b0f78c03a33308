#![forbid(unsafe_code)]

//! Graph container APIs used by `tdag`.
//!
//! Nodes and edges live in insertion-ordered arenas and are addressed by stable integer
//! handles ([`NodeIx`], [`EdgeIx`]). Callers talk in string ids at the boundary; algorithms
//! walk handles so they never hold references into the arena across mutations.

mod graph;

pub use graph::{EdgeIx, Graph, NodeIx};
