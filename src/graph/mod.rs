//! Heap-backed directed graphs and the algorithms over them.
//!
//! Graph code is organized into:
//! - `contract`: the [`Graph`] capability trait and [`EdgeType`]
//! - `basic`: [`PriorityGraph`], [`PriorityItem`] and [`GraphDescription`]
//! - `algorithms`: topological ordering
//! - `loader`: the line-oriented text format

pub mod algorithms;
pub mod basic;
pub mod contract;
pub mod loader;

pub use basic::{EdgeId, EdgeRecord, GraphDescription, PriorityGraph, PriorityItem};
pub use contract::{EdgeType, Graph, GraphFactory};
