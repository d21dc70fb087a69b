//! Basic graph implementations.
//!
//! This module contains the heap-backed directed graph and the value types it
//! stores and exchanges.

pub mod description;
pub mod priority_graph;
pub mod priority_item;

pub use description::{EdgeRecord, GraphDescription};
pub use priority_graph::PriorityGraph;
pub use priority_item::{EdgeId, PriorityItem};
