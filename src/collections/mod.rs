//! Collections backing the graph layer.
//!
//! Currently this is the removable binary min-heap used as per-vertex
//! adjacency storage.

pub mod heap;

pub use heap::{HeapCursor, MinHeap, DEFAULT_INITIAL_CAPACITY};
