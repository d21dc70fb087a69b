//! Graph algorithms over [`PriorityGraph`](crate::PriorityGraph).

pub mod topological_sort;

pub use topological_sort::{is_acyclic, is_topological_order, topological_sort, topological_sort_all};
