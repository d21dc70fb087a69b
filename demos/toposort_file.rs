//! Loads a graph description file and prints a topological order.
//!
//! ```text
//! cargo run --example toposort_file -- [PATH] [START]
//! ```
//!
//! `PATH` defaults to the bundled `tests/data/sample_graph.txt`. Without
//! `START` the sort begins at the first vertex in the file.

use anyhow::{Context, Result};
use heapgraph::graph::loader::load_from_path;
use heapgraph::{topological_sort, topological_sort_all};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample_graph.txt").to_string());
    let start = args.next();

    let graph = load_from_path(&path).with_context(|| format!("failed to load {path}"))?;
    println!("{graph:?}");

    let order = match &start {
        Some(start) => topological_sort(&graph, start),
        None => topological_sort_all(&graph),
    }
    .context("topological sort failed")?;

    println!("Topological order:");
    for vertex in &order {
        println!("  {vertex}");
    }

    println!("\nDescription:\n{}", graph.to_description().to_json()?);
    Ok(())
}
