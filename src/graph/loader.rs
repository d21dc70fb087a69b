//! Line-oriented graph description loader.
//!
//! The format is:
//!
//! ```text
//! <vertex count N>
//! <vertex name>          (N lines)
//! <edge count M>
//! <source>,<target>,<priority>   (M lines)
//! ```
//!
//! Vertex names and edge fields are trimmed. Vertices are added in file order,
//! then each edge through [`PriorityGraph::add_edge`], so edges naming unknown
//! vertices and parallel edges are dropped the same way the API drops them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::graph::{EdgeRecord, GraphDescription, PriorityGraph};

/// Errors raised while reading a graph description.
///
/// Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input ended before a required line.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the loader was looking for.
        expected: &'static str,
    },

    /// A count line did not hold a non-negative integer.
    #[error("line {line}: invalid count {value:?}")]
    InvalidCount {
        /// Offending line.
        line: usize,
        /// Raw line content.
        value: String,
    },

    /// An edge line did not have `source,target,priority` fields.
    #[error("line {line}: malformed edge {content:?}")]
    MalformedEdge {
        /// Offending line.
        line: usize,
        /// Raw line content.
        content: String,
    },

    /// An edge priority was not an integer.
    #[error("line {line}: invalid priority {value:?}")]
    InvalidPriority {
        /// Offending line.
        line: usize,
        /// Raw priority field.
        value: String,
    },
}

struct Lines<I> {
    inner: I,
    line: usize,
}

impl<I> Lines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self, expected: &'static str) -> Result<(usize, String), LoadError> {
        let content = self.inner.next().ok_or(LoadError::UnexpectedEof { expected })??;
        self.line += 1;
        Ok((self.line, content))
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize, LoadError> {
        let (line, content) = self.next_line(expected)?;
        content
            .trim()
            .parse::<usize>()
            .map_err(|_| LoadError::InvalidCount { line, value: content })
    }
}

fn parse_edge(line: usize, content: &str) -> Result<EdgeRecord<String>, LoadError> {
    let malformed = || LoadError::MalformedEdge {
        line,
        content: content.to_string(),
    };
    let mut fields = content.trim().split(',').map(str::trim);
    let source = fields.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let target = fields.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let priority = fields.next().ok_or_else(malformed)?;
    let priority = priority.parse::<i32>().map_err(|_| LoadError::InvalidPriority {
        line,
        value: priority.to_string(),
    })?;
    Ok(EdgeRecord {
        source: source.to_string(),
        target: target.to_string(),
        priority,
    })
}

fn parse_lines<I>(lines: I) -> Result<GraphDescription<String>, LoadError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut lines = Lines { inner: lines, line: 0 };
    let mut description = GraphDescription::new();

    let vertex_count = lines.next_count("vertex count")?;
    description.vertices.reserve(vertex_count);
    for _ in 0..vertex_count {
        let (_, name) = lines.next_line("vertex name")?;
        description.vertices.push(name.trim().to_string());
    }

    let edge_count = lines.next_count("edge count")?;
    description.edges.reserve(edge_count);
    for _ in 0..edge_count {
        let (line, content) = lines.next_line("edge")?;
        description.edges.push(parse_edge(line, &content)?);
    }

    trace_event!(
        debug,
        vertices = description.vertices.len(),
        edges = description.edges.len(),
        "graph description parsed"
    );
    Ok(description)
}

/// Parses a description from an in-memory string.
///
/// # Errors
/// Returns a [`LoadError`] describing the first malformed or missing line.
pub fn parse_description(input: &str) -> Result<GraphDescription<String>, LoadError> {
    parse_lines(input.lines().map(|line| Ok::<_, io::Error>(line.to_string())))
}

/// Reads a description from `reader` and builds the graph.
///
/// # Errors
/// Returns a [`LoadError`] for I/O failures and malformed input.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<PriorityGraph<String>, LoadError> {
    parse_lines(reader.lines()).map(PriorityGraph::from_description)
}

/// Reads a description file and builds the graph.
///
/// # Errors
/// Returns a [`LoadError`] if the file cannot be opened or is malformed.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PriorityGraph<String>, LoadError> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}
