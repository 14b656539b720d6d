/// The evaluation visitor.
///
/// Reduces a post-order node sequence to a single integer using an explicit
/// value stack, reporting division by zero and overflow as typed errors.
pub mod evaluate;
/// The print visitor.
///
/// Renders a node sequence as space-separated tokens, so the traversal order
/// alone decides whether the output reads as prefix, infix, or postfix
/// notation.
pub mod print;

pub use evaluate::EvaluationVisitor;
pub use print::PrintVisitor;

use crate::{error::RuntimeError, node::Node};

/// Per-node dispatch driven by a traversal.
///
/// A visitor receives each node exactly as the chosen traversal yields it
/// and accumulates whatever state its operation needs; it never walks the
/// tree on its own.
pub trait Visitor {
    /// Processes one node.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when the operation fails on this node,
    /// such as a division by zero during evaluation.
    fn visit(&mut self, node: &Node) -> Result<(), RuntimeError>;
}

/// An abstract destination for finished lines of output.
///
/// The core never formats for a particular device; it hands complete strings
/// to whatever sink the caller provides.
pub trait OutputSink {
    /// Writes one finished line.
    fn write_line(&mut self, text: &str);
}

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects lines in memory; the sink used throughout the test suite.
///
/// ## Example
/// ```
/// use extree::visitors::{BufferSink, OutputSink};
///
/// let mut sink = BufferSink::default();
/// sink.write_line("7");
///
/// assert_eq!(sink.lines(), ["7"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Gets every line written so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
