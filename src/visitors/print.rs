use crate::{
    error::RuntimeError,
    node::Node,
    visitors::{OutputSink, Visitor},
};

/// Collects the printable token of every visited node.
///
/// The visitor is driven by a traversal and holds no tree state of its own;
/// the order the tokens arrive in *is* the notation. Feeding it an in-order
/// traversal prints infix, pre-order prints prefix, post-order prints
/// postfix.
#[derive(Debug, Default)]
pub struct PrintVisitor {
    tokens: Vec<String>,
}

impl PrintVisitor {
    /// Creates a visitor with no collected tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the collected tokens to `sink` as one space-separated line.
    pub fn finish(self, sink: &mut dyn OutputSink) {
        sink.write_line(&self.tokens.join(" "));
    }
}

impl Visitor for PrintVisitor {
    fn visit(&mut self, node: &Node) -> Result<(), RuntimeError> {
        self.tokens.push(node.symbol());
        Ok(())
    }
}
