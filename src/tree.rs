use crate::{error::RuntimeError, iterators::TreeIterator, node::Node, visitors::Visitor};

/// A handle owning at most one root [`Node`].
///
/// The tree is the unit everything downstream of the parser works on:
/// traversals borrow it, visitors are dispatched over it, and the session
/// replaces it wholesale on every successful `make_tree`. An empty tree is a
/// valid value and is what parsing an empty expression produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    /// Creates a tree over `root`, which may be `None` for an empty tree.
    #[must_use]
    pub const fn new(root: Option<Node>) -> Self {
        Self { root }
    }

    /// Returns `true` if the tree has no root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the root node.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyTree` if the tree is empty.
    pub const fn root(&self) -> Result<&Node, RuntimeError> {
        match self.root.as_ref() {
            Some(root) => Ok(root),
            None => Err(RuntimeError::EmptyTree),
        }
    }

    /// Gets the root's diagnostic marker: the value for a `Number` root, the
    /// operator character as an integer otherwise.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyTree` if the tree is empty.
    ///
    /// ## Example
    /// ```
    /// use extree::interpreter::parser::Interpreter;
    ///
    /// let tree = Interpreter::new().interpret("1+2").unwrap();
    /// assert_eq!(tree.item().unwrap(), '+' as i64);
    /// ```
    pub fn item(&self) -> Result<i64, RuntimeError> {
        Ok(self.root()?.item())
    }

    /// Gets the root's left subtree.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyTree` if the tree is empty or the root
    /// has no left child.
    pub fn left(&self) -> Result<&Node, RuntimeError> {
        self.root()?.left_child().ok_or(RuntimeError::EmptyTree)
    }

    /// Gets the root's right subtree. A `Negate` root exposes its operand
    /// here.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyTree` if the tree is empty or the root
    /// has no right child.
    pub fn right(&self) -> Result<&Node, RuntimeError> {
        self.root()?.right_child().ok_or(RuntimeError::EmptyTree)
    }

    /// Dispatches `visitor` to the root node.
    ///
    /// Traversal-driven operations call the visitor once per node yielded by
    /// an iterator instead; `accept` is the single-node entry point that
    /// supports them.
    ///
    /// # Errors
    /// Returns `RuntimeError::EmptyTree` if the tree is empty, or whatever
    /// the visitor itself reports.
    pub fn accept(&self, visitor: &mut dyn Visitor) -> Result<(), RuntimeError> {
        visitor.visit(self.root()?)
    }

    /// Creates a lazy traversal over the tree in the requested order.
    ///
    /// Supported order tokens are `"pre-order"`, `"in-order"`,
    /// `"post-order"`, and `"level-order"`. Each call produces a fresh,
    /// non-restartable iterator.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedOrder` for any other token.
    pub fn make_iterator<'a>(&'a self, order: &str) -> Result<TreeIterator<'a>, RuntimeError> {
        TreeIterator::new(self, order)
    }
}
