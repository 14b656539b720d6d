use std::collections::VecDeque;

use crate::{error::RuntimeError, node::Node, tree::ExpressionTree};

/// Order token for pre-order traversal.
pub const PRE_ORDER: &str = "pre-order";
/// Order token for in-order traversal.
pub const IN_ORDER: &str = "in-order";
/// Order token for post-order traversal.
pub const POST_ORDER: &str = "post-order";
/// Order token for level-order traversal.
pub const LEVEL_ORDER: &str = "level-order";

/// A lazy, non-restartable traversal over a borrowed [`ExpressionTree`].
///
/// Each strategy keeps its own explicit work list instead of recursing, so
/// nodes are produced one at a time as the iterator is advanced. Traversing
/// the same tree again requires a fresh iterator from
/// [`ExpressionTree::make_iterator`].
///
/// A `Negate` node's operand plays the role of its right child in every
/// strategy.
#[derive(Debug)]
pub enum TreeIterator<'a> {
    /// Node, then left subtree, then right subtree.
    PreOrder {
        /// Nodes still to visit; right children are pushed first so left
        /// subtrees come out of the stack earlier.
        stack: Vec<&'a Node>,
    },
    /// Left subtree, then node, then right subtree.
    InOrder {
        /// The left spine pending above the current position.
        stack:   Vec<&'a Node>,
        /// The subtree the walk descends into next.
        current: Option<&'a Node>,
    },
    /// Left subtree, then right subtree, then node.
    PostOrder {
        /// Nodes paired with whether their children were already expanded.
        stack: Vec<(&'a Node, bool)>,
    },
    /// Breadth-first, one level at a time.
    LevelOrder {
        /// FIFO of discovered nodes.
        queue: VecDeque<&'a Node>,
    },
}

impl<'a> TreeIterator<'a> {
    /// Creates the traversal strategy named by `order` over `tree`.
    ///
    /// An empty tree yields an iterator that is immediately exhausted.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnsupportedOrder` if `order` is not one of the
    /// four supported tokens.
    ///
    /// ## Example
    /// ```
    /// use extree::interpreter::parser::Interpreter;
    ///
    /// let tree = Interpreter::new().interpret("1+2").unwrap();
    ///
    /// let symbols: Vec<String> = tree.make_iterator("post-order")
    ///                                .unwrap()
    ///                                .map(|node| node.symbol())
    ///                                .collect();
    /// assert_eq!(symbols, ["1", "2", "+"]);
    ///
    /// assert!(tree.make_iterator("sideways").is_err());
    /// ```
    pub fn new(tree: &'a ExpressionTree, order: &str) -> Result<Self, RuntimeError> {
        let root = tree.root().ok();

        match order {
            PRE_ORDER => Ok(Self::PreOrder { stack: root.into_iter().collect() }),

            IN_ORDER => Ok(Self::InOrder { stack:   Vec::new(),
                                           current: root, }),

            POST_ORDER => Ok(Self::PostOrder { stack: root.into_iter()
                                                          .map(|node| (node, false))
                                                          .collect() }),

            LEVEL_ORDER => Ok(Self::LevelOrder { queue: root.into_iter().collect() }),

            _ => Err(RuntimeError::UnsupportedOrder { order: order.to_string() }),
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::PreOrder { stack } => {
                let node = stack.pop()?;

                if let Some(right) = node.right_child() {
                    stack.push(right);
                }
                if let Some(left) = node.left_child() {
                    stack.push(left);
                }

                Some(node)
            },

            Self::InOrder { stack, current } => {
                while let Some(node) = current.take() {
                    stack.push(node);
                    *current = node.left_child();
                }

                let node = stack.pop()?;
                *current = node.right_child();

                Some(node)
            },

            Self::PostOrder { stack } => {
                while let Some((node, expanded)) = stack.pop() {
                    if expanded {
                        return Some(node);
                    }

                    stack.push((node, true));
                    if let Some(right) = node.right_child() {
                        stack.push((right, false));
                    }
                    if let Some(left) = node.left_child() {
                        stack.push((left, false));
                    }
                }

                None
            },

            Self::LevelOrder { queue } => {
                let node = queue.pop_front()?;

                if let Some(left) = node.left_child() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right_child() {
                    queue.push_back(right);
                }

                Some(node)
            },
        }
    }
}
