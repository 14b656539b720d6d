use crate::{
    error::RuntimeError,
    node::Node,
    visitors::Visitor,
};

/// Reduces a post-order node sequence to one integer.
///
/// The visitor maintains an explicit value stack: a `Number` pushes its
/// value, a `Negate` pops one operand, and a binary operator pops two (right
/// first, then left, which preserves operand order). Because operands must
/// be on the stack before the operator that consumes them arrives, the
/// visitor only works when driven by a post-order traversal; the session
/// rejects every other order before traversal begins.
///
/// All arithmetic is checked: division by zero and `i64` overflow surface as
/// typed errors instead of wrapping.
#[derive(Debug, Default)]
pub struct EvaluationVisitor {
    stack: Vec<i64>,
}

impl EvaluationVisitor {
    /// Creates a visitor with an empty value stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the visitor and yields the final value.
    ///
    /// # Errors
    /// Returns `RuntimeError::ImbalancedEvaluation` if the stack does not
    /// hold exactly one value, which indicates the traversal did not cover a
    /// well-formed tree.
    pub fn result(mut self) -> Result<i64, RuntimeError> {
        let value = self.stack
                        .pop()
                        .ok_or(RuntimeError::ImbalancedEvaluation { depth: 0 })?;

        if self.stack.is_empty() {
            Ok(value)
        } else {
            Err(RuntimeError::ImbalancedEvaluation { depth: self.stack.len() + 1 })
        }
    }

    /// Pops one operand off the value stack.
    fn pop(&mut self) -> Result<i64, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::ImbalancedEvaluation { depth: 0 })
    }
}

impl Visitor for EvaluationVisitor {
    fn visit(&mut self, node: &Node) -> Result<(), RuntimeError> {
        let value = match node {
            Node::Number { value, .. } => *value,

            Node::Negate { .. } => {
                let operand = self.pop()?;
                operand.checked_neg().ok_or(RuntimeError::Overflow)?
            },

            Node::Add { .. } | Node::Subtract { .. } | Node::Multiply { .. }
            | Node::Divide { .. } => {
                let right = self.pop()?;
                let left = self.pop()?;

                match node {
                    Node::Add { .. } => left.checked_add(right).ok_or(RuntimeError::Overflow)?,
                    Node::Subtract { .. } => {
                        left.checked_sub(right).ok_or(RuntimeError::Overflow)?
                    },
                    Node::Multiply { .. } => {
                        left.checked_mul(right).ok_or(RuntimeError::Overflow)?
                    },
                    Node::Divide { .. } => {
                        if right == 0 {
                            return Err(RuntimeError::DivisionByZero);
                        }
                        left.checked_div(right).ok_or(RuntimeError::Overflow)?
                    },
                    Node::Number { .. } | Node::Negate { .. } => unreachable!(),
                }
            },
        };

        self.stack.push(value);
        Ok(())
    }
}
