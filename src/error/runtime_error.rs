#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while traversing or evaluating a
/// tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// An arithmetic operation overflowed `i64`.
    Overflow,
    /// Navigated or evaluated an empty tree, or asked for a child the root
    /// does not have.
    EmptyTree,
    /// Requested a traversal order that is unknown, or one that the
    /// operation does not support.
    UnsupportedOrder {
        /// The requested order token.
        order: String,
    },
    /// Evaluation finished with a value stack that did not hold exactly one
    /// result.
    ImbalancedEvaluation {
        /// Number of values left on the evaluation stack.
        depth: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),

            Self::Overflow => write!(f,
                                     "Runtime error: Integer overflow while trying to compute result."),

            Self::EmptyTree => write!(f, "Runtime error: The expression tree is empty."),

            Self::UnsupportedOrder { order } => {
                write!(f, "Runtime error: '{order}' is not a supported traversal order.")
            },

            Self::ImbalancedEvaluation { depth } => write!(f,
                                                           "Runtime error: Evaluation left {depth} values on the stack instead of one."),
        }
    }
}

impl std::error::Error for RuntimeError {}
