#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
pub enum ParseError {
    /// A `(` without a matching `)`, or a stray `)`.
    UnbalancedParens,
    /// Found a character the expression language does not recognize.
    UnrecognizedToken {
        /// The offending input slice.
        token: String,
    },
    /// A numeric literal could not be represented as an `i64`.
    MalformedNumber {
        /// The offending literal text.
        literal: String,
    },
    /// An operator ended up with too few operands.
    MissingOperand {
        /// The symbol of the operator that lacks an operand.
        symbol: String,
    },
    /// An operand appeared where an operator was required.
    MissingOperator {
        /// The printable token of the dangling operand.
        token: String,
    },
    /// The scan finished with more than one partial subtree on the work
    /// stack.
    ImbalancedStack {
        /// Number of subtrees left on the stack.
        depth: usize,
    },
    /// Parentheses or operator chains nest deeper than the parser accepts.
    NestingTooDeep {
        /// The nesting depth limit that was exceeded.
        limit: u32,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParens => write!(f, "Parse error: Unbalanced parentheses."),

            Self::UnrecognizedToken { token } => {
                write!(f, "Parse error: Unrecognized token: {token}.")
            },

            Self::MalformedNumber { literal } => {
                write!(f, "Parse error: Malformed number literal '{literal}'.")
            },

            Self::MissingOperand { symbol } => {
                write!(f, "Parse error: Operator '{symbol}' is missing an operand.")
            },

            Self::MissingOperator { token } => write!(f,
                                                      "Parse error: Expected an operator before '{token}'."),

            Self::ImbalancedStack { depth } => write!(f,
                                                      "Parse error: Expression did not reduce to a single tree ({depth} fragments)."),

            Self::NestingTooDeep { limit } => {
                write!(f, "Parse error: Expression nests deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
