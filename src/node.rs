/// A node in an expression tree.
///
/// `Node` is a tagged variant covering the single operand kind (`Number`) and
/// the five operator kinds. Every variant carries the precedence that was
/// assigned when the node was parsed; precedence is never re-derived during
/// traversal or evaluation. A node exclusively owns its children, so dropping
/// a tree drops every node in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An integer operand.
    Number {
        /// The literal or symbol-table value.
        value:      i64,
        /// Precedence assigned at parse time.
        precedence: u32,
    },
    /// Binary addition (`+`).
    Add {
        /// Left operand.
        left:       Box<Self>,
        /// Right operand.
        right:      Box<Self>,
        /// Precedence assigned at parse time.
        precedence: u32,
    },
    /// Binary subtraction (`-`).
    Subtract {
        /// Left operand.
        left:       Box<Self>,
        /// Right operand.
        right:      Box<Self>,
        /// Precedence assigned at parse time.
        precedence: u32,
    },
    /// Binary multiplication (`*`).
    Multiply {
        /// Left operand.
        left:       Box<Self>,
        /// Right operand.
        right:      Box<Self>,
        /// Precedence assigned at parse time.
        precedence: u32,
    },
    /// Binary division (`/`).
    Divide {
        /// Left operand.
        left:       Box<Self>,
        /// Right operand.
        right:      Box<Self>,
        /// Precedence assigned at parse time.
        precedence: u32,
    },
    /// Unary negation (`-`).
    Negate {
        /// The single operand. It plays the role of the *right* child in
        /// every traversal.
        operand:    Box<Self>,
        /// Precedence assigned at parse time.
        precedence: u32,
    },
}

impl Node {
    /// Gets the precedence stamped on `self` at parse time.
    ///
    /// ## Example
    /// ```
    /// use extree::node::Node;
    ///
    /// let node = Node::Number { value:      7,
    ///                           precedence: 4, };
    ///
    /// assert_eq!(node.precedence(), 4);
    /// ```
    #[must_use]
    pub const fn precedence(&self) -> u32 {
        match self {
            Self::Number { precedence, .. }
            | Self::Add { precedence, .. }
            | Self::Subtract { precedence, .. }
            | Self::Multiply { precedence, .. }
            | Self::Divide { precedence, .. }
            | Self::Negate { precedence, .. } => *precedence,
        }
    }

    /// Returns the printable token for `self`.
    ///
    /// Operator nodes yield their operator symbol; `Number` nodes yield the
    /// decimal rendering of their value.
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Number { value, .. } => value.to_string(),
            Self::Add { .. } => "+".to_string(),
            Self::Subtract { .. } | Self::Negate { .. } => "-".to_string(),
            Self::Multiply { .. } => "*".to_string(),
            Self::Divide { .. } => "/".to_string(),
        }
    }

    /// Returns the diagnostic marker of `self`.
    ///
    /// For a `Number` this is its value; for operators it is the operator
    /// character as an integer. The marker identifies the node kind in
    /// diagnostics and never participates in evaluation.
    #[must_use]
    pub const fn item(&self) -> i64 {
        match self {
            Self::Number { value, .. } => *value,
            Self::Add { .. } => '+' as i64,
            Self::Subtract { .. } | Self::Negate { .. } => '-' as i64,
            Self::Multiply { .. } => '*' as i64,
            Self::Divide { .. } => '/' as i64,
        }
    }

    /// Gets the left child of `self`, if it has one.
    ///
    /// `Number` has no children and `Negate` exposes its operand only as the
    /// right child, so both return `None` here.
    #[must_use]
    pub fn left_child(&self) -> Option<&Self> {
        match self {
            Self::Add { left, .. }
            | Self::Subtract { left, .. }
            | Self::Multiply { left, .. }
            | Self::Divide { left, .. } => Some(left),
            Self::Number { .. } | Self::Negate { .. } => None,
        }
    }

    /// Gets the right child of `self`, if it has one.
    ///
    /// The `Negate` operand uniformly plays the role of the right child so
    /// that all traversal strategies handle unary nodes the same way.
    #[must_use]
    pub fn right_child(&self) -> Option<&Self> {
        match self {
            Self::Add { right, .. }
            | Self::Subtract { right, .. }
            | Self::Multiply { right, .. }
            | Self::Divide { right, .. } => Some(right),
            Self::Negate { operand, .. } => Some(operand),
            Self::Number { .. } => None,
        }
    }

    /// Returns `true` if `self` is an operand rather than an operator.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number { .. })
    }
}
