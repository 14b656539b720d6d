/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing an
/// expression string. Parse errors include unbalanced parentheses,
/// unrecognized characters, malformed numbers, and work-stack imbalance.
pub mod parse_error;
/// Protocol, configuration, and assignment errors.
///
/// Contains the error types raised by the session state machine: operations
/// invoked in a state that forbids them, unsupported expression formats, and
/// malformed `key=value` assignment requests.
pub mod protocol_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while traversing or
/// evaluating a tree, such as division by zero, integer overflow, navigation
/// on an empty tree, and unsupported traversal orders.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use protocol_error::{AssignmentError, ConfigError, ProtocolError};
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Umbrella over every failure a session operation can report.
///
/// Each variant wraps one phase-specific error type, so callers can match on
/// the phase or display the error directly. All conversions are provided via
/// `From`, which lets session code use `?` across phases.
pub enum Error {
    /// The expression could not be parsed.
    Parse(ParseError),
    /// Traversal or evaluation failed.
    Runtime(RuntimeError),
    /// An operation was invoked in a state that forbids it.
    Protocol(ProtocolError),
    /// An unsupported expression format was requested.
    Config(ConfigError),
    /// A `key=value` assignment request was malformed.
    Assignment(AssignmentError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Protocol(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Assignment(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<ProtocolError> for Error {
    fn from(value: ProtocolError) -> Self {
        Self::Protocol(value)
    }
}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<AssignmentError> for Error {
    fn from(value: AssignmentError) -> Self {
        Self::Assignment(value)
    }
}
