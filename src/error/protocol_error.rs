use crate::session::State;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents an operation invoked in a session state that forbids it.
pub enum ProtocolError {
    /// The operation is not legal in the current state.
    OperationNotAllowed {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the session was in.
        state:     State,
    },
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperationNotAllowed { operation, state } => write!(f,
                                                                     "Protocol error: '{operation}' is not allowed in the {state} state."),
        }
    }
}

impl std::error::Error for ProtocolError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a request for an expression format the session does not
/// support.
pub enum ConfigError {
    /// The format name is unknown.
    UnsupportedFormat {
        /// The requested format name.
        format: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat { format } => {
                write!(f, "Config error: '{format}' is not a supported format.")
            },
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a malformed `key=value` assignment request.
pub enum AssignmentError {
    /// The pair contains no `=` separator.
    MissingSeparator {
        /// The raw input pair.
        pair: String,
    },
    /// The key side of the pair is empty.
    EmptyKey,
    /// The value side of the pair is empty.
    EmptyValue,
    /// The value side does not parse as an integer.
    NonIntegerValue {
        /// The offending value text.
        value: String,
    },
}

impl std::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator { pair } => write!(f,
                                                      "Assignment error: Expected 'key=value', found '{pair}'."),

            Self::EmptyKey => write!(f, "Assignment error: The key must not be empty."),

            Self::EmptyValue => write!(f, "Assignment error: The value must not be empty."),

            Self::NonIntegerValue { value } => {
                write!(f, "Assignment error: '{value}' is not an integer.")
            },
        }
    }
}

impl std::error::Error for AssignmentError {}
