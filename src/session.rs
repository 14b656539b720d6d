use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    error::{AssignmentError, ConfigError, Error, ProtocolError, RuntimeError},
    interpreter::parser::Interpreter,
    iterators::{IN_ORDER, POST_ORDER},
    tree::ExpressionTree,
    visitors::{EvaluationVisitor, OutputSink, PrintVisitor, Visitor},
};

/// Session middleware.
///
/// Optional wrappers around [`Session`] that add cross-cutting behavior,
/// currently a `tracing` instrumentation layer, without touching the core
/// protocol.
pub mod middleware;

/// The only expression format the session currently understands.
///
/// The `format` contract exists so future formats can be added; today the
/// standard infix notation is the sole member of the family.
pub const INFIX_FORMAT: &str = "in-order";

/// The protocol state a session is in.
///
/// States only ever advance `Uninitialized → Formatted → TreeBuilt`, except
/// that `format` may be re-run from any state and returns the session to
/// `Formatted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No format chosen yet; only `format` is legal.
    Uninitialized,
    /// A parser (with a fresh symbol table) is live; `make_tree` and
    /// `assign` become legal.
    Formatted,
    /// A tree is held; `print` and `evaluate` become legal too.
    TreeBuilt,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Formatted => "formatted",
            Self::TreeBuilt => "tree-built",
        };
        write!(f, "{name}")
    }
}

/// The session protocol state machine.
///
/// A session owns the four pieces of state the protocol guards as a unit:
/// the [`State`] itself, the active parser (which owns the symbol table),
/// the active tree, and the output sink. Every operation first checks that
/// the current state allows it and fails fast with a typed
/// [`ProtocolError`] otherwise, so an illegal call sequence can never reach
/// the parser or the tree.
///
/// ## Example
/// ```
/// use extree::{session::Session, visitors::BufferSink};
///
/// let mut session = Session::new(BufferSink::default());
/// session.format("in-order").unwrap();
/// session.assign("x=10").unwrap();
/// session.make_tree("x+1").unwrap();
/// session.evaluate("post-order").unwrap();
///
/// assert_eq!(session.sink().lines(), ["11"]);
/// ```
#[derive(Debug)]
pub struct Session<S: OutputSink> {
    state:       State,
    interpreter: Option<Interpreter>,
    tree:        ExpressionTree,
    sink:        S,
}

impl<S: OutputSink> Session<S> {
    /// Creates a session in the `Uninitialized` state over `sink`.
    pub const fn new(sink: S) -> Self {
        Self { state: State::Uninitialized,
               interpreter: None,
               tree: ExpressionTree::new(None),
               sink }
    }

    /// Gets the session's current protocol state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Gets a shared reference to the output sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session and yields the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Selects the expression format for subsequent `make_tree` calls.
    ///
    /// Legal from any state. Recreates the parser with a fresh, empty
    /// symbol table, discards any held tree, and moves the session to
    /// `Formatted`.
    ///
    /// # Errors
    /// Returns `ConfigError::UnsupportedFormat` for any format other than
    /// `"in-order"`; the session is left unchanged.
    pub fn format(&mut self, format: &str) -> Result<(), Error> {
        if format != INFIX_FORMAT {
            return Err(ConfigError::UnsupportedFormat { format: format.to_string() }.into());
        }

        self.interpreter = Some(Interpreter::new());
        self.tree = ExpressionTree::new(None);
        self.state = State::Formatted;
        Ok(())
    }

    /// Builds the active tree from `expression` using the current format's
    /// parser.
    ///
    /// Legal from `Formatted` and `TreeBuilt`. On success the held tree is
    /// replaced and the session moves to (or stays in) `TreeBuilt`.
    ///
    /// # Errors
    /// Returns `ProtocolError` when no format was chosen yet. Parse errors
    /// propagate unchanged, and leave both the state and the previously
    /// held tree untouched.
    pub fn make_tree(&mut self, expression: &str) -> Result<(), Error> {
        let Some(interpreter) = self.interpreter.as_ref() else {
            return Err(Self::not_allowed("make_tree", self.state));
        };

        self.tree = interpreter.interpret(expression)?;
        self.state = State::TreeBuilt;
        Ok(())
    }

    /// Prints the tree's textual rendering in the given traversal order.
    ///
    /// Legal only from `TreeBuilt`. An empty `order` defaults to
    /// `"in-order"`. The rendering is written to the sink as one
    /// space-separated line; the traversal order alone decides whether it
    /// reads as prefix, infix, or postfix. An empty tree renders as an
    /// empty line: unlike [`evaluate`](Self::evaluate), which has no value
    /// to produce for it, printing nothing is well defined.
    ///
    /// # Errors
    /// Returns `ProtocolError` outside `TreeBuilt` and
    /// `RuntimeError::UnsupportedOrder` for an unknown order token.
    pub fn print(&mut self, order: &str) -> Result<(), Error> {
        self.require_tree("print")?;

        let order = if order.is_empty() { IN_ORDER } else { order };
        let mut visitor = PrintVisitor::new();

        for node in self.tree.make_iterator(order)? {
            visitor.visit(node)?;
        }
        visitor.finish(&mut self.sink);
        Ok(())
    }

    /// Evaluates the tree and writes the decimal result to the sink.
    ///
    /// Legal only from `TreeBuilt`. An empty `order` defaults to
    /// `"post-order"`, which is also the only order evaluation supports;
    /// any other is rejected before traversal begins.
    ///
    /// # Errors
    /// Returns `ProtocolError` outside `TreeBuilt`,
    /// `RuntimeError::UnsupportedOrder` for a non-post-order request,
    /// `RuntimeError::EmptyTree` when the held tree is empty, and the usual
    /// arithmetic errors (division by zero, overflow) from evaluation.
    pub fn evaluate(&mut self, order: &str) -> Result<(), Error> {
        self.require_tree("evaluate")?;

        let order = if order.is_empty() { POST_ORDER } else { order };
        if order != POST_ORDER {
            return Err(RuntimeError::UnsupportedOrder { order: order.to_string() }.into());
        }
        if self.tree.is_empty() {
            return Err(RuntimeError::EmptyTree.into());
        }

        let mut visitor = EvaluationVisitor::new();
        for node in self.tree.make_iterator(order)? {
            visitor.visit(node)?;
        }

        let result = visitor.result()?;
        self.sink.write_line(&result.to_string());
        Ok(())
    }

    /// Binds a variable from a `key=value` pair.
    ///
    /// Legal from `Formatted` and `TreeBuilt`, since it needs the live
    /// symbol table. The binding only affects trees built afterwards;
    /// variables are resolved at parse time.
    ///
    /// # Errors
    /// Returns `ProtocolError` when no format was chosen yet, and
    /// `AssignmentError` when the pair has no `=`, an empty key, an empty
    /// value, or a non-integer value.
    pub fn assign(&mut self, pair: &str) -> Result<(), Error> {
        let state = self.state;
        let Some(interpreter) = self.interpreter.as_mut() else {
            return Err(Self::not_allowed("assign", state));
        };

        let Some((key, value)) = pair.split_once('=') else {
            return Err(AssignmentError::MissingSeparator { pair: pair.to_string() }.into());
        };

        let key = key.trim();
        let value = value.trim();

        if key.is_empty() {
            return Err(AssignmentError::EmptyKey.into());
        }
        if value.is_empty() {
            return Err(AssignmentError::EmptyValue.into());
        }

        let Ok(value) = value.parse::<i64>() else {
            return Err(AssignmentError::NonIntegerValue { value: value.to_string() }.into());
        };

        interpreter.symbol_table_mut().set(key, value);
        Ok(())
    }

    fn require_tree(&self, operation: &'static str) -> Result<(), Error> {
        if self.state == State::TreeBuilt {
            Ok(())
        } else {
            Err(Self::not_allowed(operation, self.state))
        }
    }

    fn not_allowed(operation: &'static str, state: State) -> Error {
        ProtocolError::OperationNotAllowed { operation, state }.into()
    }
}

/// A session shareable between threads.
///
/// The protocol's correctness depends on the state, parser, symbol table,
/// and active tree changing atomically as a unit, so every operation on a
/// shared session runs under one mutex covering all four. Independent
/// sessions share no mutable data and need no coordination.
#[derive(Debug)]
pub struct SharedSession<S: OutputSink> {
    inner: Arc<Mutex<Session<S>>>,
}

impl<S: OutputSink> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: OutputSink> SharedSession<S> {
    /// Wraps `session` for shared use.
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        Self { inner: Arc::new(Mutex::new(session)) }
    }

    /// Runs `operation` on the session under the lock.
    ///
    /// A panic while holding the lock poisons it; the poisoned session is
    /// recovered as-is, since every operation leaves the session in a valid
    /// protocol state even on error.
    pub fn with<T>(&self, operation: impl FnOnce(&mut Session<S>) -> T) -> T {
        let mut guard = self.inner
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner);
        operation(&mut guard)
    }

    /// See [`Session::format`].
    ///
    /// # Errors
    /// As [`Session::format`].
    pub fn format(&self, format: &str) -> Result<(), Error> {
        self.with(|session| session.format(format))
    }

    /// See [`Session::make_tree`].
    ///
    /// # Errors
    /// As [`Session::make_tree`].
    pub fn make_tree(&self, expression: &str) -> Result<(), Error> {
        self.with(|session| session.make_tree(expression))
    }

    /// See [`Session::print`].
    ///
    /// # Errors
    /// As [`Session::print`].
    pub fn print(&self, order: &str) -> Result<(), Error> {
        self.with(|session| session.print(order))
    }

    /// See [`Session::evaluate`].
    ///
    /// # Errors
    /// As [`Session::evaluate`].
    pub fn evaluate(&self, order: &str) -> Result<(), Error> {
        self.with(|session| session.evaluate(order))
    }

    /// See [`Session::assign`].
    ///
    /// # Errors
    /// As [`Session::assign`].
    pub fn assign(&self, pair: &str) -> Result<(), Error> {
        self.with(|session| session.assign(pair))
    }
}
