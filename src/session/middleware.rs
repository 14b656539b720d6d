use tracing::{debug, warn};

use crate::{error::Error, session::Session, visitors::OutputSink};

/// Instruments every session operation with `tracing` events.
///
/// The wrapper delegates each call unchanged and emits a debug event before
/// it runs and a warn event when it fails. It replaces the logging
/// "decorator" subclasses of older designs: cross-cutting concerns wrap the
/// protocol's calls instead of re-implementing the session type.
#[derive(Debug)]
pub struct Traced<S: OutputSink> {
    inner: Session<S>,
}

impl<S: OutputSink> Traced<S> {
    /// Wraps `session`.
    pub const fn new(session: Session<S>) -> Self {
        Self { inner: session }
    }

    /// Consumes the wrapper and yields the inner session.
    pub fn into_inner(self) -> Session<S> {
        self.inner
    }

    /// Gets a shared reference to the inner session.
    #[must_use]
    pub const fn inner(&self) -> &Session<S> {
        &self.inner
    }

    /// See [`Session::format`].
    ///
    /// # Errors
    /// As [`Session::format`].
    pub fn format(&mut self, format: &str) -> Result<(), Error> {
        debug!(format, state = %self.inner.state(), "format");
        Self::observed("format", self.inner.format(format))
    }

    /// See [`Session::make_tree`].
    ///
    /// # Errors
    /// As [`Session::make_tree`].
    pub fn make_tree(&mut self, expression: &str) -> Result<(), Error> {
        debug!(expression, state = %self.inner.state(), "make_tree");
        Self::observed("make_tree", self.inner.make_tree(expression))
    }

    /// See [`Session::print`].
    ///
    /// # Errors
    /// As [`Session::print`].
    pub fn print(&mut self, order: &str) -> Result<(), Error> {
        debug!(order, state = %self.inner.state(), "print");
        Self::observed("print", self.inner.print(order))
    }

    /// See [`Session::evaluate`].
    ///
    /// # Errors
    /// As [`Session::evaluate`].
    pub fn evaluate(&mut self, order: &str) -> Result<(), Error> {
        debug!(order, state = %self.inner.state(), "evaluate");
        Self::observed("evaluate", self.inner.evaluate(order))
    }

    /// See [`Session::assign`].
    ///
    /// # Errors
    /// As [`Session::assign`].
    pub fn assign(&mut self, pair: &str) -> Result<(), Error> {
        debug!(pair, state = %self.inner.state(), "assign");
        Self::observed("assign", self.inner.assign(pair))
    }

    fn observed(operation: &'static str, result: Result<(), Error>) -> Result<(), Error> {
        if let Err(error) = &result {
            warn!(operation, %error, "session operation failed");
        }
        result
    }
}
