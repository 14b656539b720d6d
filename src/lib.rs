//! # extree
//!
//! extree is an expression-tree calculator written in Rust.
//! It parses infix arithmetic expressions (integers, variables, `+ - * /`,
//! unary minus, parentheses) into a composite tree, offers lazy traversals
//! over that tree, dispatches printing and evaluation through those
//! traversals, and enforces a strict protocol governing the order in which
//! a caller may format, build, print, and evaluate a tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, session::Session, visitors::OutputSink};

/// Provides unified error types for parsing, evaluation, and the session
/// protocol.
///
/// This module defines all errors the interpreter can raise: parse errors,
/// runtime errors from traversal and evaluation, protocol violations,
/// unsupported formats, and malformed assignments. A crate-level umbrella
/// enum lets session code propagate any of them with `?`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes, one per phase.
/// - Supports integration with standard error handling traits.
/// - Funnels every phase-specific error into a single `Error` type.
pub mod error;
/// Turns expression strings into expression trees.
///
/// This module ties together the lexer, the symbol table, and the
/// precedence-insertion parser. The parser owns the symbol table, so
/// variable bindings live exactly as long as the parser does.
///
/// # Responsibilities
/// - Tokenizes expression strings.
/// - Builds expression trees in a single precedence-driven scan.
/// - Resolves variables while scanning.
pub mod interpreter;
/// Produces lazy node sequences over an expression tree.
///
/// Defines the four traversal strategies (pre-order, in-order, post-order,
/// level-order) as a single iterator type with explicit work lists. Each
/// traversal is finite and non-restartable; visiting a tree again requires
/// a fresh iterator.
///
/// # Responsibilities
/// - Maps order tokens to traversal strategies.
/// - Yields borrowed node handles one at a time.
/// - Treats a negation's operand as its right child, uniformly.
pub mod iterators;
/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum: one operand variant and five
/// operator variants, each stamped with the precedence it received at parse
/// time. Nodes exclusively own their children.
///
/// # Responsibilities
/// - Defines the tagged-variant composite the whole crate operates on.
/// - Exposes uniform child accessors used by every traversal.
/// - Carries parse-time precedence for diagnostics and invariants.
pub mod node;
/// Enforces the session protocol.
///
/// The session state machine gates which of format, build, print, evaluate,
/// and assign may legally run next, owns the active parser and tree, and
/// hands finished output lines to an abstract sink. Also provides a
/// mutex-guarded shared session and `tracing` middleware.
///
/// # Responsibilities
/// - Tracks the `Uninitialized → Formatted → TreeBuilt` state machine.
/// - Fails illegal call sequences fast with typed protocol errors.
/// - Serializes shared-session access under one critical section.
pub mod session;
/// Owns a parsed expression tree.
///
/// A thin handle over at most one root node, exposing navigation, visitor
/// acceptance, and iterator creation. An empty tree is a valid value.
///
/// # Responsibilities
/// - Owns the root node and therefore the whole tree.
/// - Exposes root diagnostics and child navigation as fallible operations.
/// - Creates traversals by order token.
pub mod tree;
/// Dispatches per-node operations through traversals.
///
/// Declares the `Visitor` trait along with the print and evaluation
/// visitors, and the `OutputSink` collaborator the core hands finished
/// strings to.
///
/// # Responsibilities
/// - Defines per-node dispatch driven by a chosen traversal.
/// - Renders trees as prefix/infix/postfix text.
/// - Evaluates trees bottom-up over an explicit value stack.
pub mod visitors;

/// Runs a newline-separated command script against a fresh session.
///
/// Each non-empty line is one command: `format <fmt>`, `expr <expression>`,
/// `print <order>`, `eval <order>`, `set <key=value>`, or `quit`, which
/// stops processing. A line starting with anything else is treated as a
/// bare expression in succinct mode and expands to the macro
/// `format in-order`, `expr <line>`, `eval post-order`.
///
/// Execution stops at the first failing command. On success the sink is
/// handed back with everything the script printed.
///
/// # Errors
/// Returns the first [`Error`] any command reports.
///
/// # Examples
/// ```
/// use extree::{run_commands, visitors::BufferSink};
///
/// let script = "format in-order\nexpr 1+2*3\nprint in-order\neval post-order";
/// let sink = run_commands(script, BufferSink::default()).unwrap();
/// assert_eq!(sink.lines(), ["1 + 2 * 3", "7"]);
///
/// // Succinct mode: a bare expression formats, builds, and evaluates.
/// let sink = run_commands("(2+3)*4", BufferSink::default()).unwrap();
/// assert_eq!(sink.lines(), ["20"]);
/// ```
pub fn run_commands<S: OutputSink>(source: &str, sink: S) -> Result<S, Error> {
    let mut session = Session::new(sink);

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "format" => session.format(argument)?,
            "expr" => session.make_tree(argument)?,
            "print" => session.print(argument)?,
            "eval" => session.evaluate(argument)?,
            "set" => session.assign(argument)?,
            "quit" => break,
            _ => {
                session.format(session::INFIX_FORMAT)?;
                session.make_tree(line)?;
                session.evaluate(iterators::POST_ORDER)?;
            },
        }
    }

    Ok(session.into_sink())
}
