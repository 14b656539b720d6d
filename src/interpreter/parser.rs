use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, symbol_table::SymbolTable},
    node::Node,
    tree::ExpressionTree,
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// [`ParseError`] describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Base precedence of the `+` and `-` binary operators.
pub const ADD_SUB_PRECEDENCE: u32 = 1;
/// Base precedence of the `*` and `/` operators.
pub const MUL_DIV_PRECEDENCE: u32 = 2;
/// Base precedence of the unary `-` (negate) operator.
pub const NEGATE_PRECEDENCE: u32 = 3;
/// Base precedence of a number or variable.
pub const NUMBER_PRECEDENCE: u32 = 4;
/// Precedence added for everything parsed inside a pair of parentheses.
pub const PAREN_PRECEDENCE: u32 = 5;
/// Maximum parenthesis nesting and operator-chain depth the parser accepts.
///
/// Both the parenthesis scan and the insertion step recurse, so depth must
/// be bounded for pathological input to surface as a typed error instead of
/// exhausting the native stack.
pub const MAX_NESTING_DEPTH: u32 = 256;

/// The kind of a partially built parse symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolKind {
    Number(i64),
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
}

/// A partially built subtree on the parser's work stack.
///
/// Unlike [`Node`], a `Symbol` may still be missing children while the scan
/// is in flight; `build` converts a completed symbol into an owned node and
/// rejects operators that never received their operands.
#[derive(Debug)]
struct Symbol {
    kind:       SymbolKind,
    precedence: u32,
    left:       Option<Box<Symbol>>,
    right:      Option<Box<Symbol>>,
}

impl Symbol {
    const fn new(kind: SymbolKind, precedence: u32) -> Self {
        Self { kind,
               precedence,
               left: None,
               right: None }
    }

    /// The printable token of this symbol, used in error messages.
    fn token(&self) -> String {
        match self.kind {
            SymbolKind::Number(value) => value.to_string(),
            SymbolKind::Add => "+".to_string(),
            SymbolKind::Subtract | SymbolKind::Negate => "-".to_string(),
            SymbolKind::Multiply => "*".to_string(),
            SymbolKind::Divide => "/".to_string(),
        }
    }

    /// Whether this symbol is a binary operator and may therefore adopt a
    /// left operand.
    const fn takes_left(&self) -> bool {
        matches!(self.kind,
                 SymbolKind::Add | SymbolKind::Subtract | SymbolKind::Multiply | SymbolKind::Divide)
    }

    /// Whether this symbol may hold a right child. Only operands can not.
    const fn takes_right(&self) -> bool {
        !matches!(self.kind, SymbolKind::Number(_))
    }

    /// Converts the completed symbol into an owned [`Node`].
    ///
    /// # Errors
    /// Returns `ParseError::MissingOperand` if an operator is missing a
    /// child, which happens for malformed input such as `1+` or `1+*2`.
    fn build(self) -> ParseResult<Node> {
        let precedence = self.precedence;

        match self.kind {
            SymbolKind::Number(value) => Ok(Node::Number { value, precedence }),

            SymbolKind::Negate => {
                let operand = self.right
                                  .ok_or(ParseError::MissingOperand { symbol: "-".to_string() })?;

                Ok(Node::Negate { operand: Box::new(operand.build()?),
                                  precedence })
            },

            SymbolKind::Add | SymbolKind::Subtract | SymbolKind::Multiply | SymbolKind::Divide => {
                let token = self.token();
                let left = self.left
                               .ok_or_else(|| ParseError::MissingOperand { symbol: token.clone() })?;
                let right = self.right
                                .ok_or_else(|| ParseError::MissingOperand { symbol: token.clone() })?;
                let left = Box::new(left.build()?);
                let right = Box::new(right.build()?);

                Ok(match self.kind {
                       SymbolKind::Add => Node::Add { left,
                                                      right,
                                                      precedence },
                       SymbolKind::Subtract => Node::Subtract { left,
                                                                right,
                                                                precedence },
                       SymbolKind::Multiply => Node::Multiply { left,
                                                                right,
                                                                precedence },
                       SymbolKind::Divide => Node::Divide { left,
                                                            right,
                                                            precedence },
                       SymbolKind::Number(_) | SymbolKind::Negate => unreachable!(),
                   })
            },
        }
    }
}

/// Parses expression strings into [`ExpressionTree`]s.
///
/// The interpreter owns the [`SymbolTable`] used to resolve variables, so
/// bindings persist across `interpret` calls for as long as the same
/// interpreter is alive.
///
/// Parsing is a single left-to-right scan over the token stream. The scan
/// maintains one work stack of partially built subtrees and an accumulated
/// precedence counter: entering a `(` raises the precedence of everything up
/// to the matching `)` by [`PAREN_PRECEDENCE`], which is what lets
/// parenthesised sub-expressions override operator precedence without a
/// separate grammar pass.
#[derive(Debug, Default)]
pub struct Interpreter {
    symbol_table: SymbolTable,
}

impl Interpreter {
    /// Creates an interpreter with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a shared reference to the interpreter's symbol table.
    #[must_use]
    pub const fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    /// Gets a mutable reference to the interpreter's symbol table.
    pub const fn symbol_table_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbol_table
    }

    /// Parses `input` into an expression tree.
    ///
    /// Variables are resolved against the symbol table at parse time, so a
    /// later `set` does not change an already built tree. Empty input yields
    /// an empty tree.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for unbalanced parentheses, unrecognized
    /// characters, numeric literals that overflow `i64`, operators missing
    /// an operand, nesting deeper than [`MAX_NESTING_DEPTH`], and
    /// expressions that do not reduce to a single tree.
    ///
    /// ## Example
    /// ```
    /// use extree::interpreter::parser::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.symbol_table_mut().set("x", 10);
    ///
    /// let tree = interpreter.interpret("x + 1").unwrap();
    /// assert!(!tree.is_empty());
    ///
    /// assert!(interpreter.interpret("(1 + 2").is_err());
    /// ```
    pub fn interpret(&self, input: &str) -> ParseResult<ExpressionTree> {
        let tokens = tokenize(input)?;
        let mut tokens = tokens.into_iter();
        let mut stack = self.parse_tokens(&mut tokens, 0)?;

        match stack.len() {
            0 => Ok(ExpressionTree::new(None)),
            1 => {
                let symbol = stack.remove(0);
                Ok(ExpressionTree::new(Some(symbol.build()?)))
            },
            depth => Err(ParseError::ImbalancedStack { depth }),
        }
    }

    /// Scans tokens into a work stack of partially built subtrees.
    ///
    /// `depth` is the parenthesis nesting level: a non-zero depth means the
    /// scan was entered through a `(` and returns at the matching `)`, and
    /// the caller splices the resulting subtree into its own stack. At the
    /// top level a `)` is an error, and running out of tokens inside
    /// parentheses is one too. Nesting past [`MAX_NESTING_DEPTH`] is
    /// rejected before recursing.
    fn parse_tokens<I>(&self, tokens: &mut I, depth: u32) -> ParseResult<Vec<Symbol>>
        where I: Iterator<Item = Token>
    {
        let accumulated = depth * PAREN_PRECEDENCE;
        let nested = depth > 0;
        let mut stack: Vec<Symbol> = Vec::new();
        let mut last_was_operand = false;

        while let Some(token) = tokens.next() {
            match token {
                Token::Integer(value) => {
                    let symbol = Symbol::new(SymbolKind::Number(value),
                                             NUMBER_PRECEDENCE + accumulated);
                    insert(&mut stack, symbol)?;
                    last_was_operand = true;
                },

                Token::Identifier(name) => {
                    let value = self.symbol_table.get(&name);
                    let symbol = Symbol::new(SymbolKind::Number(value),
                                             NUMBER_PRECEDENCE + accumulated);
                    insert(&mut stack, symbol)?;
                    last_was_operand = true;
                },

                Token::Plus => {
                    insert(&mut stack,
                           Symbol::new(SymbolKind::Add, ADD_SUB_PRECEDENCE + accumulated))?;
                    last_was_operand = false;
                },

                // A `-` is subtraction when an operand immediately precedes
                // it and negation otherwise.
                Token::Minus => {
                    let symbol = if last_was_operand {
                        Symbol::new(SymbolKind::Subtract, ADD_SUB_PRECEDENCE + accumulated)
                    } else {
                        Symbol::new(SymbolKind::Negate, NEGATE_PRECEDENCE + accumulated)
                    };
                    insert(&mut stack, symbol)?;
                    last_was_operand = false;
                },

                Token::Star => {
                    insert(&mut stack,
                           Symbol::new(SymbolKind::Multiply, MUL_DIV_PRECEDENCE + accumulated))?;
                    last_was_operand = false;
                },

                Token::Slash => {
                    insert(&mut stack,
                           Symbol::new(SymbolKind::Divide, MUL_DIV_PRECEDENCE + accumulated))?;
                    last_was_operand = false;
                },

                Token::LParen => {
                    if depth == MAX_NESTING_DEPTH {
                        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
                    }

                    let mut inner = self.parse_tokens(tokens, depth + 1)?;

                    if inner.len() != 1 {
                        return Err(ParseError::ImbalancedStack { depth: inner.len() });
                    }
                    if let Some(subtree) = inner.pop() {
                        insert(&mut stack, subtree)?;
                    }
                    last_was_operand = true;
                },

                Token::RParen => {
                    if nested {
                        return Ok(stack);
                    }
                    return Err(ParseError::UnbalancedParens);
                },

                Token::Ignored => {},
            }
        }

        if nested {
            return Err(ParseError::UnbalancedParens);
        }
        Ok(stack)
    }
}

/// Tokenizes `input`, mapping lexer failures to typed parse errors.
///
/// A failing slice that starts with a digit is a malformed number (the only
/// way the integer rule fails is `i64` overflow); anything else is an
/// unrecognized character.
fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();

            return Err(if slice.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                           ParseError::MalformedNumber { literal: slice.to_string() }
                       } else {
                           ParseError::UnrecognizedToken { token: slice.to_string() }
                       });
        }
    }

    Ok(tokens)
}

/// Merges a new symbol into the work stack.
///
/// An empty stack simply receives the symbol. Otherwise the symbol is
/// inserted into the top-of-stack subtree by precedence, which may replace
/// the top of the stack when a binary operator of equal or lower precedence
/// demotes it to a left operand.
fn insert(stack: &mut Vec<Symbol>, symbol: Symbol) -> ParseResult<()> {
    match stack.pop() {
        None => {
            stack.push(symbol);
            Ok(())
        },
        Some(top) => {
            let merged = insert_symbol(top, symbol, 0)?;
            stack.push(merged);
            Ok(())
        },
    }
}

/// The invariant-preserving insertion step of the precedence scan.
///
/// Walks down the right spine of `tree` while the right child binds less
/// tightly than `symbol`, then applies one of three rules at the last parent
/// visited:
///
/// - the parent binds less tightly than `symbol`: `symbol` is attached
///   between the parent and its old right child, adopting the old right
///   child as its left operand. Ascending precedence chains nest this way.
/// - `symbol` is a negation of equal/lower precedence: keep descending
///   through operators of exactly the same precedence, so that repeated
///   negations right-nest (`--5` becomes `Negate(Negate(5))`).
/// - `symbol` is any other operator of equal/lower precedence: the whole
///   subtree built so far becomes `symbol`'s left operand, which produces
///   left-associative grouping (`1+2+3` becomes `Add(Add(1,2),3)`).
///
/// An operand reaching the third rule means two operands were adjacent with
/// no operator between them. `depth` counts the spine positions descended so
/// far; exceeding [`MAX_NESTING_DEPTH`] is a typed error.
fn insert_symbol(mut tree: Symbol, symbol: Symbol, depth: u32) -> ParseResult<Symbol> {
    if depth == MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    }

    if tree.right.as_ref().is_some_and(|right| right.precedence < symbol.precedence) {
        if let Some(right) = tree.right.take() {
            tree.right = Some(Box::new(insert_symbol(*right, symbol, depth + 1)?));
        }
        return Ok(tree);
    }

    if tree.precedence < symbol.precedence {
        return attach_right(tree, symbol, depth);
    }

    if symbol.kind == SymbolKind::Negate {
        if tree.right.as_ref().is_some_and(|right| right.precedence == symbol.precedence) {
            if let Some(right) = tree.right.take() {
                tree.right = Some(Box::new(insert_symbol(*right, symbol, depth + 1)?));
            }
            return Ok(tree);
        }
        return attach_right(tree, symbol, depth);
    }

    if symbol.takes_left() && symbol.left.is_none() {
        let mut symbol = symbol;
        symbol.left = Some(Box::new(tree));
        return Ok(symbol);
    }

    Err(ParseError::MissingOperator { token: symbol.token() })
}

/// Attaches `symbol` as the right child of `tree`.
///
/// If `tree` already had a right child, `symbol` adopts it as its left
/// operand; only a binary operator that is still missing its left operand
/// may do so. A negation cannot adopt a left operand, but when the occupied
/// right slot holds an operator that is itself still waiting for its right
/// operand, the negation descends into it instead, so that negations keep
/// right-nesting behind a binary operator (`2*--3` becomes
/// `Multiply(2, Negate(Negate(3)))`). `tree` must be able to hold a right
/// child at all, which rules out operands being used as operators.
fn attach_right(mut tree: Symbol, mut symbol: Symbol, depth: u32) -> ParseResult<Symbol> {
    if !tree.takes_right() {
        return Err(ParseError::MissingOperator { token: symbol.token() });
    }

    if let Some(old_right) = tree.right.take() {
        if symbol.takes_left() && symbol.left.is_none() {
            symbol.left = Some(old_right);
        } else if symbol.kind == SymbolKind::Negate && old_right.takes_right() {
            tree.right = Some(Box::new(insert_symbol(*old_right, symbol, depth + 1)?));
            return Ok(tree);
        } else {
            return Err(ParseError::MissingOperator { token: symbol.token() });
        }
    }

    tree.right = Some(Box::new(symbol));
    Ok(tree)
}
