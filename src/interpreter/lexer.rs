use logos::Logos;

/// Represents a lexical token in an expression string.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all tokens the expression language recognizes.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Digits are merged greedily, so
    /// `123` is one token rather than three.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Variable tokens, such as `x` or `rate_2`. Any letter/digit run that
    /// is not purely numeric names a variable.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`; the parser decides whether this means subtraction or negation.
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds, and newlines.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits in an `i64`.
/// - `None`: If the literal overflows, which surfaces as a lexer error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
