/// The lexer module tokenizes expression strings for the parser.
///
/// The lexer reads the raw expression text and produces a stream of tokens
/// for numbers, variables, the four operators, and parentheses. Whitespace
/// and newlines are skipped; anything else is a lexical error.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Merges digit runs greedily into single integer literals.
/// - Reports malformed or unrecognized input.
pub mod lexer;
/// The parser module builds expression trees by precedence insertion.
///
/// The parser consumes the token stream in a single left-to-right scan,
/// maintaining a work stack of partially built subtrees and an accumulated
/// precedence counter that parentheses raise. There is no grammar pass: each
/// new symbol is inserted directly into the tree built so far by comparing
/// precedence values.
///
/// # Responsibilities
/// - Stamps each node with its parse-time precedence.
/// - Distinguishes unary negation from binary subtraction.
/// - Resolves variables through the symbol table while scanning.
/// - Validates balance of parentheses and of the final work stack.
pub mod parser;
/// The symbol table module stores variable bindings.
///
/// A flat map from variable names to integer values, owned by the active
/// parser. Lookup of an unbound name deterministically yields zero.
pub mod symbol_table;
