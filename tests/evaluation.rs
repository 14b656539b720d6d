use extree::{
    error::{Error, RuntimeError},
    session::Session,
    visitors::BufferSink,
};

fn evaluate(expression: &str) -> Result<String, Error> {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order")?;
    session.make_tree(expression)?;
    session.evaluate("post-order")?;
    Ok(session.sink().lines().join("\n"))
}

fn assert_evaluates(expression: &str, expected: i64) {
    match evaluate(expression) {
        Ok(output) => assert_eq!(output, expected.to_string(), "for '{expression}'"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

#[test]
fn precedence_is_respected() {
    assert_evaluates("1+2*3", 7);
    assert_evaluates("2*3+1", 7);
    assert_evaluates("1+2*3+4", 11);
    assert_evaluates("10/2-3", 2);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2+3)*4", 20);
    assert_evaluates("2*(3+4)", 14);
    assert_evaluates("((1+2))*3", 9);
    assert_evaluates("(1)", 1);
    assert_evaluates("2-(1+1)", 0);
}

#[test]
fn left_associative_grouping() {
    assert_evaluates("1+2+3", 6);
    assert_evaluates("7-3-2", 2);
    assert_evaluates("5*4/2", 10);
    assert_evaluates("100/5/2", 10);
}

#[test]
fn unary_negation() {
    assert_evaluates("-5+3", -2);
    assert_evaluates("--5", 5);
    assert_evaluates("---5", -5);
    assert_evaluates("3--2", 5);
    assert_evaluates("2*-3", -6);
    assert_evaluates("-(2+3)", -5);
    assert_evaluates("-(-3)", 3);
}

#[test]
fn repeated_negation_after_binary_operators() {
    assert_evaluates("2*--3", 6);
    assert_evaluates("2*---3", -6);
    assert_evaluates("3---2", 1);
    assert_evaluates("8/--2", 4);
    assert_evaluates("1+--(2+3)", 6);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("-7/2", -3);
}

#[test]
fn whitespace_and_newlines_are_skipped() {
    assert_evaluates("  1 +\n2 ", 3);
    assert_evaluates("\t4 * ( 1 + 1 )", 8);
}

#[test]
fn variables_resolve_through_the_symbol_table() {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order").unwrap();
    session.assign("x=10").unwrap();
    session.make_tree("x+1").unwrap();
    session.evaluate("post-order").unwrap();

    assert_eq!(session.sink().lines(), ["11"]);
}

#[test]
fn unbound_variables_default_to_zero() {
    assert_evaluates("y+1", 1);
    assert_evaluates("a*b", 0);
}

#[test]
fn variables_are_resolved_at_parse_time() {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order").unwrap();
    session.assign("x=1").unwrap();
    session.make_tree("x").unwrap();
    session.assign("x=2").unwrap();
    session.evaluate("post-order").unwrap();

    // The tree was built while x was 1; the later binding must not leak in.
    assert_eq!(session.sink().lines(), ["1"]);
}

#[test]
fn division_by_zero_is_a_typed_error() {
    assert_eq!(evaluate("1/0"), Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(evaluate("5/(3-3)"), Err(Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn overflow_is_a_typed_error() {
    assert_eq!(evaluate("9223372036854775807+1"),
               Err(Error::Runtime(RuntimeError::Overflow)));
    assert_eq!(evaluate("-9223372036854775807-2"),
               Err(Error::Runtime(RuntimeError::Overflow)));
}

#[test]
fn evaluating_an_empty_tree_is_an_error() {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order").unwrap();
    session.make_tree("").unwrap();

    assert_eq!(session.evaluate("post-order"),
               Err(Error::Runtime(RuntimeError::EmptyTree)));
}

#[test]
fn evaluation_has_no_hidden_state() {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order").unwrap();
    session.make_tree("(1+2)*(3+4)").unwrap();
    session.evaluate("post-order").unwrap();
    session.evaluate("post-order").unwrap();

    assert_eq!(session.sink().lines(), ["21", "21"]);
}
