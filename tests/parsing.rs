use extree::{
    error::{ParseError, RuntimeError},
    interpreter::parser::{Interpreter, MAX_NESTING_DEPTH},
    node::Node,
    tree::ExpressionTree,
};

fn parse(expression: &str) -> ExpressionTree {
    Interpreter::new().interpret(expression).unwrap()
}

#[test]
fn binary_chains_group_left() {
    let tree = parse("1+2+3");

    let Node::Add { left, right, .. } = tree.root().unwrap() else {
        panic!("expected an Add root");
    };
    assert!(matches!(**left, Node::Add { .. }));
    assert!(matches!(**right, Node::Number { value: 3, .. }));
}

#[test]
fn equal_precedence_chains_nest_for_left_to_right_evaluation() {
    let tree = parse("5*4/2");

    let Node::Divide { left, right, .. } = tree.root().unwrap() else {
        panic!("expected a Divide root");
    };
    assert!(matches!(**left, Node::Multiply { .. }));
    assert!(matches!(**right, Node::Number { value: 2, .. }));
}

#[test]
fn repeated_negations_right_nest() {
    let tree = parse("--5");

    let Node::Negate { operand, .. } = tree.root().unwrap() else {
        panic!("expected a Negate root");
    };
    let Node::Negate { operand: inner, .. } = &**operand else {
        panic!("expected a nested Negate");
    };
    assert!(matches!(**inner, Node::Number { value: 5, .. }));
}

#[test]
fn parenthesised_subtrees_carry_elevated_precedence() {
    let tree = parse("(2+3)*4");

    let root = tree.root().unwrap();
    assert!(matches!(root, Node::Multiply { .. }));
    assert_eq!(root.precedence(), 2);

    let left = tree.left().unwrap();
    assert!(matches!(left, Node::Add { .. }));
    assert_eq!(left.precedence(), 6);

    // Numbers inside the parens were stamped with the raised precedence too.
    assert_eq!(left.left_child().unwrap().precedence(), 9);
}

#[test]
fn operator_precedence_stamps() {
    let tree = parse("1+2*3");

    assert_eq!(tree.root().unwrap().precedence(), 1);
    assert_eq!(tree.right().unwrap().precedence(), 2);
    assert_eq!(tree.left().unwrap().precedence(), 4);
}

#[test]
fn the_root_item_is_a_diagnostic_marker() {
    assert_eq!(parse("1+2").item().unwrap(), '+' as i64);
    assert_eq!(parse("1*2").item().unwrap(), '*' as i64);
    assert_eq!(parse("-5").item().unwrap(), '-' as i64);
    assert_eq!(parse("42").item().unwrap(), 42);
}

#[test]
fn navigation_on_empty_trees_and_leaves_fails() {
    let empty = parse("");
    assert!(empty.is_empty());
    assert_eq!(empty.item(), Err(RuntimeError::EmptyTree));
    assert_eq!(empty.left().unwrap_err(), RuntimeError::EmptyTree);

    let leaf = parse("7");
    assert_eq!(leaf.left().unwrap_err(), RuntimeError::EmptyTree);
    assert_eq!(leaf.right().unwrap_err(), RuntimeError::EmptyTree);
}

#[test]
fn negate_exposes_its_operand_as_the_right_child() {
    let tree = parse("-5");

    let root = tree.root().unwrap();
    assert!(root.left_child().is_none());
    assert!(matches!(root.right_child(), Some(Node::Number { value: 5, .. })));
}

#[test]
fn multi_digit_numbers_lex_as_one_token() {
    let tree = parse("123+4");
    assert!(matches!(tree.left().unwrap(), Node::Number { value: 123, .. }));
}

#[test]
fn pathological_nesting_is_a_typed_error() {
    let too_deep = ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH };
    let interpreter = Interpreter::new();

    let parens = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(interpreter.interpret(&parens).unwrap_err(), too_deep);

    let negations = format!("{}5", "-".repeat(1000));
    assert_eq!(interpreter.interpret(&negations).unwrap_err(), too_deep);

    // Depth well inside the limit still parses.
    let shallow = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert!(interpreter.interpret(&shallow).is_ok());
}

#[test]
fn mixed_unary_and_binary_nesting() {
    let tree = parse("3--2");

    let Node::Subtract { left, right, .. } = tree.root().unwrap() else {
        panic!("expected a Subtract root");
    };
    assert!(matches!(**left, Node::Number { value: 3, .. }));
    assert!(matches!(**right, Node::Negate { .. }));
}
