use extree::{
    error::{Error, RuntimeError},
    interpreter::parser::Interpreter,
    session::Session,
    visitors::BufferSink,
};

fn printed(expression: &str, order: &str) -> Result<String, Error> {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order")?;
    session.make_tree(expression)?;
    session.print(order)?;
    Ok(session.sink().lines().join("\n"))
}

fn symbols(expression: &str, order: &str) -> Vec<String> {
    let tree = Interpreter::new().interpret(expression).unwrap();
    tree.make_iterator(order)
        .unwrap()
        .map(|node| node.symbol())
        .collect()
}

#[test]
fn traversal_order_selects_the_notation() {
    assert_eq!(printed("1+2", "pre-order").unwrap(), "+ 1 2");
    assert_eq!(printed("1+2", "in-order").unwrap(), "1 + 2");
    assert_eq!(printed("1+2", "post-order").unwrap(), "1 2 +");
    assert_eq!(printed("1+2", "level-order").unwrap(), "+ 1 2");
}

#[test]
fn orders_agree_on_a_deeper_tree() {
    assert_eq!(printed("1+2*3", "pre-order").unwrap(), "+ 1 * 2 3");
    assert_eq!(printed("1+2*3", "in-order").unwrap(), "1 + 2 * 3");
    assert_eq!(printed("1+2*3", "post-order").unwrap(), "1 2 3 * +");
    assert_eq!(printed("1+2*3", "level-order").unwrap(), "+ 1 * 2 3");
}

#[test]
fn level_order_goes_one_level_at_a_time() {
    assert_eq!(printed("1*2+3*4", "level-order").unwrap(), "+ * * 1 2 3 4");
}

#[test]
fn negations_traverse_as_right_only_children() {
    assert_eq!(printed("--5", "pre-order").unwrap(), "- - 5");
    assert_eq!(printed("--5", "in-order").unwrap(), "- - 5");
    assert_eq!(printed("--5", "post-order").unwrap(), "5 - -");
    assert_eq!(printed("3--2", "post-order").unwrap(), "3 2 - -");
}

#[test]
fn print_defaults_to_in_order() {
    assert_eq!(printed("(2+3)*4", "").unwrap(), "2 + 3 * 4");
}

#[test]
fn unknown_orders_are_rejected() {
    let order = "sideways".to_string();
    assert_eq!(printed("1+2", "sideways"),
               Err(Error::Runtime(RuntimeError::UnsupportedOrder { order })));
}

#[test]
fn printing_is_idempotent() {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order").unwrap();
    session.make_tree("1+2*3").unwrap();
    session.print("in-order").unwrap();
    session.print("in-order").unwrap();

    assert_eq!(session.sink().lines(), ["1 + 2 * 3", "1 + 2 * 3"]);
}

#[test]
fn iterators_are_lazy_and_fresh_per_call() {
    let tree = Interpreter::new().interpret("1+2").unwrap();

    let mut first = tree.make_iterator("pre-order").unwrap();
    assert_eq!(first.next().map(|node| node.symbol()), Some("+".to_string()));

    // A fresh iterator starts over; the spent one keeps its position.
    let second = tree.make_iterator("pre-order").unwrap();
    assert_eq!(second.map(|node| node.symbol()).collect::<Vec<_>>(), ["+", "1", "2"]);
    assert_eq!(first.map(|node| node.symbol()).collect::<Vec<_>>(), ["1", "2"]);
}

#[test]
fn printing_an_empty_tree_emits_an_empty_line() {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order").unwrap();
    session.make_tree("").unwrap();
    session.print("in-order").unwrap();

    assert_eq!(session.sink().lines(), [""]);
}

#[test]
fn traversing_an_empty_tree_yields_nothing() {
    let tree = Interpreter::new().interpret("").unwrap();

    for order in ["pre-order", "in-order", "post-order", "level-order"] {
        assert_eq!(symbols("", order), Vec::<String>::new());
        assert_eq!(tree.make_iterator(order).unwrap().count(), 0);
    }
}
