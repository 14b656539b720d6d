use extree::{session::Session, visitors::BufferSink};
use proptest::prelude::*;

/// A reference expression shape rendered to source text and evaluated
/// independently of the crate under test.
#[derive(Debug, Clone)]
enum Expr {
    Num(i64),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
}

fn render(expr: &Expr) -> String {
    match expr {
        Expr::Num(value) => value.to_string(),
        // Bare, so chains like `--3` and `2*--3` reach the parser as-is;
        // composite operands below carry their own parentheses.
        Expr::Neg(operand) => format!("-{}", render(operand)),
        Expr::Add(left, right) => format!("({}+{})", render(left), render(right)),
        Expr::Sub(left, right) => format!("({}-{})", render(left), render(right)),
        Expr::Mul(left, right) => format!("({}*{})", render(left), render(right)),
    }
}

/// Checked reference evaluation; `None` means the expression overflows and
/// the interpreter is expected to report a typed error instead of a value.
fn reference(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Num(value) => Some(*value),
        Expr::Neg(operand) => reference(operand)?.checked_neg(),
        Expr::Add(left, right) => reference(left)?.checked_add(reference(right)?),
        Expr::Sub(left, right) => reference(left)?.checked_sub(reference(right)?),
        Expr::Mul(left, right) => reference(left)?.checked_mul(reference(right)?),
    }
}

fn expressions() -> impl Strategy<Value = Expr> {
    let leaf = (0i64..=9).prop_map(Expr::Num);
    leaf.prop_recursive(5, 64, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Add(Box::new(l), Box::new(r))),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Sub(Box::new(l), Box::new(r))),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::Mul(Box::new(l), Box::new(r))),
            ]
        })
}

fn evaluated(source: &str) -> Result<String, extree::error::Error> {
    let mut session = Session::new(BufferSink::default());
    session.format("in-order")?;
    session.make_tree(source)?;
    session.evaluate("post-order")?;
    Ok(session.sink().lines().join("\n"))
}

proptest! {
    /// Deeply nested mixtures of unary and binary operators agree with a
    /// plain recursive evaluation of the same shape.
    #[test]
    fn nested_expressions_match_the_reference(expr in expressions()) {
        let source = render(&expr);

        match reference(&expr) {
            Some(expected) => prop_assert_eq!(evaluated(&source).unwrap(), expected.to_string()),
            None => prop_assert!(evaluated(&source).is_err()),
        }
    }

    /// Building and evaluating twice yields the same result both times.
    #[test]
    fn evaluation_is_repeatable(expr in expressions()) {
        let source = render(&expr);
        prop_assume!(reference(&expr).is_some());

        let mut session = Session::new(BufferSink::default());
        session.format("in-order").unwrap();
        session.make_tree(&source).unwrap();
        session.evaluate("post-order").unwrap();
        session.evaluate("post-order").unwrap();

        let lines = session.sink().lines();
        prop_assert_eq!(lines.len(), 2);
        prop_assert_eq!(&lines[0], &lines[1]);
    }

    /// Negation chains of arbitrary depth right-nest and flip the sign once
    /// per `-`.
    #[test]
    fn negation_chains_right_nest(depth in 1usize..40, value in 0i64..100) {
        let source = format!("{}{}", "-".repeat(depth), value);
        let expected = if depth % 2 == 0 { value } else { -value };

        prop_assert_eq!(evaluated(&source).unwrap(), expected.to_string());
    }
}
