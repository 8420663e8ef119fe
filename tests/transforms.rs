use symbra::{
    ArityError, Bindings, Expr, OperatorKind, Value, evaluate, parse, render, simplify, substitute,
};

fn simplified(src: &str) -> String {
    render(&simplify(&parse(src).unwrap()))
}

#[test]
fn additive_identity_is_removed() {
    let expr = Expr::add(Expr::literal(0), Expr::symbol("x"));
    assert_eq!(simplify(&expr), Expr::symbol("x"));
    assert_eq!(simplified("x + 0 + y"), "x + y");
    assert_eq!(simplified("0 + 0"), "0");
    assert_eq!(simplified("0.0 + x"), "x");
}

#[test]
fn multiplicative_identities_are_removed() {
    let expr = Expr::mul(Expr::symbol("x"), Expr::literal(1));
    assert_eq!(simplify(&expr), Expr::symbol("x"));
    assert_eq!(simplified("1 * 1"), "1");
    assert_eq!(simplified("x * 0"), "0");
    assert_eq!(simplified("(a + b) * 0.0"), "0");
    assert_eq!(simplified("1.0 * x * y"), "x * y");
}

#[test]
fn trivial_powers_are_removed() {
    assert_eq!(simplified("x ^ 1"), "x");
    assert_eq!(simplified("x ^ 0"), "1");
    assert_eq!(simplified("1 ^ x"), "1");
    assert_eq!(simplified("x ^ (y * 0)"), "1");
    assert_eq!(simplified("x ^ y"), "(x)^(y)");
}

#[test]
fn subtraction_and_division_are_only_rebuilt() {
    assert_eq!(simplified("x - 0"), "(x) - (0)");
    assert_eq!(simplified("x / 1"), "(x) / (1)");
    assert_eq!(simplified("(x + 0) / (y * 1)"), "(x) / (y)");
}

#[test]
fn simplification_is_a_single_pass() {
    let collapsed = Expr::operator(OperatorKind::Add,
                                   vec![Expr::mul(Expr::literal(0), Expr::symbol("x")),
                                        Expr::symbol("y")]).unwrap();
    assert_eq!(render(&simplify(&collapsed)), "y");

    assert_eq!(simplified("(x ^ 0) * y"), "y");
    assert_eq!(simplified("z + (x ^ 0) * 0"), "z");
}

#[test]
fn simplification_preserves_value() {
    let bindings = Bindings::from([("x".to_string(), Value::from(3)),
                                   ("y".to_string(), Value::from(2))]);
    for src in ["x * 1 + 0 * y", "(x + 0) ^ (y * 1)", "1 ^ x + x / 1 - 0"] {
        let expr = parse(src).unwrap();
        let a = evaluate(&expr, &bindings).unwrap().as_number().unwrap();
        let b = evaluate(&simplify(&expr), &bindings).unwrap().as_number().unwrap();
        assert!((a.as_real() - b.as_real()).abs() < 1e-12, "{src:?}");
    }
}

#[test]
fn substitution_replaces_named_symbols() {
    let expr = parse("x + y").unwrap();
    let map = Bindings::from([("x".to_string(), Value::from(Expr::symbol("z")))]);
    assert_eq!(render(&substitute(&expr, &map)), "z + y");

    let map = Bindings::from([("y".to_string(), Value::from(2.5))]);
    assert_eq!(render(&substitute(&expr, &map)), "x + 2.5");

    let map = Bindings::from([("w".to_string(), Value::from(1))]);
    assert_eq!(substitute(&expr, &map), expr);
}

#[test]
fn substitution_preserves_arity() {
    let expr = Expr::operator(OperatorKind::Multiply,
                              vec![Expr::symbol("a"), Expr::symbol("b"), Expr::symbol("a")]).unwrap();
    let map = Bindings::from([("a".to_string(), Value::from(parse("p + q").unwrap()))]);
    let result = substitute(&expr, &map);

    let Expr::Operator(op) = &result else {
        panic!("expected an operator, found {result}");
    };
    assert_eq!(op.kind(), OperatorKind::Multiply);
    assert_eq!(op.operands().len(), 3);
    assert_eq!(render(&result), "(p + q) * b * (p + q)");
}

#[test]
fn substitution_then_evaluation() {
    let expr = parse("x ^ 2 + y").unwrap();
    let map = Bindings::from([("x".to_string(), Value::from(parse("t + 1").unwrap()))]);
    let substituted = substitute(&expr, &map);

    let bindings = Bindings::from([("t".to_string(), Value::from(2)),
                                   ("y".to_string(), Value::from(1))]);
    assert_eq!(evaluate(&substituted, &bindings).unwrap(), Value::from(10));
}

#[test]
fn operator_arity_is_checked() {
    assert_eq!(Expr::operator(OperatorKind::Subtract, vec![Expr::literal(1)]).unwrap_err(),
               ArityError { kind:  OperatorKind::Subtract,
                            found: 1, });
    assert!(Expr::operator(OperatorKind::Power,
                           vec![Expr::literal(1), Expr::literal(2), Expr::literal(3)]).is_err());
    assert!(Expr::operator(OperatorKind::Add, vec![]).is_err());

    let single = Expr::operator(OperatorKind::Add, vec![Expr::symbol("x")]).unwrap();
    assert_eq!(render(&single), "x");
    assert_eq!(evaluate(&single, &Bindings::from([("x".to_string(), Value::from(4))])).unwrap(),
               Value::from(4));
}

#[test]
fn variadic_operators_evaluate_all_operands() {
    let sum = Expr::operator(OperatorKind::Add,
                             vec![Expr::literal(1), Expr::literal(2), Expr::literal(3.5)]).unwrap();
    assert_eq!(evaluate(&sum, &Bindings::new()).unwrap(), Value::from(6.5));

    let product = Expr::operator(OperatorKind::Multiply,
                                 vec![Expr::literal(2), Expr::symbol("k"), Expr::literal(3)]).unwrap();
    assert_eq!(evaluate(&product, &Bindings::new()).unwrap().to_string(), "2 * k * 3");
}

#[test]
fn trees_are_shareable_across_threads() {
    let expr = parse("x * x + 1").unwrap();
    let handles: Vec<_> = (0..4).map(|i| {
                                    let expr = expr.clone();
                                    std::thread::spawn(move || {
                                        let bindings =
                                            Bindings::from([("x".to_string(), Value::from(i))]);
                                        evaluate(&expr, &bindings).unwrap()
                                    })
                                })
                                .collect();

    let results: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results,
               vec![Value::from(1), Value::from(2), Value::from(5), Value::from(10)]);
}
