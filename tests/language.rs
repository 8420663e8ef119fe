use symbra::{Bindings, Error, EvalError, ParseError, Token, Value, evaluate, parse, render, tokenize};

fn bind(pairs: &[(&str, i64)]) -> Bindings {
    pairs.iter()
         .map(|(name, value)| ((*name).to_string(), Value::from(*value)))
         .collect()
}

fn eval_with(src: &str, pairs: &[(&str, i64)]) -> Value {
    let expr = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    evaluate(&expr, &bind(pairs)).unwrap_or_else(|e| panic!("Failed to evaluate {src:?}: {e}"))
}

fn assert_value(src: &str, pairs: &[(&str, i64)], expected: impl Into<Value>) {
    assert_eq!(eval_with(src, pairs), expected.into(), "evaluating {src:?}");
}

fn assert_parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("{src:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn tokenizer_skips_whitespace() {
    assert_eq!(tokenize(" 12 *\tfoo_1\n").unwrap(),
               vec![Token::Number("12".to_string()),
                    Token::Star,
                    Token::Identifier("foo_1".to_string())]);
    assert_eq!(tokenize("3.25").unwrap(), vec![Token::Number("3.25".to_string())]);
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn tokenizer_rejects_unknown_characters() {
    let err = tokenize("x + 2 # y").unwrap_err();
    assert_eq!(err.character, '#');
    assert_eq!(err.position, 6);

    let err = parse("a & b").unwrap_err();
    assert!(matches!(err, ParseError::Lexical(ref lex) if lex.character == '&'));
}

#[test]
fn dangling_decimal_points_are_rejected() {
    for (src, position) in [("1.", 1), ("2. + 3", 1), ("1.5.2", 3)] {
        let err = tokenize(src).unwrap_err();
        assert_eq!((err.character, err.position), ('.', position), "tokenizing {src:?}");
    }
}

#[test]
fn precedence_and_bindings() {
    assert_value("x + 2 * y", &[("x", 3), ("y", 4)], 11);
    assert_value("(x + 2) * y", &[("x", 1), ("y", 3)], 9);
    assert_value("2 * 3 ^ 2", &[], 18);
    assert_value("10 - 4 - 3", &[], 3);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", &[], 512);
    assert_eq!(render(&parse("2^3^2").unwrap()), "(2)^((3)^(2))");
}

#[test]
fn division_is_real_division() {
    assert_value("7 / 2", &[], 3.5);
    assert_value("8 / 4 / 2", &[], 1.0);
    assert_value("100 / 8 / 5", &[], 2.5);
}

#[test]
fn integer_powers_stay_exact() {
    let value = eval_with("2 ^ 10", &[]);
    assert!(matches!(value, Value::Number(symbra::Number::Integer(1024))));

    assert_value("4 ^ 0.5", &[], 2.0);
    assert_value("x ^ 2 ^ 0", &[("x", 9)], 9);
}

#[test]
fn mixed_integer_and_real_arithmetic() {
    assert_value("1.5 + 1", &[], 2.5);
    assert_value("2 * 0.25", &[], 0.5);
    assert_value("2 ^ 0.5 ^ 2", &[], 2f64.powf(0.25));
    assert_value("2 ^ (0 - 1)", &[], 0.5);
}

#[test]
fn integer_overflow_promotes_to_real() {
    let value = eval_with("9223372036854775807 + 1", &[]);
    assert!(matches!(value, Value::Number(symbra::Number::Real(_))));

    let value = eval_with("2 ^ 70", &[]);
    assert_eq!(value, Value::from(2f64.powi(70)));

    let huge = parse("99999999999999999999").unwrap();
    assert_eq!(huge.to_string(), "100000000000000000000.0");
}

#[test]
fn division_by_zero_is_error() {
    let expr = parse("1/x").unwrap();
    let err = evaluate(&expr, &bind(&[("x", 0)])).unwrap_err();
    assert!(matches!(err, EvalError::DivisionByZero { .. }));

    let expr = parse("1 / (x - x)").unwrap();
    assert!(matches!(evaluate(&expr, &bind(&[("x", 5)])),
                     Err(EvalError::DivisionByZero { .. })));

    let expr = parse("1 / 0.0").unwrap();
    assert!(evaluate(&expr, &Bindings::new()).is_err());
}

#[test]
fn undefined_powers_are_domain_errors() {
    for src in ["(0 - 8) ^ 0.5", "0 ^ (0 - 1)", "10.0 ^ 400"] {
        let expr = parse(src).unwrap();
        assert!(matches!(evaluate(&expr, &Bindings::new()),
                         Err(EvalError::NumericDomain { .. })),
                "{src:?} should be outside the real domain");
    }
}

#[test]
fn non_numeric_binding_is_error() {
    let expr = parse("x + 1").unwrap();
    let bindings = Bindings::from([("x".to_string(), Value::from(parse("y * 2").unwrap()))]);
    let err = evaluate(&expr, &bindings).unwrap_err();
    assert_eq!(err,
               EvalError::BindingType { name:  "x".to_string(),
                                        found: "y * 2".to_string(), });

    let literal = Bindings::from([("x".to_string(), Value::from(parse("4").unwrap()))]);
    assert_eq!(evaluate(&expr, &literal).unwrap(), Value::from(5));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(assert_parse_failure("1 2"),
                     ParseError::UnexpectedTrailingToken { position: 2, .. }));
    assert!(matches!(assert_parse_failure("(x))"),
                     ParseError::UnexpectedTrailingToken { position: 3, .. }));
    assert!(matches!(assert_parse_failure("x y + 1"),
                     ParseError::UnexpectedTrailingToken { .. }));
}

#[test]
fn mismatched_parentheses_are_rejected() {
    assert!(matches!(assert_parse_failure("(1 + 2"),
                     ParseError::MismatchedParentheses { position: 0 }));
    assert!(matches!(assert_parse_failure("2 * ((a + b) * c"),
                     ParseError::MismatchedParentheses { position: 4 }));
    assert!(matches!(assert_parse_failure("(a b)"),
                     ParseError::MismatchedParentheses { position: 0 }));
}

#[test]
fn premature_end_of_input_is_rejected() {
    assert!(matches!(assert_parse_failure(""),
                     ParseError::UnexpectedEndOfInput { position: 0 }));
    assert!(matches!(assert_parse_failure("1 +"),
                     ParseError::UnexpectedEndOfInput { position: 3 }));
    assert!(matches!(assert_parse_failure("2 ^"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_parse_failure("("),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn invalid_factor_tokens_are_rejected() {
    assert!(matches!(assert_parse_failure("* 2"),
                     ParseError::InvalidToken { position: 0, .. }));
    assert!(matches!(assert_parse_failure("1 + )"),
                     ParseError::InvalidToken { position: 4, .. }));
    // No unary minus.
    assert!(matches!(assert_parse_failure("-x"), ParseError::InvalidToken { .. }));
}

#[test]
fn partial_evaluation_keeps_unbound_symbols() {
    let value = eval_with("x + 2 * y", &[("y", 4)]);
    assert_eq!(value.to_string(), "x + 8");

    let value = eval_with("(a - b) / (2 ^ 3)", &[("b", 1)]);
    assert_eq!(value.to_string(), "((a) - (1)) / (8)");

    let value = eval_with("z", &[]);
    assert_eq!(value, Value::from(parse("z").unwrap()));
}

#[test]
fn closed_expressions_always_evaluate_to_numbers() {
    for src in ["1 + 2 * 3", "(4 - 1) ^ 2 / 3", "0.5 * 8 - 2 ^ 2", "((7))"] {
        let expr = parse(src).unwrap();
        assert!(expr.free_symbols().is_empty());
        assert!(evaluate(&expr, &Bindings::new()).unwrap().is_numeric(),
                "{src:?} left a residual tree");
    }
}

#[test]
fn evaluation_does_not_change_the_tree() {
    let expr = parse("x * y + 1").unwrap();
    let before = render(&expr);

    assert_eq!(eval_with("x * y + 1", &[("x", 2), ("y", 5)]), Value::from(11));
    assert_eq!(evaluate(&expr, &bind(&[("x", 2), ("y", 5)])).unwrap(), Value::from(11));
    assert_eq!(evaluate(&expr, &bind(&[("x", 3), ("y", 3)])).unwrap(), Value::from(10));
    assert_eq!(render(&expr), before);
}

#[test]
fn rendering_is_stable_under_reparsing() {
    let bindings = bind(&[("x", 3), ("y", 7), ("z", 2)]);
    for src in ["x + 2 * y",
                "2^3^2",
                "x - y - z",
                "x / (y - z) * 4",
                "(x + y) ^ z / 2.5",
                "x * (y + (z * 3)) - 1"]
    {
        let expr = parse(src).unwrap();
        let reparsed = parse(&render(&expr)).unwrap();
        assert_eq!(reparsed, expr, "{src:?} re-rendered differently");
        assert_eq!(evaluate(&reparsed, &bindings).unwrap(),
                   evaluate(&expr, &bindings).unwrap());
    }
}

#[test]
fn build_tree_matches_parse() {
    for src in ["x + 2 * y", "(a - b) ^ c ^ 2"] {
        assert_eq!(symbra::build_tree(src).unwrap(), parse(src).unwrap());
    }
    assert!(matches!(symbra::build_tree("1 +"),
                     Err(ParseError::UnexpectedEndOfInput { position: 3 })));
}

#[test]
fn equality_follows_rendering() {
    assert_eq!(parse("x+y").unwrap(), parse("  x +   y ").unwrap());
    assert_ne!(parse("x + y").unwrap(), parse("y + x").unwrap());
    assert_eq!(parse("((x))").unwrap(), parse("x").unwrap());
}

#[test]
fn errors_convert_into_the_crate_error() {
    let err = symbra::evaluate_str("1 / x", &bind(&[("x", 0)])).unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { .. })));

    let err = symbra::evaluate_str("1 / ", &Bindings::new()).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}
