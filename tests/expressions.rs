use arrex::{
    Expression,
    error::{EvalError, ParseError, RuntimeError},
};

fn eval(expr: &str) -> f64 {
    let mut expression = Expression::new(expr);
    expression.discover_symbols();
    expression.evaluate()
}

fn eval_with(expr: &str, values: &str) -> f64 {
    let mut expression = Expression::new(expr);
    expression.discover_symbols();
    if let Err(e) = expression.load_values(values.lines()) {
        panic!("Value source failed to load: {e}");
    }
    expression.evaluate()
}

#[test]
fn literal_arithmetic_follows_precedence() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("2*(3+4)"), 14.0);
    assert_eq!(eval("1+2*3-4/2"), 5.0);
}

#[test]
fn equal_precedence_associates_left_to_right() {
    assert_eq!(eval("10-2-3"), 5.0);
    assert_eq!(eval("10/2/5"), 1.0);
    assert_eq!(eval("2-3+4"), 3.0);
    assert_eq!(eval("8/2*3"), 12.0);
}

#[test]
fn division_is_floating_point() {
    assert_eq!(eval("7/2"), 3.5);
    assert_eq!(eval("1/3*3"), 1.0);
    assert!(eval("1/0").is_infinite());
    assert!(eval("0/0").is_nan());
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(eval("  2 +\t3 "), 5.0);
    assert_eq!(eval("10 / 2/ 5"), 1.0);
}

#[test]
fn nested_grouping() {
    assert_eq!(eval("((2+3)*(4+1))"), 25.0);
    assert_eq!(eval("(((7)))"), 7.0);
    assert_eq!(eval("3*(1+(2*(1+1)))"), 15.0);
}

#[test]
fn scalar_values_resolve() {
    assert_eq!(eval_with("a+b", "a 3\nb 4"), 7.0);
    assert_eq!(eval_with("a*a", "a 5"), 25.0);
    assert_eq!(eval_with("a*b-c", "a 2\nb 10\nc 1"), 19.0);
}

#[test]
fn unloaded_scalars_default_to_zero() {
    assert_eq!(eval("x+1"), 1.0);
    assert_eq!(eval_with("a+b", "a 3"), 3.0);
}

#[test]
fn array_subscripts_resolve() {
    assert_eq!(eval_with("arr[2]+1", "arr 5 (2,10)"), 11.0);
    // Slots no pair names keep the default fill value.
    assert_eq!(eval_with("arr[0]+arr[4]", "arr 5 (2,10)"), 0.0);
}

#[test]
fn subscripts_may_be_arbitrary_expressions() {
    assert_eq!(eval_with("arr[b+1]", "b 1\narr 3 (2,9)"), 9.0);
    assert_eq!(eval_with("arr[arr[0]]", "arr 3 (0,2) (2,7)"), 7.0);
    assert_eq!(eval_with("arr[(1+1)*2]", "arr 5 (4,6)"), 6.0);
}

#[test]
fn subscripts_truncate_toward_zero() {
    // 5/2 evaluates to 2.5; the subscript accesses slot 2.
    assert_eq!(eval_with("arr[5/2]", "arr 3 (2,8)"), 8.0);
}

#[test]
fn one_name_may_be_both_scalar_and_array() {
    assert_eq!(eval_with("a+a[1]", "a 5\na 3 (1,2)"), 7.0);
}

#[test]
fn larger_mixed_expression() {
    let values = "a 2\nb 1\narr 4 (0,3) (1,5) (2,7) (3,9)";
    assert_eq!(eval_with("a*arr[b+1]-arr[0]/2+1", values), 13.5);
}

#[test]
fn malformed_expressions_evaluate_to_zero() {
    assert_eq!(eval("(2+3"), 0.0);
    assert_eq!(eval("2+3)"), 0.0);
    assert_eq!(eval("2+"), 0.0);
    assert_eq!(eval("2++3"), 0.0);
    assert_eq!(eval("2 3"), 0.0);
    assert_eq!(eval(""), 0.0);
    assert_eq!(eval("2.5"), 0.0);
    assert_eq!(eval_with("arr[1", "arr 3 (1,5)"), 0.0);
}

#[test]
fn out_of_bounds_subscripts_evaluate_to_zero() {
    assert_eq!(eval_with("arr[5]", "arr 3 (1,4)"), 0.0);
    assert_eq!(eval_with("arr[0-1]", "arr 3 (1,4)"), 0.0);
    // Discovered but never loaded: length 0, every access out of bounds.
    assert_eq!(eval("arr[0]"), 0.0);
}

#[test]
fn try_evaluate_surfaces_parse_errors() {
    let mut expression = Expression::new("(2+3");
    expression.discover_symbols();
    assert!(matches!(expression.try_evaluate(),
                     Err(EvalError::Parse(ParseError::ExpectedClosingParen { .. }))));

    let mut expression = Expression::new("2 3");
    expression.discover_symbols();
    assert!(matches!(expression.try_evaluate(),
                     Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn try_evaluate_surfaces_index_errors() {
    let mut expression = Expression::new("arr[5]");
    expression.discover_symbols();
    expression.load_values(["arr 3 (1,4)"]).unwrap();
    assert!(matches!(expression.try_evaluate(),
                     Err(EvalError::Runtime(RuntimeError::IndexOutOfBounds { len: 3,
                                                                             index: 5,
                                                                             .. }))));
}

#[test]
fn undiscovered_names_are_runtime_errors() {
    // Without discovery the table is empty, so every reference is unknown.
    let expression = Expression::new("x+1");
    assert!(matches!(expression.try_evaluate(),
                     Err(EvalError::Runtime(RuntimeError::UnknownVariable { .. }))));
    assert_eq!(expression.evaluate(), 0.0);
}

#[test]
fn evaluation_is_idempotent() {
    let mut expression = Expression::new("a+arr[1]*2");
    expression.discover_symbols();
    expression.load_values(["a 3", "arr 2 (1,4)"]).unwrap();

    let first = expression.evaluate();
    let second = expression.evaluate();
    assert_eq!(first, 11.0);
    assert_eq!(first, second);
    assert_eq!(expression.scalars()[0].value, 3);
}

#[test]
fn evaluate_with_values_runs_the_whole_pipeline() {
    let result = arrex::evaluate_with_values("a+arr[2]", "a 1\narr 3 (2,5)");
    assert_eq!(result.unwrap(), 6.0);

    let result = arrex::evaluate_with_values("a+b", "a x");
    assert!(result.is_err());
}
