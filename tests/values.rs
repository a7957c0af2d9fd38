use arrex::{Expression, error::FormatError};

fn discovered(expr: &str) -> Expression {
    let mut expression = Expression::new(expr);
    expression.discover_symbols();
    expression
}

#[test]
fn discovery_separates_scalars_and_arrays() {
    let expression = discovered("a+arr[b]*c");

    let scalars: Vec<&str> = expression.scalars().iter().map(|s| s.name.as_str()).collect();
    let arrays: Vec<&str> = expression.arrays().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(scalars, ["a", "b", "c"]);
    assert_eq!(arrays, ["arr"]);
}

#[test]
fn discovery_creates_one_symbol_per_name() {
    let expression = discovered("a+a*a+arr[a]+arr[1]");
    assert_eq!(expression.scalars().len(), 1);
    assert_eq!(expression.arrays().len(), 1);
}

#[test]
fn discovery_initializes_scalars_to_zero_and_arrays_empty() {
    let expression = discovered("a+arr[0]");
    assert_eq!(expression.scalars()[0].value, 0);
    assert!(expression.arrays()[0].values.is_empty());
}

#[test]
fn discovery_handles_multi_letter_names() {
    let expression = discovered("varone+vartwo[3]");
    assert_eq!(expression.scalars()[0].name, "varone");
    assert_eq!(expression.arrays()[0].name, "vartwo");
}

#[test]
fn scalar_lines_set_values() {
    let mut expression = discovered("a+b");
    expression.load_values(["a 3", "b -2"]).unwrap();
    assert_eq!(expression.scalars()[0].value, 3);
    assert_eq!(expression.scalars()[1].value, -2);
}

#[test]
fn array_lines_allocate_and_fill() {
    let mut expression = discovered("arr[0]");
    expression.load_values(["arr 5 (2,10) (4,-1)"]).unwrap();
    assert_eq!(expression.arrays()[0].values, vec![0, 0, 10, 0, -1]);
}

#[test]
fn array_lines_without_pairs_allocate_zeroes() {
    let mut expression = discovered("arr[0]");
    expression.load_values(["arr 4"]).unwrap();
    assert_eq!(expression.arrays()[0].values, vec![0, 0, 0, 0]);
}

#[test]
fn later_pairs_overwrite_earlier_ones() {
    let mut expression = discovered("arr[0]");
    expression.load_values(["arr 3 (1,5) (1,6)"]).unwrap();
    assert_eq!(expression.arrays()[0].values, vec![0, 6, 0]);
}

#[test]
fn unknown_names_are_ignored() {
    let mut expression = discovered("a+b");
    expression.load_values(["a 1", "stranger 99", "other 3 (0,1)"])
              .unwrap();
    assert_eq!(expression.scalars()[0].value, 1);
    assert_eq!(expression.scalars()[1].value, 0);
}

#[test]
fn blank_lines_are_ignored() {
    let mut expression = discovered("a");
    expression.load_values(["", "   ", "a 7", ""]).unwrap();
    assert_eq!(expression.scalars()[0].value, 7);
}

#[test]
fn reloading_overwrites_values() {
    let mut expression = discovered("a+arr[0]");
    expression.load_values(["a 1", "arr 2 (0,1)"]).unwrap();
    expression.load_values(["a 5", "arr 3 (0,9)"]).unwrap();
    assert_eq!(expression.scalars()[0].value, 5);
    assert_eq!(expression.arrays()[0].values, vec![9, 0, 0]);
}

#[test]
fn non_numeric_values_are_format_errors() {
    let mut expression = discovered("a+arr[0]");
    let err = expression.load_values(["a x"]).unwrap_err();
    assert!(matches!(err, FormatError::ExpectedNumber { line: 1, .. }));

    let err = expression.load_values(["a 1", "arr many"]).unwrap_err();
    assert!(matches!(err, FormatError::ExpectedNumber { line: 2, .. }));
}

#[test]
fn malformed_pairs_are_format_errors() {
    let mut expression = discovered("arr[0]");
    let err = expression.load_values(["arr 3 (1)"]).unwrap_err();
    assert!(matches!(err, FormatError::MalformedPair { .. }));

    let err = expression.load_values(["arr 3 (1,2,3)"]).unwrap_err();
    assert!(matches!(err, FormatError::MalformedPair { .. }));
}

#[test]
fn pair_indices_must_fit_the_declared_length() {
    let mut expression = discovered("arr[0]");
    let err = expression.load_values(["arr 2 (5,1)"]).unwrap_err();
    assert!(matches!(err,
                     FormatError::PairOutOfRange { index: 5,
                                                   length: 2,
                                                   line: 1 }));
}

#[test]
fn scalar_lines_with_the_wrong_shape_are_format_errors() {
    let mut expression = discovered("a");
    let err = expression.load_values(["a"]).unwrap_err();
    assert!(matches!(err, FormatError::MissingField { line: 1 }));

    let err = expression.load_values(["a 1 2"]).unwrap_err();
    assert!(matches!(err, FormatError::TrailingTokens { .. }));
}

#[test]
fn scalar_assignment_wins_for_a_shared_name() {
    // `a` names both a scalar and an array; a two-field line is the scalar.
    let mut expression = discovered("a+a[0]");
    expression.load_values(["a 5", "a 2 (0,3)"]).unwrap();
    assert_eq!(expression.scalars()[0].value, 5);
    assert_eq!(expression.arrays()[0].values, vec![3, 0]);
}

#[test]
fn format_errors_abort_loading() {
    let mut expression = discovered("a+b");
    let result = expression.load_values(["a bad", "b 2"]);
    assert!(result.is_err());
    // The failing line stopped the load before `b` was reached.
    assert_eq!(expression.scalars()[1].value, 0);
}
