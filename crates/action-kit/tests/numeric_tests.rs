//! Numeric action tests: the loose coercion rules, integer narrowing,
//! and the truncating-division quirk.

use action_kit::numeric::{add, divide, modulo, number_value, subtract, to_number};
use action_kit::ActionError;
use serde_json::{json, Value};

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn numbers_strings_and_booleans_coerce() {
    assert_eq!(to_number(&json!(3.5)).unwrap(), 3.5);
    assert_eq!(to_number(&json!(" 42 ")).unwrap(), 42.0);
    assert_eq!(to_number(&json!("-0.5")).unwrap(), -0.5);
    assert_eq!(to_number(&json!(true)).unwrap(), 1.0);
    assert_eq!(to_number(&json!(false)).unwrap(), 0.0);
}

#[test]
fn non_numeric_inputs_are_rejected() {
    assert!(matches!(
        to_number(&json!("seven")),
        Err(ActionError::NotANumber(_))
    ));
    assert!(matches!(
        to_number(&Value::Null),
        Err(ActionError::NotANumber(_))
    ));
    assert!(matches!(
        to_number(&json!({"a": 1})),
        Err(ActionError::NotANumber(_))
    ));
}

#[test]
fn whole_results_narrow_to_integers() {
    assert_eq!(number_value(3.0), json!(3));
    assert_eq!(number_value(-2.0), json!(-2));
    assert_eq!(number_value(3.5), json!(3.5));
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn add_and_subtract_accept_mixed_forms() {
    assert_eq!(add(&json!("2"), &json!(3)).unwrap(), json!(5));
    assert_eq!(add(&json!(0.5), &json!(0.25)).unwrap(), json!(0.75));
    assert_eq!(subtract(&json!(10), &json!("2.5")).unwrap(), json!(7.5));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(divide(&json!(7), &json!(2)).unwrap(), 3);
    assert_eq!(divide(&json!(-7), &json!(2)).unwrap(), -3);
    assert_eq!(divide(&json!("9"), &json!(4.5)).unwrap(), 2);
}

#[test]
fn zero_divisor_is_an_error() {
    assert!(matches!(
        divide(&json!(1), &json!(0)),
        Err(ActionError::DivisionByZero)
    ));
    assert!(matches!(modulo(1, 0), Err(ActionError::DivisionByZero)));
}

#[test]
fn modulo_follows_the_dividend_sign() {
    assert_eq!(modulo(7, 3).unwrap(), 1);
    assert_eq!(modulo(-7, 3).unwrap(), -1);
}
