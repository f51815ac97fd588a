use yokan::object::Value;

mod common;
use common::eval;

#[test]
fn empty_array_literal() {
    assert_eq!(eval("[]").0, Value::Array(vec![]));
}

#[test]
fn array_literal_elements_are_evaluated() {
    assert_eq!(eval("[1, 1+1, 1+1+1]").0, Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
}

#[test]
fn trailing_comma_is_permitted() {
    assert_eq!(eval("[1, 2,]").0, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
}

#[test]
fn an_error_element_is_absorbed() {
    let (value, _) = eval(r#"[1, 1 + "a", 3]"#);
    assert!(value.is_error());
}
