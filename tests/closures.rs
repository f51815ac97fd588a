use yokan::object::Value;

mod common;
use common::eval;

#[test]
fn multi_param_function_call() {
    assert_eq!(eval("f = (a,b){a+b}\nf(1,2)").0, Value::Integer(3));
}

#[test]
fn functions_returning_functions_curry() {
    assert_eq!(eval("f = (a){(b){a+b}}\ng = f(6)\ng(7)").0, Value::Integer(13));
}

#[test]
fn closures_capture_the_defining_environment_not_a_snapshot() {
    assert_eq!(eval("val = 12\nf = (){val}\nval = 34\nf()").0, Value::Integer(34));
}

#[test]
fn assignment_inside_a_closure_never_writes_through() {
    assert_eq!(eval("val = 56\nf = (){val = 78}\nf()\nval").0, Value::Integer(56));
}

#[test]
fn parameter_binding_is_discarded_when_the_call_returns() {
    assert_eq!(eval("val = 12\nf = (val){}\nf(34)\nval").0, Value::Integer(12));
}

#[test]
fn immediately_invoked_empty_function_yields_null() {
    assert_eq!(eval("(){}()").0, Value::Null);
}

#[test]
fn arity_mismatch_is_an_error() {
    let (value, _) = eval("f = (a,b){a+b}\nf(1)");
    assert_eq!(value.to_string(), "Function need 2 params, but got 1 params");
}

#[test]
fn calling_a_non_callable_value_is_an_error() {
    let (value, _) = eval("x = 5\nx()");
    assert!(value.is_error());
}
