//! The tree-walking evaluator: `eval(node, env) -> Value`, expressed
//! as plain functions matching on the closed `Expr`/`Stmt` unions
//! rather than a visitor trait. Never panics — every failure mode
//! surfaces as a `Value::Error` arm, and errors are absorbing: the
//! first error any sub-evaluation produces is returned immediately,
//! without evaluating the remaining siblings.

use std::rc::Rc;

use crate::ast::{Expr, Program, Stmt};
use crate::environment::{Environment, EnvRef};
use crate::object::{Builtin, Value};

/// Evaluates a statement list in order, remembering the last value.
/// Used both for a top-level program and for a function call's body.
pub fn eval_program(program: &Program, env: &EnvRef) -> Value {
    let mut result = Value::Null;
    for stmt in program {
        result = eval_stmt(stmt, env);
        if result.is_error() {
            return result;
        }
    }
    result
}

fn eval_stmt(stmt: &Stmt, env: &EnvRef) -> Value {
    match stmt {
        Stmt::ExpressionStatement(expr) => eval_expr(expr, env),
        Stmt::Assign { name, value } => {
            let value = eval_expr(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(&name.literal, value);
            Value::StatementResult
        }
    }
}

fn eval_expr(expr: &Expr, env: &EnvRef) -> Value {
    match expr {
        Expr::IntegerLiteral(value) => Value::Integer(*value),
        Expr::StringLiteral(value) => Value::String(value.clone()),
        Expr::ArrayLiteral(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                let value = eval_expr(item, env);
                if value.is_error() {
                    return value;
                }
                values.push(value);
            }
            Value::Array(values)
        }
        Expr::Identifier(token) => match env.borrow().get(&token.literal) {
            Some(value) => value,
            None => Value::other_error(format!("{} is unbouded variable", token.literal)),
        },
        Expr::Prefix { operator, right } => {
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix(&operator.literal, right)
        }
        Expr::Infix { left, operator, right } => {
            let left = eval_expr(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix(&operator.literal, left, right)
        }
        Expr::FunctionLiteral { params, body } => Value::Function {
            params: params.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        },
        Expr::FunctionCalling { callee, arguments } => {
            let callee = eval_expr(callee, env);
            if callee.is_error() {
                return callee;
            }
            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                let value = eval_expr(argument, env);
                if value.is_error() {
                    return value;
                }
                args.push(value);
            }
            apply_function(callee, args)
        }
    }
}

fn eval_prefix(operator: &str, right: Value) -> Value {
    match (operator, &right) {
        ("-", Value::Integer(n)) => Value::Integer(n.wrapping_neg()),
        ("+", Value::Integer(_)) => right,
        _ => Value::type_mismatch("PrefixOperator", "INTEGER", right),
    }
}

fn eval_infix(operator: &str, left: Value, right: Value) -> Value {
    match operator {
        "+" | "-" | "*" => eval_arithmetic(operator, left, right),
        "/" => eval_division(left, right),
        "==" | "!=" => eval_equality(operator, left, right),
        "<" | "<=" | ">" | ">=" => eval_ordering(operator, left, right),
        other => unreachable!("scanner never emits infix operator {other:?}"),
    }
}

fn arith_name(operator: &str) -> &'static str {
    match operator {
        "+" => "PlusInfixOperator",
        "-" => "MinusInfixOperator",
        "*" => "StarInfixOperator",
        _ => unreachable!(),
    }
}

/// Picks whichever operand is not `INTEGER` to report as the
/// offending value; if both are wrong, the left one is reported.
fn non_integer(left: Value, right: Value) -> Value {
    if matches!(left, Value::Integer(_)) {
        right
    } else {
        left
    }
}

// Integer arithmetic wraps on overflow rather than erroring (`+ - *`
// on signed 64-bit values, per the open question in the evaluator's
// design notes).
fn eval_arithmetic(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            let result = match operator {
                "+" => l.wrapping_add(*r),
                "-" => l.wrapping_sub(*r),
                "*" => l.wrapping_mul(*r),
                _ => unreachable!(),
            };
            Value::Integer(result)
        }
        _ => Value::type_mismatch(arith_name(operator), "INTEGER", non_integer(left, right)),
    }
}

fn eval_division(left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(_), Value::Integer(0)) => Value::other_error("Zero division Error"),
        (Value::Integer(l), Value::Integer(r)) => Value::Integer(l.wrapping_div(*r)),
        _ => Value::type_mismatch("SlashInfixOperator", "INTEGER", non_integer(left, right)),
    }
}

fn eval_equality(operator: &str, left: Value, right: Value) -> Value {
    let is_comparable = |v: &Value| matches!(v, Value::Integer(_) | Value::String(_) | Value::Boolean(_));
    if !is_comparable(&left) {
        return Value::type_mismatch("EqInfixOperator", "INTEGER, STRING, BOOLEAN", left);
    }
    if !is_comparable(&right) {
        return Value::type_mismatch("EqInfixOperator", "INTEGER, STRING, BOOLEAN", right);
    }
    // Cross-type pairs (e.g. Integer vs String) fall out of `PartialEq`
    // as unequal automatically, matching the `==` false / `!=` true rule.
    let equal = left == right;
    Value::Boolean(if operator == "==" { equal } else { !equal })
}

fn eval_ordering(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            let result = match operator {
                "<" => l < r,
                "<=" => l <= r,
                ">" => !(l <= r),
                ">=" => !(l < r),
                _ => unreachable!(),
            };
            Value::Boolean(result)
        }
        _ => {
            let name = match operator {
                "<" => "LessInfixOperator",
                "<=" => "LessEqualInfixOperator",
                ">" => "GreaterInfixOperator",
                ">=" => "GreaterEqualInfixOperator",
                _ => unreachable!(),
            };
            Value::type_mismatch(name, "INTEGER", non_integer(left, right))
        }
    }
}

fn apply_function(callee: Value, args: Vec<Value>) -> Value {
    match callee {
        Value::Builtin(builtin) => call_builtin(builtin, args),
        Value::Function { params, body, env } => {
            if params.len() != args.len() {
                return Value::other_error(format!(
                    "Function need {} params, but got {} params",
                    params.len(),
                    args.len()
                ));
            }
            // The child's parent is the function's *defining*
            // environment, never the caller's — this is what makes
            // closures capture lexical scope instead of dynamic scope.
            let call_env = Environment::new_child(&env);
            for (param, arg) in params.iter().zip(args) {
                call_env.borrow_mut().set(&param.literal, arg);
            }
            eval_program(&body, &call_env)
        }
        other => Value::other_error(format!("'{}' is not callable", other.type_tag())),
    }
}

fn call_builtin(builtin: Builtin, args: Vec<Value>) -> Value {
    match builtin {
        Builtin::Puts => {
            for arg in &args {
                println!("{arg}");
            }
            Value::Null
        }
        Builtin::If => {
            if args.len() != 3 {
                return Value::other_error(format!("if need 3 params, but got {} params", args.len()));
            }
            let mut args = args.into_iter();
            let (cond, branch_true, branch_false) = (args.next().unwrap(), args.next().unwrap(), args.next().unwrap());
            match cond {
                Value::Boolean(true) => branch_true,
                Value::Boolean(false) => branch_false,
                other => Value::type_mismatch("IfCondition", "BOOLEAN", other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::scanner::Scanner;

    fn eval(source: &str) -> Value {
        let scanner = Scanner::new(source);
        let mut parser = Parser::new(scanner);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "unexpected parse errors: {:?}", parser.errors());
        let env = Environment::new_root();
        eval_program(&program, &env)
    }

    #[test]
    fn stacked_prefix_operators() {
        assert_eq!(eval("-+-+56"), Value::Integer(56));
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(eval("7/8"), Value::Integer(0));
    }

    #[test]
    fn division_by_zero_is_other_error() {
        assert_eq!(eval("1/0"), Value::other_error("Zero division Error"));
    }

    #[test]
    fn plus_with_wrong_type_is_type_mismatch() {
        let result = eval(r#"1 + "a""#);
        assert_eq!(result.to_string(), "PlusInfixOperator Expected INTEGER but got 'STRING'");
    }

    #[test]
    fn string_equality() {
        assert_eq!(eval(r#""a" == "a""#), Value::Boolean(true));
    }

    #[test]
    fn cross_type_equality_is_false() {
        assert_eq!(eval(r#"1 == "a""#), Value::Boolean(false));
    }

    #[test]
    fn ordering_requires_integers() {
        assert!(eval(r#"1 < "a""#).is_error());
    }

    #[test]
    fn assign_then_reassign() {
        assert_eq!(eval("a = 3\na = a*a\na"), Value::Integer(9));
    }

    #[test]
    fn unbound_identifier() {
        assert_eq!(eval("abc"), Value::other_error("abc is unbouded variable"));
    }

    #[test]
    fn two_arg_function_call() {
        assert_eq!(eval("f = (a,b){a+b}\nf(1,2)"), Value::Integer(3));
    }

    #[test]
    fn curried_closures() {
        assert_eq!(eval("f = (a){(b){a+b}}\ng = f(6)\ng(7)"), Value::Integer(13));
    }

    #[test]
    fn late_bound_free_variable() {
        assert_eq!(eval("val = 12\nf = (){val}\nval = 34\nf()"), Value::Integer(34));
    }

    #[test]
    fn closure_write_isolation() {
        assert_eq!(eval("val = 56\nf = (){val = 78}\nf()\nval"), Value::Integer(56));
    }

    #[test]
    fn string_literal_escapes() {
        assert_eq!(eval(r#""a\n\t\"b""#), Value::String("a\n\t\"b".to_string()));
    }

    #[test]
    fn calling_an_immediately_invoked_empty_function_yields_null() {
        assert_eq!(eval("(){}()"), Value::Null);
    }

    #[test]
    fn builtin_if() {
        assert_eq!(eval("if(1==1, 10, 20)"), Value::Integer(10));
    }

    #[test]
    fn parameter_shadowing_does_not_leak() {
        assert_eq!(eval("val = 12\nf = (val){}\nf(34)\nval"), Value::Integer(12));
    }

    #[test]
    fn arity_mismatch_is_other_error() {
        let result = eval("f = (a,b){a+b}\nf(1)");
        assert!(result.is_error());
    }
}
