//! `sum`, `difference`, `product`, `div`/`quotient`.
//!
//! Grounded in `logo_primitives.py`'s `load`, which binds these through
//! `numeric(op.add)` etc. `sum`/`difference`/`product` stay in the
//! integer tower when both operands are integers; `div`/`quotient` always
//! perform true division, mirroring `operator.truediv`.

use super::numeric::{to_number, NumberValue};
use crate::environment::Environment;
use crate::error::{LogoError, Result};
use crate::outcome::Outcome;
use crate::value::Value;

fn binary_int_or_float(
    args: &[Value],
    int_op: impl Fn(i64, i64) -> i64,
    float_op: impl Fn(f64, f64) -> f64,
) -> Result<Outcome> {
    let lhs = to_number(&args[0])?;
    let rhs = to_number(&args[1])?;
    let result = match (lhs, rhs) {
        (NumberValue::Int(a), NumberValue::Int(b)) => NumberValue::Int(int_op(a, b)),
        _ => NumberValue::Float(float_op(lhs.as_f64(), rhs.as_f64())),
    };
    Ok(Outcome::Value(result.to_value()))
}

pub fn sum(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    binary_int_or_float(args, |a, b| a + b, |a, b| a + b)
}

pub fn difference(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    binary_int_or_float(args, |a, b| a - b, |a, b| a - b)
}

pub fn product(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    binary_int_or_float(args, |a, b| a * b, |a, b| a * b)
}

pub fn div(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let lhs = to_number(&args[0])?.as_f64();
    let rhs = to_number(&args[1])?.as_f64();
    if rhs == 0.0 {
        return Err(LogoError::interpreter("division by zero".to_string()));
    }
    Ok(Outcome::Value(NumberValue::Float(lhs / rhs).to_value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle_backend::LoggingTurtleBackend;

    fn env() -> Environment {
        Environment::new(Box::new(|| None), Box::new(LoggingTurtleBackend::default()))
    }

    #[test]
    fn sum_of_integers_stays_integer() {
        let mut e = env();
        let result = sum(&[Value::word("2"), Value::word("3")], &mut e).unwrap();
        assert_eq!(result, Outcome::Value(Value::word("5")));
    }

    #[test]
    fn sum_with_a_float_operand_promotes() {
        let mut e = env();
        let result = sum(&[Value::word("2"), Value::word("0.5")], &mut e).unwrap();
        assert_eq!(result, Outcome::Value(Value::word("2.5")));
    }

    #[test]
    fn div_by_zero_is_an_error() {
        let mut e = env();
        assert!(div(&[Value::word("1"), Value::word("0")], &mut e).is_err());
    }

    #[test]
    fn div_always_performs_true_division() {
        let mut e = env();
        let result = div(&[Value::word("4"), Value::word("2")], &mut e).unwrap();
        assert_eq!(result, Outcome::Value(Value::word("2.0")));
    }
}
