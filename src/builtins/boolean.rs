//! `and`, `or`, `not`.
//!
//! Grounded in `logo_primitives.py`'s `logical(f)` decorator: both
//! operands coerce through the `True`/`False` literals only (never
//! truthy/falsy words), and the result is the `True`/`False` word.

use super::numeric::to_bool;
use crate::environment::Environment;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::value::Value;

pub fn and(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let result = to_bool(&args[0])? && to_bool(&args[1])?;
    Ok(Outcome::Value(Value::from_bool(result)))
}

pub fn or(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let result = to_bool(&args[0])? || to_bool(&args[1])?;
    Ok(Outcome::Value(Value::from_bool(result)))
}

pub fn not(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let result = !to_bool(&args[0])?;
    Ok(Outcome::Value(Value::from_bool(result)))
}
