//! `equalp`, `lessp`, `greaterp` and their aliases.
//!
//! `equalp` is grounded in `logo_primitives.py`'s `equal`: a raw equality
//! check first (so two identical sentences, or two identical words,
//! compare `True` without ever touching numeric coercion), falling back
//! to a float comparison, and `False` (not an error) if either side
//! isn't numeric. `lessp`/`greaterp` are grounded in `numeric(op.lt)`/
//! `numeric(op.gt)`: both operands must coerce to numbers.

use super::numeric::to_number;
use crate::environment::Environment;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::value::Value;

pub fn equalp(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    if args[0] == args[1] {
        return Ok(Outcome::Value(Value::truth()));
    }
    let numeric_eq = match (to_number(&args[0]), to_number(&args[1])) {
        (Ok(a), Ok(b)) => a.as_f64() == b.as_f64(),
        _ => false,
    };
    Ok(Outcome::Value(Value::from_bool(numeric_eq)))
}

pub fn lessp(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let lhs = to_number(&args[0])?.as_f64();
    let rhs = to_number(&args[1])?.as_f64();
    Ok(Outcome::Value(Value::from_bool(lhs < rhs)))
}

pub fn greaterp(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let lhs = to_number(&args[0])?.as_f64();
    let rhs = to_number(&args[1])?.as_f64();
    Ok(Outcome::Value(Value::from_bool(lhs > rhs)))
}
