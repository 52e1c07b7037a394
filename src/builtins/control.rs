//! `if`, `ifelse`, `repeat`, `run`, `output`, `stop`, `make`.
//!
//! Grounded in `logo.py`'s `logo_if`/`logo_ifelse`/`repeat`/`logo_run`/
//! `logo_make` and the `output`/`stop` lambdas registered in
//! `load_primitives`. These are the primitives `needs_env` exists for:
//! `if`/`ifelse`/`run` re-enter the evaluator on a sentence argument,
//! `repeat` loops a sentence body, and `make` writes through to the
//! environment's frame stack.

use super::numeric::to_number;
use crate::environment::Environment;
use crate::error::{LogoError, Result};
use crate::evaluator::eval_value_as_program;
use crate::outcome::Outcome;
use crate::value::Value;

fn require_bool_literal(value: &Value, procedure_name: &str) -> Result<bool> {
    match value.as_word() {
        Some("True") => Ok(true),
        Some("False") => Ok(false),
        _ => Err(LogoError::interpreter(format!(
            "First argument to '{procedure_name}' is not True or False: {value}"
        ))),
    }
}

/// Evaluate `if`/`ifelse`'s condition argument as a line of code before
/// testing it, exactly as `logo_if`/`logo_ifelse` in `logo.py` run
/// `result = eval_line(Buffer(val), env)` ahead of the `'True'`/`'False'`
/// comparison. Without this step a sentence condition like
/// `[emptyp :x]` is compared as a raw, unevaluated word and never matches.
fn eval_condition(value: &Value, env: &mut Environment) -> Result<Value> {
    match eval_value_as_program(value, env)? {
        Outcome::Value(v) => Ok(v),
        Outcome::None => Err(LogoError::interpreter(
            "Expected a value but got none while evaluating a condition".to_string(),
        )),
        Outcome::Output(_) => Err(LogoError::interpreter(
            "output/stop used outside of a procedure body".to_string(),
        )),
    }
}

pub fn logo_if(args: &[Value], env: &mut Environment) -> Result<Outcome> {
    let condition = eval_condition(&args[0], env)?;
    if require_bool_literal(&condition, "if")? {
        eval_value_as_program(&args[1], env)
    } else {
        Ok(Outcome::None)
    }
}

pub fn logo_ifelse(args: &[Value], env: &mut Environment) -> Result<Outcome> {
    let condition = eval_condition(&args[0], env)?;
    if require_bool_literal(&condition, "ifelse")? {
        eval_value_as_program(&args[1], env)
    } else {
        eval_value_as_program(&args[2], env)
    }
}

/// `repeat n exp` evaluates `exp` `n` times for effect, always returning
/// `Outcome::None` regardless of what the repeated body produces —
/// `repeat` in `logo.py` discards `eval_line`'s result on every
/// iteration rather than propagating it.
pub fn repeat(args: &[Value], env: &mut Environment) -> Result<Outcome> {
    let count = to_number(&args[0])?.as_f64() as i64;
    for _ in 0..count {
        eval_value_as_program(&args[1], env)?;
    }
    Ok(Outcome::None)
}

pub fn run(args: &[Value], env: &mut Environment) -> Result<Outcome> {
    eval_value_as_program(&args[0], env)
}

pub fn output(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    Ok(Outcome::Output(Some(args[0].clone())))
}

pub fn stop(_args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    Ok(Outcome::Output(None))
}

pub fn make(args: &[Value], env: &mut Environment) -> Result<Outcome> {
    let name = args[0]
        .as_word()
        .ok_or_else(|| LogoError::interpreter("make's first input must be a word naming a variable".to_string()))?;
    env.set_variable_value(name, args[1].clone());
    Ok(Outcome::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle_backend::LoggingTurtleBackend;

    fn env() -> Environment {
        Environment::new(Box::new(|| None), Box::new(LoggingTurtleBackend::default()))
    }

    fn sentence(tokens: &[&str]) -> Value {
        Value::Sentence(tokens.iter().map(|t| Value::word(*t)).collect())
    }

    #[test]
    fn if_false_returns_none_without_evaluating_body() {
        let mut e = env();
        let result = logo_if(&[Value::falsehood(), sentence(&["output", "1"])], &mut e).unwrap();
        assert_eq!(result, Outcome::None);
    }

    #[test]
    fn if_non_boolean_condition_is_an_error() {
        let mut e = env();
        let err = logo_if(&[Value::word("1"), sentence(&["output", "1"])], &mut e).unwrap_err();
        assert!(matches!(
            err,
            LogoError::Interpreter(msg) if msg == "First argument to 'if' is not True or False: 1"
        ));
    }

    #[test]
    fn if_evaluates_a_sentence_condition() {
        let mut e = env();
        let result = logo_if(
            &[sentence(&["equalp", "1", "1"]), sentence(&["output", "1"])],
            &mut e,
        )
        .unwrap();
        assert_eq!(result, Outcome::Output(Some(Value::word("1"))));
    }

    #[test]
    fn output_propagates_through_if() {
        let mut e = env();
        let result = logo_if(&[Value::truth(), sentence(&["output", "5"])], &mut e).unwrap();
        assert_eq!(result, Outcome::Output(Some(Value::word("5"))));
    }

    #[test]
    fn repeat_discards_nested_output() {
        let mut e = env();
        let result = repeat(&[Value::word("3"), sentence(&["output", "5"])], &mut e).unwrap();
        assert_eq!(result, Outcome::None);
    }

    #[test]
    fn make_binds_into_the_environment() {
        let mut e = env();
        make(&[Value::word("x"), Value::word("1")], &mut e).unwrap();
        assert_eq!(e.lookup_variable("x").unwrap(), Value::word("1"));
    }

    #[test]
    fn stop_outputs_none_payload() {
        let mut e = env();
        assert_eq!(stop(&[], &mut e).unwrap(), Outcome::Output(None));
    }
}
