//! The recursive, precedence-aware expression evaluator.
//!
//! Grounded in `logo_eval`/`eval_line`/`apply_procedure`/`collect_args`/
//! `eval_definition` from `logo.py`. The control-flow shape (a cursor over
//! one line's tokens, non-infix dispatch followed by a precedence-group
//! loop for infix operators) is carried over line for line; only the
//! `None`/value/`OUTPUT` tri-state is now the [`Outcome`] sum described in
//! rather than a tuple sentinel.

use crate::buffer::Buffer;
use crate::environment::Environment;
use crate::error::{LogoError, Result};
use crate::outcome::Outcome;
use crate::procedure::Procedure;
use crate::token::Token;
use crate::value::Value;
use std::rc::Rc;

const GROUP0: &[&str] = &["<", ">", "="];
const GROUP1: &[&str] = &["+", "-"];
const GROUP2: &[&str] = &["*", "/"];

fn infix_primitive_name(op: &str) -> &'static str {
    match op {
        "<" => "lessp",
        ">" => "greaterp",
        "=" => "equalp",
        "+" => "sum",
        "-" => "difference",
        "*" => "product",
        "/" => "div",
        _ => unreachable!("caller already checked op is an infix symbol"),
    }
}

fn is_infix_operator(op: &str) -> bool {
    GROUP0.contains(&op) || GROUP1.contains(&op) || GROUP2.contains(&op)
}

fn is_self_evaluating(word: &str) -> bool {
    word == "True" || word == "False" || word.parse::<f64>().is_ok()
}

/// Convert a parsed [`Token`] into the [`Value`] it denotes when quoted:
/// a word token keeps its text, a sentence token carries its elements
/// over unevaluated ("Quotation of a sentence yields the
/// sentence unchanged").
pub fn token_to_value(token: &Token) -> Value {
    match token {
        Token::Word(w) => Value::word(w.clone()),
        Token::Sentence(items) => Value::Sentence(items.iter().map(token_to_value).collect()),
    }
}

/// The inverse conversion, used when a primitive (`if`, `repeat`, `run`)
/// needs to re-evaluate a sentence value as a line of code.
pub fn value_to_token(value: &Value) -> Token {
    match value {
        Value::Word(w) => Token::word(w.clone()),
        Value::Sentence(items) => Token::Sentence(items.iter().map(value_to_token).collect()),
    }
}

/// Treat `value` as a one-line program: a bare word becomes a
/// single-token line (so `run "double` calls the procedure `double`); a
/// sentence becomes its elements, tokenized (`logo_run`/`logo_if` in
/// `logo.py`: `if type(exp) != list: exp = [exp]`).
pub fn value_to_program_tokens(value: &Value) -> Vec<Token> {
    match value {
        Value::Word(_) => vec![value_to_token(value)],
        Value::Sentence(items) => items.iter().map(value_to_token).collect(),
    }
}

/// Tokenize-free convenience: run `tokens` as one line against `env`.
pub fn eval_tokens(tokens: Vec<Token>, env: &mut Environment) -> Result<Outcome> {
    eval_line(&mut Buffer::new(tokens), env)
}

/// Evaluate a value as a one-line program (the shared core of `if`,
/// `ifelse`'s branches, and `run`).
pub fn eval_value_as_program(value: &Value, env: &mut Environment) -> Result<Outcome> {
    eval_tokens(value_to_program_tokens(value), env)
}

/// Repeatedly evaluate expressions from `buffer` until either it is
/// exhausted or one produces something other than [`Outcome::None`]
/// ("Top-level contract").
pub fn eval_line(buffer: &mut Buffer<Token>, env: &mut Environment) -> Result<Outcome> {
    let mut result = Outcome::None;
    while !buffer.is_exhausted() && result.is_none() {
        result = logo_eval(buffer, env, false)?;
    }
    Ok(result)
}

/// Evaluate one expression at the cursor, absorbing infix operators up to
/// `pre_operator`'s precedence ceiling.
pub fn logo_eval(buffer: &mut Buffer<Token>, env: &mut Environment, pre_operator: bool) -> Result<Outcome> {
    match buffer.current() {
        None => return Err(LogoError::interpreter(format!("Ran out of input at {buffer}"))),
        Some(Token::Word(w)) if w == ")" => {
            return Err(LogoError::interpreter(format!("Unexpected \")\" at {buffer}")))
        }
        _ => {}
    }

    let base = eval_noninfix(buffer, env)?;
    let mut result = match base {
        Outcome::Value(v) => v,
        Outcome::None | Outcome::Output(_) => return Ok(base),
    };

    loop {
        let op = match buffer.current() {
            Some(Token::Word(w)) if is_infix_operator(w) => w.clone(),
            _ => break,
        };

        if GROUP2.contains(&op.as_str()) {
            buffer.pop();
            let rhs = expect_value(eval_noninfix(buffer, env)?, buffer)?;
            result = apply_infix(&op, result, rhs, env)?;
        } else {
            if pre_operator {
                break;
            }
            buffer.pop();
            let sub_pre_operator = GROUP1.contains(&op.as_str());
            let rhs_outcome = logo_eval(buffer, env, sub_pre_operator)?;
            let rhs = expect_value(rhs_outcome, buffer)?;
            result = apply_infix(&op, result, rhs, env)?;
        }
    }

    Ok(Outcome::Value(result))
}

fn eval_noninfix(buffer: &mut Buffer<Token>, env: &mut Environment) -> Result<Outcome> {
    let token = buffer.pop().expect("caller already checked buffer.current() is Some");
    match token {
        Token::Sentence(items) => Ok(Outcome::Value(Value::Sentence(
            items.iter().map(token_to_value).collect(),
        ))),
        Token::Word(word) => {
            if is_self_evaluating(&word) {
                Ok(Outcome::Value(Value::word(word)))
            } else if let Some(rest) = word.strip_prefix(':') {
                if rest.is_empty() {
                    return Err(LogoError::interpreter(format!("Illegal variable reference \"{word}\"")));
                }
                Ok(Outcome::Value(env.lookup_variable(rest)?))
            } else if word == "to" {
                eval_definition(buffer, env)
            } else if let Some(rest) = word.strip_prefix('"') {
                Ok(Outcome::Value(Value::word(rest)))
            } else if word == "(" {
                let inner = logo_eval(buffer, env, false)?;
                match buffer.current() {
                    Some(Token::Word(w)) if w == ")" => {
                        buffer.pop();
                        Ok(inner)
                    }
                    _ => Err(LogoError::interpreter(format!("Expected \")\" at {buffer}"))),
                }
            } else {
                match env.resolve_procedure(&word) {
                    Some(proc) => apply_procedure(proc, buffer, env),
                    None => Err(LogoError::interpreter(format!("I do not know how to {word}."))),
                }
            }
        }
    }
}

/// Parse a `to name :p1 :p2 ...` header, then pull continuation lines
/// from the environment until `end`, registering the resulting procedure
/// .
fn eval_definition(buffer: &mut Buffer<Token>, env: &mut Environment) -> Result<Outcome> {
    let name = match buffer.pop() {
        Some(Token::Word(w)) => strip_quotation(&w),
        Some(Token::Sentence(_)) => {
            return Err(LogoError::interpreter("A procedure name cannot be a sentence".to_string()))
        }
        None => return Err(LogoError::interpreter(format!("Ran out of input at {buffer}"))),
    };

    let mut formal_params = Vec::new();
    while !buffer.is_exhausted() {
        match buffer.pop() {
            Some(Token::Word(w)) => formal_params.push(strip_quotation(&w)),
            Some(Token::Sentence(_)) => {
                return Err(LogoError::interpreter("A formal parameter cannot be a sentence".to_string()))
            }
            None => unreachable!("loop guarded by is_exhausted"),
        }
    }

    let mut body = Vec::new();
    loop {
        let line = env.next_continuation_line().ok_or_else(|| {
            LogoError::interpreter(format!("Ran out of input while defining {name}"))
        })?;
        let tokens = crate::tokenizer::parse_line(&line)?;
        if tokens.len() == 1 && tokens[0] == Token::word("end") {
            break;
        }
        body.push(tokens);
    }

    env.define_procedure(name.clone(), Procedure::user_defined(name, formal_params, body));
    Ok(Outcome::None)
}

fn strip_quotation(word: &str) -> String {
    word.strip_prefix('"')
        .or_else(|| word.strip_prefix(':'))
        .unwrap_or(word)
        .to_string()
}

/// Collect `proc.arity` arguments by recursively evaluating expressions,
/// then dispatch ("Procedure application").
pub fn apply_procedure(proc: Rc<Procedure>, buffer: &mut Buffer<Token>, env: &mut Environment) -> Result<Outcome> {
    let mut args = Vec::with_capacity(proc.arity);
    while args.len() < proc.arity {
        if buffer.is_exhausted() {
            return Err(LogoError::interpreter(format!(
                "Found only {} of {} args at {buffer}",
                args.len(),
                proc.arity
            )));
        }
        let outcome = logo_eval(buffer, env, false)?;
        args.push(expect_value(outcome, buffer)?);
    }
    proc.invoke(args, env)
}

fn apply_infix(op: &str, lhs: Value, rhs: Value, env: &mut Environment) -> Result<Value> {
    let name = infix_primitive_name(op);
    let proc = env
        .resolve_procedure(name)
        .unwrap_or_else(|| panic!("infix primitive '{name}' must always be registered"));
    match proc.invoke(vec![lhs, rhs], env)? {
        Outcome::Value(v) => Ok(v),
        _ => Err(LogoError::interpreter(format!("'{op}' did not produce a value"))),
    }
}

fn expect_value(outcome: Outcome, buffer: &Buffer<Token>) -> Result<Value> {
    match outcome {
        Outcome::Value(v) => Ok(v),
        Outcome::None => Err(LogoError::interpreter(format!(
            "Expected a value but got none at {buffer}"
        ))),
        Outcome::Output(_) => Err(LogoError::interpreter(
            "output/stop used outside of a procedure body".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle_backend::LoggingTurtleBackend;

    fn env() -> Environment {
        Environment::new(Box::new(|| None), Box::new(LoggingTurtleBackend::default()))
    }

    fn eval(src: &str, env: &mut Environment) -> Outcome {
        let tokens = crate::tokenizer::parse_line(src).unwrap();
        eval_line(&mut Buffer::new(tokens), env).unwrap()
    }

    #[test]
    fn infix_precedence_matches_arithmetic_grouping() {
        let mut e = env();
        let result = eval(
            "3 + 12 / 8 - 0.25 * 2 = 2 * ( 1 + 0.5 ) * 4 / 3",
            &mut e,
        );
        assert_eq!(result, Outcome::Value(Value::word("True")));
    }

    #[test]
    fn nested_procedure_application() {
        let mut e = env();
        let result = eval("sum 10 difference 7 3", &mut e);
        assert_eq!(result, Outcome::Value(Value::word("14")));
    }

    #[test]
    fn unmatched_paren_in_nested_call_is_an_error() {
        let mut e = env();
        let tokens = crate::tokenizer::parse_line("sum 1 (sum 2 3 4)").unwrap();
        let err = eval_line(&mut Buffer::new(tokens), &mut e).unwrap_err();
        assert!(matches!(err, LogoError::Interpreter(msg) if msg.starts_with("Expected \")\"")));
    }

    #[test]
    fn variable_lookup_after_make() {
        let mut e = env();
        eval(r#"make "x 1"#, &mut e);
        eval(r#"make "x 2"#, &mut e);
        let result = eval("print :x", &mut e);
        assert_eq!(result, Outcome::None);
        assert_eq!(e.lookup_variable("x").unwrap(), Value::word("2"));
    }

    #[test]
    fn quoted_word_strips_leading_quote() {
        let mut e = env();
        assert_eq!(eval(r#""hello"#, &mut e), Outcome::Value(Value::word("hello")));
    }

    #[test]
    fn sentence_is_quoted_unchanged() {
        let mut e = env();
        assert_eq!(
            eval("[a [b c] d]", &mut e),
            Outcome::Value(Value::Sentence(vec![
                Value::word("a"),
                Value::Sentence(vec![Value::word("b"), Value::word("c")]),
                Value::word("d"),
            ]))
        );
    }

    #[test]
    fn unknown_procedure_is_an_error() {
        let mut e = env();
        let tokens = crate::tokenizer::parse_line("frobnicate 1").unwrap();
        let err = eval_line(&mut Buffer::new(tokens), &mut e).unwrap_err();
        assert!(matches!(err, LogoError::Interpreter(msg) if msg == "I do not know how to frobnicate."));
    }
}
