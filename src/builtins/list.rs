//! List (sentence) and word-splicing primitives: `first`, `butfirst`,
//! `last`, `butlast`, `fput`, `list`, `sentence`, `word`, `emptyp`,
//! `listp`, `wordp`.
//!
//! Grounded in `logo_primitives.py`: `first`/`butfirst`/`last`/`butlast`
//! use Python slicing, which works identically on a `str` or a `list` —
//! so in this crate they operate on a word's characters exactly as they
//! operate on a sentence's elements, rather than requiring a sentence.

use crate::environment::Environment;
use crate::error::{LogoError, Result};
use crate::outcome::Outcome;
use crate::value::Value;

fn element_count(value: &Value) -> usize {
    match value {
        Value::Word(w) => w.chars().count(),
        Value::Sentence(items) => items.len(),
    }
}

fn require_nonempty(value: &Value, who: &str) -> Result<()> {
    if element_count(value) == 0 {
        Err(LogoError::interpreter(format!("{who} is not defined on an empty input")))
    } else {
        Ok(())
    }
}

pub fn first(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    require_nonempty(&args[0], "first")?;
    let result = match &args[0] {
        Value::Word(w) => Value::word(w.chars().next().unwrap().to_string()),
        Value::Sentence(items) => items[0].clone(),
    };
    Ok(Outcome::Value(result))
}

pub fn butfirst(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    require_nonempty(&args[0], "butfirst")?;
    let result = match &args[0] {
        Value::Word(w) => Value::word(w.chars().skip(1).collect::<String>()),
        Value::Sentence(items) => Value::Sentence(items[1..].to_vec()),
    };
    Ok(Outcome::Value(result))
}

pub fn last(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    require_nonempty(&args[0], "last")?;
    let result = match &args[0] {
        Value::Word(w) => Value::word(w.chars().last().unwrap().to_string()),
        Value::Sentence(items) => items[items.len() - 1].clone(),
    };
    Ok(Outcome::Value(result))
}

pub fn butlast(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    require_nonempty(&args[0], "butlast")?;
    let result = match &args[0] {
        Value::Word(w) => {
            let mut chars: Vec<char> = w.chars().collect();
            chars.pop();
            Value::word(chars.into_iter().collect::<String>())
        }
        Value::Sentence(items) => Value::Sentence(items[..items.len() - 1].to_vec()),
    };
    Ok(Outcome::Value(result))
}

pub fn fput(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let Value::Sentence(rest) = &args[1] else {
        return Err(LogoError::interpreter("Second input to fput must be a sentence".to_string()));
    };
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(args[0].clone());
    items.extend(rest.iter().cloned());
    Ok(Outcome::Value(Value::Sentence(items)))
}

pub fn list(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    Ok(Outcome::Value(Value::Sentence(vec![args[0].clone(), args[1].clone()])))
}

fn as_items(value: &Value) -> Vec<Value> {
    match value {
        Value::Sentence(items) => items.clone(),
        Value::Word(_) => vec![value.clone()],
    }
}

pub fn sentence(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let mut items = as_items(&args[0]);
    items.extend(as_items(&args[1]));
    Ok(Outcome::Value(Value::Sentence(items)))
}

pub fn word(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    let (Value::Word(a), Value::Word(b)) = (&args[0], &args[1]) else {
        return Err(LogoError::interpreter("Cannot take a sentence input.".to_string()));
    };
    Ok(Outcome::Value(Value::word(format!("{a}{b}"))))
}

pub fn emptyp(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    Ok(Outcome::Value(Value::from_bool(element_count(&args[0]) == 0)))
}

pub fn listp(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    Ok(Outcome::Value(Value::from_bool(args[0].is_sentence())))
}

pub fn wordp(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    Ok(Outcome::Value(Value::from_bool(args[0].as_word().is_some())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle_backend::LoggingTurtleBackend;

    fn env() -> Environment {
        Environment::new(Box::new(|| None), Box::new(LoggingTurtleBackend::default()))
    }

    fn sentence_of(words: &[&str]) -> Value {
        Value::Sentence(words.iter().map(|w| Value::word(*w)).collect())
    }

    #[test]
    fn first_and_butfirst_on_a_sentence() {
        let mut e = env();
        let s = sentence_of(&["a", "b", "c"]);
        assert_eq!(first(&[s.clone()], &mut e).unwrap(), Outcome::Value(Value::word("a")));
        assert_eq!(
            butfirst(&[s], &mut e).unwrap(),
            Outcome::Value(sentence_of(&["b", "c"]))
        );
    }

    #[test]
    fn first_on_a_word_returns_its_first_character() {
        let mut e = env();
        let result = first(&[Value::word("hello")], &mut e).unwrap();
        assert_eq!(result, Outcome::Value(Value::word("h")));
    }

    #[test]
    fn fput_requires_a_sentence_second_argument() {
        let mut e = env();
        assert!(fput(&[Value::word("a"), Value::word("b")], &mut e).is_err());
    }

    #[test]
    fn word_rejects_sentence_inputs() {
        let mut e = env();
        let err = word(&[Value::word("a"), sentence_of(&["b"])], &mut e).unwrap_err();
        assert!(matches!(err, LogoError::Interpreter(msg) if msg == "Cannot take a sentence input."));
    }

    #[test]
    fn sentence_concatenates_coercing_words_to_singletons() {
        let mut e = env();
        let result = sentence(&[Value::word("a"), sentence_of(&["b", "c"])], &mut e).unwrap();
        assert_eq!(result, Outcome::Value(sentence_of(&["a", "b", "c"])));
    }
}
