//! The read-eval-print driver shared by interactive and file-backed runs.
//!
//! Grounded in `logo.py`'s `read_eval_loop`/`interpret_line`/
//! `strip_comment`: pull a line from whatever source is supplying them,
//! terminate cleanly on `quit`/`exit`/`bye` (case-insensitive) or
//! end-of-input, otherwise strip a trailing `;` comment, tokenize,
//! evaluate, and print any error without stopping the loop. `main.rs`
//! supplies the line source (interactive prompt or file-replay); this
//! module knows nothing about where lines come from.

use crate::buffer::Buffer;
use crate::environment::Environment;
use crate::error::LogoError;
use crate::evaluator::eval_line;
use crate::outcome::Outcome;
use crate::tokenizer;

/// Names that terminate the loop, matched case-insensitively.
fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "quit" | "exit" | "bye")
}

/// Strip everything from the first `;` onward ("Comment
/// syntax").
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Tokenize and evaluate one top-level line, reporting a non-`none`
/// result the way the REPL is specified to ("Top-level
/// contract").
pub fn run_line(line: &str, env: &mut Environment) -> crate::error::Result<()> {
    let tokens = tokenizer::parse_line(strip_comment(line))?;
    match eval_line(&mut Buffer::new(tokens), env)? {
        Outcome::None => Ok(()),
        Outcome::Value(value) => Err(LogoError::interpreter(format!(
            "You do not say what to do with {value}."
        ))),
        Outcome::Output(_) => Err(LogoError::interpreter(
            "output/stop used outside of a procedure body".to_string(),
        )),
    }
}

/// Drive the loop: pull lines from `next_line` until it returns `None`,
/// feeding each one to [`run_line`]. Errors are printed and the loop
/// continues; the frame stack is restored to depth 1 so a runaway nested
/// call doesn't leak frames into the next line.
pub fn read_eval_loop(env: &mut Environment, mut next_line: impl FnMut() -> Option<String>) {
    loop {
        let Some(line) = next_line() else {
            println!("Goodbye!");
            return;
        };

        if is_quit(&line) {
            println!("Goodbye!");
            return;
        }

        if let Err(err) = run_line(&line, env) {
            println!("{err}");
            env.truncate_frames_to(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle_backend::LoggingTurtleBackend;

    fn env() -> Environment {
        Environment::new(Box::new(|| None), Box::new(LoggingTurtleBackend::default()))
    }

    #[test]
    fn strip_comment_keeps_prefix_before_semicolon() {
        assert_eq!(strip_comment("print 1 ; a comment"), "print 1 ");
        assert_eq!(strip_comment("print 1"), "print 1");
    }

    #[test]
    fn run_line_rejects_a_trailing_bare_value() {
        let mut e = env();
        let err = run_line("1 + 1", &mut e).unwrap_err();
        assert!(matches!(err, LogoError::Interpreter(msg) if msg == "You do not say what to do with 2."));
    }

    #[test]
    fn run_line_accepts_an_effectful_call() {
        let mut e = env();
        assert!(run_line("print 1", &mut e).is_ok());
    }

    #[test]
    fn loop_terminates_on_quit_word_case_insensitively() {
        let mut e = env();
        let mut lines = vec!["print 1".to_string(), "BYE".to_string()].into_iter();
        read_eval_loop(&mut e, || lines.next());
    }

    #[test]
    fn loop_recovers_from_an_error_and_keeps_going() {
        let mut e = env();
        let mut lines = vec![
            "frobnicate".to_string(),
            "make \"x 1".to_string(),
        ]
        .into_iter();
        read_eval_loop(&mut e, || lines.next());
        assert_eq!(e.lookup_variable("x").unwrap(), crate::value::Value::word("1"));
    }
}
