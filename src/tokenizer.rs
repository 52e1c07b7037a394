//! Converts one line of Logo source into a tree of [`Token`]s.
//!
//! Grounded in `logo_parser.py`'s `parse_line`/`parse_token`/`parse_symbol`:
//! a character [`Buffer`] is walked left to right, `[`/`]` open and close
//! nested [`Token::Sentence`] values, operator characters are emitted as
//! one-character word tokens (except a leading `-`, which starts a symbol
//! so negative numbers tokenize as a single word), and anything else is
//! accumulated until the next delimiter.

use crate::buffer::Buffer;
use crate::error::{LogoError, Result};
use crate::token::Token;

const OPERATORS: &[char] = &['+', '-', '*', '/', '=', '<', '>', '(', ')'];

fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

fn is_delimiter(ch: char) -> bool {
    ch == '[' || ch == ']' || ch == '\n' || ch == ' ' || is_operator(ch)
}

/// Tokenize one line of Logo source into a flat top-level token sequence
/// (nested `[...]` sentences become single [`Token::Sentence`] entries).
pub fn parse_line(line: &str) -> Result<Vec<Token>> {
    let mut chars = Buffer::new(line.trim().chars().collect());
    parse_tokens(&mut chars, 0)
}

fn parse_tokens(chars: &mut Buffer<char>, depth: usize) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    loop {
        match chars.current() {
            None => {
                if depth != 0 {
                    return Err(LogoError::syntax(format!("Unmatched \"[\" at {chars}")));
                }
                return Ok(tokens);
            }
            Some(' ') => {
                chars.pop();
            }
            Some('[') => {
                chars.pop();
                let nested = parse_tokens(chars, depth + 1)?;
                tokens.push(Token::Sentence(nested));
            }
            Some(']') => {
                if depth == 0 {
                    return Err(LogoError::syntax(format!("Unexpected \"]\" at {chars}")));
                }
                chars.pop();
                return Ok(tokens);
            }
            Some(_) => {
                tokens.push(parse_token(chars));
            }
        }
    }
}

fn parse_token(chars: &mut Buffer<char>) -> Token {
    let ch = *chars.current().expect("caller checked current() is Some");
    if is_operator(ch) {
        let negative_number = ch == '-' && !matches!(chars.previous(), Some(' ') | None);
        if !negative_number {
            chars.pop();
            return Token::word(ch);
        }
    }
    Token::word(parse_symbol(chars))
}

fn parse_symbol(chars: &mut Buffer<char>) -> String {
    let mut symbol = String::new();
    symbol.push(chars.pop().expect("caller checked current() is Some"));
    while let Some(&ch) = chars.current() {
        if is_delimiter(ch) {
            break;
        }
        symbol.push(chars.pop().expect("current() just confirmed Some"));
    }
    symbol
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.as_word().unwrap()).collect()
    }

    #[test]
    fn flat_line() {
        let tokens = parse_line("print sum 10 difference 7 3").unwrap();
        assert_eq!(
            words(&tokens),
            vec!["print", "sum", "10", "difference", "7", "3"]
        );
    }

    #[test]
    fn nested_sentence() {
        let tokens = parse_line(r#"print "this [is a [deep] list]"#).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::word("print"));
        match &tokens[1] {
            Token::Word(w) => assert_eq!(w, "\"this"),
            _ => panic!("expected a quoted word"),
        }
    }

    #[test]
    fn negative_number_after_space() {
        let tokens = parse_line("sum -3 4").unwrap();
        assert_eq!(words(&tokens), vec!["sum", "-3", "4"]);
    }

    #[test]
    fn minus_operator_without_space_is_operator() {
        let tokens = parse_line("(4-3)").unwrap();
        assert_eq!(words(&tokens), vec!["(", "4", "-", "3", ")"]);
    }

    #[test]
    fn unmatched_open_bracket_is_syntax_error() {
        let err = parse_line("print [a b").unwrap_err();
        assert!(matches!(err, LogoError::Syntax(_)));
    }

    #[test]
    fn unexpected_close_bracket_is_syntax_error() {
        let err = parse_line("print a]").unwrap_err();
        assert!(matches!(err, LogoError::Syntax(_)));
    }

    #[test]
    fn deeply_nested_sentences() {
        let tokens = parse_line("print [a [b [c [d]]]]").unwrap();
        let Token::Sentence(outer) = &tokens[1] else {
            panic!("expected sentence")
        };
        assert_eq!(outer[0], Token::word("a"));
        assert!(matches!(outer[1], Token::Sentence(_)));
    }
}
