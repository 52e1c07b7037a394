//! `print`, `show`, `type`.
//!
//! Grounded in `logo.py`'s `logo_type` and `logo_primitives.py`'s
//! `logo_print`/`logo_show`. [`Value`]'s `Display` impl already
//! implements the printing algorithm (space
//! separated, no brackets at top level, brackets around nested
//! sentences), so `print`/`show`/`type` are thin wrappers around it.

use std::io::Write;

use crate::environment::Environment;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::value::Value;

pub fn print(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    println!("{}", args[0]);
    Ok(Outcome::None)
}

pub fn show(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    if args[0].is_sentence() {
        println!("[{}]", args[0]);
    } else {
        println!("{}", args[0]);
    }
    Ok(Outcome::None)
}

pub fn type_value(args: &[Value], _env: &mut Environment) -> Result<Outcome> {
    print!("{}", args[0]);
    let _ = std::io::stdout().flush();
    Ok(Outcome::None)
}
