//! Procedure records: primitive and user-defined, behind one `invoke`.
//!
//! Grounded in `Procedure` from `logo.py` (name, arity, body, isprimitive,
//! needs_env, formal_params) and in the Design Note that
//! says the primitive/user split should be a sum type sharing one
//! `invoke(args, env)` entry point rather than the original's
//! `if proc.isprimitive: proc.body(*args) else: ...` branch repeated at
//! every call site. `src/stdlib/arithmetic.rs` registers primitives as
//! bare Rust function pointers behind a small record, which is the
//! shape `PrimitiveFn` mirrors.

use std::collections::HashMap;
use std::rc::Rc;

use crate::buffer::Buffer;
use crate::environment::Environment;
use crate::error::{LogoError, Result};
use crate::outcome::Outcome;
use crate::token::Token;
use crate::value::Value;

/// The signature every primitive procedure implements. Primitives that
/// are marked `needs_env` use the `&mut Environment` to read/write
/// variables, recurse into the evaluator (`if`, `repeat`, `run`, ...), or
/// reach the turtle backend; primitives that don't simply ignore it.
pub type PrimitiveFn = fn(&[Value], &mut Environment) -> Result<Outcome>;

/// Either a host-language primitive or a user-defined procedure body.
pub enum ProcedureBody {
    /// A built-in procedure implemented in Rust.
    Primitive(PrimitiveFn),
    /// A `to ... end` body: one token list per line.
    UserDefined(Vec<Vec<Token>>),
}

/// A Logo procedure: primitive or user-defined, addressable by name.
pub struct Procedure {
    /// The procedure's canonical name (the first of any alias list).
    pub name: String,
    /// Number of arguments the procedure expects (excludes the
    /// environment, which `needs_env` adds separately).
    pub arity: usize,
    /// The procedure's implementation.
    pub body: ProcedureBody,
    /// Whether the environment is threaded through to the body. An
    /// implementation detail of primitives (and always true for
    /// user-defined procedures, which must read their own frame); it
    /// never changes how many Logo-level arguments are collected.
    pub needs_env: bool,
    /// Formal parameter names, in declaration order. Primitives that
    /// don't name their parameters default to `"0"`, `"1"`, ...
    pub formal_params: Vec<String>,
}

impl Procedure {
    /// Build a primitive procedure record with positional default
    /// parameter names `"0"`, `"1"`, ...
    pub fn primitive(name: impl Into<String>, arity: usize, needs_env: bool, f: PrimitiveFn) -> Self {
        Self {
            name: name.into(),
            arity,
            body: ProcedureBody::Primitive(f),
            needs_env,
            formal_params: (0..arity).map(|i| i.to_string()).collect(),
        }
    }

    /// Build a user-defined procedure record from a parsed `to ... end`
    /// body. User procedures always need the environment:
    /// they push their own frame.
    pub fn user_defined(name: impl Into<String>, formal_params: Vec<String>, body: Vec<Vec<Token>>) -> Self {
        Self {
            arity: formal_params.len(),
            name: name.into(),
            body: ProcedureBody::UserDefined(body),
            needs_env: true,
            formal_params,
        }
    }

    /// Apply this procedure to already-evaluated arguments
    /// "Procedure application" and "User-procedure dispatch").
    pub fn invoke(&self, args: Vec<Value>, env: &mut Environment) -> Result<Outcome> {
        match &self.body {
            ProcedureBody::Primitive(f) => f(&args, env),
            ProcedureBody::UserDefined(body) => self.invoke_user_defined(body, args, env),
        }
    }

    fn invoke_user_defined(
        &self,
        body: &[Vec<Token>],
        args: Vec<Value>,
        env: &mut Environment,
    ) -> Result<Outcome> {
        let bindings: HashMap<String, Value> = self
            .formal_params
            .iter()
            .cloned()
            .zip(args)
            .collect();
        env.push_frame(bindings);

        for line in body {
            // A failure here propagates without popping the frame; the
            // REPL driver restores the frame stack to depth 1 once it
            // catches the error at the line boundary.
            match crate::evaluator::eval_line(&mut Buffer::new(line.clone()), env)? {
                Outcome::Output(payload) => {
                    env.pop_frame();
                    return Ok(match payload {
                        Some(value) => Outcome::Value(value),
                        None => Outcome::None,
                    });
                }
                Outcome::Value(value) => {
                    env.pop_frame();
                    return Err(LogoError::interpreter(format!(
                        "You do not say what to do with {value}."
                    )));
                }
                Outcome::None => {}
            }
        }

        env.pop_frame();
        Ok(Outcome::None)
    }
}

/// Registry helper: build one [`Rc<Procedure>`] and insert it under every
/// name in `names` (the first is the procedure's canonical name), exactly
/// as `logo.py`'s `load_primitives.make_primitive` fans an alias list out
/// to several dict entries sharing one `Procedure` object.
pub fn register_aliases(
    table: &mut HashMap<String, Rc<Procedure>>,
    names: &[&str],
    arity: usize,
    needs_env: bool,
    f: PrimitiveFn,
) {
    let proc = Rc::new(Procedure::primitive(names[0], arity, needs_env, f));
    for name in names {
        table.insert((*name).to_string(), proc.clone());
    }
}
