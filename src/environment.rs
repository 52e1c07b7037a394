//! The frame stack and procedure table.
//!
//! Grounded in `Environment` from `logo.py`: a non-empty stack of
//! name-to-value frames, the bottom one global, plus a procedure table
//! populated once with the primitive set. `set_variable_value`'s
//! innermost-or-global write rule and `lookup_variable`'s
//! innermost-to-global search are carried over verbatim (see the Design
//! Note: this is a deliberate language convention, not a
//! lexical-chain write).

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{LogoError, Result};
use crate::procedure::Procedure;
use crate::turtle_backend::TurtleBackend;
use crate::value::Value;

/// A zero-argument supplier of the next raw source line, used while
/// parsing a multi-line `to ... end` definition. Returns `None` on
/// end-of-input, mirroring `get_continuation_line` in `logo.py`.
pub type ContinuationSupplier = Box<dyn FnMut() -> Option<String>>;

/// The environment: a frame stack for variable bindings and a flat
/// procedure table, plus the continuation-line supplier used by `to` and
/// the turtle-graphics collaborator the turtle primitives draw through.
pub struct Environment {
    frames: Vec<HashMap<String, Value>>,
    procedures: HashMap<String, Rc<Procedure>>,
    continuation_line: ContinuationSupplier,
    turtle: Box<dyn TurtleBackend>,
}

impl Environment {
    /// Create an environment with the primitive procedure set loaded and
    /// a single (global) frame.
    pub fn new(continuation_line: ContinuationSupplier, turtle: Box<dyn TurtleBackend>) -> Self {
        Self {
            frames: vec![HashMap::new()],
            procedures: crate::builtins::load_primitives(),
            continuation_line,
            turtle,
        }
    }

    /// Push a new frame of bindings (used when applying a user procedure).
    pub fn push_frame(&mut self, bindings: HashMap<String, Value>) {
        self.frames.push(bindings);
    }

    /// Discard the innermost frame.
    ///
    /// # Panics
    /// Panics if called when only the global frame remains; callers must
    /// balance every `push_frame` with exactly one `pop_frame`.
    pub fn pop_frame(&mut self) {
        assert!(
            self.frames.len() > 1,
            "pop_frame called with no procedure frame active"
        );
        self.frames.pop();
    }

    /// The number of frames currently on the stack (1 == just global).
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    /// Pop frames down to `depth`, used to restore stack balance after an
    /// error unwinds out of nested procedure calls.
    pub fn truncate_frames_to(&mut self, depth: usize) {
        self.frames.truncate(depth.max(1));
    }

    /// Look up a variable from the innermost frame outward, or fail with
    /// "`name` has no value".
    pub fn lookup_variable(&self, name: &str) -> Result<Value> {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.get(name) {
                return Ok(value.clone());
            }
        }
        Err(LogoError::interpreter(format!("{name} has no value")))
    }

    /// Set a variable: overwrite in the innermost frame if already bound
    /// there, otherwise create/overwrite in the global frame.
    pub fn set_variable_value(&mut self, name: &str, value: Value) {
        let innermost = self.frames.last_mut().expect("frame stack is non-empty");
        if innermost.contains_key(name) {
            innermost.insert(name.to_string(), value);
        } else {
            self.frames[0].insert(name.to_string(), value);
        }
    }

    /// Register a procedure under its name (overwrites any prior binding
    /// of that name, including primitive aliases — the procedure table is
    /// append-only at runtime.
    pub fn define_procedure(&mut self, name: impl Into<String>, proc: Procedure) {
        self.procedures.insert(name.into(), Rc::new(proc));
    }

    /// Look up a procedure by name.
    pub fn resolve_procedure(&self, name: &str) -> Option<Rc<Procedure>> {
        self.procedures.get(name).cloned()
    }

    /// Pull the next continuation line for a multi-line definition.
    pub fn next_continuation_line(&mut self) -> Option<String> {
        (self.continuation_line)()
    }

    /// The turtle-graphics collaborator the turtle primitives draw
    /// through.
    pub fn turtle_mut(&mut self) -> &mut dyn TurtleBackend {
        self.turtle.as_mut()
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
    fn innermost_binding_wins() {
        let mut env = env();
        env.set_variable_value("x", Value::word("1"));
        let mut inner = HashMap::new();
        inner.insert("x".to_string(), Value::word("2"));
        inner.insert("y".to_string(), Value::word("3"));
        env.push_frame(inner);
        env.push_frame(HashMap::from([("y".to_string(), Value::word("4"))]));
        assert_eq!(env.lookup_variable("y").unwrap(), Value::word("4"));
        assert_eq!(env.lookup_variable("x").unwrap(), Value::word("2"));
    }

    #[test]
    fn set_unbound_name_lands_in_global_frame() {
        let mut env = env();
        env.set_variable_value("x", Value::word("1"));
        env.push_frame(HashMap::from([("x".to_string(), Value::word("2"))]));
        env.set_variable_value("x", Value::word("4"));
        assert_eq!(env.lookup_variable("x").unwrap(), Value::word("4"));
        env.set_variable_value("z", Value::word("5"));
        assert_eq!(env.lookup_variable("z").unwrap(), Value::word("5"));
        env.pop_frame();
        assert_eq!(env.lookup_variable("x").unwrap(), Value::word("1"));
        assert_eq!(env.lookup_variable("z").unwrap(), Value::word("5"));
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let env = env();
        assert!(env.lookup_variable("z").is_err());
    }
}
