//! The primitive procedure table.
//!
//! Grounded in `logo.py`'s `load_primitives` and `logo_primitives.py`'s
//! `load`/`load_turtle_graphics`: this module's registration order
//! mirrors theirs exactly, alias list for alias list, because the order
//! is semantically load-bearing. `logo_primitives.load` registers the
//! comparison aliases (`lessp`/`lt`/`less?`) before it registers turtle
//! graphics, and turtle graphics registers its own `left`/`lt` alias
//! after — so by the time the full table is loaded, `lt` names the
//! turtle-graphics `left`, not `lessp`. This crate preserves that
//! shadowing faithfully rather than "fixing" it; see `DESIGN.md`.

pub mod arithmetic;
pub mod boolean;
pub mod comparison;
pub mod control;
pub mod io;
pub mod list;
pub mod numeric;
pub mod turtle;

use std::collections::HashMap;
use std::rc::Rc;

use crate::procedure::{register_aliases, Procedure};

/// Build the full primitive table, in the same order `logo.py` builds it:
/// list/arithmetic/comparison/logical/io/repeat/splicing primitives from
/// `logo_primitives.load`, then turtle graphics, then the `needs_env`
/// primitives `logo.py` itself adds on top (`type`, `make`, `if`,
/// `ifelse`, `output`, `stop`, `run`).
pub fn load_primitives() -> HashMap<String, Rc<Procedure>> {
    let mut table = HashMap::new();

    register_aliases(&mut table, &["first"], 1, false, list::first);
    register_aliases(&mut table, &["butfirst", "bf"], 1, false, list::butfirst);
    register_aliases(&mut table, &["last"], 1, false, list::last);
    register_aliases(&mut table, &["butlast", "bl"], 1, false, list::butlast);

    register_aliases(&mut table, &["sum"], 2, false, arithmetic::sum);
    register_aliases(&mut table, &["difference"], 2, false, arithmetic::difference);
    register_aliases(&mut table, &["product"], 2, false, arithmetic::product);
    register_aliases(&mut table, &["div", "quotient"], 2, false, arithmetic::div);

    register_aliases(&mut table, &["equalp", "eq", "equal?"], 2, false, comparison::equalp);
    register_aliases(&mut table, &["lessp", "lt", "less?"], 2, false, comparison::lessp);
    register_aliases(&mut table, &["greaterp", "gp", "greater?"], 2, false, comparison::greaterp);
    register_aliases(&mut table, &["emptyp", "empty?"], 1, false, list::emptyp);
    register_aliases(&mut table, &["listp", "list?"], 1, false, list::listp);
    register_aliases(&mut table, &["wordp", "word?"], 1, false, list::wordp);

    register_aliases(&mut table, &["or"], 2, false, boolean::or);
    register_aliases(&mut table, &["and"], 2, false, boolean::and);
    register_aliases(&mut table, &["not"], 1, false, boolean::not);

    register_aliases(&mut table, &["print"], 1, false, io::print);
    register_aliases(&mut table, &["show"], 1, false, io::show);

    register_aliases(&mut table, &["repeat"], 2, true, control::repeat);

    register_aliases(&mut table, &["word"], 2, false, list::word);
    register_aliases(&mut table, &["sentence", "se"], 2, false, list::sentence);
    register_aliases(&mut table, &["list"], 2, false, list::list);
    register_aliases(&mut table, &["fput"], 2, false, list::fput);

    // Turtle graphics: registered after comparisons, so its own `left`/
    // `lt` alias below intentionally overwrites the `lt` entry `lessp`
    // claimed above.
    register_aliases(&mut table, &["forward", "fd"], 1, false, turtle::forward);
    register_aliases(&mut table, &["backward", "back", "bk"], 1, false, turtle::backward);
    register_aliases(&mut table, &["right", "rt"], 1, false, turtle::right);
    register_aliases(&mut table, &["left", "lt"], 1, false, turtle::left);
    register_aliases(&mut table, &["circle"], 1, false, turtle::circle);
    register_aliases(&mut table, &["setpos", "setposition", "goto"], 2, false, turtle::setpos);
    register_aliases(&mut table, &["seth", "setheading"], 1, false, turtle::seth);
    register_aliases(&mut table, &["penup", "pu"], 0, false, turtle::penup);
    register_aliases(&mut table, &["pendown", "pd"], 0, false, turtle::pendown);
    register_aliases(&mut table, &["showturtle", "st"], 0, false, turtle::showturtle);
    register_aliases(&mut table, &["hideturtle", "ht"], 0, false, turtle::hideturtle);
    register_aliases(&mut table, &["clear"], 0, false, turtle::clear);
    register_aliases(&mut table, &["color"], 1, false, turtle::color);
    register_aliases(&mut table, &["begin_fill"], 0, false, turtle::begin_fill);
    register_aliases(&mut table, &["end_fill"], 0, false, turtle::end_fill);
    register_aliases(&mut table, &["exitonclick"], 0, false, turtle::exitonclick);
    register_aliases(&mut table, &["speed"], 1, false, turtle::speed);

    // logo.py's own additions on top of logo_primitives.load.
    register_aliases(&mut table, &["type"], 1, false, io::type_value);
    register_aliases(&mut table, &["make"], 2, true, control::make);
    register_aliases(&mut table, &["if"], 2, true, control::logo_if);
    register_aliases(&mut table, &["ifelse"], 3, true, control::logo_ifelse);
    register_aliases(&mut table, &["output"], 1, false, control::output);
    register_aliases(&mut table, &["stop"], 0, false, control::stop);
    register_aliases(&mut table, &["run"], 1, true, control::run);

    table
}
