//! Logo command-line interpreter.
//!
//! Runs interactively at a prompt, or replays a source file line by
//! line, echoing each line as it's read. Both modes
//! share the same [`logo::repl::read_eval_loop`]; only where lines come
//! from differs.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use logo::environment::Environment;
use logo::repl;
use logo::turtle_backend::{LoggingTurtleBackend, TurtleBackend};

const NEW_LINE_PROMPT: &str = "? ";
const CONTINUATION_PROMPT: &str = "> ";

/// An interpreter for a subset of the Logo programming language.
#[derive(Parser, Debug)]
#[command(name = "logo", version, about)]
struct Cli {
    /// Logo source file to run. Without this, the interpreter reads from
    /// an interactive prompt.
    file: Option<PathBuf>,

    /// Log level passed to `env_logger` (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Draw with a real turtle-graphics window instead of journaling
    /// turtle moves through the log.
    #[cfg(feature = "turtle-graphics")]
    #[arg(long)]
    turtle: bool,
}

/// Where the REPL's lines come from: an interactive prompt or a
/// pre-loaded file, replayed one line at a time with its prompt echoed.
enum LineSource {
    #[cfg(feature = "repl")]
    Interactive(rustyline::DefaultEditor),
    File { lines: Vec<String>, next: usize },
}

impl LineSource {
    fn next_line(&mut self, prompt: &str) -> Option<String> {
        match self {
            #[cfg(feature = "repl")]
            LineSource::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Some(line)
                }
                Err(_) => None,
            },
            LineSource::File { lines, next } => {
                if *next >= lines.len() {
                    return None;
                }
                let line = lines[*next].clone();
                *next += 1;
                println!("{prompt}{line}");
                Some(line)
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level)).init();

    if cli.file.is_none() {
        print_banner();
    }

    let source = match &cli.file {
        Some(path) => {
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(err) => {
                    eprintln!("logo: could not read {}: {err}", path.display());
                    std::process::exit(1);
                }
            };
            LineSource::File {
                lines: contents.lines().map(str::to_string).collect(),
                next: 0,
            }
        }
        None => new_interactive_source(),
    };

    let source = Rc::new(RefCell::new(source));

    let continuation_source = source.clone();
    let continuation_line: logo::environment::ContinuationSupplier =
        Box::new(move || continuation_source.borrow_mut().next_line(CONTINUATION_PROMPT));

    let turtle: Box<dyn TurtleBackend> = build_turtle_backend(&cli);
    let mut env = Environment::new(continuation_line, turtle);

    repl::read_eval_loop(&mut env, move || source.borrow_mut().next_line(NEW_LINE_PROMPT));
}

#[cfg(feature = "repl")]
fn print_banner() {
    use colored::Colorize;
    println!("{}", format!("logo {}", env!("CARGO_PKG_VERSION")).bright_blue().bold());
    println!("type {} to leave", "quit".cyan());
}

#[cfg(not(feature = "repl"))]
fn print_banner() {}

#[cfg(feature = "repl")]
fn new_interactive_source() -> LineSource {
    match rustyline::DefaultEditor::new() {
        Ok(editor) => LineSource::Interactive(editor),
        Err(err) => {
            eprintln!("logo: could not start the line editor: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "repl"))]
fn new_interactive_source() -> LineSource {
    eprintln!("logo: interactive mode requires the \"repl\" feature; pass a source file instead");
    std::process::exit(1);
}

#[cfg(feature = "turtle-graphics")]
fn build_turtle_backend(cli: &Cli) -> Box<dyn TurtleBackend> {
    if cli.turtle {
        Box::new(logo::turtle_backend::real::RealTurtleBackend::default())
    } else {
        Box::new(LoggingTurtleBackend::new())
    }
}

#[cfg(not(feature = "turtle-graphics"))]
fn build_turtle_backend(_cli: &Cli) -> Box<dyn TurtleBackend> {
    Box::new(LoggingTurtleBackend::new())
}
