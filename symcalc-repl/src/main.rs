mod args;
mod error;
mod line;

use args::{Args, Command};
use clap::Parser as _;
use error::report_to_stderr;
use line::Line;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, IsTerminal, Read}, process::ExitCode};
use symcalc_compute::{derivative, evaluate, sample, simplify, symbolic::simplify_with_steps};
use symcalc_error::Error;
use symcalc_parser::parser::{ast::Expr, fmt::Latex, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a subscriber that logs to stderr, filtered by `RUST_LOG` (`warn` if unset).
fn install_tracing() {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(filter_layer);

    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Parses the entire input as a single expression.
fn parse(input: &str, max_depth: usize) -> Result<Expr, Error> {
    Parser::new(input).with_max_depth(max_depth).try_parse_full()
}

/// Formats the expression in plain text, or as LaTeX if `latex` is set.
fn render(expr: &Expr, latex: bool) -> String {
    if latex {
        expr.as_display().to_string()
    } else {
        expr.to_string()
    }
}

/// Runs a single subcommand, printing its results to stdout.
fn run_command(command: &Command, max_depth: usize) -> Result<(), Error> {
    let expr = parse(command.expr(), max_depth)?;
    debug!(%expr, "parsed");

    match *command {
        Command::Eval { x, .. } => println!("{}", evaluate(&expr, x)?),
        Command::Diff { simplify: simplified, latex, .. } => {
            let mut result = derivative(&expr)?;
            if simplified {
                result = simplify(&result);
            }
            println!("{}", render(&result, latex));
        },
        Command::Simplify { steps, latex, .. } => {
            let (result, taken) = simplify_with_steps(&expr);
            if steps {
                for step in taken {
                    println!("{}", step);
                }
            }
            println!("{}", render(&result, latex));
        },
        Command::Sample { start, end, count, .. } => {
            for point in sample(&expr, start, end, count)? {
                println!("{}\t{}", point.0, point.1);
            }
        },
    }

    Ok(())
}

/// Runs one line of prompt input, returning the text to print and the source any error refers
/// to.
fn run_line<'a>(line: Line<'a>, max_depth: usize) -> Result<Option<String>, (Error, &'a str)> {
    let with_source = |source: &'a str| move |err: Error| (err, source);

    match line {
        Line::Empty => Ok(None),
        Line::Eval { expr, at } => {
            let x = match at {
                Some(at) => {
                    let at_expr = parse(at, max_depth).map_err(with_source(at))?;
                    evaluate(&at_expr, 0.0).map_err(with_source(at))?
                },
                None => 0.0,
            };
            let expr = parse(expr, max_depth).map_err(with_source(expr))?;
            let value = evaluate(&expr, x).map_err(with_source(line_source(line)))?;
            Ok(Some(value.to_string()))
        },
        Line::Diff(source) => {
            let expr = parse(source, max_depth).map_err(with_source(source))?;
            let result = derivative(&expr).map_err(with_source(source))?;
            Ok(Some(simplify(&result).to_string()))
        },
        Line::Simplify(source) => {
            let expr = parse(source, max_depth).map_err(with_source(source))?;
            Ok(Some(simplify(&expr).to_string()))
        },
    }
}

/// The expression source of a line, used when reporting errors without a span.
fn line_source<'a>(line: Line<'a>) -> &'a str {
    match line {
        Line::Eval { expr, .. } | Line::Diff(expr) | Line::Simplify(expr) => expr,
        Line::Empty => "",
    }
}

/// Runs one line of prompt input, printing the result or the error.
fn read_eval(input: &str, max_depth: usize) {
    match run_line(Line::parse(input), max_depth) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (),
        Err((err, source)) => report_to_stderr(&err, source),
    }
}

/// Reads lines interactively until end of input.
fn repl(max_depth: usize) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, max_depth: usize) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        read_eval(&input, max_depth);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, max_depth) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => ExitCode::SUCCESS,
                _ => {
                    eprintln!("{}", err);
                    ExitCode::FAILURE
                },
            };
        }
    }
}

fn main() -> ExitCode {
    install_tracing();
    let args = Args::parse();

    if let Some(command) = &args.command {
        return match run_command(command, args.max_depth) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                report_to_stderr(&err, command.expr());
                ExitCode::FAILURE
            },
        };
    }

    if io::stdin().is_terminal() {
        return repl(args.max_depth);
    }

    // read prompt lines from stdin
    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    for line in input.lines() {
        read_eval(line, args.max_depth);
    }
    ExitCode::SUCCESS
}
