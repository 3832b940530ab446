use clap::{Parser, Subcommand};
use symcalc_parser::parser::DEFAULT_MAX_DEPTH;

/// Evaluate, differentiate, and simplify expressions in `x`.
///
/// Run without a subcommand to start an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "symcalc", version, about, long_about = None)]
pub struct Args {
    /// The maximum nesting depth of parentheses and function calls.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate an expression at a value of `x`.
    Eval {
        #[arg(allow_hyphen_values = true)]
        expr: String,

        /// The value of `x`.
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
    },

    /// Print the derivative of an expression with respect to `x`.
    Diff {
        #[arg(allow_hyphen_values = true)]
        expr: String,

        /// Simplify the derivative before printing it.
        #[arg(short, long)]
        simplify: bool,

        /// Print the result as LaTeX.
        #[arg(long)]
        latex: bool,
    },

    /// Simplify an expression.
    Simplify {
        #[arg(allow_hyphen_values = true)]
        expr: String,

        /// Print each rewrite that was applied.
        #[arg(long)]
        steps: bool,

        /// Print the result as LaTeX.
        #[arg(long)]
        latex: bool,
    },

    /// Evaluate an expression at evenly spaced values of `x`.
    Sample {
        #[arg(allow_hyphen_values = true)]
        expr: String,

        /// The first value of `x`.
        #[arg(long, allow_negative_numbers = true)]
        start: f64,

        /// The last value of `x`.
        #[arg(long, allow_negative_numbers = true)]
        end: f64,

        /// The number of values to sample, including both ends.
        #[arg(long, default_value_t = 11)]
        count: usize,
    },
}

impl Command {
    /// Returns the expression source the command operates on.
    pub fn expr(&self) -> &str {
        match self {
            Self::Eval { expr, .. }
                | Self::Diff { expr, .. }
                | Self::Simplify { expr, .. }
                | Self::Sample { expr, .. } => expr,
        }
    }
}
