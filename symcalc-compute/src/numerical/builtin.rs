//! The functions that can be called in an expression.

use levenshtein::levenshtein;
use super::error::{kind::UnsupportedFunction, Error};

/// The names of all supported functions.
pub const BUILTINS: [&str; 5] = ["sin", "cos", "tan", "ln", "log"];

/// Returns true if the function with the given name is supported.
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Returns all supported functions with a name similar to the given name.
pub fn similar_builtins(name: &str) -> Vec<String> {
    BUILTINS
        .iter()
        .filter(|builtin| levenshtein(builtin, name) < 2)
        .map(|builtin| builtin.to_string())
        .collect()
}

/// Creates the error for a call to an unsupported function.
pub fn unsupported(name: &str) -> Error {
    Error::unspanned(UnsupportedFunction {
        name: name.to_string(),
        suggestions: similar_builtins(name),
    })
}
