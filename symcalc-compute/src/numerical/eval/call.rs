use crate::numerical::{
    builtin::unsupported,
    error::{kind::MissingLogBase, Error},
    eval::Eval,
};
use symcalc_parser::parser::ast::Call;

impl Eval for Call {
    /// Evaluates the call. Trigonometric functions take their argument in radians.
    fn eval(&self, x: f64) -> Result<f64, Error> {
        let f: fn(f64) -> f64 = match self.name.as_str() {
            "sin" => f64::sin,
            "cos" => f64::cos,
            "tan" => f64::tan,
            "ln" => f64::ln,
            "log" => {
                let base = self.base.ok_or_else(|| Error::unspanned(MissingLogBase))?;
                return Ok(self.arg.eval(x)?.ln() / f64::from(base).ln());
            },
            name => return Err(unsupported(name)),
        };

        Ok(f(self.arg.eval(x)?))
    }
}
