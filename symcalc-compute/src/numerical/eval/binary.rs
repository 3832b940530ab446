use crate::numerical::{
    error::{kind::DivisionByZero, Error},
    eval::{Eval, DIVISION_EPSILON},
};
use symcalc_parser::parser::{ast::Binary, token::op::BinOp};

impl Eval for Binary {
    fn eval(&self, x: f64) -> Result<f64, Error> {
        let left = self.lhs.eval(x)?;
        let right = self.rhs.eval(x)?;
        Ok(match self.op {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => {
                if right.abs() < DIVISION_EPSILON {
                    return Err(Error::unspanned(DivisionByZero { divisor: right }));
                }
                left / right
            },
            // negative bases with non-integer exponents produce NaN
            BinOp::Exp => left.powf(right),
        })
    }
}
