use crate::numerical::{error::Error, eval::Eval};
use symcalc_parser::parser::{ast::Unary, token::op::UnaryOp};

impl Eval for Unary {
    fn eval(&self, x: f64) -> Result<f64, Error> {
        let operand = self.operand.eval(x)?;
        Ok(match self.op {
            UnaryOp::Pos => operand,
            UnaryOp::Neg => -operand,
        })
    }
}
