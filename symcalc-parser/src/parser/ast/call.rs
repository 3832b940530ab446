use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        error::{kind::{self, LogPart}, Error},
        fmt::Latex,
        Parser,
    },
    tokenizer::{Token, TokenKind},
};
use std::fmt;

/// A function call, such as `sin(x)` or `log(2, x)`.
///
/// The name is not validated when parsing; any run of letters followed by `(` is a call. Unknown
/// names are rejected when the call is evaluated or differentiated.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The name of the function.
    pub name: String,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The base of the logarithm. This is always present when the function is `log`, and absent
    /// otherwise.
    pub base: Option<u32>,
}

impl Call {
    /// Parses the parenthesized body of a call, after the name has been consumed.
    ///
    /// ```text
    /// callBody := digits ',' expr    -- only when name = "log"
    ///           | expr               -- otherwise
    /// ```
    pub(crate) fn parse_rest(input: &mut Parser, name: Token) -> Result<Self, Error> {
        let open = input.expect(TokenKind::OpenParen, kind::UnexpectedCharacter {
            found: name.first_char(),
        })?;

        input.nested(open.span.clone(), |input| {
            if name.lexeme == "log" {
                let base = Self::parse_log_base(input)?;
                input.expect(TokenKind::Comma, kind::MalformedLog { missing: LogPart::Comma })?;
                let arg = Binary::parse_sum(input)?;
                input.expect(TokenKind::CloseParen, kind::MalformedLog { missing: LogPart::CloseParen })?;
                Ok(Self { name: name.lexeme, arg: Box::new(arg), base: Some(base) })
            } else {
                let arg = Binary::parse_sum(input)?;
                input.expect_close_paren(open.span)?;
                Ok(Self { name: name.lexeme, arg: Box::new(arg), base: None })
            }
        })
    }

    /// Parses the base of a `log` call, which must be a run of digits.
    fn parse_log_base(input: &mut Parser) -> Result<u32, Error> {
        let token = input
            .next_token_if(|token| {
                token.kind == TokenKind::Number && token.lexeme.bytes().all(|b| b.is_ascii_digit())
            })
            .ok_or_else(|| input.error(kind::MalformedLog { missing: LogPart::Base }))?;

        token.lexeme
            .parse()
            .map_err(|_| Error::new(vec![token.span], kind::InvalidNumber { lexeme: token.lexeme }))
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.base {
            Some(base) => write!(f, "{}({},{})", self.name, base, self.arg),
            None => write!(f, "{}({})", self.name, self.arg),
        }
    }
}

impl Latex for Call {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.name.as_str(), self.base) {
            ("sin" | "cos" | "tan" | "ln", _) => write!(f, "\\{}", self.name)?,
            ("log", Some(base)) => write!(f, "\\log_{{{}}}", base)?,
            _ => write!(f, "\\mathrm{{{}}}", self.name)?,
        }
        write!(f, "\\left(")?;
        self.arg.fmt_latex(f)?;
        write!(f, "\\right)")
    }
}
