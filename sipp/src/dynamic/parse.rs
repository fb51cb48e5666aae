//! Unit expression lexer and parser
//!
//! ```text
//! expr   := term (('*' | '·' | '/') term)*
//! term   := factor ('^' int)?
//! factor := name | '1' | '(' expr ')'
//! int    := '-'? digits
//! ```
//!
//! Whitespace between tokens is ignored. `/` divides by the following term
//! only, so `kg/m/s` is `kg m⁻¹ s⁻¹`.

use std::ops::Range;

use logos::Logos;
use tracing::trace;

use super::error::UnitError;
use super::registry::UnitRegistry;
use super::signature::Signature;

/// Deepest parenthesis nesting accepted
const MAX_DEPTH: usize = 64;

/// Tokens of a unit expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
enum UnitToken {
    #[token("*")]
    Star,
    #[token("·")]
    Dot,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"-?[0-9]+")]
    Int,
    // Letters include `Ω`; digits include superscripts, so `m²` is one name.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Name,
}

type Spanned = (UnitToken, Range<usize>);

/// A valid unit name is exactly one name token
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut lexer = UnitToken::lexer(name);
    matches!(lexer.next(), Some(Ok(UnitToken::Name)))
        && lexer.span() == (0..name.len())
        && lexer.next().is_none()
}

/// Tokenize the whole expression, failing at the first unknown character
fn lex(expr: &str) -> Result<Vec<Spanned>, UnitError> {
    UnitToken::lexer(expr)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(()) => {
                let message = format!("unexpected `{}`", &expr[span.clone()]);
                Err(parse_error(expr, span, message))
            }
        })
        .collect()
}

fn parse_error(expr: &str, span: Range<usize>, message: impl Into<String>) -> UnitError {
    UnitError::Parse {
        message: message.into(),
        expr: expr.to_string(),
        span: span.into(),
    }
}

/// Evaluate `expr` against the units known to `registry`
pub(crate) fn parse(registry: &UnitRegistry, expr: &str) -> Result<Signature, UnitError> {
    trace!(expr = %expr, "parsing unit expression");
    let mut parser = Parser {
        registry,
        expr,
        tokens: lex(expr)?,
        pos: 0,
        depth: 0,
    };
    let sig = parser.expr()?;
    match parser.peek() {
        None => Ok(sig),
        Some(UnitToken::RParen) => Err(parser.error_here("unmatched `)`")),
        Some(_) => {
            let message = format!("unexpected `{}`", parser.text(parser.span()));
            Err(parser.error_here(message))
        }
    }
}

struct Parser<'a> {
    registry: &'a UnitRegistry,
    expr: &'a str,
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn expr(&mut self) -> Result<Signature, UnitError> {
        let mut sig = self.term()?;
        loop {
            match self.peek() {
                Some(UnitToken::Star | UnitToken::Dot) => {
                    self.bump();
                    let rhs = self.term()?;
                    sig = sig.mul(&rhs)?;
                }
                Some(UnitToken::Slash) => {
                    self.bump();
                    let rhs = self.term()?;
                    sig = sig.div(&rhs)?;
                }
                _ => return Ok(sig),
            }
        }
    }

    fn term(&mut self) -> Result<Signature, UnitError> {
        let base = self.factor()?;
        if self.peek() != Some(UnitToken::Caret) {
            return Ok(base);
        }
        self.bump();
        if self.peek() != Some(UnitToken::Int) {
            return Err(self.error_here("expected an integer exponent"));
        }
        let span = self.bump();
        let exponent: i32 = self
            .text(span.clone())
            .parse()
            .map_err(|_| self.error(span.clone(), "exponent out of range"))?;
        if exponent == 0 {
            return Err(self.error(span, "exponent must be non-zero"));
        }
        base.pow(exponent)
    }

    fn factor(&mut self) -> Result<Signature, UnitError> {
        let span = self.span();
        match self.peek() {
            Some(UnitToken::LParen) => {
                if self.depth == MAX_DEPTH {
                    return Err(self.error(span, "parentheses nest too deeply"));
                }
                self.bump();
                self.depth += 1;
                let inner = self.expr()?;
                self.depth -= 1;
                if self.peek() != Some(UnitToken::RParen) {
                    return Err(self.error(span, "this `(` was never closed"));
                }
                self.bump();
                Ok(inner)
            }
            Some(UnitToken::Int) => {
                self.bump();
                if self.text(span.clone()) != "1" {
                    return Err(self.error(span, "`1` is the only number allowed here"));
                }
                Ok(Signature::dimensionless())
            }
            Some(UnitToken::Name) => {
                self.bump();
                let name = self.text(span);
                self.registry
                    .lookup(name)
                    .cloned()
                    .ok_or_else(|| UnitError::UnknownUnit {
                        name: name.to_string(),
                    })
            }
            Some(_) => {
                let message = format!("expected a unit, found `{}`", self.text(span));
                Err(self.error_here(message))
            }
            None => Err(self.error_here("expected a unit")),
        }
    }

    fn peek(&self) -> Option<UnitToken> {
        self.tokens.get(self.pos).map(|(token, _)| *token)
    }

    /// Span of the current token; an empty span at the end of input
    fn span(&self) -> Range<usize> {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.clone(),
            None => self.expr.len()..self.expr.len(),
        }
    }

    fn bump(&mut self) -> Range<usize> {
        let span = self.span();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        span
    }

    fn text(&self, span: Range<usize>) -> &'a str {
        &self.expr[span]
    }

    fn error_here(&self, message: impl Into<String>) -> UnitError {
        self.error(self.span(), message)
    }

    fn error(&self, span: Range<usize>, message: impl Into<String>) -> UnitError {
        parse_error(self.expr, span, message)
    }
}
