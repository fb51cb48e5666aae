//! Errors of the runtime-checked layer

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::signature::Signature;

/// Operations that require both operands to share a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// `checked_add`
    Add,
    /// `checked_sub`
    Sub,
    /// `checked_cmp`
    Compare,
    /// Recovering a static measure with `into_static`
    Convert,
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArithmeticOp::Add => "addition",
            ArithmeticOp::Sub => "subtraction",
            ArithmeticOp::Compare => "comparison",
            ArithmeticOp::Convert => "conversion",
        };
        f.write_str(name)
    }
}

/// Unit registration, parsing and runtime arithmetic errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum UnitError {
    #[error("dimension mismatch in {op}: `{left}` vs `{right}`")]
    #[diagnostic(
        code(sipp::dimension_mismatch),
        help("both operands must reduce to the same canonical dimension")
    )]
    DimensionMismatch {
        op: ArithmeticOp,
        left: Signature,
        right: Signature,
    },

    #[error("unknown unit `{name}`")]
    #[diagnostic(
        code(sipp::unknown_unit),
        help("register `{}` before referring to it", .name)
    )]
    UnknownUnit { name: String },

    #[error("unit `{name}` is already registered")]
    #[diagnostic(code(sipp::duplicate_unit))]
    DuplicateUnit { name: String },

    #[error("`{name}` is not a valid unit name")]
    #[diagnostic(
        code(sipp::invalid_name),
        help("unit names start with a letter or `_` and continue with letters, digits or `_`")
    )]
    InvalidName { name: String },

    #[error("`{name}` is raised to the power zero")]
    #[diagnostic(
        code(sipp::zero_power),
        help("drop the term instead; a zero power contributes nothing")
    )]
    ZeroPower { name: String },

    #[error("exponent of `{dimension}` overflows")]
    #[diagnostic(code(sipp::exponent_overflow))]
    ExponentOverflow { dimension: String },

    #[error("invalid unit expression: {message}")]
    #[diagnostic(
        code(sipp::parse),
        help("expressions look like `kg*m/s^2`, `1/s` or `(m/s)^2`")
    )]
    Parse {
        message: String,
        #[source_code]
        expr: String,
        #[label("{message}")]
        span: SourceSpan,
    },
}
