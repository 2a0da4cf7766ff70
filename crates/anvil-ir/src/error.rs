//! Build-time error taxonomy

use thiserror::Error;

/// Errors raised while constructing IR
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("value belongs to a different function")]
    ForeignValue,

    #[error("label is not valid for this function")]
    InvalidLabel,

    #[error("label is already bound to a position")]
    LabelAlreadyBound,

    #[error("operand of type {found} is not valid for {context}")]
    InvalidOperand {
        context: &'static str,
        found: &'static str,
    },

    #[error("call expects {expected} arguments, {found} supplied")]
    WrongArity { expected: usize, found: usize },

    #[error("a signature type is required")]
    NotASignature,

    #[error("parameter index {0} is out of range")]
    NoSuchParam(u32),

    #[error("cannot take the address of a constant")]
    AddressOfConstant,
}
