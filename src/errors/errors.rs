use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownTokenType { .. } => "UnknownTokenType",
            ErrorImpl::InvalidArgumentCount { .. } => "InvalidArgumentCount",
            ErrorImpl::InvalidVariableType { .. } => "InvalidVariableType",
            ErrorImpl::InvalidOperation { .. } => "InvalidOperation",
            ErrorImpl::InvalidArgument { .. } => "InvalidArgument",
            ErrorImpl::InvalidCondition { .. } => "InvalidCondition",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownTokenType { keyword } => ErrorTip::Suggestion(format!(
                "Unknown token type: `{}`, expected `using` or `define`",
                keyword
            )),
            ErrorImpl::InvalidArgumentCount { statement } => ErrorTip::Suggestion(format!(
                "Invalid number of arguments for command: `{}`",
                statement
            )),
            ErrorImpl::InvalidVariableType { type_ } => ErrorTip::Suggestion(format!(
                "Invalid type for using command: `{}`, expected `string` or `number`",
                type_
            )),
            ErrorImpl::InvalidOperation { operation } => ErrorTip::Suggestion(format!(
                "Invalid operation: `{}`, expected `add`, `subtract`, `multiply` or `divide`",
                operation
            )),
            ErrorImpl::InvalidArgument { argument } => ErrorTip::Suggestion(format!(
                "Invalid argument: `{}`, was it declared earlier in the program?",
                argument
            )),
            ErrorImpl::InvalidCondition { condition } => ErrorTip::Suggestion(format!(
                "Invalid condition: `{}`, no comparison operator found",
                condition
            )),
            ErrorImpl::DuplicateDeclaration { name } => {
                ErrorTip::Suggestion(format!("Name `{}` already declared", name))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unknown token type: {keyword:?}")]
    UnknownTokenType { keyword: String },
    #[error("invalid number of arguments for command: {statement:?}")]
    InvalidArgumentCount { statement: String },
    #[error("invalid type for using command: {type_:?}")]
    InvalidVariableType { type_: String },
    #[error("invalid operation: {operation:?}")]
    InvalidOperation { operation: String },
    #[error("invalid argument: {argument:?}")]
    InvalidArgument { argument: String },
    #[error("invalid condition: {condition:?}")]
    InvalidCondition { condition: String },
    #[error("name {name:?} already declared")]
    DuplicateDeclaration { name: String },
}
