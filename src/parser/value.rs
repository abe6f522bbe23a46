use crate::{
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, NUMBER_PATTERN, OPERATION_LOOKUP},
    },
    Position,
};

use super::expr::parse_operation;

/// Shared value classification for operands and branch results: known
/// variable, then known constant, then operation call, then number, then
/// bare literal.
pub fn resolve_value(value: &str, lexer: &Lexer, position: &Position) -> Result<Token, Error> {
    let value = value.trim();

    if lexer.is_variable(value) {
        return Ok(Token::Variable(value.to_string()));
    }

    if lexer.is_constant(value) {
        return Ok(Token::Constant(value.to_string()));
    }

    let call_name = match value.find('(') {
        Some(open) => value[..open].trim_end(),
        None => value,
    };

    if OPERATION_LOOKUP.contains_key(call_name.to_lowercase().as_str()) {
        return parse_operation(value, lexer, position);
    }

    if NUMBER_PATTERN.is_match(value) {
        return Ok(Token::Number(value.to_string()));
    }

    Ok(Token::ConstantValue(value.to_string()))
}
