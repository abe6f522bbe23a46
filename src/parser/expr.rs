use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, NUMBER_PATTERN, OPERATION_LOOKUP},
    },
    Position,
};

/// Parses an operation call of the form `name(arg1, arg2, ...)` into an
/// `Operation` token, recursing into nested calls.
pub fn parse_operation(input: &str, lexer: &Lexer, position: &Position) -> Result<Token, Error> {
    let input = input.trim();
    let (name, body) = split_call(input);

    let op = match OPERATION_LOOKUP.get(name.to_lowercase().as_str()) {
        Some(op) => *op,
        None => {
            return Err(Error::new(
                ErrorImpl::InvalidOperation {
                    operation: name.to_string(),
                },
                position.clone(),
            ))
        }
    };

    let mut args = vec![];

    for fragment in split_arguments(body) {
        args.push(classify_argument(fragment, lexer, position)?);
    }

    if args.is_empty() {
        return Err(Error::new(
            ErrorImpl::InvalidArgument {
                argument: input.to_string(),
            },
            position.clone(),
        ));
    }

    Ok(Token::Operation { op, args })
}

// The call name is everything before the first `(`, the body everything up
// to its matching `)`. A missing close paren ends the body at end of input.
fn split_call(input: &str) -> (&str, &str) {
    let open = match input.find('(') {
        Some(open) => open,
        None => return (input, ""),
    };

    let name = input[..open].trim_end();
    let body = &input[open + 1..];

    let mut depth = 1;
    for (index, character) in body.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (name, &body[..index]);
                }
            }
            _ => {}
        }
    }

    (name, body)
}

// Splits the call body on top-level commas only; a comma inside a nested
// call stays with its fragment.
fn split_arguments(body: &str) -> Vec<&str> {
    let mut fragments = vec![];
    let mut depth = 0;
    let mut start = 0;

    for (index, character) in body.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                fragments.push(&body[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    fragments.push(&body[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn classify_argument(fragment: &str, lexer: &Lexer, position: &Position) -> Result<Token, Error> {
    if fragment.contains('(') {
        return parse_operation(fragment, lexer, position);
    }

    if lexer.is_variable(fragment) {
        return Ok(Token::Variable(fragment.to_string()));
    }

    if lexer.is_constant(fragment) {
        return Ok(Token::Constant(fragment.to_string()));
    }

    if NUMBER_PATTERN.is_match(fragment) {
        return Ok(Token::Number(fragment.to_string()));
    }

    Err(Error::new(
        ErrorImpl::InvalidArgument {
            argument: fragment.to_string(),
        },
        position.clone(),
    ))
}
