use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{BoolKind, Condition, Token, COMPARISON_LOOKUP},
    },
    Position,
};

use super::value::resolve_value;

/// Parses the words following `if` in a `define` value into a `Condition`
/// token. The predicate runs up to the first `then` or `else`; the words
/// after those keywords become the branch results.
pub fn parse_condition(words: &[String], lexer: &Lexer, position: &Position) -> Result<Token, Error> {
    let then_index = words.iter().position(|word| word == "then");
    let else_index = words.iter().position(|word| word == "else");

    let predicate_end = match (then_index, else_index) {
        (Some(then), Some(els)) => then.min(els),
        (Some(then), None) => then,
        (None, Some(els)) => els,
        (None, None) => words.len(),
    };

    let predicate = parse_predicate(&words[..predicate_end], lexer, position)?;

    let result_if_true = branch_value(words, then_index, else_index, lexer, position)?;
    let result_if_false = branch_value(words, else_index, then_index, lexer, position)?;

    Ok(Token::Condition(Box::new(
        predicate.with_results(result_if_true, result_if_false),
    )))
}

// A branch runs from its keyword to the other branch keyword or the end of
// the statement. A missing or empty branch resolves to Null.
fn branch_value(
    words: &[String],
    keyword_index: Option<usize>,
    other_index: Option<usize>,
    lexer: &Lexer,
    position: &Position,
) -> Result<Token, Error> {
    let start = match keyword_index {
        Some(index) => index + 1,
        None => return Ok(Token::Null),
    };

    let end = match other_index {
        Some(other) if other >= start => other,
        _ => words.len(),
    };

    let branch = &words[start..end];

    if branch.is_empty() {
        return Ok(Token::Null);
    }

    resolve_value(&branch.join(" "), lexer, position)
}

/// Parses a boolean predicate. Parenthesized groups are parsed first into
/// opaque sub-predicates; among the remaining top-level fragments `and`
/// binds tighter than `or`, left to right.
pub fn parse_predicate(
    words: &[String],
    lexer: &Lexer,
    position: &Position,
) -> Result<Condition, Error> {
    let (atoms, separators) = split_boolean(words);

    if separators.is_empty() {
        return parse_atom(atoms[0], lexer, position);
    }

    // Group consecutive and-joined atoms, then or the groups together.
    let mut groups: Vec<Vec<&[String]>> = vec![vec![atoms[0]]];

    for (separator, atom) in separators.iter().zip(atoms[1..].iter().copied()) {
        match separator {
            BoolKind::And => groups.last_mut().unwrap().push(atom),
            BoolKind::Or => groups.push(vec![atom]),
        }
    }

    let mut operands = vec![];

    for group in groups {
        if group.len() == 1 {
            operands.push(parse_atom(group[0], lexer, position)?);
        } else {
            let mut conjuncts = vec![];
            for atom in group {
                conjuncts.push(parse_atom(atom, lexer, position)?);
            }
            operands.push(Condition::Combinator {
                kind: BoolKind::And,
                operands: conjuncts,
                result_if_true: Token::Null,
                result_if_false: Token::Null,
            });
        }
    }

    if operands.len() == 1 {
        return Ok(operands.remove(0));
    }

    Ok(Condition::Combinator {
        kind: BoolKind::Or,
        operands,
        result_if_true: Token::Null,
        result_if_false: Token::Null,
    })
}

// Splits the predicate on `and`/`or` words at parenthesis depth zero.
// Depth is tracked per character because parentheses arrive glued to words
// (`(user_role`, `100)`), both from grouping and from operation calls.
fn split_boolean(words: &[String]) -> (Vec<&[String]>, Vec<BoolKind>) {
    let mut atoms = vec![];
    let mut separators = vec![];
    let mut depth: i32 = 0;
    let mut start = 0;

    for (index, word) in words.iter().enumerate() {
        if depth == 0 && (word == "and" || word == "or") {
            atoms.push(&words[start..index]);
            separators.push(if word == "and" {
                BoolKind::And
            } else {
                BoolKind::Or
            });
            start = index + 1;
            continue;
        }

        for character in word.chars() {
            match character {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
        }
    }
    atoms.push(&words[start..]);

    (atoms, separators)
}

// An atom is either a parenthesized sub-predicate or a comparison fragment.
fn parse_atom(atom: &[String], lexer: &Lexer, position: &Position) -> Result<Condition, Error> {
    if atom.is_empty() {
        return Err(Error::new(
            ErrorImpl::InvalidCondition {
                condition: String::new(),
            },
            position.clone(),
        ));
    }

    if let Some(inner) = strip_group(atom) {
        return parse_predicate(&inner, lexer, position);
    }

    parse_comparison(atom, lexer, position)
}

// Peels one layer of grouping parentheses, but only when the paren opening
// the atom closes at its very end. `(a = 1) ...` keeps its parens;
// `multiply(x, 2) > 4` never enters here because it does not start with `(`.
fn strip_group(atom: &[String]) -> Option<Vec<String>> {
    let joined = atom.join(" ");

    if !joined.starts_with('(') {
        return None;
    }

    let mut depth = 0;
    for (index, character) in joined.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    if index == joined.len() - 1 {
                        return Some(
                            joined[1..index]
                                .split_whitespace()
                                .map(String::from)
                                .collect(),
                        );
                    }
                    return None;
                }
            }
            _ => {}
        }
    }

    None
}

fn parse_comparison(
    fragment: &[String],
    lexer: &Lexer,
    position: &Position,
) -> Result<Condition, Error> {
    let operator_index = fragment
        .iter()
        .position(|word| COMPARISON_LOOKUP.contains_key(word.as_str()));

    let operator_index = match operator_index {
        Some(index) => index,
        None => {
            return Err(Error::new(
                ErrorImpl::InvalidCondition {
                    condition: fragment.join(" "),
                },
                position.clone(),
            ))
        }
    };

    let operator = *COMPARISON_LOOKUP
        .get(fragment[operator_index].as_str())
        .unwrap();

    let left = resolve_value(&fragment[..operator_index].join(" "), lexer, position)?;
    let right = resolve_value(&fragment[operator_index + 1..].join(" "), lexer, position)?;

    Ok(Condition::Comparison {
        left,
        operator,
        right,
        result_if_true: Token::Null,
        result_if_false: Token::Null,
    })
}
