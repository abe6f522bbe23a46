//! Unit tests for the parser module.
//!
//! This module contains tests for the recursive descent over operation
//! calls and conditions, including paren-depth handling, value
//! classification priority and error cases.

use crate::{
    lexer::{
        lexer::Lexer,
        tokens::{BoolKind, CompareOp, Condition, OpKind, Token},
    },
    Position,
};

use super::{cond::parse_condition, expr::parse_operation, value::resolve_value};

fn lexer_with_names(variables: &[&str], constants: &[&str]) -> Lexer {
    let mut lexer = Lexer::new(Some("access.rules".to_string()));
    for name in variables {
        lexer.declare_variable(name, &Position::null()).unwrap();
    }
    for name in constants {
        lexer.declare_constant(name, &Position::null()).unwrap();
    }
    lexer
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

#[test]
fn test_parse_operation_simple() {
    let lexer = lexer_with_names(&[], &[]);
    let token = parse_operation("add(1, 2)", &lexer, &Position::null()).unwrap();

    assert_eq!(
        token,
        Token::Operation {
            op: OpKind::Add,
            args: vec![
                Token::Number("1".to_string()),
                Token::Number("2".to_string()),
            ],
        }
    );
}

#[test]
fn test_parse_operation_name_case_insensitive() {
    let lexer = lexer_with_names(&[], &[]);
    let token = parse_operation("DIVIDE(10, 2)", &lexer, &Position::null()).unwrap();

    match token {
        Token::Operation { op, .. } => assert_eq!(op, OpKind::Divide),
        token => panic!("expected an operation token, got {}", token),
    }
}

#[test]
fn test_parse_operation_whitespace_tolerant() {
    let lexer = lexer_with_names(&["height"], &[]);
    let token = parse_operation("multiply( height , 100 )", &lexer, &Position::null()).unwrap();

    assert_eq!(
        token,
        Token::Operation {
            op: OpKind::Multiply,
            args: vec![
                Token::Variable("height".to_string()),
                Token::Number("100".to_string()),
            ],
        }
    );
}

#[test]
fn test_parse_operation_nested_commas_stay_inner() {
    let lexer = lexer_with_names(&[], &[]);
    let token = parse_operation("add(subtract(5, 2), 3)", &lexer, &Position::null()).unwrap();

    assert_eq!(
        token,
        Token::Operation {
            op: OpKind::Add,
            args: vec![
                Token::Operation {
                    op: OpKind::Subtract,
                    args: vec![
                        Token::Number("5".to_string()),
                        Token::Number("2".to_string()),
                    ],
                },
                Token::Number("3".to_string()),
            ],
        }
    );
}

#[test]
fn test_parse_operation_invalid_name() {
    let lexer = lexer_with_names(&[], &[]);
    let result = parse_operation("exponentiate(2, 8)", &lexer, &Position::null());

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidOperation");
}

#[test]
fn test_parse_operation_without_parens_is_invalid() {
    let lexer = lexer_with_names(&[], &[]);
    let result = parse_operation("just some words", &lexer, &Position::null());

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidOperation");
}

#[test]
fn test_parse_operation_empty_call() {
    let lexer = lexer_with_names(&[], &[]);
    let result = parse_operation("add()", &lexer, &Position::null());

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidArgument");
}

#[test]
fn test_parse_operation_nested_invalid_name() {
    let lexer = lexer_with_names(&[], &[]);
    let result = parse_operation("add(1, frobnicate(2, 3))", &lexer, &Position::null());

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidOperation");
}

#[test]
fn test_parse_operation_negative_and_decimal_numbers() {
    let lexer = lexer_with_names(&[], &[]);
    let token = parse_operation("add(-1, 2.5)", &lexer, &Position::null()).unwrap();

    assert_eq!(
        token,
        Token::Operation {
            op: OpKind::Add,
            args: vec![
                Token::Number("-1".to_string()),
                Token::Number("2.5".to_string()),
            ],
        }
    );
}

#[test]
fn test_resolve_value_priority() {
    let lexer = lexer_with_names(&["role"], &["default_password"]);

    assert_eq!(
        resolve_value("role", &lexer, &Position::null()).unwrap(),
        Token::Variable("role".to_string())
    );
    assert_eq!(
        resolve_value("default_password", &lexer, &Position::null()).unwrap(),
        Token::Constant("default_password".to_string())
    );
    assert_eq!(
        resolve_value("42", &lexer, &Position::null()).unwrap(),
        Token::Number("42".to_string())
    );
    assert_eq!(
        resolve_value("admin", &lexer, &Position::null()).unwrap(),
        Token::ConstantValue("admin".to_string())
    );
}

#[test]
fn test_resolve_value_operation_call() {
    let lexer = lexer_with_names(&["height"], &[]);
    let token = resolve_value("multiply(height, 100)", &lexer, &Position::null()).unwrap();

    match token {
        Token::Operation { op, .. } => assert_eq!(op, OpKind::Multiply),
        token => panic!("expected an operation token, got {}", token),
    }
}

#[test]
fn test_resolve_value_multi_word_literal() {
    let lexer = lexer_with_names(&[], &[]);
    let token = resolve_value("not a number", &lexer, &Position::null()).unwrap();

    assert_eq!(token, Token::ConstantValue("not a number".to_string()));
}

#[test]
fn test_parse_condition_comparison() {
    let lexer = lexer_with_names(&["role"], &[]);
    let token =
        parse_condition(&words("role = admin then 1 else 0"), &lexer, &Position::null()).unwrap();

    assert_eq!(
        token,
        Token::Condition(Box::new(Condition::Comparison {
            left: Token::Variable("role".to_string()),
            operator: CompareOp::Eq,
            right: Token::ConstantValue("admin".to_string()),
            result_if_true: Token::Number("1".to_string()),
            result_if_false: Token::Number("0".to_string()),
        }))
    );
}

#[test]
fn test_parse_condition_empty_branch_is_null() {
    let lexer = lexer_with_names(&["role"], &[]);
    let token = parse_condition(&words("role = admin then"), &lexer, &Position::null()).unwrap();

    match token {
        Token::Condition(condition) => match condition.as_ref() {
            Condition::Comparison {
                result_if_true,
                result_if_false,
                ..
            } => {
                assert_eq!(*result_if_true, Token::Null);
                assert_eq!(*result_if_false, Token::Null);
            }
            Condition::Combinator { .. } => panic!("expected a comparison"),
        },
        token => panic!("expected a condition token, got {}", token),
    }
}

#[test]
fn test_parse_condition_without_operator() {
    let lexer = lexer_with_names(&["role"], &[]);
    let result = parse_condition(&words("role then 1 else 0"), &lexer, &Position::null());

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidCondition");
}

#[test]
fn test_parse_condition_operation_parens_do_not_group() {
    // The commas and parens of an operation call must not be mistaken for
    // boolean grouping.
    let lexer = lexer_with_names(&["height", "width"], &[]);
    let token = parse_condition(
        &words("multiply(height, 2) > 10 and width < 5 then 1 else 0"),
        &lexer,
        &Position::null(),
    )
    .unwrap();

    match token {
        Token::Condition(condition) => match condition.as_ref() {
            Condition::Combinator { kind, operands, .. } => {
                assert_eq!(*kind, BoolKind::And);
                assert_eq!(operands.len(), 2);
                match &operands[0] {
                    Condition::Comparison { left, .. } => match left {
                        Token::Operation { op, .. } => assert_eq!(*op, OpKind::Multiply),
                        token => panic!("expected an operation operand, got {}", token),
                    },
                    Condition::Combinator { .. } => panic!("expected a comparison"),
                }
            }
            Condition::Comparison { .. } => panic!("expected a combinator"),
        },
        token => panic!("expected a condition token, got {}", token),
    }
}

#[test]
fn test_parse_condition_nested_groups() {
    let lexer = lexer_with_names(&["a", "b", "c", "d"], &[]);
    let token = parse_condition(
        &words("((a = 1 or b = 2) and c = 3) or d = 4 then yes else no"),
        &lexer,
        &Position::null(),
    )
    .unwrap();

    assert_eq!(
        token,
        Token::Condition(Box::new(Condition::Combinator {
            kind: BoolKind::Or,
            operands: vec![
                Condition::Combinator {
                    kind: BoolKind::And,
                    operands: vec![
                        Condition::Combinator {
                            kind: BoolKind::Or,
                            operands: vec![
                                Condition::Comparison {
                                    left: Token::Variable("a".to_string()),
                                    operator: CompareOp::Eq,
                                    right: Token::Number("1".to_string()),
                                    result_if_true: Token::Null,
                                    result_if_false: Token::Null,
                                },
                                Condition::Comparison {
                                    left: Token::Variable("b".to_string()),
                                    operator: CompareOp::Eq,
                                    right: Token::Number("2".to_string()),
                                    result_if_true: Token::Null,
                                    result_if_false: Token::Null,
                                },
                            ],
                            result_if_true: Token::Null,
                            result_if_false: Token::Null,
                        },
                        Condition::Comparison {
                            left: Token::Variable("c".to_string()),
                            operator: CompareOp::Eq,
                            right: Token::Number("3".to_string()),
                            result_if_true: Token::Null,
                            result_if_false: Token::Null,
                        },
                    ],
                    result_if_true: Token::Null,
                    result_if_false: Token::Null,
                },
                Condition::Comparison {
                    left: Token::Variable("d".to_string()),
                    operator: CompareOp::Eq,
                    right: Token::Number("4".to_string()),
                    result_if_true: Token::Null,
                    result_if_false: Token::Null,
                },
            ],
            result_if_true: Token::ConstantValue("yes".to_string()),
            result_if_false: Token::ConstantValue("no".to_string()),
        }))
    );
}

#[test]
fn test_parse_condition_redundant_group() {
    let lexer = lexer_with_names(&["a"], &[]);
    let token =
        parse_condition(&words("(a = 1) then 2 else 3"), &lexer, &Position::null()).unwrap();

    assert_eq!(
        token,
        Token::Condition(Box::new(Condition::Comparison {
            left: Token::Variable("a".to_string()),
            operator: CompareOp::Eq,
            right: Token::Number("1".to_string()),
            result_if_true: Token::Number("2".to_string()),
            result_if_false: Token::Number("3".to_string()),
        }))
    );
}

#[test]
fn test_parse_condition_branch_values_resolve() {
    let lexer = lexer_with_names(&["role"], &["fallback"]);
    let token = parse_condition(
        &words("role = admin then add(1, 2) else fallback"),
        &lexer,
        &Position::null(),
    )
    .unwrap();

    match token {
        Token::Condition(condition) => match condition.as_ref() {
            Condition::Comparison {
                result_if_true,
                result_if_false,
                ..
            } => {
                assert_eq!(
                    *result_if_true,
                    Token::Operation {
                        op: OpKind::Add,
                        args: vec![
                            Token::Number("1".to_string()),
                            Token::Number("2".to_string()),
                        ],
                    }
                );
                assert_eq!(*result_if_false, Token::Constant("fallback".to_string()));
            }
            Condition::Combinator { .. } => panic!("expected a comparison"),
        },
        token => panic!("expected a condition token, got {}", token),
    }
}
