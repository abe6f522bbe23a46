use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref OPERATION_LOOKUP: HashMap<&'static str, OpKind> = {
        let mut map = HashMap::new();
        map.insert("add", OpKind::Add);
        map.insert("subtract", OpKind::Subtract);
        map.insert("multiply", OpKind::Multiply);
        map.insert("divide", OpKind::Divide);
        map
    };
    pub static ref COMPARISON_LOOKUP: HashMap<&'static str, CompareOp> = {
        let mut map = HashMap::new();
        map.insert("=", CompareOp::Eq);
        map.insert("!=", CompareOp::NotEq);
        map.insert("<", CompareOp::Less);
        map.insert(">", CompareOp::Greater);
        map.insert("<=", CompareOp::LessEq);
        map.insert(">=", CompareOp::GreaterEq);
        map.insert("regex", CompareOp::Regex);
        map
    };
    pub static ref NUMBER_PATTERN: Regex = Regex::new("^-?[0-9]+(\\.[0-9]+)?$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpKind::Add => write!(f, "add"),
            OpKind::Subtract => write!(f, "subtract"),
            OpKind::Multiply => write!(f, "multiply"),
            OpKind::Divide => write!(f, "divide"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Regex,
}

impl Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "="),
            CompareOp::NotEq => write!(f, "!="),
            CompareOp::Less => write!(f, "<"),
            CompareOp::Greater => write!(f, ">"),
            CompareOp::LessEq => write!(f, "<="),
            CompareOp::GreaterEq => write!(f, ">="),
            CompareOp::Regex => write!(f, "regex"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BoolKind {
    And,
    Or,
}

impl Display for BoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoolKind::And => write!(f, "and"),
            BoolKind::Or => write!(f, "or"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueType {
    String,
    Number,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Number => write!(f, "number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Keyword(String),
    Variable(String),
    VariableType(ValueType),
    Constant(String),
    ConstantValue(String),
    Number(String),
    Operation { op: OpKind, args: Vec<Token> },
    Condition(Box<Condition>),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Comparison {
        left: Token,
        operator: CompareOp,
        right: Token,
        result_if_true: Token,
        result_if_false: Token,
    },
    Combinator {
        kind: BoolKind,
        operands: Vec<Condition>,
        result_if_true: Token,
        result_if_false: Token,
    },
}

impl Condition {
    // Nested predicates keep Null branches; only the outermost condition
    // of a define statement carries the then/else values.
    pub fn with_results(self, if_true: Token, if_false: Token) -> Condition {
        match self {
            Condition::Comparison {
                left,
                operator,
                right,
                ..
            } => Condition::Comparison {
                left,
                operator,
                right,
                result_if_true: if_true,
                result_if_false: if_false,
            },
            Condition::Combinator { kind, operands, .. } => Condition::Combinator {
                kind,
                operands,
                result_if_true: if_true,
                result_if_false: if_false,
            },
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(value) => write!(f, "Keyword({})", value),
            Token::Variable(value) => write!(f, "Variable({})", value),
            Token::VariableType(value_type) => write!(f, "VariableType({})", value_type),
            Token::Constant(value) => write!(f, "Constant({})", value),
            Token::ConstantValue(value) => write!(f, "ConstantValue({})", value),
            Token::Number(value) => write!(f, "Number({})", value),
            Token::Operation { op, args } => {
                write!(f, "Operation({}", op)?;
                for arg in args {
                    write!(f, ", {}", arg)?;
                }
                write!(f, ")")
            }
            Token::Condition(condition) => write!(f, "{}", condition),
            Token::Null => write!(f, "Null"),
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Comparison {
                left,
                operator,
                right,
                result_if_true,
                result_if_false,
            } => write!(
                f,
                "Comparison({} {} {} then {} else {})",
                left, operator, right, result_if_true, result_if_false
            ),
            Condition::Combinator {
                kind,
                operands,
                result_if_true,
                result_if_false,
            } => {
                write!(f, "Combinator({}", kind)?;
                for operand in operands {
                    write!(f, ", {}", operand)?;
                }
                write!(f, " then {} else {})", result_if_true, result_if_false)
            }
        }
    }
}
