use std::collections::HashSet;
use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::{cond::parse_condition, expr::parse_operation},
    Position, Span,
};

use super::tokens::{Token, ValueType};

/// One `;`-terminated clause of the program, trimmed, with its words and
/// the span it covers in the source.
#[derive(Debug, Clone)]
pub struct Statement {
    pub words: Vec<String>,
    pub text: String,
    pub span: Span,
}

pub struct Lexer {
    variables: HashSet<String>,
    constants: HashSet<String>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            variables: HashSet::new(),
            constants: HashSet::new(),
            file: file_name,
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    pub fn declare_variable(&mut self, name: &str, position: &Position) -> Result<(), Error> {
        if self.variables.contains(name) || self.constants.contains(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    name: name.to_string(),
                },
                position.clone(),
            ));
        }

        self.variables.insert(name.to_string());
        Ok(())
    }

    pub fn declare_constant(&mut self, name: &str, position: &Position) -> Result<(), Error> {
        if self.variables.contains(name) || self.constants.contains(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    name: name.to_string(),
                },
                position.clone(),
            ));
        }

        self.constants.insert(name.to_string());
        Ok(())
    }

    pub fn statement_tokens(&mut self, statement: &Statement) -> Result<Vec<Token>, Error> {
        let keyword = &statement.words[0];

        match keyword.to_lowercase().as_str() {
            "using" => self.using_statement(statement),
            "define" => self.define_statement(statement),
            _ => Err(Error::new(
                ErrorImpl::UnknownTokenType {
                    keyword: keyword.clone(),
                },
                statement.span.start.clone(),
            )),
        }
    }

    fn using_statement(&mut self, statement: &Statement) -> Result<Vec<Token>, Error> {
        if statement.words.len() < 3 {
            return Err(Error::new(
                ErrorImpl::InvalidArgumentCount {
                    statement: statement.text.clone(),
                },
                statement.span.start.clone(),
            ));
        }

        let name = &statement.words[1];

        // The type word is case sensitive, unlike the leading keyword.
        let value_type = match statement.words[2].as_str() {
            "string" => ValueType::String,
            "number" => ValueType::Number,
            other => {
                return Err(Error::new(
                    ErrorImpl::InvalidVariableType {
                        type_: other.to_string(),
                    },
                    statement.span.start.clone(),
                ))
            }
        };

        self.declare_variable(name, &statement.span.start)?;

        Ok(vec![
            Token::Keyword(statement.words[0].clone()),
            Token::Variable(name.clone()),
            Token::VariableType(value_type),
        ])
    }

    fn define_statement(&mut self, statement: &Statement) -> Result<Vec<Token>, Error> {
        if statement.words.len() < 3 {
            return Err(Error::new(
                ErrorImpl::InvalidArgumentCount {
                    statement: statement.text.clone(),
                },
                statement.span.start.clone(),
            ));
        }

        let name = statement.words[1].clone();
        let value_words = &statement.words[2..];

        let value = if value_words.len() == 1 {
            Token::ConstantValue(value_words[0].clone())
        } else if value_words[0] == "if" {
            parse_condition(&value_words[1..], self, &statement.span.start)?
        } else {
            parse_operation(&value_words.join(" "), self, &statement.span.start)?
        };

        // Registered after the value is parsed so a constant cannot
        // reference itself.
        self.declare_constant(&name, &statement.span.start)?;

        Ok(vec![
            Token::Keyword(statement.words[0].clone()),
            Token::Constant(name),
            value,
        ])
    }
}

pub fn split_statements(source: &str, file: &Rc<String>) -> Vec<Statement> {
    let mut statements = vec![];
    let mut offset = 0;

    for piece in source.split(';') {
        let trimmed = piece.trim();

        if !trimmed.is_empty() {
            let start = offset + (piece.len() - piece.trim_start().len());

            statements.push(Statement {
                words: trimmed.split_whitespace().map(String::from).collect(),
                text: trimmed.to_string(),
                span: Span {
                    start: Position(start as u32, Rc::clone(file)),
                    end: Position((start + trimmed.len()) as u32, Rc::clone(file)),
                },
            });
        }

        offset += piece.len() + 1;
    }

    statements
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Vec<Token>>, Error> {
    let mut lex = Lexer::new(file);
    let statements = split_statements(&source, &Rc::clone(lex.file()));

    let mut program = vec![];

    for statement in statements {
        program.push(lex.statement_tokens(&statement)?);
    }

    Ok(program)
}
