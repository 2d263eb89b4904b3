//! Arithmetic expression evaluation.
//!
//! A small recursive-descent parser over `+ - * / ( )` with the usual
//! precedence and unary minus. Input is tokenized and evaluated
//! directly; nothing is ever executed as code.

use crate::error::ToolError;

// ── Tokens ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
}

fn describe(token: Token) -> String {
    match token {
        Token::Number(value) => value.to_string(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::Slash => "/".to_string(),
        Token::OpenParen => "(".to_string(),
        Token::CloseParen => ")".to_string(),
    }
}

fn parse_error(reason: impl Into<String>) -> ToolError {
    ToolError::Parse {
        format: "expression".to_string(),
        reason: reason.into(),
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ToolError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::OpenParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::CloseParen);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(&digit) = chars.peek() {
                    if digit.is_ascii_digit() || digit == '.' {
                        literal.push(digit);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse()
                    .map_err(|_| parse_error(format!("'{literal}' is not a number")))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(parse_error(format!("unexpected character '{other}'"))),
        }
    }
    Ok(tokens)
}

// ── Recursive-descent evaluation ────────────────────────────────────

struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, ToolError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, ToolError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.advance();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor.abs() < f64::EPSILON {
                        return Err(ToolError::Range {
                            field: "divisor".to_string(),
                            reason: "division by zero".to_string(),
                        });
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// factor := NUMBER | '(' expression ')' | '-' factor
    fn factor(&mut self) -> Result<f64, ToolError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::OpenParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::CloseParen) => Ok(value),
                    _ => Err(parse_error("missing closing parenthesis")),
                }
            }
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(other) => Err(parse_error(format!("unexpected '{}'", describe(other)))),
            None => Err(parse_error("unexpected end of expression")),
        }
    }
}

/// Evaluate an arithmetic expression. The whole input must be consumed;
/// trailing tokens are an error rather than silently ignored.
pub fn evaluate(input: &str) -> Result<f64, ToolError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(parse_error("empty expression"));
    }
    let mut parser = Parser {
        tokens,
        position: 0,
    };
    let value = parser.expression()?;
    if parser.position != parser.tokens.len() {
        return Err(parse_error("unexpected trailing input"));
    }
    Ok(value)
}
