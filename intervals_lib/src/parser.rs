//! Parsing of interval expressions.
//!
//! The grammar is:
//! ```text
//!    expression ::= term ( operator term )*
//!    operator   ::= " or " | " and "
//!    term       ::= literal | "(" expression ")"
//!    literal    ::= ( "[" | "]" ) number "," number ( "[" | "]" )
//!    number     ::= -?[0-9]+(\.[0-9]+)?
//! ```
//! There is no precedence between `or` and `and`: a chain is evaluated from
//! left to right, and only parenthesis change the grouping.
//!
//! Every literal is validated (and converted to an [`Interval`]) while
//! parsing, so that an expression that parsed successfully can always be
//! evaluated.

use crate::errors::{IntervalError, Result};
use crate::intervals::Interval;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\[\]])(-?[0-9]+(?:\.[0-9]+)?),(-?[0-9]+(?:\.[0-9]+)?)([\[\]])")
        .expect("valid regular expression")
});

/// Maximum nesting of parenthesis
const MAX_DEPTH: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Or,
    And,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Literal(Interval),
    Group(Box<Expression>),
}

/// A chain of terms, at one level of parenthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub head: Term,
    pub tail: Vec<(Operator, Term)>,
}

/// Parses a whole expression.  Trailing text is an error.
pub fn parse(text: &str) -> Result<Expression> {
    let mut parser = Parser {
        text,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expression()?;
    if parser.pos != text.len() {
        return Err(parser.error());
    }
    debug!("parsed {text:?} into {} top-level terms", expr.tail.len() + 1);
    Ok(expr)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or_default()
    }

    fn error(&self) -> IntervalError {
        IntervalError::InvalidExpression {
            expr: self.text.to_string(),
            position: self.pos,
        }
    }

    /// Consumes `token` if the remaining text starts with it.
    fn accept(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let head = self.term()?;
        let mut tail = Vec::new();
        while let Some(op) = self.operator() {
            tail.push((op, self.term()?));
        }
        Ok(Expression { head, tail })
    }

    fn operator(&mut self) -> Option<Operator> {
        if self.accept(" or ") {
            Some(Operator::Or)
        } else if self.accept(" and ") {
            Some(Operator::And)
        } else {
            None
        }
    }

    fn term(&mut self) -> Result<Term> {
        if self.accept("(") {
            self.depth += 1;
            if self.depth > MAX_DEPTH {
                return Err(self.error());
            }
            let inner = self.expression()?;
            if !self.accept(")") {
                return Err(self.error());
            }
            self.depth -= 1;
            return Ok(Term::Group(Box::new(inner)));
        }

        let Some(caps) = LITERAL.captures(self.rest()) else {
            return Err(self.error());
        };
        let (literal, [lower_bracket, lower, upper, upper_bracket]) =
            caps.extract();
        let intv = Interval::from_literal(
            literal,
            lower_bracket == "[",
            lower,
            upper,
            upper_bracket == "]",
        )
        .map_err(|err| match err {
            //  Report unreadable numbers at the start of the literal
            IntervalError::InvalidExpression { .. } => self.error(),
            IntervalError::InvalidBounds(_)
            | IntervalError::NotAnInterval(_) => err,
        })?;
        self.pos += literal.len();
        Ok(Term::Literal(intv))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn literal(text: &str) -> Term {
        Term::Literal(Interval::parse(text).unwrap())
    }

    fn assert_invalid(text: &str, position: usize) {
        assert_eq!(
            parse(text),
            Err(IntervalError::InvalidExpression {
                expr: text.to_string(),
                position,
            }),
            "parsing {text}"
        );
    }

    #[test]
    fn test_literal() {
        assert_eq!(
            parse("[1,2]"),
            Ok(Expression {
                head: literal("[1,2]"),
                tail: vec![],
            })
        );
        assert_eq!(
            parse("]-1.5,20["),
            Ok(Expression {
                head: literal("]-1.5,20["),
                tail: vec![],
            })
        );
    }

    #[test]
    fn test_chain() {
        assert_eq!(
            parse("[1,2] or ]3,4[ and [0,9]"),
            Ok(Expression {
                head: literal("[1,2]"),
                tail: vec![
                    (Operator::Or, literal("]3,4[")),
                    (Operator::And, literal("[0,9]")),
                ],
            })
        );
    }

    #[test]
    fn test_groups() {
        let expected = Expression {
            head: literal("[1,5]"),
            tail: vec![(
                Operator::And,
                Term::Group(Box::new(Expression {
                    head: literal("[3,9]"),
                    tail: vec![(Operator::Or, literal("[8,15]"))],
                })),
            )],
        };
        assert_eq!(parse("[1,5] and ([3,9] or [8,15])"), Ok(expected));

        assert_eq!(
            parse("(([1,5]))"),
            Ok(Expression {
                head: Term::Group(Box::new(Expression {
                    head: Term::Group(Box::new(Expression {
                        head: literal("[1,5]"),
                        tail: vec![],
                    })),
                    tail: vec![],
                })),
                tail: vec![],
            })
        );
    }

    #[test]
    fn test_invalid() {
        assert_invalid("", 0);
        assert_invalid("qwe", 0);
        assert_invalid("(1,2)", 1);
        assert_invalid("1,2", 0);
        assert_invalid("[1,2", 0);
        assert_invalid("[1,2]]", 5);
        assert_invalid("[1 , 2]", 0);
        assert_invalid("[1,2] or 3", 9);
        assert_invalid("[1,2] orq [3,4]", 5);
        assert_invalid("[1,2] adn [3,4]", 5);
        assert_invalid("[1,2] OR [3,4]", 5);
        assert_invalid("[1,2]  or [3,4]", 5);
        assert_invalid("[1,2] or [3,5] and, [3,10]", 14);
        assert_invalid("[1,2] or [3,5] and ()[3,10])", 20);
        assert_invalid("[1,2] or [3,5] and (((([3,10])))", 32);
        assert_invalid("(([1,2] or (([3,5]) and [3,10]))", 32);
        assert_invalid("([1,2] or ([3,5] and) [3,10])", 16);
        assert_invalid(" [1,2]", 0);
        assert_invalid("[1,2] ", 5);
    }

    #[test]
    fn test_invalid_bounds() {
        assert_eq!(
            parse("[1,2] and ([3,2])"),
            Err(IntervalError::InvalidBounds("[3,2]".to_string()))
        );
    }

    #[test]
    fn test_number_overflow() {
        let zeros = "0".repeat(400);
        assert_invalid(&format!("[0,1{zeros}]"), 0);
        assert_invalid(&format!("[1,2] or ]-1{zeros},0]"), 9);
        assert!(parse("[0,100000000000000000000]").is_ok());
    }

    #[test]
    fn test_depth() {
        let deep = format!("{}[1,2]{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse(&deep).is_ok());

        let too_deep = format!(
            "{}[1,2]{}",
            "(".repeat(MAX_DEPTH + 1),
            ")".repeat(MAX_DEPTH + 1)
        );
        assert_invalid(&too_deep, MAX_DEPTH + 1);
    }
}
