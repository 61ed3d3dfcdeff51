//! Expression parsing for assembly operands
//!
//! An expression is either an atomic term or `A op B` with `op` one of
//! `+ - * / << >>`. Chains are strictly left-associative with no precedence:
//! `2+3*4` is `(2+3)*4`.

use super::number::{NumberFormat, NumberParser};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(crate::Value),
    Symbol(String),
    /// The bare `A` register reference. Never has a value.
    Accumulator,
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Shl(Box<Expr>, Box<Expr>),
    Shr(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// True when the expression has more than one binary operator.
    pub fn is_chained(&self) -> bool {
        match self {
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Shl(l, r)
            | Expr::Shr(l, r) => l.is_binary() || r.is_binary(),
            _ => false,
        }
    }

    fn is_binary(&self) -> bool {
        !matches!(self, Expr::Number(_) | Expr::Symbol(_) | Expr::Accumulator)
    }

    /// Every symbol name the expression refers to, left to right.
    pub fn symbols(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Symbol(name) => out.push(name),
            Expr::Number(_) | Expr::Accumulator => {}
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Shl(l, r)
            | Expr::Shr(l, r) => {
                l.collect_symbols(out);
                r.collect_symbols(out);
            }
        }
    }
}

pub struct ExpressionParser;

impl ExpressionParser {
    pub fn parse(s: &str) -> Result<Expr, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty expression".to_string());
        }

        let Some((pos, len)) = Self::rightmost_operator(s)? else {
            return Self::parse_term(s);
        };

        let left = &s[..pos];
        let right = &s[pos + len..];
        if right.trim().is_empty() {
            return Err(format!("Missing operand after operator: {}", s));
        }

        // Left side may itself be a chain; right side is always a single term
        let l = Box::new(Self::parse(left)?);
        let r = Box::new(Self::parse_term(right.trim())?);
        Ok(match &s[pos..pos + len] {
            "+" => Expr::Add(l, r),
            "-" => Expr::Sub(l, r),
            "*" => Expr::Mul(l, r),
            "/" => Expr::Div(l, r),
            "<<" => Expr::Shl(l, r),
            ">>" => Expr::Shr(l, r),
            op => return Err(format!("Unknown operator: {}", op)),
        })
    }

    /// Locate the rightmost binary operator as `(byte offset, length)`.
    /// Position 0 is never an operator: there are no unary forms.
    fn rightmost_operator(s: &str) -> Result<Option<(usize, usize)>, String> {
        let bytes = s.as_bytes();
        let mut i = bytes.len();
        while i > 1 {
            i -= 1;
            match bytes[i] {
                b'+' | b'-' | b'*' | b'/' => return Ok(Some((i, 1))),
                c @ (b'<' | b'>') => {
                    if bytes[i - 1] == c && i >= 2 {
                        return Ok(Some((i - 1, 2)));
                    }
                    return Err(format!("Invalid operator in expression: {}", s));
                }
                _ => {}
            }
        }
        Ok(None)
    }

    fn parse_term(s: &str) -> Result<Expr, String> {
        if s == "A" {
            return Ok(Expr::Accumulator);
        }
        if NumberFormat::detect(s).is_some() {
            return NumberParser::parse(s).map(Expr::Number);
        }
        if Self::is_valid_symbol(s) {
            return Ok(Expr::Symbol(s.to_string()));
        }
        Err(format!("Invalid expression: {}", s))
    }

    fn is_valid_symbol(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}
