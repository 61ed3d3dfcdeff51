//! Operand grammar: `[(#]* core [),XY]*`
//!
//! The decoration on either side of the core decides the addressing-mode
//! shape; the core is the expression text.

use crate::addressing::OperandShape;
use crate::error::AsmError;

#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub core: String,
    pub shape: OperandShape,
}

fn is_prefix_char(c: char) -> bool {
    matches!(c, '(' | '#')
}

fn is_core_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '%' | '+' | '-' | '*' | '/' | '<' | '>')
}

fn is_suffix_char(c: char) -> bool {
    matches!(c, ')' | ',' | 'X' | 'Y' | 'x' | 'y')
}

/// Split raw operand text into `(prefix, core, suffix)` without judging the
/// decoration. Fails when the text does not fit the grammar at all.
pub fn split_operand(text: &str) -> Result<(&str, &str, &str), AsmError> {
    let text = text.trim();
    let core_start = text.find(|c: char| !is_prefix_char(c)).unwrap_or(text.len());
    let rest = &text[core_start..];
    let core_len = rest.find(|c: char| !is_core_char(c)).unwrap_or(rest.len());
    let (core, suffix) = rest.split_at(core_len);

    if core.is_empty() || !suffix.chars().all(is_suffix_char) {
        return Err(AsmError::Parse(format!("bad operand `{}`", text)));
    }
    Ok((&text[..core_start], core, suffix))
}

/// Parse an instruction operand into its core and addressing shape.
pub fn parse_operand(text: &str) -> Result<Operand, AsmError> {
    let (prefix, core, suffix) = split_operand(text)?;
    let shape = OperandShape::classify(prefix, core, suffix)
        .ok_or_else(|| AsmError::UnknownOperand(text.trim().to_string()))?;
    Ok(Operand {
        core: core.to_string(),
        shape,
    })
}
