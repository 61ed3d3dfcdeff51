//! Source line parsing
//!
//! Line shape: `[label] <whitespace> mnemonic [<whitespace> operand]`.
//! A label is whatever token starts in column 0.

use super::operand::{parse_operand, Operand};
use crate::error::AsmError;
use crate::pseudo::PseudoOp;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    /// Full-line comment or blank line
    Comment,
    LabelOnly(&'a str),
    Instruction {
        label: Option<&'a str>,
        mnemonic: String,
        operand: Option<Operand>,
    },
    PseudoOp {
        label: Option<&'a str>,
        op: PseudoOp,
        operand: Option<&'a str>,
    },
}

/// A line that could not be parsed. The label, if any, is still reported
/// so the caller can keep addresses stable.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError<'a> {
    pub label: Option<&'a str>,
    pub error: AsmError,
}

/// Remove a `;` comment, ignoring semicolons inside quoted strings.
pub fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, ';') => return line[..i].trim_end(),
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
    }
    line.trim_end()
}

pub fn parse_line(raw: &str) -> Result<Statement<'_>, LineError<'_>> {
    if raw.starts_with('*') {
        return Ok(Statement::Comment);
    }
    let line = strip_comment(raw);
    if line.trim().is_empty() {
        return Ok(Statement::Comment);
    }

    let (label, rest) = if line.starts_with(char::is_whitespace) {
        (None, line.trim_start())
    } else {
        let end = line.find(char::is_whitespace).unwrap_or(line.len());
        (Some(&line[..end]), line[end..].trim_start())
    };

    if rest.is_empty() {
        // Only reachable with a column-0 token
        return Ok(label.map_or(Statement::Comment, Statement::LabelOnly));
    }

    let (mnemonic, operand) = match rest.split_once(char::is_whitespace) {
        Some((m, o)) => (m, Some(o.trim()).filter(|o| !o.is_empty())),
        None => (rest, None),
    };
    let mnemonic = mnemonic.to_ascii_uppercase();

    if let Some(op) = PseudoOp::from_mnemonic(&mnemonic) {
        return Ok(Statement::PseudoOp { label, op, operand });
    }

    let operand = operand
        .map(parse_operand)
        .transpose()
        .map_err(|error| LineError { label, error })?;
    Ok(Statement::Instruction {
        label,
        mnemonic,
        operand,
    })
}
