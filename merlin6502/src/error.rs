//! Error types for the assembler

use std::fmt;

use thiserror::Error;

/// Everything that can go wrong on a single source line.
///
/// None of these abort an assembly: the offending line contributes no bytes
/// and the rest of the file is still processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown operand: {0}")]
    UnknownOperand(String),

    #[error("Unknown mode {modes} for {mnemonic}")]
    UnknownMode { mnemonic: String, modes: String },

    #[error("Unknown opcode {0}")]
    UnknownOpcode(String),

    #[error("Missing string for {0}")]
    MissingString(String),

    #[error("Relative branch distance error {0}")]
    BranchRange(i32),

    #[error("Unresolved operand: {0}")]
    Unresolved(String),

    #[error("{0} requires a label")]
    MissingLabel(String),

    #[error("Label {name} moved from ${from:04X} to ${to:04X} between passes")]
    LabelMoved { name: String, from: i32, to: i32 },
}

/// An [`AsmError`] attached to the 1-based source line that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub error: AsmError,
}

impl Diagnostic {
    pub fn new(line: usize, error: AsmError) -> Self {
        Self { line, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for Diagnostic {}
