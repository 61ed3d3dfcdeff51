//! Two-pass 6502 assembler for Merlin-style source
//!
//! - Column-0 labels, `*` full-line comments and `;` trailing comments
//! - `$` hex, `%` binary and decimal literals, `A op B` expressions with
//!   `+ - * / << >>` (left to right, no precedence)
//! - Forward references resolved by a second pass
//! - Absolute operands that fit in one byte use the zero-page encoding
//!
//! ## Directives
//! - `ORG` – set the origin (default `$8000`).
//! - `EQU` – bind the line's label to a value.
//! - `ASC`, `DCI`, `FLS`, `INV`, `REV`, `HEX` – string and hex data.
//! - `DA`, `DS` – 16-bit words and zero-filled storage.
//! - `CHK` and the listing directives are accepted and ignored.
//!
//! Errors never abort: a bad line contributes no bytes and is reported as a
//! [`Diagnostic`] on the final pass.
//!
//! ## Optional Features
//! - `listing`: print or save the human-readable listing of an [`Assembly`].
//!
//! ## Basic Usage
//! ```rust
//! use merlin6502::{assemble, AsmOptions};
//!
//! let src = "
//!          ORG $C000
//! START    LDA #$42
//!          STA $10
//!          BNE START
//! ";
//!
//! let out = assemble(src, &AsmOptions::default());
//! assert!(out.is_clean());
//! assert_eq!(out.origin, 0xC000);
//! assert_eq!(out.binary, vec![0xA9, 0x42, 0x85, 0x10, 0xD0, 0xFA]);
//! ```

mod addressing;
mod assembler;
mod error;
mod eval;
pub mod listing;
mod opcodes;
pub mod parser;
mod pseudo;
mod symbol;

/// Numeric value of a symbol or expression.
pub type Value = i32;

pub use addressing::{AddressingMode, OperandShape};
pub use assembler::{assemble, AsmOptions, Assembler6502, AssemblerState, Assembly, Pass, DEFAULT_ORIGIN};
pub use error::{AsmError, Diagnostic};
pub use listing::ListingLine;
pub use opcodes::OpcodeTable;
pub use pseudo::PseudoOp;
pub use symbol::SymbolTable;
