//! Parser module for assembly source

pub mod expression;
pub mod line;
pub mod literal;
pub mod number;
pub mod operand;

pub use expression::{Expr, ExpressionParser};
pub use line::{parse_line, LineError, Statement};
pub use literal::process_string;
pub use number::NumberParser;
pub use operand::{parse_operand, split_operand, Operand};
