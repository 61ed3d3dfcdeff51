//! Operand evaluation against the symbol table

pub mod expression;

pub use expression::ExpressionEvaluator;
