//! Expression evaluation with symbol resolution

use crate::parser::expression::Expr;
use crate::symbol::SymbolTable;
use crate::Value;

pub struct ExpressionEvaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> ExpressionEvaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluate to a value, or `None` while something is still undefined:
    /// an unknown symbol (a forward reference on the first pass), the `A`
    /// register, or a division by zero.
    pub fn evaluate(&self, expr: &Expr) -> Option<Value> {
        match expr {
            Expr::Number(n) => Some(*n),
            Expr::Symbol(name) => self.symbols.get(name),
            Expr::Accumulator => None,
            Expr::Add(l, r) => Some(self.evaluate(l)?.wrapping_add(self.evaluate(r)?)),
            Expr::Sub(l, r) => Some(self.evaluate(l)?.wrapping_sub(self.evaluate(r)?)),
            Expr::Mul(l, r) => Some(self.evaluate(l)?.wrapping_mul(self.evaluate(r)?)),
            Expr::Div(l, r) => self.evaluate(l)?.checked_div(self.evaluate(r)?),
            Expr::Shl(l, r) => {
                let l = self.evaluate(l)?;
                l.checked_shl(u32::try_from(self.evaluate(r)?).ok()?)
            }
            Expr::Shr(l, r) => {
                let l = self.evaluate(l)?;
                l.checked_shr(u32::try_from(self.evaluate(r)?).ok()?)
            }
        }
    }

    /// Symbols in `expr` that have no binding yet.
    pub fn undefined<'e>(&self, expr: &'e Expr) -> Vec<&'e str> {
        expr.symbols()
            .into_iter()
            .filter(|name| !self.symbols.contains(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::expression::ExpressionParser;

    fn eval(symbols: &SymbolTable, src: &str) -> Option<Value> {
        let expr = ExpressionParser::parse(src).unwrap();
        ExpressionEvaluator::new(symbols).evaluate(&expr)
    }

    #[test]
    fn test_evaluate_number() {
        let symbols = SymbolTable::new();
        assert_eq!(eval(&symbols, "42"), Some(42));
        assert_eq!(eval(&symbols, "$C000"), Some(0xC000));
    }

    #[test]
    fn test_evaluate_label() {
        let mut symbols = SymbolTable::new();
        symbols.insert("LABEL", 0x2000);
        assert_eq!(eval(&symbols, "LABEL"), Some(0x2000));
        assert_eq!(eval(&symbols, "LABEL+1"), Some(0x2001));
        assert_eq!(eval(&symbols, "LABEL>>8"), Some(0x20));
    }

    #[test]
    fn test_operators() {
        let symbols = SymbolTable::new();
        assert_eq!(eval(&symbols, "10-3"), Some(7));
        assert_eq!(eval(&symbols, "6*7"), Some(42));
        assert_eq!(eval(&symbols, "100/7"), Some(14));
        assert_eq!(eval(&symbols, "1<<4"), Some(16));
        assert_eq!(eval(&symbols, "2+3*4"), Some(20));
    }

    #[test]
    fn test_unresolved() {
        let symbols = SymbolTable::new();
        assert_eq!(eval(&symbols, "UNDEFINED"), None);
        assert_eq!(eval(&symbols, "UNDEFINED+1"), None);
        assert_eq!(eval(&symbols, "A"), None);
        assert_eq!(eval(&symbols, "1/0"), None);
    }

    #[test]
    fn test_undefined_names() {
        let mut symbols = SymbolTable::new();
        symbols.insert("KNOWN", 1);
        let expr = ExpressionParser::parse("KNOWN+LATER").unwrap();
        assert_eq!(ExpressionEvaluator::new(&symbols).undefined(&expr), vec!["LATER"]);
    }
}
