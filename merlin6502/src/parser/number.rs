//! Number literal parsing: `$hex`, `%binary` and plain decimal

use crate::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Hexadecimal, // $FF
    Binary,      // %11111111
    Decimal,     // 255
}

impl NumberFormat {
    /// Decide from the first character whether a term is a number literal.
    /// Anything else (letters, `_`) is a symbol reference.
    pub fn detect(s: &str) -> Option<NumberFormat> {
        match s.chars().next()? {
            '$' => Some(NumberFormat::Hexadecimal),
            '%' => Some(NumberFormat::Binary),
            c if c.is_ascii_digit() => Some(NumberFormat::Decimal),
            _ => None,
        }
    }
}

pub struct NumberParser;

impl NumberParser {
    pub fn parse(s: &str) -> Result<Value, String> {
        let trimmed = s.trim();
        match NumberFormat::detect(trimmed) {
            Some(NumberFormat::Hexadecimal) => Self::parse_radix(&trimmed[1..], 16, "hexadecimal"),
            Some(NumberFormat::Binary) => Self::parse_radix(&trimmed[1..], 2, "binary"),
            Some(NumberFormat::Decimal) => Self::parse_radix(trimmed, 10, "decimal"),
            None => Err(format!("Invalid number: {}", trimmed)),
        }
    }

    fn parse_radix(digits: &str, radix: u32, kind: &str) -> Result<Value, String> {
        // from_str_radix would accept a sign; literals never carry one
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(format!("Invalid {}: {}", kind, digits));
        }
        Value::from_str_radix(digits, radix).map_err(|_| format!("Invalid {}: {}", kind, digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(NumberParser::parse("$FF").unwrap(), 255);
        assert_eq!(NumberParser::parse("$ff").unwrap(), 255);
        assert_eq!(NumberParser::parse("$C000").unwrap(), 0xC000);
        assert_eq!(NumberParser::parse("$10000").unwrap(), 0x10000);
    }

    #[test]
    fn test_binary() {
        assert_eq!(NumberParser::parse("%11111111").unwrap(), 255);
        assert_eq!(NumberParser::parse("%10101010").unwrap(), 0xAA);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(NumberParser::parse("0").unwrap(), 0);
        assert_eq!(NumberParser::parse("255").unwrap(), 255);
        assert_eq!(NumberParser::parse("65535").unwrap(), 65535);
    }

    #[test]
    fn test_invalid() {
        assert!(NumberParser::parse("$").is_err());
        assert!(NumberParser::parse("$-1").is_err());
        assert!(NumberParser::parse("%102").is_err());
        assert!(NumberParser::parse("12AB").is_err());
        assert!(NumberParser::parse("LABEL").is_err());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(NumberFormat::detect("$FF"), Some(NumberFormat::Hexadecimal));
        assert_eq!(NumberFormat::detect("%1"), Some(NumberFormat::Binary));
        assert_eq!(NumberFormat::detect("42"), Some(NumberFormat::Decimal));
        assert_eq!(NumberFormat::detect("START"), None);
        assert_eq!(NumberFormat::detect(""), None);
    }
}
