//! String and hex data literals for the data pseudo-ops
//!
//! - `"TEXT"` emits each character's low 7 bits with the high bit set.
//! - `'TEXT'` emits each character's low 7 bits with the high bit clear.
//! - anything else is a run of hex digit pairs (`4142` or `41,42`).

/// Resolve a data literal to bytes. `None` means there was nothing usable.
pub fn process_string(arg: &str) -> Option<Vec<u8>> {
    let arg = arg.trim();
    if let Some(text) = quoted(arg, '"') {
        return Some(text.chars().map(|c| (c as u32 & 0x7F) as u8 | 0x80).collect());
    }
    if let Some(text) = quoted(arg, '\'') {
        return Some(text.chars().map(|c| (c as u32 & 0x7F) as u8).collect());
    }
    hex_pairs(arg)
}

/// Inner text of a non-empty string delimited by `quote` that does not
/// itself contain the delimiter.
fn quoted(arg: &str, quote: char) -> Option<&str> {
    let inner = arg.strip_prefix(quote)?.strip_suffix(quote)?;
    if inner.is_empty() || inner.contains(quote) {
        return None;
    }
    Some(inner)
}

fn hex_pairs(arg: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = arg
        .chars()
        .filter(|&c| c != ',')
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    if digits.is_empty() || digits.len() % 2 != 0 {
        return None;
    }
    Some(digits.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect())
}
