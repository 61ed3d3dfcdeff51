//! Human-readable assembly listing
//!
//! Each source line renders as `BYTES LINENO  SOURCE`, with at most three
//! bytes per row; longer output continues on byte-only rows below.

use std::io::{self, Write};

const BYTES_PER_ROW: usize = 3;

/// One source line together with the bytes it produced on the final pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    pub lineno: usize,
    pub source: String,
    pub bytes: Vec<u8>,
}

impl ListingLine {
    pub fn rows(&self) -> Vec<String> {
        let mut chunks = self.bytes.chunks(BYTES_PER_ROW);
        let first = chunks.next().map(hex_bytes).unwrap_or_default();
        let mut rows = vec![format!("{:<9} {:>4}  {}", first, self.lineno, self.source)];
        rows.extend(chunks.map(hex_bytes));
        rows
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| to_hex(b as u32, Some(2)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase hex, truncated or zero-padded to `width` digits. Without a
/// width, values below 256 get two digits and everything else four.
pub fn to_hex(value: u32, width: Option<usize>) -> String {
    let width = width.unwrap_or(if value < 256 { 2 } else { 4 });
    let masked = if width >= 8 {
        value
    } else {
        value & ((1u32 << (4 * width)) - 1)
    };
    format!("{:0width$X}", masked, width = width)
}

/// Eight binary digits, most significant first.
pub fn to_binary(value: u8) -> String {
    format!("{:08b}", value)
}

pub fn write_listing<W: Write>(lines: &[ListingLine], mut w: W) -> io::Result<()> {
    for line in lines {
        for row in line.rows() {
            writeln!(w, "{}", row)?;
        }
    }
    w.flush()
}
