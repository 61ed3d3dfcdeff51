//! Pseudo-operations (directives)

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PseudoOp {
    /// ASCII string
    Asc,
    /// d-string: last character inverted
    Dci,
    /// Flashing string
    Fls,
    /// Inverse string
    Inv,
    /// Hex data
    Hex,
    /// Reversed string
    Rev,
    /// Define constant
    Equ,
    /// Object location during execution
    Org,
    /// Define address (16-bit little-endian words)
    Da,
    /// Define storage
    Ds,
    /// Checksum
    Chk,
    /// Listing and file-management directives with nothing to do here
    Ignored(&'static str),
}

const IGNORED: [&str; 7] = ["AST", "END", "EXP", "OBJ", "PAG", "SKP", "TR"];

impl PseudoOp {
    /// Look up an (uppercased) mnemonic in the fixed pseudo-op set.
    pub fn from_mnemonic(mnemonic: &str) -> Option<PseudoOp> {
        let op = match mnemonic {
            "ASC" => PseudoOp::Asc,
            "DCI" => PseudoOp::Dci,
            "FLS" => PseudoOp::Fls,
            "INV" => PseudoOp::Inv,
            "HEX" => PseudoOp::Hex,
            "REV" => PseudoOp::Rev,
            "EQU" => PseudoOp::Equ,
            "ORG" => PseudoOp::Org,
            "DA" => PseudoOp::Da,
            "DS" => PseudoOp::Ds,
            "CHK" => PseudoOp::Chk,
            other => return IGNORED.iter().find(|&&n| n == other).map(|&n| PseudoOp::Ignored(n)),
        };
        Some(op)
    }

    pub fn name(self) -> &'static str {
        match self {
            PseudoOp::Asc => "ASC",
            PseudoOp::Dci => "DCI",
            PseudoOp::Fls => "FLS",
            PseudoOp::Inv => "INV",
            PseudoOp::Hex => "HEX",
            PseudoOp::Rev => "REV",
            PseudoOp::Equ => "EQU",
            PseudoOp::Org => "ORG",
            PseudoOp::Da => "DA",
            PseudoOp::Ds => "DS",
            PseudoOp::Chk => "CHK",
            PseudoOp::Ignored(name) => name,
        }
    }

    /// String variants whose last emitted byte gets its high bit flipped.
    pub fn flips_last(self) -> bool {
        matches!(self, PseudoOp::Dci | PseudoOp::Fls | PseudoOp::Inv)
    }
}
