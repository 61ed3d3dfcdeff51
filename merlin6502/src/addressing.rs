//! Addressing mode detection and handling

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    Absolute,
    ZeroPage,
    AbsoluteX,
    AbsoluteY,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Indirect,
    IndirectX,
    IndirectY,
    ZeroPageIndirect,
    ZeroPageXIndirect,
    ZeroPageIndirectX,
    ZeroPageIndirectY,
}

impl AddressingMode {
    pub fn name(self) -> &'static str {
        match self {
            AddressingMode::Implied => "implied",
            AddressingMode::Accumulator => "accumulator",
            AddressingMode::Immediate => "immediate",
            AddressingMode::Absolute => "absolute",
            AddressingMode::ZeroPage => "zeroPage",
            AddressingMode::AbsoluteX => "absoluteX",
            AddressingMode::AbsoluteY => "absoluteY",
            AddressingMode::ZeroPageX => "zeroPageX",
            AddressingMode::ZeroPageY => "zeroPageY",
            AddressingMode::Relative => "relative",
            AddressingMode::Indirect => "indirect",
            AddressingMode::IndirectX => "indirectX",
            AddressingMode::IndirectY => "indirectY",
            AddressingMode::ZeroPageIndirect => "zeroPageIndirect",
            AddressingMode::ZeroPageXIndirect => "zeroPageXIndirect",
            AddressingMode::ZeroPageIndirectX => "zeroPageIndirectX",
            AddressingMode::ZeroPageIndirectY => "zeroPageIndirectY",
        }
    }

    /// Number of operand bytes following the opcode byte.
    pub fn operand_len(self) -> usize {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::ZeroPageIndirect
            | AddressingMode::ZeroPageXIndirect
            | AddressingMode::ZeroPageIndirectX
            | AddressingMode::ZeroPageIndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
        }
    }

    /// The one-byte-address twin of an absolute mode, if it has one.
    pub fn zero_page_sibling(self) -> Option<AddressingMode> {
        match self {
            AddressingMode::Absolute => Some(AddressingMode::ZeroPage),
            AddressingMode::AbsoluteX => Some(AddressingMode::ZeroPageX),
            AddressingMode::AbsoluteY => Some(AddressingMode::ZeroPageY),
            _ => None,
        }
    }

    /// Whether the mode consumes a resolved operand value at all.
    pub fn takes_operand(self) -> bool {
        self.operand_len() > 0
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Syntactic operand shape, derived from the punctuation around the operand core.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandShape {
    None,
    Accumulator,
    Immediate,
    Direct,
    DirectX,
    DirectY,
    Indirect,
    IndexedIndirectX,
    IndirectIndexedX,
    IndirectIndexedY,
    IndexedIndirectY,
}

impl OperandShape {
    /// Classify an operand from its decoration. `prefix` and `suffix` are the
    /// characters stripped from either side of `core`.
    pub fn classify(prefix: &str, core: &str, suffix: &str) -> Option<OperandShape> {
        let suffix = suffix.to_ascii_uppercase();
        let shape = match (prefix, suffix.as_str()) {
            ("#", "") => OperandShape::Immediate,
            ("", "") if core == "A" => OperandShape::Accumulator,
            ("", "") => OperandShape::Direct,
            ("", ",X") => OperandShape::DirectX,
            ("", ",Y") => OperandShape::DirectY,
            ("(", ")") => OperandShape::Indirect,
            ("(", ",X)") => OperandShape::IndexedIndirectX,
            ("(", "),X") => OperandShape::IndirectIndexedX,
            ("(", "),Y") => OperandShape::IndirectIndexedY,
            ("(", ",Y)") => OperandShape::IndexedIndirectY,
            _ => return None,
        };
        Some(shape)
    }

    /// Candidate modes in priority order; the first one the opcode table
    /// knows for the mnemonic wins.
    pub fn candidates(self) -> &'static [AddressingMode] {
        use AddressingMode::*;
        match self {
            OperandShape::None => &[Implied, Accumulator],
            OperandShape::Accumulator => &[Accumulator],
            OperandShape::Immediate => &[Immediate],
            OperandShape::Direct => &[Absolute, ZeroPage, Relative],
            OperandShape::DirectX => &[AbsoluteX, ZeroPageX],
            OperandShape::DirectY => &[AbsoluteY, ZeroPageY],
            OperandShape::Indirect => &[Indirect, ZeroPageIndirect],
            OperandShape::IndexedIndirectX => &[ZeroPageXIndirect],
            OperandShape::IndirectIndexedX => &[IndirectX, ZeroPageIndirectX],
            OperandShape::IndirectIndexedY => &[IndirectY, ZeroPageIndirectY],
            OperandShape::IndexedIndirectY => &[ZeroPageIndirectY],
        }
    }
}

/// Render a candidate list the way diagnostics print it ("absolute or zeroPage").
pub fn describe(modes: &[AddressingMode]) -> String {
    modes
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(" or ")
}
