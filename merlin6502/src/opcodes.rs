//! 6502 opcode table: mnemonic -> addressing mode -> opcode byte

use std::collections::HashMap;

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

pub struct OpcodeTable {
    modes: HashMap<&'static str, HashMap<AddressingMode, u8>>,
}

impl OpcodeTable {
    pub fn new() -> Self {
        let mut table = Self {
            modes: HashMap::new(),
        };
        table.init_implied();
        table.init_branches();
        table.init_alu();
        table.init_read_modify_write();
        table.init_load_store();
        table
    }

    /// Opcode byte for `mnemonic` in `mode`, or `None` when the mnemonic has
    /// no such mode (or is not an instruction at all).
    pub fn lookup(&self, mnemonic: &str, mode: AddressingMode) -> Option<u8> {
        self.modes.get(mnemonic).and_then(|m| m.get(&mode)).copied()
    }

    pub fn supports(&self, mnemonic: &str, mode: AddressingMode) -> bool {
        self.lookup(mnemonic, mode).is_some()
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.modes.contains_key(mnemonic)
    }

    fn insert(&mut self, mnemonic: &'static str, entries: &[(AddressingMode, u8)]) {
        self.modes
            .entry(mnemonic)
            .or_default()
            .extend(entries.iter().copied());
    }

    fn init_implied(&mut self) {
        for (mnemonic, op) in [
            ("BRK", 0x00), ("NOP", 0xEA), ("RTI", 0x40), ("RTS", 0x60),
            ("CLC", 0x18), ("SEC", 0x38), ("CLD", 0xD8), ("SED", 0xF8),
            ("CLI", 0x58), ("SEI", 0x78), ("CLV", 0xB8),
            ("TAX", 0xAA), ("TXA", 0x8A), ("TAY", 0xA8), ("TYA", 0x98),
            ("TSX", 0xBA), ("TXS", 0x9A),
            ("INX", 0xE8), ("INY", 0xC8), ("DEX", 0xCA), ("DEY", 0x88),
            ("PHA", 0x48), ("PLA", 0x68), ("PHP", 0x08), ("PLP", 0x28),
        ] {
            self.insert(mnemonic, &[(Implied, op)]);
        }
    }

    fn init_branches(&mut self) {
        for (mnemonic, op) in [
            ("BPL", 0x10), ("BMI", 0x30), ("BVC", 0x50), ("BVS", 0x70),
            ("BCC", 0x90), ("BCS", 0xB0), ("BNE", 0xD0), ("BEQ", 0xF0),
        ] {
            self.insert(mnemonic, &[(Relative, op)]);
        }
    }

    /// The eight-mode accumulator group. Every opcode is `base | mode bits`.
    fn init_alu(&mut self) {
        for (mnemonic, base) in [
            ("ORA", 0x01u8), ("AND", 0x21), ("EOR", 0x41), ("ADC", 0x61),
            ("STA", 0x81), ("LDA", 0xA1), ("CMP", 0xC1), ("SBC", 0xE1),
        ] {
            self.insert(mnemonic, &[
                (ZeroPageXIndirect, base),
                (ZeroPage, base + 0x04),
                (Absolute, base + 0x0C),
                (ZeroPageIndirectY, base + 0x10),
                (ZeroPageX, base + 0x14),
                (AbsoluteY, base + 0x18),
                (AbsoluteX, base + 0x1C),
            ]);
            // STA #imm does not exist
            if mnemonic != "STA" {
                self.insert(mnemonic, &[(Immediate, base + 0x08)]);
            }
        }
    }

    fn init_read_modify_write(&mut self) {
        for (mnemonic, acc, zp) in [
            ("ASL", Some(0x0A), 0x06u8), ("ROL", Some(0x2A), 0x26),
            ("LSR", Some(0x4A), 0x46), ("ROR", Some(0x6A), 0x66),
            ("DEC", None, 0xC6), ("INC", None, 0xE6),
        ] {
            self.insert(mnemonic, &[
                (ZeroPage, zp),
                (ZeroPageX, zp + 0x10),
                (Absolute, zp + 0x08),
                (AbsoluteX, zp + 0x18),
            ]);
            if let Some(op) = acc {
                self.insert(mnemonic, &[(Accumulator, op)]);
            }
        }
    }

    fn init_load_store(&mut self) {
        self.insert("LDX", &[
            (Immediate, 0xA2), (ZeroPage, 0xA6), (ZeroPageY, 0xB6),
            (Absolute, 0xAE), (AbsoluteY, 0xBE),
        ]);
        self.insert("LDY", &[
            (Immediate, 0xA0), (ZeroPage, 0xA4), (ZeroPageX, 0xB4),
            (Absolute, 0xAC), (AbsoluteX, 0xBC),
        ]);
        self.insert("STX", &[(ZeroPage, 0x86), (ZeroPageY, 0x96), (Absolute, 0x8E)]);
        self.insert("STY", &[(ZeroPage, 0x84), (ZeroPageX, 0x94), (Absolute, 0x8C)]);
        self.insert("CPX", &[(Immediate, 0xE0), (ZeroPage, 0xE4), (Absolute, 0xEC)]);
        self.insert("CPY", &[(Immediate, 0xC0), (ZeroPage, 0xC4), (Absolute, 0xCC)]);
        self.insert("BIT", &[(ZeroPage, 0x24), (Absolute, 0x2C)]);
        self.insert("JMP", &[(Absolute, 0x4C), (Indirect, 0x6C)]);
        self.insert("JSR", &[(Absolute, 0x20)]);
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}
