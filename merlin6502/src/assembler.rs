//! Main assembler implementation

use std::collections::{HashMap, HashSet};
#[cfg(feature = "listing")]
use std::fs::File;
#[cfg(feature = "listing")]
use std::io::{self, BufWriter};
#[cfg(feature = "listing")]
use std::path::Path;

use tracing::{debug, info, trace, warn};

use crate::addressing::{describe, AddressingMode, OperandShape};
use crate::error::{AsmError, Diagnostic};
use crate::eval::ExpressionEvaluator;
use crate::listing::ListingLine;
use crate::opcodes::OpcodeTable;
use crate::parser::{parse_line, process_string, split_operand, Expr, ExpressionParser, LineError, Operand, Statement};
use crate::pseudo::PseudoOp;
use crate::symbol::SymbolTable;
use crate::Value;

pub const DEFAULT_ORIGIN: u16 = 0x8000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsmOptions {
    /// Log a listing row for every source line on the final pass.
    pub verbose: bool,
    /// Origin each pass starts from until an ORG moves it.
    pub origin: u16,
}

impl Default for AsmOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            origin: DEFAULT_ORIGIN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pass {
    First,
    Second,
}

impl Pass {
    /// Diagnostics are only recorded on the final pass, so nothing is reported twice.
    pub fn reports(self) -> bool {
        self == Pass::Second
    }
}

/// Mutable state threaded through one assembly run.
#[derive(Clone, Debug)]
pub struct AssemblerState {
    pub origin: u16,
    pub pc: u16,
    pub symbols: SymbolTable,
    /// Lines that kept an absolute mode on the first pass because the
    /// operand was still undefined. They stay absolute on the second pass.
    wide_lines: HashSet<usize>,
    /// Address each label line received on the first pass.
    label_addrs: HashMap<usize, Value>,
    diagnostics: Vec<Diagnostic>,
}

impl AssemblerState {
    pub fn new(origin: u16) -> Self {
        Self {
            origin,
            pc: origin,
            symbols: SymbolTable::new(),
            wide_lines: HashSet::new(),
            label_addrs: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Rewind origin and program counter. Symbols survive.
    pub fn begin_pass(&mut self, origin: u16) {
        self.origin = origin;
        self.pc = origin;
    }

    /// Bind `name` to the program counter. A label that lands somewhere else
    /// on the second pass is reported: lines before it were encoded with the
    /// old address.
    pub fn define_label(&mut self, name: &str, lineno: usize, pass: Pass) {
        let value = self.pc as Value;
        match pass {
            Pass::First => {
                self.label_addrs.insert(lineno, value);
            }
            Pass::Second => {
                if let Some(&from) = self.label_addrs.get(&lineno) {
                    if from != value {
                        let error = AsmError::LabelMoved {
                            name: name.to_string(),
                            from,
                            to: value,
                        };
                        self.report(pass, lineno, error);
                    }
                }
            }
        }
        self.symbols.insert(name, value);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn set_origin(&mut self, addr: u16) {
        self.origin = addr;
        self.pc = addr;
    }

    /// The only place the program counter moves forward.
    fn emit(&mut self, bytes: Vec<u8>) -> Vec<u8> {
        self.pc = self.pc.wrapping_add(bytes.len() as u16);
        bytes
    }

    fn report(&mut self, pass: Pass, line: usize, error: AsmError) {
        if pass.reports() {
            let diag = Diagnostic::new(line, error);
            warn!("{}", diag);
            self.diagnostics.push(diag);
        }
    }
}

/// Final artifact of [`Assembler6502::assemble`].
#[derive(Clone, Debug)]
pub struct Assembly {
    /// Load address: the default origin, or the last ORG seen.
    pub origin: u16,
    pub binary: Vec<u8>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
    pub listing: Vec<ListingLine>,
}

impl Assembly {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[cfg(feature = "listing")]
    pub fn print_listing(&self) -> io::Result<()> {
        crate::listing::write_listing(&self.listing, io::stdout().lock())
    }

    #[cfg(feature = "listing")]
    pub fn save_listing<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let f = BufWriter::new(File::create(path)?);
        crate::listing::write_listing(&self.listing, f)
    }
}

pub struct Assembler6502 {
    opcodes: OpcodeTable,
    options: AsmOptions,
}

impl Default for Assembler6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler6502 {
    pub fn new() -> Self {
        Self::with_options(AsmOptions::default())
    }

    pub fn with_options(options: AsmOptions) -> Self {
        Self {
            opcodes: OpcodeTable::new(),
            options,
        }
    }

    // ===== Driver =====

    /// Assemble a whole source text in two passes. The first pass collects
    /// label addresses, the second emits the final image with every forward
    /// reference defined.
    pub fn assemble(&self, src: &str) -> Assembly {
        let lines: Vec<&str> = src.lines().collect();
        let mut state = AssemblerState::new(self.options.origin);
        let mut binary = Vec::new();
        let mut listing = Vec::new();

        for pass in [Pass::First, Pass::Second] {
            state.begin_pass(self.options.origin);
            binary.clear();
            listing.clear();
            debug!(?pass, origin = state.origin, "starting pass");

            for (idx, line) in lines.iter().enumerate() {
                let lineno = idx + 1;
                let bytes = self.assemble_line(&mut state, line, lineno, pass);
                if pass.reports() {
                    let entry = ListingLine {
                        lineno,
                        source: line.to_string(),
                        bytes: bytes.clone(),
                    };
                    if self.options.verbose {
                        for row in entry.rows() {
                            info!(target: "merlin6502::listing", "{}", row);
                        }
                    }
                    listing.push(entry);
                }
                binary.extend_from_slice(&bytes);
            }
        }

        debug!(
            origin = state.origin,
            bytes = binary.len(),
            symbols = state.symbols.len(),
            diagnostics = state.diagnostics.len(),
            "assembly finished"
        );
        Assembly {
            origin: state.origin,
            binary,
            symbols: state.symbols,
            diagnostics: state.diagnostics,
            listing,
        }
    }

    // ===== Per line =====

    /// Assemble one line against `state`. Failures are reported (on the
    /// final pass) and yield no bytes; they never stop the caller.
    pub fn assemble_line(&self, state: &mut AssemblerState, line: &str, lineno: usize, pass: Pass) -> Vec<u8> {
        let result = match parse_line(line) {
            Ok(stmt) => self.process(state, stmt, lineno, pass),
            Err(LineError { label, error }) => {
                if let Some(label) = label {
                    state.define_label(label, lineno, pass);
                }
                Err(error)
            }
        };
        match result {
            Ok(bytes) => bytes,
            Err(error) => {
                state.report(pass, lineno, error);
                Vec::new()
            }
        }
    }

    fn process(&self, state: &mut AssemblerState, stmt: Statement<'_>, lineno: usize, pass: Pass) -> Result<Vec<u8>, AsmError> {
        match stmt {
            Statement::Comment => Ok(Vec::new()),
            Statement::LabelOnly(label) => {
                state.define_label(label, lineno, pass);
                Ok(Vec::new())
            }
            Statement::Instruction { label, mnemonic, operand } => {
                if let Some(label) = label {
                    state.define_label(label, lineno, pass);
                }
                let bytes = self.encode_instruction(state, &mnemonic, operand.as_ref(), lineno, pass)?;
                Ok(state.emit(bytes))
            }
            Statement::PseudoOp { label, op, operand } => self.pseudo_op(state, op, label, operand, lineno, pass),
        }
    }

    // ===== Instructions =====

    fn encode_instruction(
        &self,
        state: &mut AssemblerState,
        mnemonic: &str,
        operand: Option<&Operand>,
        lineno: usize,
        pass: Pass,
    ) -> Result<Vec<u8>, AsmError> {
        if !self.opcodes.contains(mnemonic) {
            return Err(AsmError::UnknownOpcode(mnemonic.to_string()));
        }

        let candidates = operand.map_or(OperandShape::None, |o| o.shape).candidates();
        let mut mode = candidates
            .iter()
            .copied()
            .find(|&m| self.opcodes.supports(mnemonic, m))
            .ok_or_else(|| AsmError::UnknownMode {
                mnemonic: mnemonic.to_string(),
                modes: describe(candidates),
            })?;

        let (expr, value) = match operand {
            Some(operand) if mode.takes_operand() => {
                let (expr, value) = self.evaluate(state, &operand.core, lineno, pass)?;
                (Some(expr), value)
            }
            _ => (None, None),
        };

        if let Some(zp) = mode
            .zero_page_sibling()
            .filter(|&zp| self.opcodes.supports(mnemonic, zp))
        {
            match value {
                Some(v) if (0..=0xFF).contains(&v) && !state.wide_lines.contains(&lineno) => mode = zp,
                None if pass == Pass::First => {
                    state.wide_lines.insert(lineno);
                }
                _ => {}
            }
        }
        trace!(line = lineno, mnemonic, %mode, ?value, "mode selected");

        let opcode = self
            .opcodes
            .lookup(mnemonic, mode)
            .ok_or_else(|| AsmError::UnknownMode {
                mnemonic: mnemonic.to_string(),
                modes: mode.name().to_string(),
            })?;

        let v = value.unwrap_or(0);
        let mut bytes = vec![opcode];
        match mode {
            AddressingMode::Relative => bytes.push(branch_offset(state.pc, value)?),
            _ if mode.operand_len() == 1 => bytes.push((v & 0xFF) as u8),
            _ if mode.operand_len() == 2 => {
                bytes.push((v & 0xFF) as u8);
                bytes.push(((v >> 8) & 0xFF) as u8);
            }
            _ => {}
        }

        if let (Some(expr), None) = (&expr, value) {
            let error = self.unresolved(state, expr, operand.map_or("", |o| o.core.as_str()));
            state.report(pass, lineno, error);
        }
        Ok(bytes)
    }

    // ===== Pseudo-ops =====

    fn pseudo_op(
        &self,
        state: &mut AssemblerState,
        op: PseudoOp,
        label: Option<&str>,
        operand: Option<&str>,
        lineno: usize,
        pass: Pass,
    ) -> Result<Vec<u8>, AsmError> {
        // EQU binds its label to the operand instead of the program counter
        if op != PseudoOp::Equ {
            if let Some(label) = label {
                state.define_label(label, lineno, pass);
            }
        }

        match op {
            PseudoOp::Asc | PseudoOp::Dci | PseudoOp::Fls | PseudoOp::Inv | PseudoOp::Hex | PseudoOp::Rev => {
                let mut data = operand
                    .and_then(process_string)
                    .ok_or_else(|| AsmError::MissingString(op.name().to_string()))?;
                if op == PseudoOp::Rev {
                    data.reverse();
                }
                if op.flips_last() {
                    if let Some(last) = data.last_mut() {
                        *last ^= 0x80;
                    }
                }
                Ok(state.emit(data))
            }
            PseudoOp::Equ => {
                let label = label.ok_or_else(|| AsmError::MissingLabel(op.name().to_string()))?;
                match self.operand_value(state, operand, lineno, pass)? {
                    Some(value) => {
                        state.symbols.insert(label, value);
                    }
                    None => {
                        state.symbols.remove(label);
                    }
                }
                Ok(Vec::new())
            }
            PseudoOp::Org => {
                if let Some(addr) = self.operand_value(state, operand, lineno, pass)? {
                    debug!(line = lineno, "origin set to ${:04X}", addr as u16);
                    state.set_origin(addr as u16);
                }
                Ok(Vec::new())
            }
            PseudoOp::Da => {
                let text = operand.ok_or_else(|| missing_operand(op))?;
                let mut words = Vec::new();
                for part in text.split(',') {
                    let v = self.operand_value(state, Some(part), lineno, pass)?.unwrap_or(0);
                    words.push((v & 0xFF) as u8);
                    words.push(((v >> 8) & 0xFF) as u8);
                }
                Ok(state.emit(words))
            }
            PseudoOp::Ds => match self.operand_value(state, operand, lineno, pass)? {
                Some(n) if (0..=0x10000).contains(&n) => Ok(state.emit(vec![0; n as usize])),
                Some(n) => Err(AsmError::Parse(format!("bad storage size {}", n))),
                None => Ok(Vec::new()),
            },
            PseudoOp::Chk => Ok(Vec::new()),
            PseudoOp::Ignored(name) => {
                if pass.reports() {
                    info!(line = lineno, "Ignored {}", name);
                }
                Ok(Vec::new())
            }
        }
    }

    /// Evaluate the operand of a value pseudo-op. An undefined result is
    /// reported here, since these ops have no placeholder encoding.
    fn operand_value(
        &self,
        state: &mut AssemblerState,
        operand: Option<&str>,
        lineno: usize,
        pass: Pass,
    ) -> Result<Option<Value>, AsmError> {
        let text = operand.ok_or_else(|| AsmError::Parse("missing operand".to_string()))?;
        let (_, core, _) = split_operand(text)?;
        let (expr, value) = self.evaluate(state, core, lineno, pass)?;
        if value.is_none() {
            let error = self.unresolved(state, &expr, core);
            state.report(pass, lineno, error);
        }
        Ok(value)
    }

    // ===== Helpers =====

    fn evaluate(&self, state: &AssemblerState, core: &str, lineno: usize, pass: Pass) -> Result<(Expr, Option<Value>), AsmError> {
        let expr = ExpressionParser::parse(core).map_err(AsmError::Parse)?;
        if expr.is_chained() && pass.reports() {
            warn!(line = lineno, "chained expression `{}` evaluated left to right", core);
        }
        let value = ExpressionEvaluator::new(&state.symbols).evaluate(&expr);
        Ok((expr, value))
    }

    fn unresolved(&self, state: &AssemblerState, expr: &Expr, core: &str) -> AsmError {
        let names = ExpressionEvaluator::new(&state.symbols).undefined(expr);
        if names.is_empty() {
            AsmError::Unresolved(core.to_string())
        } else {
            AsmError::Unresolved(names.join(", "))
        }
    }
}

fn missing_operand(op: PseudoOp) -> AsmError {
    AsmError::Parse(format!("{} needs an operand", op.name()))
}

/// Signed displacement from the byte after a two-byte branch at `pc`.
/// An undefined target encodes as zero until the next pass.
fn branch_offset(pc: u16, target: Option<Value>) -> Result<u8, AsmError> {
    let Some(target) = target else {
        return Ok(0);
    };
    let offset = target - (pc as Value + 2);
    if !(-128..=127).contains(&offset) {
        return Err(AsmError::BranchRange(offset));
    }
    let byte = if offset < 0 { offset + 256 } else { offset };
    Ok(byte as u8)
}

/// Assemble `src` with a fresh assembler.
pub fn assemble(src: &str, options: &AsmOptions) -> Assembly {
    Assembler6502::with_options(options.clone()).assemble(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(asm: &Assembler6502, state: &mut AssemblerState, text: &str) -> Vec<u8> {
        asm.assemble_line(state, text, 1, Pass::Second)
    }

    #[test]
    fn test_immediate() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " LDA #$10"), vec![0xA9, 0x10]);
        assert_eq!(state.pc, 0x8002);
    }

    #[test]
    fn test_zero_page_narrowing() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " LDA $10"), vec![0xA5, 0x10]);
        assert_eq!(line(&asm, &mut state, " LDA $1234"), vec![0xAD, 0x34, 0x12]);
        assert_eq!(line(&asm, &mut state, " LDA $10,X"), vec![0xB5, 0x10]);
        assert_eq!(line(&asm, &mut state, " LDA $10,Y"), vec![0xB9, 0x10, 0x00]);
    }

    #[test]
    fn test_no_narrowing_without_sibling() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " JMP $0010"), vec![0x4C, 0x10, 0x00]);
        assert_eq!(line(&asm, &mut state, " JSR $20"), vec![0x20, 0x20, 0x00]);
    }

    #[test]
    fn test_implied_and_accumulator() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " NOP"), vec![0xEA]);
        assert_eq!(line(&asm, &mut state, " ASL"), vec![0x0A]);
        assert_eq!(line(&asm, &mut state, " ROR A"), vec![0x6A]);
    }

    #[test]
    fn test_indirect_modes() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " JMP ($FFFC)"), vec![0x6C, 0xFC, 0xFF]);
        assert_eq!(line(&asm, &mut state, " LDA ($20),Y"), vec![0xB1, 0x20]);
        assert_eq!(line(&asm, &mut state, " STA ($20,X)"), vec![0x81, 0x20]);
    }

    #[test]
    fn test_branch_offsets() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(0x1000);
        state.symbols.insert("NEXT", 0x1002);
        state.symbols.insert("BACK", 0x1000);
        assert_eq!(line(&asm, &mut state, " BNE NEXT"), vec![0xD0, 0x00]);
        // pc is now $1002, so BACK is four bytes behind the next instruction
        assert_eq!(line(&asm, &mut state, " BEQ BACK"), vec![0xF0, 0xFC]);
    }

    #[test]
    fn test_branch_range_error() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(0x1000);
        state.symbols.insert("FAR", 0x1100);
        assert_eq!(line(&asm, &mut state, " BNE FAR"), Vec::<u8>::new());
        assert_eq!(state.pc, 0x1000);
        assert_eq!(state.diagnostics()[0].error, AsmError::BranchRange(0xFE));
    }

    #[test]
    fn test_branch_offset_bounds() {
        assert_eq!(branch_offset(0x1000, Some(0x1002 + 127)), Ok(0x7F));
        assert_eq!(branch_offset(0x1000, Some(0x1002 - 128)), Ok(0x80));
        assert_eq!(branch_offset(0x1000, Some(0x1002 + 128)), Err(AsmError::BranchRange(128)));
        assert_eq!(branch_offset(0x1000, Some(0x1002 - 129)), Err(AsmError::BranchRange(-129)));
        assert_eq!(branch_offset(0x1000, None), Ok(0));
    }

    #[test]
    fn test_errors_only_reported_on_second_pass() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert!(asm.assemble_line(&mut state, " FOO", 1, Pass::First).is_empty());
        assert!(state.diagnostics().is_empty());
        assert!(asm.assemble_line(&mut state, " FOO", 1, Pass::Second).is_empty());
        assert_eq!(state.diagnostics().len(), 1);
    }

    #[test]
    fn test_unknown_mode() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert!(line(&asm, &mut state, " STA #$10").is_empty());
        assert_eq!(
            state.diagnostics()[0].error,
            AsmError::UnknownMode {
                mnemonic: "STA".to_string(),
                modes: "immediate".to_string(),
            }
        );
    }

    #[test]
    fn test_label_defined_at_pc() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(0x2000);
        line(&asm, &mut state, " NOP");
        line(&asm, &mut state, "HERE NOP");
        assert_eq!(state.symbols.get("HERE"), Some(0x2001));
    }

    #[test]
    fn test_label_moved_between_passes() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        asm.assemble_line(&mut state, "HERE NOP", 4, Pass::First);
        state.begin_pass(DEFAULT_ORIGIN);
        state.pc = DEFAULT_ORIGIN + 2;
        asm.assemble_line(&mut state, "HERE NOP", 4, Pass::Second);
        assert_eq!(state.symbols.get("HERE"), Some(0x8002));
        assert_eq!(
            state.diagnostics()[0],
            Diagnostic::new(
                4,
                AsmError::LabelMoved {
                    name: "HERE".to_string(),
                    from: 0x8000,
                    to: 0x8002,
                }
            )
        );
    }

    #[test]
    fn test_label_in_place_is_quiet() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        for pass in [Pass::First, Pass::Second] {
            state.begin_pass(DEFAULT_ORIGIN);
            asm.assemble_line(&mut state, "HERE NOP", 1, pass);
        }
        assert!(state.diagnostics().is_empty());
    }

    #[test]
    fn test_unresolved_keeps_layout() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " JMP NOWHERE"), vec![0x4C, 0x00, 0x00]);
        assert_eq!(state.diagnostics()[0].error, AsmError::Unresolved("NOWHERE".to_string()));
    }

    #[test]
    fn test_forward_reference_stays_wide() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(asm.assemble_line(&mut state, " LDA ZP", 7, Pass::First), vec![0xAD, 0x00, 0x00]);
        state.symbols.insert("ZP", 0x10);
        state.begin_pass(DEFAULT_ORIGIN);
        assert_eq!(asm.assemble_line(&mut state, " LDA ZP", 7, Pass::Second), vec![0xAD, 0x10, 0x00]);
    }

    #[test]
    fn test_pseudo_strings() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " ASC \"AB\""), vec![0xC1, 0xC2]);
        assert_eq!(line(&asm, &mut state, " DCI \"AB\""), vec![0xC1, 0x42]);
        assert_eq!(line(&asm, &mut state, " INV 'AB'"), vec![0x41, 0xC2]);
        assert_eq!(line(&asm, &mut state, " FLS 'AB'"), vec![0x41, 0xC2]);
        assert_eq!(line(&asm, &mut state, " REV \"AB\""), vec![0xC2, 0xC1]);
        assert_eq!(line(&asm, &mut state, " HEX 4142"), vec![0x41, 0x42]);
        assert_eq!(state.pc, 0x800C);
    }

    #[test]
    fn test_missing_string() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert!(line(&asm, &mut state, " ASC").is_empty());
        assert_eq!(state.diagnostics()[0].error, AsmError::MissingString("ASC".to_string()));
    }

    #[test]
    fn test_equ_and_org() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert!(line(&asm, &mut state, "PTR EQU $FB").is_empty());
        assert_eq!(state.symbols.get("PTR"), Some(0xFB));
        assert!(line(&asm, &mut state, " ORG $C000").is_empty());
        assert_eq!((state.origin, state.pc), (0xC000, 0xC000));
        assert_eq!(line(&asm, &mut state, " STA PTR"), vec![0x85, 0xFB]);
    }

    #[test]
    fn test_equ_without_label() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert!(line(&asm, &mut state, " EQU 1").is_empty());
        assert_eq!(state.diagnostics()[0].error, AsmError::MissingLabel("EQU".to_string()));
    }

    #[test]
    fn test_define_address_and_storage() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert_eq!(line(&asm, &mut state, " DA $1234,$10"), vec![0x34, 0x12, 0x10, 0x00]);
        assert_eq!(line(&asm, &mut state, " DS 3"), vec![0, 0, 0]);
        assert_eq!(state.pc, 0x8007);
    }

    #[test]
    fn test_administrative_ops() {
        let asm = Assembler6502::new();
        let mut state = AssemblerState::new(DEFAULT_ORIGIN);
        assert!(line(&asm, &mut state, " CHK").is_empty());
        assert!(line(&asm, &mut state, " TR ON").is_empty());
        assert!(line(&asm, &mut state, " END").is_empty());
        assert!(state.diagnostics().is_empty());
        assert_eq!(state.pc, DEFAULT_ORIGIN);
    }
}
