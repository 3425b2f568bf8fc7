//! # Opcode Metadata Table
//!
//! The 256-entry dispatch table keyed by opcode byte. Each entry binds a
//! mnemonic, an addressing mode, the instruction size in bytes, and the base
//! cycle cost (page-crossing and branch surcharges are added dynamically by
//! the execution loop and the branch handler).
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! undocumented slots carry the `"???"` mnemonic; fetching one halts the CPU
//! with `Halt::UnknownInstruction`.

use crate::addressing::AddressingMode;

/// Mnemonic marking an undocumented opcode slot.
pub const UNKNOWN: &str = "???";

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Three-letter instruction name, or `"???"` for undocumented slots.
    pub mnemonic: &'static str,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Cycle cost before page-crossing and branch surcharges.
    pub base_cycles: u8,

    /// Total instruction size including the opcode byte (1-3).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Returns true for documented opcodes.
    pub const fn is_documented(&self) -> bool {
        // &str comparison is not const; the unknown marker is the only
        // entry with a zero cycle cost
        self.base_cycles != 0
    }
}

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes,
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: UNKNOWN,
    addressing_mode: AddressingMode::Implied,
    base_cycles: 0,
    size_bytes: 1,
};

/// Complete 256-entry opcode metadata table indexed by opcode byte.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;

    let mut t = [ILLEGAL; 256];

    // ADC
    t[0x69] = op("ADC", Immediate, 2, 2);
    t[0x65] = op("ADC", ZeroPage, 3, 2);
    t[0x75] = op("ADC", ZeroPageX, 4, 2);
    t[0x6D] = op("ADC", Absolute, 4, 3);
    t[0x7D] = op("ADC", AbsoluteX, 4, 3);
    t[0x79] = op("ADC", AbsoluteY, 4, 3);
    t[0x61] = op("ADC", IndirectX, 6, 2);
    t[0x71] = op("ADC", IndirectY, 5, 2);

    // AND
    t[0x29] = op("AND", Immediate, 2, 2);
    t[0x25] = op("AND", ZeroPage, 3, 2);
    t[0x35] = op("AND", ZeroPageX, 4, 2);
    t[0x2D] = op("AND", Absolute, 4, 3);
    t[0x3D] = op("AND", AbsoluteX, 4, 3);
    t[0x39] = op("AND", AbsoluteY, 4, 3);
    t[0x21] = op("AND", IndirectX, 6, 2);
    t[0x31] = op("AND", IndirectY, 5, 2);

    // ASL
    t[0x0A] = op("ASL", Accumulator, 2, 1);
    t[0x06] = op("ASL", ZeroPage, 5, 2);
    t[0x16] = op("ASL", ZeroPageX, 6, 2);
    t[0x0E] = op("ASL", Absolute, 6, 3);
    t[0x1E] = op("ASL", AbsoluteX, 7, 3);

    // branches
    t[0x90] = op("BCC", Relative, 2, 2);
    t[0xB0] = op("BCS", Relative, 2, 2);
    t[0xF0] = op("BEQ", Relative, 2, 2);
    t[0x30] = op("BMI", Relative, 2, 2);
    t[0xD0] = op("BNE", Relative, 2, 2);
    t[0x10] = op("BPL", Relative, 2, 2);
    t[0x50] = op("BVC", Relative, 2, 2);
    t[0x70] = op("BVS", Relative, 2, 2);

    // BIT
    t[0x24] = op("BIT", ZeroPage, 3, 2);
    t[0x2C] = op("BIT", Absolute, 4, 3);

    // BRK
    t[0x00] = op("BRK", Implied, 7, 1);

    // flag clears/sets
    t[0x18] = op("CLC", Implied, 2, 1);
    t[0xD8] = op("CLD", Implied, 2, 1);
    t[0x58] = op("CLI", Implied, 2, 1);
    t[0xB8] = op("CLV", Implied, 2, 1);
    t[0x38] = op("SEC", Implied, 2, 1);
    t[0xF8] = op("SED", Implied, 2, 1);
    t[0x78] = op("SEI", Implied, 2, 1);

    // CMP
    t[0xC9] = op("CMP", Immediate, 2, 2);
    t[0xC5] = op("CMP", ZeroPage, 3, 2);
    t[0xD5] = op("CMP", ZeroPageX, 4, 2);
    t[0xCD] = op("CMP", Absolute, 4, 3);
    t[0xDD] = op("CMP", AbsoluteX, 4, 3);
    t[0xD9] = op("CMP", AbsoluteY, 4, 3);
    t[0xC1] = op("CMP", IndirectX, 6, 2);
    t[0xD1] = op("CMP", IndirectY, 5, 2);

    // CPX
    t[0xE0] = op("CPX", Immediate, 2, 2);
    t[0xE4] = op("CPX", ZeroPage, 3, 2);
    t[0xEC] = op("CPX", Absolute, 4, 3);

    // CPY
    t[0xC0] = op("CPY", Immediate, 2, 2);
    t[0xC4] = op("CPY", ZeroPage, 3, 2);
    t[0xCC] = op("CPY", Absolute, 4, 3);

    // DEC
    t[0xC6] = op("DEC", ZeroPage, 5, 2);
    t[0xD6] = op("DEC", ZeroPageX, 6, 2);
    t[0xCE] = op("DEC", Absolute, 6, 3);
    t[0xDE] = op("DEC", AbsoluteX, 7, 3);

    // DEX / DEY
    t[0xCA] = op("DEX", Implied, 2, 1);
    t[0x88] = op("DEY", Implied, 2, 1);

    // EOR
    t[0x49] = op("EOR", Immediate, 2, 2);
    t[0x45] = op("EOR", ZeroPage, 3, 2);
    t[0x55] = op("EOR", ZeroPageX, 4, 2);
    t[0x4D] = op("EOR", Absolute, 4, 3);
    t[0x5D] = op("EOR", AbsoluteX, 4, 3);
    t[0x59] = op("EOR", AbsoluteY, 4, 3);
    t[0x41] = op("EOR", IndirectX, 6, 2);
    t[0x51] = op("EOR", IndirectY, 5, 2);

    // INC
    t[0xE6] = op("INC", ZeroPage, 5, 2);
    t[0xF6] = op("INC", ZeroPageX, 6, 2);
    t[0xEE] = op("INC", Absolute, 6, 3);
    t[0xFE] = op("INC", AbsoluteX, 7, 3);

    // INX / INY
    t[0xE8] = op("INX", Implied, 2, 1);
    t[0xC8] = op("INY", Implied, 2, 1);

    // JMP
    t[0x4C] = op("JMP", Absolute, 3, 3);
    t[0x6C] = op("JMP", Indirect, 5, 3);

    // JSR
    t[0x20] = op("JSR", Absolute, 6, 3);

    // LDA
    t[0xA9] = op("LDA", Immediate, 2, 2);
    t[0xA5] = op("LDA", ZeroPage, 3, 2);
    t[0xB5] = op("LDA", ZeroPageX, 4, 2);
    t[0xAD] = op("LDA", Absolute, 4, 3);
    t[0xBD] = op("LDA", AbsoluteX, 4, 3);
    t[0xB9] = op("LDA", AbsoluteY, 4, 3);
    t[0xA1] = op("LDA", IndirectX, 6, 2);
    t[0xB1] = op("LDA", IndirectY, 5, 2);

    // LDX
    t[0xA2] = op("LDX", Immediate, 2, 2);
    t[0xA6] = op("LDX", ZeroPage, 3, 2);
    t[0xB6] = op("LDX", ZeroPageY, 4, 2);
    t[0xAE] = op("LDX", Absolute, 4, 3);
    t[0xBE] = op("LDX", AbsoluteY, 4, 3);

    // LDY
    t[0xA0] = op("LDY", Immediate, 2, 2);
    t[0xA4] = op("LDY", ZeroPage, 3, 2);
    t[0xB4] = op("LDY", ZeroPageX, 4, 2);
    t[0xAC] = op("LDY", Absolute, 4, 3);
    t[0xBC] = op("LDY", AbsoluteX, 4, 3);

    // LSR
    t[0x4A] = op("LSR", Accumulator, 2, 1);
    t[0x46] = op("LSR", ZeroPage, 5, 2);
    t[0x56] = op("LSR", ZeroPageX, 6, 2);
    t[0x4E] = op("LSR", Absolute, 6, 3);
    t[0x5E] = op("LSR", AbsoluteX, 7, 3);

    // NOP
    t[0xEA] = op("NOP", Implied, 2, 1);

    // ORA
    t[0x09] = op("ORA", Immediate, 2, 2);
    t[0x05] = op("ORA", ZeroPage, 3, 2);
    t[0x15] = op("ORA", ZeroPageX, 4, 2);
    t[0x0D] = op("ORA", Absolute, 4, 3);
    t[0x1D] = op("ORA", AbsoluteX, 4, 3);
    t[0x19] = op("ORA", AbsoluteY, 4, 3);
    t[0x01] = op("ORA", IndirectX, 6, 2);
    t[0x11] = op("ORA", IndirectY, 5, 2);

    // stack
    t[0x48] = op("PHA", Implied, 3, 1);
    t[0x08] = op("PHP", Implied, 3, 1);
    t[0x68] = op("PLA", Implied, 4, 1);
    t[0x28] = op("PLP", Implied, 4, 1);

    // ROL
    t[0x2A] = op("ROL", Accumulator, 2, 1);
    t[0x26] = op("ROL", ZeroPage, 5, 2);
    t[0x36] = op("ROL", ZeroPageX, 6, 2);
    t[0x2E] = op("ROL", Absolute, 6, 3);
    t[0x3E] = op("ROL", AbsoluteX, 7, 3);

    // ROR
    t[0x6A] = op("ROR", Accumulator, 2, 1);
    t[0x66] = op("ROR", ZeroPage, 5, 2);
    t[0x76] = op("ROR", ZeroPageX, 6, 2);
    t[0x6E] = op("ROR", Absolute, 6, 3);
    t[0x7E] = op("ROR", AbsoluteX, 7, 3);

    // RTI / RTS
    t[0x40] = op("RTI", Implied, 6, 1);
    t[0x60] = op("RTS", Implied, 6, 1);

    // SBC
    t[0xE9] = op("SBC", Immediate, 2, 2);
    t[0xE5] = op("SBC", ZeroPage, 3, 2);
    t[0xF5] = op("SBC", ZeroPageX, 4, 2);
    t[0xED] = op("SBC", Absolute, 4, 3);
    t[0xFD] = op("SBC", AbsoluteX, 4, 3);
    t[0xF9] = op("SBC", AbsoluteY, 4, 3);
    t[0xE1] = op("SBC", IndirectX, 6, 2);
    t[0xF1] = op("SBC", IndirectY, 5, 2);

    // STA
    t[0x85] = op("STA", ZeroPage, 3, 2);
    t[0x95] = op("STA", ZeroPageX, 4, 2);
    t[0x8D] = op("STA", Absolute, 4, 3);
    t[0x9D] = op("STA", AbsoluteX, 5, 3);
    t[0x99] = op("STA", AbsoluteY, 5, 3);
    t[0x81] = op("STA", IndirectX, 6, 2);
    t[0x91] = op("STA", IndirectY, 6, 2);

    // STX
    t[0x86] = op("STX", ZeroPage, 3, 2);
    t[0x96] = op("STX", ZeroPageY, 4, 2);
    t[0x8E] = op("STX", Absolute, 4, 3);

    // STY
    t[0x84] = op("STY", ZeroPage, 3, 2);
    t[0x94] = op("STY", ZeroPageX, 4, 2);
    t[0x8C] = op("STY", Absolute, 4, 3);

    // transfers
    t[0xAA] = op("TAX", Implied, 2, 1);
    t[0xA8] = op("TAY", Implied, 2, 1);
    t[0xBA] = op("TSX", Implied, 2, 1);
    t[0x8A] = op("TXA", Implied, 2, 1);
    t[0x9A] = op("TXS", Implied, 2, 1);
    t[0x98] = op("TYA", Implied, 2, 1);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| m.is_documented()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_unknown_entries_marked() {
        assert_eq!(OPCODE_TABLE[0x02].mnemonic, UNKNOWN);
        assert_eq!(OPCODE_TABLE[0x02].base_cycles, 0);
        assert_eq!(OPCODE_TABLE[0x02].size_bytes, 1);
    }
}
