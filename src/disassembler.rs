//! # Disassembler
//!
//! Converts one instruction at a time back into assembly text. Used by the
//! execution loop's trace output and available to hosts for debug display.

use crate::addressing::AddressingMode;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;

/// A single disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    /// Address of the opcode byte.
    pub address: u16,

    /// The opcode byte.
    pub opcode: u8,

    /// Instruction mnemonic.
    pub mnemonic: &'static str,

    /// Instruction size including the opcode byte.
    pub size_bytes: u8,

    /// Rendered assembly, e.g. `LDA ($40),Y`.
    pub text: String,
}

/// Disassembles the instruction at `address`.
///
/// Returns `None` when the byte at `address` is not a documented opcode.
/// Branch targets are shown resolved rather than as raw offsets.
///
/// # Examples
///
/// ```
/// use mos6502::{disassemble, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x8000, 0xA9); // LDA #$42
/// mem.write(0x8001, 0x42);
///
/// let d = disassemble(&mem, 0x8000).unwrap();
/// assert_eq!(d.text, "LDA #$42");
/// assert_eq!(d.size_bytes, 2);
/// ```
pub fn disassemble<M: MemoryBus>(memory: &M, address: u16) -> Option<Disassembly> {
    let opcode = memory.read(address);
    let metadata = &OPCODE_TABLE[opcode as usize];
    if !metadata.is_documented() {
        return None;
    }

    let byte = memory.read(address.wrapping_add(1));
    let word = memory.read_word(address.wrapping_add(1));

    let operand = match metadata.addressing_mode {
        AddressingMode::Implied => String::new(),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Immediate => format!("#${:02X}", byte),
        AddressingMode::ZeroPage => format!("${:02X}", byte),
        AddressingMode::ZeroPageX => format!("${:02X},X", byte),
        AddressingMode::ZeroPageY => format!("${:02X},Y", byte),
        AddressingMode::Absolute => format!("${:04X}", word),
        AddressingMode::AbsoluteX => format!("${:04X},X", word),
        AddressingMode::AbsoluteY => format!("${:04X},Y", word),
        AddressingMode::Indirect => format!("(${:04X})", word),
        AddressingMode::IndirectX => format!("(${:02X},X)", byte),
        AddressingMode::IndirectY => format!("(${:02X}),Y", byte),
        AddressingMode::Relative => {
            let target = address
                .wrapping_add(2)
                .wrapping_add_signed(byte as i8 as i16);
            format!("${:04X}", target)
        }
    };

    let text = if operand.is_empty() {
        metadata.mnemonic.to_string()
    } else {
        format!("{} {}", metadata.mnemonic, operand)
    };

    Some(Disassembly {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        size_bytes: metadata.size_bytes,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_implied_and_accumulator() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0xEA); // NOP
        mem.write(0x0001, 0x4A); // LSR A

        assert_eq!(disassemble(&mem, 0x0000).unwrap().text, "NOP");
        assert_eq!(disassemble(&mem, 0x0001).unwrap().text, "LSR A");
    }

    #[test]
    fn test_operand_formats() {
        let mut mem = FlatMemory::new();
        mem.load(0x0200, &[0xBD, 0x34, 0x12]); // LDA $1234,X
        mem.load(0x0203, &[0xB1, 0x40]); // LDA ($40),Y
        mem.load(0x0205, &[0x6C, 0x00, 0x04]); // JMP ($0400)

        assert_eq!(disassemble(&mem, 0x0200).unwrap().text, "LDA $1234,X");
        assert_eq!(disassemble(&mem, 0x0203).unwrap().text, "LDA ($40),Y");
        assert_eq!(disassemble(&mem, 0x0205).unwrap().text, "JMP ($0400)");
    }

    #[test]
    fn test_relative_target_resolved() {
        let mut mem = FlatMemory::new();
        mem.load(0x0400, &[0xD0, 0xFE]); // BNE $0400 (branch to self)

        assert_eq!(disassemble(&mem, 0x0400).unwrap().text, "BNE $0400");
    }

    #[test]
    fn test_unknown_opcode() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0x02);

        assert!(disassemble(&mem, 0x0000).is_none());
    }
}
