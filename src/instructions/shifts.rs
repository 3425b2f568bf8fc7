//! Shift and rotate handlers.
//!
//! These operate either on the accumulator or in place on memory, depending
//! on the resolved operand. The carry flag receives the bit shifted out and
//! Z/N are set from the result (LSR's N is therefore always clear).

use crate::addressing::Operand;
use crate::cpu::Cpu;
use crate::flags::C;
use crate::memory::MemoryBus;

fn read_operand<M: MemoryBus>(cpu: &Cpu<M>, operand: Operand) -> u8 {
    match operand {
        Operand::Accumulator => cpu.a,
        Operand::Address(addr) => cpu.memory.read(addr),
        Operand::None => unreachable!("shift operand is accumulator or memory"),
    }
}

fn write_operand<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, value: u8) {
    match operand {
        Operand::Accumulator => cpu.a = value,
        Operand::Address(addr) => cpu.memory.write(addr, value),
        Operand::None => unreachable!("shift operand is accumulator or memory"),
    }
}

/// ASL - Shift Left One Bit (Memory or Accumulator).
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    let result = value << 1;

    cpu.p.set_if(C, value & 0x80 != 0);
    write_operand(cpu, operand, result);
    cpu.p.update_nz(result);
}

/// LSR - Shift One Bit Right (Memory or Accumulator).
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    let result = value >> 1;

    cpu.p.set_if(C, value & 0x01 != 0);
    write_operand(cpu, operand, result);
    cpu.p.update_nz(result);
}

/// ROL - Rotate One Bit Left (Memory or Accumulator).
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    let result = (value << 1) | cpu.p.is_set(C) as u8;

    cpu.p.set_if(C, value & 0x80 != 0);
    write_operand(cpu, operand, result);
    cpu.p.update_nz(result);
}

/// ROR - Rotate One Bit Right (Memory or Accumulator).
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = read_operand(cpu, operand);
    let result = (value >> 1) | ((cpu.p.is_set(C) as u8) << 7);

    cpu.p.set_if(C, value & 0x01 != 0);
    write_operand(cpu, operand, result);
    cpu.p.update_nz(result);
}
