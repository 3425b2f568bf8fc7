//! Arithmetic, logic, compare, and bit-test handlers.

use crate::cpu::Cpu;
use crate::flags::{C, N, V, Z};
use crate::memory::MemoryBus;

/// Shared core of ADC and SBC: a 9-bit add of A, the operand byte, and the
/// carry-in. C takes bit 8; V is set when the operands agree in sign but
/// the result does not.
fn add_with_carry<M: MemoryBus>(cpu: &mut Cpu<M>, m: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.is_set(C) as u16;
    let sum = a as u16 + m as u16 + carry_in;
    let result = sum as u8;

    cpu.p.set_if(C, sum > 0xFF);
    cpu.p.set_if(V, (a ^ result) & (m ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.p.update_nz(result);
}

/// ADC - Add Memory to Accumulator with Carry.
///
/// Decimal mode is tracked in P but ignored; the addition is always binary.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let m = cpu.memory.read(address);
    add_with_carry(cpu, m);
}

/// SBC - Subtract Memory from Accumulator with Borrow.
///
/// Adding the bitwise complement of the operand gives the 6502's
/// carry-as-inverted-borrow semantics directly.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let m = cpu.memory.read(address);
    add_with_carry(cpu, !m);
}

/// AND - And Memory with Accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.a &= cpu.memory.read(address);
    cpu.p.update_nz(cpu.a);
}

/// ORA - Or Memory with Accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.a |= cpu.memory.read(address);
    cpu.p.update_nz(cpu.a);
}

/// EOR - Exclusive-Or Memory with Accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.a ^= cpu.memory.read(address);
    cpu.p.update_nz(cpu.a);
}

fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, address: u16) {
    let m = cpu.memory.read(address);
    cpu.p.set_if(C, register >= m);
    cpu.p.update_nz(register.wrapping_sub(m));
}

/// CMP - Compare Memory with Accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let a = cpu.a;
    compare(cpu, a, address);
}

/// CPX - Compare Memory with Index X.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let x = cpu.x;
    compare(cpu, x, address);
}

/// CPY - Compare Memory with Index Y.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let y = cpu.y;
    compare(cpu, y, address);
}

/// BIT - Test Bits in Memory with Accumulator.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of the operand.
/// A is unchanged.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let m = cpu.memory.read(address);
    cpu.p.set_if(Z, cpu.a & m == 0);
    cpu.p.set_if(N, m & 0x80 != 0);
    cpu.p.set_if(V, m & 0x40 != 0);
}
