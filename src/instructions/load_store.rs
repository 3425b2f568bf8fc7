//! Load and store handlers. Loads set Z/N from the loaded byte; stores
//! leave the flags untouched.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// LDA - Load Accumulator with Memory.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.a = cpu.memory.read(address);
    cpu.p.update_nz(cpu.a);
}

/// LDX - Load Index X with Memory.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.x = cpu.memory.read(address);
    cpu.p.update_nz(cpu.x);
}

/// LDY - Load Index Y with Memory.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.y = cpu.memory.read(address);
    cpu.p.update_nz(cpu.y);
}

/// STA - Store Accumulator in Memory.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.memory.write(address, cpu.a);
}

/// STX - Store Index X in Memory.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.memory.write(address, cpu.x);
}

/// STY - Store Index Y in Memory.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    cpu.memory.write(address, cpu.y);
}
