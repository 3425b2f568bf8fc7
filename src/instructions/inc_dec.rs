//! Increment and decrement handlers. All wrap at 8 bits and set Z/N from
//! the result.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// INC - Increment Memory by One.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let value = cpu.memory.read(address).wrapping_add(1);
    cpu.memory.write(address, value);
    cpu.p.update_nz(value);
}

/// DEC - Decrement Memory by One.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, address: u16) {
    let value = cpu.memory.read(address).wrapping_sub(1);
    cpu.memory.write(address, value);
    cpu.p.update_nz(value);
}

/// INX - Increment Index X by One.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_nz(cpu.x);
}

/// INY - Increment Index Y by One.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_nz(cpu.y);
}

/// DEX - Decrement Index X by One.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_nz(cpu.x);
}

/// DEY - Decrement Index Y by One.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_nz(cpu.y);
}
