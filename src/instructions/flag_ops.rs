//! Status-flag set and clear handlers.

use crate::cpu::Cpu;
use crate::flags::{C, D, I, V};
use crate::memory::MemoryBus;

/// CLC - Clear Carry Flag.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.clear(C);
}

/// SEC - Set Carry Flag.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.set(C);
}

/// CLI - Clear Interrupt Disable Bit.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.clear(I);
}

/// SEI - Set Interrupt Disable Status.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.set(I);
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.clear(D);
}

/// SED - Set Decimal Mode. The flag is observable but arithmetic stays
/// binary.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.set(D);
}

/// CLV - Clear Overflow Flag.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.p.clear(V);
}
