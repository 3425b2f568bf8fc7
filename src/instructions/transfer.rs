//! Register transfer handlers. All set Z/N from the destination except
//! TXS, which architecturally touches no flags.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// TAX - Transfer Accumulator to Index X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.a;
    cpu.p.update_nz(cpu.x);
}

/// TAY - Transfer Accumulator to Index Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.a;
    cpu.p.update_nz(cpu.y);
}

/// TXA - Transfer Index X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.x;
    cpu.p.update_nz(cpu.a);
}

/// TYA - Transfer Index Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.y;
    cpu.p.update_nz(cpu.a);
}

/// TSX - Transfer Stack Pointer to Index X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.sp;
    cpu.p.update_nz(cpu.x);
}

/// TXS - Transfer Index X to Stack Register. Flags untouched.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x;
}
