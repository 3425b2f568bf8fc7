//! Stack push and pull handlers.
//!
//! The hardware stack lives on page $01 and grows downward; pushes store
//! then decrement SP, pulls increment then load.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// PHA - Push Accumulator on Stack.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push(cpu.a);
}

/// PLA - Pull Accumulator from Stack.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.pop();
    cpu.p.update_nz(cpu.a);
}

/// PHP - Push Processor Status on Stack.
///
/// The pushed copy has B and the reserved bit set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push(cpu.p.to_pushed_byte());
}

/// PLP - Pull Processor Status from Stack.
///
/// The reserved bit is forced to 1 and B is cleared; B is never observable
/// in the live register.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let p = cpu.pop();
    cpu.p.load_popped_byte(p);
}
