//! Tests for BRK and RTI.
//!
//! BRK pushes the address of the byte after its padding byte (PC+2 from the
//! opcode), then P with B and the reserved bit set, disables interrupts,
//! and jumps through the IRQ/BRK vector. RTI undoes the sequence.

use mos6502::flags::{B, C, I, U};
use mos6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu_at(start: u16) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, start as u8);
    memory.write(0xFFFD, (start >> 8) as u8);
    Cpu::new(memory)
}

#[test]
fn test_brk_full_path() {
    let mut cpu = setup_cpu_at(0xDD00);
    cpu.memory_mut().write(0xFFFE, 0x10);
    cpu.memory_mut().write(0xFFFF, 0x10);
    cpu.memory_mut().write(0xDD00, 0x00); // BRK

    cpu.step();

    assert_eq!(cpu.pc(), 0x1010);
    assert_eq!(cpu.sp(), 0xFC); // three bytes pushed

    // return address $DD02: high then low
    assert_eq!(cpu.memory().read(0x01FF), 0xDD);
    assert_eq!(cpu.memory().read(0x01FE), 0x02);

    // pushed P carries B and the reserved bit
    let pushed = cpu.memory().read(0x01FD);
    assert_eq!(pushed & (B | U), B | U);

    assert!(cpu.status().is_set(I));
    assert_eq!(cpu.total_cycles(), 7);
}

#[test]
fn test_rti_restores_pc_and_flags() {
    let mut cpu = setup_cpu_at(0xDD00);
    cpu.memory_mut().write(0xFFFE, 0x00);
    cpu.memory_mut().write(0xFFFF, 0x10);
    cpu.memory_mut().write(0xDD00, 0x00); // BRK
    cpu.memory_mut().write(0x1000, 0x40); // RTI

    cpu.status_mut().set_if(C, true);

    cpu.step(); // BRK
    cpu.step(); // RTI

    // back at the byte after BRK's padding byte
    assert_eq!(cpu.pc(), 0xDD02);
    assert_eq!(cpu.sp(), 0xFF);

    // carry survived the round trip; B is cleared on the way back
    assert!(cpu.status().is_set(C));
    assert!(!cpu.status().is_set(B));
    assert!(cpu.status().is_set(U));
    assert_eq!(cpu.total_cycles(), 7 + 6);
}

#[test]
fn test_rti_forces_reserved_clears_break() {
    let mut cpu = setup_cpu_at(0x8000);
    // hand-built interrupt frame: P=0xFF, return address $1234
    cpu.memory_mut().write(0x01FD, 0xFF);
    cpu.memory_mut().write(0x01FE, 0x34);
    cpu.memory_mut().write(0x01FF, 0x12);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x8000, 0x40); // RTI

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert!(!cpu.status().is_set(B));
    assert!(cpu.status().is_set(U));
}
