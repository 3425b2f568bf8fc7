//! Tests for the BIT (Test Bits in Memory) instruction.
//!
//! Z reflects `A & M`; N and V are copied straight from bits 7 and 6 of
//! the operand; A never changes.

use mos6502::flags::{N, V, Z};
use mos6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

#[test]
fn test_bit_copies_high_bits() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.memory_mut().write(0x0010, 0b1100_0000);
    cpu.memory_mut().load(0x8000, &[0x24, 0x10]); // BIT $10

    cpu.step();

    assert!(cpu.status().is_set(N));
    assert!(cpu.status().is_set(V));
    assert!(!cpu.status().is_set(Z));
    assert_eq!(cpu.a(), 0xFF); // accumulator untouched
    assert_eq!(cpu.total_cycles(), 3);
}

#[test]
fn test_bit_zero_when_no_common_bits() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x0F);
    cpu.memory_mut().write(0x0010, 0x30);
    cpu.memory_mut().load(0x8000, &[0x24, 0x10]); // BIT $10

    cpu.step();

    assert!(cpu.status().is_set(Z));
    assert!(!cpu.status().is_set(N));
    assert!(!cpu.status().is_set(V));
}

#[test]
fn test_bit_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.memory_mut().write(0x1234, 0x80);
    cpu.memory_mut().load(0x8000, &[0x2C, 0x34, 0x12]); // BIT $1234

    cpu.step();

    assert!(cpu.status().is_set(N));
    assert!(!cpu.status().is_set(V));
    assert!(!cpu.status().is_set(Z));
    assert_eq!(cpu.total_cycles(), 4);
}
