//! Tests for INC, DEC, INX, INY, DEX, and DEY, including 8-bit wrap.

use mos6502::flags::{N, Z};
use mos6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

#[test]
fn test_inc_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x41);
    cpu.memory_mut().load(0x8000, &[0xE6, 0x10]); // INC $10

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert_eq!(cpu.total_cycles(), 5);
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.memory_mut().load(0x8000, &[0xE6, 0x10]); // INC $10

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.status().is_set(Z));
    assert!(!cpu.status().is_set(N));
}

#[test]
fn test_dec_memory_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x1235, 0x80);
    cpu.memory_mut().load(0x8000, &[0xDE, 0x34, 0x12]); // DEC $1234,X

    cpu.step();

    assert_eq!(cpu.memory().read(0x1235), 0x7F);
    assert!(!cpu.status().is_set(N));
    assert_eq!(cpu.total_cycles(), 7);
}

#[test]
fn test_dec_wraps_to_ff() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0010, 0x00);
    cpu.memory_mut().load(0x8000, &[0xC6, 0x10]); // DEC $10

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(cpu.status().is_set(N));
}

#[test]
fn test_inx_and_dex() {
    let mut cpu = setup_cpu();
    cpu.set_x(0xFF);
    cpu.memory_mut().write(0x8000, 0xE8); // INX
    cpu.memory_mut().write(0x8001, 0xCA); // DEX

    cpu.step();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.status().is_set(Z));

    cpu.step();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.status().is_set(N));
    assert_eq!(cpu.total_cycles(), 4);
}

#[test]
fn test_iny_and_dey() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x7F);
    cpu.memory_mut().write(0x8000, 0xC8); // INY
    cpu.memory_mut().write(0x8001, 0x88); // DEY

    cpu.step();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.status().is_set(N));

    cpu.step();
    assert_eq!(cpu.y(), 0x7F);
    assert!(!cpu.status().is_set(N));
}
