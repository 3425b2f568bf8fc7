//! ROM runner: loads a raw binary image, drives the CPU until it halts, and
//! exits 0 only when the stop address was reached.
//!
//! Conformance example (Klaus Dormann functional test):
//!
//! ```text
//! mos6502 --rom 6502_functional_test.bin --start 0x0400 --stop 0x336d --trap-detector
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;

use mos6502::{Cpu, FlatMemory, Halt};

#[derive(Parser)]
#[command(name = "mos6502", about = "Run a raw 6502 ROM image until it halts")]
struct Args {
    /// Path to a raw ROM image, loaded at $0000 (at most 64 KiB)
    #[arg(long)]
    rom: PathBuf,

    /// Override the program counter after reset (0x-prefixed hex or decimal)
    #[arg(long, value_parser = parse_addr)]
    start: Option<u16>,

    /// Halt with success when the program counter reaches this address
    #[arg(long, value_parser = parse_addr)]
    stop: Option<u16>,

    /// Print a disassembled trace line for every instruction
    #[arg(long)]
    debug: bool,

    /// Halt when the program stops making progress (stuck-loop detection)
    #[arg(long)]
    trap_detector: bool,
}

fn parse_addr(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address {s:?}: {e}"))
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let memory = FlatMemory::from_rom_file(&args.rom)
        .with_context(|| format!("loading ROM {}", args.rom.display()))?;
    info!("loaded ROM: {}", args.rom.display());

    let mut cpu = Cpu::new(memory);
    if let Some(start) = args.start {
        cpu.set_pc(start);
    }
    cpu.stop_on_pc = args.stop;
    cpu.trace = args.debug;
    cpu.trap_detect = args.trap_detector;

    info!("starting CPU at {:04x}", cpu.pc());

    while cpu.halt() == Halt::Continue {
        cpu.step();
    }

    info!("total cycles: {}", cpu.total_cycles());

    let code = match cpu.halt() {
        Halt::Success => {
            info!("CPU hit stop PC successfully");
            ExitCode::SUCCESS
        }
        Halt::Trap => {
            info!("CPU halted on trap at {:04x}", cpu.pc());
            ExitCode::FAILURE
        }
        Halt::UnknownInstruction => {
            info!("CPU halted on unknown instruction at {:04x}", cpu.pc());
            ExitCode::FAILURE
        }
        Halt::Continue => unreachable!(),
    };

    Ok(code)
}
