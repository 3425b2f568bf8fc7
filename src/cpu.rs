//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## Execution Model
//!
//! The emulator is instruction-granular: each call to [`Cpu::step`] executes
//! one complete instruction and charges its full cycle cost (base cycles
//! plus page-crossing and branch surcharges) to the cycle counter. The loop
//! never fails; abnormal conditions park the CPU in a [`Halt`] state and
//! subsequent `step` calls are no-ops until the next reset.

use crate::addressing::Operand;
use crate::disassembler;
use crate::flags::{Status, B, C, D, I, N, V, Z};
use crate::instructions::{
    alu, branches, control, flag_ops, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::MemoryBus;
use crate::opcodes::{OpcodeMetadata, OPCODE_TABLE};
use crate::trap::TrapDetector;

/// NMI vector location (low byte; high byte at +1).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector location; the PC is loaded from here on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location; BRK loads the PC from here.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base of the hardware stack page; the effective stack address is
/// `STACK_BASE | SP`.
pub const STACK_BASE: u16 = 0x0100;

/// Why the CPU stopped, if it has.
///
/// Halting is one-way for a run: once the state leaves `Continue`, further
/// [`Cpu::step`] calls do nothing until [`Cpu::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// Normal running state.
    Continue,

    /// The PC reached the configured stop address. Conformance tests use
    /// this as their pass signal.
    Success,

    /// The trap detector saw the program stop making progress.
    Trap,

    /// The fetched opcode has no documented table entry.
    UnknownInstruction,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via [`MemoryBus`]; the CPU owns
/// its memory for the duration of a run and hosts can inspect it between
/// steps through [`Cpu::memory`] / [`Cpu::memory_mut`].
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatMemory, Halt, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xA9, 0x00]); // LDA #$00
///
/// let mut cpu = Cpu::new(memory);
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0x00);
/// assert_eq!(cpu.pc(), 0x8002);
/// assert_eq!(cpu.total_cycles(), 2);
/// assert_eq!(cpu.halt(), Halt::Continue);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Stack pointer; the effective address is `STACK_BASE | sp`.
    pub(crate) sp: u8,

    /// Program counter.
    pub(crate) pc: u16,

    /// Packed status register.
    pub(crate) p: Status,

    /// Memory bus implementation.
    pub(crate) memory: M,

    /// Surcharges recorded by the current instruction's handler
    /// (branch-taken and branch-page-cross cycles).
    pub(crate) extra_cycles: u8,

    halt: Halt,
    total_cycles: u64,
    trap: TrapDetector,

    /// Halt with [`Halt::Success`] when the PC equals this address, checked
    /// before executing. `None` disables the check.
    pub stop_on_pc: Option<u16>,

    /// Print a disassembled trace line for every instruction.
    pub trace: bool,

    /// Feed the trap detector and halt when the program stops progressing.
    pub trap_detect: bool,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU around the given memory and performs a reset.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            pc: 0,
            p: Status::new(),
            memory,
            extra_cycles: 0,
            halt: Halt::Continue,
            total_cycles: 0,
            trap: TrapDetector::new(),
            stop_on_pc: None,
            trace: false,
            trap_detect: false,
        };
        cpu.reset();
        cpu
    }

    /// Resets the processor to its power-on state.
    ///
    /// A is 0xAA (arbitrary but observable), X and Y are zero, SP is 0xFF,
    /// P is `0b0011_0100` (reserved, break, and interrupt-disable set), the
    /// PC is loaded from the reset vector, the cycle counter is zeroed, and
    /// any halt condition is cleared.
    pub fn reset(&mut self) {
        self.a = 0xAA;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFF;
        self.p = Status::from_byte(0b0011_0100);
        self.pc = self.memory.read_word(RESET_VECTOR);
        self.extra_cycles = 0;
        self.halt = Halt::Continue;
        self.total_cycles = 0;
        self.trap.clear();
    }

    /// Executes one complete instruction.
    ///
    /// Does nothing once the CPU has halted. The halt checks (stop address,
    /// unknown opcode, trap) all fire *before* the instruction at the
    /// current PC executes.
    pub fn step(&mut self) {
        if self.halt != Halt::Continue {
            return;
        }

        if self.stop_on_pc == Some(self.pc) {
            self.halt = Halt::Success;
            return;
        }

        let opcode = self.memory.read(self.pc);
        let metadata = &OPCODE_TABLE[opcode as usize];
        if !metadata.is_documented() {
            self.halt = Halt::UnknownInstruction;
            return;
        }

        let (operand, page_crossed) = metadata.addressing_mode.resolve(self);

        if self.trace {
            self.print_trace(opcode);
        }

        if self.trap_detect {
            self.trap.push(self.pc);
            if self.trap.has_trap() {
                self.halt = Halt::Trap;
                return;
            }
        }

        self.pc = self.pc.wrapping_add(metadata.size_bytes as u16);
        self.extra_cycles = 0;

        self.execute(metadata, operand);

        let mut cycles = metadata.base_cycles as u64 + self.extra_cycles as u64;
        if page_crossed {
            cycles += 1;
        }
        self.total_cycles += cycles;
    }

    /// Steps until at least `cycle_budget` cycles have elapsed or the CPU
    /// halts. Returns the cycles actually consumed (instruction granularity
    /// may overshoot the budget slightly).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.total_cycles;
        let target = start + cycle_budget;

        while self.total_cycles < target && self.halt == Halt::Continue {
            self.step();
        }

        self.total_cycles - start
    }

    fn execute(&mut self, metadata: &OpcodeMetadata, operand: Operand) {
        match metadata.mnemonic {
            "ADC" => alu::adc(self, operand.address()),
            "AND" => alu::and(self, operand.address()),
            "ASL" => shifts::asl(self, operand),
            "BCC" => branches::bcc(self, operand.address()),
            "BCS" => branches::bcs(self, operand.address()),
            "BEQ" => branches::beq(self, operand.address()),
            "BIT" => alu::bit(self, operand.address()),
            "BMI" => branches::bmi(self, operand.address()),
            "BNE" => branches::bne(self, operand.address()),
            "BPL" => branches::bpl(self, operand.address()),
            "BRK" => control::brk(self),
            "BVC" => branches::bvc(self, operand.address()),
            "BVS" => branches::bvs(self, operand.address()),
            "CLC" => flag_ops::clc(self),
            "CLD" => flag_ops::cld(self),
            "CLI" => flag_ops::cli(self),
            "CLV" => flag_ops::clv(self),
            "CMP" => alu::cmp(self, operand.address()),
            "CPX" => alu::cpx(self, operand.address()),
            "CPY" => alu::cpy(self, operand.address()),
            "DEC" => inc_dec::dec(self, operand.address()),
            "DEX" => inc_dec::dex(self),
            "DEY" => inc_dec::dey(self),
            "EOR" => alu::eor(self, operand.address()),
            "INC" => inc_dec::inc(self, operand.address()),
            "INX" => inc_dec::inx(self),
            "INY" => inc_dec::iny(self),
            "JMP" => control::jmp(self, operand.address()),
            "JSR" => control::jsr(self, operand.address()),
            "LDA" => load_store::lda(self, operand.address()),
            "LDX" => load_store::ldx(self, operand.address()),
            "LDY" => load_store::ldy(self, operand.address()),
            "LSR" => shifts::lsr(self, operand),
            "NOP" => control::nop(self),
            "ORA" => alu::ora(self, operand.address()),
            "PHA" => stack::pha(self),
            "PHP" => stack::php(self),
            "PLA" => stack::pla(self),
            "PLP" => stack::plp(self),
            "ROL" => shifts::rol(self, operand),
            "ROR" => shifts::ror(self, operand),
            "RTI" => control::rti(self),
            "RTS" => control::rts(self),
            "SBC" => alu::sbc(self, operand.address()),
            "SEC" => flag_ops::sec(self),
            "SED" => flag_ops::sed(self),
            "SEI" => flag_ops::sei(self),
            "STA" => load_store::sta(self, operand.address()),
            "STX" => load_store::stx(self, operand.address()),
            "STY" => load_store::sty(self, operand.address()),
            "TAX" => transfer::tax(self),
            "TAY" => transfer::tay(self),
            "TSX" => transfer::tsx(self),
            "TXA" => transfer::txa(self),
            "TXS" => transfer::txs(self),
            "TYA" => transfer::tya(self),
            _ => unreachable!("undocumented opcode reached dispatch"),
        }
    }

    // ========== Stack Engine ==========

    /// Pushes a byte onto the hardware stack. SP wraps at 8 bits.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte from the hardware stack. SP wraps at 8 bits.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Takes a branch to `target`: one extra cycle, plus one more when the
    /// target sits on a different page than the instruction that follows
    /// the branch (the PC has already advanced past it).
    pub(crate) fn branch(&mut self, target: u16) {
        self.extra_cycles += 1;
        if self.pc & 0xFF00 != target & 0xFF00 {
            self.extra_cycles += 1;
        }
        self.pc = target;
    }

    // ========== Trace Output ==========

    /// Prints one trace line for the instruction at the current PC:
    /// `PPPP : OO  MNE OPERAND  NVRBDIZC  A:AA X:XX Y:YY  SP:SSSS`.
    fn print_trace(&self, opcode: u8) {
        let text = disassembler::disassemble(&self.memory, self.pc)
            .map(|d| d.text)
            .unwrap_or_default();

        println!(
            "{:04x} : {:02x}  {:<11} {}  A:{:02x} X:{:02x} Y:{:02x}  SP:{:04x}",
            self.pc,
            opcode,
            text,
            self.flags_string(),
            self.a,
            self.x,
            self.y,
            STACK_BASE | self.sp as u16,
        );
    }

    fn flags_string(&self) -> String {
        [
            (N, 'N'),
            (V, 'V'),
            (0, 'R'),
            (B, 'B'),
            (D, 'D'),
            (I, 'I'),
            (Z, 'Z'),
            (C, 'C'),
        ]
        .iter()
        .map(|&(flag, letter)| {
            // the reserved bit always reads as set
            if flag == 0 || self.p.is_set(flag) {
                letter
            } else {
                '-'
            }
        })
        .collect()
    }

    // ========== Accessors ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the stack pointer. The full stack address is
    /// `STACK_BASE | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the packed status register.
    pub fn status(&self) -> Status {
        self.p
    }

    /// Returns why the CPU stopped, or [`Halt::Continue`] while running.
    pub fn halt(&self) -> Halt {
        self.halt
    }

    /// Returns the total machine cycles consumed since the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus so hosts and tests can
    /// patch memory between steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Setters (test harness and host overrides) ==========

    /// Overrides the program counter, e.g. to jump past ROM setup code.
    pub fn set_pc(&mut self, addr: u16) {
        self.pc = addr;
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Returns a mutable reference to the status register.
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.p
    }
}
