//! Single-cycle fetch-decode-execute engine.
//!
//! The engine owns the program counter, register file, and memory of one run.
//! Each call to [`Engine::step`] performs exactly one instruction:
//! 1. **Fetch:** Reads the word at PC; a missing or invalid slot halts with a decode error.
//! 2. **Decode:** Resolves the operation and its control signals.
//! 3. **Dispatch:** Exactly one of syscall, jump, branch, or ALU/memory path runs.
//! 4. **Commit:** Updates PC and statistics and reports the step as a [`StepEvent`].
//!
//! Once halted, the engine stays halted; further steps are no-ops.

use serde::Serialize;

use crate::asm::Program;
use crate::asm::program::slot_index;
use crate::common::constants::{TEXT_BASE, WORD_SIZE};
use crate::common::error::{DecodeError, ExecutionError};
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::control::{alu_function, control_signals};
use crate::core::signals::ControlSignals;
use crate::core::syscall::{self, SyscallEvent};
use crate::core::units::alu::Alu;
use crate::isa::abi::REG_RA;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble_at;
use crate::isa::instruction::{Decoded, Operation};
use crate::soc::Memory;
use crate::stats::{InstructionClass, SimStats};

/// Why the engine stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HaltReason {
    /// The program called the exit syscall.
    NormalExit,
    /// Fetch or decode failed.
    DecodeError(DecodeError),
    /// Dispatch of a decoded instruction failed.
    ExecutionError {
        /// Address of the failing instruction.
        pc: u32,
        /// The failing instruction word.
        word: u32,
        /// Underlying fault.
        error: ExecutionError,
    },
}

/// Engine state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum EngineState {
    /// Ready to execute the instruction at PC.
    #[default]
    Running,
    /// Terminal state.
    Halted(HaltReason),
}

/// A register write performed by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegWrite {
    /// Destination register index.
    pub index: usize,
    /// Value before the write.
    pub old: u32,
    /// Value after the write (0 for `$zero`).
    pub new: u32,
}

/// A memory write performed by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemWrite {
    /// Word address written.
    pub address: u32,
    /// Value before the write.
    pub old: u32,
    /// Value written.
    pub new: u32,
}

/// Everything observable about one executed step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    /// PC the instruction was fetched from.
    pub pc: u32,
    /// Fetched word, if any.
    pub word: Option<u32>,
    /// Decoded operation, if decode succeeded.
    pub op: Option<Operation>,
    /// Control signals of the decoded operation.
    pub signals: Option<ControlSignals>,
    /// Disassembly of the fetched word (empty when nothing was fetched).
    pub disassembly: String,
    /// Register write, if the instruction wrote one.
    pub reg_write: Option<RegWrite>,
    /// Memory write, if the instruction stored.
    pub mem_write: Option<MemWrite>,
    /// Syscall effect, for `syscall`.
    pub syscall: Option<SyscallEvent>,
    /// PC after the step.
    pub next_pc: u32,
    /// Engine state after the step.
    pub state: EngineState,
}

impl StepEvent {
    const fn at(pc: u32, state: EngineState) -> Self {
        Self {
            pc,
            word: None,
            op: None,
            signals: None,
            disassembly: String::new(),
            reg_write: None,
            mem_write: None,
            syscall: None,
            next_pc: pc,
            state,
        }
    }
}

/// Owned, serializable view of the machine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Program counter.
    pub pc: u32,
    /// Engine state.
    pub state: EngineState,
    /// All 32 registers in index order.
    pub registers: [u32; 32],
    /// Every touched memory address.
    pub memory: Memory,
    /// Executed-instruction counters.
    pub stats: SimStats,
}

/// The execution engine.
#[derive(Clone, Debug)]
pub struct Engine {
    text: Vec<Option<u32>>,
    regs: RegisterFile,
    memory: Memory,
    pc: u32,
    state: EngineState,
    stats: SimStats,
    trace: bool,
}

impl Engine {
    /// Creates an engine in the program-start state.
    ///
    /// Registers are zero except `$sp`, memory is the program's data image,
    /// and PC is 0.
    pub fn new(program: &Program, config: &Config) -> Self {
        Self {
            text: program.instructions.iter().map(|r| r.word).collect(),
            regs: RegisterFile::with_stack_pointer(config.memory.initial_sp),
            memory: program.memory.clone(),
            pc: TEXT_BASE,
            state: EngineState::Running,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Current state.
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Returns `true` once the engine has halted.
    pub const fn is_halted(&self) -> bool {
        matches!(self.state, EngineState::Halted(_))
    }

    /// Halt reason, if halted.
    pub const fn halt_reason(&self) -> Option<HaltReason> {
        match self.state {
            EngineState::Halted(reason) => Some(reason),
            EngineState::Running => None,
        }
    }

    /// Register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Executed-instruction counters.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Captures an owned snapshot of the machine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            state: self.state,
            registers: self.regs.values(),
            memory: self.memory.clone(),
            stats: self.stats,
        }
    }

    fn fetch(&self, pc: u32) -> Option<u32> {
        self.text.get(slot_index(pc)?).copied().flatten()
    }

    fn halt(&mut self, reason: HaltReason) {
        tracing::info!(pc = self.pc, ?reason, "engine halted");
        self.state = EngineState::Halted(reason);
    }

    /// Executes one instruction.
    ///
    /// Calling `step` on a halted engine changes nothing and returns an event
    /// with no fetched word.
    pub fn step(&mut self) -> StepEvent {
        let pc = self.pc;
        if self.is_halted() {
            return StepEvent::at(pc, self.state);
        }

        let Some(word) = self.fetch(pc) else {
            self.halt(HaltReason::DecodeError(DecodeError::NoInstruction { pc }));
            return StepEvent::at(pc, self.state);
        };

        let mut ev = StepEvent::at(pc, self.state);
        ev.word = Some(word);
        ev.disassembly = disassemble_at(word, pc);

        let d = match decode(word) {
            Ok(d) => d,
            Err(e) => {
                self.halt(HaltReason::DecodeError(e));
                ev.state = self.state;
                return ev;
            }
        };
        let signals = control_signals(d.op);
        ev.op = Some(d.op);
        ev.signals = Some(signals);

        if self.trace {
            tracing::info!(pc, word, asm = %ev.disassembly, "exec");
        } else {
            tracing::debug!(pc, word, asm = %ev.disassembly, "exec");
        }

        match self.dispatch(&d, signals, &mut ev) {
            Ok(next) => {
                self.stats.record(InstructionClass::from(d.op));
                self.pc = next;
            }
            Err(error) => self.halt(HaltReason::ExecutionError { pc, word, error }),
        }

        ev.next_pc = self.pc;
        ev.state = self.state;
        ev
    }

    /// Runs the path selected by the control signals; returns the next PC.
    fn dispatch(
        &mut self,
        d: &Decoded,
        signals: ControlSignals,
        ev: &mut StepEvent,
    ) -> Result<u32, ExecutionError> {
        let pc = ev.pc;
        let seq = pc.wrapping_add(WORD_SIZE);

        if signals.syscall {
            let event = syscall::dispatch(&self.regs, &self.memory);
            let exit = event.is_exit();
            ev.syscall = Some(event);
            if exit {
                self.halt(HaltReason::NormalExit);
                return Ok(pc);
            }
            return Ok(seq);
        }

        if signals.jump {
            return match d.op {
                // A bad target surfaces as a fetch failure on the next step.
                Operation::Jr => Ok(self.regs.read(d.rs)),
                _ => {
                    if d.op == Operation::Jal {
                        self.write_reg(REG_RA, seq, ev);
                    }
                    Ok(d.jump_address())
                }
            };
        }

        if signals.branch {
            let diff = Alu::execute(
                alu_function(signals.alu_op, d.op),
                self.regs.read(d.rs),
                self.regs.read(d.rt),
            );
            let taken = match d.op {
                Operation::Beq => diff == 0,
                _ => diff != 0,
            };
            return Ok(if taken { d.branch_address(pc) } else { seq });
        }

        self.execute_alu_mem(d, signals, ev)?;
        Ok(seq)
    }

    fn execute_alu_mem(
        &mut self,
        d: &Decoded,
        signals: ControlSignals,
        ev: &mut StepEvent,
    ) -> Result<(), ExecutionError> {
        let (a, b) = match d.op {
            Operation::Sll | Operation::Srl => (self.regs.read(d.rt), d.shamt),
            Operation::Lui | Operation::Andi | Operation::Ori => {
                (self.regs.read(d.rs), d.imm_unsigned())
            }
            _ if signals.alu_src => (self.regs.read(d.rs), d.imm_signed() as u32),
            _ => (self.regs.read(d.rs), self.regs.read(d.rt)),
        };
        let alu_out = Alu::execute(alu_function(signals.alu_op, d.op), a, b);

        let mut result = alu_out;
        if signals.mem_read || signals.mem_write {
            if alu_out % WORD_SIZE != 0 {
                return Err(ExecutionError::MisalignedAccess { address: alu_out });
            }
            if signals.mem_read {
                result = self.memory.read_word(alu_out);
            }
            if signals.mem_write {
                let new = self.regs.read(d.rt);
                let old = self.memory.write_word(alu_out, new);
                ev.mem_write = Some(MemWrite {
                    address: alu_out,
                    old,
                    new,
                });
            }
        }

        if signals.reg_write {
            let dest = if signals.reg_dst { d.rd } else { d.rt };
            let value = if signals.mem_to_reg { result } else { alu_out };
            self.write_reg(dest, value, ev);
        }
        Ok(())
    }

    fn write_reg(&mut self, index: usize, value: u32, ev: &mut StepEvent) {
        let old = self.regs.read(index);
        self.regs.write(index, value);
        ev.reg_write = Some(RegWrite {
            index,
            old,
            new: self.regs.read(index),
        });
    }
}
