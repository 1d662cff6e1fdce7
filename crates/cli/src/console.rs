//! Console presenter.
//!
//! Prints each step as it executes: the instruction and its control signals,
//! the register file (four per row, ABI names), and touched memory. Program
//! output from syscalls is printed as it happens. In step mode the presenter
//! waits for Enter before returning control to the simulator.

use std::io::{self, BufRead, Write};

use mipsim_core::common::RegisterFile;
use mipsim_core::core::syscall::SyscallEvent;
use mipsim_core::core::{HaltReason, StepEvent};
use mipsim_core::sim::Presenter;
use mipsim_core::soc::Memory;
use mipsim_core::stats::SimStats;

/// Prints the datapath state to stdout.
#[derive(Debug)]
pub struct ConsolePresenter {
    /// Dump registers and memory after every step.
    verbose: bool,
    /// Wait for Enter after every step.
    step: bool,
}

impl ConsolePresenter {
    /// Creates a presenter; `verbose` dumps state per step, `step` pauses after each one.
    pub const fn new(verbose: bool, step: bool) -> Self {
        Self { verbose, step }
    }

    fn wait_for_enter() {
        print!("-- press Enter to continue --");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

impl Presenter for ConsolePresenter {
    fn on_step(&mut self, event: &StepEvent, registers: &RegisterFile, memory: &Memory) {
        if self.verbose {
            match event.word {
                Some(word) => println!(
                    "[{:#010x}] {word:#010x}  {}",
                    event.pc, event.disassembly
                ),
                None => println!("[{:#010x}] <no instruction>", event.pc),
            }
            if let Some(signals) = event.signals {
                println!("  {signals}");
            }
        }

        match &event.syscall {
            Some(SyscallEvent::PrintInt(v)) => println!("{v}"),
            Some(SyscallEvent::PrintString(s)) => println!("{s}"),
            Some(SyscallEvent::Unknown(code)) => eprintln!("[!] unknown syscall {code}"),
            Some(SyscallEvent::Exit) | None => {}
        }

        if self.verbose {
            print!("{registers}");
            if !memory.is_empty() {
                println!("Memory:");
                print!("{memory}");
            }
            println!();
        }

        if self.step {
            Self::wait_for_enter();
        }
    }

    fn on_halt(&mut self, reason: HaltReason, _stats: &SimStats) {
        match reason {
            HaltReason::NormalExit => println!("\n[*] Program exited normally"),
            HaltReason::DecodeError(e) => eprintln!("\n[!] Halted: {e}"),
            HaltReason::ExecutionError { pc, word, error } => {
                eprintln!("\n[!] Halted at {pc:#010x} ({word:#010x}): {error}");
            }
        }
    }
}
