//! Simulation statistics collection and reporting.
//!
//! This module tracks the executed-instruction mix of a run. It provides:
//! 1. **Classification:** Maps every operation to exactly one [`InstructionClass`].
//! 2. **Counting:** One increment per completed instruction, so the class
//!    counters always sum to `total`.
//! 3. **Reporting:** A sectioned text report for the CLI.

use std::fmt;

use serde::Serialize;

use crate::isa::instruction::Operation;

/// Reporting category of an executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InstructionClass {
    /// Arithmetic, logic, shift, multiply, and immediate ALU operations.
    Alu,
    /// `j`, `jal`, `jr`.
    Jump,
    /// `beq`, `bne`.
    Branch,
    /// `lw`, `sw`.
    Memory,
    /// `syscall`.
    Special,
    /// Comparisons (`slt`).
    Other,
}

impl From<Operation> for InstructionClass {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add
            | Operation::Sub
            | Operation::And
            | Operation::Or
            | Operation::Xor
            | Operation::Nor
            | Operation::Mul
            | Operation::Sll
            | Operation::Srl
            | Operation::Addi
            | Operation::Andi
            | Operation::Ori
            | Operation::Lui => Self::Alu,
            Operation::J | Operation::Jal | Operation::Jr => Self::Jump,
            Operation::Beq | Operation::Bne => Self::Branch,
            Operation::Lw | Operation::Sw => Self::Memory,
            Operation::Syscall => Self::Special,
            Operation::Slt => Self::Other,
        }
    }
}

/// Executed-instruction counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Instructions completed.
    pub total: u64,
    /// ALU-class instructions.
    pub alu: u64,
    /// Jump-class instructions.
    pub jump: u64,
    /// Branch-class instructions.
    pub branch: u64,
    /// Load/store instructions.
    pub memory: u64,
    /// System calls.
    pub special: u64,
    /// Everything else.
    pub other: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix"];

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

impl SimStats {
    /// Counts one completed instruction.
    pub const fn record(&mut self, class: InstructionClass) {
        self.total += 1;
        match class {
            InstructionClass::Alu => self.alu += 1,
            InstructionClass::Jump => self.jump += 1,
            InstructionClass::Branch => self.branch += 1,
            InstructionClass::Memory => self.memory += 1,
            InstructionClass::Special => self.special += 1,
            InstructionClass::Other => self.other += 1,
        }
    }

    /// Counter for a single class.
    pub const fn count(&self, class: InstructionClass) -> u64 {
        match class {
            InstructionClass::Alu => self.alu,
            InstructionClass::Jump => self.jump,
            InstructionClass::Branch => self.branch,
            InstructionClass::Memory => self.memory,
            InstructionClass::Special => self.special,
            InstructionClass::Other => self.other,
        }
    }

    /// Renders the requested sections (all of them for an empty slice).
    #[allow(clippy::cast_precision_loss)]
    pub fn render_sections(&self, sections: &[String]) -> String {
        use std::fmt::Write as _;

        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let total = self.total.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(out, "MIPS SINGLE-CYCLE SIMULATION STATISTICS");
        let _ = writeln!(out, "{RULE}");
        if want("summary") {
            let _ = writeln!(out, "sim_insts                {}", self.total);
            let _ = writeln!(out, "{THIN_RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, n) in [
                ("op.alu", self.alu),
                ("op.jump", self.jump),
                ("op.branch", self.branch),
                ("op.memory", self.memory),
                ("op.special", self.special),
                ("op.other", self.other),
            ] {
                let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n));
            }
        }
        let _ = writeln!(out, "{RULE}");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an
    /// empty slice prints everything.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total={} ALU={} Jump={} Branch={} Memory={} Special={} Other={}",
            self.total, self.alu, self.jump, self.branch, self.memory, self.special, self.other
        )
    }
}
