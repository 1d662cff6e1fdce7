//! MIPS-32 assembler and single-cycle simulator CLI.
//!
//! This binary is the external driver around `mipsim_core`. It performs:
//! 1. **Assemble:** Translate a source file to machine code (binary or hex text).
//! 2. **Run:** Assemble and execute a source file, to completion or one step at a time.

mod console;

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::asm::Program;
use mipsim_core::config::Config;
use mipsim_core::core::HaltReason;
use mipsim_core::sim::loader::{FileSource, load_program};
use mipsim_core::sim::sink::{WordFormat, write_machine_code};
use mipsim_core::sim::{RunOutcome, Simulator};

use crate::console::ConsolePresenter;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-32 subset assembler and single-cycle simulator",
    long_about = "Assemble MIPS-32 source to machine code, or assemble and run it on a single-cycle datapath model.\n\nExamples:\n  mipsim assemble prog.asm -o prog.bin\n  mipsim run prog.asm\n  mipsim run prog.asm --step"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file and write its machine code.
    Assemble {
        /// Assembly source file.
        file: String,

        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<String>,

        /// Emit hex words instead of 32-bit binary strings.
        #[arg(long)]
        hex: bool,
    },

    /// Assemble and execute a source file.
    Run {
        /// Assembly source file.
        file: String,

        /// Wait for Enter between instructions.
        #[arg(long)]
        step: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<String>,

        /// Print every executed instruction with registers and memory.
        #[arg(long)]
        trace: bool,

        /// Print the final machine state as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_tracing(trace);

    let code = match cli.command {
        Commands::Assemble { file, output, hex } => cmd_assemble(&file, output.as_deref(), hex),
        Commands::Run {
            file,
            step,
            max_steps,
            config,
            trace,
            json,
        } => cmd_run(&file, step, max_steps, config.as_deref(), trace, json),
    };
    process::exit(code);
}

fn init_tracing(trace: bool) {
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads and assembles `path`, printing diagnostics to stderr.
fn assemble_file(path: &str, config: &Config) -> Result<Program, i32> {
    let program = load_program(&FileSource::new(path), config).map_err(|e| {
        eprintln!("[!] {e}");
        1
    })?;
    for diag in &program.diagnostics {
        eprintln!("[!] {path}:{diag}");
    }
    tracing::debug!(
        path,
        slots = program.instructions.len(),
        diagnostics = program.diagnostics.len(),
        "assembled"
    );
    Ok(program)
}

/// Assembles a file and writes its machine code.
fn cmd_assemble(path: &str, output: Option<&str>, hex: bool) -> i32 {
    let program = match assemble_file(path, &Config::default()) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let format = if hex { WordFormat::Hex } else { WordFormat::Binary };

    let written = match output {
        Some(out) => File::create(out)
            .and_then(|f| write_machine_code(&program, BufWriter::new(f), format)),
        None => write_machine_code(&program, io::stdout().lock(), format),
    };
    match written {
        Ok(n) => {
            if let Some(out) = output {
                println!("[*] Wrote {n} words to {out}");
            }
            i32::from(!program.is_ok())
        }
        Err(e) => {
            eprintln!("[!] Could not write machine code: {e}");
            1
        }
    }
}

/// Assembles and runs a file; exit status 0 only on a normal exit.
fn cmd_run(
    path: &str,
    step: bool,
    max_steps: Option<u64>,
    config_path: Option<&str>,
    trace: bool,
    json: bool,
) -> i32 {
    let mut config = match config_path {
        Some(p) => match fs::read_to_string(p).map_err(|e| e.to_string()).and_then(|text| {
            Config::from_json(&text).map_err(|e| e.to_string())
        }) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[!] Invalid config {p}: {e}");
                return 1;
            }
        },
        None => Config::default(),
    };
    if max_steps.is_some() {
        config.general.max_steps = max_steps;
    }
    config.general.trace_instructions |= trace;

    let program = match assemble_file(path, &config) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let verbose = step || config.general.trace_instructions;
    let mut presenter = ConsolePresenter::new(verbose, step);
    let mut sim = Simulator::new(&program, config);
    let outcome = sim.run(&mut presenter);

    if let RunOutcome::StepLimit { steps } = outcome {
        eprintln!("\n[!] Stopped after {steps} steps (limit reached)");
    }
    sim.engine().stats().print();

    if json {
        match serde_json::to_string_pretty(&sim.engine().snapshot()) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("[!] Could not serialize snapshot: {e}"),
        }
    }

    i32::from(outcome != RunOutcome::Halted(HaltReason::NormalExit))
}
