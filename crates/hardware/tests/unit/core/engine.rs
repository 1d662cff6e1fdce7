//! Engine state machine and end-to-end programs.

use mipsim_core::asm::assemble;
use mipsim_core::common::error::{DecodeError, ExecutionError};
use mipsim_core::config::Config;
use mipsim_core::core::{Engine, EngineState, HaltReason};
use mipsim_core::stats::InstructionClass;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::harness::TestContext;

const EXIT: &str = "li $v0, 10\nsyscall";

#[test]
fn test_add_program_counts_three_alu() {
    let mut ctx = TestContext::new(
        "addi $t0, $zero, 5
         addi $t1, $zero, 3
         add $t2, $t0, $t1",
    );
    let outcome = ctx.run();

    assert_eq!(ctx.reg("t2"), 8);
    let stats = ctx.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.alu, 3);
    assert_eq!(
        outcome,
        mipsim_core::sim::RunOutcome::Halted(HaltReason::DecodeError(
            DecodeError::NoInstruction { pc: 12 }
        ))
    );
}

#[test]
fn test_print_string_without_exit_runs_off_the_end() {
    let mut ctx = TestContext::new(
        ".data
         str: .asciiz \"Hi\"
         .text
         la $a0, str
         li $v0, 4
         syscall",
    );
    let _ = ctx.run();
    assert_eq!(ctx.output(), "Hi");
    assert_eq!(
        ctx.sim.engine().halt_reason(),
        Some(HaltReason::DecodeError(DecodeError::NoInstruction { pc: 16 }))
    );
}

#[test]
fn test_print_string_then_exit() {
    let mut ctx = TestContext::new(&format!(
        ".data
         str: .asciiz \"Hi\"
         .text
         la $a0, str
         li $v0, 4
         syscall
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.output(), "Hi");
    assert_eq!(ctx.sim.engine().halt_reason(), Some(HaltReason::NormalExit));
    assert_eq!(ctx.presenter.halts, vec![HaltReason::NormalExit]);
}

#[test]
fn test_exit_leaves_pc_on_syscall_and_counts_it() {
    let mut ctx = TestContext::new(EXIT);
    let _ = ctx.run();
    let engine = ctx.sim.engine();
    assert_eq!(engine.pc(), 4);
    assert_eq!(engine.stats().total, 2);
    assert_eq!(engine.stats().count(InstructionClass::Special), 1);
}

#[test]
fn test_print_int_is_signed() {
    let mut ctx = TestContext::new(&format!("li $a0, -42\nli $v0, 1\nsyscall\n{EXIT}"));
    let _ = ctx.run();
    assert_eq!(ctx.output(), "-42");
}

#[test]
fn test_unknown_syscall_continues() {
    let mut ctx = TestContext::new(&format!("li $v0, 77\nsyscall\naddi $t0, $zero, 1\n{EXIT}"));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 1);
    assert_eq!(ctx.sim.engine().halt_reason(), Some(HaltReason::NormalExit));
}

#[test]
fn test_counting_loop() {
    let mut ctx = TestContext::new(&format!(
        "addi $t0, $zero, 0
         addi $t1, $zero, 5
         loop:
         addi $t0, $t0, 1
         bne $t0, $t1, loop
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 5);
    let stats = ctx.stats();
    assert_eq!(stats.branch, 5);
    assert_eq!(stats.alu, 2 + 5 + 1);
    assert_eq!(stats.total, stats.alu + stats.branch + stats.special);
}

#[test]
fn test_beq_taken_skips_instruction() {
    let mut ctx = TestContext::new(&format!(
        "beq $zero, $zero, skip
         addi $t0, $zero, 1
         skip:
         addi $t1, $zero, 2
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 0);
    assert_eq!(ctx.reg("t1"), 2);
}

#[test]
fn test_jal_and_jr_return() {
    let mut ctx = TestContext::new(&format!(
        "jal func
         addi $t1, $zero, 9
         {EXIT}
         func:
         addi $t0, $zero, 7
         jr $ra"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 7);
    assert_eq!(ctx.reg("t1"), 9);
    assert_eq!(ctx.reg("ra"), 4);
    assert_eq!(ctx.stats().jump, 2);
}

#[test]
fn test_mul_keeps_low_word() {
    let mut ctx = TestContext::new(&format!(
        "li $t0, 0x10000
         li $t1, 0x10003
         mul $t2, $t0, $t1
         li $t3, -6
         addi $t4, $zero, 7
         mul $t5, $t3, $t4
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t2"), 0x0003_0000);
    assert_eq!(ctx.reg("t5") as i32, -42);
}

#[test]
fn test_add_wraps_at_32_bits() {
    let mut ctx = TestContext::new(&format!(
        "li $t0, 0x7FFFFFFF
         addi $t1, $t0, 1
         sub $t2, $zero, $t1
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t1"), 0x8000_0000);
    assert_eq!(ctx.reg("t2"), 0x8000_0000);
}

#[test]
fn test_logical_immediates_zero_extend() {
    let mut ctx = TestContext::new(&format!(
        "lui $t0, 0xABCD
         ori $t0, $t0, 0xFFFF
         andi $t1, $t0, 0x8000
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 0xABCD_FFFF);
    assert_eq!(ctx.reg("t1"), 0x8000);
}

#[test]
fn test_shift_and_compare() {
    let mut ctx = TestContext::new(&format!(
        "li $t0, -8
         srl $t1, $t0, 28
         sll $t2, $t1, 4
         slt $t3, $t0, $zero
         slt $t4, $zero, $t0
         nor $t5, $zero, $zero
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t1"), 0xF);
    assert_eq!(ctx.reg("t2"), 0xF0);
    assert_eq!(ctx.reg("t3"), 1);
    assert_eq!(ctx.reg("t4"), 0);
    assert_eq!(ctx.reg("t5"), u32::MAX);
    assert_eq!(ctx.stats().other, 2);
}

#[test]
fn test_store_then_load_on_stack() {
    let mut ctx = TestContext::new(&format!(
        "addi $t0, $zero, 123
         addi $sp, $sp, -4
         sw $t0, 0($sp)
         lw $t1, 0($sp)
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t1"), 123);
    assert_eq!(ctx.memory().read_word(0x7FFF_FFF8), 123);
    assert_eq!(ctx.stats().memory, 2);

    let store = ctx
        .presenter
        .events
        .iter()
        .find_map(|e| e.mem_write)
        .unwrap_or_else(|| panic!("no store event"));
    assert_eq!(store.address, 0x7FFF_FFF8);
    assert_eq!(store.old, 0);
    assert_eq!(store.new, 123);
}

#[test]
fn test_label_load_and_store() {
    let mut ctx = TestContext::new(&format!(
        ".data
         value: .word 40
         .text
         lw $t0, value
         addi $t0, $t0, 2
         sw $t0, value
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 42);
    assert_eq!(ctx.memory().read_word(0x1001_0000), 42);
}

#[test]
fn test_load_through_label_on_its_own_line() {
    let mut ctx = TestContext::new(&format!(
        ".data
         s: .asciiz \"Hi\"
         val:
         .word 7
         .text
         lw $t0, val
         {EXIT}"
    ));
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 7);
    assert_eq!(ctx.sim.engine().halt_reason(), Some(HaltReason::NormalExit));
}

#[test]
fn test_misaligned_load_halts() {
    let mut ctx = TestContext::new("addi $t0, $zero, 2\nlw $t1, 0($t0)");
    let _ = ctx.run();
    assert_eq!(
        ctx.sim.engine().halt_reason(),
        Some(HaltReason::ExecutionError {
            pc: 4,
            word: 0x8D09_0000,
            error: ExecutionError::MisalignedAccess { address: 2 },
        })
    );
    assert_eq!(ctx.stats().total, 1);
}

#[test]
fn test_misaligned_jr_fails_at_next_fetch() {
    let mut ctx = TestContext::new("addi $t0, $zero, 6\njr $t0");
    let _ = ctx.run();
    assert_eq!(
        ctx.sim.engine().halt_reason(),
        Some(HaltReason::DecodeError(DecodeError::NoInstruction { pc: 6 }))
    );
    assert_eq!(ctx.stats().jump, 1);
    assert_eq!(ctx.stats().total, 2);
}

#[test]
fn test_invalid_slot_halts_with_decode_error() {
    let mut ctx = TestContext::new("addi $t0, $zero, 1\nbogus $t0\naddi $t1, $zero, 1");
    let _ = ctx.run();
    assert_eq!(ctx.reg("t0"), 1);
    assert_eq!(ctx.reg("t1"), 0);
    assert_eq!(
        ctx.sim.engine().halt_reason(),
        Some(HaltReason::DecodeError(DecodeError::NoInstruction { pc: 4 }))
    );
}

#[test]
fn test_halted_engine_step_is_noop() {
    let program = assemble(&[EXIT]);
    let mut engine = Engine::new(&program, &Config::default());
    while !engine.is_halted() {
        let _ = engine.step();
    }
    let before = engine.snapshot();
    let ev = engine.step();
    assert_eq!(ev.word, None);
    assert_eq!(ev.state, EngineState::Halted(HaltReason::NormalExit));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_step_event_reports_register_write() {
    let mut ctx = TestContext::new("addi $t0, $zero, 5");
    let ev = ctx.step();
    assert_eq!(ev.pc, 0);
    assert_eq!(ev.next_pc, 4);
    assert_eq!(ev.disassembly, "addi t0, zero, 5");
    let write = ev.reg_write.unwrap_or_else(|| panic!("no register write"));
    assert_eq!((write.index, write.old, write.new), (8, 0, 5));
}

#[test]
fn test_initial_state() {
    let program = assemble::<&str>(&[]);
    let engine = Engine::new(&program, &Config::default());
    assert_eq!(engine.pc(), 0);
    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(engine.registers().read_named("sp"), Some(0x7FFF_FFFC));
}

#[test]
fn test_runs_are_deterministic() {
    let source = format!(
        ".data
         buf: .space 8
         .text
         la $s0, buf
         addi $t0, $zero, 3
         loop:
         sw $t0, 0($s0)
         addi $t0, $t0, -1
         bne $t0, $zero, loop
         {EXIT}"
    );
    let lines: Vec<&str> = source.lines().collect();
    let program = assemble(&lines);

    let run = || {
        let mut engine = Engine::new(&program, &Config::default());
        while !engine.is_halted() {
            let _ = engine.step();
        }
        engine.snapshot()
    };
    assert_eq!(run(), run());
}

proptest! {
    #[test]
    fn prop_zero_register_stays_zero(imm in -32768_i32..=32767, rt in 1_u32..32) {
        let source = format!("addi $zero, $zero, {imm}\nadd $zero, ${rt}, ${rt}\nori $0, $zero, 0xFFFF");
        let mut ctx = TestContext::new(&source);
        let _ = ctx.run();
        prop_assert_eq!(ctx.reg("zero"), 0);
    }
}
