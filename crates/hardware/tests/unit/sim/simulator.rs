//! Simulator pacing and presenter notification.

use mipsim_core::asm::assemble;
use mipsim_core::config::Config;
use mipsim_core::core::HaltReason;
use mipsim_core::sim::{NullPresenter, RunOutcome, Simulator};
use mockall::Sequence;
use mockall::predicate::eq;

use crate::common::harness::TestContext;
use crate::common::mocks::presenter::MockStepPresenter;

#[test]
fn test_presenter_sees_each_step_then_halt() {
    let program = assemble(&["addi $t0, $zero, 1", "li $v0, 10", "syscall"]);
    let mut sim = Simulator::new(&program, Config::default());

    let mut seq = Sequence::new();
    let mut presenter = MockStepPresenter::new();
    let _ = presenter
        .expect_on_step()
        .times(3)
        .in_sequence(&mut seq)
        .returning(|_, _, _| ());
    let _ = presenter
        .expect_on_halt()
        .with(eq(HaltReason::NormalExit), mockall::predicate::always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| ());

    assert_eq!(sim.run(&mut presenter), RunOutcome::Halted(HaltReason::NormalExit));
}

#[test]
fn test_steps_after_halt_do_not_notify() {
    let program = assemble(&["syscall"]);
    let mut sim = Simulator::new(&program, Config::default());

    let mut presenter = MockStepPresenter::new();
    let _ = presenter.expect_on_step().times(2).returning(|_, _, _| ());
    let _ = presenter.expect_on_halt().times(1).returning(|_, _| ());

    // v0 is 0, so the syscall is unknown; the next fetch runs off the end.
    let _ = sim.step_once(&mut presenter);
    assert!(!sim.engine().is_halted());
    let _ = sim.run(&mut presenter);
    assert!(sim.engine().is_halted());
    let _ = sim.step_once(&mut presenter);
}

#[test]
fn test_step_limit_stops_infinite_loop() {
    let mut config = Config::default();
    config.general.max_steps = Some(25);
    let mut ctx = TestContext::with_config("spin: j spin", config);

    assert_eq!(ctx.run(), RunOutcome::StepLimit { steps: 25 });
    assert!(!ctx.sim.engine().is_halted());
    assert_eq!(ctx.stats().jump, 25);
    assert!(ctx.presenter.halts.is_empty());
}

#[test]
fn test_null_presenter_runs_to_completion() {
    let program = assemble(&["li $v0, 10", "syscall"]);
    let mut sim = Simulator::new(&program, Config::default());
    assert_eq!(
        sim.run(&mut NullPresenter),
        RunOutcome::Halted(HaltReason::NormalExit)
    );
    assert_eq!(sim.config(), &Config::default());
}

#[test]
fn test_single_stepping_matches_run() {
    let source = "addi $t0, $zero, 4\nloop: addi $t0, $t0, -1\nbne $t0, $zero, loop\nli $v0, 10\nsyscall";

    let mut stepped = TestContext::new(source);
    while !stepped.sim.engine().is_halted() {
        let _ = stepped.step();
    }
    let mut ran = TestContext::new(source);
    let _ = ran.run();

    assert_eq!(stepped.sim.engine().snapshot(), ran.sim.engine().snapshot());
    assert_eq!(stepped.presenter.events, ran.presenter.events);
}
