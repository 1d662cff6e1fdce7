//! ALU function vectors on 32-bit operands.

use mipsim_core::core::signals::AluFunction;
use mipsim_core::core::units::alu::Alu;
use rstest::rstest;

const NEG1: u32 = u32::MAX;
const I32_MIN: u32 = 0x8000_0000;
const I32_MAX: u32 = 0x7FFF_FFFF;

#[rstest]
#[case(AluFunction::Add, 2, 3, 5)]
#[case(AluFunction::Add, I32_MAX, 1, I32_MIN)]
#[case(AluFunction::Add, NEG1, 1, 0)]
#[case(AluFunction::Sub, 0, 1, NEG1)]
#[case(AluFunction::Sub, I32_MIN, 1, I32_MAX)]
#[case(AluFunction::Mul, 6, 7, 42)]
#[case(AluFunction::Mul, NEG1, NEG1, 1)]
#[case(AluFunction::Mul, 0x0001_0000, 0x0001_0000, 0)]
#[case(AluFunction::And, 0xF0F0, 0xFF00, 0xF000)]
#[case(AluFunction::Or, 0xF0F0, 0x0F0F, 0xFFFF)]
#[case(AluFunction::Xor, 0xFFFF, 0x0F0F, 0xF0F0)]
#[case(AluFunction::Nor, 0, 0, NEG1)]
#[case(AluFunction::Nor, 0xFFFF_0000, 0x0000_FFFF, 0)]
#[case(AluFunction::Slt, NEG1, 0, 1)]
#[case(AluFunction::Slt, 0, NEG1, 0)]
#[case(AluFunction::Slt, I32_MIN, I32_MAX, 1)]
#[case(AluFunction::Slt, 5, 5, 0)]
#[case(AluFunction::Sll, 1, 31, I32_MIN)]
#[case(AluFunction::Sll, 3, 4, 48)]
#[case(AluFunction::Srl, I32_MIN, 31, 1)]
#[case(AluFunction::Srl, NEG1, 4, 0x0FFF_FFFF)]
#[case(AluFunction::Lui, 0, 0xFFFF, 0xFFFF_0000)]
fn test_alu(#[case] func: AluFunction, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(func, a, b), expected, "{func:?}({a:#x}, {b:#x})");
}
