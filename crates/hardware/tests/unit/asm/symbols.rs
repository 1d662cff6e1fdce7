//! Label binding and redefinition.

use mipsim_core::asm::encode::j_type;
use mipsim_core::asm::{SymbolTable, assemble};
use mipsim_core::isa::instruction::Operation;

#[test]
fn test_define_returns_previous_address() {
    let mut table = SymbolTable::new();
    assert_eq!(table.define("L", 4), None);
    assert_eq!(table.define("L", 12), Some(4));
    assert_eq!(table.resolve("L"), Some(12));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_redefined_label_uses_later_address() {
    let program = assemble(&["L: syscall", "j L", "L: syscall"]);
    assert!(program.is_ok());
    assert_eq!(program.symbols.resolve("L"), Some(8));
    assert_eq!(program.instructions[1].word, Some(j_type(Operation::J, 8)));
}

#[test]
fn test_stacked_labels_share_address() {
    let program = assemble(&["syscall", "a:", "b: c: syscall"]);
    for name in ["a", "b", "c"] {
        assert_eq!(program.symbols.resolve(name), Some(4), "{name}");
    }
}
