//! Syscall Service.
//!
//! Dispatches on the service number held in `v0`:
//! - `1`: print the signed integer in `a0`.
//! - `4`: print the zero-terminated string whose address is in `a0`.
//! - `10`: exit; the engine halts normally.
//!
//! Any other number is reported as [`SyscallEvent::Unknown`] and execution
//! continues. The service never performs I/O itself; the produced event is
//! surfaced to the presenter through the step event.

use serde::Serialize;

use crate::common::constants::{
    MAX_STRING_LEN, SYSCALL_EXIT, SYSCALL_PRINT_INT, SYSCALL_PRINT_STRING,
};
use crate::common::reg::RegisterFile;
use crate::isa::abi::{REG_A0, REG_V0};
use crate::soc::Memory;

/// Observable effect of one `syscall` instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SyscallEvent {
    /// Integer output (service 1).
    PrintInt(i32),
    /// String output (service 4).
    PrintString(String),
    /// Program exit (service 10).
    Exit,
    /// Unrecognized service number; non-fatal.
    Unknown(u32),
}

impl SyscallEvent {
    /// Returns `true` if the engine must halt after this syscall.
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// Text the program asked to print, if any.
    pub fn output(&self) -> Option<String> {
        match self {
            Self::PrintInt(v) => Some(v.to_string()),
            Self::PrintString(s) => Some(s.clone()),
            Self::Exit | Self::Unknown(_) => None,
        }
    }
}

/// Services a syscall against the current register file and memory.
pub fn dispatch(regs: &RegisterFile, memory: &Memory) -> SyscallEvent {
    let service = regs.read(REG_V0);
    let arg = regs.read(REG_A0);
    match service {
        SYSCALL_PRINT_INT => SyscallEvent::PrintInt(arg as i32),
        SYSCALL_PRINT_STRING => {
            SyscallEvent::PrintString(memory.read_cstring(arg, MAX_STRING_LEN))
        }
        SYSCALL_EXIT => SyscallEvent::Exit,
        other => {
            tracing::warn!(service = other, "unknown syscall");
            SyscallEvent::Unknown(other)
        }
    }
}
