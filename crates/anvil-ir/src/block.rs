//! Basic blocks and call/jump-table side records
//!
//! A block is a run of instructions ending in at most one terminator;
//! emitting a branch, return, throw, or jump table closes the current block
//! and opens a fresh one. Calls and jump tables carry more payload than the
//! three-address form can hold, so instructions index into per-function side
//! tables instead.

use smallvec::SmallVec;

use crate::insn::{Insn, Label};
use crate::types::Type;
use crate::value::{FuncId, Value};

/// A maximal run of non-terminating instructions
#[derive(Debug, Default)]
pub struct Block {
    pub(crate) label: Option<Label>,
    pub(crate) insns: Vec<Insn>,
    /// The block ends in an unconditional transfer; anything emitted after
    /// it (before the next label) is unreachable
    pub(crate) ends_in_dead: bool,
}

impl Block {
    /// Label bound to the start of this block, if any
    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Instructions in emission order
    pub fn insns(&self) -> &[Insn] {
        &self.insns
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// Whether control cannot fall through the end of this block
    pub fn ends_in_dead(&self) -> bool {
        self.ends_in_dead
    }
}

/// Call-site flags
pub mod call_flags {
    /// The callee never throws
    pub const NO_THROW: u8 = 0x01;
    /// The callee never returns
    pub const NO_RETURN: u8 = 0x02;
    /// Emit as a tail call if the back end can
    pub const TAIL: u8 = 0x04;
}

/// What a call instruction targets
#[derive(Debug, Clone)]
pub enum CallTarget {
    /// Another function in the same context
    Direct(FuncId),
    /// A native C function at a fixed address
    Native(usize),
    /// A function pointer value
    Indirect(Value),
    /// A function pointer loaded from a vtable slot value
    VtablePtr(Value),
}

/// Side record for a call instruction; `Insn::aux` holds the index
#[derive(Debug, Clone)]
pub struct CallInfo {
    pub name: String,
    pub target: CallTarget,
    pub signature: Type,
    /// Argument values after coercion to the parameter types
    pub args: SmallVec<[Value; 8]>,
    pub flags: u8,
    /// Pre-created destination for an aggregate return, when one is needed
    pub ret_area: Option<Value>,
}

/// Side record for a jump-table instruction; `Insn::aux` holds the index
#[derive(Debug, Clone)]
pub struct JumpTableInfo {
    pub labels: Vec<Label>,
}
