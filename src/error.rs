//! Engine error taxonomy.
//!
//! Grounded on the teacher's `InterpreterError`/`RuntimeError` split: a
//! `Breakpoint` is a distinguished, recoverable status the engine can
//! return from `step()` rather than propagate (mirrors
//! `RuntimeError::Recoverable`), while every other variant propagates
//! through `?` and is fatal for whoever called into the engine — here
//! that's `primitive::PrimitiveDriver` rather than a transactor.

use thiserror::Error;

/// Every way an engine operation can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A value fell outside the range an operation accepts (e.g. a shift
    /// amount, an immediate, a limb value).
    #[error("value out of range for {what}: {value} (max {max})")]
    ValueRange {
        /// What the value was meant to be (free text, e.g. "limb value").
        what: &'static str,
        /// The offending value, rendered for display.
        value: i64,
        /// The largest value that would have been accepted.
        max: i64,
    },

    /// An index (register number, limb index, DMEM address, ...) fell
    /// outside its valid bound.
    #[error("{what} index {index} out of range (bound {bound})")]
    IndexRange {
        /// What was being indexed (free text, e.g. "limb", "gpr", "dmem").
        what: &'static str,
        /// The offending index.
        index: usize,
        /// The exclusive upper bound that was violated.
        bound: usize,
    },

    /// Internal call/loop stack bookkeeping found an empty stack where a
    /// frame was expected. A `ret` with nothing on the call stack is not
    /// this error — that's a clean halt at the outermost primitive frame.
    #[error("call stack underflow")]
    CallStackUnderrun,

    /// `call`/`jal`-style instruction with the call stack already full.
    #[error("call stack overflow (depth limit {depth_limit})")]
    CallStackOverflow {
        /// The stack's configured depth limit.
        depth_limit: usize,
    },

    /// `loop`/`loopi` with the loop stack already full.
    #[error("loop stack overflow (depth limit {depth_limit})")]
    LoopStackOverflow {
        /// The stack's configured depth limit.
        depth_limit: usize,
    },

    /// `loop`/`loopi` with an iteration count of zero.
    #[error("loop with zero iteration count")]
    LoopZero,

    /// The decoder contract rejected or could not produce an instruction
    /// stream (malformed encoding, truncated program, ...).
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Execution stopped at a breakpoint PC. Recoverable: the caller may
    /// resume by stepping again.
    #[error("breakpoint hit at pc={pc}")]
    Breakpoint {
        /// The program counter the breakpoint fired at.
        pc: u32,
    },
}

impl EngineError {
    /// `true` for the one variant a caller is expected to resume from
    /// rather than treat as fatal.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Breakpoint { .. })
    }
}
