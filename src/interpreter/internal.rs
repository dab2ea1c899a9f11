//! Small shared helpers used across the instruction-family modules.
//!
//! Grounded on the teacher's `interpreter/internal.rs` (`inc_pc`, `set_flag`
//! style plain mutators), stripped of anything tied to a blockchain
//! execution context.

use super::{FlagGroupId, FlagSet, Machine};
use crate::error::EngineError;
use crate::u256::U256;

impl Machine {
    /// Advance the program counter by one instruction.
    pub(crate) fn inc_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    /// Set the program counter directly (used by taken branches/jumps/calls).
    pub(crate) fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Charge cycles to the running total.
    pub(crate) fn charge(&mut self, cycles: super::Cycles) {
        self.cycle_count += u64::from(cycles);
    }

    /// Push a return address onto the call stack.
    pub(crate) fn push_call_stack(&mut self, return_pc: u32) -> Result<(), EngineError> {
        if self.call_stack.len() >= crate::consts::CALL_STACK_DEPTH {
            return Err(EngineError::CallStackOverflow { depth_limit: crate::consts::CALL_STACK_DEPTH });
        }
        self.call_stack.push(return_pc);
        Ok(())
    }

    /// Pop a return address off the call stack.
    pub(crate) fn pop_call_stack(&mut self) -> Result<u32, EngineError> {
        self.call_stack.pop().ok_or(EngineError::CallStackUnderrun)
    }

    /// Push a loop frame onto the loop stack.
    pub(crate) fn push_loop_stack(&mut self, entry: super::LoopEntry) -> Result<(), EngineError> {
        if entry.iter_count == 0 {
            return Err(EngineError::LoopZero);
        }
        if self.loop_stack.len() >= crate::consts::LOOP_STACK_DEPTH {
            return Err(EngineError::LoopStackOverflow { depth_limit: crate::consts::LOOP_STACK_DEPTH });
        }
        self.loop_stack.push(entry);
        Ok(())
    }

    /// PC of the innermost loop body's first instruction.
    pub(crate) fn top_loop_start_addr(&self) -> Result<u32, EngineError> {
        self.loop_stack.last().map(|e| e.start_pc).ok_or(EngineError::CallStackUnderrun)
    }

    /// PC of the innermost loop body's last instruction (inclusive).
    pub(crate) fn top_loop_end_addr(&self) -> Result<u32, EngineError> {
        self.loop_stack.last().map(|e| e.end_pc).ok_or(EngineError::CallStackUnderrun)
    }

    /// Decrement the innermost loop's remaining iteration count.
    /// Returns `true` if the loop should run again, `false` if it just
    /// consumed its last iteration (and was popped).
    pub(crate) fn dec_top_loop_count(&mut self) -> Result<bool, EngineError> {
        let entry = self.loop_stack.last_mut().ok_or(EngineError::CallStackUnderrun)?;
        entry.iter_count -= 1;
        if entry.iter_count == 0 {
            self.loop_stack.pop();
            Ok(false)
        } else {
            Ok(true)
        }
    }

    /// `true` if execution should stop before running the instruction at `pc`.
    pub(crate) fn hits_breakpoint(&self, pc: u32) -> bool {
        self.breakpoints.contains(&pc)
    }

    /// Update a flag group from an ALU result and an explicit carry/borrow,
    /// matching `set_c_z_m_l` in the reference Python backend.
    pub(crate) fn update_flags(&mut self, group: FlagGroupId, result: U256, carry: bool) {
        self.set_flags(group, FlagSet::from_result(result, carry));
    }

    /// Update only `M`/`L`/`Z` of a flag group from a result, leaving `C`
    /// as it was. Used by the logical and shift instructions, which the
    /// architecture defines as not touching carry.
    pub(crate) fn update_flags_preserve_carry(&mut self, group: FlagGroupId, result: U256) {
        let carry = self.flags(group).c;
        self.set_flags(group, FlagSet::from_result(result, carry));
    }
}
