//! [`Machine`] implementation: architectural state (component B).
//!
//! Field layout and the `mod`/submodule split are grounded on the teacher's
//! `Interpreter<S>` (`src/interpreter.rs`): one struct holding every piece
//! of architectural state, with the actual opcode behaviour split out into
//! sibling files (`alu`, `mac`, `memory`, `gpr`, `flow`, `executors`) that
//! each `impl Machine` for their slice of the instruction set.

use crate::config::MachineConfig;
use crate::consts::*;
use crate::decode::{DecodeContext, DecodedInstruction};
use crate::error::EngineError;
use crate::u256::U256;
use std::collections::HashSet;
use std::rc::Rc;

mod alu;
mod constructors;
mod cycles;
mod executors;
mod flow;
mod gpr;
mod internal;
mod mac;
mod memory;

pub use cycles::Cycles;
pub use executors::StepOutcome;

/// One of the two independent flag groups (`M` mul-side, `X` exec-side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagGroupId {
    /// The multiply-side flag group, referred to unprefixed (`C`, `M`,
    /// `L`, `Z`) by instructions that target it.
    Mul,
    /// The exec-side flag group, referred to with an `X` prefix (`XC`,
    /// `XM`, `XL`, `XZ`) by instructions that target it.
    Exec,
}

/// The four flags carried by a single flag group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    /// Carry.
    pub c: bool,
    /// MSB of the result.
    pub m: bool,
    /// LSB of the result.
    pub l: bool,
    /// Result was zero.
    pub z: bool,
}

impl FlagSet {
    /// Derive a flag set from a result that may have produced a carry out
    /// of bit 255 (`value` is the true mathematical result, which may need
    /// more than 256 bits to represent; `carry` is supplied separately by
    /// the ALU operation that produced it rather than inferred here).
    pub fn from_result(value: U256, carry: bool) -> Self {
        FlagSet {
            c: carry,
            m: value.0[7] & 0x8000_0000 != 0,
            l: value.0[0] & 1 != 0,
            z: value.is_zero(),
        }
    }

    /// Pack as a 4-bit value: bit0=C, bit1=M, bit2=L, bit3=Z, matching
    /// `get_flags_as_bin()` in the reference Python backend.
    pub fn as_bits(&self) -> u8 {
        (self.c as u8) | ((self.m as u8) << 1) | ((self.l as u8) << 2) | ((self.z as u8) << 3)
    }
}

/// An entry on the hardware loop stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopEntry {
    /// Remaining iteration count.
    pub iter_count: u32,
    /// PC of the loop body's last instruction (inclusive).
    pub end_pc: u32,
    /// PC of the loop body's first instruction.
    pub start_pc: u32,
}

/// Architectural state of the coprocessor (component B).
///
/// Construct with [`Machine::new`] (see `interpreter::constructors`); step
/// with [`Machine::step`] (see `interpreter::executors`).
#[derive(Debug)]
pub struct Machine {
    /// Indexed wide registers `w0..w31`.
    pub(crate) wide: [U256; WIDE_REG_COUNT],
    /// The `mod` named wide register (also aliased at WSR index 0).
    pub(crate) mod_reg: U256,
    /// Data memory pointer named wide register.
    pub(crate) dmp: U256,
    /// Return-from-procedure frame pointer named wide register.
    pub(crate) rfp: U256,
    /// Loop-count named wide register.
    pub(crate) lc: U256,

    /// General purpose registers `x0..x31`; `x0` always reads zero.
    pub(crate) gpr: [u32; GPR_COUNT],

    /// Multiply-side flag group.
    pub(crate) flags_mul: FlagSet,
    /// Exec-side flag group.
    pub(crate) flags_exec: FlagSet,

    /// Data memory, word (256-bit) addressed.
    pub(crate) dmem: Vec<U256>,

    /// Decoded instruction stream. Ownership of the trait objects is
    /// shared so a caller can keep its own handle on the program it
    /// assembled.
    pub(crate) imem: Vec<Rc<dyn DecodedInstruction>>,

    /// Multiply-accumulate accumulator.
    pub(crate) acc: U256,

    /// Wide special register table; index 0 aliases `mod`.
    pub(crate) wsr: [U256; WSR_COUNT],

    /// Program counter, indexing into `imem`.
    pub(crate) pc: u32,
    /// Optional PC the engine should stop at (exclusive of executing it).
    pub(crate) stop_pc: Option<u32>,

    /// Hardware call stack, bounded to [`CALL_STACK_DEPTH`].
    pub(crate) call_stack: Vec<u32>,
    /// Hardware loop stack, bounded to [`LOOP_STACK_DEPTH`].
    pub(crate) loop_stack: Vec<LoopEntry>,

    /// PCs that should halt execution before the instruction there runs.
    pub(crate) breakpoints: HashSet<u32>,

    /// Name resolution for disassembly (`jal`/`call` targets, labels).
    pub(crate) decode_ctx: DecodeContext,

    /// Runtime switches (trace dump rendering, DMEM addressing mode).
    pub(crate) config: MachineConfig,

    /// Total cycles consumed since construction.
    pub(crate) cycle_count: u64,

    /// Set once the engine reaches a deliberate stopping point: `ecall`, or
    /// `ret` on an empty call stack (a top-level primitive's clean exit).
    /// Consulted by `step()` to stop advancing past it.
    pub(crate) halted: bool,
}

impl Machine {
    /// Current program counter.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Total cycles consumed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Read a wide register by index `0..32`.
    pub fn get_wide(&self, idx: usize) -> Result<U256, EngineError> {
        self.wide
            .get(idx)
            .copied()
            .ok_or(EngineError::IndexRange { what: "wide register", index: idx, bound: WIDE_REG_COUNT })
    }

    /// Write a wide register by index `0..32`.
    pub fn set_wide(&mut self, idx: usize, value: U256) -> Result<(), EngineError> {
        if idx >= WIDE_REG_COUNT {
            return Err(EngineError::IndexRange { what: "wide register", index: idx, bound: WIDE_REG_COUNT });
        }
        self.wide[idx] = value;
        Ok(())
    }

    /// Read a GPR by index `0..32`; `x0` always reads zero.
    pub fn get_gpr(&self, idx: usize) -> Result<u32, EngineError> {
        if idx >= GPR_COUNT {
            return Err(EngineError::IndexRange { what: "gpr", index: idx, bound: GPR_COUNT });
        }
        Ok(if idx == GPR_ZERO { 0 } else { self.gpr[idx] })
    }

    /// Write a GPR by index `0..32`; writes to `x0` are silently dropped.
    pub fn set_gpr(&mut self, idx: usize, value: u32) -> Result<(), EngineError> {
        if idx >= GPR_COUNT {
            return Err(EngineError::IndexRange { what: "gpr", index: idx, bound: GPR_COUNT });
        }
        if idx != GPR_ZERO {
            self.gpr[idx] = value;
        }
        Ok(())
    }

    /// Increment a GPR modulo 2^32, per the hardware `x0`-hardwired,
    /// wraparound-on-overflow contract.
    pub fn inc_gpr(&mut self, idx: usize) -> Result<(), EngineError> {
        let v = self.get_gpr(idx)?;
        self.set_gpr(idx, v.wrapping_add(1))
    }

    /// Current flags for the given group.
    pub fn flags(&self, group: FlagGroupId) -> FlagSet {
        match group {
            FlagGroupId::Mul => self.flags_mul,
            FlagGroupId::Exec => self.flags_exec,
        }
    }

    /// Overwrite flags for the given group.
    pub fn set_flags(&mut self, group: FlagGroupId, flags: FlagSet) {
        match group {
            FlagGroupId::Mul => self.flags_mul = flags,
            FlagGroupId::Exec => self.flags_exec = flags,
        }
    }

    /// Pack flags for both groups as `get_flags_as_bin()` does in the
    /// reference Python backend: mul-side in the low nibble, exec-side in
    /// the high nibble.
    pub fn flags_as_bin(&self) -> u8 {
        self.flags_mul.as_bits() | (self.flags_exec.as_bits() << 4)
    }

    /// Read DMEM word `idx`.
    pub fn get_dmem(&self, idx: usize) -> Result<U256, EngineError> {
        self.dmem
            .get(idx)
            .copied()
            .ok_or(EngineError::IndexRange { what: "dmem", index: idx, bound: self.dmem.len() })
    }

    /// Write DMEM word `idx`.
    pub fn set_dmem(&mut self, idx: usize, value: U256) -> Result<(), EngineError> {
        let bound = self.dmem.len();
        let slot = self
            .dmem
            .get_mut(idx)
            .ok_or(EngineError::IndexRange { what: "dmem", index: idx, bound })?;
        *slot = value;
        Ok(())
    }

    /// DMEM depth, in 256-bit words.
    pub fn dmem_depth(&self) -> usize {
        self.dmem.len()
    }

    /// Read the accumulator.
    pub fn get_acc(&self) -> U256 {
        self.acc
    }

    /// Overwrite the accumulator.
    pub fn set_acc(&mut self, value: U256) {
        self.acc = value;
    }

    /// Read WSR `idx`; index 0 always mirrors `mod`.
    pub fn get_wsr(&self, idx: usize) -> Result<U256, EngineError> {
        if idx == WSR_MOD {
            return Ok(self.mod_reg);
        }
        self.wsr
            .get(idx)
            .copied()
            .ok_or(EngineError::IndexRange { what: "wsr", index: idx, bound: WSR_COUNT })
    }

    /// Write WSR `idx`; index 0 always writes through to `mod`.
    pub fn set_wsr(&mut self, idx: usize, value: U256) -> Result<(), EngineError> {
        if idx == WSR_MOD {
            self.mod_reg = value;
            return Ok(());
        }
        if idx >= WSR_COUNT {
            return Err(EngineError::IndexRange { what: "wsr", index: idx, bound: WSR_COUNT });
        }
        self.wsr[idx] = value;
        Ok(())
    }

    /// Read the `mod` named wide register.
    pub fn get_mod(&self) -> U256 {
        self.mod_reg
    }
    /// Write the `mod` named wide register.
    pub fn set_mod(&mut self, value: U256) {
        self.mod_reg = value;
    }
    /// Read the `dmp` named wide register.
    pub fn get_dmp(&self) -> U256 {
        self.dmp
    }
    /// Write the `dmp` named wide register.
    pub fn set_dmp(&mut self, value: U256) {
        self.dmp = value;
    }
    /// Read the `rfp` named wide register.
    pub fn get_rfp(&self) -> U256 {
        self.rfp
    }
    /// Write the `rfp` named wide register.
    pub fn set_rfp(&mut self, value: U256) {
        self.rfp = value;
    }
    /// Read the `lc` named wide register.
    pub fn get_lc(&self) -> U256 {
        self.lc
    }
    /// Write the `lc` named wide register.
    pub fn set_lc(&mut self, value: U256) {
        self.lc = value;
    }

    /// Clear every wide and general purpose register to zero, per the
    /// reference Python backend's `clear_regs()`.
    pub fn clear_regs(&mut self) {
        self.wide = [U256::ZERO; WIDE_REG_COUNT];
        self.gpr = [0; GPR_COUNT];
        self.mod_reg = U256::ZERO;
        self.dmp = U256::ZERO;
        self.rfp = U256::ZERO;
        self.lc = U256::ZERO;
        self.acc = U256::ZERO;
        self.flags_mul = FlagSet::default();
        self.flags_exec = FlagSet::default();
    }

    /// Mark a PC as a breakpoint.
    pub fn set_breakpoint(&mut self, pc: u32) {
        self.breakpoints.insert(pc);
    }

    /// Remove a breakpoint.
    pub fn clear_breakpoint(&mut self, pc: u32) {
        self.breakpoints.remove(&pc);
    }

    /// Runtime configuration in effect.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Name resolution context used for disassembly.
    pub fn decode_context(&self) -> &DecodeContext {
        &self.decode_ctx
    }

    /// `true` once `ecall` has run or an outermost-frame `ret` has fired.
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
