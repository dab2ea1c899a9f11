//! GPR arithmetic instruction family (`addi`, `lui`, `and`, `or`, `xor`).
//!
//! Plain 32-bit, wraparound arithmetic over the general purpose register
//! file; grounded on `original_source/tests/test_c_machine.py`'s
//! `inc_gpr`/`set_reg` wraparound contract.

use super::Machine;
use crate::error::EngineError;

impl Machine {
    /// `addi grd, grs, imm`: `grd = grs + imm`, wrapping on overflow.
    pub(crate) fn gpr_addi(&mut self, grd: usize, grs: usize, imm: i32) -> Result<(), EngineError> {
        let a = self.get_gpr(grs)? as i64;
        let result = a.wrapping_add(imm as i64) as u32;
        self.set_gpr(grd, result)
    }

    /// `lui grd, imm`: `grd = imm << 12`.
    pub(crate) fn gpr_lui(&mut self, grd: usize, imm: u32) -> Result<(), EngineError> {
        self.set_gpr(grd, imm.wrapping_shl(12))
    }

    /// `and grd, grs1, grs2`.
    pub(crate) fn gpr_and(&mut self, grd: usize, grs1: usize, grs2: usize) -> Result<(), EngineError> {
        let a = self.get_gpr(grs1)?;
        let b = self.get_gpr(grs2)?;
        self.set_gpr(grd, a & b)
    }

    /// `or grd, grs1, grs2`.
    pub(crate) fn gpr_or(&mut self, grd: usize, grs1: usize, grs2: usize) -> Result<(), EngineError> {
        let a = self.get_gpr(grs1)?;
        let b = self.get_gpr(grs2)?;
        self.set_gpr(grd, a | b)
    }

    /// `xor grd, grs1, grs2`.
    pub(crate) fn gpr_xor(&mut self, grd: usize, grs1: usize, grs2: usize) -> Result<(), EngineError> {
        let a = self.get_gpr(grs1)?;
        let b = self.get_gpr(grs2)?;
        self.set_gpr(grd, a ^ b)
    }
}
