//! DMEM/WSR access instruction family (`bn.lid`, `bn.sid`, `bn.mov`,
//! `bn.movr`, `bn.wsrr`, `bn.wsrw`).
//!
//! Grounded on `original_source/tests/test_c_machine.py`'s
//! `get_dmem`/`set_dmem` contract (out-of-bounds access raises, rather than
//! wrapping or truncating) and on `sim_rsa_tests.py`'s indirect-addressing
//! calling convention, where GPRs hold DMEM word indices and are
//! post-incremented by the load/store itself.

use super::Machine;
use crate::error::EngineError;

impl Machine {
    /// `bn.lid grd, offset(grs)!`: `w[grd] = dmem[grs + offset]`, then
    /// optionally `grs += 1`.
    pub(crate) fn mem_bn_lid(&mut self, grd: usize, offset: i32, grs: usize, post_increment: bool) -> Result<(), EngineError> {
        let base = self.get_gpr(grs)? as i64;
        let addr = base + offset as i64;
        if addr < 0 {
            return Err(EngineError::ValueRange { what: "dmem address", value: addr, max: i64::MAX });
        }
        let value = self.get_dmem(addr as usize)?;
        self.set_wide(grd, value)?;
        if post_increment {
            self.inc_gpr(grs)?;
        }
        Ok(())
    }

    /// `bn.sid grs2, offset(grs1)!`: `dmem[grs1 + offset] = w[grs2]`, then
    /// optionally `grs1 += 1`.
    pub(crate) fn mem_bn_sid(&mut self, grs2: usize, offset: i32, grs1: usize, post_increment: bool) -> Result<(), EngineError> {
        let base = self.get_gpr(grs1)? as i64;
        let addr = base + offset as i64;
        if addr < 0 {
            return Err(EngineError::ValueRange { what: "dmem address", value: addr, max: i64::MAX });
        }
        let value = self.get_wide(grs2)?;
        self.set_dmem(addr as usize, value)?;
        if post_increment {
            self.inc_gpr(grs1)?;
        }
        Ok(())
    }

    /// `bn.mov wd, wa`.
    pub(crate) fn mem_bn_mov(&mut self, wd: usize, wa: usize) -> Result<(), EngineError> {
        let value = self.get_wide(wa)?;
        self.set_wide(wd, value)
    }

    /// `bn.movr grd, grs`: indirect wide register to wide register move,
    /// where `grd`/`grs` are GPRs holding wide-register indices.
    pub(crate) fn mem_bn_movr(&mut self, grd: usize, grs: usize) -> Result<(), EngineError> {
        let src_idx = self.get_gpr(grs)? as usize;
        let dst_idx = self.get_gpr(grd)? as usize;
        let value = self.get_wide(src_idx)?;
        self.set_wide(dst_idx, value)
    }

    /// `bn.wsrr wd, wsr`.
    pub(crate) fn mem_bn_wsrr(&mut self, wd: usize, wsr: usize) -> Result<(), EngineError> {
        let value = self.get_wsr(wsr)?;
        self.set_wide(wd, value)
    }

    /// `bn.wsrw wsr, wa`.
    pub(crate) fn mem_bn_wsrw(&mut self, wsr: usize, wa: usize) -> Result<(), EngineError> {
        let value = self.get_wide(wa)?;
        self.set_wsr(wsr, value)
    }
}
