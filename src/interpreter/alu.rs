//! Wide (256-bit) arithmetic and logical instruction family.
//!
//! Grounded on the teacher's `alu_overflow`/`alu_error`/`alu_set` generic
//! helper pattern (`src/interpreter/alu.rs`): one small helper per result
//! shape, instruction bodies just supply the operation and its operands.
//! The actual bit-level work is delegated to [`crate::u256::Kernel`].

use super::{FlagGroupId, Machine};
use crate::decode::WideShift;
use crate::error::EngineError;
use crate::u256::{Kernel, RefKernel, U256};

const K: RefKernel = RefKernel;

impl Machine {
    /// `bn.add`/`bn.addc`: `wd = wa + (wb << shift) (+ carry-in if `with_carry`)`.
    pub(crate) fn alu_add(&mut self, wd: usize, wa: usize, wb: usize, fg: FlagGroupId, with_carry: bool, shift: WideShift) -> Result<(), EngineError> {
        let a = self.get_wide(wa)?;
        let b = shift.apply(&K, self.get_wide(wb)?);
        let cin = with_carry && self.flags(fg).c;
        let (result, carry) = K.add(a, b, cin);
        self.set_wide(wd, result)?;
        self.update_flags(fg, result, carry);
        Ok(())
    }

    /// `bn.sub`/`bn.subb`: `wd = wa - (wb << shift) (- borrow-in if `with_borrow`)`.
    pub(crate) fn alu_sub(&mut self, wd: usize, wa: usize, wb: usize, fg: FlagGroupId, with_borrow: bool, shift: WideShift) -> Result<(), EngineError> {
        let a = self.get_wide(wa)?;
        let b = shift.apply(&K, self.get_wide(wb)?);
        let bin = with_borrow && self.flags(fg).c;
        let (result, borrow) = K.sub(a, b, bin);
        self.set_wide(wd, result)?;
        self.update_flags(fg, result, borrow);
        Ok(())
    }

    /// `bn.addm`: `wd = (wa + wb) mod mod`, flags untouched.
    pub(crate) fn alu_addm(&mut self, wd: usize, wa: usize, wb: usize) -> Result<(), EngineError> {
        let a = self.get_wide(wa)?;
        let b = self.get_wide(wb)?;
        let (sum, carry) = K.add(a, b, false);
        let modulus = self.get_mod();
        let result = if carry || K.cmp(sum, modulus) != std::cmp::Ordering::Less {
            K.sub(sum, modulus, false).0
        } else {
            sum
        };
        self.set_wide(wd, result)
    }

    /// `bn.subm`: `wd = (wa - wb) mod mod`, flags untouched.
    pub(crate) fn alu_subm(&mut self, wd: usize, wa: usize, wb: usize) -> Result<(), EngineError> {
        let a = self.get_wide(wa)?;
        let b = self.get_wide(wb)?;
        let (diff, borrow) = K.sub(a, b, false);
        let modulus = self.get_mod();
        let result = if borrow { K.add(diff, modulus, false).0 } else { diff };
        self.set_wide(wd, result)
    }

    /// `bn.and`/`bn.or`/`bn.xor wd, wa, wb, fg, shift`. `C` is left
    /// unchanged; only `M`/`L`/`Z` are updated from the result.
    pub(crate) fn alu_bitwise(&mut self, wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift, op: fn(&RefKernel, U256, U256) -> U256) -> Result<(), EngineError> {
        let a = self.get_wide(wa)?;
        let b = shift.apply(&K, self.get_wide(wb)?);
        let result = op(&K, a, b);
        self.set_wide(wd, result)?;
        self.update_flags_preserve_carry(fg, result);
        Ok(())
    }

    /// `bn.not`/`notx wd, wb, fg, shift`: bitwise complement. `C` is left
    /// unchanged; only `M`/`L`/`Z` are updated from the result.
    pub(crate) fn alu_not(&mut self, wd: usize, wb: usize, fg: FlagGroupId, shift: WideShift) -> Result<(), EngineError> {
        let b = shift.apply(&K, self.get_wide(wb)?);
        let result = K.not(b);
        self.set_wide(wd, result)?;
        self.update_flags_preserve_carry(fg, result);
        Ok(())
    }

    /// `bn.rshi`: concatenate `{wa, wb}` as a 512-bit value and take the
    /// low 256 bits after shifting right by `imm` (0..=255). `C` is left
    /// unchanged; only `M`/`L`/`Z` are updated from the result.
    pub(crate) fn alu_rshi(&mut self, wd: usize, wa: usize, wb: usize, imm: u32, fg: FlagGroupId) -> Result<(), EngineError> {
        if imm >= 256 {
            return Err(EngineError::ValueRange { what: "rshi shift amount", value: imm as i64, max: 255 });
        }
        let a = self.get_wide(wa)?;
        let b = self.get_wide(wb)?;
        // {a, b} >> imm, low 256 bits: the high part of the window is a
        // right-shifted, the low part is b right-shifted with bits carried
        // in from the bottom of a.
        let shifted_b = K.shr(b, imm);
        let carried_in = if imm == 0 { U256::ZERO } else { K.shl(a, 256 - imm) };
        let result = K.or(shifted_b, carried_in);
        self.set_wide(wd, result)?;
        self.update_flags_preserve_carry(fg, result);
        Ok(())
    }
}
