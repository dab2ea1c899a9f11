//! Multiply-accumulate instruction family (`bn.mulqacc*`).
//!
//! Each wide register is viewed as four 64-bit quarter-words for this
//! family; `qa`/`qb` select which quarter-word of `wa`/`wb` participates.
//! Grounded on `original_source/sim_rsa_tests.py`'s Montgomery-multiply
//! microcode, which relies on exactly this quarter-word multiply-shift-add
//! sequence to build a 256x256 product without a native wide multiplier.

use super::Machine;
use crate::error::EngineError;
use crate::u256::{Kernel, U256};

fn quarter_word(value: U256, q: u8) -> Result<u64, EngineError> {
    if q >= 4 {
        return Err(EngineError::ValueRange { what: "mulqacc quarter-word selector", value: q as i64, max: 3 });
    }
    let limb_base = (q as usize) * 2;
    Ok(value.0[limb_base] as u64 | ((value.0[limb_base + 1] as u64) << 32))
}

impl Machine {
    /// `bn.mulqacc`: `acc += (wa.qa * wb.qb) << (shift * 64)`, optionally
    /// zeroing the accumulator first.
    pub(crate) fn mac_mulqacc(&mut self, wa: usize, qa: u8, wb: usize, qb: u8, shift: u8, zero_acc: bool) -> Result<(), EngineError> {
        if shift >= 4 {
            return Err(EngineError::ValueRange { what: "mulqacc shift selector", value: shift as i64, max: 3 });
        }
        let a = quarter_word(self.get_wide(wa)?, qa)?;
        let b = quarter_word(self.get_wide(wb)?, qb)?;
        let product = (a as u128) * (b as u128);

        let mut acc = if zero_acc { U256::ZERO } else { self.get_acc() };
        let shifted = U256::from_u128(product);
        let shifted = crate::u256::RefKernel.shl(shifted, (shift as u32) * 64);
        let (sum, _carry) = crate::u256::RefKernel.add(acc, shifted, false);
        acc = sum;
        self.set_acc(acc);
        Ok(())
    }

    /// `bn.mulqacc.so`: like [`Machine::mac_mulqacc`], then shift the
    /// bottom 128 bits of the accumulator out into the selected half
    /// (`.L` or `.U`) of `wd`, and shift the accumulator right by 128 bits.
    pub(crate) fn mac_mulqacc_so(&mut self, wd: usize, upper_half: bool, wa: usize, qa: u8, wb: usize, qb: u8, shift: u8, zero_acc: bool) -> Result<(), EngineError> {
        self.mac_mulqacc(wa, qa, wb, qb, shift, zero_acc)?;
        let acc = self.get_acc();
        let low128 = acc.low_u128();
        let dest = self.get_wide(wd)?;
        let updated = crate::u256::RefKernel.set_half_word(dest, upper_half as usize, low128)?;
        self.set_wide(wd, updated)?;
        let shifted_acc = crate::u256::RefKernel.shr(acc, 128);
        self.set_acc(shifted_acc);
        Ok(())
    }

    /// `bn.mulqacc.wo`: like [`Machine::mac_mulqacc`], then write the full
    /// (256-bit, truncated) accumulator out to `wd` and clear it.
    pub(crate) fn mac_mulqacc_wo(&mut self, wd: usize, wa: usize, qa: u8, wb: usize, qb: u8, shift: u8, zero_acc: bool) -> Result<(), EngineError> {
        self.mac_mulqacc(wa, qa, wb, qb, shift, zero_acc)?;
        let acc = self.get_acc();
        self.set_wide(wd, acc)?;
        self.set_acc(U256::ZERO);
        Ok(())
    }
}
