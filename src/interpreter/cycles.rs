//! Cycle accounting.
//!
//! Grounded on the teacher's `GasUnit`/`gas_cost_const` split
//! (`src/gas.rs`, `src/interpreter/gas.rs`), simplified to this machine's
//! contract: most instructions cost exactly one cycle, a handful of
//! multi-cycle instructions (loop setup, indirect memory access, the
//! multiply-accumulate family) carry their own fixed cost.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A cycle cost, as returned by [`crate::decode::DecodedInstruction::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cycles(pub u32);

impl Cycles {
    /// The baseline cost charged to every instruction that doesn't name a
    /// more specific one below.
    pub const BASE: Cycles = Cycles(1);
    /// Cost of an indirect DMEM access (`bn.lid`/`bn.sid`).
    pub const INDIRECT_MEMORY: Cycles = Cycles(1);
    /// Cost of a multiply-accumulate step.
    pub const MULQACC: Cycles = Cycles(1);
    /// Cost of entering a hardware loop (`loop`/`loopi`).
    pub const LOOP_SETUP: Cycles = Cycles(1);
    /// Cost of a taken control-flow transfer (`call`/`jal`/`ret`/taken branch).
    pub const CONTROL_TRANSFER: Cycles = Cycles(1);
}

impl fmt::Display for Cycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Cycles {
    type Output = Cycles;
    fn add(self, rhs: Cycles) -> Cycles {
        Cycles(self.0 + rhs.0)
    }
}

impl Sum for Cycles {
    fn sum<I: Iterator<Item = Cycles>>(iter: I) -> Self {
        iter.fold(Cycles(0), Add::add)
    }
}

impl From<Cycles> for u64 {
    fn from(c: Cycles) -> u64 {
        c.0 as u64
    }
}
