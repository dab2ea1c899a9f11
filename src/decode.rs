//! The decoder contract (consumed, not implemented).
//!
//! Assembly and decoding are out of scope for this crate: a caller hands
//! `Machine::new` an already-decoded instruction stream. [`DecodedInstruction`]
//! is the trait boundary that stream's elements must satisfy, grounded on
//! the reference Python backend's `ins_objects_list` contract (each entry
//! exposes `execute`, `get_asm_str`, and an `ins_str`/encoding) as pinned by
//! `original_source/tests/test_c_machine.py`.
//!
//! This module also provides [`TaggedInstruction`], a concrete
//! implementation of the trait covering the opcode surface named in the
//! component design, for use by this crate's own tests and by
//! `primitive::PrimitiveDriver`'s synthetic fixtures. A real assembler
//! would produce its own `DecodedInstruction` implementations instead.

use crate::error::EngineError;
use crate::interpreter::{Cycles, FlagGroupId, Machine};
use crate::u256::U256;
use std::collections::HashMap;
use std::fmt;

/// One decoded instruction. Implementors own everything needed to mutate a
/// [`Machine`] and to render themselves for disassembly.
pub trait DecodedInstruction: fmt::Debug {
    /// Apply this instruction's effect to `machine` and advance its PC
    /// (unless the instruction is itself a control-flow transfer), then
    /// return how many cycles it cost.
    fn execute(&self, machine: &mut Machine) -> Result<Cycles, EngineError>;

    /// `(address, mnemonic text, is_malformed)` for disassembly/tracing.
    fn get_asm_str(&self, address: u32) -> (u32, String, bool) {
        (address, format!("{self:?}"), false)
    }

    /// The 32-bit encoding this instruction was decoded from, if known.
    fn encoding(&self) -> Option<u32> {
        None
    }

    /// `true` if this entry represents an encoding the decoder could not
    /// fully resolve (e.g. an unknown opcode kept around so PC-relative
    /// addressing stays stable).
    fn is_malformed(&self) -> bool {
        false
    }
}

/// Name resolution the decoder would otherwise have computed: function and
/// label PCs, consulted by disassembly and by `call`/`jal` by name.
#[derive(Debug, Clone, Default)]
pub struct DecodeContext {
    /// Function name to entry PC.
    pub functions: HashMap<String, u32>,
    /// Label name to PC.
    pub labels: HashMap<String, u32>,
}

impl DecodeContext {
    /// An empty context (no named functions or labels).
    pub fn new() -> Self {
        Self::default()
    }
}

/// A rendered disassembly line, as returned by `Machine::step` when
/// `MachineConfig::enable_trace_dump` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    /// Address the instruction was fetched from.
    pub address: u32,
    /// Rendered mnemonic text.
    pub text: String,
    /// Whether the decoder flagged this entry as malformed.
    pub malformed: bool,
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}: {}", self.address, self.text)
    }
}

/// Selects which flag group a wide-register instruction reads/writes.
pub fn flag_group_from_bit(bit: bool) -> FlagGroupId {
    if bit {
        FlagGroupId::Exec
    } else {
        FlagGroupId::Mul
    }
}

/// Optional pre-shift applied to the second (or, for `not`/`notx`, the
/// only) operand of a wide arithmetic/logical instruction before the op
/// runs, mirroring OTBN's `<<N`/`>>N` operand modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideShift {
    /// No pre-shift.
    None,
    /// Shift left by `0..=255` bits.
    Left(u32),
    /// Shift right by `0..=255` bits.
    Right(u32),
}

impl WideShift {
    /// Apply this shift to `value` using `kernel`.
    pub fn apply(self, kernel: &impl crate::u256::Kernel, value: crate::u256::U256) -> crate::u256::U256 {
        match self {
            WideShift::None => value,
            WideShift::Left(n) => kernel.shl(value, n),
            WideShift::Right(n) => kernel.shr(value, n),
        }
    }
}

/// A concrete, tagged-enum instruction set covering the opcode families
/// named in the component design. Used by this crate's own tests and by
/// the primitive driver's synthetic fixtures; a real assembler would
/// produce its own [`DecodedInstruction`] implementations instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedInstruction {
    /// `bn.add wd, wa, wb, fg, shift` — wide addition, no carry in.
    BnAdd { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.addc wd, wa, wb, fg, shift` — wide addition, with carry in from `fg`.
    BnAddc { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.sub wd, wa, wb, fg, shift` — wide subtraction, no borrow in.
    BnSub { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.subb wd, wa, wb, fg, shift` — wide subtraction, with borrow in from `fg`.
    BnSubb { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.addm wd, wa, wb` — wide addition reduced mod `mod`.
    BnAddm { wd: usize, wa: usize, wb: usize },
    /// `bn.subm wd, wa, wb` — wide subtraction reduced mod `mod`.
    BnSubm { wd: usize, wa: usize, wb: usize },
    /// `bn.and wd, wa, wb, fg, shift`.
    BnAnd { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.or wd, wa, wb, fg, shift`.
    BnOr { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.xor wd, wa, wb, fg, shift`.
    BnXor { wd: usize, wa: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.not wd, wb, fg, shift`.
    BnNot { wd: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `notx wd, wb, fg, shift` — alternate encoding of `bn.not` with an
    /// accumulator-fed source selector (see `original_source/test_new_instructions.py`).
    NotX { wd: usize, wb: usize, fg: FlagGroupId, shift: WideShift },
    /// `bn.rshi wd, wa, wb, imm, fg` — concatenate `{wa, wb}` and shift right.
    BnRshi { wd: usize, wa: usize, wb: usize, imm: u32, fg: FlagGroupId },

    /// `bn.mulqacc wa, qa, wb, qb, shift` — quarter-word multiply
    /// accumulate, no accumulator side effects beyond the addition.
    BnMulqacc { wa: usize, qa: u8, wb: usize, qb: u8, shift: u8, zero_acc: bool },
    /// `bn.mulqacc.so wd.L/.U, ...` — multiply-accumulate, shift out into
    /// a wide register half.
    BnMulqaccSo { wd: usize, upper_half: bool, wa: usize, qa: u8, wb: usize, qb: u8, shift: u8, zero_acc: bool },
    /// `bn.mulqacc.wo wd, ...` — multiply-accumulate, write out the full
    /// accumulator into a wide register.
    BnMulqaccWo { wd: usize, wa: usize, qa: u8, wb: usize, qb: u8, shift: u8, zero_acc: bool },

    /// `bn.lid grd, offset(grs)!` — indirect DMEM load into `w[grd]`,
    /// optional post-increment of `grs`.
    BnLid { grd: usize, offset: i32, grs: usize, post_increment: bool },
    /// `bn.sid grs2, offset(grs1)!` — indirect DMEM store from `w[grs2]`.
    BnSid { grs2: usize, offset: i32, grs1: usize, post_increment: bool },
    /// `bn.mov wd, wa` — wide register to wide register move.
    BnMov { wd: usize, wa: usize },
    /// `bn.movr grd, grs` — indirect wide register to wide register move.
    BnMovr { grd: usize, grs: usize },
    /// `bn.wsrr wd, wsr` — read a wide special register.
    BnWsrr { wd: usize, wsr: usize },
    /// `bn.wsrw wsr, wa` — write a wide special register.
    BnWsrw { wsr: usize, wa: usize },

    /// `addi grd, grs, imm`.
    Addi { grd: usize, grs: usize, imm: i32 },
    /// `lui grd, imm`.
    Lui { grd: usize, imm: u32 },
    /// `and grd, grs1, grs2`.
    And { grd: usize, grs1: usize, grs2: usize },
    /// `or grd, grs1, grs2`.
    Or { grd: usize, grs1: usize, grs2: usize },
    /// `xor grd, grs1, grs2`.
    Xor { grd: usize, grs1: usize, grs2: usize },

    /// `loop grs, bodysize`.
    Loop { grs: usize, body_size: u32 },
    /// `loopi iterations, bodysize`.
    Loopi { iterations: u32, body_size: u32 },
    /// `jal grd, offset` — jump and link.
    Jal { grd: usize, offset: i32 },
    /// `bne grs1, grs2, offset`.
    Bne { grs1: usize, grs2: usize, offset: i32 },
    /// `beq grs1, grs2, offset`.
    Beq { grs1: usize, grs2: usize, offset: i32 },
    /// `bm grs, offset, fg` — branch if the selected flag group's `M` flag
    /// is set (see `original_source/test_new_instructions.py`).
    Bm { offset: i32, fg: FlagGroupId },
    /// `call target` — push the return PC onto the hardware call stack and
    /// jump unconditionally.
    Call { target: u32 },
    /// `ret`.
    Ret,
    /// `ecall`.
    Ecall,
    /// `sigini imm` — no-op, preserved for microcode compatibility.
    SigIni { imm: u32 },
    /// `sigchk imm` — no-op, preserved for microcode compatibility.
    SigChk { imm: u32 },
    /// `nop`.
    Nop,

    /// A literal constant load, used only by synthetic test fixtures that
    /// need to seed a wide register without going through DMEM.
    LoadImmediate { wd: usize, value: U256 },
}

impl DecodedInstruction for TaggedInstruction {
    fn execute(&self, machine: &mut Machine) -> Result<Cycles, EngineError> {
        machine.dispatch(self)
    }

    fn get_asm_str(&self, address: u32) -> (u32, String, bool) {
        (address, format!("{self:?}"), false)
    }
}
