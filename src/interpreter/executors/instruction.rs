//! Single-step dispatch (component C): the `step()` contract and the
//! tagged-`match` opcode table it drives.
//!
//! Grounded on the teacher's `_instruction()` (`src/interpreter/executors/instruction.rs`):
//! one big `match op { ... }` over a decoded instruction, each arm calling
//! into the instruction-family module (`alu`/`mac`/`memory`/`gpr`/`flow`)
//! that owns the actual effect, then charging cycles.

use crate::decode::TaggedInstruction;
use crate::error::EngineError;
use crate::interpreter::{Cycles, Machine};
use crate::u256::Kernel as _;
use tracing::trace;

/// Outcome of a single [`Machine::step`] call, matching the contract
/// `step() -> (continue, trace_line, cycles)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// `false` once the program counter has run off the end of `imem`.
    pub proceed: bool,
    /// Disassembly of the instruction just executed, populated only when
    /// [`crate::config::MachineConfig::enable_trace_dump`] is set.
    pub trace_line: String,
    /// Cycles charged for this instruction.
    pub cycles: Cycles,
}

impl Machine {
    /// Execute exactly one instruction and advance architectural state.
    ///
    /// Returns [`EngineError::Breakpoint`] without having executed the
    /// instruction if the current PC is a registered breakpoint; a caller
    /// recovers by calling `step()` again (the breakpoint does not
    /// re-trigger on the immediately following call since nothing
    /// re-arms it here — a caller wanting single-shot breakpoints should
    /// clear them itself).
    pub fn step(&mut self) -> Result<StepOutcome, EngineError> {
        if self.hits_breakpoint(self.pc) {
            return Err(EngineError::Breakpoint { pc: self.pc });
        }

        let pc = self.pc;
        let Some(instr) = self.imem.get(pc as usize).cloned() else {
            return Ok(StepOutcome { proceed: false, trace_line: String::new(), cycles: Cycles(0) });
        };

        let _span = tracing::trace_span!("step", pc).entered();
        let cycles = instr.execute(self)?;
        self.charge(cycles);

        let trace_line = if self.config.enable_trace_dump {
            let (_, text, _) = instr.get_asm_str(pc);
            text
        } else {
            String::new()
        };
        trace!(pc, cycles = cycles.0, "executed instruction");

        let proceed = !self.halted && (self.pc as usize) < self.imem.len();
        Ok(StepOutcome { proceed, trace_line, cycles })
    }

    /// Step until the instruction stream is exhausted or `stop_pc` is
    /// reached, returning the total cycles consumed. Stops early (without
    /// error) at `stop_pc`; any other error propagates.
    pub fn run_to_completion(&mut self) -> Result<u64, EngineError> {
        let start_cycles = self.cycle_count;
        loop {
            if Some(self.pc) == self.stop_pc {
                break;
            }
            let outcome = self.step()?;
            if !outcome.proceed {
                break;
            }
        }
        Ok(self.cycle_count - start_cycles)
    }

    /// Dispatch one decoded instruction's effect. Non-branching
    /// instructions fall through to the shared loop-close/PC-increment
    /// tail; control-flow instructions manage the PC themselves.
    pub(crate) fn dispatch(&mut self, instr: &TaggedInstruction) -> Result<Cycles, EngineError> {
        use TaggedInstruction::*;

        let pc_before = self.pc;
        let mut pc_already_advanced = false;

        let cycles = match instr {
            BnAdd { wd, wa, wb, fg, shift } => {
                self.alu_add(*wd, *wa, *wb, *fg, false, *shift)?;
                Cycles::BASE
            }
            BnAddc { wd, wa, wb, fg, shift } => {
                self.alu_add(*wd, *wa, *wb, *fg, true, *shift)?;
                Cycles::BASE
            }
            BnSub { wd, wa, wb, fg, shift } => {
                self.alu_sub(*wd, *wa, *wb, *fg, false, *shift)?;
                Cycles::BASE
            }
            BnSubb { wd, wa, wb, fg, shift } => {
                self.alu_sub(*wd, *wa, *wb, *fg, true, *shift)?;
                Cycles::BASE
            }
            BnAddm { wd, wa, wb } => {
                self.alu_addm(*wd, *wa, *wb)?;
                Cycles::BASE
            }
            BnSubm { wd, wa, wb } => {
                self.alu_subm(*wd, *wa, *wb)?;
                Cycles::BASE
            }
            BnAnd { wd, wa, wb, fg, shift } => {
                self.alu_bitwise(*wd, *wa, *wb, *fg, *shift, crate::u256::RefKernel::and)?;
                Cycles::BASE
            }
            BnOr { wd, wa, wb, fg, shift } => {
                self.alu_bitwise(*wd, *wa, *wb, *fg, *shift, crate::u256::RefKernel::or)?;
                Cycles::BASE
            }
            BnXor { wd, wa, wb, fg, shift } => {
                self.alu_bitwise(*wd, *wa, *wb, *fg, *shift, crate::u256::RefKernel::xor)?;
                Cycles::BASE
            }
            BnNot { wd, wb, fg, shift } | NotX { wd, wb, fg, shift } => {
                self.alu_not(*wd, *wb, *fg, *shift)?;
                Cycles::BASE
            }
            BnRshi { wd, wa, wb, imm, fg } => {
                self.alu_rshi(*wd, *wa, *wb, *imm, *fg)?;
                Cycles::BASE
            }

            BnMulqacc { wa, qa, wb, qb, shift, zero_acc } => {
                self.mac_mulqacc(*wa, *qa, *wb, *qb, *shift, *zero_acc)?;
                Cycles::MULQACC
            }
            BnMulqaccSo { wd, upper_half, wa, qa, wb, qb, shift, zero_acc } => {
                self.mac_mulqacc_so(*wd, *upper_half, *wa, *qa, *wb, *qb, *shift, *zero_acc)?;
                Cycles::MULQACC
            }
            BnMulqaccWo { wd, wa, qa, wb, qb, shift, zero_acc } => {
                self.mac_mulqacc_wo(*wd, *wa, *qa, *wb, *qb, *shift, *zero_acc)?;
                Cycles::MULQACC
            }

            BnLid { grd, offset, grs, post_increment } => {
                self.mem_bn_lid(*grd, *offset, *grs, *post_increment)?;
                Cycles::INDIRECT_MEMORY
            }
            BnSid { grs2, offset, grs1, post_increment } => {
                self.mem_bn_sid(*grs2, *offset, *grs1, *post_increment)?;
                Cycles::INDIRECT_MEMORY
            }
            BnMov { wd, wa } => {
                self.mem_bn_mov(*wd, *wa)?;
                Cycles::BASE
            }
            BnMovr { grd, grs } => {
                self.mem_bn_movr(*grd, *grs)?;
                Cycles::BASE
            }
            BnWsrr { wd, wsr } => {
                self.mem_bn_wsrr(*wd, *wsr)?;
                Cycles::BASE
            }
            BnWsrw { wsr, wa } => {
                self.mem_bn_wsrw(*wsr, *wa)?;
                Cycles::BASE
            }

            Addi { grd, grs, imm } => {
                self.gpr_addi(*grd, *grs, *imm)?;
                Cycles::BASE
            }
            Lui { grd, imm } => {
                self.gpr_lui(*grd, *imm)?;
                Cycles::BASE
            }
            And { grd, grs1, grs2 } => {
                self.gpr_and(*grd, *grs1, *grs2)?;
                Cycles::BASE
            }
            Or { grd, grs1, grs2 } => {
                self.gpr_or(*grd, *grs1, *grs2)?;
                Cycles::BASE
            }
            Xor { grd, grs1, grs2 } => {
                self.gpr_xor(*grd, *grs1, *grs2)?;
                Cycles::BASE
            }

            Loop { grs, body_size } => {
                self.flow_loop(*grs, *body_size)?;
                Cycles::LOOP_SETUP
            }
            Loopi { iterations, body_size } => {
                self.flow_loopi(*iterations, *body_size)?;
                Cycles::LOOP_SETUP
            }
            Jal { grd, offset } => {
                self.flow_jal(*grd, *offset)?;
                pc_already_advanced = true;
                Cycles::CONTROL_TRANSFER
            }
            Bne { grs1, grs2, offset } => {
                self.flow_bne(*grs1, *grs2, *offset)?;
                pc_already_advanced = true;
                Cycles::CONTROL_TRANSFER
            }
            Beq { grs1, grs2, offset } => {
                self.flow_beq(*grs1, *grs2, *offset)?;
                pc_already_advanced = true;
                Cycles::CONTROL_TRANSFER
            }
            Bm { offset, fg } => {
                self.flow_bm(*offset, *fg)?;
                pc_already_advanced = true;
                Cycles::CONTROL_TRANSFER
            }
            Call { target } => {
                self.flow_call(*target)?;
                pc_already_advanced = true;
                Cycles::CONTROL_TRANSFER
            }
            Ret => {
                self.flow_ret()?;
                pc_already_advanced = true;
                Cycles::CONTROL_TRANSFER
            }
            Ecall => {
                // Halts the engine; `step()` reports `proceed = false` from here on.
                self.halted = true;
                Cycles::BASE
            }
            SigIni { .. } | SigChk { .. } => {
                // No-op, preserved for microcode compatibility; see
                // original_source/test_new_instructions.py.
                Cycles::BASE
            }
            Nop => Cycles::BASE,

            LoadImmediate { wd, value } => {
                self.set_wide(*wd, *value)?;
                Cycles::BASE
            }
        };

        if !pc_already_advanced {
            let closed_loop = self.flow_maybe_close_loop(pc_before)?;
            if !closed_loop {
                self.inc_pc();
            }
        }

        Ok(cycles)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MachineConfig;
    use crate::decode::TaggedInstruction::*;
    use crate::decode::WideShift;
    use crate::interpreter::{FlagGroupId, Machine};
    use crate::u256::U256;
    use std::rc::Rc;

    fn machine(program: Vec<crate::decode::TaggedInstruction>) -> Machine {
        let imem: Vec<Rc<dyn crate::decode::DecodedInstruction>> =
            program.into_iter().map(|i| Rc::new(i) as Rc<dyn crate::decode::DecodedInstruction>).collect();
        Machine::with_default_dmem(imem)
    }

    #[test]
    fn bn_add_updates_flags_and_register() {
        let mut m = machine(vec![
            LoadImmediate { wd: 1, value: U256::from(5u32) },
            LoadImmediate { wd: 2, value: U256::from(7u32) },
            BnAdd { wd: 0, wa: 1, wb: 2, fg: FlagGroupId::Mul, shift: WideShift::None },
        ]);
        m.run_to_completion().unwrap();
        assert_eq!(m.get_wide(0).unwrap(), U256::from(12u32));
        assert!(!m.flags(FlagGroupId::Mul).c);
    }

    #[test]
    fn bn_add_carries_on_overflow() {
        let mut m = machine(vec![
            LoadImmediate { wd: 1, value: U256::MAX },
            LoadImmediate { wd: 2, value: U256::ONE },
            BnAdd { wd: 0, wa: 1, wb: 2, fg: FlagGroupId::Exec, shift: WideShift::None },
        ]);
        m.run_to_completion().unwrap();
        assert_eq!(m.get_wide(0).unwrap(), U256::ZERO);
        assert!(m.flags(FlagGroupId::Exec).c);
        assert!(!m.flags(FlagGroupId::Mul).c);
    }

    #[test]
    fn loop_runs_body_n_times() {
        // x1 = 3 (iteration count), x2 = 0 (counter), loop 3x: x2 += 1
        let mut m = machine(vec![
            Addi { grd: 1, grs: 0, imm: 3 },
            Loop { grs: 1, body_size: 1 },
            Addi { grd: 2, grs: 2, imm: 1 },
        ]);
        m.run_to_completion().unwrap();
        assert_eq!(m.get_gpr(2).unwrap(), 3);
    }

    #[test]
    fn call_and_ret_round_trip() {
        // pc0: call pc3 (subroutine); pc1: runs after ret; pc2: halt marker;
        // pc3-4: subroutine body, returns to pc1.
        let program = vec![
            Call { target: 3 },
            Addi { grd: 3, grs: 0, imm: 99 },
            Nop,
            Addi { grd: 2, grs: 0, imm: 7 },
            Ret,
        ];
        let imem: Vec<Rc<dyn crate::decode::DecodedInstruction>> =
            program.into_iter().map(|i| Rc::new(i) as Rc<dyn crate::decode::DecodedInstruction>).collect();
        let mut m = Machine::new(vec![U256::ZERO; 8], imem, None, Some(2), None, None);
        m.run_to_completion().unwrap();
        assert_eq!(m.get_gpr(2).unwrap(), 7);
        assert_eq!(m.get_gpr(3).unwrap(), 99);
        assert_eq!(m.pc(), 2);
    }

    #[test]
    fn breakpoint_is_recoverable() {
        let mut m = machine(vec![Nop, Nop]);
        m.set_breakpoint(1);
        m.step().unwrap();
        let err = m.step().unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err, crate::error::EngineError::Breakpoint { pc: 1 });
    }

    #[test]
    fn outermost_ret_halts_cleanly() {
        let mut m = machine(vec![Ret]);
        let outcome = m.step().unwrap();
        assert!(!outcome.proceed);
        assert!(m.is_halted());
    }

    #[test]
    fn ecall_halts_the_engine() {
        let mut m = machine(vec![Ecall, Addi { grd: 1, grs: 0, imm: 1 }]);
        m.run_to_completion().unwrap();
        assert!(m.is_halted());
        assert_eq!(m.get_gpr(1).unwrap(), 0);
    }

    #[test]
    fn loop_with_zero_iterations_is_rejected() {
        let mut m = machine(vec![Loop { grs: 0, body_size: 1 }, Nop]);
        let err = m.step().unwrap_err();
        assert_eq!(err, crate::error::EngineError::LoopZero);
    }

    #[test]
    fn trace_dump_populates_trace_line_when_enabled() {
        let mut m = machine(vec![Nop]).with_config(MachineConfig { enable_trace_dump: true, ..Default::default() });
        let outcome = m.step().unwrap();
        assert!(!outcome.trace_line.is_empty());
    }
}
