//! Constructors for [`Machine`].

use super::{FlagSet, Machine};
use crate::config::MachineConfig;
use crate::consts::*;
use crate::decode::{DecodeContext, DecodedInstruction};
use crate::u256::U256;
use std::collections::HashSet;
use std::rc::Rc;

impl Machine {
    /// Build a machine from a DMEM image and a decoded instruction stream,
    /// matching the reference Python backend's
    /// `Machine(dmem_list, ins_objects_list, start_pc=None, stop_pc=None, ctx=None, breakpoints=None)`.
    pub fn new(
        dmem: Vec<U256>,
        imem: Vec<Rc<dyn DecodedInstruction>>,
        start_pc: Option<u32>,
        stop_pc: Option<u32>,
        decode_ctx: Option<DecodeContext>,
        breakpoints: Option<HashSet<u32>>,
    ) -> Self {
        Self {
            wide: [U256::ZERO; WIDE_REG_COUNT],
            mod_reg: U256::ZERO,
            dmp: U256::ZERO,
            rfp: U256::ZERO,
            lc: U256::ZERO,
            gpr: [0; GPR_COUNT],
            flags_mul: FlagSet::default(),
            flags_exec: FlagSet::default(),
            dmem,
            imem,
            acc: U256::ZERO,
            wsr: [U256::ZERO; WSR_COUNT],
            pc: start_pc.unwrap_or(0),
            stop_pc,
            call_stack: Vec::with_capacity(CALL_STACK_DEPTH),
            loop_stack: Vec::with_capacity(LOOP_STACK_DEPTH),
            breakpoints: breakpoints.unwrap_or_default(),
            decode_ctx: decode_ctx.unwrap_or_default(),
            config: MachineConfig::default(),
            cycle_count: 0,
            halted: false,
        }
    }

    /// Like [`Machine::new`] but with a zeroed DMEM of [`DMEM_DEPTH_DEFAULT`] words.
    pub fn with_default_dmem(imem: Vec<Rc<dyn DecodedInstruction>>) -> Self {
        Self::new(vec![U256::ZERO; DMEM_DEPTH_DEFAULT], imem, None, None, None, None)
    }

    /// Override the runtime configuration.
    pub fn with_config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }
}
