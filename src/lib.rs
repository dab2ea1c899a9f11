#![allow(clippy::wrong_self_convention)]

pub mod config;
pub mod consts;
pub mod decode;
pub mod error;
pub mod interpreter;
pub mod primitive;
pub mod u256;

pub mod prelude {
    pub use crate::config::MachineConfig;
    pub use crate::decode::{DecodeContext, DecodedInstruction, Disassembly, TaggedInstruction, WideShift};
    pub use crate::error::EngineError;
    pub use crate::interpreter::{Cycles, FlagGroupId, FlagSet, Machine, StepOutcome};
    pub use crate::primitive::PrimitiveDriver;
    pub use crate::u256::{Kernel, RefKernel, U256};
}
