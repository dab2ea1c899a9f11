//! Runtime configuration.
//!
//! A plain struct rather than a config-file crate, matching the teacher's
//! own `Context`/`ConsensusParameters` — this crate has no need for a
//! layered/env-driven configuration system, just a handful of switches
//! threaded into `Machine` and `PrimitiveDriver` at construction time.

/// Switches that affect how a [`crate::interpreter::Machine`] or
/// [`crate::primitive::PrimitiveDriver`] behaves, but never its
/// architectural correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    /// When set, `step()` renders and returns a disassembly string for the
    /// instruction it just executed, mirroring `ENABLE_TRACE_DUMP` in the
    /// original harness. When unset, `step()` still returns a trace line,
    /// just an empty one, since a `tracing::trace!` span already carries
    /// the same information to any attached subscriber.
    pub enable_trace_dump: bool,

    /// When set, `PrimitiveDriver` multiplies pointer literals destined
    /// for DMEM by [`crate::consts::DMEM_BYTE_ADDRESSING_MULTIPLIER`]
    /// before storing them, matching a program assembled under byte
    /// addressing. DMEM itself is always word-addressed internally.
    pub dmem_byte_addressing: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            enable_trace_dump: false,
            dmem_byte_addressing: false,
        }
    }
}
