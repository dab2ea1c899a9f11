//! Machine geometry constants
//!
//! Mirrors the role of the teacher's `consts.rs`: every width, depth and
//! named index the rest of the crate relies on lives here so nothing else
//! hand-derives a magic number.

/* WIDE REGISTER FILE */

/// Number of indexed 256-bit wide registers (`w0`..`w31`).
pub const WIDE_REG_COUNT: usize = 32;

/// Width of a wide register, in bits.
pub const XLEN_BITS: usize = 256;

/// Width of a wide register, in bytes.
pub const XLEN_BYTES: usize = XLEN_BITS / 8;

/// Number of 32-bit limbs per wide register.
pub const LIMBS_PER_WORD: usize = 8;

/// Width of a limb, in bits.
pub const LIMB_BITS: usize = 32;

/// Number of 16-bit half-limbs per wide register.
pub const HALF_LIMBS_PER_WORD: usize = 16;

/// Width of a half-limb, in bits.
pub const HALF_LIMB_BITS: usize = 16;

/// Width of a half-word, in bits.
pub const HALF_WORD_BITS: usize = XLEN_BITS / 2;

/* GPR FILE */

/// Number of 32-bit general purpose registers.
pub const GPR_COUNT: usize = 32;

/// `x0` is hard-wired to zero.
pub const GPR_ZERO: usize = 0;

/* MEMORY */

/// Default DMEM depth (256-bit words) used by a bare `Machine`.
pub const DMEM_DEPTH_DEFAULT: usize = 128;

/// DMEM depth used by the primitive driver, which must host an entire
/// program's scratch area plus the RSA calling-convention slots.
pub const DMEM_DEPTH_DRIVER: usize = 1024;

/// Maximum IMEM length (decoded instructions).
pub const IMEM_DEPTH_MAX: usize = 1024;

/// Multiplier applied to pointer literals when a program was assembled
/// with byte addressing (DMEM is always word-addressed internally).
pub const DMEM_BYTE_ADDRESSING_MULTIPLIER: usize = 32;

/* STACKS */

/// Minimum hardware call-stack depth.
pub const CALL_STACK_DEPTH: usize = 8;

/// Minimum hardware loop-stack depth.
pub const LOOP_STACK_DEPTH: usize = 8;

/* WSR */

/// WSR index 0 aliases the `mod` wide register.
pub const WSR_MOD: usize = 0;

/// Number of WSR slots exposed (beyond index 0, these stub to zero).
pub const WSR_COUNT: usize = 8;
