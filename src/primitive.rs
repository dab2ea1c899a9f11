//! Primitive Driver (component D): the DMEM calling convention and
//! primitive-invocation wrappers that sit between a caller and a raw
//! [`Machine`].
//!
//! Grounded entirely on `original_source/sim_rsa_tests.py`: the pointer/
//! blinding-word packing, the fixed slot and payload-offset table, and the
//! `run_modload`/`run_montmul`/`run_montout`/`run_modexp`/
//! `run_modexp_blinded` wrappers are all ported from that file's module-level
//! functions into methods on an explicit [`PrimitiveDriver`] struct (Design
//! Note 9: no global mutable driver state). The actual `dcrypto_bn`
//! microcode blob the original wraps is not part of this retrieval pack —
//! assembly/decoding is out of scope for this crate — so `PrimitiveDriver`
//! is built generically against any already-decoded program a caller
//! supplies (see `decode::DecodeContext`/`functions`), and `start_addr_dict`/
//! `stop_addr_dict` become named-function lookups into that program's own
//! `DecodeContext` rather than the original's hardcoded PC table.

use crate::consts::DMEM_BYTE_ADDRESSING_MULTIPLIER;
use crate::decode::{DecodeContext, DecodedInstruction};
use crate::error::EngineError;
use crate::interpreter::Machine;
use crate::u256::U256;
use std::rc::Rc;

/// Number of bits in a bignum limb, for pointer-word packing.
const BN_LIMB_LEN: u32 = 32;
/// Max bignum width (in 256-bit words) the calling convention's pointer
/// word format can address (reserves 7 limbs, 7 x 32 = 224 bits).
pub const BN_MAX_WORDS: usize = 16;

/// Fixed DMEM payload offsets, in 256-bit words (pre-multiplier), per the
/// calling convention.
pub mod offsets {
    /// Modulus.
    pub const MOD: usize = 4;
    /// Montgomery `-mod^-1 mod 2^256`.
    pub const DINV: usize = 20;
    /// Blinding parameter word.
    pub const BLINDING: usize = 21;
    /// Montgomery `R^2 mod mod`.
    pub const RR: usize = 22;
    /// Generic input operand.
    pub const IN: usize = 38;
    /// Exponent.
    pub const EXP: usize = 54;
    /// Generic output operand.
    pub const OUT: usize = 71;
    /// Blinded input.
    pub const BIN: usize = 87;
    /// Blinded output.
    pub const BOUT: usize = 103;
}

/// Fixed DMEM slot indices (never multiplied by the addressing mode,
/// unlike the payload offsets above) holding packed pointer words.
pub mod slots {
    /// Pointers for the primary input primitive (modload/modexp/montmul).
    pub const IN_PTRS: usize = 0;
    /// Pointers for the squaring step of modexp.
    pub const SQR_PTRS: usize = 1;
    /// Pointers for the multiply step of modexp.
    pub const MUL_PTRS: usize = 2;
    /// Pointers for the final output step.
    pub const OUT_PTRS: usize = 3;
}

/// Addresses a primitive entry point needs to run, resolved by name out of
/// a caller-supplied [`DecodeContext`] rather than a hardcoded PC table.
#[derive(Debug, Clone, Copy)]
struct EntryPoints {
    start: u32,
    stop: u32,
}

/// Drives named primitives (`modload`, `mulx`/montmul, `mul1`/montout,
/// `modexp`, `modexp_blinded`) against a caller-supplied decoded program,
/// packing/unpacking DMEM per the calling convention documented in
/// `original_source/sim_rsa_tests.py`.
///
/// Owns its own DMEM snapshot, mutated in place by each primitive run —
/// mirrors the original's `dmem = machine.dmem.copy()` pattern but without
/// a module-level global.
pub struct PrimitiveDriver {
    dmem: Vec<U256>,
    imem: Vec<Rc<dyn DecodedInstruction>>,
    decode_ctx: DecodeContext,
    byte_addressing: bool,
    total_instructions: u64,
    total_cycles: u64,
}

impl PrimitiveDriver {
    /// Build a driver over a decoded program. `dmem_depth` should be at
    /// least large enough to hold [`offsets::BOUT`] plus [`BN_MAX_WORDS`].
    pub fn new(
        imem: Vec<Rc<dyn DecodedInstruction>>,
        decode_ctx: DecodeContext,
        dmem_depth: usize,
        byte_addressing: bool,
    ) -> Self {
        Self {
            dmem: vec![U256::ZERO; dmem_depth],
            imem,
            decode_ctx,
            byte_addressing,
            total_instructions: 0,
            total_cycles: 0,
        }
    }

    /// Total instructions executed across every primitive run so far.
    pub fn total_instructions(&self) -> u64 {
        self.total_instructions
    }

    /// Total cycles charged across every primitive run so far.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Read back the driver's current DMEM snapshot.
    pub fn dmem(&self) -> &[U256] {
        &self.dmem
    }

    fn addressing_multiplier(&self) -> usize {
        if self.byte_addressing { DMEM_BYTE_ADDRESSING_MULTIPLIER } else { 1 }
    }

    fn entry_points(&self, name: &str, stop_name: &str) -> Result<EntryPoints, EngineError> {
        let start = *self
            .decode_ctx
            .functions
            .get(name)
            .ok_or_else(|| EngineError::DecodeError(format!("no entry point named '{name}'")))?;
        let stop = *self
            .decode_ctx
            .functions
            .get(stop_name)
            .ok_or_else(|| EngineError::DecodeError(format!("no stop address named '{stop_name}'")))?;
        Ok(EntryPoints { start, stop })
    }

    /// Pack pointers into slot `p_loc` per `load_pointer` in the reference
    /// Python backend.
    fn load_pointer(&mut self, bn_words: u32, p_loc: usize, p_a: usize, p_b: usize, p_c: usize) {
        let mult = self.addressing_multiplier();
        // Eight 32-bit fields pack exactly into the eight limbs of a pointer
        // word: mod, dinv, RR, a, b, c, bn_words, bn_words - 1.
        self.dmem[p_loc] = U256([
            (offsets::MOD * mult) as u32,
            (offsets::DINV * mult) as u32,
            (offsets::RR * mult) as u32,
            p_a as u32,
            p_b as u32,
            p_c as u32,
            bn_words,
            bn_words.saturating_sub(1),
        ]);
    }

    /// Pack the blinding parameter word per `load_blinding` in the
    /// reference Python backend.
    fn load_blinding(&mut self, pubexp: u32, rnd: u64, pad1: U256, pad2: U256) {
        let mult = self.addressing_multiplier();
        // Eight 32-bit fields pack exactly into the eight limbs of the
        // blinding word: pubexp, pad1[0..3), rnd[0..2), pad2[0..2).
        self.dmem[offsets::BLINDING * mult] = U256([
            pubexp,
            pad1.0[0],
            pad1.0[1],
            pad1.0[2],
            rnd as u32,
            (rnd >> BN_LIMB_LEN) as u32,
            pad2.0[0],
            pad2.0[1],
        ]);
    }

    /// Load a multi-word bignum value into DMEM starting at word offset
    /// `dmem_p` (already multiplied), zero-extending up to [`BN_MAX_WORDS`]
    /// beyond the supplied words, per `load_full_bn_val`.
    pub fn load_full_bn_val(&mut self, dmem_p: usize, words: &[U256]) -> Result<(), EngineError> {
        let mult = self.addressing_multiplier();
        let base = dmem_p / mult;
        for i in 0..BN_MAX_WORDS {
            let idx = base + i;
            if idx >= self.dmem.len() {
                return Err(EngineError::IndexRange { what: "dmem", index: idx, bound: self.dmem.len() });
            }
            self.dmem[idx] = words.get(i).copied().unwrap_or(U256::ZERO);
        }
        Ok(())
    }

    /// Read back a multi-word bignum value from DMEM, per `get_full_bn_val`.
    pub fn get_full_bn_val(&self, dmem_p: usize, bn_words: usize) -> Result<Vec<U256>, EngineError> {
        let mult = self.addressing_multiplier();
        let base = dmem_p / mult;
        (0..bn_words)
            .map(|i| {
                let idx = base + i;
                self.dmem
                    .get(idx)
                    .copied()
                    .ok_or(EngineError::IndexRange { what: "dmem", index: idx, bound: self.dmem.len() })
            })
            .collect()
    }

    /// Load the modulus at its fixed DMEM location, per `load_mod`.
    pub fn load_mod(&mut self, words: &[U256]) -> Result<(), EngineError> {
        let mult = self.addressing_multiplier();
        self.load_full_bn_val(offsets::MOD * mult, words)
    }

    fn run(&mut self, start: u32, stop: u32, breakpoints: Option<std::collections::HashSet<u32>>) -> Result<(), EngineError> {
        let mut machine = Machine::new(
            std::mem::take(&mut self.dmem),
            self.imem.clone(),
            Some(start),
            Some(stop),
            Some(self.decode_ctx.clone()),
            breakpoints,
        );
        loop {
            if machine.pc() == stop {
                break;
            }
            let outcome = machine.step()?;
            self.total_instructions += 1;
            self.total_cycles += u64::from(outcome.cycles);
            if !outcome.proceed {
                break;
            }
        }
        self.dmem = (0..machine.dmem_depth())
            .map(|i| machine.get_dmem(i).expect("index within dmem_depth"))
            .collect();
        Ok(())
    }

    /// Runs the `modload` primitive: computes the Montgomery constants
    /// `dinv` and `RR` for the modulus already loaded at [`offsets::MOD`].
    /// Must be run once any time DMEM's modulus slot changes.
    pub fn run_modload(&mut self, bn_words: u32) -> Result<(U256, Vec<U256>), EngineError> {
        let mult = self.addressing_multiplier();
        self.load_pointer(bn_words, slots::IN_PTRS, offsets::IN * mult, offsets::EXP * mult, offsets::OUT * mult);
        let ep = self.entry_points("modload", "modload_stop")?;
        self.run(ep.start, ep.stop, None)?;
        let dinv = self.dmem[offsets::DINV * mult];
        let rr = self.get_full_bn_val(offsets::RR * mult, bn_words as usize)?;
        Ok((dinv, rr))
    }

    /// Runs the Montgomery multiplication primitive (`mulx`):
    /// `out = (a * b) / R mod mod`, operands addressed by DMEM word offset.
    pub fn run_montmul(&mut self, bn_words: u32, p_a: usize, p_b: usize, p_out: usize) -> Result<Vec<U256>, EngineError> {
        self.load_pointer(bn_words, slots::IN_PTRS, p_a, p_b, p_out);
        let ep = self.entry_points("mulx", "mulx_stop")?;
        self.run(ep.start, ep.stop, None)?;
        self.get_full_bn_val(p_out, bn_words as usize)
    }

    /// Runs the Montgomery back-transformation primitive (`mul1`):
    /// `out = a / R mod mod`.
    pub fn run_montout(&mut self, bn_words: u32, p_a: usize, p_out: usize) -> Result<Vec<U256>, EngineError> {
        self.load_pointer(bn_words, slots::IN_PTRS, p_a, 0, p_out);
        let ep = self.entry_points("mul1", "mul1_stop")?;
        self.run(ep.start, ep.stop, None)?;
        self.get_full_bn_val(p_out, bn_words as usize)
    }

    /// Runs the generic modular exponentiation primitive (`modexp`).
    ///
    /// This is also used for `e = 65537` (the original's
    /// `run_modexp_65537`): a specialized fast-path routine for that
    /// exponent has a known flag-propagation bug between squaring
    /// iterations when run in a tight loop, so the original always routes
    /// 65537 through this generic, bit-scanning implementation instead.
    /// That routing decision is preserved here rather than "fixed",
    /// since it reflects the actual behaviour of the system being modeled.
    pub fn run_modexp(&mut self, bn_words: u32, exp: &[U256]) -> Result<Vec<U256>, EngineError> {
        let mult = self.addressing_multiplier();
        self.load_full_bn_val(offsets::EXP * mult, exp)?;
        self.load_pointer(bn_words, slots::IN_PTRS, offsets::IN * mult, offsets::RR * mult, offsets::IN * mult);
        self.load_pointer(bn_words, slots::SQR_PTRS, offsets::OUT * mult, offsets::OUT * mult, offsets::OUT * mult);
        self.load_pointer(bn_words, slots::MUL_PTRS, offsets::IN * mult, offsets::OUT * mult, offsets::OUT * mult);
        self.load_pointer(bn_words, slots::OUT_PTRS, offsets::OUT * mult, offsets::EXP * mult, offsets::OUT * mult);
        let ep = self.entry_points("modexp", "modexp_stop")?;
        self.run(ep.start, ep.stop, None)?;
        self.get_full_bn_val(offsets::OUT * mult, bn_words as usize)
    }

    /// Runs modular exponentiation for the public exponent `e = 65537`,
    /// ported from `run_modexp_65537` in the reference Python backend.
    ///
    /// That function takes an `inval` parameter but never actually loads it
    /// into DMEM before delegating to the generic routine — it calls
    /// `run_modexp(bn_words, 65537)` outright, relying on the caller having
    /// already placed the base at [`offsets::IN`] (e.g. via
    /// [`PrimitiveDriver::load_full_bn_val`]). That omission is preserved
    /// here rather than silently fixed, since this crate models the
    /// observed behaviour of the system rather than an idealized one.
    pub fn run_modexp_65537(&mut self, bn_words: u32) -> Result<Vec<U256>, EngineError> {
        self.run_modexp(bn_words, &[U256::from(RSA_PUBLIC_EXPONENT)])
    }

    /// Runs the blinded modular exponentiation primitive (`modexp_blinded`),
    /// which additionally loads the blinding parameter word with the
    /// public RSA exponent and zeroed padding/randomness (matching the
    /// reference `load_blinding(EXP_PUB, 0, 0, 0)` call).
    pub fn run_modexp_blinded(&mut self, bn_words: u32, exp: &[U256]) -> Result<Vec<U256>, EngineError> {
        let mult = self.addressing_multiplier();
        self.load_full_bn_val(offsets::EXP * mult, exp)?;
        self.load_pointer(bn_words, slots::IN_PTRS, offsets::IN * mult, offsets::RR * mult, offsets::IN * mult);
        self.load_pointer(bn_words, slots::SQR_PTRS, offsets::OUT * mult, offsets::OUT * mult, offsets::OUT * mult);
        self.load_pointer(bn_words, slots::MUL_PTRS, offsets::IN * mult, offsets::OUT * mult, offsets::OUT * mult);
        self.load_pointer(bn_words, slots::OUT_PTRS, offsets::OUT * mult, offsets::EXP * mult, offsets::OUT * mult);
        self.load_blinding(RSA_PUBLIC_EXPONENT, 0, U256::ZERO, U256::ZERO);
        let ep = self.entry_points("modexp_blinded", "modexp_blinded_stop")?;
        self.run(ep.start, ep.stop, None)?;
        self.get_full_bn_val(offsets::OUT * mult, bn_words as usize)
    }

    /// Full modular exponentiation with a word-sized exponent, composed
    /// from the `mulx`/`mul1` primitives via a standard square-and-multiply
    /// loop, ported from `modexp_word` in the reference Python backend.
    pub fn modexp_word(&mut self, bn_words: u32, inval: &[U256], exp: u32) -> Result<Vec<U256>, EngineError> {
        let mult = self.addressing_multiplier();
        let in_p = offsets::IN * mult;
        let rr_p = offsets::RR * mult;
        let out_p = offsets::OUT * mult;
        self.load_full_bn_val(in_p, inval)?;
        self.run_montmul(bn_words, in_p, rr_p, out_p)?;
        self.run_montmul(bn_words, in_p, rr_p, in_p)?;
        let exp_bits = 32 - exp.leading_zeros();
        for i in (0..exp_bits.saturating_sub(1)).rev() {
            self.run_montmul(bn_words, out_p, out_p, out_p)?;
            if exp & (1 << i) != 0 {
                self.run_montmul(bn_words, in_p, out_p, out_p)?;
            }
        }
        self.run_montout(bn_words, out_p, out_p)
    }

    /// Encrypt `msg` under the public key `(mod, 65537)`, ported from
    /// `rsa_encrypt` in the reference Python backend: loads the modulus,
    /// runs `modload` to derive the Montgomery constants, then `modexp_65537`.
    pub fn rsa_encrypt(&mut self, bn_words: u32, modulus: &[U256], msg: &[U256]) -> Result<Vec<U256>, EngineError> {
        let mult = self.addressing_multiplier();
        self.load_mod(modulus)?;
        self.run_modload(bn_words)?;
        self.load_full_bn_val(offsets::IN * mult, msg)?;
        self.run_modexp_65537(bn_words)
    }

    /// Decrypt `enc` under the private key `(mod, priv_key)`, ported from
    /// `rsa_decrypt` in the reference Python backend.
    pub fn rsa_decrypt(&mut self, bn_words: u32, modulus: &[U256], priv_key: &[U256], enc: &[U256]) -> Result<Vec<U256>, EngineError> {
        let mult = self.addressing_multiplier();
        self.load_mod(modulus)?;
        self.run_modload(bn_words)?;
        self.load_full_bn_val(offsets::IN * mult, enc)?;
        self.run_modexp(bn_words, priv_key)
    }
}

/// The standard RSA public exponent used by `run_modexp_blinded`'s default
/// blinding parameters.
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Ascii-encode a short message string as a bignum value, per `get_msg_val`
/// in the reference Python backend.
pub fn get_msg_val(msg: &str) -> U256 {
    let bytes = msg.as_bytes();
    let mut limbs = [0u32; 8];
    // big-endian byte string -> little-endian limb array, matching
    // Python's `int(hex_str, 16)` over the ascii hex encoding.
    let mut padded = vec![0u8; 32];
    let start = 32usize.saturating_sub(bytes.len());
    padded[start..].copy_from_slice(&bytes[..bytes.len().min(32)]);
    for (limb_idx, chunk) in padded.chunks(4).rev().enumerate() {
        limbs[limb_idx] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    U256(limbs)
}

/// Decode a bignum value back into its ascii message string, per
/// `get_msg_str` in the reference Python backend (stops at the first
/// all-zero byte pair from the top).
pub fn get_msg_str(value: U256) -> String {
    let mut bytes = Vec::with_capacity(32);
    for limb in value.0.iter().rev() {
        bytes.extend_from_slice(&limb.to_be_bytes());
    }
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[first_nonzero..]).into_owned()
}

/// Fixed 768/1024/2048/3072-bit RSA test fixtures, ported verbatim from
/// `original_source/sim_rsa_tests.py`'s `RSA_N`/`RSA_D` tables.
pub mod rsa_fixtures {
    /// RSA modulus, by key width in bits, as uppercase hex (no `0x` prefix).
    pub fn modulus_hex(bits: u32) -> &'static str {
        match bits {
            768 => "B0DBED46D932F07CD42023D2355A8617DB247236333BC2648BA4496E74FEFAD2820CC4123A4867E115CC94DF441B4EC018BA461B512CE20FC03277ED5F8BE5A300E63C2DA7108953A82B337438F73600FDDD5BBD7BC17CE175902B782D398569",
            1024 => "DF4EAF7345949834307E26AD4083F91721B04E1B0D6A44CE4E3E2E724C97DF898A391025AE204CF23B20B2A510DDB26B624EA69F924AD98697CC70203B6A3263CA7F59FB57B6A999E9D02E0F1CD47D8BA0BD0FD2D53B1F11B46A94CF4F0A2B44E7FA6B2491B4821FF675B691C5A0F62FD5FF10739B34F67A8823A9423CA82491",
            2048 => "9CD7612E438E15BECD739FB7F5864BE395905C85194C1D2E2CEF6E1FED75320F0AC1729F0C7850A299825390BE642349757B0CEB2D6897D6AFB1AA2ADE5E9BE3060DF2ACD9D71F506EC95DEBB4F0C0982304304610DCD46B57C730C306DDAF516E4041F810DE491852B318CA4950A83ACDB6947BDBF12D05CE570BBE3848BBC9B17636B8A8CCE2075CC87BCFCFF0FAA3C5D73A5EB2F4BFEAC2ED5116A2929C36A6860E24A56615E797225004FFC94DB0BC27055E2CF7EFDC5D58A13B6083B78CB7D0366D552E052363744A9737A77840EF3E66FDBA6EB3724A21821F33AD620CF21AD26AB5A7F251691F38A5579AC58867E311A6534FB1E90741DEE8DF93A999",
            3072 => "DA7B57497C76318A1B0E4EB6DC59584918FDED8D11E48869DB8471C8FBA5C5FC4388602C7DAD25D74FD55314988CA03F5BB0233BB5FCB6538EEEB1E9144E46A3900289E2042BBB0B37FC3026B10CCCBB9DBBFEC4C30EED248C39F35F55CA95D3075621F42EF7072D80DE32597048F21869F77898057AEACA5FA54B21A93DE8A5C1FB5E60DEA0CC1DB872A217D09A58F21F3D4E3C76A8CBEE5B8B7C6A683024C1402A13A3C5F175F63C1D15E8958CD10965E06C7CF21F8EDCEE55861DA81E7220842E168CB1180C95AF0DF9CDA50818E5519B50CDACF23A1D63571245975DBEC04FA511278F069CC0D3D8E471241BF13939C9D0034860B536D29A3162D9EC5D684AC20EAD2CD4F46C49522323A8D3650D63796A76B6B07B4B7BDD98922B7AF54F5C67E51AAF5D84D4A2A3A104C0FA7F343F468F27F93C74FCE64F86BEE7CA6DE90A2F3CB2D696E68C9C044FEF54D54F3A15CEDB2E8B54F90F3B3426CAB25C9F8F08AC0496B5026F8B2F6470837DA95855DDF20215E6010F3E48CAA441EE813625",
            _ => panic!("no RSA fixture for key width {bits}"),
        }
    }

    /// RSA private exponent, by key width in bits, as uppercase hex.
    pub fn private_exponent_hex(bits: u32) -> &'static str {
        match bits {
            768 => "AEADB950258C1B5C9F42D33E7675DF4546AB5BA6CEB972494E66C82431A7F961DB12F2C132117B9023B0B9453F065DA2D7350FDDFC03DF8D916B83F959EE671E1A209E8BF8F6E2B2F529714C2254CF7E97BC7024DD6D52FE17D9D6417B764001",
            1024 => "9A6D85F407A86D619A2F837BC8E3FB7CBDB5792E4826B7929C956FF5677698063BEA9E7A106312136A4480869A95566FE0BA578C7ED4F87D95B8B1C9F88CC66EE57BA0AFA04E4E84D797B95ADD32E52BE580B3B2BF56FF01DCE6A66C4A811D8FEA4BED2408F467AF0DF2FD373F3125FAEE35B0DB6611FF49E1E5FF1BCCC30E09",
            2048 => "4E9D021FDF4A8B89BC8F14E26F15665A6770197FB9435668FBAAF326DBADDF6E7CB4A3D026BEF3A3DC8FDF74F0895ECA86312C3380EA291939AD329F142095C0401BA3A491F7EAC1351687960A7696026BA2C0D38DC6324EAF8BAEDC4247C1856E5E94F252FA27E7222494EB67BE1EE48291DE710AB8231A02E7CC8206D22615549752CDF53F6DC6B97030BEC588A6B065169C4C84E27A6EE9C7BDCF4527FC19C6231D2B88A2671FC2D6D3A079FBBFEA38A8DF4FBC9B8EEE04B77C00D7951A03827AE841B8B1AF7FF13089566D07115579DD680F82085CCC2447546886F1F03F5210ADE4163316022162E32F5DEB225B64B42922742429A94C668431CA9995F5",
            3072 => "19708FCD3B552CB65238E843E38C30505682D206C163739BF3429C22068C3BCAAB23D96FEFEE6F3341839F98E5DAE2C04F5410AEEB76BB423E89A8C5DD721721BF1F9C1070D3A4C9B5BF7F6966C89836F4BEA8D8C157DD0BD8462EEB19EDDD5C72B507B46C6C44BD91D6BA2A005EE2E50F08F1C2498F9D3A953519023B98F3853E5A51C65F7B37BD9576439AF98EB985D8CAEFFB5D44438E0D93FE61676A014275989F33B8F8398394DA637BE37D8576AF488D2ACAF141C33EB18CF76BE91400AF9684C249B9A7FED7A28A52BD11DCEB0A8453538B4CB84DA9C991507FDF71FF083441DD7BF7A488A25A3599A4943DD919F302A9B7442B6BCC835946BA9457FF25F4EA6176EE00ADE999FAD40468F8DE12FEC788A836C1F777B8F1F7359A32CFD92629F9F49B7360F688AA12F94769D57FC82F1FEABECB5ADCD454C4552B2C628DFD2626D1ABE943855330F65711537176CAD2996CE98E717023AC653061587CC8F26C859D9AC19AC762FBAF6F2DE8FFAB23A35C94265FE08A082BA7B4E44C1",
            _ => panic!("no RSA fixture for key width {bits}"),
        }
    }

    /// The standard RSA public exponent.
    pub const EXP_PUB: u32 = 65537;
}
