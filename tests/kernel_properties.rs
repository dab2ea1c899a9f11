//! Property-based tests over the 256-bit integer kernel (component A),
//! exercised as a black box through the crate's public API rather than
//! `u256.rs`'s own inline `#[cfg(test)]` module (which covers internal
//! invariants the public surface doesn't expose, like raw limb layout).

use dcrypto_sim::prelude::*;
use quickcheck_macros::quickcheck;

const K: RefKernel = RefKernel;

#[quickcheck]
fn add_sub_are_inverse(a: u64, b: u64) -> bool {
    let ua = U256::from(a);
    let ub = U256::from(b);
    let (sum, _) = K.add(ua, ub, false);
    let (back, borrow) = K.sub(sum, ub, false);
    back == ua && !borrow
}

#[quickcheck]
fn not_is_involutive(a: u64) -> bool {
    let ua = U256::from(a);
    K.not(K.not(ua)) == ua
}

#[quickcheck]
fn shl_by_zero_is_identity(a: u64) -> bool {
    let ua = U256::from(a);
    K.shl(ua, 0) == ua && K.shr(ua, 0) == ua
}

#[quickcheck]
fn xor_with_self_is_zero(a: u64) -> bool {
    let ua = U256::from(a);
    K.xor(ua, ua) == U256::ZERO
}

#[quickcheck]
fn cmp_is_antisymmetric(a: u64, b: u64) -> bool {
    K.cmp(U256::from(a), U256::from(b)) == K.cmp(U256::from(b), U256::from(a)).reverse()
}

#[test]
fn set_limb_round_trips_every_index() {
    for idx in 0..8 {
        let v = K.set_limb(U256::ZERO, idx, 0xdead_beef).unwrap();
        assert_eq!(K.get_limb(v, idx).unwrap(), 0xdead_beef);
        for other in 0..8 {
            if other != idx {
                assert_eq!(K.get_limb(v, other).unwrap(), 0);
            }
        }
    }
}

#[test]
fn set_half_word_covers_128_bits_each() {
    let lower = K.set_half_word(U256::ZERO, 0, u128::MAX).unwrap();
    assert_eq!(lower.low_u128(), u128::MAX);
    assert_eq!(K.get_limb(lower, 4).unwrap(), 0);

    let upper = K.set_half_word(U256::ZERO, 1, u128::MAX).unwrap();
    assert_eq!(upper.low_u128(), 0);
    assert_eq!(K.get_limb(upper, 4).unwrap(), u32::MAX);
    assert_eq!(K.get_limb(upper, 7).unwrap(), u32::MAX);
}

#[test]
fn add_with_carry_in_propagates() {
    let (sum_no_cin, cout) = K.add(U256::from(1u32), U256::from(2u32), false);
    assert_eq!(sum_no_cin, U256::from(3u32));
    assert!(!cout);

    let (sum_with_cin, _) = K.add(U256::from(1u32), U256::from(2u32), true);
    assert_eq!(sum_with_cin, U256::from(4u32));
}

#[test]
fn half_word_index_out_of_range_errors() {
    assert!(matches!(
        K.set_half_word(U256::ZERO, 2, 0),
        Err(EngineError::IndexRange { what: "half-word", .. })
    ));
}
