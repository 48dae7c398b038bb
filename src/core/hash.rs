//! Urchin domain hash, the number at the front of a `__utma` cookie value.
//!
//! For `__utma=173272373.nnnnn...` the domain hash is `173272373`, which is
//! what `google.com` hashes to.

const ACCUMULATOR_MASK: i32 = 268_435_455;
const FOLD_MASK: i32 = 266_338_304;

/// Returned for an empty domain.
pub const EMPTY_DOMAIN_HASH: i32 = 1;

/// Returned when the domain is too long to index with an `i32`.
pub const OVERFLOW_HASH: i32 = 0;

/// Computes the domain hash over raw bytes.
///
/// Bytes are walked last to first and each one is sign-extended from `i8`,
/// so anything at or above `0x80` contributes a negative value. Every step
/// wraps at 32 bits and `>>` is arithmetic.
pub fn domain_hash(domain: &[u8]) -> i32 {
    if domain.is_empty() {
        return EMPTY_DOMAIN_HASH;
    }
    if length_overflows(domain.len()) {
        return OVERFLOW_HASH;
    }

    domain.iter().rev().fold(0i32, |a, &byte| {
        let o = byte as i8 as i32;
        let a = ((a << 6) & ACCUMULATOR_MASK)
            .wrapping_add(o)
            .wrapping_add(o << 14);
        let c = a & FOLD_MASK;
        if c != 0 {
            a ^ (c >> 21)
        } else {
            a
        }
    })
}

/// Convenience wrapper over [`domain_hash`] for UTF-8 input.
pub fn hash(domain: &str) -> i32 {
    domain_hash(domain.as_bytes())
}

fn length_overflows(len: usize) -> bool {
    i32::try_from(len).is_err()
}
