//! Seeded string hashing. Stands in for an RNG wherever a derived field has to
//! be stable across renders and across runs.

/// Polynomial rolling hash of `seed-salt` over UTF-16 code units
/// (`h = h * 31 + unit`, wrapping at 32 bits).
pub fn seeded_hash(seed: &str, salt: &str) -> i32 {
    seed.encode_utf16()
        .chain("-".encode_utf16())
        .chain(salt.encode_utf16())
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// `|hash| mod len` as an index. `i32::MIN` has no positive counterpart, so the
/// magnitude is taken in 64 bits.
pub fn seeded_index(seed: &str, salt: &str, len: usize) -> usize {
    let magnitude = i64::from(seeded_hash(seed, salt)).unsigned_abs();
    (magnitude % len as u64) as usize
}

/// Pick one element of `values` for `(seed, salt)`. Same inputs, same element.
///
/// # Panics
///
/// Panics if `values` is empty; every caller passes a static, non-empty table.
pub fn deterministic_choice<'a, T>(values: &'a [T], seed: &str, salt: &str) -> &'a T {
    assert!(
        !values.is_empty(),
        "deterministic_choice called with an empty list (seed={seed}, salt={salt})"
    );
    &values[seeded_index(seed, salt, values.len())]
}

const UNIT_RESOLUTION: u64 = 10_000;

/// Map `(seed, salt)` onto `[0, 1)`.
pub fn unit_interval(seed: &str, salt: &str) -> f64 {
    seeded_index(seed, salt, UNIT_RESOLUTION as usize) as f64 / UNIT_RESOLUTION as f64
}
