use crate::PseudoRandomNumberGenerator;

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[min, max]`.
///
/// A raw draw of `n` maps to `min + n % (max - min + 1)`, so a scripted draw of `value - min`
/// yields exactly `value`.
pub fn roll(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    range(prng, min, max + 1)
}
