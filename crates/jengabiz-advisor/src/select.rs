//! Uniform random pick from a reply pool.

use rand::Rng;

/// Pick one reply uniformly at random. No repeat avoidance.
///
/// Returns `None` only for an empty pool; built-in pools are never empty.
pub fn select<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> Option<&'static str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}
