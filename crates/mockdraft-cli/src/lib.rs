// Shared plumbing for the command-line front ends: logging setup, seeded
// randomness, and the text report.

pub mod logging;
pub mod report;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the draft RNG. Without an explicit seed a random one is chosen; it
/// is returned so the caller can log it and the run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
