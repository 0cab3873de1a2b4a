//! CLI command implementations

pub mod batch;
pub mod check;
pub mod generate;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generator for drawing request categories
fn category_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
