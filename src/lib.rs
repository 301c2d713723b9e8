pub mod cluster;
pub mod emit;
pub mod error;
pub mod pattern;
pub mod point;

pub use cluster::{Bounds, ClusterModel, DEFAULT_K, VIEW_MARGIN};
pub use emit::write_points;
pub use error::{Error, Result};
pub use pattern::{Eggs, Grid, Pattern, Scatter, Sine};
pub use point::{parse_line, Coord, NamedPoint, DEFAULT_LABEL};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Sets up `env_logger` on stderr. `RUST_LOG` overrides `default_filter`.
pub fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();
}

/// Fixed stream for a given seed, fresh entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}
