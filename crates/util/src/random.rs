use crate::error::{Result, UtilError};
use crate::types::is_number_f64;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Validate and normalise a `[min, max]` range: both bounds must be real
/// non-negative numbers; they are floored and swapped if reversed.
fn normalize_range(min: f64, max: f64) -> Result<(u64, u64)> {
    if !(is_number_f64(min) && is_number_f64(max)) || min < 0.0 || max < 0.0 {
        tracing::debug!(min, max, "rejecting random range");
        return Err(UtilError::InvalidRange { min, max });
    }
    let (a, b) = (min.floor() as u64, max.floor() as u64);
    Ok(if a > b { (b, a) } else { (a, b) })
}

/// A uniformly distributed integer in `[min, max]` (inclusive), using the
/// thread-local RNG.
///
/// # Examples
///
/// ```
/// use applet_util::random::random_in_range;
///
/// let n = random_in_range(1.0, 10.0).unwrap();
/// assert!((1..=10).contains(&n));
/// assert!(random_in_range(-1.0, 10.0).is_err());
/// ```
pub fn random_in_range(min: f64, max: f64) -> Result<u64> {
    let (min, max) = normalize_range(min, max)?;
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// A reproducible random source.
///
/// Uses the xoshiro256** PRNG, so the same seed yields the same sequence.
pub struct SeededRandom {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl SeededRandom {
    /// Create a generator with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Same contract as [`random_in_range`].
    pub fn in_range(&mut self, min: f64, max: f64) -> Result<u64> {
        let (min, max) = normalize_range(min, max)?;
        Ok(self.rng.gen_range(min..=max))
    }
}
