use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Strictly monotonic series of `n` values with uneven spacing of at least 0.1
pub fn monotonic(rng: &mut StdRng, n: usize, descending: bool) -> Vec<f64> {
    let sign = if descending { -1.0 } else { 1.0 };
    let mut acc = rng.random_range(-10.0..10.0);
    randn::<f64>(rng, n)
        .into_iter()
        .map(|d| {
            acc += sign * (0.1 + d);
            acc
        })
        .collect()
}

/// Copy of `vals` with roughly `frac` of the interior entries set to NaN.
/// The first and last entries are always kept.
pub fn with_random_gaps(rng: &mut StdRng, vals: &[f64], frac: f64) -> Vec<f64> {
    let n = vals.len();
    vals.iter()
        .enumerate()
        .map(|(i, &v)| {
            if i > 0 && i + 1 < n && rng.random_bool(frac) {
                f64::NAN
            } else {
                v
            }
        })
        .collect()
}
