//! Convenience methods for constructing series in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let dx = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
            (0..n)
                .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
                .collect()
        }
    }
}

/// Copy of `vals` with the entries at `missing` replaced by NaN.
/// Indices past the end are ignored.
pub fn with_missing<T>(vals: &[T], missing: &[usize]) -> Vec<T>
where
    T: Float,
{
    let mut out = vals.to_vec();
    for &i in missing {
        if let Some(v) = out.get_mut(i) {
            *v = T::nan();
        }
    }
    out
}
