//! Tables of parallel y-series over an ordered x-axis.
//!
//! A [`Table`] is normally built by [`TableFactory`], which checks the
//! x-axis order. Evaluation never extrapolates: a NaN query or one outside
//! the non-missing x-domain is an [`Error::Extrapolation`].

pub mod factory;
pub mod interpolation;

pub use factory::TableFactory;
pub use interpolation::Interpolation;

use num_traits::Float;

use crate::error::Error;
use crate::ordered_vector::{BufferedOrderedVector, OrderedVector};

/// One x-axis bound to one or more y-series of the same length.
///
/// The table owns its x-axis vector and borrows the y-series.
/// Evaluation takes `&self`, so a table can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a, T: Float, V = BufferedOrderedVector<'a, T>> {
    x: V,
    ys: &'a [&'a [T]],
    interpolation: Interpolation,
}

impl<'a, T: Float, V: OrderedVector<T>> Table<'a, T, V> {
    /// Bind `ys` to the x-axis `x`.
    ///
    /// Does not check the order of `x`; use [`TableFactory`] for that.
    ///
    /// # Errors
    /// * If any y-series length differs from the x-axis length
    /// * If `interpolation` has no kernel
    pub fn new(x: V, ys: &'a [&'a [T]], interpolation: Interpolation) -> Result<Self, Error> {
        let expected = x.len();
        if let Some((series, y)) = ys.iter().enumerate().find(|(_, y)| y.len() != expected) {
            return Err(Error::LengthMismatch {
                series,
                expected,
                found: y.len(),
            });
        }
        let interpolation = interpolation.check_supported()?;

        Ok(Self {
            x,
            ys,
            interpolation,
        })
    }

    /// The x-axis vector.
    pub fn x(&self) -> &V {
        &self.x
    }

    /// The borrowed y-series, in output order.
    pub fn ys(&self) -> &'a [&'a [T]] {
        self.ys
    }

    /// Kernel used by [`Table::evaluate`].
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Number of y-series, which is the number of outputs per query.
    pub fn n_series(&self) -> usize {
        self.ys.len()
    }

    /// Index of the x-value nearest to `x`, preferring the lower side of
    /// the bracket on a tie.
    ///
    /// # Errors
    /// * If `x` is NaN, outside the non-missing x-domain, or the x-axis has
    ///   no non-missing values
    pub fn nearest_index(&self, x: T) -> Result<usize, Error> {
        let extrapolation = || Error::Extrapolation {
            x: x.to_f64().unwrap_or(f64::NAN),
        };
        let b = self.x.locate(x).ok_or_else(extrapolation)?;
        let vals = self.x.values();
        let (x0, x1) = (vals[b.lower], vals[b.upper]);

        // A single-index bracket is either an exact hit or clamped at an edge
        if b.is_exact() {
            return if x0 == x {
                Ok(b.lower)
            } else {
                Err(extrapolation())
            };
        }

        if (x - x0).abs() <= (x1 - x).abs() {
            Ok(b.lower)
        } else {
            Ok(b.upper)
        }
    }

    /// Evaluate every y-series at `x`, writing one value per series to `out`.
    ///
    /// All outputs come from the same bracket decision.
    ///
    /// # Errors
    /// * If `out` does not have one entry per y-series
    /// * If `x` cannot be evaluated without extrapolating
    #[inline]
    pub fn evaluate(&self, x: T, out: &mut [T]) -> Result<(), Error> {
        if out.len() != self.ys.len() {
            return Err(Error::OutputLength {
                expected: self.ys.len(),
                found: out.len(),
            });
        }

        match self.interpolation {
            Interpolation::Nearest => {
                let i = self.nearest_index(x)?;
                for (o, y) in out.iter_mut().zip(self.ys) {
                    *o = y[i];
                }
            }
            kind => return Err(Error::UnsupportedInterpolation(kind)),
        }

        Ok(())
    }

    /// Evaluate at each of `xs`, writing `n_series()` values per query
    /// to `out`, query by query.
    ///
    /// # Errors
    /// * If `out` does not have `xs.len() * n_series()` entries
    /// * On the first query that cannot be evaluated without extrapolating
    pub fn evaluate_many(&self, xs: &[T], out: &mut [T]) -> Result<(), Error> {
        let n = self.ys.len();
        if out.len() != xs.len() * n {
            return Err(Error::OutputLength {
                expected: xs.len() * n,
                found: out.len(),
            });
        }
        if n == 0 {
            // Still reject queries that would extrapolate
            return xs.iter().try_for_each(|&x| self.nearest_index(x).map(|_| ()));
        }

        for (&x, row) in xs.iter().zip(out.chunks_exact_mut(n)) {
            self.evaluate(x, row)?;
        }

        Ok(())
    }

    /// Evaluate at `x`, allocating for the output for convenience.
    #[cfg(feature = "std")]
    pub fn evaluate_alloc(&self, x: T) -> Result<Vec<T>, Error> {
        let mut out = vec![T::zero(); self.ys.len()];
        self.evaluate(x, &mut out)?;
        Ok(out)
    }

    /// Evaluate at each of `xs`, allocating for the output for convenience.
    #[cfg(feature = "std")]
    pub fn evaluate_many_alloc(&self, xs: &[T]) -> Result<Vec<T>, Error> {
        let mut out = vec![T::zero(); xs.len() * self.ys.len()];
        self.evaluate_many(xs, &mut out)?;
        Ok(out)
    }
}
