//! Bracketing search over a strictly monotonic series with missing entries.
//!
//! Searches never mutate the vector; each query returns its own [`Bracket`],
//! so a shared reference can be queried from any number of threads at once.

pub mod buffered;

pub use buffered::BufferedOrderedVector;

use num_traits::Float;

use crate::error::Error;
use crate::order::DataOrder;

/// A pair of non-missing indices surrounding a query, with a fractional
/// position between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Index of the non-missing value at or before the query
    pub lower: usize,
    /// Index of the non-missing value at or after the query
    pub upper: usize,
    /// Position of the query in index space, in `[lower, upper]`
    pub value: T,
}

impl<T: Float> Bracket<T> {
    /// A degenerate bracket sitting on a single index.
    #[inline]
    fn exact(i: usize) -> Option<Self> {
        Some(Self {
            lower: i,
            upper: i,
            value: T::from(i)?,
        })
    }

    /// Whether the bracket sits on a single index, either because the query
    /// matched a stored value or because it was clamped at an edge.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }

    /// Distance between the bracketing indices, including any missing entries.
    #[inline]
    pub fn width(&self) -> usize {
        self.upper - self.lower
    }
}

/// A classified series that can be searched for brackets.
///
/// Implementors provide the raw values and their cached [`DataOrder`]; the
/// search methods are shared. Nothing here validates the order: searching a
/// series that is not strictly monotonic gives meaningless brackets.
pub trait OrderedVector<T: Float> {
    /// Raw values, including missing (NaN) entries.
    fn values(&self) -> &[T];

    /// Direction computed once at construction.
    fn data_order(&self) -> DataOrder;

    /// Total number of entries, including missing ones.
    #[inline]
    fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether there are no entries at all, missing or not.
    #[inline]
    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Raw value at `i`, which may be NaN.
    ///
    /// # Errors
    /// * If `i` is outside `[0, len)`
    #[inline]
    fn get(&self, i: usize) -> Result<T, Error> {
        self.values()
            .get(i)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: i,
                len: self.len(),
            })
    }

    /// Index of the first non-missing entry.
    ///
    /// Scans from the front; implementors with immutable storage should
    /// cache this, since every `locate` call asks for it.
    fn first_valid(&self) -> Option<usize> {
        self.values().iter().position(|v| !v.is_nan())
    }

    /// Index of the last non-missing entry.
    ///
    /// Scans from the back, with the same caching advice as [`OrderedVector::first_valid`].
    fn last_valid(&self) -> Option<usize> {
        self.values().iter().rposition(|v| !v.is_nan())
    }

    /// Smallest and largest non-missing values, regardless of direction.
    fn domain(&self) -> Option<(T, T)> {
        let vals = self.values();
        let (a, b) = (vals[self.first_valid()?], vals[self.last_valid()?]);
        Some((a.min(b), a.max(b)))
    }

    /// Whether `x` lies inside the closed domain. Always false for NaN.
    fn contains(&self, x: T) -> bool {
        self.domain()
            .map(|(lo, hi)| x >= lo && x <= hi)
            .unwrap_or(false)
    }

    /// Bisection search for the tightest bracket of non-missing values
    /// around `x`, stepping over missing entries met along the way.
    ///
    /// An exact match gives `lower == upper` at the matching index. A query
    /// beyond the first or last non-missing value is clamped to that edge,
    /// also with `lower == upper`; recognizing that as extrapolation is left
    /// to the caller.
    ///
    /// Returns `None` if `x` is NaN or there are no non-missing entries.
    fn locate(&self, x: T) -> Option<Bracket<T>> {
        if x.is_nan() {
            return None;
        }

        let vals = self.values();
        let order = self.data_order();
        let mut lo = self.first_valid()?;
        let mut hi = self.last_valid()?;

        // Clamp at the edges; this also catches exact hits on either edge
        if !order.precedes(vals[lo], x) {
            return Bracket::exact(lo);
        }
        if !order.precedes(x, vals[hi]) {
            return Bracket::exact(hi);
        }

        // From here on vals[lo] strictly precedes x, which strictly precedes vals[hi]
        while let Some(m) = valid_between(vals, lo, hi) {
            let v = vals[m];
            if v == x {
                return Bracket::exact(m);
            }
            if order.precedes(v, x) {
                lo = m;
            } else {
                hi = m;
            }
        }

        let (x0, x1) = (vals[lo], vals[hi]);
        let (i0, i1) = (T::from(lo)?, T::from(hi)?);
        let t = (x - x0) / (x1 - x0);

        // An infinite endpoint gives inf / inf; the query then sits on the finite side
        let t = if t.is_nan() {
            match (x0.is_infinite(), x1.is_infinite()) {
                (true, false) => T::one(),
                (false, true) => T::zero(),
                _ => T::one() / (T::one() + T::one()),
            }
        } else {
            t.max(T::zero()).min(T::one())
        };

        Some(Bracket {
            lower: lo,
            upper: hi,
            value: i0 + t * (i1 - i0),
        })
    }

    /// Bracket the position `i` by its nearest non-missing neighbors, for
    /// callers that already know roughly where they are.
    ///
    /// `lower` is the nearest non-missing index below `i` and `upper` the
    /// nearest above. At an edge with no neighbor on one side, that side
    /// falls back to `i` itself if it is not missing. `value` is just `i`;
    /// no data values are consulted, so it is only good to within one index.
    ///
    /// Cost scales with the length of the local run of missing entries.
    fn locate_around_index(&self, i: usize) -> Option<Bracket<T>> {
        let vals = self.values();
        if i >= vals.len() {
            return None;
        }

        let here = (!vals[i].is_nan()).then_some(i);
        let lower = prev_valid(vals, i).or(here)?;
        let upper = next_valid(vals, i).or(here)?;

        Some(Bracket {
            lower,
            upper,
            value: T::from(i)?,
        })
    }

    /// Fill `target` with ascending non-missing indices centered on `bracket`.
    ///
    /// * Length 0: nothing to do.
    /// * Length 1: `[lower]`.
    /// * Length 2: `[lower, upper]`.
    /// * Longer: the bracket (a single index if exact) padded outward with
    ///   the nearest non-missing neighbors, alternating below then above,
    ///   jumping over missing runs.
    ///
    /// Returns `false` if either side runs out of neighbors, or if the
    /// bracket does not fit this vector. The contents of `target` are
    /// unspecified in that case.
    fn copy_index_into(&self, bracket: &Bracket<T>, target: &mut [usize]) -> bool {
        let vals = self.values();
        let Bracket { lower, upper, .. } = *bracket;
        if lower > upper || upper >= vals.len() {
            return false;
        }

        let n = target.len();
        match n {
            0 => return true,
            1 => {
                target[0] = lower;
                return true;
            }
            2 => {
                target[0] = lower;
                target[1] = upper;
                return true;
            }
            _ => {}
        }

        let core = if bracket.is_exact() { 1 } else { 2 };
        let pad = n - core;
        let below = (pad + 1) / 2;

        target[below] = lower;
        target[below + core - 1] = upper;

        let mut j = lower;
        for k in (0..below).rev() {
            match prev_valid(vals, j) {
                Some(p) => j = p,
                None => return false,
            }
            target[k] = j;
        }

        let mut j = upper;
        for k in below + core..n {
            match next_valid(vals, j) {
                Some(p) => j = p,
                None => return false,
            }
            target[k] = j;
        }

        true
    }

    /// Allocating version of [`OrderedVector::copy_index_into`].
    #[cfg(feature = "std")]
    fn copy_index(&self, bracket: &Bracket<T>, width: usize) -> Option<Vec<usize>> {
        let mut out = vec![0; width];
        self.copy_index_into(bracket, &mut out).then_some(out)
    }
}

/// Nearest non-missing index strictly below `i`.
#[inline]
fn prev_valid<T: Float>(vals: &[T], i: usize) -> Option<usize> {
    vals[..i].iter().rposition(|v| !v.is_nan())
}

/// Nearest non-missing index strictly above `i`.
#[inline]
fn next_valid<T: Float>(vals: &[T], i: usize) -> Option<usize> {
    vals[i + 1..]
        .iter()
        .position(|v| !v.is_nan())
        .map(|p| p + i + 1)
}

/// A non-missing index strictly between `lo` and `hi`, as close to the
/// midpoint as the missing entries allow.
///
/// Looks down from the midpoint first, then up.
#[inline]
fn valid_between<T: Float>(vals: &[T], lo: usize, hi: usize) -> Option<usize> {
    if hi - lo < 2 {
        return None;
    }
    let mid = lo + (hi - lo) / 2;

    (lo + 1..=mid)
        .rev()
        .find(|&i| !vals[i].is_nan())
        .or_else(|| (mid + 1..hi).find(|&i| !vals[i].is_nan()))
}
