//! Monotonic-direction classification of a series with missing entries.
use core::fmt;

use itertools::Itertools;
use num_traits::Float;

/// Direction of a series, read in index order with missing (NaN) entries skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataOrder {
    StrictlyAscending,
    StrictlyDescending,
    /// Contains a tie or a change of direction.
    Unordered,
}

impl DataOrder {
    /// Classify `vals` in a single pass.
    ///
    /// Each non-missing value is compared with the previous non-missing value;
    /// missing entries are never counted as ties. A series with zero or one
    /// non-missing value is vacuously [`DataOrder::StrictlyAscending`], so callers
    /// that need at least two points must check that separately.
    pub fn classify<T: Float>(vals: &[T]) -> Self {
        let mut order = None;

        let valid = vals.iter().copied().filter(|v| !v.is_nan());
        for (prev, next) in valid.tuple_windows::<(T, T)>() {
            let step = if next > prev {
                DataOrder::StrictlyAscending
            } else if next < prev {
                DataOrder::StrictlyDescending
            } else {
                return DataOrder::Unordered;
            };

            match order {
                None => order = Some(step),
                Some(o) if o != step => return DataOrder::Unordered,
                Some(_) => {}
            }
        }

        order.unwrap_or(DataOrder::StrictlyAscending)
    }

    /// Whether this is one of the two strict directions.
    #[inline]
    pub fn is_monotonic(self) -> bool {
        !matches!(self, DataOrder::Unordered)
    }

    /// Whether `a` comes strictly before `b` along this direction.
    ///
    /// Unordered series are compared as ascending; they are never searched.
    #[inline]
    pub(crate) fn precedes<T: Float>(self, a: T, b: T) -> bool {
        match self {
            DataOrder::StrictlyDescending => a > b,
            _ => a < b,
        }
    }
}

impl fmt::Display for DataOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataOrder::StrictlyAscending => "strictly ascending",
            DataOrder::StrictlyDescending => "strictly descending",
            DataOrder::Unordered => "unordered",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::DataOrder::{self, *};

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_classify_strict() {
        assert_eq!(DataOrder::classify(&[0.0, 1.0, 2.5, 7.0]), StrictlyAscending);
        assert_eq!(DataOrder::classify(&[7.0, 2.5, 1.0, 0.0]), StrictlyDescending);
        assert_eq!(DataOrder::classify(&[-3.0_f32, -2.0]), StrictlyAscending);
    }

    #[test]
    fn test_classify_unordered() {
        assert_eq!(DataOrder::classify(&[3.0, 1.0, 2.0]), Unordered);
        assert_eq!(DataOrder::classify(&[1.0, 2.0, 2.0, 3.0]), Unordered);
        assert_eq!(DataOrder::classify(&[1.0, 1.0]), Unordered);
        assert_eq!(DataOrder::classify(&[1.0, 2.0, 3.0, 2.5]), Unordered);
    }

    /// Missing entries are skipped, never treated as ties or turns
    #[test]
    fn test_classify_with_missing() {
        assert_eq!(
            DataOrder::classify(&[NAN, 0.0, NAN, NAN, 1.0, 2.0, NAN]),
            StrictlyAscending
        );
        assert_eq!(DataOrder::classify(&[5.0, NAN, 4.0, NAN, 1.0]), StrictlyDescending);
        assert_eq!(DataOrder::classify(&[5.0, NAN, 5.0]), Unordered);
        assert_eq!(DataOrder::classify(&[1.0, NAN, 3.0, NAN, 2.0]), Unordered);
    }

    /// Zero or one valid point is vacuously ascending
    #[test]
    fn test_classify_degenerate() {
        assert_eq!(DataOrder::classify::<f64>(&[]), StrictlyAscending);
        assert_eq!(DataOrder::classify(&[NAN, NAN]), StrictlyAscending);
        assert_eq!(DataOrder::classify(&[NAN, 4.0, NAN]), StrictlyAscending);
    }

    #[test]
    fn test_precedes() {
        assert!(StrictlyAscending.precedes(1.0, 2.0));
        assert!(!StrictlyAscending.precedes(2.0, 2.0));
        assert!(StrictlyDescending.precedes(2.0, 1.0));
        assert!(!StrictlyDescending.precedes(1.0, 2.0));
        assert!(StrictlyAscending.is_monotonic());
        assert!(StrictlyDescending.is_monotonic());
        assert!(!Unordered.is_monotonic());
    }
}
