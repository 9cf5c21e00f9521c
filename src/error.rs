//! Error type for table construction and evaluation.
//!
//! Only the public boundary ([`TableFactory`](crate::TableFactory),
//! [`Table`](crate::Table) and checked accessors) returns these. The locate
//! primitives signal failure with `Option`/`bool` instead.
use thiserror::Error;

use crate::order::DataOrder;
use crate::table::Interpolation;

/// Errors from building or evaluating a table.
#[derive(Debug, Clone, Copy, Error)]
#[non_exhaustive]
pub enum Error {
    /// The x-values are not strictly monotonic once missing entries are skipped.
    #[error("x values must be strictly ascending or strictly descending, found {order}")]
    NotMonotonic { order: DataOrder },

    /// A y-series does not have the same number of entries as the x-values.
    #[error("y series {series} has length {found}, expected {expected} to match x")]
    LengthMismatch {
        series: usize,
        expected: usize,
        found: usize,
    },

    /// The interpolation kind is reserved but has no kernel.
    #[error("unsupported interpolation kind: {0}")]
    UnsupportedInterpolation(Interpolation),

    /// A string did not name any interpolation kind.
    #[error("unknown interpolation kind")]
    UnknownInterpolation,

    /// A checked accessor was given a position outside the vector.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A buffer window does not fit inside its buffer.
    #[error("window at offset {offset} with length {len} exceeds buffer of length {buffer_len}")]
    WindowOutOfRange {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    /// Caller-provided output storage has the wrong size.
    #[error("output has length {found}, expected {expected}")]
    OutputLength { expected: usize, found: usize },

    /// The query is NaN or lies outside the known domain of the x-values.
    ///
    /// `x` holds the offending query; a NaN query is carried through as NaN.
    /// Two of these compare equal when both queries are NaN.
    #[error("cannot extrapolate to x = {x}")]
    Extrapolation { x: f64 },
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        use Error::*;
        match (self, other) {
            (NotMonotonic { order: a }, NotMonotonic { order: b }) => a == b,
            (
                LengthMismatch {
                    series: s0,
                    expected: e0,
                    found: f0,
                },
                LengthMismatch {
                    series: s1,
                    expected: e1,
                    found: f1,
                },
            ) => (s0, e0, f0) == (s1, e1, f1),
            (UnsupportedInterpolation(a), UnsupportedInterpolation(b)) => a == b,
            (UnknownInterpolation, UnknownInterpolation) => true,
            (
                IndexOutOfRange { index: i0, len: n0 },
                IndexOutOfRange { index: i1, len: n1 },
            ) => (i0, n0) == (i1, n1),
            (
                WindowOutOfRange {
                    offset: o0,
                    len: n0,
                    buffer_len: b0,
                },
                WindowOutOfRange {
                    offset: o1,
                    len: n1,
                    buffer_len: b1,
                },
            ) => (o0, n0, b0) == (o1, n1, b1),
            (
                OutputLength {
                    expected: e0,
                    found: f0,
                },
                OutputLength {
                    expected: e1,
                    found: f1,
                },
            ) => (e0, f0) == (e1, f1),
            // NaN queries are the same failure, whatever their payload
            (Extrapolation { x: a }, Extrapolation { x: b }) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            _ => false,
        }
    }
}

impl Error {
    /// The offending query, if this is an extrapolation failure.
    pub fn extrapolated_x(&self) -> Option<f64> {
        match self {
            Error::Extrapolation { x } => Some(*x),
            _ => None,
        }
    }

    /// Whether the query was NaN or outside the x-domain.
    pub fn is_extrapolation(&self) -> bool {
        matches!(self, Error::Extrapolation { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extrapolated_x_keeps_nan() {
        let e = Error::Extrapolation { x: f64::NAN };
        assert!(e.is_extrapolation());
        assert!(e.extrapolated_x().unwrap().is_nan());

        let e = Error::Extrapolation { x: -1.0 };
        assert_eq!(e.extrapolated_x(), Some(-1.0));

        let e = Error::UnknownInterpolation;
        assert!(!e.is_extrapolation());
        assert_eq!(e.extrapolated_x(), None);
    }

    #[test]
    fn test_eq_nan_queries() {
        let nan = Error::Extrapolation { x: f64::NAN };
        assert_eq!(nan, Error::Extrapolation { x: f64::NAN });
        assert_eq!(nan, Error::Extrapolation { x: -f64::NAN });
        assert_ne!(nan, Error::Extrapolation { x: 0.0 });
        assert_eq!(Error::Extrapolation { x: 1.5 }, Error::Extrapolation { x: 1.5 });
        assert_ne!(Error::Extrapolation { x: 1.5 }, Error::Extrapolation { x: 2.5 });
        assert_ne!(nan, Error::UnknownInterpolation);

        assert_eq!(
            Error::OutputLength {
                expected: 2,
                found: 1
            },
            Error::OutputLength {
                expected: 2,
                found: 1
            }
        );
        assert_ne!(
            Error::IndexOutOfRange { index: 3, len: 3 },
            Error::IndexOutOfRange { index: 4, len: 3 }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_messages() {
        let e = Error::NotMonotonic {
            order: DataOrder::Unordered,
        };
        assert_eq!(
            e.to_string(),
            "x values must be strictly ascending or strictly descending, found unordered"
        );

        let e = Error::LengthMismatch {
            series: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(e.to_string(), "y series 1 has length 2, expected 3 to match x");

        let e = Error::UnsupportedInterpolation(Interpolation::Cubic);
        assert_eq!(e.to_string(), "unsupported interpolation kind: cubic");
    }
}
