//! Ordered vector over a borrowed numeric buffer.
//!
//! ```rust
//! use interp_table::{BufferedOrderedVector, DataOrder, OrderedVector};
//!
//! // A larger buffer owned elsewhere
//! let buf = [9.0_f64, 9.0, 0.0, 1.0, f64::NAN, 3.0, 9.0];
//!
//! // View entries 2..6 without copying
//! let v = BufferedOrderedVector::with_window(&buf, 2, 4).unwrap();
//! assert_eq!(v.len(), 4);
//! assert_eq!(v.data_order(), DataOrder::StrictlyAscending);
//!
//! // Indices are relative to the window
//! let b = v.locate(2.0).unwrap();
//! assert_eq!((b.lower, b.upper), (1, 3));
//! ```
use num_traits::Float;

use super::OrderedVector;
use crate::error::Error;
use crate::order::DataOrder;

/// A non-owning view of `len` entries of a buffer, starting at a fixed offset.
///
/// The offset and length are fixed when the view is made. The order and the
/// first and last non-missing positions are found once, so the view is cheap
/// to copy and to share. The buffer stays owned by the caller and must
/// outlive the view.
#[derive(Debug, Clone, Copy)]
pub struct BufferedOrderedVector<'a, T: Float> {
    vals: &'a [T],
    offset: usize,
    order: DataOrder,
    first: Option<usize>,
    last: Option<usize>,
}

impl<'a, T: Float> BufferedOrderedVector<'a, T> {
    /// View an entire buffer.
    pub fn new(buf: &'a [T]) -> Self {
        Self::from_parts(buf, 0)
    }

    /// View `len` entries of `buf` starting at `offset`.
    ///
    /// # Errors
    /// * If the window extends past the end of `buf`
    pub fn with_window(buf: &'a [T], offset: usize, len: usize) -> Result<Self, Error> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= buf.len())
            .ok_or(Error::WindowOutOfRange {
                offset,
                len,
                buffer_len: buf.len(),
            })?;
        Ok(Self::from_parts(&buf[offset..end], offset))
    }

    fn from_parts(vals: &'a [T], offset: usize) -> Self {
        Self {
            vals,
            offset,
            order: DataOrder::classify(vals),
            first: vals.iter().position(|v| !v.is_nan()),
            last: vals.iter().rposition(|v| !v.is_nan()),
        }
    }

    /// Position of the first viewed entry within the original buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The viewed entries.
    pub fn as_slice(&self) -> &'a [T] {
        self.vals
    }
}

impl<'a, T: Float> From<&'a [T]> for BufferedOrderedVector<'a, T> {
    fn from(buf: &'a [T]) -> Self {
        Self::new(buf)
    }
}

impl<T: Float> OrderedVector<T> for BufferedOrderedVector<'_, T> {
    #[inline]
    fn values(&self) -> &[T] {
        self.vals
    }

    #[inline]
    fn data_order(&self) -> DataOrder {
        self.order
    }

    #[inline]
    fn first_valid(&self) -> Option<usize> {
        self.first
    }

    #[inline]
    fn last_valid(&self) -> Option<usize> {
        self.last
    }
}
