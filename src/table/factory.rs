//! Checked construction of tables from caller-owned buffers.
use log::debug;
use num_traits::Float;

use super::{Interpolation, Table};
use crate::error::Error;
use crate::order::DataOrder;
use crate::ordered_vector::{BufferedOrderedVector, OrderedVector};

/// Builds [`Table`]s, checking every precondition up front.
///
/// Nothing is copied; the table borrows `x` and `ys` for its lifetime.
pub struct TableFactory;

impl TableFactory {
    /// Build a table over a whole x-buffer.
    ///
    /// # Errors
    /// * If `x` is not strictly ascending or strictly descending,
    ///   ignoring missing entries
    /// * If any y-series length differs from the length of `x`
    /// * If `kind` has no kernel
    pub fn create<'a, T: Float>(
        x: &'a [T],
        ys: &'a [&'a [T]],
        kind: Interpolation,
    ) -> Result<Table<'a, T>, Error> {
        Self::create_from_vector(BufferedOrderedVector::new(x), ys, kind)
    }

    /// Build a table over an existing x-buffer view, such as a window into
    /// a larger buffer.
    ///
    /// # Errors
    /// * Same as [`TableFactory::create`]
    pub fn create_from_vector<'a, T: Float>(
        x: BufferedOrderedVector<'a, T>,
        ys: &'a [&'a [T]],
        kind: Interpolation,
    ) -> Result<Table<'a, T>, Error> {
        let order = x.data_order();
        if order == DataOrder::Unordered {
            debug!("rejected table: x values ({} points) are {order}", x.len());
            return Err(Error::NotMonotonic { order });
        }

        let table = Table::new(x, ys, kind).inspect_err(|e| debug!("rejected table: {e}"))?;
        debug!(
            "built {kind} table over {} {order} x values with {} y series",
            x.len(),
            ys.len()
        );

        Ok(table)
    }
}
