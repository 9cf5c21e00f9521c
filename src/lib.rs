//! Locate engine and interpolation tables over monotonic series that may
//! contain missing (NaN) entries, no-std and no-alloc compatible.
//!
//! An x-axis is classified once as strictly ascending or strictly descending,
//! ignoring missing entries, then searched with a bisection that steps over
//! gaps. A [`Table`] binds that axis to any number of parallel y-series and
//! evaluates them at arbitrary query points, refusing to extrapolate.
//!
//! | Operation                       | Cost                         |
//! |---------------------------------|------------------------------|
//! | [`DataOrder::classify`]         | O(n), once at construction   |
//! | [`OrderedVector::locate`]       | O(log n) + width of gap runs |
//! | [`OrderedVector::locate_around_index`] | width of local gap run |
//! | [`OrderedVector::copy_index_into`] | O(width) + gap runs       |
//! | [`Table::evaluate`]             | one `locate` + O(nseries)    |
//!
//! # Example: nearest-neighbor table
//! ```rust
//! use interp_table::{Interpolation, TableFactory};
//!
//! let x = [0.0_f64, 1.0, f64::NAN, 3.0, 4.0];
//! let y = [10.0_f64, 20.0, 30.0, 40.0, 50.0];
//! let z = [-1.0_f64, -2.0, -3.0, -4.0, -5.0];
//! let ys = [&y[..], &z[..]];
//!
//! let table = TableFactory::create(&x, &ys, Interpolation::Nearest).unwrap();
//!
//! // Storage for output, one value per y-series
//! let mut out = [0.0; 2];
//! table.evaluate(2.4, &mut out).unwrap();
//! assert_eq!(out, [40.0, -4.0]);
//!
//! // Outside the known domain is an error, not a guess
//! assert!(table.evaluate(5.0, &mut out).is_err());
//! ```
//!
//! # Example: direct bracket access
//! ```rust
//! use interp_table::{BufferedOrderedVector, OrderedVector};
//!
//! let x = [4.0_f64, 3.0, 2.0, 1.0];
//! let v = BufferedOrderedVector::new(&x);
//!
//! let b = v.locate(2.5).unwrap();
//! assert_eq!((b.lower, b.upper), (1, 2));
//! assert_eq!(b.value, 1.5);
//!
//! let mut idx = [0_usize; 4];
//! assert!(v.copy_index_into(&b, &mut idx));
//! assert_eq!(idx, [0, 1, 2, 3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod order;
pub mod ordered_vector;
pub mod table;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

pub use error::Error;
pub use order::DataOrder;
pub use ordered_vector::{Bracket, BufferedOrderedVector, OrderedVector};
pub use table::{Interpolation, Table, TableFactory};
