//! Small generic helpers for working with collections.
//!
//! - [`compare`]: comparator adapters (wrap a function, reverse, project a key) and the
//!   [`order_of`](compare::order_of) builder.
//! - [`nd_array`]: structural equality and hashing for arrays of any rank.
//! - [`map_ext`]: get-with-default lookups over maps.
//! - [`shape_tree`]: weight and height of an externally built tree.

pub mod compare;
pub mod error;
pub mod map_ext;
pub mod nd_array;
pub mod shape_tree;

pub use compare::{order_of, Comparator, ComparatorExt, FunctionComparator, ReversingComparator};
pub use error::{CompareError, Result};
pub use nd_array::{EqualityComparer, NdArray, NdArrayEqualityComparer, NdArrayView};
