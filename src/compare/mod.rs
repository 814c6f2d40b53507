//! Comparators and the means to compose them.

pub mod builder;
pub mod combinators;
pub mod comparator_traits;
pub mod function;
pub mod natural;
pub mod reverse;

pub use self::{
    builder::{order_of, OrderComparator, OrderOf},
    combinators::{KeyComparator, ThenComparator},
    comparator_traits::{ordering_sign, Comparator, ComparatorExt},
    function::{FunctionComparator, NullOrdering},
    natural::NaturalComparator,
    reverse::ReversingComparator,
};
