//! Arrays of arbitrary rank and structural equality over them.

pub mod coordinates;
pub mod equality;
pub mod view;

pub use self::{
    coordinates::{next_coordinates, Coordinates},
    equality::{ComparerKey, DefaultEquality, EqualityComparer, NdArrayEqualityComparer},
    view::{NdArray, NdArrayView},
};

/// Array comparer using each element type's own equality.
pub type DefaultNdArrayEqualityComparer<T> = NdArrayEqualityComparer<DefaultEquality<T>>;
