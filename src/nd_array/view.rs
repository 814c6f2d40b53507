use crate::error::{CompareError, Result};

/// Read access to an array of any rank.
///
/// An index is a coordinate vector with one entry per dimension. Rank-0 arrays hold exactly one
/// element, addressed by the empty coordinate vector.
pub trait NdArrayView {
    type Elem;

    fn rank(&self) -> usize;
    fn dim_len(&self, dim: usize) -> usize;
    fn get(&self, index: &[usize]) -> Option<&Self::Elem>;

    fn shape(&self) -> Vec<usize> {
        (0..self.rank()).map(|dim| self.dim_len(dim)).collect()
    }

    fn element_count(&self) -> usize {
        (0..self.rank()).map(|dim| self.dim_len(dim)).product()
    }
}

impl<T> NdArrayView for [T] {
    type Elem = T;

    fn rank(&self) -> usize {
        1
    }

    fn dim_len(&self, dim: usize) -> usize {
        debug_assert!(dim == 0);
        self.len()
    }

    fn get(&self, index: &[usize]) -> Option<&T> {
        match index {
            [i] => <[T]>::get(self, *i),
            _ => None,
        }
    }
}

impl<T> NdArrayView for Vec<T> {
    type Elem = T;

    fn rank(&self) -> usize {
        1
    }

    fn dim_len(&self, dim: usize) -> usize {
        self.as_slice().dim_len(dim)
    }

    fn get(&self, index: &[usize]) -> Option<&T> {
        NdArrayView::get(self.as_slice(), index)
    }
}

impl<T, const N: usize> NdArrayView for [T; N] {
    type Elem = T;

    fn rank(&self) -> usize {
        1
    }

    fn dim_len(&self, dim: usize) -> usize {
        self.as_slice().dim_len(dim)
    }

    fn get(&self, index: &[usize]) -> Option<&T> {
        NdArrayView::get(self.as_slice(), index)
    }
}

/// Owned array of arbitrary rank, stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NdArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> NdArray<T> {
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<T>) -> Result<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &len| acc.checked_mul(len))
            .ok_or_else(|| {
                log::debug!("NdArray::from_shape_vec: shape {:?} overflows usize", shape);
                CompareError::InvalidArgument(format!("shape {:?} overflows usize", shape))
            })?;
        if expected != data.len() {
            log::debug!(
                "NdArray::from_shape_vec: shape {:?} needs {} elements, got {}",
                shape,
                expected,
                data.len()
            );
            return Err(CompareError::InvalidArgument(format!(
                "shape {:?} needs {} elements, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// A rank-0 array holding a single value.
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// A rank-2 array built from equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(CompareError::InvalidArgument(format!(
                "row {} has {} elements, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        let shape = vec![rows.len(), cols];
        Ok(Self {
            shape,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        index
            .iter()
            .zip(self.shape.iter())
            .try_fold(0usize, |acc, (&i, &len)| (i < len).then(|| acc * len + i))
    }
}

impl<T> NdArrayView for NdArray<T> {
    type Elem = T;

    fn rank(&self) -> usize {
        self.shape.len()
    }

    fn dim_len(&self, dim: usize) -> usize {
        self.shape[dim]
    }

    fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).and_then(|at| <[T]>::get(&self.data, at))
    }

    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }
}
