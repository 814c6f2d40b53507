/// Computes the coordinate vector following `coords` in odometer order over `shape`.
///
/// The last dimension varies fastest. A dimension that reaches its length resets to zero and
/// carries into the next slower one. The flag is `false` when the carry runs out of the first
/// dimension, i.e. `coords` was the last coordinate of the shape; the returned vector is then all
/// zeros. For rank 0 there is nothing to advance and the flag is always `false`.
pub fn next_coordinates(coords: &[usize], shape: &[usize]) -> (Vec<usize>, bool) {
    debug_assert_eq!(coords.len(), shape.len());
    let mut next = coords.to_vec();
    for dim in (0..next.len()).rev() {
        next[dim] += 1;
        if next[dim] < shape[dim] {
            return (next, true);
        }
        next[dim] = 0;
    }
    (next, false)
}

/// Every coordinate vector of a shape, in odometer order.
///
/// Rank 0 yields the empty vector once; a shape with a zero-length dimension yields nothing.
#[derive(Clone, Debug)]
pub struct Coordinates {
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Coordinates {
    pub fn new(shape: Vec<usize>) -> Self {
        let next = if shape.contains(&0) {
            None
        } else {
            Some(vec![0; shape.len()])
        };
        Self { shape, next }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl Iterator for Coordinates {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let (following, more) = next_coordinates(&current, &self.shape);
        if more {
            self.next = Some(following);
        }
        Some(current)
    }
}
