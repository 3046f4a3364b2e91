//! Incremental axis selection: the orientation builder and the
//! affine-hull membership test.
//!
//! Both operations walk the input points once. For each point the selector
//! appends its homogeneous coordinates to a running table, then claims the
//! first remaining axis whose column keeps the projected configuration
//! non-singular. The membership test replays the same selection and then
//! checks whether a query point can still extend the span.

use nalgebra::DMatrix;

use super::types::{Coordinates, FlatError, FlatOrientation};
use crate::exact::{sign_of_determinant, RingElement, Sign};

/// Shared incremental state: homogeneous coordinate table, chosen axes,
/// remaining candidates.
struct AxisSelector<T> {
    dim: usize,
    coord: DMatrix<T>,
    rows: usize,
    proj: Vec<usize>,
    rest: Vec<usize>,
}

impl<T: RingElement> AxisSelector<T> {
    fn new(dim: usize) -> Self {
        Self {
            dim,
            coord: DMatrix::from_element(dim + 1, dim + 1, T::zero()),
            rows: 0,
            proj: Vec::with_capacity(dim + 1),
            rest: (0..=dim).collect(),
        }
    }

    /// Write the homogeneous coordinates of `p` into the next table row.
    fn push_row<P: Coordinates<T>>(&mut self, p: &P) {
        debug_assert_eq!(p.ambient_dim(), self.dim, "mixed ambient dimensions");
        for i in 0..self.dim {
            self.coord[(self.rows, i)] = p.coordinate(i);
        }
        self.coord[(self.rows, self.dim)] = T::one();
        self.rows += 1;
    }

    /// Sign of the trial matrix: the chosen `proj` columns of all rows so
    /// far, completed by `axis` as the last column.
    fn trial_det(&self, axis: usize) -> Sign {
        let d = self.proj.len() + 1;
        debug_assert_eq!(d, self.rows);
        let mut m = DMatrix::from_element(d, d, T::zero());
        for i in 0..d {
            for (j, &a) in self.proj.iter().enumerate() {
                m[(i, j)] = self.coord[(i, a)].clone();
            }
            m[(i, d - 1)] = self.coord[(i, axis)].clone();
        }
        sign_of_determinant(m)
    }

    /// Admit one more spanning point: claim the first remaining axis that
    /// keeps the projection non-singular.
    fn admit<P: Coordinates<T>>(&mut self, index: usize, p: &P) -> Result<(), FlatError> {
        if self.rest.is_empty() {
            // More points than homogeneous axes: necessarily dependent.
            return Err(FlatError::DependentPoints { point_index: index });
        }
        self.push_row(p);
        match self.rest.iter().position(|&a| !self.trial_det(a).is_zero()) {
            Some(at) => {
                self.proj.push(self.rest.remove(at));
                Ok(())
            }
            None => Err(FlatError::DependentPoints { point_index: index }),
        }
    }

    /// Would `q` escape the affine hull of the admitted points? True iff
    /// some remaining axis completes a non-singular projection with `q` as
    /// an extra row.
    fn extends_hull<P: Coordinates<T>>(&mut self, q: &P) -> bool {
        if self.rest.is_empty() {
            // The admitted points already span the whole space.
            return false;
        }
        self.push_row(q);
        self.rest.iter().any(|&a| !self.trial_det(a).is_zero())
    }

    fn finish(self) -> FlatOrientation {
        let mut o = FlatOrientation {
            proj: self.proj,
            rest: self.rest,
        };
        o.proj.sort_unstable();
        o
    }
}

/// Build the coordinate projection for the flat spanned by `points`.
///
/// Feeding `k+1` affinely independent points yields a `proj` of size
/// `k+1` (sorted ascending) and a `rest` holding the other axes in
/// residual scan order. Dependent or surplus points are reported as
/// errors, never papered over with a wrong projection.
pub fn flat_orientation<T, P>(points: &[P]) -> Result<FlatOrientation, FlatError>
where
    T: RingElement,
    P: Coordinates<T>,
{
    let first = points.first().ok_or(FlatError::EmptyPointSet)?;
    let mut sel = AxisSelector::<T>::new(first.ambient_dim());
    for (index, p) in points.iter().enumerate() {
        sel.admit(index, p)?;
    }
    Ok(sel.finish())
}

/// Does `query` lie in the affine hull of `points`?
///
/// Runs the same incremental selection as [`flat_orientation`] (the
/// resulting projection is discarded), then tries one more round with
/// `query` as the candidate row: if no remaining axis yields a
/// non-singular matrix, the query adds nothing to the span. When the
/// input points already span the whole space the trial round is empty
/// and every query is contained.
pub fn contained_in_affine_hull<T, P>(points: &[P], query: &P) -> Result<bool, FlatError>
where
    T: RingElement,
    P: Coordinates<T>,
{
    let first = points.first().ok_or(FlatError::EmptyPointSet)?;
    let mut sel = AxisSelector::<T>::new(first.ambient_dim());
    for (index, p) in points.iter().enumerate() {
        sel.admit(index, p)?;
    }
    Ok(!sel.extends_hull(query))
}
