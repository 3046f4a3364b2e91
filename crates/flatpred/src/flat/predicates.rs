//! Orientation and in-sphere predicates evaluated against a
//! `FlatOrientation`.
//!
//! Both predicates work in the ambient space: the matrix gets one row per
//! input point and one defining row per `rest` axis (in `rest`'s stored
//! order), pinning the directions orthogonal to the flat so the
//! determinant sign only reflects the configuration inside the flat.

use nalgebra::DMatrix;

use super::types::{Coordinates, FlatOrientation};
use crate::exact::{sign_of_determinant, RingElement, Sign};

/// Orientation of `points` inside the flat described by `o`.
///
/// Expects exactly `|o.proj|` points lying on the flat. Swapping two
/// points flips the sign; `Sign::Zero` means the points are affinely
/// dependent within the flat.
pub fn orientation_in_flat<T, P>(o: &FlatOrientation, points: &[P]) -> Sign
where
    T: RingElement,
    P: Coordinates<T>,
{
    debug_assert_eq!(
        points.len(),
        o.proj.len(),
        "need one point per projection axis"
    );
    let dim = points[0].ambient_dim();
    debug_assert_eq!(
        o.homogeneous_dim(),
        dim + 1,
        "orientation was built for a different ambient dimension"
    );
    let mut m = DMatrix::from_element(dim + 1, dim + 1, T::zero());
    let mut i = 0;
    for p in points {
        m[(i, 0)] = T::one();
        for j in 0..dim {
            m[(i, j + 1)] = p.coordinate(j);
        }
        i += 1;
    }
    for &axis in &o.rest {
        m[(i, 0)] = T::one();
        if axis != dim {
            m[(i, axis + 1)] = T::one();
        }
        i += 1;
    }
    sign_of_determinant(m)
}

/// Side of the sphere through `points` (restricted to the flat `o`) on
/// which `query` lies.
///
/// Standard paraboloid lift: every point row carries the squared norm of
/// its Cartesian part in the last column; `rest` rows are lifted unit
/// offsets so they do not perturb the sphere within the flat. The sign is
/// relative to the flat's orientation: a query strictly inside the sphere
/// yields the sign opposite to `orientation_in_flat(o, points)`, a query
/// strictly outside yields the same sign, and `Sign::Zero` means the
/// query lies exactly on the sphere.
pub fn side_of_sphere_in_flat<T, P>(o: &FlatOrientation, points: &[P], query: &P) -> Sign
where
    T: RingElement,
    P: Coordinates<T>,
{
    debug_assert_eq!(
        points.len(),
        o.proj.len(),
        "need one point per projection axis"
    );
    let dim = points[0].ambient_dim();
    debug_assert_eq!(
        o.homogeneous_dim(),
        dim + 1,
        "orientation was built for a different ambient dimension"
    );
    debug_assert_eq!(query.ambient_dim(), dim, "query has a different ambient dimension");
    let mut m = DMatrix::from_element(dim + 2, dim + 2, T::zero());
    let mut i = 0;
    for p in points {
        lifted_row(&mut m, i, dim, p);
        i += 1;
    }
    for &axis in &o.rest {
        m[(i, 0)] = T::one();
        if axis != dim {
            m[(i, axis + 1)] = T::one();
            m[(i, dim + 1)] = T::one();
        }
        i += 1;
    }
    lifted_row(&mut m, dim + 1, dim, query);
    sign_of_determinant(m)
}

/// `[1, coordinates..., squared norm]` into row `row`.
fn lifted_row<T, P>(m: &mut DMatrix<T>, row: usize, dim: usize, p: &P)
where
    T: RingElement,
    P: Coordinates<T>,
{
    m[(row, 0)] = T::one();
    let mut norm2 = T::zero();
    for j in 0..dim {
        let c = p.coordinate(j);
        norm2 = norm2 + c.clone() * c.clone();
        m[(row, j + 1)] = c;
    }
    m[(row, dim + 1)] = norm2;
}
