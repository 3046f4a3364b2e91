use nalgebra::{DMatrix, DVector};
use num_rational::Ratio;
use proptest::prelude::*;

use super::rand::{draw_independent_points, GridCfg, ReplayToken};
use super::*;
use crate::exact::{sign_of_determinant, Sign};

type Q = Ratio<i64>;

fn pt(coords: &[i64]) -> DVector<Q> {
    DVector::from_iterator(coords.len(), coords.iter().map(|&c| Q::from_integer(c)))
}

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

/// Brute-force determinant of the points' homogeneous coordinates
/// restricted to the `proj` columns only.
fn proj_det(o: &FlatOrientation, pts: &[DVector<Q>]) -> Sign {
    let k = pts.len();
    let dim = pts[0].len();
    let mut m = DMatrix::from_element(k, k, Q::from_integer(0));
    for (i, p) in pts.iter().enumerate() {
        for (j, &axis) in o.proj.iter().enumerate() {
            m[(i, j)] = if axis == dim {
                Q::from_integer(1)
            } else {
                p[axis]
            };
        }
    }
    sign_of_determinant(m)
}

#[test]
fn triangle_uses_every_homogeneous_axis() {
    let pts = vec![pt(&[0, 0]), pt(&[1, 0]), pt(&[0, 1])];
    let o = flat_orientation(&pts).unwrap();
    assert_eq!(o.proj, vec![0, 1, 2]);
    assert!(o.rest.is_empty());
    assert_eq!(o.flat_dim(), 2);
    assert_eq!(o.homogeneous_dim(), 3);

    assert_eq!(orientation_in_flat(&o, &pts), Sign::Positive);
    let reversed = vec![pts[0].clone(), pts[2].clone(), pts[1].clone()];
    assert_eq!(orientation_in_flat(&o, &reversed), Sign::Negative);
}

#[test]
fn plane_in_three_space_pins_the_leftover_axis() {
    // Points spanning the plane z = 1: the z column is claimed for the
    // first point (the x and y columns are zero there), then x and y
    // follow, leaving only the homogeneous axis in rest.
    let pts = vec![pt(&[0, 0, 1]), pt(&[1, 0, 1]), pt(&[0, 1, 1])];
    let o = flat_orientation(&pts).unwrap();
    assert_eq!(o.proj, vec![0, 1, 2]);
    assert_eq!(o.rest, vec![3]);
    assert!(!orientation_in_flat(&o, &pts).is_zero());
}

#[test]
fn proj_and_rest_partition_the_axes() {
    for (i, &(dim, count)) in [(2usize, 2usize), (3, 3), (4, 3), (5, 6)].iter().enumerate() {
        let pts = draw_independent_points(
            count,
            GridCfg { dim, span: 7 },
            ReplayToken {
                seed: 0xf1a7,
                index: i as u64,
            },
        );
        let o = flat_orientation(&pts).unwrap();
        assert_eq!(o.proj.len(), count);
        assert!(o.proj.windows(2).all(|w| w[0] < w[1]), "proj sorted: {o}");
        let mut all: Vec<usize> = o.proj.iter().chain(o.rest.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..=dim).collect::<Vec<_>>());
    }
}

#[test]
fn orientation_matches_projected_determinant_up_to_a_fixed_factor() {
    // The predicate and the brute-force determinant over the proj columns
    // may disagree by a global factor (the rest-row block), but that
    // factor is a property of the orientation record alone: it must be
    // the same for every permutation of the points.
    let pts = vec![pt(&[0, 0, 1]), pt(&[2, 0, 1]), pt(&[0, 2, 1])];
    let o = flat_orientation(&pts).unwrap();
    let perms: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let factor = orientation_in_flat(&o, &pts) * proj_det(&o, &pts);
    assert!(!factor.is_zero());
    for perm in perms {
        let shuffled: Vec<_> = perm.iter().map(|&i| pts[i].clone()).collect();
        assert_eq!(
            orientation_in_flat(&o, &shuffled) * proj_det(&o, &shuffled),
            factor,
            "permutation {perm:?}"
        );
    }
}

#[test]
fn plain_vec_points_work_too() {
    let pts: Vec<Vec<Q>> = vec![
        vec![q(0), q(0)],
        vec![q(1), q(0)],
    ];
    let o = flat_orientation(&pts).unwrap();
    assert_eq!(o.proj, vec![0, 2]);
    assert_eq!(o.rest, vec![1]);
    assert!(!orientation_in_flat(&o, &pts).is_zero());
    assert!(contained_in_affine_hull(&pts, &vec![q(7), q(0)]).unwrap());
    assert!(!contained_in_affine_hull(&pts, &vec![q(0), q(1)]).unwrap());
}

#[test]
fn dependent_points_are_rejected() {
    let collinear = vec![pt(&[0, 0]), pt(&[1, 1]), pt(&[2, 2])];
    assert_eq!(
        flat_orientation(&collinear),
        Err(FlatError::DependentPoints { point_index: 2 })
    );

    let empty: Vec<DVector<Q>> = Vec::new();
    assert_eq!(flat_orientation(&empty), Err(FlatError::EmptyPointSet));

    // One surplus point (dim+2 points in dim 2) is dependent no matter what.
    let surplus = vec![pt(&[0, 0]), pt(&[1, 0]), pt(&[0, 1]), pt(&[3, 5])];
    assert_eq!(
        flat_orientation(&surplus),
        Err(FlatError::DependentPoints { point_index: 3 })
    );
}

#[test]
fn hull_membership_on_an_embedded_plane() {
    let pts = vec![pt(&[0, 0, 1]), pt(&[1, 0, 1]), pt(&[0, 1, 1])];
    // Anything on z = 1 is in the hull, anything off it is not.
    assert!(contained_in_affine_hull(&pts, &pt(&[3, -1, 1])).unwrap());
    assert!(!contained_in_affine_hull(&pts, &pt(&[1, 1, 2])).unwrap());
}

#[test]
fn hull_of_a_full_dimensional_set_contains_everything() {
    // dim+1 independent points: rest is empty, the trial round never runs.
    let pts = vec![pt(&[0, 0]), pt(&[1, 0]), pt(&[0, 1])];
    assert!(contained_in_affine_hull(&pts, &pt(&[5, 7])).unwrap());
    assert!(contained_in_affine_hull(&pts, &pt(&[-100, 42])).unwrap());
}

#[test]
fn contained_query_makes_the_extended_set_dependent() {
    for index in 0..4u64 {
        let pts = draw_independent_points(
            3,
            GridCfg { dim: 4, span: 6 },
            ReplayToken { seed: 77, index },
        );
        let dim = pts[0].len();
        let half = Q::new(1, 2);
        let mid = DVector::from_fn(dim, |i, _| (pts[0][i] + pts[1][i]) * half);
        assert!(contained_in_affine_hull(&pts, &mid).unwrap());
        let mut extended = pts.clone();
        extended.push(mid);
        assert!(matches!(
            flat_orientation(&extended),
            Err(FlatError::DependentPoints { point_index: 3 })
        ));
    }
}

#[test]
fn in_sphere_full_dimensional_circle() {
    // Circle through (0,0), (2,0), (0,2): center (1,1), radius² = 2.
    let pts = vec![pt(&[0, 0]), pt(&[2, 0]), pt(&[0, 2])];
    let o = flat_orientation(&pts).unwrap();
    let base = orientation_in_flat(&o, &pts);
    assert_eq!(base, Sign::Positive);

    // Inside carries the sign opposite to the orientation, outside the
    // same sign, on-circle is zero.
    assert_eq!(side_of_sphere_in_flat(&o, &pts, &pt(&[1, 1])), Sign::Negative);
    assert_eq!(side_of_sphere_in_flat(&o, &pts, &pt(&[5, 5])), Sign::Positive);
    assert_eq!(side_of_sphere_in_flat(&o, &pts, &pt(&[2, 2])), Sign::Zero);
}

#[test]
fn in_sphere_on_a_plane_embedded_in_three_space() {
    // Same circle lifted onto the plane z = 1.
    let pts = vec![pt(&[0, 0, 1]), pt(&[2, 0, 1]), pt(&[0, 2, 1])];
    let o = flat_orientation(&pts).unwrap();
    let base = orientation_in_flat(&o, &pts);
    assert_eq!(base, Sign::Negative);

    assert_eq!(
        side_of_sphere_in_flat(&o, &pts, &pt(&[1, 1, 1])),
        base.flip()
    );
    assert_eq!(side_of_sphere_in_flat(&o, &pts, &pt(&[5, 5, 1])), base);
    assert_eq!(side_of_sphere_in_flat(&o, &pts, &pt(&[2, 2, 1])), Sign::Zero);
}

#[test]
fn in_sphere_on_a_line_embedded_in_three_space() {
    // A "sphere" on a 1-flat is a point pair; between them is inside.
    let pts = vec![pt(&[0, 0, 0]), pt(&[4, 0, 0])];
    let o = flat_orientation(&pts).unwrap();
    assert_eq!(o.proj, vec![0, 3]);
    assert_eq!(o.rest, vec![1, 2]);
    let base = orientation_in_flat(&o, &pts);
    assert_eq!(base, Sign::Positive);

    assert_eq!(
        side_of_sphere_in_flat(&o, &pts, &pt(&[2, 0, 0])),
        Sign::Negative
    );
    assert_eq!(
        side_of_sphere_in_flat(&o, &pts, &pt(&[6, 0, 0])),
        Sign::Positive
    );
    assert_eq!(
        side_of_sphere_in_flat(&o, &pts, &pt(&[4, 0, 0])),
        Sign::Zero
    );
}

#[test]
fn in_sphere_alternates_under_transposition() {
    let pts = vec![pt(&[0, 0, 1]), pt(&[2, 0, 1]), pt(&[0, 2, 1])];
    let o = flat_orientation(&pts).unwrap();
    let q = pt(&[1, 1, 1]);
    let s = side_of_sphere_in_flat(&o, &pts, &q);
    let swapped = vec![pts[1].clone(), pts[0].clone(), pts[2].clone()];
    assert_eq!(side_of_sphere_in_flat(&o, &swapped, &q), s.flip());
}

#[test]
fn orientation_record_formats_for_debugging() {
    let pts = vec![pt(&[0, 0, 0]), pt(&[4, 0, 0])];
    let o = flat_orientation(&pts).unwrap();
    assert_eq!(format!("{o}"), "proj: 0 3 rest: 1 2");
    assert_eq!(
        format!("{}", FlatError::EmptyPointSet),
        "flat needs at least one spanning point"
    );
}

proptest! {
    #[test]
    fn orientation_flips_under_transposition(
        seed in any::<u64>(),
        (dim, count) in (2usize..5).prop_flat_map(|d| (Just(d), 2..=d + 1)),
        pick in any::<(usize, usize)>(),
    ) {
        let pts = draw_independent_points(
            count,
            GridCfg { dim, span: 8 },
            ReplayToken { seed, index: 0 },
        );
        let o = flat_orientation(&pts).unwrap();
        let s = orientation_in_flat(&o, &pts);
        prop_assert!(!s.is_zero());
        let i = pick.0 % count;
        let j = pick.1 % count;
        prop_assume!(i != j);
        let mut swapped = pts.clone();
        swapped.swap(i, j);
        prop_assert_eq!(orientation_in_flat(&o, &swapped), s.flip());
    }

    #[test]
    fn affine_hull_contains_its_spanning_points(
        seed in any::<u64>(),
        (dim, count) in (2usize..5).prop_flat_map(|d| (Just(d), 2..=d + 1)),
    ) {
        let pts = draw_independent_points(
            count,
            GridCfg { dim, span: 8 },
            ReplayToken { seed, index: 1 },
        );
        for p in &pts {
            prop_assert!(contained_in_affine_hull(&pts, p).unwrap());
        }
    }
}
