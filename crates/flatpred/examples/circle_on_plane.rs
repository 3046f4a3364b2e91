//! Worked example: exact in-sphere queries against a circle living on a
//! plane embedded in 3D.
//!
//! Purpose
//! - Show the full round trip: build a `FlatOrientation` from spanning
//!   points, check affine-hull membership, then classify queries against
//!   the circle through the spanning points — all in exact rational
//!   arithmetic, without ever parametrizing the plane.

use flatpred::flat::{
    contained_in_affine_hull, flat_orientation, orientation_in_flat, side_of_sphere_in_flat,
};
use nalgebra::DVector;
use num_rational::Ratio;

type Q = Ratio<i64>;

fn pt(coords: [i64; 3]) -> DVector<Q> {
    DVector::from_iterator(3, coords.into_iter().map(Q::from_integer))
}

fn main() {
    // Three points spanning the plane z = 1; the circle through them has
    // center (1, 1, 1) and squared radius 2.
    let pts = vec![pt([0, 0, 1]), pt([2, 0, 1]), pt([0, 2, 1])];
    let o = flat_orientation(&pts).expect("spanning points are affinely independent");
    println!("flat orientation: {o}");

    let base = orientation_in_flat(&o, &pts);
    println!("base orientation of the spanning points: {base:?}");

    for (label, q) in [("in the plane", [3, -1, 1]), ("off the plane", [1, 1, 2])] {
        let contained =
            contained_in_affine_hull(&pts, &pt(q)).expect("hull test on independent points");
        println!("hull contains {label} {q:?}: {contained}");
    }

    for (label, q) in [
        ("circle center", [1, 1, 1]),
        ("far outside", [5, 5, 1]),
        ("on the circle", [2, 2, 1]),
    ] {
        let side = side_of_sphere_in_flat(&o, &pts, &pt(q));
        println!("in-sphere sign at {label} {q:?}: {side:?}");
    }
}
