//! Curated re-export surface grouped by module.
//!
//! Prefer these re-exports for consistency across downstream callers and
//! experiments; the module tree stays the source of truth.

// Exact sign machinery
pub use crate::exact::{sign_of_determinant, RingElement, Sign};
// Flat orientations and their predicates
pub use crate::flat::rand::{
    draw_independent_points, draw_points, GridCfg, Rational, ReplayToken,
};
pub use crate::flat::{
    contained_in_affine_hull, flat_orientation, orientation_in_flat, side_of_sphere_in_flat,
    Coordinates, FlatError, FlatOrientation,
};
// Extended 2D kernel
pub use crate::extended::poly::SymPoly;
pub use crate::extended::{
    compare_x, compare_xy, compare_y, frame_point_type, frame_radius, line_intersection,
    orientation as orientation_2d, segment_intersection, ExtendedLine, ExtendedPoint,
    ExtendedSegment, PointType, StdDirection, StdLine, StdPoint, StdRay, StdSegment,
};
