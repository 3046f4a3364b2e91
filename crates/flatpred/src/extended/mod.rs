//! Extended 2D Cartesian kernel (symbolic points at infinity).
//!
//! Purpose
//! - Wrap standard affine coordinates in degree-≤1 polynomials so a point
//!   is either finite or an equivalence class of rays escaping toward the
//!   frame — the boundary of a square of arbitrarily large radius.
//! - The kernel composes over the small standard-cartesian module and
//!   exposes only named operations, not a full base-kernel surface.
//!
//! Code cross-refs: `poly::SymPoly`, `cartesian::{StdPoint, StdLine}`,
//! `exact::Sign`.

pub mod cartesian;
mod kernel;
pub mod poly;

pub use cartesian::{StdDirection, StdLine, StdPoint, StdRay, StdSegment};
pub use kernel::{
    compare_x, compare_xy, compare_y, frame_point_type, frame_radius, line_intersection,
    orientation, segment_intersection, ExtendedLine, ExtendedPoint, ExtendedSegment, PointType,
};
