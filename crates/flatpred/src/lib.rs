//! Exact geometric predicates for affine flats, plus an extended 2D
//! kernel with symbolic points at infinity.
//!
//! Modules
//! - `exact`: scalar capability trait, three-valued `Sign`, and the
//!   fraction-free determinant-sign oracle everything else consumes.
//! - `flat`: incremental discovery of a well-conditioned coordinate
//!   projection (`FlatOrientation`) for a k-flat in n-space, with
//!   orientation and in-sphere predicates evaluated against it.
//! - `extended`: 2D kernel whose coordinates are degree-≤1 polynomials in
//!   a formal frame parameter, modeling points at infinity exactly.
//!
//! All operations are pure functions over immutable inputs and safe to
//! evaluate concurrently. Exactness rests on the scalar type: use
//! `num_rational::Ratio` or plain integers — floats compile but forfeit
//! the guarantees.

pub mod api;
pub mod exact;
pub mod extended;
pub mod flat;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for the types that show up in most signatures.
pub use exact::{sign_of_determinant, RingElement, Sign};
pub use flat::FlatOrientation;
pub use nalgebra::{DMatrix, DVector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::exact::{sign_of_determinant, RingElement, Sign};
    pub use crate::extended::{ExtendedPoint, PointType, StdLine, StdPoint};
    pub use crate::flat::{
        contained_in_affine_hull, flat_orientation, orientation_in_flat, side_of_sphere_in_flat,
        Coordinates, FlatError, FlatOrientation,
    };
    pub use nalgebra::{DMatrix, DVector};
}
