//! Exact flat-orientation layer.
//!
//! Purpose
//! - Incrementally discover a well-conditioned coordinate projection
//!   (`FlatOrientation`) for a k-flat embedded in n-dimensional space, and
//!   evaluate orientation / in-sphere predicates against it. Everything
//!   runs on exact determinant signs; a parametrization of the flat is
//!   never computed, so nothing can go numerically degenerate.
//!
//! Why this design
//! - A flat spanned by k+1 points admits many coordinate projections; the
//!   builder greedily claims the first homogeneous axis that keeps the
//!   projected points affinely independent. Downstream predicates consume
//!   only determinant signs, so any non-singular choice is as good as any
//!   other, as long as every evaluation reuses the same `FlatOrientation`
//!   instance.
//!
//! Code cross-refs: `exact::{sign_of_determinant, Sign}`,
//! `types::{Coordinates, FlatOrientation}`.

mod build;
mod predicates;
pub mod rand;
mod types;

pub use build::{contained_in_affine_hull, flat_orientation};
pub use predicates::{orientation_in_flat, side_of_sphere_in_flat};
pub use types::{Coordinates, FlatError, FlatOrientation};

#[cfg(test)]
mod tests;
