//! Exact sign machinery.
//!
//! Purpose
//! - Provide the scalar capability trait (`RingElement`), the three-valued
//!   `Sign`, and the determinant-sign oracle every predicate in this crate
//!   consumes. Predicates never look at magnitudes, only at exact signs, so
//!   this module is the whole numeric trust base.
//!
//! Why this design
//! - A single blanket trait keeps the rest of the crate generic over `i64`,
//!   `num_rational::Ratio<_>` and friends without a parallel trait ladder.
//! - The oracle uses fraction-free (Bareiss) elimination: every division it
//!   performs is exact over an integral domain, so integer input stays
//!   integer and rational input never rounds.
//!
//! Code cross-refs: `flat::{build, predicates}`, `extended::poly`.

mod det;
mod scalar;

pub use det::sign_of_determinant;
pub use scalar::{RingElement, Sign};
