//! Scalar capability trait and exact three-valued signs.

use std::fmt;
use std::ops::{Mul, Neg};

use num_traits::Signed;

/// Capability bound for every scalar this crate computes with.
///
/// `Signed` brings the ring operations (`+`, `-`, `*`, `/`), `abs` and the
/// sign queries; the remaining bounds are what `nalgebra` storage needs.
/// `i64` and `num_rational::Ratio<_>` qualify and keep all predicates
/// exact; `f64` also compiles but forfeits the exactness guarantees.
pub trait RingElement: Signed + Clone + PartialOrd + fmt::Debug + 'static {}

impl<T> RingElement for T where T: Signed + Clone + PartialOrd + fmt::Debug + 'static {}

/// Exact sign of a scalar or determinant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of a scalar, by comparison against zero.
    #[inline]
    pub fn of<T: RingElement>(x: &T) -> Sign {
        let zero = T::zero();
        if *x > zero {
            Sign::Positive
        } else if *x < zero {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// Opposite sign; alias of unary minus for call chains.
    #[inline]
    pub fn flip(self) -> Sign {
        -self
    }

    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;
    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}
