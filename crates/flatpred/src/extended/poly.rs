//! One-variable symbolic polynomials for extended coordinates.
//!
//! A coordinate of an extended point is a polynomial in a formal frame
//! parameter: degree 0 is a finite value, degree 1 encodes motion toward
//! infinity. Signs and comparisons are taken "at infinity" — the leading
//! coefficient decides — so they agree with evaluation at every
//! sufficiently large argument.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::exact::{RingElement, Sign};

/// Dense polynomial over `T`.
///
/// Invariant: the coefficient vector is non-empty and carries no trailing
/// zero, except for the zero polynomial `[0]`. Degrees are therefore
/// always well formed (never negative).
#[derive(Clone, Debug, PartialEq)]
pub struct SymPoly<T> {
    coeffs: Vec<T>,
}

impl<T: RingElement> SymPoly<T> {
    fn from_coeffs(mut coeffs: Vec<T>) -> Self {
        while coeffs.len() > 1 && coeffs.last().map_or(false, |c| Sign::of(c).is_zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self { coeffs }
    }

    /// Constant polynomial.
    pub fn constant(c: T) -> Self {
        Self::from_coeffs(vec![c])
    }

    /// `c + m·t`: finite part plus slope toward the frame.
    pub fn linear(c: T, m: T) -> Self {
        Self::from_coeffs(vec![c, m])
    }

    pub fn zero() -> Self {
        Self::constant(T::zero())
    }

    /// Degree after trimming; the zero polynomial has degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of `t^i`; zero beyond the degree.
    #[inline]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Sign of the value for all sufficiently large arguments: the sign of
    /// the leading coefficient.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::of(&self.coeffs[self.coeffs.len() - 1])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.sign().is_zero()
    }

    /// Negated iff negative at infinity.
    pub fn abs(&self) -> Self {
        if self.sign() == Sign::Negative {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Exact polynomial division; `None` when the divisor is zero, the
    /// remainder is nonzero, or a coefficient division is inexact (which
    /// can happen for integer scalars).
    pub fn div_exact(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Self::zero());
        }
        if self.degree() < rhs.degree() {
            return None;
        }
        let lead = rhs.coeffs[rhs.degree()].clone();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); self.degree() - rhs.degree() + 1];
        for k in (0..quot.len()).rev() {
            let q = rem[rhs.degree() + k].clone() / lead.clone();
            if q.clone() * lead.clone() != rem[rhs.degree() + k] {
                return None;
            }
            for (j, r) in rhs.coeffs.iter().enumerate() {
                rem[j + k] = rem[j + k].clone() - q.clone() * r.clone();
            }
            quot[k] = q;
        }
        if rem.iter().any(|c| !Sign::of(c).is_zero()) {
            return None;
        }
        Some(Self::from_coeffs(quot))
    }
}

impl<T: RingElement> Add for SymPoly<T> {
    type Output = SymPoly<T>;
    fn add(self, rhs: SymPoly<T>) -> SymPoly<T> {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        SymPoly::from_coeffs((0..n).map(|i| self.coeff(i) + rhs.coeff(i)).collect())
    }
}

impl<T: RingElement> Sub for SymPoly<T> {
    type Output = SymPoly<T>;
    fn sub(self, rhs: SymPoly<T>) -> SymPoly<T> {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        SymPoly::from_coeffs((0..n).map(|i| self.coeff(i) - rhs.coeff(i)).collect())
    }
}

impl<T: RingElement> Neg for SymPoly<T> {
    type Output = SymPoly<T>;
    fn neg(self) -> SymPoly<T> {
        SymPoly::from_coeffs(self.coeffs.into_iter().map(|c| -c).collect())
    }
}

impl<T: RingElement> Mul for SymPoly<T> {
    type Output = SymPoly<T>;
    fn mul(self, rhs: SymPoly<T>) -> SymPoly<T> {
        if self.is_zero() || rhs.is_zero() {
            return SymPoly::zero();
        }
        let mut out = vec![T::zero(); self.degree() + rhs.degree() + 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].clone() + a.clone() * b.clone();
            }
        }
        SymPoly::from_coeffs(out)
    }
}

/// Scalar division (coefficient-wise). Exact only for field scalars.
impl<T: RingElement> Div<T> for SymPoly<T> {
    type Output = SymPoly<T>;
    fn div(self, rhs: T) -> SymPoly<T> {
        SymPoly::from_coeffs(self.coeffs.into_iter().map(|c| c / rhs.clone()).collect())
    }
}

impl<T: RingElement> PartialOrd for SymPoly<T> {
    /// Order by the value at infinity: sign of the difference.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(match (self.clone() - other.clone()).sign() {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        })
    }
}

impl<T: RingElement + fmt::Display> fmt::Display for SymPoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coeffs[0])?;
        for (i, c) in self.coeffs.iter().enumerate().skip(1) {
            write!(f, " + {c}*t")?;
            if i > 1 {
                write!(f, "^{i}")?;
            }
        }
        Ok(())
    }
}
