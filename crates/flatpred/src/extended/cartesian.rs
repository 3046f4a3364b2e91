//! Minimal standard (affine) 2D primitives the extended kernel composes
//! over: finite points, oriented lines `a·x + b·y + c = 0`, directions,
//! rays and segments. Only what the kernel delegates to — not a full
//! kernel surface.

use crate::exact::{RingElement, Sign};

/// Finite 2D point.
#[derive(Clone, Debug, PartialEq)]
pub struct StdPoint<T> {
    pub x: T,
    pub y: T,
}

impl<T: RingElement> StdPoint<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Direction vector; never normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct StdDirection<T> {
    pub dx: T,
    pub dy: T,
}

impl<T: RingElement> StdDirection<T> {
    #[inline]
    pub fn new(dx: T, dy: T) -> Self {
        Self { dx, dy }
    }
}

/// Oriented line `a·x + b·y + c = 0`; travel direction is `(b, -a)`.
#[derive(Clone, Debug, PartialEq)]
pub struct StdLine<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: RingElement> StdLine<T> {
    #[inline]
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Oriented line from `p` toward `q`.
    pub fn through(p: &StdPoint<T>, q: &StdPoint<T>) -> Self {
        Self {
            a: p.y.clone() - q.y.clone(),
            b: q.x.clone() - p.x.clone(),
            c: p.x.clone() * q.y.clone() - p.y.clone() * q.x.clone(),
        }
    }

    /// Oriented line through `p` along `d`.
    pub fn along(p: &StdPoint<T>, d: &StdDirection<T>) -> Self {
        Self {
            a: -d.dy.clone(),
            b: d.dx.clone(),
            c: p.x.clone() * d.dy.clone() - p.y.clone() * d.dx.clone(),
        }
    }

    /// Same carrier, reversed orientation.
    pub fn opposite(&self) -> Self {
        Self {
            a: -self.a.clone(),
            b: -self.b.clone(),
            c: -self.c.clone(),
        }
    }

    /// Travel direction `(b, -a)`.
    pub fn direction(&self) -> StdDirection<T> {
        StdDirection::new(self.b.clone(), -self.a.clone())
    }

    /// No direction at all: not a line.
    pub fn is_degenerate(&self) -> bool {
        Sign::of(&self.a).is_zero() && Sign::of(&self.b).is_zero()
    }
}

/// Ray from `source` along `dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct StdRay<T> {
    pub source: StdPoint<T>,
    pub dir: StdDirection<T>,
}

/// Segment between two finite points.
#[derive(Clone, Debug, PartialEq)]
pub struct StdSegment<T> {
    pub source: StdPoint<T>,
    pub target: StdPoint<T>,
}

impl<T: RingElement> StdSegment<T> {
    #[inline]
    pub fn new(source: StdPoint<T>, target: StdPoint<T>) -> Self {
        Self { source, target }
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }
}
