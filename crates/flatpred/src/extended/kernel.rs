//! Extended 2D kernel: symbolic points at infinity on the square frame.
//!
//! An extended point stores a pair of degree-≤1 polynomials `(x(t), y(t))`
//! in a formal frame parameter `t`. Degree 0 in both coordinates is a
//! finite ("standard") point; a degree-1 coordinate encodes the
//! equivalence class of rays escaping toward the boundary of the square
//! `[-t, t]²` for arbitrarily large `t`. Constructions divide by line
//! coefficients, so the scalar must form a field — `num_rational::Ratio`
//! in practice.

use std::cmp::Ordering;

use super::cartesian::{StdDirection, StdLine, StdPoint, StdRay};
use super::poly::SymPoly;
use crate::exact::{RingElement, Sign};

/// Where a point sits on the extended plane: finite, on one of the four
/// open frame edges, or on a frame corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointType {
    SwCorner,
    LeftFrame,
    NwCorner,
    LowerFrame,
    Standard,
    UpperFrame,
    SeCorner,
    RightFrame,
    NeCorner,
}

/// Classify the frame point an oriented line runs into.
///
/// The travel direction is `(dx, dy) = (b, -a)`. A dominant `|dx|` hits
/// the right or left frame edge, a dominant `|dy|` the upper or lower
/// edge, a tie one of the corners. A degenerate line (no direction)
/// classifies as `Standard`, which the constructors reject.
pub fn frame_point_type<T: RingElement>(l: &StdLine<T>) -> PointType {
    let dx = l.b.clone();
    let dy = -l.a.clone();
    let sx = Sign::of(&dx);
    let sy = Sign::of(&dy);
    if sx.is_zero() && sy.is_zero() {
        return PointType::Standard;
    }
    let ax = dx.abs();
    let ay = dy.abs();
    if ax > ay {
        return if sx == Sign::Positive {
            PointType::RightFrame
        } else {
            PointType::LeftFrame
        };
    }
    if ax < ay {
        return if sy == Sign::Positive {
            PointType::UpperFrame
        } else {
            PointType::LowerFrame
        };
    }
    match (sx, sy) {
        (Sign::Positive, Sign::Positive) => PointType::NeCorner,
        (Sign::Negative, Sign::Positive) => PointType::NwCorner,
        (Sign::Negative, Sign::Negative) => PointType::SwCorner,
        _ => PointType::SeCorner,
    }
}

/// Point of the extended plane; both coordinates have degree ≤ 1.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedPoint<T> {
    pub x: SymPoly<T>,
    pub y: SymPoly<T>,
}

impl<T: RingElement> ExtendedPoint<T> {
    /// `(n1 + m1·t, n2 + m2·t)`.
    fn from_parts(m1: T, n1: T, m2: T, n2: T) -> Self {
        Self {
            x: SymPoly::linear(n1, m1),
            y: SymPoly::linear(n2, m2),
        }
    }

    /// Embed a finite point.
    pub fn standard(p: StdPoint<T>) -> Self {
        Self {
            x: SymPoly::constant(p.x),
            y: SymPoly::constant(p.y),
        }
    }

    /// Frame point of the equivalence class of rays underlying the
    /// oriented line `l`, together with its classification.
    ///
    /// Panics if `l` is degenerate (`a = b = 0`): there is no direction
    /// to escape along.
    pub fn at_infinity_typed(l: &StdLine<T>) -> (Self, PointType) {
        let t = frame_point_type(l);
        let p = match t {
            PointType::SwCorner => Self::from_parts(-T::one(), T::zero(), -T::one(), T::zero()),
            PointType::NwCorner => Self::from_parts(-T::one(), T::zero(), T::one(), T::zero()),
            PointType::SeCorner => Self::from_parts(T::one(), T::zero(), -T::one(), T::zero()),
            PointType::NeCorner => Self::from_parts(T::one(), T::zero(), T::one(), T::zero()),
            PointType::LeftFrame => Self::from_parts(
                -T::one(),
                T::zero(),
                l.a.clone() / l.b.clone(),
                -(l.c.clone() / l.b.clone()),
            ),
            PointType::RightFrame => Self::from_parts(
                T::one(),
                T::zero(),
                -(l.a.clone() / l.b.clone()),
                -(l.c.clone() / l.b.clone()),
            ),
            PointType::LowerFrame => Self::from_parts(
                l.b.clone() / l.a.clone(),
                -(l.c.clone() / l.a.clone()),
                -T::one(),
                T::zero(),
            ),
            PointType::UpperFrame => Self::from_parts(
                -(l.b.clone() / l.a.clone()),
                -(l.c.clone() / l.a.clone()),
                T::one(),
                T::zero(),
            ),
            PointType::Standard => panic!("degenerate line has no frame point"),
        };
        (p, t)
    }

    /// Frame point without the classification tag.
    pub fn at_infinity(l: &StdLine<T>) -> Self {
        Self::at_infinity_typed(l).0
    }

    /// Frame point of the oriented line from `p` toward `q`.
    pub fn through(p: &StdPoint<T>, q: &StdPoint<T>) -> Self {
        Self::at_infinity(&StdLine::through(p, q))
    }

    /// Frame point of the ray from `p` along `d`.
    pub fn along_ray(p: &StdPoint<T>, d: &StdDirection<T>) -> Self {
        Self::at_infinity(&StdLine::along(p, d))
    }

    /// Frame point of the oppositely oriented line.
    pub fn opposite_infinity(l: &StdLine<T>) -> Self {
        Self::at_infinity(&l.opposite())
    }

    /// North-east frame corner.
    pub fn ne() -> Self {
        Self::at_infinity(&StdLine::new(-T::one(), T::one(), T::zero()))
    }

    /// South-east frame corner.
    pub fn se() -> Self {
        Self::at_infinity(&StdLine::new(T::one(), T::one(), T::zero()))
    }

    /// North-west frame corner.
    pub fn nw() -> Self {
        Self::at_infinity(&StdLine::new(-T::one(), -T::one(), T::zero()))
    }

    /// South-west frame corner.
    pub fn sw() -> Self {
        Self::at_infinity(&StdLine::new(T::one(), -T::one(), T::zero()))
    }

    /// Nine-way classification.
    ///
    /// Finite points are `Standard`. On the frame, `|x|` and `|y|` are
    /// compared as polynomial values, so a tie between the degree-1
    /// coefficients is broken by the constant terms: only exact diagonal
    /// escapes land on a corner.
    pub fn point_type(&self) -> PointType {
        if self.x.degree() == 0 && self.y.degree() == 0 {
            return PointType::Standard;
        }
        let sx = self.x.sign();
        let sy = self.y.sign();
        let rx = self.x.abs();
        let ry = self.y.abs();
        if rx > ry {
            return if sx == Sign::Positive {
                PointType::RightFrame
            } else {
                PointType::LeftFrame
            };
        }
        if rx < ry {
            return if sy == Sign::Positive {
                PointType::UpperFrame
            } else {
                PointType::LowerFrame
            };
        }
        if sx == sy {
            if sx == Sign::Negative {
                PointType::SwCorner
            } else {
                PointType::NeCorner
            }
        } else {
            debug_assert_eq!(sx, sy.flip());
            if sx == Sign::Negative {
                PointType::NwCorner
            } else {
                PointType::SeCorner
            }
        }
    }

    #[inline]
    pub fn is_standard(&self) -> bool {
        self.point_type() == PointType::Standard
    }

    /// The finite point this represents, if standard.
    pub fn standard_point(&self) -> Option<StdPoint<T>> {
        if self.is_standard() {
            Some(StdPoint::new(self.x.coeff(0), self.y.coeff(0)))
        } else {
            None
        }
    }

    /// Oriented line representing the bundle of rays that defines a
    /// non-standard point; `None` for finite points.
    pub fn standard_line(&self) -> Option<StdLine<T>> {
        if self.is_standard() {
            return None;
        }
        let p0 = StdPoint::new(self.x.coeff(0), self.y.coeff(0));
        let p1 = StdPoint::new(
            p0.x.clone() + self.x.coeff(1),
            p0.y.clone() + self.y.coeff(1),
        );
        Some(StdLine::through(&p0, &p1))
    }

    /// A defining ray for a non-standard point; `None` for finite points.
    pub fn standard_ray(&self) -> Option<StdRay<T>> {
        if self.is_standard() {
            return None;
        }
        Some(StdRay {
            source: StdPoint::new(self.x.coeff(0), self.y.coeff(0)),
            dir: StdDirection::new(self.x.coeff(1), self.y.coeff(1)),
        })
    }
}

/// Orientation of the triple `(p, q, r)`: positive for a left turn,
/// evaluated symbolically so frame points participate exactly.
pub fn orientation<T: RingElement>(
    p: &ExtendedPoint<T>,
    q: &ExtendedPoint<T>,
    r: &ExtendedPoint<T>,
) -> Sign {
    let ux = q.x.clone() - p.x.clone();
    let uy = q.y.clone() - p.y.clone();
    let vx = r.x.clone() - p.x.clone();
    let vy = r.y.clone() - p.y.clone();
    (ux * vy - uy * vx).sign()
}

fn sign_to_ordering(s: Sign) -> Ordering {
    match s {
        Sign::Negative => Ordering::Less,
        Sign::Zero => Ordering::Equal,
        Sign::Positive => Ordering::Greater,
    }
}

/// Order on the symbolic x-coordinates.
pub fn compare_x<T: RingElement>(p: &ExtendedPoint<T>, q: &ExtendedPoint<T>) -> Ordering {
    sign_to_ordering((p.x.clone() - q.x.clone()).sign())
}

/// Order on the symbolic y-coordinates.
pub fn compare_y<T: RingElement>(p: &ExtendedPoint<T>, q: &ExtendedPoint<T>) -> Ordering {
    sign_to_ordering((p.y.clone() - q.y.clone()).sign())
}

/// Lexicographic order, x first.
pub fn compare_xy<T: RingElement>(p: &ExtendedPoint<T>, q: &ExtendedPoint<T>) -> Ordering {
    compare_x(p, q).then_with(|| compare_y(p, q))
}

/// Oriented line of the extended plane; coefficients are symbolic.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedLine<T> {
    pub a: SymPoly<T>,
    pub b: SymPoly<T>,
    pub c: SymPoly<T>,
}

impl<T: RingElement> ExtendedLine<T> {
    /// Line from `p` toward `q`.
    pub fn through(p: &ExtendedPoint<T>, q: &ExtendedPoint<T>) -> Self {
        Self {
            a: p.y.clone() - q.y.clone(),
            b: q.x.clone() - p.x.clone(),
            c: p.x.clone() * q.y.clone() - p.y.clone() * q.x.clone(),
        }
    }

    /// Embed a standard line.
    pub fn standard(l: &StdLine<T>) -> Self {
        Self {
            a: SymPoly::constant(l.a.clone()),
            b: SymPoly::constant(l.b.clone()),
            c: SymPoly::constant(l.c.clone()),
        }
    }
}

/// Segment of the extended plane.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedSegment<T> {
    pub source: ExtendedPoint<T>,
    pub target: ExtendedPoint<T>,
}

impl<T: RingElement> ExtendedSegment<T> {
    #[inline]
    pub fn new(source: ExtendedPoint<T>, target: ExtendedPoint<T>) -> Self {
        Self { source, target }
    }

    pub fn supporting_line(&self) -> ExtendedLine<T> {
        ExtendedLine::through(&self.source, &self.target)
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }
}

/// Intersection point of two extended lines.
///
/// Panics when the lines are parallel, or when the intersection exists
/// but has no polynomial coordinates — both are structural failures for
/// callers that assumed a representable intersection.
pub fn line_intersection<T: RingElement>(
    l1: &ExtendedLine<T>,
    l2: &ExtendedLine<T>,
) -> ExtendedPoint<T> {
    let den = l1.a.clone() * l2.b.clone() - l2.a.clone() * l1.b.clone();
    assert!(!den.is_zero(), "line intersection: lines are parallel");
    let xn = l1.b.clone() * l2.c.clone() - l2.b.clone() * l1.c.clone();
    let yn = l1.c.clone() * l2.a.clone() - l2.c.clone() * l1.a.clone();
    match (xn.div_exact(&den), yn.div_exact(&den)) {
        (Some(x), Some(y)) => ExtendedPoint { x, y },
        _ => panic!("line intersection: intersection point is not representable"),
    }
}

/// Intersection of the supporting lines of two segments.
pub fn segment_intersection<T: RingElement>(
    s1: &ExtendedSegment<T>,
    s2: &ExtendedSegment<T>,
) -> ExtendedPoint<T> {
    line_intersection(&s1.supporting_line(), &s2.supporting_line())
}

/// Smallest frame radius that keeps every given point's finite part — or
/// frame-edge intercept — strictly inside the square of that radius,
/// accumulated on top of `start`.
pub fn frame_radius<T: RingElement>(points: &[ExtendedPoint<T>], start: T) -> T {
    let mut r0 = start;
    for p in points {
        let r = if p.is_standard() {
            let x = p.x.coeff(0).abs();
            let y = p.y.coeff(0).abs();
            if x > y {
                x
            } else {
                y
            }
        } else {
            let rx = p.x.abs();
            let ry = p.y.abs();
            let (rx0, rx1) = (rx.coeff(0), rx.coeff(1));
            let (ry0, ry1) = (ry.coeff(0), ry.coeff(1));
            if rx1 > ry1 {
                (ry0 - rx0).abs() / (rx1 - ry1)
            } else if rx1 < ry1 {
                (rx0 - ry0).abs() / (ry1 - rx1)
            } else {
                (rx0 - ry0).abs() / (T::one() + T::one())
            }
        };
        let r = r + T::one();
        if r > r0 {
            r0 = r;
        }
    }
    r0
}
