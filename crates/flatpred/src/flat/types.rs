//! Data types for the flat-orientation layer.

use std::fmt;

use nalgebra::DVector;

use crate::exact::RingElement;

/// Indexed coordinate access, the only view this layer has of a point.
///
/// Implementors expose one Cartesian coordinate per axis plus the ambient
/// dimension; homogenization (the trailing 1) happens inside the
/// consumers.
pub trait Coordinates<T> {
    fn ambient_dim(&self) -> usize;
    fn coordinate(&self, axis: usize) -> T;
}

impl<T: RingElement> Coordinates<T> for DVector<T> {
    #[inline]
    fn ambient_dim(&self) -> usize {
        self.len()
    }
    #[inline]
    fn coordinate(&self, axis: usize) -> T {
        self[axis].clone()
    }
}

impl<T: RingElement> Coordinates<T> for Vec<T> {
    #[inline]
    fn ambient_dim(&self) -> usize {
        self.len()
    }
    #[inline]
    fn coordinate(&self, axis: usize) -> T {
        self[axis].clone()
    }
}

/// Coordinate projection that represents a k-flat non-degenerately.
///
/// Invariants:
/// - `proj` and `rest` partition the homogeneous axes `0..=dim`, where
///   axis `dim` stands for the implicit "1" coordinate.
/// - `proj` is sorted ascending and has one entry per spanning point.
/// - `rest` keeps the order in which axes were left over during
///   construction. The predicates append one defining row per `rest`
///   entry in exactly this order, so the order is part of the contract —
///   do not sort it.
///
/// Pure data; copy freely and share across any number of predicate
/// evaluations against the same flat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatOrientation {
    pub proj: Vec<usize>,
    pub rest: Vec<usize>,
}

impl FlatOrientation {
    /// Number of homogeneous axes, `dim + 1`.
    #[inline]
    pub fn homogeneous_dim(&self) -> usize {
        self.proj.len() + self.rest.len()
    }

    /// Dimension of the flat (spanning points minus one).
    #[inline]
    pub fn flat_dim(&self) -> usize {
        self.proj.len().saturating_sub(1)
    }
}

impl fmt::Display for FlatOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proj:")?;
        for i in &self.proj {
            write!(f, " {i}")?;
        }
        write!(f, " rest:")?;
        for i in &self.rest {
            write!(f, " {i}")?;
        }
        Ok(())
    }
}

/// Errors surfaced by the builder and the affine-hull test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlatError {
    /// No input points; a flat needs at least one spanning point.
    EmptyPointSet,
    /// Input point is affinely dependent on its predecessors: no axis
    /// choice keeps the projected coordinates non-singular.
    DependentPoints { point_index: usize },
}

impl fmt::Display for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatError::EmptyPointSet => write!(f, "flat needs at least one spanning point"),
            FlatError::DependentPoints { point_index } => write!(
                f,
                "point {} is affinely dependent on the points before it",
                point_index
            ),
        }
    }
}
