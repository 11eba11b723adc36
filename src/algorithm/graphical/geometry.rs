//! # Plane geometry
//!
//! Intersections of constraint boundary lines, feasibility of points and ordering of the vertices
//! of a convex region.
use std::cmp::Ordering;

use itertools::Itertools;
use serde::Serialize;

use crate::data::linear_program::elements::{Constraint, ConstraintType};

/// A point in the plane.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Point2D {
    #[allow(missing_docs)]
    pub x: f64,
    #[allow(missing_docs)]
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates differ less than `epsilon`.
    ///
    /// Not transitive, so this is not a `PartialEq` implementation.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    /// Round both coordinates to a number of decimal places.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self {
            x: (self.x * factor).round() / factor,
            y: (self.y * factor).round() / factor,
        }
    }
}

/// A constraint in two variables: `a x + b y (relation) c`.
///
/// Its boundary is the line `a x + b y = c`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalfPlane {
    #[allow(missing_docs)]
    pub a: f64,
    #[allow(missing_docs)]
    pub b: f64,
    #[allow(missing_docs)]
    pub c: f64,
    #[allow(missing_docs)]
    pub constraint_type: ConstraintType,
}

impl HalfPlane {
    /// Create a new half plane (or line, in the case of an equality).
    #[must_use]
    pub fn new(a: f64, b: f64, constraint_type: ConstraintType, c: f64) -> Self {
        Self { a, b, c, constraint_type }
    }

    /// The constraint `x >= 0`.
    #[must_use]
    pub fn x_nonnegative() -> Self {
        Self::new(1f64, 0f64, ConstraintType::Greater, 0f64)
    }

    /// The constraint `y >= 0`.
    #[must_use]
    pub fn y_nonnegative() -> Self {
        Self::new(0f64, 1f64, ConstraintType::Greater, 0f64)
    }

    /// Value of the left hand side at `point`.
    pub fn evaluate(&self, point: &Point2D) -> f64 {
        self.a * point.x + self.b * point.y
    }

    /// Whether `point` lies in this half plane, allowing a violation of at most `epsilon`.
    pub fn contains(&self, point: &Point2D, epsilon: f64) -> bool {
        self.constraint_type.is_satisfied(self.evaluate(point), self.c, epsilon)
    }
}

impl TryFrom<&Constraint> for HalfPlane {
    /// Number of coefficients found.
    type Error = usize;

    fn try_from(constraint: &Constraint) -> Result<Self, Self::Error> {
        match constraint.coefficients.coefficients() {
            &[a, b] => Ok(Self::new(a, b, constraint.constraint_type, constraint.rhs)),
            other => Err(other.len()),
        }
    }
}

/// Axis aligned rectangle in which vertices are searched and lines are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DisplayWindow {
    #[allow(missing_docs)]
    pub min_x: f64,
    #[allow(missing_docs)]
    pub max_x: f64,
    #[allow(missing_docs)]
    pub min_y: f64,
    #[allow(missing_docs)]
    pub max_y: f64,
}

impl DisplayWindow {
    /// Create a new window.
    #[must_use]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        debug_assert!(min_x < max_x);
        debug_assert!(min_y < max_y);

        Self { min_x, max_x, min_y, max_y }
    }

    /// Whether `point` lies inside the window or on its border.
    pub fn contains(&self, point: &Point2D) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }
}

impl Default for DisplayWindow {
    /// The first quadrant up to 10, with a small margin below the axes.
    fn default() -> Self {
        Self::new(-0.1, 10f64, -0.1, 10f64)
    }
}

/// Intersection point of the boundary lines of two half planes.
///
/// Solved with Cramer's rule.
///
/// # Return value
///
/// `None` if the lines are parallel or coincide, that is, if the absolute value of the
/// determinant is below `epsilon`.
pub fn intersect(first: &HalfPlane, second: &HalfPlane, epsilon: f64) -> Option<Point2D> {
    let determinant = first.a * second.b - second.a * first.b;
    if determinant.abs() < epsilon {
        return None;
    }

    let x = (first.c * second.b - second.c * first.b) / determinant;
    let y = (first.a * second.c - second.a * first.c) / determinant;

    Some(Point2D::new(x, y))
}

/// Whether `point` satisfies every constraint within `epsilon`.
pub fn satisfies(point: &Point2D, half_planes: &[HalfPlane], epsilon: f64) -> bool {
    half_planes.iter().all(|half_plane| half_plane.contains(point, epsilon))
}

/// Order points by their angle around the centroid.
///
/// For the vertices of a convex region this gives a non self-intersecting boundary, counter
/// clockwise, starting just below the negative x-axis as seen from the centroid.
pub fn order_polygon(mut points: Vec<Point2D>) -> Vec<Point2D> {
    if points.len() < 3 {
        return points;
    }

    let count = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / count;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / count;
    let angle = |p: &Point2D| (p.y - cy).atan2(p.x - cx);

    points.sort_by(|p, q| angle(p).partial_cmp(&angle(q)).unwrap_or(Ordering::Equal));
    points
}

/// The part of the boundary line of `half_plane` that lies inside `window`.
///
/// # Return value
///
/// The two ends of the segment, or `None` if the line doesn't cross the window (or has no
/// direction because both coefficients are zero).
pub fn clip_to_window(half_plane: &HalfPlane, window: &DisplayWindow, epsilon: f64) -> Option<(Point2D, Point2D)> {
    let HalfPlane { a, b, c, .. } = *half_plane;

    let mut candidates = Vec::with_capacity(4);
    if b.abs() >= epsilon {
        for x in [window.min_x, window.max_x] {
            candidates.push(Point2D::new(x, (c - a * x) / b));
        }
    }
    if a.abs() >= epsilon {
        for y in [window.min_y, window.max_y] {
            candidates.push(Point2D::new((c - b * y) / a, y));
        }
    }

    let inside = candidates.into_iter()
        .filter(|p| window_contains_approx(window, p, epsilon))
        .collect::<Vec<_>>();

    // The extremes along the line's direction are the segment's ends
    let direction = |p: &Point2D| -b * p.x + a * p.y;
    let (start, end) = inside.into_iter()
        .minmax_by(|p, q| direction(p).partial_cmp(&direction(q)).unwrap_or(Ordering::Equal))
        .into_option()?;

    if start.approx_eq(&end, epsilon) {
        None
    } else {
        Some((start, end))
    }
}

fn window_contains_approx(window: &DisplayWindow, point: &Point2D, epsilon: f64) -> bool {
    point.x >= window.min_x - epsilon && point.x <= window.max_x + epsilon
        && point.y >= window.min_y - epsilon && point.y <= window.max_y + epsilon
}
