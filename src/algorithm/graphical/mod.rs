//! # The graphical method
//!
//! Solves linear programs in two variables by enumerating the vertices of the feasible region. Every
//! pair of constraint boundaries (including the axes, because both variables are nonnegative) is
//! intersected, and the intersections that satisfy all constraints are the vertices. If an optimum
//! exists inside the display window, it is attained at one of them.
use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::algorithm::graphical::geometry::{clip_to_window, DisplayWindow, HalfPlane, intersect, order_polygon, Point2D, satisfies};
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::error::InvalidInput;
use crate::data::linear_program::problem::LinearProgram;
use crate::data::linear_program::solution::{Solution, Status};

pub mod geometry;

/// Name reported in solutions produced by this module.
pub const METHOD: &str = "Graphical Method";

/// Vertices are rounded to this many decimals before they are compared.
const DECIMALS: i32 = 4;
/// Two rounded vertices closer than this in both coordinates are the same vertex.
const DEDUPLICATION_EPSILON: f64 = 1e-8;

/// A vertex of the feasible region together with the objective function value at that vertex.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Vertex {
    #[allow(missing_docs)]
    pub point: Point2D,
    #[allow(missing_docs)]
    pub value: f64,
}

/// Drawable part of a constraint boundary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoundaryLine {
    /// Which constraint this line belongs to.
    pub label: String,
    #[allow(missing_docs)]
    pub start: Point2D,
    #[allow(missing_docs)]
    pub end: Point2D,
    /// Whether this is one of the axes, which bound the region through nonnegativity.
    pub is_axis: bool,
}

/// Everything the graphical method computes about a problem.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphicalSolution {
    direction: Objective,
    /// The first vertex found attaining the best objective value.
    optimum: Option<Vertex>,
    /// All feasible vertices, in the order in which they were found.
    vertices: Vec<Vertex>,
    /// The vertices ordered around their centroid, forming the boundary of the feasible region.
    region: Vec<Point2D>,
    lines: Vec<BoundaryLine>,
}

impl GraphicalSolution {
    /// `Infeasible` if no vertex was found, `Optimal` otherwise.
    ///
    /// Ties between vertices are not reported as `Multiple`.
    pub fn status(&self) -> Status {
        if self.optimum.is_some() {
            Status::Optimal
        } else {
            Status::Infeasible
        }
    }

    /// Direction in which the objective was optimized.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// The optimal vertex, if the problem is feasible.
    pub fn optimum(&self) -> Option<&Vertex> {
        self.optimum.as_ref()
    }

    /// All feasible vertices with their objective value.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Boundary of the feasible region.
    pub fn region(&self) -> &[Point2D] {
        &self.region
    }

    /// Boundary lines of the constraints, clipped to the display window.
    pub fn lines(&self) -> &[BoundaryLine] {
        &self.lines
    }

    /// Describe the result in the representation shared by all methods.
    pub fn to_solution(&self) -> Solution {
        match self.optimum {
            Some(Vertex { point, value }) => Solution::new(
                Status::Optimal,
                value,
                vec![("x1".to_string(), point.x), ("x2".to_string(), point.y)],
                METHOD,
            ),
            None => Solution::infeasible(METHOD),
        }
    }
}

/// Solver for linear programs in exactly two variables.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GraphicalSolver {
    epsilon: f64,
    window: DisplayWindow,
}

impl Default for GraphicalSolver {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            window: DisplayWindow::default(),
        }
    }
}

impl GraphicalSolver {
    /// Create a solver with the default tolerance and display window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another tolerance for parallel lines and constraint satisfaction.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        debug_assert!(epsilon > 0f64);

        self.epsilon = epsilon;
        self
    }

    /// Search for vertices (and draw lines) in another window.
    #[must_use]
    pub fn with_window(mut self, window: DisplayWindow) -> Self {
        self.window = window;
        self
    }

    /// Solve a linear program in two variables.
    ///
    /// # Return value
    ///
    /// The optimal vertex if the problem is feasible within the display window, and the data needed
    /// to draw the problem either way.
    ///
    /// # Errors
    ///
    /// If the problem is not consistent, or doesn't have exactly two variables.
    pub fn solve(&self, problem: &LinearProgram) -> Result<GraphicalSolution, InvalidInput> {
        if problem.nr_variables() != 2 {
            return Err(InvalidInput::VariableCount { expected: 2, found: problem.nr_variables() });
        }
        problem.validate()?;

        let given = problem.constraints.iter()
            .map(HalfPlane::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|found| InvalidInput::VariableCount { expected: 2, found })?;
        let mut all = given.clone();
        all.push(HalfPlane::x_nonnegative());
        all.push(HalfPlane::y_nonnegative());

        let direction = problem.objective.direction;
        let vertices = self.feasible_vertices(&all).into_iter()
            .map(|point| Vertex { point, value: problem.objective.evaluate(&[point.x, point.y]) })
            .collect::<Vec<_>>();

        let optimum = vertices.iter()
            .fold(None, |best: Option<Vertex>, &vertex| match best {
                Some(incumbent) if !direction.improves(vertex.value, incumbent.value) => Some(incumbent),
                _ => Some(vertex),
            });
        match &optimum {
            Some(vertex) => debug!(
                "Graphical method: {} vertices, optimum {} at ({}, {})",
                vertices.len(), vertex.value, vertex.point.x, vertex.point.y,
            ),
            None => debug!("Graphical method: no feasible vertex, problem is infeasible"),
        }

        let region = order_polygon(vertices.iter().map(|vertex| vertex.point).collect());
        let lines = self.boundary_lines(&given);

        Ok(GraphicalSolution { direction, optimum, vertices, region, lines })
    }

    /// Intersect all pairs of boundaries and keep the feasible, distinct intersections.
    ///
    /// A candidate has to satisfy every constraint, not only the two that produced it.
    fn feasible_vertices(&self, half_planes: &[HalfPlane]) -> Vec<Point2D> {
        let mut vertices: Vec<Point2D> = Vec::new();

        for (first, second) in half_planes.iter().tuple_combinations() {
            let Some(point) = intersect(first, second, self.epsilon) else { continue };
            if !self.window.contains(&point) || !satisfies(&point, half_planes, self.epsilon) {
                continue;
            }

            let point = point.rounded(DECIMALS);
            if !vertices.iter().any(|existing| existing.approx_eq(&point, DEDUPLICATION_EPSILON)) {
                vertices.push(point);
            }
        }

        vertices
    }

    fn boundary_lines(&self, given: &[HalfPlane]) -> Vec<BoundaryLine> {
        let constraints = given.iter()
            .enumerate()
            .map(|(i, half_plane)| (format!("Constraint {}", i + 1), half_plane, false));
        let axes = [
            ("x1 = 0".to_string(), &HalfPlane::x_nonnegative(), true),
            ("x2 = 0".to_string(), &HalfPlane::y_nonnegative(), true),
        ];

        constraints.chain(axes)
            .filter_map(|(label, half_plane, is_axis)| {
                clip_to_window(half_plane, &self.window, self.epsilon)
                    .map(|(start, end)| BoundaryLine { label, start, end, is_axis })
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::graphical::{GraphicalSolver, Vertex};
    use crate::algorithm::graphical::geometry::{DisplayWindow, Point2D};
    use crate::data::linear_program::elements::{Constraint, ConstraintType, ObjectiveFunction};
    use crate::data::linear_program::error::InvalidInput;
    use crate::data::linear_program::problem::LinearProgram;
    use crate::data::linear_program::solution::Status;

    #[test]
    fn first_found_optimum_wins_ties() {
        // Objective parallel to the first constraint: (0, 5) and (2, 4) tie
        let problem = LinearProgram::new(
            ObjectiveFunction::maximize(vec![1f64, 2f64]),
            vec![
                Constraint::new(vec![1f64, 2f64], ConstraintType::Less, 10f64),
                Constraint::new(vec![2f64, 1f64], ConstraintType::Less, 8f64),
            ],
        );
        let solution = GraphicalSolver::new().solve(&problem).unwrap();

        // Pair (constraint 1, constraint 2) is enumerated before (constraint 1, x = 0)
        assert_eq!(solution.optimum(), Some(&Vertex { point: Point2D::new(2f64, 4f64), value: 10f64 }));
        assert_eq!(solution.status(), Status::Optimal);
    }

    #[test]
    fn minimization() {
        let problem = LinearProgram::new(
            ObjectiveFunction::minimize(vec![2f64, 3f64]),
            vec![
                Constraint::new(vec![1f64, 1f64], ConstraintType::Greater, 4f64),
                Constraint::new(vec![1f64, 3f64], ConstraintType::Greater, 6f64),
            ],
        );
        let solution = GraphicalSolver::new().solve(&problem).unwrap();

        let optimum = solution.optimum().unwrap();
        assert_eq!(optimum.point, Point2D::new(3f64, 1f64));
        assert_eq!(optimum.value, 9f64);
    }

    #[test]
    fn equality_constraint() {
        let problem = LinearProgram::new(
            ObjectiveFunction::maximize(vec![1f64, 1f64]),
            vec![
                Constraint::new(vec![1f64, -1f64], ConstraintType::Equal, 0f64),
                Constraint::new(vec![1f64, 0f64], ConstraintType::Less, 3f64),
            ],
        );
        let solution = GraphicalSolver::new().solve(&problem).unwrap();

        assert_eq!(solution.vertices().len(), 2);
        assert_eq!(solution.optimum().unwrap().point, Point2D::new(3f64, 3f64));
    }

    #[test]
    fn infeasible() {
        let problem = LinearProgram::new(
            ObjectiveFunction::maximize(vec![1f64, 1f64]),
            vec![
                Constraint::new(vec![1f64, 0f64], ConstraintType::Less, 1f64),
                Constraint::new(vec![1f64, 0f64], ConstraintType::Greater, 5f64),
            ],
        );
        let solution = GraphicalSolver::new().solve(&problem).unwrap();

        assert_eq!(solution.status(), Status::Infeasible);
        assert!(solution.vertices().is_empty());
        assert!(solution.region().is_empty());
        assert_eq!(solution.to_solution().status(), Status::Infeasible);
        // The lines are still drawn
        assert_eq!(solution.lines().len(), 4);
    }

    #[test]
    fn window_limits_vertices() {
        let problem = LinearProgram::new(
            ObjectiveFunction::maximize(vec![1f64, 0f64]),
            vec![Constraint::new(vec![1f64, 1f64], ConstraintType::Less, 20f64)],
        );

        let solution = GraphicalSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.vertices().len(), 1);
        assert_eq!(solution.optimum().unwrap().point, Point2D::new(0f64, 0f64));

        let wide = GraphicalSolver::new().with_window(DisplayWindow::new(-1f64, 30f64, -1f64, 30f64));
        let solution = wide.solve(&problem).unwrap();
        assert_eq!(solution.vertices().len(), 3);
        assert_eq!(solution.optimum().unwrap().point, Point2D::new(20f64, 0f64));
    }

    #[test]
    fn wrong_dimension() {
        let problem = LinearProgram::new(
            ObjectiveFunction::maximize(vec![1f64, 1f64, 1f64]),
            vec![Constraint::new(vec![1f64, 1f64, 1f64], ConstraintType::Less, 1f64)],
        );
        assert_eq!(
            GraphicalSolver::new().solve(&problem),
            Err(InvalidInput::VariableCount { expected: 2, found: 3 }),
        );
    }
}
