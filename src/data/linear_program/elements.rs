//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Not;
use std::str::FromStr;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::data::linear_program::error::InvalidInput;

/// A `Constraint` is a type of (in)equality.
///
/// Reads "from the expression to the right hand side": `Less` is `<a, x> <= b`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum, Serialize, Deserialize)]
pub enum ConstraintType {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">=")]
    Greater,
    #[serde(rename = "<=")]
    Less,
}

impl ConstraintType {
    /// Whether `lhs (relation) rhs` holds, allowing a violation of at most `epsilon`.
    ///
    /// Points on the boundary satisfy both inequality directions.
    #[must_use]
    pub fn is_satisfied(self, lhs: f64, rhs: f64, epsilon: f64) -> bool {
        match self {
            ConstraintType::Less => lhs <= rhs + epsilon,
            ConstraintType::Greater => lhs >= rhs - epsilon,
            ConstraintType::Equal => (lhs - rhs).abs() < epsilon,
        }
    }

    /// Symbol as it is written in problem files.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Less => "<=",
            ConstraintType::Greater => ">=",
            ConstraintType::Equal => "=",
        }
    }
}

/// Relation after multiplying both sides by `-1`.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Less => ConstraintType::Greater,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Equal => ConstraintType::Equal,
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ConstraintType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" => Ok(ConstraintType::Less),
            ">=" => Ok(ConstraintType::Greater),
            "=" | "==" => Ok(ConstraintType::Equal),
            other => Err(InvalidInput::UnknownRelation(other.to_string())),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    #[serde(alias = "max")]
    Maximize,
    #[default]
    #[serde(alias = "min")]
    Minimize,
}

impl Objective {
    /// Whether `candidate` is strictly better than `incumbent` in this direction.
    #[must_use]
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }
}

/// Ordered coefficients, one per decision variable.
///
/// The index of a coefficient is the index of the variable it multiplies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinearExpression {
    coefficients: Vec<f64>,
}

impl LinearExpression {
    /// Create a new expression.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// All coefficients, ordered by variable index.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of variables this expression is written in.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the expression has no coefficients at all.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Whether all coefficients are zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0f64)
    }

    /// Inner product with a point.
    pub fn evaluate(&self, point: &[f64]) -> f64 {
        debug_assert_eq!(point.len(), self.len());

        self.coefficients.iter().zip(point).map(|(c, x)| c * x).sum()
    }
}

impl From<Vec<f64>> for LinearExpression {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

/// A single row of a linear program: `<a, x> (relation) b`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Left hand side.
    pub coefficients: LinearExpression,
    /// How the left hand side relates to the right hand side.
    #[serde(rename = "relation")]
    pub constraint_type: ConstraintType,
    /// Right hand side.
    pub rhs: f64,
}

impl Constraint {
    /// Create a new constraint.
    #[must_use]
    pub fn new(coefficients: Vec<f64>, constraint_type: ConstraintType, rhs: f64) -> Self {
        Self {
            coefficients: LinearExpression::new(coefficients),
            constraint_type,
            rhs,
        }
    }

    /// Whether `point` satisfies this constraint within `epsilon`.
    pub fn is_satisfied_by(&self, point: &[f64], epsilon: f64) -> bool {
        self.constraint_type.is_satisfied(self.coefficients.evaluate(point), self.rhs, epsilon)
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, &self.coefficients)?;
        write!(f, " {} {}", self.constraint_type, self.rhs)
    }
}

/// Cost function together with the direction in which it should be optimized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveFunction {
    /// Cost coefficients.
    pub coefficients: LinearExpression,
    /// Maximize or minimize.
    #[serde(default)]
    pub direction: Objective,
}

impl ObjectiveFunction {
    /// Create a new objective function.
    #[must_use]
    pub fn new(coefficients: Vec<f64>, direction: Objective) -> Self {
        Self { coefficients: LinearExpression::new(coefficients), direction }
    }

    /// Shorthand for a maximization objective.
    #[must_use]
    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients, Objective::Maximize)
    }

    /// Shorthand for a minimization objective.
    #[must_use]
    pub fn minimize(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients, Objective::Minimize)
    }

    /// Value of the cost function at `point`.
    pub fn evaluate(&self, point: &[f64]) -> f64 {
        self.coefficients.evaluate(point)
    }
}

impl Display for ObjectiveFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.direction {
            Objective::Maximize => f.write_str("max ")?,
            Objective::Minimize => f.write_str("min ")?,
        }
        write_expression(f, &self.coefficients)
    }
}

fn write_expression(f: &mut Formatter<'_>, expression: &LinearExpression) -> fmt::Result {
    for (j, coefficient) in expression.coefficients().iter().enumerate() {
        if j > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{coefficient} x{}", j + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{Constraint, ConstraintType, Objective, ObjectiveFunction};

    #[test]
    fn relation_round_trip_through_symbols() {
        for relation in [ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal] {
            assert_eq!(relation.symbol().parse::<ConstraintType>().ok(), Some(relation));
        }
        assert!("<".parse::<ConstraintType>().is_err());
        assert_eq!(!ConstraintType::Less, ConstraintType::Greater);
        assert_eq!(!ConstraintType::Equal, ConstraintType::Equal);
    }

    #[test]
    fn boundary_points_are_satisfied() {
        let constraint = Constraint::new(vec![1f64, 2f64], ConstraintType::Less, 10f64);
        assert!(constraint.is_satisfied_by(&[2f64, 4f64], 1e-10));
        assert!(constraint.is_satisfied_by(&[2f64, 4f64 + 1e-11], 1e-10));
        assert!(!constraint.is_satisfied_by(&[2f64, 4.1f64], 1e-10));

        assert!(ConstraintType::Greater.is_satisfied(5f64 - 1e-11, 5f64, 1e-10));
        assert!(ConstraintType::Equal.is_satisfied(5f64, 5f64, 1e-10));
        assert!(!ConstraintType::Equal.is_satisfied(5.1f64, 5f64, 1e-10));
    }

    #[test]
    fn objective_direction() {
        assert!(Objective::Maximize.improves(2f64, 1f64));
        assert!(!Objective::Maximize.improves(1f64, 1f64));
        assert!(Objective::Minimize.improves(1f64, 2f64));
        assert_eq!(Objective::default(), Objective::Minimize);
    }

    #[test]
    fn display() {
        let objective = ObjectiveFunction::maximize(vec![3f64, 4f64]);
        assert_eq!(objective.to_string(), "max 3 x1 + 4 x2");
        assert_eq!(objective.evaluate(&[2f64, 4f64]), 22f64);

        let constraint = Constraint::new(vec![1f64, 2f64], ConstraintType::Less, 10f64);
        assert_eq!(constraint.to_string(), "1 x1 + 2 x2 <= 10");
    }
}
