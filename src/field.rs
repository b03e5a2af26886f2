use crate::math::{Point2d, Vector2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// The value of a potential field at a point, together with its force.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Potential {
    /// The scalar potential.
    pub value: f64,
    /// The force, i.e. the negative gradient of the potential.
    pub force: Vector2d,
}

impl Potential {
    /// A zero potential with no force.
    pub const ZERO: Potential = Potential {
        value: 0.0,
        force: Vector2d { x: 0.0, y: 0.0 },
    };

    /// Creates a new potential.
    pub const fn new(value: f64, force: Vector2d) -> Self {
        Self { value, force }
    }
}

impl Default for Potential {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Potential {
    type Output = Potential;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
            force: self.force + rhs.force,
        }
    }
}

impl AddAssign for Potential {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
        self.force += rhs.force;
    }
}

impl std::iter::Sum for Potential {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut total = Potential::default();
        for p in iter {
            total += p;
        }
        total
    }
}

/// A scalar potential field over the plane.
pub trait PotentialField {
    /// Evaluates the potential and force at `x`.
    fn evaluate(&self, x: Point2d) -> Potential;

    /// Samples the potential at `x`.
    fn potential(&self, x: Point2d) -> f64 {
        self.evaluate(x).value
    }

    /// Samples the force at `x`.
    fn force(&self, x: Point2d) -> Vector2d {
        self.evaluate(x).force
    }

    /// Approximates the force at `x` as the negative gradient of the potential,
    /// using central differences with step `delta`.
    ///
    /// Where the potential has been capped, or at a singularity, this will
    /// disagree with [PotentialField::force].
    fn estimate_force(&self, x: Point2d, delta: f64) -> Vector2d {
        let dx = Vector2d::new(delta, 0.0);
        let dy = Vector2d::new(0.0, delta);
        let grad_x = (self.potential(x + dx) - self.potential(x - dx)) / (2.0 * delta);
        let grad_y = (self.potential(x + dy) - self.potential(x - dy)) / (2.0 * delta);
        Vector2d::new(-grad_x, -grad_y)
    }
}

impl<T: PotentialField + ?Sized> PotentialField for &T {
    fn evaluate(&self, x: Point2d) -> Potential {
        (**self).evaluate(x)
    }
}

/// Two fields superposed.
impl<A: PotentialField, B: PotentialField> PotentialField for (A, B) {
    fn evaluate(&self, x: Point2d) -> Potential {
        self.0.evaluate(x) + self.1.evaluate(x)
    }
}
