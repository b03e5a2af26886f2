use crate::error::{require_positive, Result};
use crate::field::{Potential, PotentialField};
use crate::math::{displacement, Point2d, Vector2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The potential reported when the position coincides with an obstacle,
/// before the cap is applied.
pub const SINGULAR_POTENTIAL: f64 = 100.0;

/// Tuning parameters shared by repulsive fields.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepulsiveParams {
    /// The radius of the obstacle's zone of influence.
    pub influence: f64,
    /// The scale factor.
    pub gain: f64,
    /// The cap on the reported potential of a single obstacle.
    /// The force is never capped.
    pub max_potential: f64,
}

impl RepulsiveParams {
    /// Creates parameters with unit gain and a unit potential cap.
    pub const fn new(influence: f64) -> Self {
        Self {
            influence,
            gain: 1.0,
            max_potential: 1.0,
        }
    }

    /// Creates parameters, checking that each is positive.
    pub fn try_new(influence: f64, gain: f64, max_potential: f64) -> Result<Self> {
        Ok(Self {
            influence: require_positive("influence", influence)?,
            gain: require_positive("gain", gain)?,
            max_potential: require_positive("max_potential", max_potential)?,
        })
    }

    /// Sets the scale factor.
    pub fn with_gain(self, gain: f64) -> Self {
        Self { gain, ..self }
    }

    /// Sets the potential cap.
    pub fn with_max_potential(self, max_potential: f64) -> Self {
        Self {
            max_potential,
            ..self
        }
    }
}

/// Computes the repulsive potential pushing `x` away from a point obstacle.
///
/// Outside the zone of influence the potential and force are zero. Inside it the
/// force grows without bound as `x` nears the obstacle, while the reported potential
/// is capped at `params.max_potential`. If `x` coincides with the obstacle the force
/// is zero and the potential is [SINGULAR_POTENTIAL], subject to the same cap.
pub fn repulsive_potential(x: Point2d, obstacle: Point2d, params: &RepulsiveParams) -> Potential {
    let RepulsiveParams {
        influence: d,
        gain: k,
        max_potential,
    } = *params;

    let (delta, dist) = displacement(x, obstacle);
    if dist > d {
        return Potential::ZERO;
    }

    let mut result = if dist == 0.0 {
        log::trace!("position coincides with obstacle at {:?}", obstacle);
        Potential::new(SINGULAR_POTENTIAL, Vector2d::new(0.0, 0.0))
    } else {
        let proximity = 1.0 / dist - 1.0 / d;
        Potential {
            value: 0.5 * k * proximity * proximity,
            force: k * proximity * delta / dist.powi(3),
        }
    };

    if result.value > max_potential {
        result.value = max_potential;
    }
    result
}

/// A repulsive field around a single point obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepulsivePotential {
    /// The obstacle position.
    pub obstacle: Point2d,
    /// The field parameters.
    pub params: RepulsiveParams,
}

impl RepulsivePotential {
    /// Creates a repulsive field around `obstacle`.
    pub const fn new(obstacle: Point2d, params: RepulsiveParams) -> Self {
        Self { obstacle, params }
    }
}

impl PotentialField for RepulsivePotential {
    fn evaluate(&self, x: Point2d) -> Potential {
        repulsive_potential(x, self.obstacle, &self.params)
    }
}
