use crate::error::{require_positive, Result};
use crate::field::{Potential, PotentialField};
use crate::math::{displacement, Point2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computes the attractive potential pulling `x` towards `goal`.
///
/// The potential is quadratic within `threshold` of the goal and conic beyond it,
/// so the pull fades smoothly on approach but is bounded in magnitude when far away.
/// The two regimes agree in value and slope at the threshold.
///
/// # Parameters
/// * `x` - The current position
/// * `goal` - The goal position
/// * `threshold` - The distance at which the potential switches from quadratic to conic
/// * `gain` - The scale factor of the potential
pub fn attractive_potential(x: Point2d, goal: Point2d, threshold: f64, gain: f64) -> Potential {
    let (delta, dist) = displacement(x, goal);
    if dist <= threshold {
        Potential {
            value: 0.5 * gain * dist * dist,
            force: -gain * delta,
        }
    } else {
        Potential {
            value: threshold * gain * dist - 0.5 * gain * threshold * threshold,
            force: -threshold * gain * delta / dist,
        }
    }
}

/// An attractive field centred on a goal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttractivePotential {
    /// The goal position.
    pub goal: Point2d,
    /// The quadratic/conic switching distance.
    pub threshold: f64,
    /// The scale factor.
    pub gain: f64,
}

impl AttractivePotential {
    /// Creates an attractive field with unit gain.
    pub fn new(goal: Point2d, threshold: f64) -> Self {
        Self {
            goal,
            threshold,
            gain: 1.0,
        }
    }

    /// Creates an attractive field, checking that `threshold` and `gain` are positive.
    pub fn try_new(goal: Point2d, threshold: f64, gain: f64) -> Result<Self> {
        Ok(Self {
            goal,
            threshold: require_positive("threshold", threshold)?,
            gain: require_positive("gain", gain)?,
        })
    }

    /// Sets the scale factor.
    pub fn with_gain(self, gain: f64) -> Self {
        Self { gain, ..self }
    }
}

impl PotentialField for AttractivePotential {
    fn evaluate(&self, x: Point2d) -> Potential {
        attractive_potential(x, self.goal, self.threshold, self.gain)
    }
}
