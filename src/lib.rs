//! Artificial potential fields for 2D motion planning.
//!
//! An [AttractivePotential] pulls a point towards a goal, and [RepulsivePotential]s
//! push it away from point obstacles. Each evaluation returns a [Potential]: the scalar
//! potential and the force (negative gradient) at the queried position. Integrating the
//! force into a trajectory is left to the caller.

pub use aggregate::{repulsive_potentials, RepulsivePotentials};
pub use attractive::{attractive_potential, AttractivePotential};
pub use cgmath;
pub use error::{Error, Result};
pub use field::{Potential, PotentialField};
pub use repulsive::{repulsive_potential, RepulsiveParams, RepulsivePotential, SINGULAR_POTENTIAL};

mod aggregate;
mod attractive;
mod error;
mod field;
pub mod math;
mod repulsive;
