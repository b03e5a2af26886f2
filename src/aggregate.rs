use crate::field::{Potential, PotentialField};
use crate::math::Point2d;
use crate::repulsive::{repulsive_potential, RepulsiveParams};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computes the combined repulsive potential of a set of point obstacles.
///
/// Each obstacle's potential is capped individually; the total is not,
/// so it may exceed `params.max_potential` where zones of influence overlap.
/// An empty set yields [Potential::ZERO].
pub fn repulsive_potentials(x: Point2d, obstacles: &[Point2d], params: &RepulsiveParams) -> Potential {
    obstacles
        .iter()
        .map(|&obstacle| repulsive_potential(x, obstacle, params))
        .sum()
}

/// A repulsive field around a set of point obstacles sharing the same parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepulsivePotentials {
    obstacles: Vec<Point2d>,
    params: RepulsiveParams,
}

impl RepulsivePotentials {
    /// Creates a field from the given obstacles.
    pub fn new(obstacles: impl IntoIterator<Item = Point2d>, params: RepulsiveParams) -> Self {
        Self {
            obstacles: obstacles.into_iter().collect(),
            params,
        }
    }

    /// Adds an obstacle to the field.
    pub fn push(&mut self, obstacle: Point2d) {
        self.obstacles.push(obstacle);
    }

    /// Gets the obstacles.
    pub fn obstacles(&self) -> &[Point2d] {
        &self.obstacles
    }

    /// Gets the shared parameters.
    pub fn params(&self) -> &RepulsiveParams {
        &self.params
    }
}

impl PotentialField for RepulsivePotentials {
    fn evaluate(&self, x: Point2d) -> Potential {
        repulsive_potentials(x, &self.obstacles, &self.params)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector2d;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    #[test]
    fn no_obstacles() {
        let params = RepulsiveParams::new(1.0);
        let p = repulsive_potentials(Point2d::new(3.0, 4.0), &[], &params);
        assert_eq!(p, Potential::ZERO);
    }

    #[test]
    fn all_out_of_range() {
        let params = RepulsiveParams::new(1.0);
        let obstacles = [Point2d::new(0.0, 0.0), Point2d::new(5.0, 0.0)];
        let p = repulsive_potentials(Point2d::new(2.0, 0.0), &obstacles, &params);
        assert_eq!(p.value, 0.0);
        assert_eq!(p.force, Vector2d::new(0.0, 0.0));
    }

    #[test]
    fn total_is_not_capped() {
        let params = RepulsiveParams::new(1.0).with_max_potential(0.1);
        let obstacles = [Point2d::new(-0.2, 0.0), Point2d::new(0.2, 0.0)];
        let p = repulsive_potentials(Point2d::new(0.0, 0.0), &obstacles, &params);
        assert_approx_eq!(p.value, 0.2);
        // Symmetric obstacles cancel
        assert_approx_eq!(p.force.x, 0.0, 1e-9);
        assert_approx_eq!(p.force.y, 0.0, 1e-9);
    }

    #[test]
    fn on_one_obstacle_near_another() {
        let params = RepulsiveParams::new(1.0).with_max_potential(2.0);
        let x = Point2d::new(0.0, 0.0);
        let obstacles = [x, Point2d::new(0.5, 0.0)];
        let p = repulsive_potentials(x, &obstacles, &params);

        // The coincident obstacle contributes its capped sentinel and no force,
        // the other its ordinary term: (1/0.5 - 1)^2 / 2 and -(1/0.5 - 1) * 0.5 / 0.125
        assert_approx_eq!(p.value, 2.0 + 0.5);
        assert_approx_eq!(p.force.x, -4.0);
        assert_approx_eq!(p.force.y, 0.0);
        let sentinel = Potential::new(2.0, Vector2d::new(0.0, 0.0));
        assert_eq!(p, sentinel + repulsive_potential(x, obstacles[1], &params));
    }

    #[test]
    fn superposition() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Attract the goal, avoid the rest");
        for _i in 0..100 {
            let mut point = || Point2d::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
            let (x, o1, o2) = (point(), point(), point());
            let params = RepulsiveParams::new(2.0).with_max_potential(5.0);

            let total = repulsive_potentials(x, &[o1, o2], &params);
            let p1 = repulsive_potential(x, o1, &params);
            let p2 = repulsive_potential(x, o2, &params);
            assert_approx_eq!(total.value, p1.value + p2.value);
            assert_approx_eq!(total.force.x, p1.force.x + p2.force.x);
            assert_approx_eq!(total.force.y, p1.force.y + p2.force.y);

            let reversed = repulsive_potentials(x, &[o2, o1], &params);
            assert_approx_eq!(total.value, reversed.value);
        }
    }

    #[test]
    fn field_object_matches_function() {
        let params = RepulsiveParams::new(1.5).with_gain(2.0);
        let mut field = RepulsivePotentials::new([Point2d::new(1.0, 0.0)], params);
        field.push(Point2d::new(0.0, 1.0));
        assert_eq!(field.obstacles().len(), 2);
        assert_eq!(field.params(), &params);

        let x = Point2d::new(0.5, 0.5);
        assert_eq!(
            field.evaluate(x),
            repulsive_potentials(x, field.obstacles(), &params)
        );
    }
}
