//! Summation of pair forces and energies over all pairs of particles, using
//! the minimum image convention.
use rayon::prelude::*;

use crate::{Error, Vector2D};
use crate::systems::PeriodicBox;
use crate::potentials::PairPotential;

/// Interaction between a single pair of particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairInteraction {
    /// index of the first particle in the pair
    pub first: usize,
    /// index of the second particle in the pair
    pub second: usize,
    /// vector from the first particle to the second one, using the minimum
    /// image convention
    pub vector: Vector2D,
    /// distance between the particles, clamped to the minimal distance
    pub distance: f64,
    /// was the distance clamped?
    pub clamped: bool,
    /// potential energy of the pair
    pub energy: f64,
    /// force magnitude, positive for repulsion
    pub force: f64,
}

impl PairInteraction {
    /// Get the force vector acting on the second particle of the pair.
    ///
    /// This is `force * vector / distance`. When the distance was clamped,
    /// `vector` is left as-is, and `vector / distance` is shorter than a unit
    /// vector.
    #[inline]
    pub fn force_on_second(&self) -> Vector2D {
        self.force * (self.vector / self.distance)
    }

    /// Get the force vector acting on the first particle of the pair, which
    /// is exactly the opposite of `force_on_second`.
    #[inline]
    pub fn force_on_first(&self) -> Vector2D {
        -self.force_on_second()
    }
}

/// Total potential energy and forces acting on all particles in a
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PairForces {
    /// total potential energy, summed over all pairs
    pub energy: f64,
    /// net force acting on each particle
    pub forces: Vec<Vector2D>,
    /// number of pairs closer than the minimal distance
    pub clamped_pairs: usize,
}

impl PairForces {
    fn new(n_particles: usize) -> PairForces {
        PairForces {
            energy: 0.0,
            forces: vec![Vector2D::zero(); n_particles],
            clamped_pairs: 0,
        }
    }

    #[inline]
    fn accumulate(&mut self, pair: &PairInteraction) {
        self.energy += pair.energy;

        let force = pair.force_on_second();
        self.forces[pair.first] -= force;
        self.forces[pair.second] += force;

        if pair.clamped {
            self.clamped_pairs += 1;
        }
    }
}

/// Sum a pair potential over all unique pairs of particles in a periodic box.
///
/// The cost of a calculation is `O(N^2)`, there is no cutoff and no neighbor
/// list. Distances shorter than `min_distance` are clamped to `min_distance`
/// before evaluating the potential, which prevents the forces from diverging
/// when two particles overlap.
#[derive(Debug, Clone)]
pub struct PairForceSummation<P> {
    potential: P,
    cell: PeriodicBox,
    min_distance: f64,
    parallel: bool,
}

impl<P: PairPotential + Sync> PairForceSummation<P> {
    /// Create a new `PairForceSummation` for the given `potential` and
    /// periodic `cell`.
    ///
    /// If `parallel` is true, the pair interactions are computed using
    /// multiple threads. The results are bit-for-bit identical to the serial
    /// calculation.
    pub fn new(potential: P, cell: PeriodicBox, min_distance: f64, parallel: bool) -> Result<PairForceSummation<P>, Error> {
        if !(min_distance.is_finite() && min_distance > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "expected a positive and finite minimal distance, got {}", min_distance
            )));
        }

        return Ok(PairForceSummation {
            potential: potential,
            cell: cell,
            min_distance: min_distance,
            parallel: parallel,
        });
    }

    /// Get the potential used by this calculation
    pub fn potential(&self) -> &P {
        &self.potential
    }

    /// Get the periodic box used by this calculation
    pub fn cell(&self) -> PeriodicBox {
        self.cell
    }

    /// Get the minimal distance used to clamp pairs
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Compute the interaction between particles `first` and `second`.
    pub fn interaction(&self, positions: &[Vector2D], first: usize, second: usize) -> PairInteraction {
        let mut vector = positions[second] - positions[first];
        self.cell.vector_image(&mut vector);

        let mut distance = vector.norm();
        let clamped = distance < self.min_distance;
        if clamped {
            distance = self.min_distance;
        }

        let (energy, force) = self.potential.compute(distance);

        return PairInteraction {
            first: first,
            second: second,
            vector: vector,
            distance: distance,
            clamped: clamped,
            energy: energy,
            force: force,
        };
    }

    /// Compute the total potential energy and the forces acting on all
    /// particles at the given `positions`.
    #[time_graph::instrument(name = "PairForceSummation::compute")]
    pub fn compute(&self, positions: &[Vector2D]) -> PairForces {
        let n_particles = positions.len();
        let mut result = PairForces::new(n_particles);

        if self.parallel {
            // rows of the pair matrix are computed in parallel by batches,
            // keeping the memory linear in the number of particles
            let batch_size = 4 * rayon::current_num_threads();
            let mut start = 0;
            while start < n_particles {
                let stop = usize::min(start + batch_size, n_particles);
                let rows = (start..stop).into_par_iter()
                    .map(|first| {
                        ((first + 1)..n_particles)
                            .map(|second| self.interaction(positions, first, second))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>();

                // accumulate in the same order as the serial loop
                for pair in rows.iter().flatten() {
                    result.accumulate(pair);
                }

                start = stop;
            }
        } else {
            for first in 0..n_particles {
                for second in (first + 1)..n_particles {
                    let pair = self.interaction(positions, first, second);
                    result.accumulate(&pair);
                }
            }
        }

        return result;
    }
}
