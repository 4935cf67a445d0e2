use log::warn;
use ndarray::{Array2, ArrayView2};

use crate::{Error, Vector2D};

use super::PeriodicBox;

/// Initial configuration of a simulation: positions and velocities of all
/// particles, living inside a periodic box.
///
/// Every position stored in a `ParticleSystem` is inside the box; positions
/// given outside of it are wrapped back in.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    cell: PeriodicBox,
    positions: Vec<Vector2D>,
    velocities: Vec<Vector2D>,
}

impl ParticleSystem {
    /// Create a new empty system with the given periodic box
    pub fn new(cell: PeriodicBox) -> ParticleSystem {
        ParticleSystem {
            cell: cell,
            positions: Vec::new(),
            velocities: Vec::new(),
        }
    }

    /// Create a new system from the given `positions` and `velocities`.
    ///
    /// Both slices must have the same length and contain only finite values.
    pub fn from_slices(cell: PeriodicBox, positions: &[Vector2D], velocities: &[Vector2D]) -> Result<ParticleSystem, Error> {
        if positions.len() != velocities.len() {
            return Err(Error::InvalidParameter(format!(
                "got {} positions but {} velocities", positions.len(), velocities.len()
            )));
        }

        let mut system = ParticleSystem::new(cell);
        for (&position, &velocity) in positions.iter().zip(velocities) {
            system.add_particle(position, velocity)?;
        }
        return Ok(system);
    }

    /// Create a new system from `N x 2` arrays of `positions` and
    /// `velocities`.
    pub fn from_arrays(cell: PeriodicBox, positions: ArrayView2<f64>, velocities: ArrayView2<f64>) -> Result<ParticleSystem, Error> {
        if positions.ncols() != 2 {
            return Err(Error::InvalidParameter(format!(
                "expected positions with shape (N, 2), got {:?}", positions.shape()
            )));
        }

        if velocities.ncols() != 2 {
            return Err(Error::InvalidParameter(format!(
                "expected velocities with shape (N, 2), got {:?}", velocities.shape()
            )));
        }

        let positions = positions.rows().into_iter()
            .map(|row| Vector2D::new(row[0], row[1]))
            .collect::<Vec<_>>();
        let velocities = velocities.rows().into_iter()
            .map(|row| Vector2D::new(row[0], row[1]))
            .collect::<Vec<_>>();

        return ParticleSystem::from_slices(cell, &positions, &velocities);
    }

    /// Add a particle with the given position and velocity to this system
    pub fn add_particle(&mut self, mut position: Vector2D, velocity: Vector2D) -> Result<(), Error> {
        if !position.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "position of particle {} is not finite: {:?}", self.size(), position
            )));
        }

        if !velocity.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "velocity of particle {} is not finite: {:?}", self.size(), velocity
            )));
        }

        if !self.cell.contains(position) {
            let original = position;
            self.cell.wrap_vector(&mut position);
            warn!(
                "position of particle {} ({}, {}) is outside of the box, wrapping it to ({}, {})",
                self.size(), original[0], original[1], position[0], position[1]
            );
        }

        self.positions.push(position);
        self.velocities.push(velocity);
        Ok(())
    }

    /// Get the periodic box for this system
    pub fn cell(&self) -> PeriodicBox {
        self.cell
    }

    /// Get the number of particles in this system
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Get the positions of all particles in this system
    pub fn positions(&self) -> &[Vector2D] {
        &self.positions
    }

    /// Get the velocities of all particles in this system
    pub fn velocities(&self) -> &[Vector2D] {
        &self.velocities
    }

    /// Get the positions of all particles as a `N x 2` array
    pub fn positions_array(&self) -> Array2<f64> {
        return vectors_to_array(&self.positions);
    }

    /// Get the velocities of all particles as a `N x 2` array
    pub fn velocities_array(&self) -> Array2<f64> {
        return vectors_to_array(&self.velocities);
    }
}

fn vectors_to_array(vectors: &[Vector2D]) -> Array2<f64> {
    let mut array = Array2::zeros((vectors.len(), 2));
    for (mut row, vector) in array.rows_mut().into_iter().zip(vectors) {
        row[0] = vector[0];
        row[1] = vector[1];
    }
    return array;
}
