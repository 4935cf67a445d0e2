//! Time integration of the equations of motion.
use crate::{Error, Vector2D};
use crate::systems::ParticleSystem;
use crate::forces::{PairForceSummation, PairForces};
use crate::potentials::PairPotential;

/// Mutable state of a running simulation: positions, velocities and
/// accelerations of all particles.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// positions of the particles, always inside the periodic box
    pub positions: Vec<Vector2D>,
    /// velocities of the particles
    pub velocities: Vec<Vector2D>,
    /// accelerations of the particles, from the forces at the current
    /// positions
    pub accelerations: Vec<Vector2D>,
}

impl SimulationState {
    /// Create the initial state corresponding to `system`, computing the
    /// accelerations from the forces at the initial positions.
    ///
    /// The forces and energy of the initial configuration are returned
    /// alongside the state.
    pub fn new<P>(system: &ParticleSystem, forces: &PairForceSummation<P>, mass: f64) -> (SimulationState, PairForces)
        where P: PairPotential + Sync
    {
        let positions = system.positions().to_vec();
        let result = forces.compute(&positions);
        let accelerations = result.forces.iter().map(|force| force / mass).collect();

        let state = SimulationState {
            positions: positions,
            velocities: system.velocities().to_vec(),
            accelerations: accelerations,
        };

        return (state, result);
    }

    /// Get the number of particles in this state
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Compute the kinetic energy `1/2 m Σ v^2` of all particles
    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        let sum = self.velocities.iter().map(|v| v.norm2()).sum::<f64>();
        return 0.5 * mass * sum;
    }

    /// Check that all positions and velocities are finite
    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|p| p.is_finite()) && self.velocities.iter().all(|v| v.is_finite())
    }

    fn update_accelerations(&mut self, forces: &[Vector2D], mass: f64) {
        for (acceleration, force) in self.accelerations.iter_mut().zip(forces) {
            *acceleration = force / mass;
        }
    }
}

/// Available time integration schemes.
///
/// All integrators evaluate the forces exactly once per step, at the updated
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
pub enum Integrator {
    /// Velocity-Verlet integrator. This is a symplectic and time-reversible
    /// scheme, with good long-term energy conservation.
    #[default]
    #[serde(rename = "velocity-verlet", alias = "verlet")]
    VelocityVerlet,
    /// Explicit (forward) Euler integrator, first order. The total energy of
    /// the system drifts with this integrator, it should only be used for
    /// comparison purposes.
    #[serde(rename = "euler")]
    Euler,
    /// Semi-implicit Euler integrator, updating the velocities first and
    /// then the positions with the new velocities.
    #[serde(rename = "semi-implicit-euler")]
    SemiImplicitEuler,
}

impl std::str::FromStr for Integrator {
    type Err = Error;

    fn from_str(name: &str) -> Result<Integrator, Error> {
        match name {
            "velocity-verlet" | "verlet" => Ok(Integrator::VelocityVerlet),
            "euler" => Ok(Integrator::Euler),
            "semi-implicit-euler" => Ok(Integrator::SemiImplicitEuler),
            _ => Err(Error::InvalidParameter(format!(
                "unknown integrator '{}', expected one of 'velocity-verlet', 'euler' or 'semi-implicit-euler'",
                name
            ))),
        }
    }
}

impl std::fmt::Display for Integrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Integrator::VelocityVerlet => "velocity-verlet",
            Integrator::Euler => "euler",
            Integrator::SemiImplicitEuler => "semi-implicit-euler",
        };
        write!(f, "{}", name)
    }
}

impl Integrator {
    /// Advance `state` by a single time step `dt`, using `forces` to compute
    /// the forces acting on particles of the given `mass`.
    ///
    /// This returns the forces and potential energy at the new positions,
    /// which are already used to update the accelerations in `state`.
    #[time_graph::instrument(name = "Integrator::step")]
    pub fn step<P>(&self, state: &mut SimulationState, forces: &PairForceSummation<P>, dt: f64, mass: f64) -> PairForces
        where P: PairPotential + Sync
    {
        match self {
            Integrator::VelocityVerlet => velocity_verlet(state, forces, dt, mass),
            Integrator::Euler => euler(state, forces, dt, mass),
            Integrator::SemiImplicitEuler => semi_implicit_euler(state, forces, dt, mass),
        }
    }
}

fn velocity_verlet<P>(state: &mut SimulationState, forces: &PairForceSummation<P>, dt: f64, mass: f64) -> PairForces
    where P: PairPotential + Sync
{
    let cell = forces.cell();
    for ((position, velocity), acceleration) in state.positions.iter_mut().zip(&state.velocities).zip(&state.accelerations) {
        *position += velocity * dt + 0.5 * dt * dt * acceleration;
        cell.wrap_vector(position);
    }

    let result = forces.compute(&state.positions);

    // trapezoidal average of the old and new accelerations
    for ((velocity, acceleration), force) in state.velocities.iter_mut().zip(&state.accelerations).zip(&result.forces) {
        let new_acceleration = force / mass;
        *velocity += 0.5 * dt * (acceleration + new_acceleration);
    }
    state.update_accelerations(&result.forces, mass);

    return result;
}

fn euler<P>(state: &mut SimulationState, forces: &PairForceSummation<P>, dt: f64, mass: f64) -> PairForces
    where P: PairPotential + Sync
{
    let cell = forces.cell();
    for ((position, velocity), acceleration) in state.positions.iter_mut().zip(&mut state.velocities).zip(&state.accelerations) {
        *position += dt * &*velocity;
        cell.wrap_vector(position);
        *velocity += dt * acceleration;
    }

    let result = forces.compute(&state.positions);
    state.update_accelerations(&result.forces, mass);

    return result;
}

fn semi_implicit_euler<P>(state: &mut SimulationState, forces: &PairForceSummation<P>, dt: f64, mass: f64) -> PairForces
    where P: PairPotential + Sync
{
    let cell = forces.cell();
    for ((position, velocity), acceleration) in state.positions.iter_mut().zip(&mut state.velocities).zip(&state.accelerations) {
        *velocity += dt * acceleration;
        *position += dt * &*velocity;
        cell.wrap_vector(position);
    }

    let result = forces.compute(&state.positions);
    state.update_accelerations(&result.forces, mass);

    return result;
}
