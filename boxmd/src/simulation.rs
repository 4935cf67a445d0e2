use log::{debug, info, warn};
use ndarray::{Array1, Array2, Array3};

use crate::{Error, Vector2D};
use crate::systems::{ParticleSystem, PeriodicBox};
use crate::potentials::PotentialParameters;
use crate::forces::PairForceSummation;
use crate::integrators::{Integrator, SimulationState};

/// Parameters of a simulation.
///
/// All fields have default values, and can be omitted when creating the
/// configuration from JSON.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Time step of the integration
    pub dt: f64,
    /// Number of steps to run
    pub num_steps: usize,
    /// Mass of every particle
    pub mass: f64,
    /// Side length of the square periodic box
    pub box_size: f64,
    /// Pairs closer than this distance are evaluated at exactly this
    /// distance, preventing the forces from diverging
    pub min_distance: f64,
    /// Parameters of the pair potential
    pub potential: PotentialParameters,
    /// Integration scheme
    pub integrator: Integrator,
    /// Should we use multiple threads to compute the forces?
    pub parallel: bool,
    /// Should we stop the simulation when positions or velocities become
    /// NaN or infinite?
    pub check_finite: bool,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            dt: 0.01,
            num_steps: 1000,
            mass: 1.0,
            box_size: 10.0,
            min_distance: 0.5,
            potential: PotentialParameters::default(),
            integrator: Integrator::default(),
            parallel: false,
            check_finite: true,
        }
    }
}

impl SimulationConfig {
    /// Check that all the parameters have valid values
    pub fn validate(&self) -> Result<(), Error> {
        check_positive(self.dt, "dt")?;
        check_positive(self.mass, "mass")?;
        check_positive(self.box_size, "box_size")?;
        check_positive(self.min_distance, "min_distance")?;

        if self.num_steps == 0 {
            return Err(Error::InvalidParameter(
                "expected at least one step in the simulation, got num_steps = 0".into()
            ));
        }

        self.potential.validate()?;

        return Ok(());
    }
}

fn check_positive(value: f64, name: &str) -> Result<(), Error> {
    if !(value.is_finite() && value > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "expected a positive and finite value for '{}', got {}", name, value
        )));
    }
    return Ok(());
}

/// Data recorded at a single step of a simulation
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "SimulationFrameData")]
pub struct SimulationFrame {
    positions: Vec<Vector2D>,
    kinetic_energy: f64,
    potential_energy: f64,
    total_energy: f64,
}

impl SimulationFrame {
    fn new(positions: Vec<Vector2D>, kinetic_energy: f64, potential_energy: f64) -> SimulationFrame {
        SimulationFrame {
            positions: positions,
            kinetic_energy: kinetic_energy,
            potential_energy: potential_energy,
            total_energy: kinetic_energy + potential_energy,
        }
    }

    /// Get the positions of all particles in this frame
    pub fn positions(&self) -> &[Vector2D] {
        &self.positions
    }

    /// Get the number of particles in this frame
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Get the kinetic energy of this frame
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    /// Get the potential energy of this frame
    pub fn potential_energy(&self) -> f64 {
        self.potential_energy
    }

    /// Get the total (kinetic + potential) energy of this frame
    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationFrameData {
    positions: Vec<Vector2D>,
    kinetic_energy: f64,
    potential_energy: f64,
    total_energy: f64,
}

impl TryFrom<SimulationFrameData> for SimulationFrame {
    type Error = Error;

    #[allow(clippy::float_cmp)]
    fn try_from(data: SimulationFrameData) -> Result<SimulationFrame, Error> {
        let frame = SimulationFrame::new(data.positions, data.kinetic_energy, data.potential_energy);
        if frame.total_energy != data.total_energy {
            return Err(Error::InvalidParameter(format!(
                "total energy ({}) is not the sum of kinetic ({}) and potential ({}) energies",
                data.total_energy, data.kinetic_energy, data.potential_energy
            )));
        }
        return Ok(frame);
    }
}

/// The sequence of frames produced by a simulation, one per step.
///
/// The initial configuration is not part of the trajectory produced by
/// [`Simulation::run`], but can be added with [`Trajectory::prepend`].
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "TrajectoryData")]
pub struct Trajectory {
    frames: Vec<SimulationFrame>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TrajectoryData {
    frames: Vec<SimulationFrame>,
}

impl TryFrom<TrajectoryData> for Trajectory {
    type Error = Error;

    fn try_from(data: TrajectoryData) -> Result<Trajectory, Error> {
        if let Some(first) = data.frames.first() {
            for (i, frame) in data.frames.iter().enumerate() {
                if frame.size() != first.size() {
                    return Err(Error::InvalidParameter(format!(
                        "frame {} contains {} particles, but the first frame contains {}",
                        i, frame.size(), first.size()
                    )));
                }
            }
        }

        return Ok(Trajectory { frames: data.frames });
    }
}

impl Trajectory {
    fn with_capacity(capacity: usize) -> Trajectory {
        Trajectory {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of frames in this trajectory
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Is this trajectory empty?
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get all the frames in this trajectory
    pub fn frames(&self) -> &[SimulationFrame] {
        &self.frames
    }

    /// Get the frame at index `step`, if any
    pub fn frame(&self, step: usize) -> Option<&SimulationFrame> {
        self.frames.get(step)
    }

    /// Add `frame` at the beginning of this trajectory, typically the frame
    /// at `t = 0` from [`Simulation::initial_frame`].
    pub fn prepend(&mut self, frame: SimulationFrame) -> Result<(), Error> {
        if let Some(first) = self.frames.first() {
            if first.size() != frame.size() {
                return Err(Error::InvalidParameter(format!(
                    "can not prepend a frame with {} particles to a trajectory with {} particles",
                    frame.size(), first.size()
                )));
            }
        }

        self.frames.insert(0, frame);
        return Ok(());
    }

    /// Get the positions of all particles in all frames, as an array of shape
    /// `(n_frames, n_particles, 2)`
    pub fn positions(&self) -> Array3<f64> {
        let n_particles = self.frames.first().map_or(0, SimulationFrame::size);

        let mut positions = Array3::zeros((self.frames.len(), n_particles, 2));
        for (mut array, frame) in positions.outer_iter_mut().zip(&self.frames) {
            for (mut row, position) in array.outer_iter_mut().zip(frame.positions()) {
                row[0] = position[0];
                row[1] = position[1];
            }
        }

        return positions;
    }

    /// Get the kinetic energy of all frames
    pub fn kinetic_energies(&self) -> Array1<f64> {
        self.frames.iter().map(SimulationFrame::kinetic_energy).collect()
    }

    /// Get the potential energy of all frames
    pub fn potential_energies(&self) -> Array1<f64> {
        self.frames.iter().map(SimulationFrame::potential_energy).collect()
    }

    /// Get the total energy of all frames
    pub fn total_energies(&self) -> Array1<f64> {
        self.frames.iter().map(SimulationFrame::total_energy).collect()
    }

    /// Get all energies as an array of shape `(n_frames, 3)`, containing the
    /// kinetic, potential and total energy of each frame
    pub fn energies(&self) -> Array2<f64> {
        let mut energies = Array2::zeros((self.frames.len(), 3));
        for (mut row, frame) in energies.outer_iter_mut().zip(&self.frames) {
            row[0] = frame.kinetic_energy;
            row[1] = frame.potential_energy;
            row[2] = frame.total_energy;
        }
        return energies;
    }

    /// Serialize this trajectory to JSON
    pub fn to_json(&self) -> Result<String, Error> {
        return Ok(serde_json::to_string(self)?);
    }

    /// Read a trajectory from JSON, as produced by [`Trajectory::to_json`].
    /// All frames must contain the same number of particles.
    pub fn from_json(json: &str) -> Result<Trajectory, Error> {
        return Ok(serde_json::from_str(json)?);
    }
}

/// A molecular dynamics simulation of identical particles in a 2D periodic
/// box, interacting with a pair potential.
///
/// ```
/// # use boxmd::{Simulation, ParticleSystem, Vector2D};
/// let simulation = Simulation::from_json(r#"{
///     "num_steps": 100,
///     "potential": {"harmonic": {"k": 5.0, "r_eq": 1.6}}
/// }"#)?;
///
/// let system = ParticleSystem::from_slices(
///     simulation.cell(),
///     &[Vector2D::new(4.0, 5.0), Vector2D::new(6.0, 5.0)],
///     &[Vector2D::zero(), Vector2D::zero()],
/// )?;
///
/// let trajectory = simulation.run(&system)?;
/// assert_eq!(trajectory.len(), 100);
/// # Ok::<(), boxmd::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    forces: PairForceSummation<PotentialParameters>,
}

impl Simulation {
    /// Create a new simulation with the given configuration
    pub fn new(config: SimulationConfig) -> Result<Simulation, Error> {
        config.validate()?;

        let cell = PeriodicBox::new(config.box_size)?;
        let forces = PairForceSummation::new(config.potential, cell, config.min_distance, config.parallel)?;

        return Ok(Simulation {
            config: config,
            forces: forces,
        });
    }

    /// Create a new simulation with the configuration given as a JSON
    /// string. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Simulation, Error> {
        let config = serde_json::from_str::<SimulationConfig>(json)?;
        return Simulation::new(config);
    }

    /// Get the configuration of this simulation
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the full configuration of this simulation as a JSON string,
    /// including default values
    pub fn parameters(&self) -> Result<String, Error> {
        return Ok(serde_json::to_string(&self.config)?);
    }

    /// Get the periodic box of this simulation
    pub fn cell(&self) -> PeriodicBox {
        self.forces.cell()
    }

    /// Compute the frame corresponding to the initial configuration in
    /// `system`, at `t = 0`.
    pub fn initial_frame(&self, system: &ParticleSystem) -> Result<SimulationFrame, Error> {
        self.check_system(system)?;

        let result = self.forces.compute(system.positions());
        let kinetic_energy = 0.5 * self.config.mass * system.velocities().iter().map(|v| v.norm2()).sum::<f64>();

        return Ok(SimulationFrame::new(system.positions().to_vec(), kinetic_energy, result.energy));
    }

    /// Run the simulation starting from `system`, returning the trajectory
    /// with one frame for each step.
    ///
    /// If positions or velocities become NaN or infinite and
    /// `check_finite` is set, this stops and returns `Error::NonFinite`,
    /// containing the frames recorded up to this point.
    #[time_graph::instrument(name = "Simulation::run")]
    pub fn run(&self, system: &ParticleSystem) -> Result<Trajectory, Error> {
        self.check_system(system)?;

        let config = &self.config;
        info!(
            "running {} steps of {} integration for {} particles, with dt = {}",
            config.num_steps, config.integrator, system.size(), config.dt
        );

        let (mut state, initial) = SimulationState::new(system, &self.forces, config.mass);
        let mut clamped_pairs = initial.clamped_pairs;
        if clamped_pairs != 0 {
            warn!(
                "{} pairs of particles are closer than {} in the initial configuration, clamping their distance",
                clamped_pairs, config.min_distance
            );
        }

        let progress = usize::max(config.num_steps / 10, 1);
        let mut trajectory = Trajectory::with_capacity(config.num_steps);
        for step in 0..config.num_steps {
            let result = config.integrator.step(&mut state, &self.forces, config.dt, config.mass);
            let kinetic_energy = state.kinetic_energy(config.mass);

            if config.check_finite && !(state.is_finite() && kinetic_energy.is_finite() && result.energy.is_finite()) {
                warn!("non-finite values at step {}, stopping the simulation", step);
                return Err(Error::NonFinite {
                    step: step,
                    last_valid_frame: step.checked_sub(1),
                    trajectory: Box::new(trajectory),
                });
            }

            if result.clamped_pairs != 0 {
                if clamped_pairs == 0 {
                    warn!(
                        "{} pairs of particles are closer than {} at step {}, clamping their distance",
                        result.clamped_pairs, config.min_distance, step
                    );
                }
                clamped_pairs += result.clamped_pairs;
            }

            trajectory.frames.push(SimulationFrame::new(
                state.positions.clone(),
                kinetic_energy,
                result.energy,
            ));

            if (step + 1) % progress == 0 {
                debug!(
                    "step {}/{}: kinetic energy = {}, potential energy = {}",
                    step + 1, config.num_steps, kinetic_energy, result.energy
                );
            }
        }

        let total_energies = trajectory.total_energies();
        info!(
            "simulation finished, total energy went from {} to {}, {} clamped pairs",
            total_energies[0], total_energies[total_energies.len() - 1], clamped_pairs
        );

        return Ok(trajectory);
    }

    fn check_system(&self, system: &ParticleSystem) -> Result<(), Error> {
        if system.size() == 0 {
            return Err(Error::InvalidParameter(
                "can not run a simulation without particles".into()
            ));
        }

        if system.cell() != self.cell() {
            return Err(Error::InvalidParameter(format!(
                "the system box size ({}) does not match the simulation box size ({})",
                system.cell().side(), self.cell().side()
            )));
        }

        return Ok(());
    }
}
