use approx::assert_relative_eq;
use boxmd::{Integrator, Simulation};

mod data;

/// Harmonic dimer oscillating between r = 0.64 and r = 1.6, far enough from
/// the minimal distance to never be clamped
fn harmonic_dimer(integrator: Integrator, num_steps: usize) -> (Simulation, boxmd::ParticleSystem) {
    let simulation = Simulation::new(data::harmonic_config(5.0, 1.12, integrator, num_steps)).unwrap();
    let system = data::dimer(simulation.cell(), 4.2, 5.8);
    return (simulation, system);
}

#[test]
fn velocity_verlet() {
    let (simulation, system) = harmonic_dimer(Integrator::VelocityVerlet, 1000);

    let initial = simulation.initial_frame(&system).unwrap();
    assert_eq!(initial.kinetic_energy(), 0.0);
    assert_relative_eq!(initial.total_energy(), 0.5 * 5.0 * 0.48 * 0.48, max_relative = 1e-12);

    let trajectory = simulation.run(&system).unwrap();
    assert_eq!(trajectory.len(), 1000);

    let total = trajectory.total_energies().to_vec();
    let deviation = data::max_relative_deviation(&total, initial.total_energy());
    assert!(deviation < 1e-2, "total energy deviates by {} with velocity-Verlet", deviation);

    // the energy is not only conserved, but exchanged between kinetic and
    // potential contributions
    let kinetic = trajectory.kinetic_energies();
    assert!(kinetic.iter().any(|&energy| energy > 0.5 * initial.total_energy()));
}

#[test]
fn explicit_euler_drifts() {
    let (simulation, system) = harmonic_dimer(Integrator::Euler, 200);
    let initial = simulation.initial_frame(&system).unwrap();
    let trajectory = simulation.run(&system).unwrap();

    // for an harmonic oscillator, each explicit Euler step multiplies the
    // energy by (1 + ω^2 dt^2), with ω^2 = 2k/m here
    let growth = 1.0 + 2.0 * 5.0 * 0.01 * 0.01;

    let mut previous = initial.total_energy();
    for (step, frame) in trajectory.frames().iter().enumerate() {
        assert!(frame.total_energy() > previous, "energy did not increase at step {}", step);
        assert_relative_eq!(frame.total_energy(), previous * growth, max_relative = 1e-9);
        previous = frame.total_energy();
    }

    let total = trajectory.total_energies().to_vec();
    let euler_deviation = data::max_relative_deviation(&total, initial.total_energy());
    assert_relative_eq!(euler_deviation, growth.powi(200) - 1.0, max_relative = 1e-6);

    // velocity-Verlet on the same system for the same time
    let (simulation, system) = harmonic_dimer(Integrator::VelocityVerlet, 200);
    let trajectory = simulation.run(&system).unwrap();
    let total = trajectory.total_energies().to_vec();
    let verlet_deviation = data::max_relative_deviation(&total, initial.total_energy());

    assert!(euler_deviation > 10.0 * verlet_deviation);
}

#[test]
fn semi_implicit_euler() {
    let (simulation, system) = harmonic_dimer(Integrator::SemiImplicitEuler, 1000);
    let initial = simulation.initial_frame(&system).unwrap();
    let trajectory = simulation.run(&system).unwrap();

    // the energy oscillates, but does not drift
    let total = trajectory.total_energies().to_vec();
    let deviation = data::max_relative_deviation(&total, initial.total_energy());
    assert!(deviation < 5e-2, "total energy deviates by {} with semi-implicit Euler", deviation);
}
