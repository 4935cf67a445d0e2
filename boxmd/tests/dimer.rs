use approx::{assert_relative_eq, assert_abs_diff_eq};
use boxmd::{Integrator, Simulation, Vector2D};

mod data;

#[test]
fn stretched_spring_attracts() {
    let simulation = Simulation::new(data::harmonic_config(5.0, 1.12, Integrator::VelocityVerlet, 1)).unwrap();
    let system = data::dimer(simulation.cell(), 4.0, 6.0);

    let initial = simulation.initial_frame(&system).unwrap();
    assert_relative_eq!(initial.potential_energy(), 0.5 * 5.0 * 0.88 * 0.88, max_relative = 1e-12);

    let trajectory = simulation.run(&system).unwrap();
    assert_eq!(trajectory.len(), 1);

    let positions = trajectory.frames()[0].positions();
    assert!(positions[0][0] > 4.0);
    assert!(positions[1][0] < 6.0);
    assert_eq!(positions[0][1], 5.0);
    assert_eq!(positions[1][1], 5.0);

    // the spring got shorter, and released some potential energy
    assert!(trajectory.frames()[0].potential_energy() < initial.potential_energy());
    assert!(trajectory.frames()[0].kinetic_energy() > 0.0);
}

#[test]
fn equilibrium_is_stationary() {
    for integrator in [Integrator::VelocityVerlet, Integrator::Euler, Integrator::SemiImplicitEuler] {
        let simulation = Simulation::new(data::harmonic_config(5.0, 1.25, integrator, 100)).unwrap();
        let system = data::dimer(simulation.cell(), 4.0, 5.25);

        let trajectory = simulation.run(&system).unwrap();
        for frame in trajectory.frames() {
            assert_eq!(frame.positions(), system.positions());
            assert_eq!(frame.kinetic_energy(), 0.0);
            assert_eq!(frame.potential_energy(), 0.0);
        }
    }
}

#[test]
fn center_of_mass_is_fixed() {
    let simulation = Simulation::new(data::harmonic_config(5.0, 1.12, Integrator::VelocityVerlet, 1000)).unwrap();
    let system = data::dimer(simulation.cell(), 4.2, 5.8);

    let trajectory = simulation.run(&system).unwrap();
    for frame in trajectory.frames() {
        let center = 0.5 * (frame.positions()[0] + frame.positions()[1]);
        assert_abs_diff_eq!(center, Vector2D::new(5.0, 5.0), epsilon = 1e-9);
    }
}
