use ndarray_npy::write_npy;

use boxmd::{ParticleSystem, Simulation, Vector2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let parameters = std::env::args().nth(1).map_or_else(
        || Ok(DEFAULT_PARAMETERS.to_owned()),
        std::fs::read_to_string,
    )?;
    let simulation = Simulation::from_json(&parameters)?;

    let system = square_lattice(&simulation, 6)?;
    let initial = simulation.initial_frame(&system)?;

    let mut trajectory = simulation.run(&system)?;
    trajectory.prepend(initial)?;

    write_npy("positions.npy", &trajectory.positions())?;
    write_npy("energies.npy", &trajectory.energies())?;

    let total = trajectory.total_energies();
    println!(
        "ran {} steps with {} particles, total energy {:.6} -> {:.6}",
        trajectory.len() - 1, system.size(), total[0], total[total.len() - 1]
    );

    Ok(())
}

/// Place `n x n` particles on a square lattice filling the simulation box,
/// with alternating velocities summing to zero
fn square_lattice(simulation: &Simulation, n: usize) -> Result<ParticleSystem, boxmd::Error> {
    let cell = simulation.cell();
    let spacing = cell.side() / n as f64;

    let mut system = ParticleSystem::new(cell);
    for i in 0..n {
        for j in 0..n {
            let position = Vector2D::new((i as f64 + 0.5) * spacing, (j as f64 + 0.5) * spacing);
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            system.add_particle(position, Vector2D::new(0.5 * sign, 0.25 * sign))?;
        }
    }

    Ok(system)
}

const DEFAULT_PARAMETERS: &str = r#"{
    "dt": 0.005,
    "num_steps": 2000,
    "box_size": 9.0,
    "integrator": "velocity-verlet",
    "potential": {
        "lennard_jones": {"a": 1.0, "b": 1.0},
        "harmonic": {"k": 0.0, "r_eq": 0.0},
        "morse": {"depth": 0.5, "a": 1.5, "r_eq": 1.5}
    }
}"#;
