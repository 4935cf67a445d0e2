#![allow(dead_code)]

use boxmd::{Integrator, ParticleSystem, PeriodicBox, SimulationConfig, Vector2D};
use boxmd::potentials::{Harmonic, LennardJones, Morse, PotentialParameters};

/// Configuration where particles only interact through a harmonic spring
pub fn harmonic_config(k: f64, r_eq: f64, integrator: Integrator, num_steps: usize) -> SimulationConfig {
    SimulationConfig {
        num_steps: num_steps,
        potential: PotentialParameters {
            lennard_jones: LennardJones { a: 0.0, b: 0.0 },
            harmonic: Harmonic { k: k, r_eq: r_eq },
            morse: Morse { depth: 0.0, a: 1.0, r_eq: 1.0 },
        },
        integrator: integrator,
        ..Default::default()
    }
}

/// Two particles at rest, on the line `y = 5` at the given `x` coordinates
pub fn dimer(cell: PeriodicBox, first: f64, second: f64) -> ParticleSystem {
    let mut system = ParticleSystem::new(cell);
    system.add_particle(Vector2D::new(first, 5.0), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(second, 5.0), Vector2D::zero()).unwrap();
    return system;
}

/// `n x n` particles on a square lattice filling the box, all moving with
/// the same `velocity` plus a small alternating component
pub fn lattice(cell: PeriodicBox, n: usize, velocity: Vector2D) -> ParticleSystem {
    let spacing = cell.side() / n as f64;

    let mut system = ParticleSystem::new(cell);
    for i in 0..n {
        for j in 0..n {
            let position = Vector2D::new((i as f64 + 0.5) * spacing, (j as f64 + 0.5) * spacing);
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            let velocity = velocity + Vector2D::new(0.1 * sign, -0.05 * sign);
            system.add_particle(position, velocity).unwrap();
        }
    }
    return system;
}

/// Get the largest relative deviation of `values` from `reference`
pub fn max_relative_deviation(values: &[f64], reference: f64) -> f64 {
    values.iter()
        .map(|value| f64::abs(value - reference) / reference.abs())
        .fold(0.0, f64::max)
}
