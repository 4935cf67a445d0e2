use crate::Vector2D;
use super::{PeriodicBox, ParticleSystem};

pub fn test_system(name: &str) -> ParticleSystem {
    match name {
        "dimer" => get_dimer(),
        "dimer-across-boundary" => get_dimer_across_boundary(),
        "square-lattice" => get_square_lattice(),
        "crowded" => get_crowded(),
        _ => panic!("unknown test system {}", name)
    }
}

/// Two particles at rest, 2 units apart along x, in the middle of a box of
/// size 10.
fn get_dimer() -> ParticleSystem {
    let mut system = ParticleSystem::new(PeriodicBox::new(10.0).unwrap());
    system.add_particle(Vector2D::new(4.0, 5.0), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(6.0, 5.0), Vector2D::zero()).unwrap();
    return system;
}

/// The same dimer, but the shortest path between the two particles crosses
/// the box boundary
fn get_dimer_across_boundary() -> ParticleSystem {
    let mut system = ParticleSystem::new(PeriodicBox::new(10.0).unwrap());
    system.add_particle(Vector2D::new(0.5, 5.0), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(8.5, 5.0), Vector2D::zero()).unwrap();
    return system;
}

/// 16 particles on a slightly distorted 4x4 square lattice, with non-zero
/// velocities summing to zero
fn get_square_lattice() -> ParticleSystem {
    let mut system = ParticleSystem::new(PeriodicBox::new(6.0).unwrap());
    for i in 0..4 {
        for j in 0..4 {
            let shift = 0.05 * ((3 * i + 5 * j) % 7) as f64;
            let position = Vector2D::new(1.5 * i as f64 + 0.7 + shift, 1.5 * j as f64 + 0.7 - shift);
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            let velocity = Vector2D::new(sign * 0.3, -sign * 0.1 * i as f64);
            system.add_particle(position, velocity).unwrap();
        }
    }
    return system;
}

/// Five particles, some of them closer than the default minimal distance
fn get_crowded() -> ParticleSystem {
    let mut system = ParticleSystem::new(PeriodicBox::new(5.0).unwrap());
    system.add_particle(Vector2D::new(1.0, 1.0), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(1.2, 1.1), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(4.9, 1.0), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(2.5, 3.7), Vector2D::zero()).unwrap();
    system.add_particle(Vector2D::new(2.9, 4.2), Vector2D::zero()).unwrap();
    return system;
}
