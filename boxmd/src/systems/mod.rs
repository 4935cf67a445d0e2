//! Definition of the simulated systems: a periodic box and the particles
//! inside it.

mod cell;
pub use self::cell::PeriodicBox;

mod particles;
pub use self::particles::ParticleSystem;

#[cfg(test)]
pub(crate) mod test_utils;
