//! Pair potentials acting between particles.
//!
//! All potentials are functions of the scalar separation `r` between two
//! particles, and follow the same sign convention for forces: the force
//! magnitude is `F = -dV/dr`, so a positive force pushes the particles apart
//! and a negative force pulls them together.

use crate::Error;

mod lennard_jones;
pub use self::lennard_jones::LennardJones;

mod harmonic;
pub use self::harmonic::Harmonic;

mod morse;
pub use self::morse::Morse;

/// A potential acting between pairs of particles, as a function of the
/// distance `r > 0` between them.
pub trait PairPotential {
    /// Get the potential energy at distance `r`
    fn energy(&self, r: f64) -> f64;

    /// Get the force magnitude `F = -dV/dr` at distance `r`
    fn force(&self, r: f64) -> f64;

    /// Get both the energy and the force at distance `r`. Implementations can
    /// override this to share intermediate results.
    fn compute(&self, r: f64) -> (f64, f64) {
        (self.energy(r), self.force(r))
    }
}

/// Parameters of the full pair potential used in a simulation, which is the
/// sum of a Lennard-Jones, a harmonic and a Morse term.
///
/// Each term can be disabled by setting its strength (`a` and `b`, `k` or
/// `depth`) to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PotentialParameters {
    /// Lennard-Jones term
    pub lennard_jones: LennardJones,
    /// Harmonic term
    pub harmonic: Harmonic,
    /// Morse term
    pub morse: Morse,
}

impl PotentialParameters {
    /// Check that all the parameters have valid values
    pub fn validate(&self) -> Result<(), Error> {
        self.lennard_jones.validate()?;
        self.harmonic.validate()?;
        self.morse.validate()?;
        return Ok(());
    }
}

impl PairPotential for PotentialParameters {
    fn energy(&self, r: f64) -> f64 {
        self.lennard_jones.energy(r) + self.harmonic.energy(r) + self.morse.energy(r)
    }

    fn force(&self, r: f64) -> f64 {
        self.lennard_jones.force(r) + self.harmonic.force(r) + self.morse.force(r)
    }

    fn compute(&self, r: f64) -> (f64, f64) {
        let (lj_energy, lj_force) = self.lennard_jones.compute(r);
        let (harmonic_energy, harmonic_force) = self.harmonic.compute(r);
        let (morse_energy, morse_force) = self.morse.compute(r);

        let energy = lj_energy + harmonic_energy + morse_energy;
        let force = lj_force + harmonic_force + morse_force;
        return (energy, force);
    }
}

/// Check that `value` is finite, returning an error mentioning `name` and
/// `potential` otherwise.
fn check_finite(value: f64, name: &str, potential: &str) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "expected finite value for '{}' in {} potential, got {}",
            name, potential, value
        )));
    }
    return Ok(());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Check that the force returned by `potential` is minus the finite
    /// difference derivative of the energy, at all the given distances
    pub fn check_force_is_energy_derivative<P: PairPotential>(potential: &P, distances: &[f64]) {
        let delta = 1e-6;
        for &r in distances {
            let finite_difference = -(potential.energy(r + delta) - potential.energy(r - delta)) / (2.0 * delta);
            assert_relative_eq!(potential.force(r), finite_difference, epsilon = 1e-6, max_relative = 1e-6);

            let (energy, force) = potential.compute(r);
            assert_relative_eq!(energy, potential.energy(r), max_relative = 1e-14);
            assert_relative_eq!(force, potential.force(r), max_relative = 1e-14);
        }
    }

    #[test]
    fn defaults() {
        let parameters = PotentialParameters::default();
        assert_eq!(parameters.lennard_jones, LennardJones { a: 1.0, b: 1.0 });
        assert_eq!(parameters.harmonic, Harmonic { k: 1.0, r_eq: 0.0 });
        assert_eq!(parameters.morse, Morse { depth: 1.0, a: 1.0, r_eq: 1.0 });
    }

    #[test]
    fn combined() {
        let parameters = PotentialParameters {
            lennard_jones: LennardJones { a: 2.0, b: 3.0 },
            harmonic: Harmonic { k: 5.0, r_eq: 1.12 },
            morse: Morse { depth: 0.5, a: 1.5, r_eq: 1.3 },
        };

        for r in [0.5, 0.9, 1.12, 1.7, 3.0] {
            let (energy, force) = parameters.compute(r);
            assert_relative_eq!(energy,
                parameters.lennard_jones.energy(r) + parameters.harmonic.energy(r) + parameters.morse.energy(r),
                max_relative = 1e-14
            );
            assert_relative_eq!(force,
                parameters.lennard_jones.force(r) + parameters.harmonic.force(r) + parameters.morse.force(r),
                max_relative = 1e-14
            );
        }

        check_force_is_energy_derivative(&parameters, &[0.8, 1.0, 1.5, 2.5]);
    }

    #[test]
    fn disabled_terms() {
        let parameters = PotentialParameters {
            lennard_jones: LennardJones { a: 0.0, b: 0.0 },
            harmonic: Harmonic { k: 5.0, r_eq: 1.25 },
            morse: Morse { depth: 0.0, a: 1.0, r_eq: 1.0 },
        };

        assert_eq!(parameters.compute(1.25), (0.0, 0.0));
        assert_eq!(parameters.compute(2.25), (2.5, -5.0));
    }

    #[test]
    fn json() {
        let parameters: PotentialParameters = serde_json::from_str(r#"{
            "harmonic": {"k": 5.0, "r_eq": 1.12}
        }"#).unwrap();

        assert_eq!(parameters.lennard_jones, LennardJones::default());
        assert_eq!(parameters.harmonic, Harmonic { k: 5.0, r_eq: 1.12 });
        assert_eq!(parameters.morse, Morse::default());

        let error = serde_json::from_str::<PotentialParameters>(r#"{"coulomb": {}}"#).unwrap_err();
        assert!(error.to_string().starts_with("unknown field `coulomb`"));
    }

    #[test]
    fn validate() {
        let mut parameters = PotentialParameters::default();
        parameters.validate().unwrap();

        parameters.morse.a = f64::NAN;
        let error = parameters.validate().unwrap_err();
        assert_eq!(error.to_string(), "invalid parameter: expected finite value for 'a' in Morse potential, got NaN");
    }
}
