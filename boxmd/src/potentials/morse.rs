use crate::Error;

use super::{PairPotential, check_finite};

/// Morse potential, `V(r) = D (1 - exp(-a (r - r_eq)))^2`, where `D` is the
/// well depth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Morse {
    /// Depth of the potential well
    pub depth: f64,
    /// Inverse width of the potential well
    pub a: f64,
    /// Equilibrium distance
    pub r_eq: f64,
}

impl Default for Morse {
    fn default() -> Morse {
        Morse { depth: 1.0, a: 1.0, r_eq: 1.0 }
    }
}

impl Morse {
    pub fn validate(&self) -> Result<(), Error> {
        check_finite(self.depth, "depth", "Morse")?;
        check_finite(self.a, "a", "Morse")?;
        check_finite(self.r_eq, "r_eq", "Morse")?;
        return Ok(());
    }
}

impl PairPotential for Morse {
    fn energy(&self, r: f64) -> f64 {
        let one_minus_exp = 1.0 - f64::exp(-self.a * (r - self.r_eq));
        self.depth * one_minus_exp * one_minus_exp
    }

    fn force(&self, r: f64) -> f64 {
        return self.compute(r).1;
    }

    fn compute(&self, r: f64) -> (f64, f64) {
        let exp = f64::exp(-self.a * (r - self.r_eq));
        let one_minus_exp = 1.0 - exp;

        let energy = self.depth * one_minus_exp * one_minus_exp;
        let force = -2.0 * self.depth * self.a * one_minus_exp * exp;
        return (energy, force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::potentials::tests::check_force_is_energy_derivative;

    #[test]
    fn values() {
        let morse = Morse::default();
        assert_eq!(morse.compute(1.0), (0.0, 0.0));

        // dissociation limit
        assert_relative_eq!(morse.energy(50.0), 1.0, max_relative = 1e-12);
        assert_relative_eq!(morse.force(50.0), 0.0, epsilon = 1e-12);

        let morse = Morse { depth: 2.0, a: 0.5, r_eq: 1.5 };
        let exp = f64::exp(-0.25);
        assert_relative_eq!(morse.energy(2.0), 2.0 * (1.0 - exp) * (1.0 - exp), max_relative = 1e-14);
        assert_relative_eq!(morse.force(2.0), -2.0 * (1.0 - exp) * exp, max_relative = 1e-14);

        // repulsive at short distances
        assert!(morse.force(1.0) > 0.0);
    }

    #[test]
    fn derivative() {
        check_force_is_energy_derivative(&Morse::default(), &[0.5, 1.0, 1.7, 4.0]);
        check_force_is_energy_derivative(&Morse { depth: 0.3, a: 2.0, r_eq: 1.2 }, &[0.8, 1.2, 2.0]);
    }
}
