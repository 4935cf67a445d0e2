use crate::Error;

use super::{PairPotential, check_finite};

/// Harmonic spring between particles: `V(r) = 1/2 k (r - r_eq)^2`, with force
/// `F(r) = -k (r - r_eq)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Harmonic {
    /// Spring constant
    pub k: f64,
    /// Equilibrium distance
    pub r_eq: f64,
}

impl Default for Harmonic {
    fn default() -> Harmonic {
        Harmonic { k: 1.0, r_eq: 0.0 }
    }
}

impl Harmonic {
    pub fn validate(&self) -> Result<(), Error> {
        check_finite(self.k, "k", "harmonic")?;
        check_finite(self.r_eq, "r_eq", "harmonic")?;
        return Ok(());
    }
}

impl PairPotential for Harmonic {
    fn energy(&self, r: f64) -> f64 {
        let dr = r - self.r_eq;
        0.5 * self.k * dr * dr
    }

    fn force(&self, r: f64) -> f64 {
        -self.k * (r - self.r_eq)
    }
}
