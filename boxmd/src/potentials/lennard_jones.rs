use crate::Error;

use super::{PairPotential, check_finite};

/// Lennard-Jones potential, written with separate repulsive and attractive
/// coefficients:
///
/// `V(r) = a / r^12 - b / r^6`
///
/// The corresponding force is `F(r) = 12 a / r^13 - 6 b / r^7`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LennardJones {
    /// Coefficient of the repulsive `1/r^12` term
    pub a: f64,
    /// Coefficient of the attractive `1/r^6` term
    pub b: f64,
}

impl Default for LennardJones {
    fn default() -> LennardJones {
        LennardJones { a: 1.0, b: 1.0 }
    }
}

impl LennardJones {
    pub fn validate(&self) -> Result<(), Error> {
        check_finite(self.a, "a", "Lennard-Jones")?;
        check_finite(self.b, "b", "Lennard-Jones")?;
        return Ok(());
    }
}

impl PairPotential for LennardJones {
    fn energy(&self, r: f64) -> f64 {
        let r6 = r.powi(6);
        self.a / (r6 * r6) - self.b / r6
    }

    fn force(&self, r: f64) -> f64 {
        let r6 = r.powi(6);
        12.0 * self.a / (r6 * r6 * r) - 6.0 * self.b / (r6 * r)
    }
}
