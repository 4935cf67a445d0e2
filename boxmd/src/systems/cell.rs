//! The `PeriodicBox` type represents the enclosing box of a simulated system,
//! with periodic boundary conditions along both directions.
use crate::{Error, Vector2D};

/// A square simulation box of side `side`, with periodic boundary conditions.
///
/// Positions inside the box live in `[0, side)` along each direction, and
/// vectors between two positions are reduced to their shortest periodic image
/// (minimum image convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicBox {
    side: f64,
}

impl PeriodicBox {
    /// Create a new square periodic box with the given side length.
    pub fn new(side: f64) -> Result<PeriodicBox, Error> {
        if !(side.is_finite() && side > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "expected a positive and finite box size, got {}", side
            )));
        }

        return Ok(PeriodicBox { side: side });
    }

    /// Get the side length of this box
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Get the area of this box
    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    /// Check if `position` is inside the box, *i.e.* if all of its components
    /// are in `[0, side)`.
    pub fn contains(&self, position: Vector2D) -> bool {
        (0.0..self.side).contains(&position[0]) && (0.0..self.side).contains(&position[1])
    }
}

/// Geometric operations using periodic boundary conditions
impl PeriodicBox {
    /// Wrap a vector in the box, obeying the periodic boundary conditions.
    /// This produce a vector with all components in `[0, side)`.
    #[inline]
    pub fn wrap_vector(&self, vector: &mut Vector2D) {
        vector[0] = self.wrap_component(vector[0]);
        vector[1] = self.wrap_component(vector[1]);
    }

    /// Find the image of a vector in the box, obeying the periodic boundary
    /// conditions. This produce a vector with all components in
    /// `[-side/2, side/2]`.
    #[inline]
    pub fn vector_image(&self, vector: &mut Vector2D) {
        vector[0] -= f64::round(vector[0] / self.side) * self.side;
        vector[1] -= f64::round(vector[1] / self.side) * self.side;
    }

    /// Periodic boundary conditions squared distance between the point `u` and
    /// the point `v`
    pub fn distance2(&self, u: Vector2D, v: Vector2D) -> f64 {
        let mut d = v - u;
        self.vector_image(&mut d);
        return d.norm2();
    }

    /// Periodic boundary conditions distance between the point `u` and
    /// the point `v`
    pub fn distance(&self, u: Vector2D, v: Vector2D) -> f64 {
        return f64::sqrt(self.distance2(u, v));
    }

    #[inline]
    fn wrap_component(&self, value: f64) -> f64 {
        let wrapped = value.rem_euclid(self.side);
        // tiny negative values round up to exactly `side`
        if wrapped >= self.side {
            return 0.0;
        }
        return wrapped;
    }
}
