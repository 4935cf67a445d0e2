//! 2-dimensional vector type
use std::ops::{Add, Sub, Mul, Div, Neg, Index, IndexMut};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// A 2-dimensional vector type, used for positions, velocities, accelerations
/// and forces.
///
/// A `Vector2D` implement all the arithmetic operations:
///
/// ```
/// # use boxmd::Vector2D;
/// let u = Vector2D::new(1.0, 2.0);
/// let v = Vector2D::new(4.0, -1.0);
///
/// // Indexing
/// assert_eq!(u[0], 1.0);
/// assert_eq!(u[1], 2.0);
///
/// // Addition and subtraction
/// assert_eq!(u + v, Vector2D::new(5.0, 1.0));
/// assert_eq!(u - v, Vector2D::new(-3.0, 3.0));
///
/// // Multiplication and division by a scalar
/// assert_eq!(3.0 * u, Vector2D::new(3.0, 6.0));
/// assert_eq!(u / 2.0, Vector2D::new(0.5, 1.0));
///
/// // Dot product
/// assert_eq!(u * v, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Vector2D([f64; 2]);

impl Vector2D {
    /// Create a new `Vector2D` with components `x` and `y`
    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D([x, y])
    }

    /// Create a new `Vector2D` with all components set to 0
    pub fn zero() -> Vector2D {
        Vector2D([0.0, 0.0])
    }

    /// Compute the squared euclidean norm of this vector
    #[inline]
    pub fn norm2(&self) -> f64 {
        self * self
    }

    /// Compute the euclidean norm of this vector
    #[inline]
    pub fn norm(&self) -> f64 {
        f64::sqrt(self.norm2())
    }

    /// Get a normalized version of this vector
    #[inline]
    pub fn normalized(&self) -> Vector2D {
        self / self.norm()
    }

    /// Check that both components of this vector are finite (neither NaN nor
    /// infinite)
    #[inline]
    pub fn is_finite(&self) -> bool {
        self[0].is_finite() && self[1].is_finite()
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(array: [f64; 2]) -> Vector2D {
        Vector2D(array)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(vector: Vector2D) -> [f64; 2] {
        vector.0
    }
}

impl Index<usize> for Vector2D {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vector2D {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl_arithmetic!(
    Vector2D, Vector2D, Add, add, Vector2D, self, other,
    Vector2D::new(self[0] + other[0], self[1] + other[1])
);

impl_arithmetic!(
    Vector2D, Vector2D, Sub, sub, Vector2D, self, other,
    Vector2D::new(self[0] - other[0], self[1] - other[1])
);

// dot product
impl_arithmetic!(
    Vector2D, Vector2D, Mul, mul, f64, self, other,
    self[0] * other[0] + self[1] * other[1]
);

impl_inplace_arithmetic!(
    Vector2D, Vector2D, AddAssign, add_assign, self, other,
    {
        self[0] += other[0];
        self[1] += other[1];
    }
);

impl_inplace_arithmetic!(
    Vector2D, Vector2D, SubAssign, sub_assign, self, other,
    {
        self[0] -= other[0];
        self[1] -= other[1];
    }
);

impl_inplace_arithmetic!(
    Vector2D, f64, MulAssign, mul_assign, self, other,
    {
        self[0] *= other;
        self[1] *= other;
    }
);

impl_inplace_arithmetic!(
    Vector2D, f64, DivAssign, div_assign, self, other,
    {
        self[0] /= other;
        self[1] /= other;
    }
);

impl_scalar_arithmetic!(
    Vector2D, Mul, mul, self, other,
    Vector2D::new(self[0] * other, self[1] * other)
);

impl_scalar_arithmetic!(
    Vector2D, Div, div, self, other,
    Vector2D::new(self[0] / other, self[1] / other)
);

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn mul(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self * other[0], self * other[1])
    }
}

impl<'a> Mul<&'a Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn mul(self, other: &'a Vector2D) -> Vector2D {
        Vector2D::new(self * other[0], self * other[1])
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Vector2D {
        Vector2D::new(-self[0], -self[1])
    }
}

impl<'a> Neg for &'a Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Vector2D {
        Vector2D::new(-self[0], -self[1])
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vector2D, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self[0], &other[0], epsilon) &&
        f64::abs_diff_eq(&self[1], &other[1], epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Vector2D, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self[0], &other[0], epsilon, max_relative) &&
        f64::relative_eq(&self[1], &other[1], epsilon, max_relative)
    }
}

impl UlpsEq for Vector2D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Vector2D, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self[0], &other[0], epsilon, max_ulps) &&
        f64::ulps_eq(&self[1], &other[1], epsilon, max_ulps)
    }
}
