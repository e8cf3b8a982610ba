use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector in screen space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: -1.0 };
    pub const DOWN: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const LEFT: Vec2 = Vec2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    /// Creates a new Vec2.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// There is no zero check: normalizing a zero-length vector gives NaN components,
    /// callers that can see one must filter it themselves.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Rotates the vector by `degrees` around the origin.
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin_a, cos_a) = degrees.to_radians().sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Rotated by -90 degrees.
    pub fn perpendicular(self) -> Self {
        self.rotate(-90.0)
    }

    /// Rotated by +90 degrees.
    pub fn perpendicular_ccw(self) -> Self {
        self.rotate(90.0)
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Interpolates between `a` and `b`.
    ///
    /// Note the weighting: `t = 0` yields `b` and `t = 1` yields `a`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        a * t + b * (1.0 - t)
    }

    /// Returns the shorter of the two vectors. Equal lengths pick `b`.
    pub fn min_by_length(a: Self, b: Self) -> Self {
        if a == b {
            return a;
        }
        if a.length() < b.length() {
            a
        } else {
            b
        }
    }

    /// Returns the longer of the two vectors. Equal lengths pick `b`.
    pub fn max_by_length(a: Self, b: Self) -> Self {
        if a == b {
            return a;
        }
        if a.length() > b.length() {
            a
        } else {
            b
        }
    }

    /// Reflects this vector off a surface with the given normal (need not be unit length).
    pub fn reflect(self, normal: Self) -> Self {
        let n = normal.normalize();
        self - n * (2.0 * self.dot(n))
    }

    /// Signed angle from `self` to `other` in degrees.
    pub fn angle(self, other: Self) -> f64 {
        let len = self.length() * other.length();
        let cos = self.dot(other) / len;
        let sin = self.cross(other) / len;
        let angle = cos.acos().to_degrees();
        if sin < 0.0 {
            -angle
        } else {
            angle
        }
    }

    /// Clamps each axis into `[min, max]`. Returns `self` untouched if the range is inverted.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        if min.x > max.x || min.y > max.y {
            return self;
        }
        Self::new(clamp_axis(self.x, min.x, max.x), clamp_axis(self.y, min.y, max.y))
    }

    pub fn clamp_x(self, min: f64, max: f64) -> Self {
        if min > max {
            return self;
        }
        Self::new(clamp_axis(self.x, min, max), self.y)
    }

    pub fn clamp_y(self, min: f64, max: f64) -> Self {
        if min > max {
            return self;
        }
        Self::new(self.x, clamp_axis(self.y, min, max))
    }

    pub fn clamp_min(self, min: Self) -> Self {
        self.clamp_x_min(min.x).clamp_y_min(min.y)
    }

    pub fn clamp_x_min(self, min: f64) -> Self {
        if self.x < min {
            Self::new(min, self.y)
        } else {
            self
        }
    }

    pub fn clamp_y_min(self, min: f64) -> Self {
        if self.y < min {
            Self::new(self.x, min)
        } else {
            self
        }
    }

    pub fn clamp_max(self, max: Self) -> Self {
        self.clamp_x_max(max.x).clamp_y_max(max.y)
    }

    pub fn clamp_x_max(self, max: f64) -> Self {
        if self.x > max {
            Self::new(max, self.y)
        } else {
            self
        }
    }

    pub fn clamp_y_max(self, max: f64) -> Self {
        if self.y > max {
            Self::new(self.x, max)
        } else {
            self
        }
    }

    /// Rescales the vector so its length lies in `[min_length, max_length]`.
    /// An inverted range leaves the vector untouched.
    pub fn clamp_length(self, min_length: f64, max_length: f64) -> Self {
        if max_length < min_length {
            return self;
        }
        self.clamp_length_min(min_length).clamp_length_max(max_length)
    }

    pub fn clamp_length_min(self, min_length: f64) -> Self {
        if self.length() < min_length {
            self.normalize() * min_length
        } else {
            self
        }
    }

    pub fn clamp_length_max(self, max_length: f64) -> Self {
        if self.length() > max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    /// True if either component is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

// Component-wise
impl Mul for Vec2 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// Plain IEEE division, a zero divisor gives infinities or NaN.
impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

// Component-wise
impl Div for Vec2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
