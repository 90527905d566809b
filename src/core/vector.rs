use approx::AbsDiffEq;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Vector3D(f64, f64, f64);

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Normal3D(f64, f64, f64);

pub trait Vector: Sized + Copy + Clone {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    fn magnitude(&self) -> f64;
    fn normalised(&self) -> Normal3D;

    fn dot<V: Vector>(&self, other: V) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    fn cross<V: Vector>(&self, other: V) -> Vector3D {
        Vector3D::new(
            (self.y() * other.z()) - (self.z() * other.y()),
            (self.z() * other.x()) - (self.x() * other.z()),
            (self.x() * other.y()) - (self.y() * other.x()),
        )
    }
}

impl Vector3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D(x, y, z)
    }
}

impl From<Normal3D> for Vector3D {
    fn from(normal: Normal3D) -> Self {
        Vector3D(normal.x(), normal.y(), normal.z())
    }
}

impl Vector for Vector3D {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }

    fn magnitude(&self) -> f64 {
        (self.0.powi(2) + self.1.powi(2) + self.2.powi(2)).sqrt()
    }

    fn normalised(&self) -> Normal3D {
        let magnitude = self.magnitude();

        if magnitude <= f64::EPSILON {
            // this is wrong, but panicking isn't helpful, and there's no meaningful unit vector to
            // substitute; degenerate normals only arise from degenerate scene data (e.g. an `up`
            // parallel to `look`, or a zero-scaled transform)
            Normal3D::new(0.0, 0.0, 0.0)
        } else {
            Normal3D::new(
                self.x() / magnitude,
                self.y() / magnitude,
                self.z() / magnitude,
            )
        }
    }
}

impl Normal3D {
    pub const POSITIVE_X: Normal3D = Normal3D::new(1.0, 0.0, 0.0);
    pub const NEGATIVE_X: Normal3D = Normal3D::new(-1.0, 0.0, 0.0);
    pub const POSITIVE_Y: Normal3D = Normal3D::new(0.0, 1.0, 0.0);
    pub const NEGATIVE_Y: Normal3D = Normal3D::new(0.0, -1.0, 0.0);
    pub const POSITIVE_Z: Normal3D = Normal3D::new(0.0, 0.0, 1.0);
    pub const NEGATIVE_Z: Normal3D = Normal3D::new(0.0, 0.0, -1.0);

    pub(in crate::core) const fn new(x: f64, y: f64, z: f64) -> Self {
        Normal3D(x, y, z)
    }
}

impl Vector for Normal3D {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }

    fn magnitude(&self) -> f64 {
        1.0
    }

    fn normalised(&self) -> Normal3D {
        *self
    }
}

impl<V: Vector> Add<V> for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: V) -> Self::Output {
        Vector3D(self.0 + rhs.x(), self.1 + rhs.y(), self.2 + rhs.z())
    }
}

impl<V: Vector> Add<V> for Normal3D {
    type Output = Vector3D;

    fn add(self, rhs: V) -> Self::Output {
        Vector3D::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl<V: Vector> Sub<V> for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: V) -> Self::Output {
        Vector3D(self.0 - rhs.x(), self.1 - rhs.y(), self.2 - rhs.z())
    }
}

impl<V: Vector> Sub<V> for Normal3D {
    type Output = Vector3D;

    fn sub(self, rhs: V) -> Self::Output {
        Vector3D::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        Vector3D(-self.0, -self.1, -self.2)
    }
}

impl Neg for Normal3D {
    type Output = Normal3D;

    fn neg(self) -> Self::Output {
        Normal3D(-self.0, -self.1, -self.2)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3D(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}

impl Mul<f64> for Normal3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3D::new(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
            && self.1.abs_diff_eq(&other.1, epsilon)
            && self.2.abs_diff_eq(&other.2, epsilon)
    }
}

impl AbsDiffEq for Normal3D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
            && self.1.abs_diff_eq(&other.1, epsilon)
            && self.2.abs_diff_eq(&other.2, epsilon)
    }
}
