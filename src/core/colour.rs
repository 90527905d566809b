use approx::AbsDiffEq;
use std::ops::{Add, AddAssign, Mul};

#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Colour(f64, f64, f64);

impl Colour {
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);
    pub const RED: Colour = Colour::new(1.0, 0.0, 0.0);
    pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0);
    pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Colour(red, green, blue)
    }

    pub const fn greyscale(value: f64) -> Self {
        Colour(value, value, value)
    }

    pub const fn red(&self) -> f64 {
        self.0
    }

    pub const fn green(&self) -> f64 {
        self.1
    }

    pub const fn blue(&self) -> f64 {
        self.2
    }

    /// sum of absolute channel values; distinguishes a black coefficient from a usable one
    pub fn l1_norm(&self) -> f64 {
        self.0.abs() + self.1.abs() + self.2.abs()
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::BLACK
    }
}

impl Add<Colour> for Colour {
    type Output = Colour;

    fn add(self, rhs: Colour) -> Self::Output {
        Colour(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl AddAssign<Colour> for Colour {
    fn add_assign(&mut self, rhs: Colour) {
        self.0 += rhs.0;
        self.1 += rhs.1;
        self.2 += rhs.2;
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;

    fn mul(self, rhs: f64) -> Self::Output {
        Colour(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}

impl Mul<Colour> for Colour {
    type Output = Colour;

    fn mul(self, rhs: Colour) -> Self::Output {
        Colour(self.0 * rhs.0, self.1 * rhs.1, self.2 * rhs.2)
    }
}

impl AbsDiffEq for Colour {
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
