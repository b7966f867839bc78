//! Polar-coordinate vector used for every kinematic quantity
//!
//! A `PolarVector` is stored as (magnitude, angle) but all arithmetic goes
//! through Cartesian components: convert, combine, convert back.
//! Angles are radians and are never normalized

use std::f64::consts::PI;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarVector {
    magnitude: f64, // always >= 0
    angle: f64, // radians, unconstrained
}

impl PolarVector {
    pub const ZERO: PolarVector = PolarVector { magnitude: 0.0, angle: 0.0 };

    /// Build from (magnitude, angle)
    /// A negative magnitude is stored as (|magnitude|, angle + pi)
    pub fn new(magnitude: f64, angle: f64) -> Self {
        if magnitude < 0.0 {
            Self { magnitude: -magnitude, angle: angle + PI }
        } else {
            Self { magnitude, angle }
        }
    }

    /// magnitude = hypot(x, y), angle = atan2(y, x)
    /// atan2(0, 0) is 0, so the zero vector comes back with angle 0
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            magnitude: x.hypot(y),
            angle: y.atan2(x),
        }
    }

    pub fn from_vector(v: NVec2) -> Self {
        Self::from_cartesian(v.x, v.y)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Angle in degrees, unnormalized
    pub fn degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn x(&self) -> f64 {
        self.magnitude * self.angle.cos()
    }

    pub fn y(&self) -> f64 {
        self.magnitude * self.angle.sin()
    }

    pub fn to_cartesian(&self) -> (f64, f64) {
        let (sin, cos) = self.angle.sin_cos();
        (self.magnitude * cos, self.magnitude * sin)
    }

    pub fn to_vector(&self) -> NVec2 {
        let (x, y) = self.to_cartesian();
        NVec2::new(x, y)
    }

    /// Scale by `k`. Negative factors keep the magnitude non-negative and
    /// turn the vector around by pi instead
    pub fn scale(&self, k: f64) -> Self {
        if k < 0.0 {
            Self { magnitude: self.magnitude * -k, angle: self.angle + PI }
        } else {
            Self { magnitude: self.magnitude * k, angle: self.angle }
        }
    }

    pub fn rotate(&self, delta: f64) -> Self {
        Self { magnitude: self.magnitude, angle: self.angle + delta }
    }
}

impl Add for PolarVector {
    type Output = PolarVector;

    fn add(self, other: PolarVector) -> PolarVector {
        PolarVector::from_vector(self.to_vector() + other.to_vector())
    }
}

impl AddAssign for PolarVector {
    fn add_assign(&mut self, other: PolarVector) {
        *self = *self + other;
    }
}

impl Neg for PolarVector {
    type Output = PolarVector;

    fn neg(self) -> PolarVector {
        self.rotate(PI)
    }
}

impl Sub for PolarVector {
    type Output = PolarVector;

    fn sub(self, other: PolarVector) -> PolarVector {
        PolarVector::from_vector(self.to_vector() - other.to_vector())
    }
}

impl Mul<f64> for PolarVector {
    type Output = PolarVector;

    fn mul(self, k: f64) -> PolarVector {
        self.scale(k)
    }
}

/// Caller must not divide by zero
impl Div<f64> for PolarVector {
    type Output = PolarVector;

    fn div(self, k: f64) -> PolarVector {
        debug_assert!(k != 0.0, "PolarVector divided by zero");
        self.scale(k.recip())
    }
}

impl Sum for PolarVector {
    fn sum<I: Iterator<Item = PolarVector>>(iter: I) -> PolarVector {
        // sum in Cartesian, convert once
        let total = iter.fold(NVec2::zeros(), |acc, v| acc + v.to_vector());
        PolarVector::from_vector(total)
    }
}

impl fmt::Display for PolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} @ {:.1}°", self.magnitude, self.degrees().rem_euclid(360.0))
    }
}
