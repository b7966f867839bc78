//! Core state types for the polar simulation.
//!
//! - `Body`: one point mass whose kinematics are all `PolarVector`s
//! - `System`: the flat list of bodies plus the current simulation time `t`
//!
//! `NVec2` is only used at the Cartesian boundary (arithmetic, rendering).

use nalgebra::Vector2;

use super::polar::PolarVector;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub position: PolarVector, // relative to the fixed origin
    pub velocity: PolarVector,
    pub acceleration: PolarVector,
    pub force: PolarVector, // accumulated, reset by `update`
    pub last_force: PolarVector, // force used by the last `update`
    pub mass: f64, // must be > 0
    pub radius: f64, // rendering size only
}

impl Body {
    /// Body at rest at Cartesian `(x, y)`
    pub fn new(x: f64, y: f64, radius: f64, mass: f64) -> Self {
        Self {
            position: PolarVector::from_cartesian(x, y),
            velocity: PolarVector::ZERO,
            acceleration: PolarVector::ZERO,
            force: PolarVector::ZERO,
            last_force: PolarVector::ZERO,
            mass,
            radius,
        }
    }

    pub fn with_velocity(mut self, velocity: PolarVector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn x(&self) -> f64 {
        self.position.x()
    }

    pub fn y(&self) -> f64 {
        self.position.y()
    }

    pub fn cartesian_position(&self) -> (f64, f64) {
        self.position.to_cartesian()
    }

    /// Add `f` to the force total for the next `update`
    pub fn apply_force(&mut self, f: PolarVector) {
        self.force += f;
    }

    /// Advance one semi-implicit Euler step of length `dt`.
    ///
    /// Velocity is updated first and the new velocity moves the position.
    /// The accumulated force is consumed and reset to zero.
    ///
    /// `mass` must be positive; this is not checked in release builds and a
    /// zero mass yields a non-finite acceleration.
    pub fn update(&mut self, dt: f64) {
        debug_assert!(self.mass > 0.0, "body mass must be positive, got {}", self.mass);

        self.acceleration = self.force / self.mass;
        self.velocity = self.velocity + self.acceleration.scale(dt);
        self.position = self.position + self.velocity.scale(dt);

        self.last_force = self.force;
        self.force = PolarVector::ZERO;
    }

    pub fn momentum(&self) -> PolarVector {
        self.velocity.scale(self.mass)
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude() * self.velocity.magnitude()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // flat collection, no hierarchy
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Vector sum of m * v over all bodies
    pub fn total_momentum(&self) -> PolarVector {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted mean position, `None` for an empty system
    pub fn center_of_mass(&self) -> Option<PolarVector> {
        let total_mass: f64 = self.bodies.iter().map(|b| b.mass).sum();
        if self.bodies.is_empty() || total_mass <= 0.0 {
            return None;
        }

        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.position.to_vector() * b.mass);

        Some(PolarVector::from_vector(weighted / total_mass))
    }
}
