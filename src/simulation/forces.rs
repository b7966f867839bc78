//! Force contributors for the polar engine
//!
//! Every term adds into a per-body output slot while reading only the
//! immutable `System` snapshot, so all forces of one step see the same
//! positions no matter the order of the terms

use std::f64::consts::PI;

use crate::simulation::polar::PolarVector;
use crate::simulation::states::{Body, System};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [PolarVector]) {
        for f in out.iter_mut() {
            *f = PolarVector::ZERO;
        }
        for term in &self.terms {
            term.force(t, sys, out);
        }
    }
}

/// Force source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, t: f64, sys: &System, out: &mut [PolarVector]);
}

/// Distance and angle from `from` to the Cartesian point `to`
fn towards(from: &Body, to: (f64, f64)) -> (f64, f64) {
    let dx = to.0 - from.x();
    let dy = to.1 - from.y();
    (dx.hypot(dy), dy.atan2(dx))
}

/// Pairwise Newtonian attraction
/// |F| = G * m_i * m_j / (d^2 + eps2), equal and opposite
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
    pub min_distance: f64, // closer pairs are skipped
}

impl Force for NewtonianGravity {
    fn force(&self, _t: f64, sys: &System, out: &mut [PolarVector]) {
        let n = sys.bodies.len();

        // Each unordered pair (i, j) with i < j, once
        for i in 0..n {
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along r, j along -r
                let r = bj.position - bi.position;
                let d = r.magnitude();
                // coincident bodies with no softening have no direction
                let d2 = d * d + self.eps2;
                if d < self.min_distance || d2 <= 0.0 {
                    continue;
                }

                let magnitude = self.G * bi.mass * bj.mass / d2;

                out[i] += PolarVector::new(magnitude, r.angle());
                out[j] += PolarVector::new(magnitude, r.angle() + PI);
            }
        }
    }
}

/// Inverse-square pull towards a fixed point, independent of body mass
/// |F| = strength / d^2
pub struct CentralForce {
    pub center: (f64, f64),
    pub strength: f64,
    pub min_distance: f64,
}

impl Force for CentralForce {
    fn force(&self, _t: f64, sys: &System, out: &mut [PolarVector]) {
        for (body, f) in sys.bodies.iter().zip(out.iter_mut()) {
            let (d, angle) = towards(body, self.center);
            if d < self.min_distance || d <= 0.0 {
                continue;
            }
            *f += PolarVector::new(self.strength / (d * d), angle);
        }
    }
}

/// Spring towards a fixed point, |F| = k * d
pub struct HarmonicForce {
    pub center: (f64, f64),
    pub k: f64,
}

impl Force for HarmonicForce {
    fn force(&self, _t: f64, sys: &System, out: &mut [PolarVector]) {
        for (body, f) in sys.bodies.iter().zip(out.iter_mut()) {
            let (d, angle) = towards(body, self.center);
            *f += PolarVector::new(self.k * d, angle);
        }
    }
}

/// Quadratic drag opposite to velocity, |F| = coefficient * |v|^2
pub struct Drag {
    pub coefficient: f64,
}

impl Force for Drag {
    fn force(&self, _t: f64, sys: &System, out: &mut [PolarVector]) {
        for (body, f) in sys.bodies.iter().zip(out.iter_mut()) {
            let speed = body.velocity.magnitude();
            if speed <= 0.0 {
                continue;
            }
            *f += PolarVector::new(self.coefficient * speed * speed, body.velocity.angle() + PI);
        }
    }
}
