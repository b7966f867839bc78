//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – sub-steps per frame and viewer options
//! - [`ParametersConfig`] – step size and physical constants
//! - [`ForceConfig`]      – force laws acting on the bodies
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A three-body scenario matching these types:
//!
//! ```yaml
//! engine:
//!   steps_per_frame: 16     # physics sub-steps per rendered frame
//!   scale: 1.0              # simulation units -> pixels
//!   trail_length: 1000      # 0 disables trails
//!   debug_vectors: true
//!
//! parameters:
//!   dt: 0.0166667           # fixed step size
//!   t_end: 60.0             # headless run length
//!   G: 1000.0               # gravitational constant
//!   eps2: 0.0               # softening
//!   min_distance: 1.0       # closer pairs exert no force
//!
//! forces:                   # omitted or empty -> pairwise gravity
//!   - type: gravity
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: { magnitude: 0.0, angle_deg: 0.0 }
//!     m: 500.0
//!     radius: 20.0
//!     color: [ 1.0, 0.0, 1.0 ]
//!   - x: [ 200.0, 200.0 ]
//!     v: { magnitude: 30.0, angle_deg: 90.0 }
//!     m: 50.0
//!     radius: 15.0
//! ```
//!
//! Positions are Cartesian, velocities are given in polar form with the
//! angle in degrees. `Scenario::build_scenario` validates and converts them.

use serde::Deserialize;

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
    #[serde(default)]
    pub debug_vectors: bool,
}

fn default_steps_per_frame() -> usize { 8 }
fn default_scale() -> f32 { 1.0 }
fn default_trail_length() -> usize { 1000 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: default_steps_per_frame(),
            scale: default_scale(),
            trail_length: default_trail_length(),
            debug_vectors: false,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,     // time step size
    #[serde(default = "default_t_end")]
    pub t_end: f64,  // time end for headless runs
    #[serde(default = "default_g")]
    pub G: f64,      // gravitational constant
    #[serde(default)]
    pub eps2: f64,   // softening
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
}

fn default_t_end() -> f64 { 60.0 }
fn default_g() -> f64 { 1000.0 }
fn default_min_distance() -> f64 { 1.0 }

/// One force law, tagged by `type`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ForceConfig {
    Gravity, // pairwise, uses G / eps2 / min_distance from parameters
    Central { center: [f64; 2], strength: f64 }, // strength / d^2 towards center
    Harmonic { center: [f64; 2], k: f64 }, // k * d towards center
    Drag { coefficient: f64 }, // coefficient * |v|^2 against velocity
}

/// Polar velocity as written in scenario files
#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct PolarConfig {
    pub magnitude: f64,
    #[serde(default)]
    pub angle_deg: f64, // degrees, converted to radians on load
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial Cartesian position [x, y]
    #[serde(default)]
    pub v: PolarConfig, // Initial velocity, polar
    pub m: f64,      // Mass of the body, must be > 0
    pub radius: f64, // Radius, only used for drawing
    #[serde(default)]
    pub color: Option<[f32; 3]>, // sRGB in 0..1, white when missing
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub forces: Vec<ForceConfig>,
    pub bodies: Vec<BodyConfig>,
}
