//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//! - one trail and one draw color per body
//!
//! The scenario is inserted into Bevy as a `Resource` and also drives
//! headless runs through [`Scenario::step_frame`]

use bevy::prelude::Resource;
use thiserror::Error;

use crate::configuration::config::{BodyConfig, ForceConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{CentralForce, Drag, ForceSet, HarmonicForce, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::polar::PolarVector;
use crate::simulation::states::{Body, System};
use crate::simulation::trail::Trail;

const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("t_end must be non-negative and finite, got {0}")]
    InvalidEndTime(f64),

    #[error("eps2 must be non-negative and finite, got {0}")]
    InvalidSoftening(f64),

    #[error("steps_per_frame must be at least 1")]
    NoSteps,

    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("body {index}: expected a 2D position, got {len} components")]
    BadPosition { index: usize, len: usize },

    #[error("body {index}: initial state is not finite")]
    NonFiniteState { index: usize },
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// Built from a [`ScenarioConfig`]: it contains the engine settings,
/// parameters, current system state, the set of active forces and the
/// per-body trails the viewer draws
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub trails: Vec<Trail>,
    pub colors: Vec<[f32; 3]>,
    pub frame: u64,
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, ScenarioError> {
    if !(bc.m > 0.0 && bc.m.is_finite()) {
        return Err(ScenarioError::InvalidMass { index, mass: bc.m });
    }
    if !(bc.radius > 0.0 && bc.radius.is_finite()) {
        return Err(ScenarioError::InvalidRadius { index, radius: bc.radius });
    }
    let [x, y] = bc.x[..] else {
        return Err(ScenarioError::BadPosition { index, len: bc.x.len() });
    };
    if !(x.is_finite() && y.is_finite() && bc.v.magnitude.is_finite() && bc.v.angle_deg.is_finite()) {
        return Err(ScenarioError::NonFiniteState { index });
    }

    let velocity = PolarVector::new(bc.v.magnitude, bc.v.angle_deg.to_radians());
    Ok(Body::new(x, y, bc.radius, bc.m).with_velocity(velocity))
}

fn build_forces(cfg: &[ForceConfig], parameters: &Parameters) -> ForceSet {
    let gravity = || NewtonianGravity {
        G: parameters.G,
        eps2: parameters.eps2,
        min_distance: parameters.min_distance,
    };

    if cfg.is_empty() {
        return ForceSet::new().with(gravity());
    }

    cfg.iter().fold(ForceSet::new(), |forces, fc| match *fc {
        ForceConfig::Gravity => forces.with(gravity()),
        ForceConfig::Central { center: [cx, cy], strength } => forces.with(CentralForce {
            center: (cx, cy),
            strength,
            min_distance: parameters.min_distance,
        }),
        ForceConfig::Harmonic { center: [cx, cy], k } => forces.with(HarmonicForce {
            center: (cx, cy),
            k,
        }),
        ForceConfig::Drag { coefficient } => forces.with(Drag { coefficient }),
    })
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.dt > 0.0 && p_cfg.dt.is_finite()) {
            return Err(ScenarioError::InvalidTimeStep(p_cfg.dt));
        }
        if !(p_cfg.t_end >= 0.0 && p_cfg.t_end.is_finite()) {
            return Err(ScenarioError::InvalidEndTime(p_cfg.t_end));
        }
        if !(p_cfg.eps2 >= 0.0 && p_cfg.eps2.is_finite()) {
            return Err(ScenarioError::InvalidSoftening(p_cfg.eps2));
        }
        let parameters = Parameters {
            dt: p_cfg.dt,
            t_end: p_cfg.t_end,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
            min_distance: p_cfg.min_distance,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        if e_cfg.steps_per_frame == 0 {
            return Err(ScenarioError::NoSteps);
        }
        let engine = Engine {
            steps_per_frame: e_cfg.steps_per_frame,
            scale: e_cfg.scale,
            trail_length: e_cfg.trail_length,
            debug_vectors: e_cfg.debug_vectors,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        let colors = cfg.bodies.iter().map(|bc| bc.color.unwrap_or(DEFAULT_COLOR)).collect();
        let trails = bodies.iter().map(|_| Trail::new(engine.trail_length)).collect();

        let forces = build_forces(&cfg.forces, &parameters);

        log::info!(
            "built scenario: {} bodies, {} force terms, dt = {}, {} steps/frame",
            bodies.len(),
            forces.len(),
            parameters.dt,
            engine.steps_per_frame
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
            trails,
            colors,
            frame: 0,
        })
    }

    /// Advance one rendered frame: `steps_per_frame` integration steps,
    /// recording every body into its trail after each step
    pub fn step_frame(&mut self) {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
            trails,
            ..
        } = self;

        for _ in 0..engine.steps_per_frame {
            euler_integrator(system, forces, parameters);
            for (trail, body) in trails.iter_mut().zip(system.bodies.iter()) {
                trail.record(body);
            }
        }

        self.frame += 1;
    }

    /// True once simulation time has reached `t_end`
    pub fn finished(&self) -> bool {
        self.system.t >= self.parameters.t_end
    }
}
