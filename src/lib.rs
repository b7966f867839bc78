pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::polar::PolarVector;
pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity, CentralForce, HarmonicForce, Drag};
pub use simulation::integrator::{euler_integrator, advance_frame};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::trail::{Trail, TrailPoint};
pub use simulation::scenario::{Scenario, ScenarioError};

pub use configuration::config::{EngineConfig, ParametersConfig, ForceConfig, PolarConfig, BodyConfig, ScenarioConfig};

pub use visualization::{polar_vis2d::run_2d, headless::run_headless};
