//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and end time for headless runs,
//! - gravitational constant and softening (`G`, `eps2`),
//! - the separation below which attraction is skipped

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub t_end: f64, // time end (headless runs)
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
    pub min_distance: f64, // pairs/centres closer than this exert no force
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            t_end: 60.0,
            G: 1000.0,
            eps2: 0.0,
            min_distance: 1.0,
        }
    }
}
