//! Fixed-step time integration for the polar system
//!
//! One step is semi-implicit Euler over the whole system: every force is
//! taken from the state at the start of the step, then every body advances

use super::forces::ForceSet;
use super::params::Parameters;
use super::polar::PolarVector;
use super::states::System;

/// Advance the system by one step of `params.dt`.
/// Forces for all bodies come from one snapshot, before any body moves,
/// then each body runs its own `update`
pub fn euler_integrator(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt;

    // f[i] holds the total force on body i at t_n
    let mut f = vec![PolarVector::ZERO; n];
    forces.accumulate_forces(sys.t, &*sys, &mut f);

    for (b, f) in sys.bodies.iter_mut().zip(f.into_iter()) {
        b.apply_force(f);
        b.update(dt);
    }

    sys.t += dt;
}

/// Run `steps` consecutive integration steps
pub fn advance_frame(sys: &mut System, forces: &ForceSet, params: &Parameters, steps: usize) {
    for _ in 0..steps {
        euler_integrator(sys, forces, params);
    }
}
