//! Renderer-free driver: steps frames and logs body state

use crate::simulation::scenario::Scenario;

/// Run `frames` frames, or until `t_end` when `frames` is `None`.
/// Returns the scenario in its final state
pub fn run_headless(mut scenario: Scenario, frames: Option<u64>) -> Scenario {
    log::info!(
        "run_headless: {} bodies, {}",
        scenario.system.bodies.len(),
        match frames {
            Some(n) => format!("{n} frames"),
            None => format!("until t = {}", scenario.parameters.t_end),
        }
    );

    loop {
        let done = match frames {
            Some(n) => scenario.frame >= n,
            None => scenario.finished(),
        };
        if done {
            break;
        }

        scenario.step_frame();

        for (i, b) in scenario.system.bodies.iter().enumerate() {
            log::debug!(
                "frame {} body {}: Displacement: {}, Velocity: {}, Force: {}",
                scenario.frame,
                i,
                b.position,
                b.velocity,
                b.last_force
            );
        }
    }

    let p = scenario.system.total_momentum();
    log::info!(
        "finished at t = {:.3} after {} frames, total momentum {}, kinetic energy {:.3}",
        scenario.system.t,
        scenario.frame,
        p,
        scenario.system.kinetic_energy()
    );
    if let Some(com) = scenario.system.center_of_mass() {
        let (x, y) = com.to_cartesian();
        log::info!("center of mass at ({x:.3}, {y:.3})");
    }

    scenario
}
