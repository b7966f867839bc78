use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

#[derive(Component)]
struct BodyIndex(pub usize);

const WIDTH: f32 = 1200.0;
const HEIGHT: f32 = 800.0;

const GLOW_RADIUS: f64 = 15.0;
const VELOCITY_SCALE: f32 = 1.0;
const ACCELERATION_SCALE: f32 = 2.0;
const FORCE_SCALE: f32 = 0.1;

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Polar Body Simulation".into(),
                        resolution: (WIDTH, HEIGHT).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger owns logging for the whole process
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, draw_trails_system, draw_debug_vectors_system).chain(),
        )
        .run();
}

fn to_screen(p: NVec2, scale: f32) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32) * scale
}

fn body_color(rgb: [f32; 3], alpha: f32) -> Color {
    Color::srgba(rgb[0], rgb[1], rgb[2], alpha)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let scale = scenario.engine.scale;
    for (i, (body, rgb)) in scenario.system.bodies.iter().zip(scenario.colors.iter()).enumerate() {
        let radius_screen = (body.radius as f32 * scale).max(1.0);
        let pos = to_screen(body.position.to_vector(), scale);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(body_color(*rgb, 1.0))),
                // later bodies draw on top
                transform: Transform::from_xyz(pos.x, pos.y, i as f32 * 0.01),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
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

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.engine.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = to_screen(b.position.to_vector(), scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

/// Fading line through the trail plus a glow of short strokes across the
/// direction of travel
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = scenario.engine.scale;

    for (trail, rgb) in scenario.trails.iter().zip(scenario.colors.iter()) {
        let n = trail.len();
        if n < 2 {
            continue;
        }

        gizmos.linestrip_gradient_2d(trail.iter().enumerate().map(|(i, p)| {
            let progress = i as f32 / n as f32;
            (to_screen(p.position, scale), body_color(*rgb, progress))
        }));

        let glow_width = 1.0 + GLOW_RADIUS * 2.0;
        for (i, p) in trail.iter().enumerate() {
            let alpha = (155.0 * i as f32 / n as f32) / 4.0 / 255.0;
            for w_mult in [1.0, 0.8, 0.6] {
                if let Some((a, b)) = p.glow_segment(glow_width * w_mult) {
                    gizmos.line_2d(to_screen(a, scale), to_screen(b, scale), body_color(*rgb, alpha));
                }
            }
        }
    }
}

fn draw_debug_vectors_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.engine.debug_vectors {
        return;
    }
    let scale = scenario.engine.scale;

    for b in &scenario.system.bodies {
        let origin = to_screen(b.position.to_vector(), scale);

        let vel = to_screen(b.velocity.to_vector(), scale) * VELOCITY_SCALE;
        gizmos.line_2d(origin, origin + vel, Color::srgb(0.0, 1.0, 0.0));

        if b.acceleration.magnitude() > 0.0 {
            let acc = to_screen(b.acceleration.to_vector(), scale) * ACCELERATION_SCALE;
            gizmos.line_2d(origin, origin + acc, Color::srgb(1.0, 0.0, 0.0));
        }

        if b.last_force.magnitude() > 0.0 {
            let force = to_screen(b.last_force.to_vector(), scale) * FORCE_SCALE;
            gizmos.line_2d(origin, origin + force, Color::WHITE);
        }
    }
}
