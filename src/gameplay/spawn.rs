// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::prelude::*;

use crate::core::commands::SandboxCommand;
use crate::core::components::{BodyColor, SandboxBody, SandboxShape, ShapeKind};
use crate::core::config::{SandboxConfig, SpawnConfig};
use crate::core::system::system_order::CommandSet;
use crate::core::viewport::Viewport;
use crate::physics::settings::{apply_settings_commands, SimulationSettings};

/// RNG behind every spawn draw. Seed it for reproducible layouts.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SpawnRng>() {
            app.insert_resource(SpawnRng::default());
        }
        app.add_systems(
            Update,
            handle_spawn_commands
                .in_set(CommandSet)
                .after(apply_settings_commands),
        );
    }
}

/// One random draw: kind uniform over circle / square / 3-5 sided polygon,
/// size uniform in `[size_min, size_max)`, color uniform over the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDraw {
    pub shape: SandboxShape,
    pub color: Color,
}

pub fn draw_shape(rng: &mut impl Rng, spawn: &SpawnConfig, palette: &[Color]) -> ShapeDraw {
    let kind = match rng.gen_range(0..3) {
        0 => ShapeKind::Circle,
        1 => ShapeKind::Square,
        _ => ShapeKind::Polygon {
            sides: rng.gen_range(3..=5),
        },
    };
    let size = sample(rng, spawn.size_min, spawn.size_max);
    let color = palette.choose(rng).copied().unwrap_or(Color::WHITE);
    ShapeDraw {
        shape: SandboxShape { kind, size },
        color,
    }
}

fn sample(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Random point in the top `fraction` of the viewport, inset by `margin` from the edges.
pub fn random_point_in_top_band(
    rng: &mut impl Rng,
    viewport: &Viewport,
    fraction: f32,
    margin: f32,
) -> Vec2 {
    let left = margin.min(viewport.width * 0.5);
    let right = (viewport.width - margin).max(left);
    let top = (viewport.height - margin).max(0.0);
    let bottom = (viewport.height * (1.0 - fraction.clamp(0.0, 1.0))).min(top);
    Vec2::new(sample(rng, left, right), sample(rng, bottom, top))
}

/// Registers one dynamic body with the engine using the *current* material settings.
pub fn spawn_shape(
    commands: &mut Commands,
    draw: ShapeDraw,
    position: Vec2,
    settings: &SimulationSettings,
    cfg: &SandboxConfig,
) -> Entity {
    let ShapeDraw { shape, color } = draw;
    let mass = shape.area() * cfg.material.density;
    commands
        .spawn((
            Name::new("SandboxShape"),
            SandboxBody,
            shape,
            BodyColor(color),
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Dynamic,
            shape.collider(),
            ColliderMassProperties::Mass(mass),
            Ccd::enabled(),
        ))
        .insert((
            settings.restitution(),
            settings.damping(&cfg.material),
            Friction::coefficient(cfg.material.friction),
            Velocity::zero(),
            ExternalForce::default(),
            ExternalImpulse::default(),
        ))
        .id()
}

/// Spawns `count` random shapes in the top `fraction` of the viewport.
pub fn spawn_batch(
    commands: &mut Commands,
    rng: &mut impl Rng,
    count: usize,
    fraction: f32,
    viewport: &Viewport,
    settings: &SimulationSettings,
    cfg: &SandboxConfig,
) -> Vec<Entity> {
    let palette = cfg.spawn.palette_colors();
    let margin = cfg.spawn.size_max * 0.5;
    (0..count)
        .map(|_| {
            let draw = draw_shape(rng, &cfg.spawn, &palette);
            let position = random_point_in_top_band(rng, viewport, fraction, margin);
            spawn_shape(commands, draw, position, settings, cfg)
        })
        .collect()
}

pub fn handle_spawn_commands(
    mut commands: Commands,
    mut events: EventReader<SandboxCommand>,
    mut rng: ResMut<SpawnRng>,
    settings: Res<SimulationSettings>,
    viewport: Res<Viewport>,
    cfg: Res<SandboxConfig>,
) {
    for ev in events.read() {
        match *ev {
            SandboxCommand::Spawn(position) => {
                let palette = cfg.spawn.palette_colors();
                let draw = draw_shape(&mut rng.0, &cfg.spawn, &palette);
                let entity = spawn_shape(&mut commands, draw, position, &settings, &cfg);
                debug!("Spawned {:?} at {:?} ({:?})", draw.shape.kind, position, entity);
            }
            SandboxCommand::SpawnBatch => {
                let spawned = spawn_batch(
                    &mut commands,
                    &mut rng.0,
                    cfg.spawn.batch_count,
                    cfg.spawn.batch_height_fraction,
                    &viewport,
                    &settings,
                    &cfg,
                );
                info!("Spawned batch of {} shapes", spawned.len());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_documented_distribution() {
        let spawn = SpawnConfig::default();
        let palette = spawn.palette_colors();
        let mut rng = StdRng::seed_from_u64(42);
        let mut kinds_seen = [false; 3];
        for _ in 0..300 {
            let draw = draw_shape(&mut rng, &spawn, &palette);
            assert!(draw.shape.size >= spawn.size_min && draw.shape.size < spawn.size_max);
            assert!(palette.contains(&draw.color));
            match draw.shape.kind {
                ShapeKind::Circle => kinds_seen[0] = true,
                ShapeKind::Square => kinds_seen[1] = true,
                ShapeKind::Polygon { sides } => {
                    assert!((3..=5).contains(&sides));
                    kinds_seen[2] = true;
                }
            }
        }
        assert_eq!(kinds_seen, [true; 3]);
    }

    #[test]
    fn degenerate_size_range_uses_minimum() {
        let spawn = SpawnConfig {
            size_min: 30.0,
            size_max: 30.0,
            ..default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let draw = draw_shape(&mut rng, &spawn, &[Color::BLACK]);
        assert_eq!(draw.shape.size, 30.0);
        assert_eq!(draw.color, Color::BLACK);
    }

    #[test]
    fn band_points_stay_in_top_of_viewport() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let p = random_point_in_top_band(&mut rng, &viewport, 0.2, 30.0);
            assert!(p.x >= 30.0 && p.x <= 770.0, "{p:?}");
            assert!(p.y >= 480.0 && p.y <= 570.0, "{p:?}");
        }
    }
}
