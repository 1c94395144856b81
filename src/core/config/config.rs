// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Neon Physics Sandbox".into(),
        }
    }
}

/// Gravity in g units, screen convention: positive `y` pulls toward the bottom of the viewport.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub x: f32,
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { x: 0.0, y: 1.0 }
    }
}
impl GravityConfig {
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub pixels_per_meter: f32,
    pub gravity: GravityConfig,
    pub gravity_scale: f32,
    pub time_scale: f32,
    pub wall_thickness: f32,
}
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity: GravityConfig::default(),
            gravity_scale: 980.0,
            time_scale: 1.0,
            wall_thickness: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MaterialConfig {
    pub bounciness: f32,
    /// Per-step drag fraction; converted to Rapier damping through `air_drag_scale`.
    pub air_drag: f32,
    pub air_drag_scale: f32,
    pub friction: f32,
    pub density: f32,
}
impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            bounciness: 0.9,
            air_drag: 0.01,
            air_drag_scale: 60.0,
            friction: 0.1,
            density: 0.001,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub initial_count: usize,
    pub batch_count: usize,
    pub size_min: f32,
    pub size_max: f32,
    /// Initial batch lands in the top `initial_height_fraction` of the viewport.
    pub initial_height_fraction: f32,
    pub batch_height_fraction: f32,
    pub palette: Vec<String>,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_count: 15,
            batch_count: 5,
            size_min: 20.0,
            size_max: 60.0,
            initial_height_fraction: 0.5,
            batch_height_fraction: 0.2,
            palette: ["#00f0ff", "#ff0055", "#ccff00", "#aa00ff", "#ffffff"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
impl SpawnConfig {
    /// Parsed palette; entries that fail to parse are dropped (reported by `validate`).
    pub fn palette_colors(&self) -> Vec<Color> {
        let colors: Vec<Color> = self
            .palette
            .iter()
            .filter_map(|hex| Srgba::hex(hex).ok().map(Color::from))
            .collect();
        if colors.is_empty() {
            vec![Color::WHITE]
        } else {
            colors
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForceFieldConfig {
    /// Attraction force per unit mass per pixel of distance to the pointer.
    pub attract_strength: f32,
    /// Pulse impulse per unit mass (px/s of velocity change).
    pub pulse_strength: f32,
}
impl Default for ForceFieldConfig {
    fn default() -> Self {
        Self {
            attract_strength: 50.0,
            pulse_strength: 800.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    /// Spring joint between the pointer anchor and the grabbed body.
    pub stiffness: f32,
    pub damping: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 200.0,
            damping: 25.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub material: MaterialConfig,
    pub spawn: SpawnConfig,
    pub forces: ForceFieldConfig,
    pub drag: DragConfig,
}

impl SandboxConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Loads every readable file in order and deep-merges them, later files winning per key.
    /// Returns the merged config, the files that contributed, and any read/parse errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut merged: Option<ron::Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path = p.as_ref();
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path.display()));
                    continue;
                }
            };
            match ron::from_str::<ron::Value>(&text) {
                Ok(layer) => {
                    match merged.as_mut() {
                        Some(base) => merge_ron(base, layer),
                        None => merged = Some(layer),
                    }
                    used.push(path.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path.display())),
            }
        }
        let Some(value) = merged else {
            return (Self::default(), used, errors);
        };
        match value.into_rust::<SandboxConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("merged config rejected, using defaults: {e}"));
                (Self::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.world.pixels_per_meter <= 0.0 {
            w.push(format!(
                "world.pixels_per_meter {} must be > 0",
                self.world.pixels_per_meter
            ));
        }
        if self.world.wall_thickness <= 0.0 {
            w.push("world.wall_thickness must be > 0 or bodies can tunnel out".into());
        }
        if self.world.time_scale < 0.0 {
            w.push(format!("world.time_scale {} negative", self.world.time_scale));
        }
        if !(0.0..=1.0).contains(&self.material.bounciness) {
            w.push(format!(
                "material.bounciness {} outside 0..1 (accepted as-is)",
                self.material.bounciness
            ));
        }
        if self.material.air_drag < 0.0 {
            w.push(format!(
                "material.air_drag {} negative -> bodies gain energy",
                self.material.air_drag
            ));
        }
        if self.material.density <= 0.0 {
            w.push("material.density must be > 0 (force fields scale with mass)".into());
        }
        if self.spawn.size_min <= 0.0 {
            w.push("spawn.size_min must be > 0".into());
        }
        if self.spawn.size_min >= self.spawn.size_max {
            w.push(format!(
                "spawn size range empty: min {} >= max {}",
                self.spawn.size_min, self.spawn.size_max
            ));
        }
        for (label, fraction) in [
            ("spawn.initial_height_fraction", self.spawn.initial_height_fraction),
            ("spawn.batch_height_fraction", self.spawn.batch_height_fraction),
        ] {
            if !(0.0..=1.0).contains(&fraction) {
                w.push(format!("{label} {fraction} outside 0..1"));
            }
        }
        if self.spawn.initial_count == 0 {
            w.push("spawn.initial_count is 0; the world starts empty".into());
        }
        if self.spawn.palette.is_empty() {
            w.push("spawn.palette empty; falling back to white".into());
        }
        for hex in &self.spawn.palette {
            if Srgba::hex(hex).is_err() {
                w.push(format!("spawn.palette entry '{hex}' is not a hex color"));
            }
        }
        if self.forces.attract_strength < 0.0 {
            w.push("forces.attract_strength negative -> attraction repels".into());
        }
        if self.drag.enabled && self.drag.stiffness <= 0.0 {
            w.push("drag.stiffness must be > 0 when drag is enabled".into());
        }
        w
    }
}

/// Outcome of `load_layered`, kept so it can be logged once logging is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

fn merge_ron(base: &mut ron::Value, overlay: ron::Value) {
    use ron::Value;
    match (base, overlay) {
        (Value::Map(base_map), Value::Map(overlay_map)) => {
            for (key, value) in overlay_map.into_iter() {
                let mut pending = Some(value);
                for (existing_key, existing) in base_map.iter_mut() {
                    if *existing_key == key {
                        if let Some(v) = pending.take() {
                            merge_ron(existing, v);
                        }
                        break;
                    }
                }
                if let Some(v) = pending {
                    base_map.insert(key, v);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
