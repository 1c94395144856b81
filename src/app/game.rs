// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::commands::SandboxCommand;
use crate::core::config::{ConfigReport, SandboxConfig};
use crate::core::viewport::Viewport;
use crate::debug::DebugPlugin;
use crate::gameplay::spawn::SpawnerPlugin;
use crate::interaction::drag::DragBridgePlugin;
use crate::interaction::inputmap::plugin::InputActionsPlugin;
use crate::interaction::pointer::{PointerPlugin, PointerState};
use crate::physics::boundaries::BoundaryPlugin;
use crate::physics::driver::SimulationDriverPlugin;
use crate::physics::force_field::ForceFieldPlugin;
use crate::physics::settings::ParameterStorePlugin;
use crate::rendering::RenderingPlugin;

/// The orchestration layer without windowing, input devices, or rendering.
/// `headless()` also leaves out the Rapier backend.
pub struct SandboxCorePlugin {
    pub physics_backend: bool,
}

impl Default for SandboxCorePlugin {
    fn default() -> Self {
        Self {
            physics_backend: true,
        }
    }
}

impl SandboxCorePlugin {
    pub fn headless() -> Self {
        Self {
            physics_backend: false,
        }
    }
}

impl Plugin for SandboxCorePlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with(SandboxConfig::default)
            .clone();
        if !app.world().contains_resource::<Viewport>() {
            app.insert_resource(Viewport::new(cfg.window.width, cfg.window.height));
        }
        app.add_event::<SandboxCommand>()
            .add_event::<WindowResized>()
            .init_resource::<PointerState>()
            .init_resource::<ConfigReport>()
            .add_systems(Startup, log_config_report)
            .add_plugins((
                SimulationDriverPlugin {
                    physics_backend: self.physics_backend,
                },
                ParameterStorePlugin,
                BoundaryPlugin,
                SpawnerPlugin,
                ForceFieldPlugin,
                DragBridgePlugin,
            ));
    }
}

/// Full interactive sandbox: core plus pointer tracking, key bindings, visuals, debug.
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SandboxCorePlugin::default(),
            PointerPlugin,
            InputActionsPlugin,
            RenderingPlugin,
            DebugPlugin,
        ));
    }
}

fn log_config_report(report: Res<ConfigReport>, cfg: Res<SandboxConfig>) {
    for path in &report.used {
        info!("Config layer loaded: {path}");
    }
    for err in &report.errors {
        warn!("Config: {err}");
    }
    for warning in cfg.validate() {
        warn!("Config validation: {warning}");
    }
}
