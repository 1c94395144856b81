// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::input::InputSystem;
use bevy::prelude::*;

use super::parse::{parse_input_toml, DEFAULT_INPUT_TOML};
use super::systems::{emit_sandbox_commands, system_evaluate_bindings};
use super::types::InputMap;
use crate::core::system::system_order::InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub const INPUT_CONFIG_ENV: &str = "INPUT_CONFIG_PATH";
pub const DEFAULT_INPUT_CONFIG_PATH: &str = "assets/config/input.toml";

pub struct InputActionsPlugin;

impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputMap>()
            .configure_sets(PreUpdate, InputActionUpdateSet.after(InputSystem))
            .add_systems(PreStartup, load_initial_input_map)
            .add_systems(
                PreUpdate,
                system_evaluate_bindings.in_set(InputActionUpdateSet),
            )
            .add_systems(Update, emit_sandbox_commands.in_set(InputSet));
    }
}

fn load_initial_input_map(mut commands: Commands) {
    let path = std::env::var(INPUT_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_INPUT_CONFIG_PATH.into());
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Input map {path} unreadable ({e}); using built-in bindings");
            DEFAULT_INPUT_TOML.to_string()
        }
    };
    let parsed = parse_input_toml(&raw, cfg!(feature = "debug"));
    if parsed.errors.is_empty() {
        info!("Input map loaded: {} bindings", parsed.input_map.bindings.len());
    } else {
        for e in &parsed.errors {
            error!("INPUT MAP ERROR: {e}");
        }
    }
    commands.insert_resource(parsed.input_map);
}
