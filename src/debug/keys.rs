// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

use crate::interaction::inputmap::types::{InputMap, SandboxAction};

pub fn debug_key_input_system(
    input_map: Option<Res<InputMap>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    let (Some(input_map), Some(mut ctx)) = (input_map, ctx) else {
        return;
    };
    if input_map.just_pressed(SandboxAction::ToggleDebugRender) {
        ctx.enabled = !ctx.enabled;
        info!("Rapier wireframe {}", if ctx.enabled { "on" } else { "off" });
    }
}
