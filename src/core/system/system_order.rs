// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. InputSet (key bindings / pointer -> `SandboxCommand`)
//! 2. CommandSet (parameter store, spawner, pulse, lifecycle consume commands)
//! 3. PrePhysicsSet (continuous force field, drag anchor follow)
//! 4. Rapier step (PostUpdate, handled by the plugin)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CommandSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // forces applied before the physics step
