// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod config;

pub use config::{
    ConfigReport, DragConfig, ForceFieldConfig, GravityConfig, MaterialConfig, SandboxConfig, SpawnConfig,
    WindowConfig, WorldConfig,
};
