// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{SandboxCorePlugin, SandboxPlugin};
pub use app::state::WorldPhase;
pub use core::commands::{ForceFieldMode, SandboxCommand};
pub use core::components::{BodyColor, Boundary, BoundarySide, SandboxBody, SandboxShape, ShapeKind};
pub use core::config::SandboxConfig;
pub use core::viewport::Viewport;
pub use gameplay::spawn::SpawnRng;
pub use interaction::drag::PointerConstraint;
pub use interaction::pointer::PointerState;
pub use physics::settings::SimulationSettings;
