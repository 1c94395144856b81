// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

/// World lifecycle. Running -> Resetting -> Running.
/// Pausing is a time scale of zero, not a state.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum WorldPhase {
    /// Normal simulation; force field and drag systems only run here.
    #[default]
    Running,
    /// Entered for a single frame while the world is cleared and repopulated.
    Resetting,
}
