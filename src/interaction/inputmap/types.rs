// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Everything a key or mouse chord can trigger. Names are the TOML keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxAction {
    SpawnBatch,
    SpawnAtPointer,
    Pulse,
    ToggleAttraction,
    Reset,
    ZeroGravity,
    GravityUp,
    GravityDown,
    GravityLeft,
    GravityRight,
    TimeScaleUp,
    TimeScaleDown,
    BouncinessUp,
    BouncinessDown,
    AirDragUp,
    AirDragDown,
    /// Debug-only: Rapier wireframe overlay.
    ToggleDebugRender,
}

impl SandboxAction {
    pub const ALL: [SandboxAction; 17] = [
        SandboxAction::SpawnBatch,
        SandboxAction::SpawnAtPointer,
        SandboxAction::Pulse,
        SandboxAction::ToggleAttraction,
        SandboxAction::Reset,
        SandboxAction::ZeroGravity,
        SandboxAction::GravityUp,
        SandboxAction::GravityDown,
        SandboxAction::GravityLeft,
        SandboxAction::GravityRight,
        SandboxAction::TimeScaleUp,
        SandboxAction::TimeScaleDown,
        SandboxAction::BouncinessUp,
        SandboxAction::BouncinessDown,
        SandboxAction::AirDragUp,
        SandboxAction::AirDragDown,
        SandboxAction::ToggleDebugRender,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SandboxAction::SpawnBatch => "SpawnBatch",
            SandboxAction::SpawnAtPointer => "SpawnAtPointer",
            SandboxAction::Pulse => "Pulse",
            SandboxAction::ToggleAttraction => "ToggleAttraction",
            SandboxAction::Reset => "Reset",
            SandboxAction::ZeroGravity => "ZeroGravity",
            SandboxAction::GravityUp => "GravityUp",
            SandboxAction::GravityDown => "GravityDown",
            SandboxAction::GravityLeft => "GravityLeft",
            SandboxAction::GravityRight => "GravityRight",
            SandboxAction::TimeScaleUp => "TimeScaleUp",
            SandboxAction::TimeScaleDown => "TimeScaleDown",
            SandboxAction::BouncinessUp => "BouncinessUp",
            SandboxAction::BouncinessDown => "BouncinessDown",
            SandboxAction::AirDragUp => "AirDragUp",
            SandboxAction::AirDragDown => "AirDragDown",
            SandboxAction::ToggleDebugRender => "ToggleDebugRender",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawBindingToken {
    Key(KeyCode),
    MouseBtn(MouseButton),
}

pub type Chord = SmallVec<[RawBindingToken; 2]>;

#[derive(Debug, Clone)]
pub struct Binding {
    pub action: SandboxAction,
    pub tokens: Chord,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BindingRuntime {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct ActionStateBinary {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ActionStateBinary {
    pub fn clear_transitions(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct InputMap {
    pub bindings: Vec<Binding>,
    pub bindings_runtime: Vec<BindingRuntime>,
    pub states: HashMap<SandboxAction, ActionStateBinary>,
    pub frame_counter: u64,
}

impl InputMap {
    pub fn bind(&mut self, action: SandboxAction, tokens: Chord) {
        self.bindings.push(Binding { action, tokens });
        self.bindings_runtime.push(BindingRuntime::default());
    }

    pub fn bindings_for(&self, action: SandboxAction) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(move |b| b.action == action)
    }

    pub fn pressed(&self, action: SandboxAction) -> bool {
        self.states.get(&action).is_some_and(|s| s.pressed)
    }

    pub fn just_pressed(&self, action: SandboxAction) -> bool {
        self.states.get(&action).is_some_and(|s| s.just_pressed)
    }

    pub fn just_released(&self, action: SandboxAction) -> bool {
        self.states.get(&action).is_some_and(|s| s.just_released)
    }

    /// Advances every binding from the raw token state and folds the result into actions.
    /// A chord that is a strict subset of another active chord is shadowed, so `Shift+B`
    /// does not also fire `B`.
    pub fn evaluate(&mut self, is_down: impl Fn(RawBindingToken) -> bool) {
        self.frame_counter += 1;
        if self.bindings_runtime.len() < self.bindings.len() {
            self.bindings_runtime
                .resize(self.bindings.len(), BindingRuntime::default());
        }
        for state in self.states.values_mut() {
            state.clear_transitions();
        }
        let all_down: Vec<bool> = self
            .bindings
            .iter()
            .map(|b| b.tokens.iter().all(|t| is_down(*t)))
            .collect();
        for (idx, binding) in self.bindings.iter().enumerate() {
            let shadowed = self.bindings.iter().enumerate().any(|(other_idx, other)| {
                all_down[other_idx]
                    && other.tokens.len() > binding.tokens.len()
                    && binding.tokens.iter().all(|t| other.tokens.contains(t))
            });
            let active = all_down[idx] && !shadowed;
            let rt = &mut self.bindings_runtime[idx];
            rt.just_pressed = active && !rt.active;
            rt.just_released = !active && rt.active;
            rt.active = active;
        }
        for (binding, rt) in self.bindings.iter().zip(&self.bindings_runtime) {
            let state = self.states.entry(binding.action).or_default();
            if rt.just_pressed {
                state.just_pressed = true;
            }
            if rt.just_released {
                state.just_released = true;
            }
        }
        // An action stays pressed while any of its chords is held.
        for (action, state) in self.states.iter_mut() {
            let held = self
                .bindings
                .iter()
                .zip(&self.bindings_runtime)
                .any(|(b, rt)| b.action == *action && rt.active);
            state.pressed = held;
        }
    }
}
