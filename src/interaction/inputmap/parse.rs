// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::*;
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

/// Shipped bindings; used when the config file is missing or unreadable.
pub const DEFAULT_INPUT_TOML: &str = include_str!("../../../assets/config/input.toml");

#[derive(Debug, Default)]
pub struct ParsedInputConfig {
    pub input_map: InputMap,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    bindings: Option<HashMap<String, Vec<String>>>,
    debug: Option<DebugToml>,
}

#[derive(Debug, serde::Deserialize)]
struct DebugToml {
    bindings: Option<HashMap<String, Vec<String>>>,
}

/// Parses a bindings file. Bad entries are reported in `errors` and skipped; the rest load.
/// `debug_layer` also merges `[debug.bindings]`.
pub fn parse_input_toml(raw: &str, debug_layer: bool) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };

    let mut all_bindings: Vec<(String, Vec<String>)> = Vec::new();
    if let Some(b) = root.bindings {
        all_bindings.extend(b);
    }
    if debug_layer {
        if let Some(db) = root.debug.and_then(|d| d.bindings) {
            all_bindings.extend(db);
        }
    }
    // HashMap order is arbitrary; keep binding order stable for shadowing and tests.
    all_bindings.sort_by(|a, b| a.0.cmp(&b.0));

    for (action_name, list) in all_bindings {
        let Some(action) = SandboxAction::from_name(&action_name) else {
            result
                .errors
                .push(format!("Binding references unknown action '{action_name}'"));
            continue;
        };
        for spec in &list {
            match parse_binding(spec) {
                Ok(mut tokens) => {
                    canonical_sort_tokens(&mut tokens);
                    result.input_map.bind(action, tokens);
                }
                Err(err) => result
                    .errors
                    .push(format!("[binding {action_name} '{spec}'] {err}")),
            }
        }
    }
    result
}

fn canonical_sort_tokens(tokens: &mut Chord) {
    tokens.sort_by_key(token_sort_key);
}

fn token_sort_key(t: &RawBindingToken) -> (u8, String) {
    match t {
        RawBindingToken::Key(k) => (0, format!("{k:?}")),
        RawBindingToken::MouseBtn(b) => (1, format!("{b:?}")),
    }
}

fn parse_binding(spec: &str) -> Result<Chord, String> {
    let mut tokens = Chord::new();
    let mut seen: HashSet<RawBindingToken> = HashSet::new();
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        let token = parse_token(p)?;
        if !seen.insert(token) {
            return Err(format!("Duplicate token in chord: {token:?}"));
        }
        tokens.push(token);
    }
    if tokens.is_empty() {
        return Err("Empty binding".into());
    }
    Ok(tokens)
}

fn parse_token(s: &str) -> Result<RawBindingToken, String> {
    if let Some(rest) = s.strip_prefix("Key:") {
        return parse_keycode(rest).map(RawBindingToken::Key);
    }
    if let Some(rest) = s.strip_prefix("Mouse:") {
        return match rest {
            "Left" => Ok(RawBindingToken::MouseBtn(MouseButton::Left)),
            "Right" => Ok(RawBindingToken::MouseBtn(MouseButton::Right)),
            "Middle" => Ok(RawBindingToken::MouseBtn(MouseButton::Middle)),
            other => Err(format!("Unknown mouse button '{other}'")),
        };
    }
    Err(format!("Unrecognized token '{s}'"))
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let letter = name.strip_prefix("Key").unwrap_or(name);
    if letter.len() == 1 {
        if let Some(code) = letter.chars().next().and_then(letter_keycode) {
            return Ok(code);
        }
    }
    let kc = match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "BracketLeft" => KeyCode::BracketLeft,
        "BracketRight" => KeyCode::BracketRight,
        "Minus" => KeyCode::Minus,
        "Equal" => KeyCode::Equal,
        "Comma" => KeyCode::Comma,
        "Period" => KeyCode::Period,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "AltLeft" => KeyCode::AltLeft,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        other => return Err(format!("Unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(kc)
}

fn letter_keycode(c: char) -> Option<KeyCode> {
    let kc = match c.to_ascii_uppercase() {
        'A' => KeyCode::KeyA,
        'B' => KeyCode::KeyB,
        'C' => KeyCode::KeyC,
        'D' => KeyCode::KeyD,
        'E' => KeyCode::KeyE,
        'F' => KeyCode::KeyF,
        'G' => KeyCode::KeyG,
        'H' => KeyCode::KeyH,
        'I' => KeyCode::KeyI,
        'J' => KeyCode::KeyJ,
        'K' => KeyCode::KeyK,
        'L' => KeyCode::KeyL,
        'M' => KeyCode::KeyM,
        'N' => KeyCode::KeyN,
        'O' => KeyCode::KeyO,
        'P' => KeyCode::KeyP,
        'Q' => KeyCode::KeyQ,
        'R' => KeyCode::KeyR,
        'S' => KeyCode::KeyS,
        'T' => KeyCode::KeyT,
        'U' => KeyCode::KeyU,
        'V' => KeyCode::KeyV,
        'W' => KeyCode::KeyW,
        'X' => KeyCode::KeyX,
        'Y' => KeyCode::KeyY,
        'Z' => KeyCode::KeyZ,
        _ => return None,
    };
    Some(kc)
}
