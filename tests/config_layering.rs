// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use neon_sandbox::SandboxConfig;

#[test]
fn later_layers_override_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("sandbox.ron");
    let local = dir.path().join("sandbox.local.ron");
    fs::write(
        &base,
        "(material: (bounciness: 0.5, air_drag: 0.02), spawn: (batch_count: 7))",
    )
    .unwrap();
    fs::write(&local, "(material: (air_drag: 0.05), world: (gravity: (x: 0.3)))").unwrap();

    let (cfg, used, errors) = SandboxConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.material.bounciness, 0.5);
    assert_eq!(cfg.material.air_drag, 0.05);
    assert_eq!(cfg.spawn.batch_count, 7);
    assert_eq!(cfg.world.gravity.x, 0.3);
    assert_eq!(cfg.world.gravity.y, 1.0);
    assert_eq!(cfg.spawn.initial_count, 15);
}

#[test]
fn missing_and_broken_layers_are_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.ron");
    let broken = dir.path().join("broken.ron");
    let missing = dir.path().join("missing.ron");
    fs::write(&good, "(spawn: (initial_count: 3))").unwrap();
    fs::write(&broken, "(spawn: (initial_count: ").unwrap();

    let (cfg, used, errors) = SandboxConfig::load_layered([&good, &broken, &missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert_eq!(cfg.spawn.initial_count, 3);
}

#[test]
fn no_layers_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, used, errors) = SandboxConfig::load_layered([dir.path().join("none.ron")]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg, SandboxConfig::default());
}

#[test]
fn shipped_config_loads_and_validates() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/sandbox.ron");
    let cfg = SandboxConfig::load_from_file(path).unwrap();
    assert_eq!(cfg, SandboxConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}
