// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use neon_sandbox::core::config::ConfigReport;
use neon_sandbox::{SandboxConfig, SandboxPlugin, SpawnRng};

#[derive(Parser, Debug)]
#[command(name = "neon_sandbox", about = "Interactive 2D rigid-body sandbox")]
struct Cli {
    /// Base RON config; a sibling `sandbox.local.ron` is layered on top when present.
    #[arg(long, default_value = "assets/config/sandbox.ron")]
    config: PathBuf,
    /// Seed for the spawn RNG (reproducible layouts).
    #[arg(long)]
    seed: Option<u64>,
    /// Overrides `spawn.initial_count`.
    #[arg(long)]
    initial_count: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut layers = vec![cli.config.clone()];
    let local = cli.config.with_file_name("sandbox.local.ron");
    if local.exists() {
        layers.push(local);
    }
    let (mut cfg, used, errors) = SandboxConfig::load_layered(&layers);
    if let Some(count) = cli.initial_count {
        cfg.spawn.initial_count = count;
    }
    let rng = cli.seed.map(SpawnRng::seeded).unwrap_or_default();

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigReport { used, errors })
        .insert_resource(rng)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SandboxPlugin)
        .run();

    if let AppExit::Error(code) = exit {
        anyhow::bail!("sandbox exited with error code {code}");
    }
    Ok(())
}
