// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod boundaries;
pub mod driver;
pub mod force_field;
pub mod settings;
