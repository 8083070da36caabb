// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitcoach-cli
// ABOUTME: Provides access to session and history commands

pub mod history;
pub mod session;
