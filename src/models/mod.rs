// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session data model: configuration, scaling, history and the
//! interaction state machine.

pub mod config;
pub mod history;
pub mod scaling;
pub mod session;
