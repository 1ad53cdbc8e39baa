// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for images, fonts and settings files.

pub mod font;
pub mod media;
pub mod serialization;
