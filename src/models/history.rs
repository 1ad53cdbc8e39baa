// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Linear undo/redo history of bitmap snapshots.
//!
//! Every entry is a complete bitmap plus the label number the next commit
//! will use. Undo and redo only move the position; pushing after an undo
//! drops the redo tail.

use image::RgbaImage;

/// One committed state of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub bitmap: RgbaImage,
    pub next_number: i64,
}

impl HistoryEntry {
    pub fn new(bitmap: RgbaImage, next_number: i64) -> Self {
        Self { bitmap, next_number }
    }
}

/// History system for undo/redo functionality.
///
/// Never empty: it is created from the zero-edit entry of a loaded image.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    /// Index of the current entry, always `< entries.len()`
    position: usize,
}

impl HistoryStack {
    /// Start a history with a single entry at position 0.
    pub fn new(initial: HistoryEntry) -> Self {
        Self {
            entries: vec![initial],
            position: 0,
        }
    }

    /// Discard the redo tail, append `entry` and make it current.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.position + 1);
        self.entries.push(entry);
        self.position = self.entries.len() - 1;
    }

    /// Step back one entry. Returns `None` at the start of history.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.position -= 1;
        Some(&self.entries[self.position])
    }

    /// Step forward one entry. Returns `None` at the end of history.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.position += 1;
        Some(&self.entries[self.position])
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
