//! Edit action queue
//!
//! Edits arrive between ticks and are held here until the driver applies
//! them at the start of the next tick, so an edit never interleaves with a
//! step in progress.
//!
//! Applied actions are also kept in a bounded history, which is enough to
//! rebuild a layout by replaying it onto a fresh grid.

use crate::editor::Tool;
use crate::grid::Coord;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Edit request from the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    /// Apply a tool to one cell
    Place {
        coord: Coord,
        tool: Tool,
        /// Wall material name; ignored by every other tool
        #[serde(default)]
        material: Option<String>,
    },
    /// Flip every radiator's switch
    ToggleRadiators,
}

impl EditAction {
    /// Place any tool that needs no material
    pub fn place(coord: Coord, tool: Tool) -> Self {
        EditAction::Place {
            coord,
            tool,
            material: None,
        }
    }

    /// Place a wall of the named material
    pub fn wall(coord: Coord, material: &str) -> Self {
        EditAction::Place {
            coord,
            tool: Tool::Wall,
            material: Some(material.to_string()),
        }
    }
}

/// Pending edits plus a bounded history of applied ones
#[derive(Debug)]
pub struct EditQueue {
    /// Actions waiting for the next tick
    pending: Vec<EditAction>,
    /// Actions applied during the current tick
    applied_this_tick: Vec<EditAction>,
    /// Applied actions, oldest first
    history: VecDeque<EditAction>,
    /// Maximum history size (oldest actions are removed)
    max_history: usize,
}

impl Default for EditQueue {
    fn default() -> Self {
        Self::new(10000)
    }
}

impl EditQueue {
    /// Create a new queue with specified history limit
    pub fn new(max_history: usize) -> Self {
        Self {
            pending: Vec::with_capacity(32),
            applied_this_tick: Vec::with_capacity(32),
            history: VecDeque::with_capacity(max_history.min(1024)),
            max_history,
        }
    }

    /// Queue an action for the next tick
    pub fn submit(&mut self, action: EditAction) {
        self.pending.push(action);
    }

    pub fn pending(&self) -> &[EditAction] {
        &self.pending
    }

    pub fn applied_this_tick(&self) -> &[EditAction] {
        &self.applied_this_tick
    }

    pub fn history(&self) -> impl Iterator<Item = &EditAction> + '_ {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Clear the per-tick list at the start of each tick
    pub fn begin_tick(&mut self) {
        self.applied_this_tick.clear();
    }

    /// Take all pending actions for processing
    pub fn take_pending(&mut self) -> Vec<EditAction> {
        std::mem::take(&mut self.pending)
    }

    /// Record an applied action
    pub fn mark_applied(&mut self, action: EditAction) {
        self.applied_this_tick.push(action.clone());
        self.history.push_back(action);

        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
    }

    /// Drop everything (grid rebuild)
    pub fn clear(&mut self) {
        self.pending.clear();
        self.applied_this_tick.clear();
        self.history.clear();
    }
}
