//! Edit tools

use crate::core_types::CellKind;
use crate::error::ToolParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tool applied to a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Erase,
    /// Needs a material name for its resistance
    Wall,
    Window,
    Door,
    Radiator,
    Curtain,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Erase,
        Tool::Wall,
        Tool::Window,
        Tool::Door,
        Tool::Radiator,
        Tool::Curtain,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Tool::Erase => "erase",
            Tool::Wall => "wall",
            Tool::Window => "window",
            Tool::Door => "door",
            Tool::Radiator => "radiator",
            Tool::Curtain => "curtain",
        }
    }

    /// Cell kind the tool leaves behind
    pub const fn kind(self) -> CellKind {
        match self {
            Tool::Erase => CellKind::Empty,
            Tool::Wall => CellKind::Wall,
            Tool::Window => CellKind::Window,
            Tool::Door => CellKind::Door,
            Tool::Radiator => CellKind::Radiator,
            Tool::Curtain => CellKind::Curtain,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ToolParseError::UnknownTool(s.to_string()))
    }
}
