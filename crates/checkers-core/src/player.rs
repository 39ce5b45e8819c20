//! Player representation.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant in a game, identified by the color they play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub name: String,
}

impl Player {
    pub fn new(color: Color, name: impl Into<String>) -> Self {
        Player {
            color,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
