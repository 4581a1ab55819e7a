//! Fan-in strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::FanInError;

/// How coordination tasks are arranged for two or more inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Balanced binary tree of 2-way races, one task per internal node.
    #[default]
    Tree,

    /// A single task racing every input at once.
    Flat,
}

impl Strategy {
    /// Name used in logs and accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Tree => "tree",
            Strategy::Flat => "flat",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = FanInError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("tree") {
            Ok(Strategy::Tree)
        } else if name.eq_ignore_ascii_case("flat") {
            Ok(Strategy::Flat)
        } else {
            Err(FanInError::UnknownStrategy(name.to_string()))
        }
    }
}
