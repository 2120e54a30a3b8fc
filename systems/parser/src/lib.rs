#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure command protocol that turns raw player text into world commands.

use fountain_core::{Command, Direction};

/// Player intent recognised from a single line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Walk one room in the given direction.
    Move(Direction),
    /// Reactivate the fountain in the current room.
    ActivateFountain,
    /// Fire an arrow into the neighbouring room in the given direction.
    Shoot(Direction),
    /// Show the command reference.
    Help,
    /// Anything the grammar does not recognise.
    Invalid,
}

impl Intent {
    /// Parses a line using case-insensitive exact phrase matching.
    ///
    /// Surrounding whitespace is significant: `" move north"` is invalid.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let lowered = line.to_lowercase();
        match lowered.as_str() {
            "enable fountain" => return Self::ActivateFountain,
            "help" => return Self::Help,
            _ => {}
        }

        if let Some(direction) = lowered.strip_prefix("move ").and_then(direction_named) {
            return Self::Move(direction);
        }
        if let Some(direction) = lowered.strip_prefix("shoot ").and_then(direction_named) {
            return Self::Shoot(direction);
        }
        Self::Invalid
    }

    /// Translates the intent into the world command that executes it.
    ///
    /// Returns `None` for [`Intent::Invalid`], which never reaches the world.
    #[must_use]
    pub const fn into_command(self) -> Option<Command> {
        match self {
            Self::Move(direction) => Some(Command::Move { direction }),
            Self::ActivateFountain => Some(Command::ActivateFountain),
            Self::Shoot(direction) => Some(Command::Shoot { direction }),
            Self::Help => Some(Command::Help),
            Self::Invalid => None,
        }
    }
}

fn direction_named(name: &str) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|direction| direction.name() == name)
}
