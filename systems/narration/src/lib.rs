#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns world events into classified notifications.
//!
//! The narrator is the only place that produces player-facing text. Adapters
//! decide how each [`Category`] is presented.

use fountain_core::{
    Category, DeathCause, Direction, Event, Location, Notification, Outcome, PlayerSnapshot,
};

/// Separator printed between turns.
pub const TURN_SEPARATOR: &str = "----------------------------------------------------------------------------------";

/// Stateless translator from events to notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct Narrator;

impl Narrator {
    /// Creates a new narrator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends notifications for every event that the player should see.
    pub fn handle(&self, events: &[Event], out: &mut Vec<Notification>) {
        out.extend(events.iter().filter_map(|event| self.describe(event)));
    }

    /// Describes a single event, or `None` for events with no visible effect.
    #[must_use]
    pub fn describe(&self, event: &Event) -> Option<Notification> {
        let notification = match event {
            // The next room description already reports the new location.
            Event::PlayerMoved { .. } => return None,
            Event::MovementBlocked { direction, .. } => Notification::new(
                Category::Warning,
                format!("There is a wall to the {}. You cannot move that way.", direction.name()),
            ),
            Event::FountainActivated {
                already_active: false,
                ..
            } => Notification::new(Category::Success, "You activated the Fountain of Objects!"),
            Event::FountainActivated {
                already_active: true,
                ..
            } => Notification::new(Category::Success, "The Fountain of Objects is already flowing."),
            Event::FountainNotHere { .. } => {
                Notification::new(Category::Warning, "The fountain is not in this room.")
            }
            Event::OutOfArrows => Notification::new(Category::Warning, "You have no arrows left."),
            Event::MonsterHit {
                kind,
                remaining_health,
                arrows_remaining,
                ..
            } => {
                let effect = if *remaining_health == 0 {
                    format!("The {} has been slain.", kind.name())
                } else {
                    format!("The {} is wounded.", kind.name())
                };
                Notification::new(
                    Category::Success,
                    format!("Your arrow strikes the {}! {effect} {}", kind.name(), arrows_left(*arrows_remaining)),
                )
            }
            Event::ShotMissed {
                arrows_remaining, ..
            } => Notification::new(
                Category::Info,
                format!("Your arrow missed. {}", arrows_left(*arrows_remaining)),
            ),
            Event::HelpRequested => Notification::new(Category::Info, help_text()),
            Event::PlayerSwept { to, .. } => Notification::new(
                Category::Danger,
                format!("A maelstrom sweeps you away to {}.", room_name(*to)),
            ),
            Event::MonsterRelocated { kind, .. } => Notification::new(
                Category::Info,
                format!("The {} drifts off to another room.", kind.name()),
            ),
            Event::PlayerDamaged { cause, .. } => {
                Notification::new(Category::Danger, format!("You {}!", cause_phrase(*cause)))
            }
            // Defeat is reported once the turn has been evaluated.
            Event::PlayerDied { .. } => return None,
        };
        Some(notification)
    }

    /// Describes the room the player is standing in.
    #[must_use]
    pub fn room_status(&self, player: &PlayerSnapshot) -> Notification {
        Notification::new(
            Category::Status,
            format!("You are in the room at {}. {}", room_name(player.location), arrows_left(player.arrows)),
        )
    }

    /// Asks the player for the next command.
    #[must_use]
    pub fn prompt(&self) -> Notification {
        Notification::new(Category::Prompt, "What do you want to do? ")
    }

    /// Rejects unrecognised input without consuming a turn.
    #[must_use]
    pub fn invalid_command(&self, line: &str) -> Notification {
        Notification::new(
            Category::Warning,
            format!("I don't understand \"{line}\". Type \"help\" for a list of commands."),
        )
    }

    /// Announces the end of the session.
    #[must_use]
    pub fn outcome(&self, outcome: Outcome) -> Notification {
        match outcome {
            Outcome::Won => Notification::new(
                Category::Success,
                "The Fountain of Objects has been reactivated, and you have escaped with your life! You win!",
            ),
            Outcome::Lost { cause: Some(cause) } => Notification::new(
                Category::Danger,
                format!("Cause of death: {}. You lose.", cause.label()),
            ),
            Outcome::Lost { cause: None } => Notification::new(Category::Danger, "You died. You lose."),
            Outcome::Abandoned => Notification::new(Category::Info, "You leave the caverns behind."),
        }
    }

    /// Summarises the length of a finished session.
    #[must_use]
    pub fn summary(&self, turns: u32) -> Notification {
        let plural = if turns == 1 { "" } else { "s" };
        Notification::new(Category::Info, format!("You spent {turns} turn{plural} in the caverns."))
    }
}

fn room_name(location: Location) -> String {
    format!("(Row={}, Column={})", location.row(), location.column())
}

fn arrows_left(arrows: u32) -> String {
    match arrows {
        1 => "You have 1 arrow left.".to_owned(),
        count => format!("You have {count} arrows left."),
    }
}

fn cause_phrase(cause: DeathCause) -> String {
    match cause {
        DeathCause::FellIntoPit => cause.label().to_owned(),
        DeathCause::MauledByAmarok => format!("were {}", cause.label()),
    }
}

fn help_text() -> String {
    let mut text = String::from("Commands:");
    for direction in Direction::ALL {
        text.push_str(&format!("\n  move {0:<6} walk into the room to the {0}", direction.name()));
    }
    for direction in Direction::ALL {
        text.push_str(&format!("\n  shoot {0:<5} fire an arrow into the room to the {0}", direction.name()));
    }
    text.push_str("\n  enable fountain  reactivate the Fountain of Objects");
    text.push_str("\n  help             show this list");
    text
}
