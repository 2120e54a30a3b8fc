#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn engine that drives a session from prompt to verdict.
//!
//! A turn runs strictly in this order: describe the surroundings, read and
//! parse one command (re-prompting on invalid input), execute it, let live
//! monsters in the player's room retaliate, apply room hazards, and finally
//! evaluate the terminal conditions once against the resulting state.

use fountain_core::{Category, Command, Event, Notification, Outcome, RoomKind};
use fountain_system_narration::{Narrator, TURN_SEPARATOR};
use fountain_system_parser::Intent;
use fountain_system_senses::{SenseContext, Senses};
use fountain_world::{self as world, query, World};

/// Source of raw command lines.
pub trait Input {
    /// Blocks until a line is available; `None` signals end of input.
    fn read_line(&mut self) -> Option<String>;
}

/// Sink for classified messages.
pub trait Output {
    /// Presents a single message.
    fn emit(&mut self, text: &str, category: Category);
}

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for the player to enter a command.
    #[default]
    AwaitingCommand,
    /// A command is being executed together with its consequences.
    Resolving,
    /// The turn finished without a verdict.
    Continue,
    /// The player escaped with the fountain reactivated.
    Won,
    /// The player's health reached zero.
    Lost,
}

impl TurnState {
    /// Reports whether the session has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Evaluates the terminal conditions against the current world state.
///
/// Victory is checked before defeat, so a player who reaches the entrance with
/// the fountain active wins even when the same turn left them at zero health.
#[must_use]
pub fn evaluate(world: &World) -> TurnState {
    let player = query::player(world);
    if player.fountain_active && query::current_room(world) == RoomKind::Entrance {
        TurnState::Won
    } else if !player.is_alive() {
        TurnState::Lost
    } else {
        TurnState::Continue
    }
}

/// Orchestrates turns for a single session.
#[derive(Debug, Default)]
pub struct TurnEngine {
    senses: Senses,
    narrator: Narrator,
    state: TurnState,
    turns: u32,
    events: Vec<Event>,
    notifications: Vec<Notification>,
}

impl TurnEngine {
    /// Creates an engine awaiting the first command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of the state machine.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Number of commands that consumed a turn.
    #[must_use]
    pub const fn turns_taken(&self) -> u32 {
        self.turns
    }

    /// Appends the room description followed by every active sense.
    pub fn describe_surroundings(&self, world: &World, out: &mut Vec<Notification>) {
        let player = query::player(world);
        let monsters = query::monster_view(world);
        out.push(self.narrator.room_status(&player));

        let context = SenseContext {
            grid: query::grid(world),
            player: &player,
            monsters: &monsters,
        };
        self.senses.handle(&context, out);
    }

    /// Executes a command and every phase that follows it, without any I/O.
    ///
    /// Events produced by all phases are appended to `out_events` in order.
    pub fn resolve(&mut self, world: &mut World, command: Command, out_events: &mut Vec<Event>) -> TurnState {
        self.state = TurnState::Resolving;

        world::apply(world, command, out_events);
        world::apply(world, Command::ResolveRetaliation, out_events);
        world::apply(world, Command::ResolveHazards, out_events);

        self.turns = self.turns.saturating_add(1);
        self.state = evaluate(world);
        match self.state {
            TurnState::Won => tracing::info!(turns = self.turns, "session won"),
            TurnState::Lost => tracing::info!(turns = self.turns, "session lost"),
            _ => {}
        }
        self.state
    }

    /// Plays one full turn, re-prompting until a valid command arrives.
    ///
    /// Returns the session outcome once the turn ends it, or when input runs
    /// out.
    pub fn play_turn<I, O>(&mut self, world: &mut World, input: &mut I, output: &mut O) -> Option<Outcome>
    where
        I: Input,
        O: Output,
    {
        if let Some(outcome) = self.outcome(world) {
            return Some(outcome);
        }
        self.state = TurnState::AwaitingCommand;

        let command = loop {
            self.notifications.clear();
            self.notifications
                .push(Notification::new(Category::Status, TURN_SEPARATOR));
            let mut surroundings = Vec::new();
            self.describe_surroundings(world, &mut surroundings);
            self.notifications.append(&mut surroundings);
            self.notifications.push(self.narrator.prompt());
            emit_all(output, &self.notifications);

            let Some(line) = input.read_line() else {
                tracing::debug!("input ended");
                return Some(Outcome::Abandoned);
            };

            match Intent::parse(&line).into_command() {
                Some(command) => break command,
                None => {
                    tracing::debug!(line = line.as_str(), "invalid command");
                    let rejection = self.narrator.invalid_command(&line);
                    output.emit(&rejection.text, rejection.category);
                }
            }
        };

        let mut events = std::mem::take(&mut self.events);
        let _ = self.resolve(world, command, &mut events);

        self.notifications.clear();
        self.narrator.handle(&events, &mut self.notifications);
        emit_all(output, &self.notifications);
        events.clear();
        self.events = events;

        self.outcome(world)
    }

    /// Runs turns until the session ends, then announces the verdict.
    pub fn run<I, O>(&mut self, world: &mut World, input: &mut I, output: &mut O) -> Outcome
    where
        I: Input,
        O: Output,
    {
        let outcome = loop {
            if let Some(outcome) = self.play_turn(world, input, output) {
                break outcome;
            }
        };

        for notification in [self.narrator.outcome(outcome), self.narrator.summary(self.turns)] {
            output.emit(&notification.text, notification.category);
        }
        outcome
    }

    fn outcome(&self, world: &World) -> Option<Outcome> {
        match self.state {
            TurnState::Won => Some(Outcome::Won),
            TurnState::Lost => Some(Outcome::Lost {
                cause: query::player(world).cause_of_death,
            }),
            _ => None,
        }
    }
}

fn emit_all<O: Output>(output: &mut O, notifications: &[Notification]) {
    for notification in notifications {
        output.emit(&notification.text, notification.category);
    }
}
