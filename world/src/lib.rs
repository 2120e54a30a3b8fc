#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for the Fountain of Objects.

mod grid;
mod monsters;
mod player;

use fountain_core::{
    Command, DeathCause, Direction, Event, Layout, Location, MonsterId, RoomKind, ARROW_DAMAGE,
    MAX_ROOMS, PIT_DAMAGE, WELCOME_BANNER,
};
use thiserror::Error;

pub use grid::{Grid, GridError};

use monsters::Monster;
use player::Player;

/// Reasons a layout cannot be turned into a world.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The grid would contain no rooms.
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
    /// The grid would contain more rooms than a session supports.
    #[error("grid of {rows}x{columns} exceeds the limit of {} rooms", MAX_ROOMS)]
    TooLarge {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
    /// The player would start the session without health.
    #[error("starting health must be at least 1")]
    NoStartingHealth,
    /// A feature was placed outside the grid.
    #[error("{feature} at (row {}, column {}) lies outside the grid", .location.row(), .location.column())]
    OutOfRange {
        /// Name of the misplaced feature.
        feature: &'static str,
        /// Offending location.
        location: Location,
    },
    /// Two room features were placed in the same room.
    #[error("{feature} at (row {}, column {}) overlaps another room feature", .location.row(), .location.column())]
    Overlap {
        /// Name of the feature that could not be placed.
        feature: &'static str,
        /// Offending location.
        location: Location,
    },
}

/// Represents the authoritative state of a single game session.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid: Grid,
    player: Player,
    monsters: Vec<Monster>,
}

impl World {
    /// Builds a fresh session from a layout description.
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        if layout.rows == 0 || layout.columns == 0 {
            return Err(LayoutError::EmptyGrid {
                rows: layout.rows,
                columns: layout.columns,
            });
        }

        let rooms = u64::from(layout.rows).checked_mul(u64::from(layout.columns));
        if rooms.map_or(true, |rooms| rooms > MAX_ROOMS) {
            return Err(LayoutError::TooLarge {
                rows: layout.rows,
                columns: layout.columns,
            });
        }
        if layout.starting_health == 0 {
            return Err(LayoutError::NoStartingHealth);
        }

        let mut grid = Grid::new(layout.rows, layout.columns);
        place_room(&mut grid, "entrance", layout.entrance, RoomKind::Entrance)?;
        if let Some(fountain) = layout.fountain {
            place_room(&mut grid, "fountain", fountain, RoomKind::FountainRoom)?;
        }
        for &pit in &layout.pits {
            place_room(&mut grid, "pit", pit, RoomKind::Pit)?;
        }

        let start = layout.player_start.unwrap_or(layout.entrance);
        if !grid.in_range(start) {
            return Err(LayoutError::OutOfRange {
                feature: "player start",
                location: start,
            });
        }

        let mut monsters = Vec::with_capacity(layout.monsters.len());
        for (index, placement) in layout.monsters.iter().enumerate() {
            if !grid.in_range(placement.location) {
                return Err(LayoutError::OutOfRange {
                    feature: placement.kind.name(),
                    location: placement.location,
                });
            }
            let id = MonsterId::new(u32::try_from(index).unwrap_or(u32::MAX));
            monsters.push(Monster::from_placement(id, *placement));
        }

        tracing::debug!(
            rows = layout.rows,
            columns = layout.columns,
            monsters = monsters.len(),
            "world created"
        );

        Ok(Self {
            banner: WELCOME_BANNER,
            grid,
            player: Player::new(start, layout.starting_health, layout.starting_arrows),
            monsters,
        })
    }
}

fn place_room(
    grid: &mut Grid,
    feature: &'static str,
    location: Location,
    kind: RoomKind,
) -> Result<(), LayoutError> {
    if grid.room_kind(location) != RoomKind::Empty {
        return Err(LayoutError::Overlap { feature, location });
    }
    grid.set_room_kind(location, kind)
        .map_err(|_| LayoutError::OutOfRange { feature, location })
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    tracing::debug!(?command, "applying command");

    match command {
        Command::Move { direction } => {
            execute_move(&world.grid, &mut world.player, direction, out_events);
        }
        Command::ActivateFountain => {
            execute_activate_fountain(&world.grid, &mut world.player, out_events);
        }
        Command::Shoot { direction } => {
            execute_shoot(
                &world.grid,
                &mut world.player,
                &mut world.monsters,
                direction,
                out_events,
            );
        }
        Command::Help => out_events.push(Event::HelpRequested),
        Command::ResolveRetaliation => {
            resolve_retaliation(&world.grid, &mut world.player, &mut world.monsters, out_events);
        }
        Command::ResolveHazards => {
            resolve_hazards(&world.grid, &mut world.player, out_events);
        }
    }
}

fn execute_move(grid: &Grid, player: &mut Player, direction: Direction, out_events: &mut Vec<Event>) {
    let from = player.location;
    match from.step(direction).filter(|target| grid.in_range(*target)) {
        Some(to) => {
            player.location = to;
            out_events.push(Event::PlayerMoved { from, to });
        }
        None => out_events.push(Event::MovementBlocked {
            at: from,
            direction,
        }),
    }
}

fn execute_activate_fountain(grid: &Grid, player: &mut Player, out_events: &mut Vec<Event>) {
    let at = player.location;
    if grid.room_kind(at) != RoomKind::FountainRoom {
        out_events.push(Event::FountainNotHere { at });
        return;
    }

    let already_active = player.activate_fountain();
    if !already_active {
        tracing::info!(row = at.row(), column = at.column(), "fountain activated");
    }
    out_events.push(Event::FountainActivated { at, already_active });
}

fn execute_shoot(
    grid: &Grid,
    player: &mut Player,
    monsters: &mut [Monster],
    direction: Direction,
    out_events: &mut Vec<Event>,
) {
    let Some(arrows_remaining) = player.draw_arrow() else {
        out_events.push(Event::OutOfArrows);
        return;
    };

    let target = player
        .location
        .step(direction)
        .filter(|target| grid.in_range(*target));

    let victim = target.and_then(|target| {
        monsters
            .iter_mut()
            .find(|monster| monster.is_alive() && monster.location == target)
    });

    match victim {
        Some(monster) => {
            let remaining_health = monster.take_damage(ARROW_DAMAGE);
            out_events.push(Event::MonsterHit {
                monster: monster.id,
                kind: monster.kind,
                remaining_health,
                arrows_remaining,
            });
        }
        None => out_events.push(Event::ShotMissed {
            target,
            arrows_remaining,
        }),
    }
}

fn resolve_retaliation(
    grid: &Grid,
    player: &mut Player,
    monsters: &mut [Monster],
    out_events: &mut Vec<Event>,
) {
    for monster in monsters.iter_mut() {
        if monster.is_alive() && monster.location == player.location {
            monster.attack(grid, player, out_events);
        }
    }
}

fn resolve_hazards(grid: &Grid, player: &mut Player, out_events: &mut Vec<Event>) {
    if grid.room_kind(player.location) == RoomKind::Pit {
        player.suffer(PIT_DAMAGE, DeathCause::FellIntoPit, out_events);
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use fountain_core::{GridView, MonsterView, PlayerSnapshot, RoomKind};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides a read-only view of the room grid.
    #[must_use]
    pub fn grid(world: &World) -> GridView<'_> {
        world.grid.view()
    }

    /// Captures the player's current state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        world.player.snapshot()
    }

    /// Captures every monster in collection order, dead ones included.
    #[must_use]
    pub fn monster_view(world: &World) -> MonsterView {
        MonsterView::from_snapshots(world.monsters.iter().map(|monster| monster.snapshot()).collect())
    }

    /// Kind of the room the player currently stands in.
    #[must_use]
    pub fn current_room(world: &World) -> RoomKind {
        world.grid.room_kind(world.player.location)
    }
}

/// Direct state manipulation used by tests to stage otherwise unreachable
/// situations.
#[cfg(any(test, feature = "scaffolding"))]
pub mod scaffolding {
    use super::World;
    use fountain_core::Location;

    /// Teleports the player without emitting events.
    pub fn place_player(world: &mut World, location: Location) {
        world.player.location = location;
    }

    /// Sets the fountain activation flag without visiting the fountain.
    pub fn activate_fountain(world: &mut World) {
        let _ = world.player.activate_fountain();
    }
}
