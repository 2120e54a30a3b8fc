#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Fountain of Objects engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. The turn engine submits [`Command`]
//! values describing desired mutations, the world executes those commands via
//! its `apply` entry point, and then broadcasts [`Event`] values that systems
//! translate into classified [`Notification`]s for the output collaborator.
//! Systems read the world exclusively through the immutable views defined
//! here.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "You enter the Cavern of Objects, a maze of rooms filled with dangerous pits in search of the Fountain of Objects.";

/// Health every player starts the session with.
pub const PLAYER_STARTING_HEALTH: u32 = 3;

/// Arrows every player starts the session with.
pub const PLAYER_STARTING_ARROWS: u32 = 5;

/// Health every monster starts the session with.
pub const MONSTER_STARTING_HEALTH: u32 = 3;

/// Damage dealt by a single arrow that strikes a monster.
pub const ARROW_DAMAGE: u32 = 3;

/// Damage dealt to a player standing in a pit room.
pub const PIT_DAMAGE: u32 = 3;

/// Largest number of rooms a layout may describe.
pub const MAX_ROOMS: u64 = 1 << 16;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Moves the player a single room in the provided direction.
    Move {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Reactivates the fountain if the player stands in the fountain room.
    ActivateFountain,
    /// Fires a single arrow into the adjacent room in the provided direction.
    Shoot {
        /// Direction the arrow travels.
        direction: Direction,
    },
    /// Requests the command reference. Never mutates state.
    Help,
    /// Lets every live monster sharing the player's room act against the player.
    ResolveRetaliation,
    /// Applies environmental damage for the room the player currently occupies.
    ResolveHazards,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the player moved between two rooms.
    PlayerMoved {
        /// Room the player occupied before moving.
        from: Location,
        /// Room the player occupies after moving.
        to: Location,
    },
    /// Reports that a movement request ran into the edge of the grid.
    MovementBlocked {
        /// Room the player remains in.
        at: Location,
        /// Direction the player attempted to travel.
        direction: Direction,
    },
    /// Confirms that the fountain is active after the player's request.
    FountainActivated {
        /// Room containing the fountain.
        at: Location,
        /// Indicates whether the fountain had already been activated before.
        already_active: bool,
    },
    /// Reports that the player tried to activate the fountain elsewhere.
    FountainNotHere {
        /// Room the player attempted the activation from.
        at: Location,
    },
    /// Reports that the player attempted to shoot with an empty quiver.
    OutOfArrows,
    /// Confirms that an arrow struck a live monster.
    MonsterHit {
        /// Identifier of the monster that was struck.
        monster: MonsterId,
        /// Variant of the monster that was struck.
        kind: MonsterKind,
        /// Health the monster retains after the hit.
        remaining_health: u32,
        /// Arrows the player retains after the shot.
        arrows_remaining: u32,
    },
    /// Reports that an arrow found no live monster in the target room.
    ShotMissed {
        /// Room the arrow was aimed at, if it lies within the grid.
        target: Option<Location>,
        /// Arrows the player retains after the shot.
        arrows_remaining: u32,
    },
    /// Confirms that the command reference was requested.
    HelpRequested,
    /// Reports that a maelstrom swept the player into another room.
    PlayerSwept {
        /// Identifier of the maelstrom responsible.
        monster: MonsterId,
        /// Room the player occupied before being swept away.
        from: Location,
        /// Room the player lands in.
        to: Location,
    },
    /// Reports that a monster relocated itself after attacking.
    MonsterRelocated {
        /// Identifier of the relocated monster.
        monster: MonsterId,
        /// Variant of the relocated monster.
        kind: MonsterKind,
        /// Room the monster occupied before relocating.
        from: Location,
        /// Room the monster occupies afterwards.
        to: Location,
    },
    /// Reports damage suffered by the player.
    PlayerDamaged {
        /// Amount of health removed.
        amount: u32,
        /// Health the player retains afterwards.
        health: u32,
        /// Source of the damage.
        cause: DeathCause,
    },
    /// Announces that the player's health dropped to zero.
    PlayerDied {
        /// Recorded cause of death.
        cause: DeathCause,
    },
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction in the order the command reference lists them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Lower-case name used by the command grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

/// Location of a single room expressed as row and column coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: u32,
    column: u32,
}

impl Location {
    /// Creates a new room location.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the room.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the room.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Applies a unit offset in the provided direction.
    ///
    /// Returns `None` when the step would produce a negative coordinate. Upper
    /// bounds are not checked here; callers consult the grid for that.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Location> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(row, self.column)),
            Direction::South => self.row.checked_add(1).map(|row| Self::new(row, self.column)),
            Direction::East => self
                .column
                .checked_add(1)
                .map(|column| Self::new(self.row, column)),
            Direction::West => self
                .column
                .checked_sub(1)
                .map(|column| Self::new(self.row, column)),
        }
    }

    /// Displaces the location and wraps both coordinates into a `rows` by
    /// `columns` grid, cycling past an edge to the opposite edge.
    ///
    /// A zero dimension leaves the corresponding coordinate untouched.
    #[must_use]
    pub fn wrapped_offset(self, row_delta: i64, column_delta: i64, rows: u32, columns: u32) -> Location {
        Self::new(
            wrap(self.row, row_delta, rows),
            wrap(self.column, column_delta, columns),
        )
    }

    /// Computes the Chebyshev distance between two locations, treating
    /// diagonal neighbours as distance one.
    #[must_use]
    pub fn chebyshev_distance(self, other: Location) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.column.abs_diff(other.column))
    }
}

fn wrap(value: u32, delta: i64, bound: u32) -> u32 {
    if bound == 0 {
        return value;
    }
    let wrapped = (i64::from(value) + delta).rem_euclid(i64::from(bound));
    u32::try_from(wrapped).unwrap_or(value)
}

/// Terrain classification of a single room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// Room with nothing of note.
    #[default]
    Empty,
    /// Cavern entrance where the session starts and must end.
    Entrance,
    /// Room housing the Fountain of Objects.
    FountainRoom,
    /// Room containing a bottomless pit.
    Pit,
}

/// Variants of monsters roaming the caverns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterKind {
    /// Living storm that sweeps the player and itself to other rooms.
    Maelstrom,
    /// Wolf-like beast whose attack is always lethal.
    Amarok,
}

impl MonsterKind {
    /// Display name of the monster variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maelstrom => "maelstrom",
            Self::Amarok => "amarok",
        }
    }
}

/// Unique identifier assigned to a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonsterId(u32);

impl MonsterId {
    /// Creates a new monster identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Recorded reason for the player's death.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// The player stood in a pit room.
    FellIntoPit,
    /// An amarok shared the player's room.
    MauledByAmarok,
}

impl DeathCause {
    /// Human readable label describing the cause.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FellIntoPit => "fell down a pit",
            Self::MauledByAmarok => "mauled by an Amarok",
        }
    }
}

/// Read-only view into the dense room grid.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [RoomKind],
    rows: u32,
    columns: u32,
}

impl<'a> GridView<'a> {
    /// Captures a new grid view backed by the provided row-major cell slice.
    #[must_use]
    pub fn new(cells: &'a [RoomKind], rows: u32, columns: u32) -> Self {
        Self {
            cells,
            rows,
            columns,
        }
    }

    /// Provides the `(rows, columns)` dimensions of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.columns)
    }

    /// Reports whether the location lies within the grid.
    #[must_use]
    pub fn in_range(&self, location: Location) -> bool {
        location.row() < self.rows && location.column() < self.columns
    }

    /// Returns the kind of the room at `location`.
    ///
    /// Out-of-range locations read as [`RoomKind::Empty`].
    #[must_use]
    pub fn room_kind(&self, location: Location) -> RoomKind {
        self.index(location)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or_default()
    }

    /// Reports whether any of the eight rooms surrounding `location` has the
    /// provided kind. The room at `location` itself is not considered.
    #[must_use]
    pub fn is_adjacent(&self, location: Location, kind: RoomKind) -> bool {
        let row = i64::from(location.row());
        let column = i64::from(location.column());
        (-1..=1_i64)
            .flat_map(|row_delta| (-1..=1_i64).map(move |column_delta| (row_delta, column_delta)))
            .filter(|&(row_delta, column_delta)| row_delta != 0 || column_delta != 0)
            .filter_map(|(row_delta, column_delta)| {
                let neighbour_row = u32::try_from(row + row_delta).ok()?;
                let neighbour_column = u32::try_from(column + column_delta).ok()?;
                Some(Location::new(neighbour_row, neighbour_column))
            })
            .any(|neighbour| self.room_kind(neighbour) == kind)
    }

    /// Returns an iterator over every in-range location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + 'a {
        let rows = self.rows;
        let columns = self.columns;
        (0..rows).flat_map(move |row| (0..columns).map(move |column| Location::new(row, column)))
    }

    /// Row-major offset of `location`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index(&self, location: Location) -> Option<usize> {
        if !self.in_range(location) {
            return None;
        }
        let row = usize::try_from(location.row()).ok()?;
        let column = usize::try_from(location.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Room currently occupied by the player.
    pub location: Location,
    /// Remaining health; zero means the player is dead.
    pub health: u32,
    /// Arrows left in the quiver.
    pub arrows: u32,
    /// Cause recorded when health first reached zero.
    pub cause_of_death: Option<DeathCause>,
    /// Indicates whether the fountain has been reactivated.
    pub fountain_active: bool,
}

impl PlayerSnapshot {
    /// Reports whether the player still has health remaining.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Immutable representation of a single monster's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterSnapshot {
    /// Identifier allocated to the monster by the world.
    pub id: MonsterId,
    /// Variant of the monster.
    pub kind: MonsterKind,
    /// Room currently occupied by the monster.
    pub location: Location,
    /// Remaining health; zero means the monster is inert.
    pub health: u32,
}

impl MonsterSnapshot {
    /// Reports whether the monster can still act and be sensed.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Read-only snapshot describing every monster in collection order.
#[derive(Clone, Debug, Default)]
pub struct MonsterView {
    snapshots: Vec<MonsterSnapshot>,
}

impl MonsterView {
    /// Creates a new monster view from snapshots already in collection order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<MonsterSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured monster snapshots in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterSnapshot> {
        self.snapshots.iter()
    }

    /// Iterator over the monsters that are still alive.
    pub fn alive(&self) -> impl Iterator<Item = &MonsterSnapshot> {
        self.snapshots.iter().filter(|snapshot| snapshot.is_alive())
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<MonsterSnapshot> {
        self.snapshots
    }
}

/// Semantic intent of a message handed to the output collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Neutral status such as the current room.
    Status,
    /// Request for player input.
    Prompt,
    /// Something went wrong but the session continues.
    Warning,
    /// Harm to the player or a nearby threat.
    Danger,
    /// Progress toward victory.
    Success,
    /// Informational text with no gameplay weight.
    Info,
}

/// Classified message destined for the output collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Intent used by the adapter to pick a presentation.
    pub category: Category,
    /// Message body.
    pub text: String,
}

impl Notification {
    /// Creates a new notification.
    #[must_use]
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The fountain was reactivated and the player returned to the entrance.
    Won,
    /// The player's health reached zero.
    Lost {
        /// Recorded cause of death.
        cause: Option<DeathCause>,
    },
    /// Input ended before the session reached a verdict.
    Abandoned,
}

/// Placement of a single monster within a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterPlacement {
    /// Variant of monster to place.
    pub kind: MonsterKind,
    /// Room the monster starts in.
    pub location: Location,
}

/// Declarative description of a map used to construct a world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Number of rows in the grid.
    pub rows: u32,
    /// Number of columns in the grid.
    pub columns: u32,
    /// Room holding the cavern entrance.
    pub entrance: Location,
    /// Room holding the fountain, if any.
    #[serde(default)]
    pub fountain: Option<Location>,
    /// Rooms containing pits.
    #[serde(default)]
    pub pits: Vec<Location>,
    /// Monsters in collection order.
    #[serde(default)]
    pub monsters: Vec<MonsterPlacement>,
    /// Room the player starts in; defaults to the entrance.
    #[serde(default)]
    pub player_start: Option<Location>,
    /// Arrows the player starts with.
    #[serde(default = "default_arrows")]
    pub starting_arrows: u32,
    /// Health the player starts with.
    #[serde(default = "default_health")]
    pub starting_health: u32,
}

impl Layout {
    /// Creates a layout with only an entrance and default player stats.
    #[must_use]
    pub fn new(rows: u32, columns: u32, entrance: Location) -> Self {
        Self {
            rows,
            columns,
            entrance,
            fountain: None,
            pits: Vec::new(),
            monsters: Vec::new(),
            player_start: None,
            starting_arrows: PLAYER_STARTING_ARROWS,
            starting_health: PLAYER_STARTING_HEALTH,
        }
    }

    /// Places the fountain in the provided room.
    #[must_use]
    pub fn with_fountain(mut self, location: Location) -> Self {
        self.fountain = Some(location);
        self
    }

    /// Adds a pit to the provided room.
    #[must_use]
    pub fn with_pit(mut self, location: Location) -> Self {
        self.pits.push(location);
        self
    }

    /// Appends a monster to the collection.
    #[must_use]
    pub fn with_monster(mut self, kind: MonsterKind, location: Location) -> Self {
        self.monsters.push(MonsterPlacement { kind, location });
        self
    }

    /// Overrides the room the player starts in.
    #[must_use]
    pub fn with_player_start(mut self, location: Location) -> Self {
        self.player_start = Some(location);
        self
    }

    /// Overrides the number of arrows the player starts with.
    #[must_use]
    pub fn with_arrows(mut self, arrows: u32) -> Self {
        self.starting_arrows = arrows;
        self
    }
}

fn default_arrows() -> u32 {
    PLAYER_STARTING_ARROWS
}

fn default_health() -> u32 {
    PLAYER_STARTING_HEALTH
}

#[cfg(test)]
mod tests {
    use super::{Direction, GridView, Layout, Location, MonsterKind, RoomKind};

    #[test]
    fn step_refuses_negative_coordinates() {
        let origin = Location::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::South), Some(Location::new(1, 0)));
        assert_eq!(origin.step(Direction::East), Some(Location::new(0, 1)));
    }

    #[test]
    fn wrapped_offset_cycles_past_both_edges() {
        let top = Location::new(0, 3);
        assert_eq!(top.wrapped_offset(-1, 0, 4, 4), Location::new(3, 3));

        let right = Location::new(2, 3);
        assert_eq!(right.wrapped_offset(0, 1, 4, 4), Location::new(2, 0));

        let moved = Location::new(1, 1).wrapped_offset(-1, 2, 4, 4);
        assert_eq!(moved, Location::new(0, 3));
    }

    #[test]
    fn chebyshev_distance_counts_diagonals_as_one() {
        let centre = Location::new(2, 2);
        assert_eq!(centre.chebyshev_distance(Location::new(3, 3)), 1);
        assert_eq!(centre.chebyshev_distance(Location::new(2, 2)), 0);
        assert_eq!(centre.chebyshev_distance(Location::new(0, 3)), 2);
    }

    #[test]
    fn grid_view_reads_out_of_range_as_empty() {
        let cells = [RoomKind::Entrance, RoomKind::Pit, RoomKind::Empty, RoomKind::FountainRoom];
        let view = GridView::new(&cells, 2, 2);

        assert_eq!(view.room_kind(Location::new(0, 1)), RoomKind::Pit);
        assert_eq!(view.room_kind(Location::new(1, 1)), RoomKind::FountainRoom);
        assert_eq!(view.room_kind(Location::new(2, 0)), RoomKind::Empty);
        assert!(!view.in_range(Location::new(0, 2)));
    }

    #[test]
    fn grid_view_index_is_row_major() {
        let cells = [RoomKind::Empty; 6];
        let view = GridView::new(&cells, 2, 3);

        assert_eq!(view.index(Location::new(0, 0)), Some(0));
        assert_eq!(view.index(Location::new(1, 2)), Some(5));
        assert_eq!(view.index(Location::new(0, 3)), None);
        assert_eq!(view.index(Location::new(2, 0)), None);
    }

    #[test]
    fn adjacency_includes_diagonals_but_not_self() {
        let mut cells = [RoomKind::Empty; 9];
        cells[0] = RoomKind::Pit;
        let view = GridView::new(&cells, 3, 3);

        assert!(view.is_adjacent(Location::new(1, 1), RoomKind::Pit));
        assert!(!view.is_adjacent(Location::new(0, 0), RoomKind::Pit));
        assert!(!view.is_adjacent(Location::new(2, 2), RoomKind::Pit));
    }

    #[test]
    fn layout_round_trips_through_bincode() {
        let layout = Layout::new(4, 4, Location::new(0, 0))
            .with_fountain(Location::new(0, 2))
            .with_pit(Location::new(2, 2))
            .with_monster(MonsterKind::Amarok, Location::new(3, 1));

        let bytes = bincode::serialize(&layout).expect("serialize");
        let restored: Layout = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, layout);
    }
}
