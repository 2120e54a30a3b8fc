#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure sense registry that describes the player's surroundings.

use fountain_core::{
    Category, GridView, MonsterKind, MonsterView, Notification, PlayerSnapshot, RoomKind,
};

/// World state a sense is evaluated against.
#[derive(Clone, Copy, Debug)]
pub struct SenseContext<'a> {
    /// Room layout.
    pub grid: GridView<'a>,
    /// Current player state.
    pub player: &'a PlayerSnapshot,
    /// Monsters in collection order.
    pub monsters: &'a MonsterView,
}

/// Individual ambient sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sense {
    /// Light from the cavern entrance.
    Entrance,
    /// Sound of the fountain, dripping or rushing.
    Fountain,
    /// Draft from a neighbouring pit.
    Pit,
    /// Growling of a nearby living monster of the given kind.
    MonsterProximity(MonsterKind),
}

impl Sense {
    /// Reports whether the sense fires in the given context.
    #[must_use]
    pub fn can_sense(self, context: &SenseContext<'_>) -> bool {
        let here = context.player.location;
        match self {
            Self::Entrance => context.grid.room_kind(here) == RoomKind::Entrance,
            Self::Fountain => context.grid.room_kind(here) == RoomKind::FountainRoom,
            Self::Pit => context.grid.is_adjacent(here, RoomKind::Pit),
            // Distance zero counts: a monster in the same room is also sensed.
            Self::MonsterProximity(kind) => context
                .monsters
                .alive()
                .any(|monster| monster.kind == kind && monster.location.chebyshev_distance(here) <= 1),
        }
    }

    /// Produces the notification for a sense that fired.
    #[must_use]
    pub fn describe(self, context: &SenseContext<'_>) -> Notification {
        match self {
            Self::Entrance => Notification::new(
                Category::Info,
                "You see light coming from the cavern entrance.",
            ),
            Self::Fountain if context.player.fountain_active => Notification::new(
                Category::Success,
                "You hear the rushing waters from the Fountain of Objects. It has been reactivated!",
            ),
            Self::Fountain => Notification::new(
                Category::Info,
                "You hear water dripping in this room. The Fountain of Objects is here!",
            ),
            Self::Pit => Notification::new(
                Category::Warning,
                "You feel a draft. There is a pit in a nearby room.",
            ),
            Self::MonsterProximity(MonsterKind::Maelstrom) => Notification::new(
                Category::Warning,
                "You hear the growling and groaning of a maelstrom nearby.",
            ),
            Self::MonsterProximity(MonsterKind::Amarok) => Notification::new(
                Category::Warning,
                "You can smell the rotten stench of an amarok in a nearby room.",
            ),
        }
    }
}

/// Ordered collection of senses evaluated before every prompt.
#[derive(Clone, Debug)]
pub struct Senses {
    registry: Vec<Sense>,
}

impl Default for Senses {
    fn default() -> Self {
        Self {
            registry: vec![
                Sense::Entrance,
                Sense::Fountain,
                Sense::Pit,
                Sense::MonsterProximity(MonsterKind::Maelstrom),
                Sense::MonsterProximity(MonsterKind::Amarok),
            ],
        }
    }
}

impl Senses {
    /// Creates the registry with every built-in sense in display order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Senses in evaluation order.
    #[must_use]
    pub fn registry(&self) -> &[Sense] {
        &self.registry
    }

    /// Appends a notification for every sense that fires, in registry order.
    pub fn handle(&self, context: &SenseContext<'_>, out: &mut Vec<Notification>) {
        out.extend(
            self.registry
                .iter()
                .filter(|sense| sense.can_sense(context))
                .map(|sense| sense.describe(context)),
        );
    }
}
