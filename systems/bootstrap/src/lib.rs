#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares a Fountain of Objects session.

use std::str::FromStr;

use fountain_core::{Layout, Location, MonsterKind};
use fountain_world::{query, LayoutError, World};
use thiserror::Error;

/// Size of the fixed maps shipped with the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapSize {
    /// Four by four rooms.
    Small,
    /// Six by six rooms.
    Medium,
    /// Eight by eight rooms.
    Large,
}

impl MapSize {
    /// Every size in menu order.
    pub const ALL: [MapSize; 3] = [MapSize::Small, MapSize::Medium, MapSize::Large];

    /// Lower-case name accepted by [`MapSize::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Reported when a map size name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown map size \"{0}\", expected small, medium or large")]
pub struct UnknownMapSize(pub String);

impl FromStr for MapSize {
    type Err = UnknownMapSize;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|size| size.name() == lowered)
            .ok_or_else(|| UnknownMapSize(value.to_owned()))
    }
}

/// Produces the data required to start a session.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Returns the fixed layout for the requested map size.
    #[must_use]
    pub fn layout(&self, size: MapSize) -> Layout {
        let entrance = Location::new(0, 0);
        match size {
            MapSize::Small => Layout::new(4, 4, entrance)
                .with_fountain(Location::new(0, 2))
                .with_pit(Location::new(2, 1))
                .with_monster(MonsterKind::Maelstrom, Location::new(2, 3))
                .with_monster(MonsterKind::Amarok, Location::new(3, 0)),
            MapSize::Medium => Layout::new(6, 6, entrance)
                .with_fountain(Location::new(3, 4))
                .with_pit(Location::new(1, 2))
                .with_pit(Location::new(4, 1))
                .with_monster(MonsterKind::Maelstrom, Location::new(2, 5))
                .with_monster(MonsterKind::Amarok, Location::new(5, 3))
                .with_monster(MonsterKind::Amarok, Location::new(1, 4)),
            MapSize::Large => Layout::new(8, 8, entrance)
                .with_fountain(Location::new(5, 6))
                .with_pit(Location::new(1, 3))
                .with_pit(Location::new(3, 1))
                .with_pit(Location::new(4, 5))
                .with_pit(Location::new(6, 2))
                .with_monster(MonsterKind::Maelstrom, Location::new(2, 6))
                .with_monster(MonsterKind::Maelstrom, Location::new(6, 7))
                .with_monster(MonsterKind::Amarok, Location::new(3, 4))
                .with_monster(MonsterKind::Amarok, Location::new(7, 0))
                .with_monster(MonsterKind::Amarok, Location::new(5, 3)),
        }
    }

    /// Builds a fresh world for the requested map size.
    pub fn world(&self, size: MapSize) -> Result<World, LayoutError> {
        World::from_layout(&self.layout(size))
    }
}
