//! Authoritative monster state and per-variant combat behaviour.

use fountain_core::{
    DeathCause, Event, Location, MonsterId, MonsterKind, MonsterPlacement, MonsterSnapshot,
    MONSTER_STARTING_HEALTH,
};

use crate::{grid::Grid, player::Player};

/// Displacement applied to the player when swept away by a maelstrom.
const MAELSTROM_PLAYER_OFFSET: (i64, i64) = (-1, 2);
/// Displacement a maelstrom applies to itself after sweeping the player.
const MAELSTROM_SELF_OFFSET: (i64, i64) = (1, -2);

/// Monster stored inside the world.
#[derive(Clone, Debug)]
pub(crate) struct Monster {
    pub(crate) id: MonsterId,
    pub(crate) kind: MonsterKind,
    pub(crate) location: Location,
    health: u32,
}

impl Monster {
    pub(crate) fn from_placement(id: MonsterId, placement: MonsterPlacement) -> Self {
        Self {
            id,
            kind: placement.kind,
            location: placement.location,
            health: MONSTER_STARTING_HEALTH,
        }
    }

    /// Dead monsters stay in the collection but never act.
    pub(crate) const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Removes health and returns what remains.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Acts against a player sharing this monster's room.
    pub(crate) fn attack(&mut self, grid: &Grid, player: &mut Player, out_events: &mut Vec<Event>) {
        match self.kind {
            MonsterKind::Maelstrom => self.sweep(grid, player, out_events),
            MonsterKind::Amarok => {
                player.suffer(player.health(), DeathCause::MauledByAmarok, out_events);
            }
        }
    }

    fn sweep(&mut self, grid: &Grid, player: &mut Player, out_events: &mut Vec<Event>) {
        let (rows, columns) = (grid.rows(), grid.columns());

        let player_from = player.location;
        let (row_delta, column_delta) = MAELSTROM_PLAYER_OFFSET;
        player.location = player_from.wrapped_offset(row_delta, column_delta, rows, columns);
        out_events.push(Event::PlayerSwept {
            monster: self.id,
            from: player_from,
            to: player.location,
        });

        let monster_from = self.location;
        let (row_delta, column_delta) = MAELSTROM_SELF_OFFSET;
        self.location = monster_from.wrapped_offset(row_delta, column_delta, rows, columns);
        out_events.push(Event::MonsterRelocated {
            monster: self.id,
            kind: self.kind,
            from: monster_from,
            to: self.location,
        });
    }

    pub(crate) fn snapshot(&self) -> MonsterSnapshot {
        MonsterSnapshot {
            id: self.id,
            kind: self.kind,
            location: self.location,
            health: self.health,
        }
    }
}
