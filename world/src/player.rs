//! Player state owned by the world.

use fountain_core::{DeathCause, Event, Location, PlayerSnapshot};

/// Authoritative player state.
#[derive(Clone, Debug)]
pub(crate) struct Player {
    pub(crate) location: Location,
    health: u32,
    arrows: u32,
    cause_of_death: Option<DeathCause>,
    fountain_active: bool,
}

impl Player {
    pub(crate) fn new(location: Location, health: u32, arrows: u32) -> Self {
        Self {
            location,
            health,
            arrows,
            cause_of_death: None,
            fountain_active: false,
        }
    }

    pub(crate) const fn health(&self) -> u32 {
        self.health
    }

    /// Removes health, recording the cause on the transition to zero.
    ///
    /// Health floors at zero and the first recorded cause is never replaced.
    pub(crate) fn suffer(&mut self, amount: u32, cause: DeathCause, out_events: &mut Vec<Event>) {
        let removed = amount.min(self.health);
        if removed == 0 {
            return;
        }

        self.health -= removed;
        out_events.push(Event::PlayerDamaged {
            amount: removed,
            health: self.health,
            cause,
        });

        if self.health == 0 && self.cause_of_death.is_none() {
            self.cause_of_death = Some(cause);
            tracing::info!(cause = cause.label(), "player died");
            out_events.push(Event::PlayerDied { cause });
        }
    }

    /// Sets the activation flag, returning whether it was already set.
    pub(crate) fn activate_fountain(&mut self) -> bool {
        let already_active = self.fountain_active;
        self.fountain_active = true;
        already_active
    }

    /// Takes an arrow from the quiver, returning how many remain.
    pub(crate) fn draw_arrow(&mut self) -> Option<u32> {
        self.arrows = self.arrows.checked_sub(1)?;
        Some(self.arrows)
    }

    pub(crate) fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            location: self.location,
            health: self.health,
            arrows: self.arrows,
            cause_of_death: self.cause_of_death,
            fountain_active: self.fountain_active,
        }
    }
}
