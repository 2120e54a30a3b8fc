//! Dense room grid owned by the world.

use fountain_core::{GridView, Location, RoomKind};
use thiserror::Error;

/// Errors reported when mutating the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The location lies outside the grid bounds.
    #[error("room (row {}, column {}) lies outside the grid", .0.row(), .0.column())]
    InvalidLocation(Location),
}

/// Fixed-size lookup table from location to room kind.
///
/// Dimensions are set at construction and never change. Reads are tolerant
/// and report [`RoomKind::Empty`] outside the grid; writes are bounds-checked.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: u32,
    columns: u32,
    cells: Vec<RoomKind>,
}

impl Grid {
    /// Creates a grid of empty rooms.
    #[must_use]
    pub fn new(rows: u32, columns: u32) -> Self {
        let capacity_u64 = u64::from(rows) * u64::from(columns);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            rows,
            columns,
            cells: vec![RoomKind::Empty; capacity],
        }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Captures a read-only view suitable for handing to systems.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.cells, self.rows, self.columns)
    }

    /// Reports whether the location lies within the grid.
    #[must_use]
    pub fn in_range(&self, location: Location) -> bool {
        self.view().in_range(location)
    }

    /// Returns the kind of the room at `location`, or `Empty` when out of range.
    #[must_use]
    pub fn room_kind(&self, location: Location) -> RoomKind {
        self.view().room_kind(location)
    }

    /// Reports whether any of the eight surrounding rooms has the given kind.
    #[must_use]
    pub fn is_adjacent(&self, location: Location, kind: RoomKind) -> bool {
        self.view().is_adjacent(location, kind)
    }

    /// Assigns a kind to the room at `location`.
    pub fn set_room_kind(&mut self, location: Location, kind: RoomKind) -> Result<(), GridError> {
        let index = self.view().index(location);
        let slot = index
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(GridError::InvalidLocation(location))?;
        *slot = kind;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_everywhere() {
        let grid = Grid::new(3, 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 5);
        assert!(grid
            .view()
            .locations()
            .all(|location| grid.room_kind(location) == RoomKind::Empty));
    }

    #[test]
    fn set_room_kind_stores_in_range_values() {
        let mut grid = Grid::new(4, 4);
        grid.set_room_kind(Location::new(3, 2), RoomKind::Pit)
            .expect("in range");

        assert_eq!(grid.room_kind(Location::new(3, 2)), RoomKind::Pit);
        assert_eq!(grid.room_kind(Location::new(2, 3)), RoomKind::Empty);
    }

    #[test]
    fn set_room_kind_rejects_out_of_range_locations() {
        let mut grid = Grid::new(2, 3);
        let outside = Location::new(2, 0);

        assert_eq!(
            grid.set_room_kind(outside, RoomKind::Entrance),
            Err(GridError::InvalidLocation(outside))
        );
        assert_eq!(grid.room_kind(outside), RoomKind::Empty);
    }

    #[test]
    fn non_square_grids_index_rows_and_columns_independently() {
        let mut grid = Grid::new(2, 5);
        grid.set_room_kind(Location::new(1, 4), RoomKind::FountainRoom)
            .expect("in range");

        assert!(grid.in_range(Location::new(1, 4)));
        assert!(!grid.in_range(Location::new(4, 1)));
        assert_eq!(grid.room_kind(Location::new(1, 4)), RoomKind::FountainRoom);
    }

    #[test]
    fn pit_adjacency_ignores_distant_rooms() {
        let mut grid = Grid::new(4, 4);
        grid.set_room_kind(Location::new(3, 3), RoomKind::Pit)
            .expect("in range");

        assert!(grid.is_adjacent(Location::new(2, 2), RoomKind::Pit));
        assert!(!grid.is_adjacent(Location::new(1, 1), RoomKind::Pit));
        assert!(!grid.is_adjacent(Location::new(3, 3), RoomKind::Pit));
    }
}
