use smallvec::SmallVec;

/// The state of one lattice cell. Every cell starts as `Wall`; generation flips
/// cells to `Passage` and nothing ever flips one back.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Passage,
}

#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: isize,
    pub y: isize,
}
impl GridCoordinate {
    pub fn new(x: isize, y: isize) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    /// Is this a room cell (even x and even y) as opposed to a wall/connector cell?
    pub fn is_room(&self) -> bool {
        self.x % 2 == 0 && self.y % 2 == 0
    }
}
pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDirection {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [GridDirection; 4] = [GridDirection::North,
                                                GridDirection::South,
                                                GridDirection::East,
                                                GridDirection::West];

/// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
/// The result may be outside any particular grid - validity is the grid's concern.
pub fn offset_coordinate(coord: GridCoordinate, dir: GridDirection) -> GridCoordinate {
    let (x, y) = (coord.x, coord.y);
    match dir {
        GridDirection::North => GridCoordinate { y: y - 1, ..coord },
        GridDirection::South => GridCoordinate { y: y + 1, ..coord },
        GridDirection::East => GridCoordinate { x: x + 1, ..coord },
        GridDirection::West => GridCoordinate { x: x - 1, ..coord },
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offsets_move_one_cell() {
        let gc = |x, y| GridCoordinate::new(x, y);
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::North), gc(1, 0));
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::South), gc(1, 2));
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::East), gc(2, 1));
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::West), gc(0, 1));

        // Offsets at the origin go negative rather than wrapping, so a signed
        // coordinate type is required.
        assert_eq!(offset_coordinate(gc(0, 0), GridDirection::North), gc(0, -1));
        assert_eq!(offset_coordinate(gc(0, 0), GridDirection::West), gc(-1, 0));
    }

    #[test]
    fn room_parity() {
        assert!(GridCoordinate::new(0, 0).is_room());
        assert!(GridCoordinate::new(2, 4).is_room());
        assert!(!GridCoordinate::new(1, 0).is_room());
        assert!(!GridCoordinate::new(0, 3).is_room());
        assert!(!GridCoordinate::new(5, 5).is_room());
    }
}
