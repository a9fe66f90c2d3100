use rand::Rng;

use crate::cells::{offset_coordinate, GridCoordinate, GridDirection, ALL_DIRECTIONS};
use crate::grid::WallGrid;

/// An unguided agent that wanders a finished maze one random move at a time.
///
/// The bot starts in the top left room and counts the bottom right cell as its
/// goal, the same convention as the far corner of an odd-dimensioned maze. It
/// does no searching or lookahead at all: each step draws one of the four axis
/// directions and the move happens only if the target cell is an in-bounds
/// passage, otherwise the bot stays put. The grid is read only to the bot.
#[derive(Debug, Copy, Clone)]
pub struct RandomWalkBot {
    position: GridCoordinate,
    goal: GridCoordinate,
}

impl RandomWalkBot {
    pub fn new(grid: &WallGrid) -> RandomWalkBot {
        RandomWalkBot {
            position: GridCoordinate::new(0, 0),
            goal: GridCoordinate::new(grid.width() as isize - 1, grid.height() as isize - 1),
        }
    }

    #[inline]
    pub fn position(&self) -> GridCoordinate {
        self.position
    }

    #[inline]
    pub fn goal(&self) -> GridCoordinate {
        self.goal
    }

    pub fn is_at_goal(&self) -> bool {
        self.position == self.goal
    }

    /// Draw a random direction and attempt the move. Returns true if the bot moved.
    pub fn step<R: Rng>(&mut self, grid: &WallGrid, rng: &mut R) -> bool {
        let direction = ALL_DIRECTIONS[rng.gen::<usize>() % ALL_DIRECTIONS.len()];
        self.attempt_move(grid, direction)
    }

    /// Move one cell in `direction` if the target is an in-bounds passage.
    pub fn attempt_move(&mut self, grid: &WallGrid, direction: GridDirection) -> bool {
        let target = offset_coordinate(self.position, direction);
        if grid.is_passage(target) {
            self.position = target;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators::recursive_backtracker;
    use crate::units::{Height, Width};
    use rand::weak_rng;

    fn gc(x: isize, y: isize) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn bot_starts_at_origin_with_far_corner_goal() {
        let g = WallGrid::new(Width(5), Height(3)).unwrap();
        let bot = RandomWalkBot::new(&g);
        assert_eq!(bot.position(), gc(0, 0));
        assert_eq!(bot.goal(), gc(4, 2));
        assert!(!bot.is_at_goal());
    }

    #[test]
    fn single_cell_maze_bot_is_born_at_its_goal() {
        let g = WallGrid::new(Width(1), Height(1)).unwrap();
        assert!(RandomWalkBot::new(&g).is_at_goal());
    }

    #[test]
    fn walls_block_every_move() {
        // Only the start cell is a passage, so no direction can ever succeed.
        let mut g = WallGrid::new(Width(3), Height(3)).unwrap();
        g.carve(gc(0, 0));

        let mut bot = RandomWalkBot::new(&g);
        let mut rng = weak_rng();
        for _ in 0..200 {
            assert!(!bot.step(&g, &mut rng));
            assert_eq!(bot.position(), gc(0, 0));
        }
    }

    #[test]
    fn directed_moves_respect_walls_and_bounds() {
        let mut g = WallGrid::new(Width(3), Height(1)).unwrap();
        g.carve(gc(0, 0));
        g.carve(gc(1, 0));

        let mut bot = RandomWalkBot::new(&g);
        assert!(!bot.attempt_move(&g, GridDirection::North)); // out of bounds
        assert!(!bot.attempt_move(&g, GridDirection::West)); // out of bounds
        assert!(!bot.attempt_move(&g, GridDirection::South)); // out of bounds
        assert!(bot.attempt_move(&g, GridDirection::East));
        assert_eq!(bot.position(), gc(1, 0));
        assert!(!bot.attempt_move(&g, GridDirection::East)); // (2, 0) is a wall
        assert!(bot.attempt_move(&g, GridDirection::West));
        assert_eq!(bot.position(), gc(0, 0));
    }

    #[test]
    fn bot_only_ever_occupies_passage_cells() {
        let mut g = WallGrid::new(Width(9), Height(9)).unwrap();
        let mut rng = weak_rng();
        recursive_backtracker(&mut g, &mut rng);

        let mut bot = RandomWalkBot::new(&g);
        for _ in 0..2000 {
            bot.step(&g, &mut rng);
            assert!(g.is_passage(bot.position()));
        }
    }
}
