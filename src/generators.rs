use rand::Rng;

use crate::cells::{CoordinateSmallVec, GridCoordinate};
use crate::grid::WallGrid;
use crate::utils::FnvHashSet;
use crate::utils;

/// Apply the recursive backtracker (randomized depth first search) maze generation
/// algorithm to a wall grid.
/// Rooms sit at even (x, y) coordinates and the DFS walks the room sub-lattice in
/// 2-cell steps, carving the wall cell between two rooms at the moment it steps
/// from one to the other. The frontier stack holds the rooms on the active carving
/// path; when the room on top has no unvisited 2-step neighbours we pop it and
/// backtrack. Each room is entered exactly once, so the carved passages form a
/// spanning tree of the rooms reachable from (0, 0) - a perfect maze, fully
/// connected and without cycles.
///
/// The only nondeterminism is the neighbour draw from `rng`, so a seeded rng
/// reproduces the same maze cell for cell.
pub fn recursive_backtracker<R: Rng>(grid: &mut WallGrid, rng: &mut R) {
    let (width, height) = (grid.width() as isize, grid.height() as isize);
    let mut stack = vec![GridCoordinate::new(0, 0)];
    let mut visited = utils::fnv_hashset(grid.room_count());

    while let Some(&current) = stack.last() {
        grid.carve(current);
        visited.insert(current);

        let candidates = unvisited_room_neighbours(current, width, height, &visited);
        if candidates.is_empty() {
            stack.pop();
        } else {
            let next = candidates[rng.gen::<usize>() % candidates.len()];
            let between = GridCoordinate::new((current.x + next.x) / 2,
                                              (current.y + next.y) / 2);
            grid.carve(between);
            stack.push(next);
        }
    }
}

/// Rooms one 2-cell step away that are in bounds and not yet part of the maze,
/// in the fixed order west, east, north, south.
/// A -2 step needs the current coordinate > 1 and a +2 step needs it < dimension - 2,
/// so for a 1 or 2 cell wide dimension no step is ever possible.
fn unvisited_room_neighbours(current: GridCoordinate,
                             width: isize,
                             height: isize,
                             visited: &FnvHashSet<GridCoordinate>)
                             -> CoordinateSmallVec {
    let (x, y) = (current.x, current.y);
    let mut neighbours = CoordinateSmallVec::new();
    {
        let mut consider = |nx, ny| {
            let coord = GridCoordinate::new(nx, ny);
            if !visited.contains(&coord) {
                neighbours.push(coord);
            }
        };
        if x > 1 {
            consider(x - 2, y);
        }
        if x < width - 2 {
            consider(x + 2, y);
        }
        if y > 1 {
            consider(x, y - 2);
        }
        if y < height - 2 {
            consider(x, y + 2);
        }
    }
    neighbours
}
