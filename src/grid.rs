use crate::cells::{CellState, GridCoordinate};
use crate::units::{ColumnIndex, Height, RowIndex, Width};

/// A rectangular lattice of `CellState` cells stored row major, `height` rows of
/// `width` cells. Cells at even (x, y) are rooms, cells at odd x or y are the
/// potential walls between rooms.
///
/// The grid is allocated once with every cell a `Wall` and is only ever mutated
/// by carving; consumers of a finished maze treat it as read only.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WallGrid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl WallGrid {
    /// Create an all-`Wall` grid. `None` if either dimension is zero.
    ///
    /// Odd dimensions give a fully carvable maze; even dimensions are accepted
    /// but leave the last row/column permanently walled.
    pub fn new(width: Width, height: Height) -> Option<WallGrid> {
        let (Width(w), Height(h)) = (width, height);
        if w == 0 || h == 0 {
            return None;
        }
        Some(WallGrid {
            cells: vec![CellState::Wall; w * h],
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Count of room cells, the nodes of the maze's spanning tree. Rooms sit at
    /// even (x, y) so each dimension contributes one room per two cells, rounded up.
    pub fn room_count(&self) -> usize {
        ((self.width + 1) / 2) * ((self.height + 1) / 2)
    }

    /// Count of cells carved to `Passage` so far.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == CellState::Passage)
            .count()
    }

    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        let (x, y) = (coord.x, coord.y);
        x >= 0 && y >= 0 && x < self.width as isize && y < self.height as isize
    }

    /// The state of the cell at `coord`, or `None` when out of bounds.
    pub fn cell_state(&self, coord: GridCoordinate) -> Option<CellState> {
        self.cell_index(coord).map(|index| self.cells[index])
    }

    /// The state of the cell in row major terms, as consumers addressing the
    /// grid by (row, column) see it. Row = y, column = x.
    pub fn cell(&self, row: RowIndex, column: ColumnIndex) -> Option<CellState> {
        let (RowIndex(row), ColumnIndex(column)) = (row, column);
        self.cell_state(GridCoordinate::new(column as isize, row as isize))
    }

    pub fn is_passage(&self, coord: GridCoordinate) -> bool {
        self.cell_state(coord)
            .map_or(false, |state| state == CellState::Passage)
    }

    /// Flip the cell at `coord` to `Passage`. Out of bounds coordinates are
    /// ignored. Carving is idempotent.
    pub fn carve(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.cell_index(coord) {
            self.cells[index] = CellState::Passage;
        }
    }

    /// Iterate over every cell coordinate in row major order.
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            width: self.width,
            cells_count: self.size(),
        }
    }

    /// Iterate over the grid one row of coordinates at a time, top row first.
    pub fn iter_row(&self) -> RowIter {
        RowIter {
            current_row: 0,
            width: self.width,
            height: self.height,
        }
    }

    fn cell_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some((coord.y as usize * self.width) + coord.x as usize)
        } else {
            None
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    width: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let y = self.current_cell_number / self.width;
            let x = self.current_cell_number - (y * self.width);
            self.current_cell_number += 1;
            Some(GridCoordinate::new(x as isize, y as isize))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a WallGrid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    width: usize,
    height: usize,
}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.height {
            let y = self.current_row as isize;
            let row = (0..self.width)
                          .map(|x| GridCoordinate::new(x as isize, y))
                          .collect();
            self.current_row += 1;
            Some(row)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.height - self.current_row;
        (remaining, Some(remaining))
    }
}
