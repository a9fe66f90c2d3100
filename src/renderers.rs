use itertools::Itertools;
use std::{
    fmt,
    fs::File,
    io,
    io::prelude::*
};

use crate::cells::{CellState, GridCoordinate};
use crate::grid::WallGrid;

pub const PASSAGE_GLYPH: &str = "#";
pub const WALL_GLYPH: &str = " ";
pub const AGENT_GLYPH: &str = "o";

/// The canonical textual export of a grid: one line per row, each cell rendered
/// as `#` (passage) or a space (wall), cells joined by single spaces, a newline
/// after every row. Byte for byte reproducible for the same grid, so suitable
/// for snapshot comparisons.
pub fn render_text(grid: &WallGrid) -> String {
    render_lines(grid, None)
}

/// The canonical rendering with a single marked cell drawn as the agent glyph,
/// whatever the state of the cell underneath. Purely an overlay - the grid is
/// never touched.
pub fn render_text_with_marker(grid: &WallGrid, marker: GridCoordinate) -> String {
    render_lines(grid, Some(marker))
}

fn render_lines(grid: &WallGrid, marker: Option<GridCoordinate>) -> String {
    // Per row: 1 glyph + 1 separator per cell (bar the last), plus the newline.
    let mut output = String::with_capacity(grid.height() * (2 * grid.width()));
    for row in grid.iter_row() {
        let line = row.iter()
                      .map(|&coord| glyph(grid, coord, marker))
                      .join(" ");
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn glyph(grid: &WallGrid, coord: GridCoordinate, marker: Option<GridCoordinate>) -> &'static str {
    if marker == Some(coord) {
        AGENT_GLYPH
    } else {
        match grid.cell_state(coord) {
            Some(CellState::Passage) => PASSAGE_GLYPH,
            _ => WALL_GLYPH,
        }
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self))
    }
}

pub fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
