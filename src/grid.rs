use itertools::Itertools;
use std::fmt;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, CoordinateSmallVec, GridDirection,
                   COMPASS_PRIMARIES};
use crate::units::{ColumnsCount, RowsCount};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Passage,
}
impl CellState {
    pub fn as_char(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Passage => ' ',
        }
    }
}

/// A fixed size rectangular lattice of wall and passage cells.
///
/// Every cell starts as a `Wall`. Carving is one directional - a cell may
/// become a `Passage` but never reverts - and only this crate's generators
/// can carve, so a grid handed out by a generator is frozen.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<CellState>,
    row_count: RowsCount,
    column_count: ColumnsCount,
}

impl Grid {
    pub(crate) fn new(row_count: RowsCount, column_count: ColumnsCount) -> Grid {
        Grid {
            cells: vec![CellState::Wall; row_count.0 * column_count.0],
            row_count,
            column_count,
        }
    }

    pub fn rows(&self) -> RowsCount {
        self.row_count
    }

    pub fn columns(&self) -> ColumnsCount {
        self.column_count
    }

    pub fn size(&self) -> usize {
        self.row_count.0 * self.column_count.0
    }

    pub fn cell_state(&self, coord: Cartesian2DCoordinate) -> Option<CellState> {
        if self.is_valid_coordinate(coord) {
            Some(self.cells[self.cell_index(coord)])
        } else {
            None
        }
    }

    /// Is the cell at `coord` an open passage? Out of bounds coordinates are not.
    pub fn is_passage(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell_state(coord) == Some(CellState::Passage)
    }

    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.column_count.0 && (coord.y as usize) < self.row_count.0
    }

    /// Open the cell at `coord`. Idempotent on an already open cell.
    ///
    /// Panics if the coordinate is outside the grid.
    pub(crate) fn carve(&mut self, coord: Cartesian2DCoordinate) {
        let index = self.cell_index(coord);
        self.cells[index] = CellState::Passage;
    }

    /// The in bounds cell one step to the North, South, East or West, whether
    /// or not it is a passage.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: GridDirection)
                                  -> Option<Cartesian2DCoordinate> {
        offset_coordinate(coord, direction, 1)
            .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Adjacent passage cells, i.e. the cells a walker standing on `coord`
    /// could step to.
    pub fn passage_neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        COMPASS_PRIMARIES
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .filter(|neighbour_coord| self.is_passage(*neighbour_coord))
            .collect()
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_width: self.column_count.0,
            cells_count: self.size(),
        }
    }

    fn cell_index(&self, coord: Cartesian2DCoordinate) -> usize {
        (coord.y as usize * self.column_count.0) + coord.x as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.cells
            .chunks(self.column_count.0)
            .map(|row| row.iter().map(|cell| cell.as_char()).collect::<String>())
            .join("\n");
        writeln!(f, "{}", text)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_width: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let y = self.current_cell_number / self.row_width;
            let x = self.current_cell_number - (y * self.row_width);
            self.current_cell_number += 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        (lower_bound, Some(lower_bound))
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = Cartesian2DCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn small_grid() -> Grid {
        Grid::new(RowsCount(3), ColumnsCount(4))
    }

    #[test]
    fn new_grid_is_all_walls() {
        let g = small_grid();
        assert_eq!(g.size(), 12);
        assert!(g.iter().all(|coord| g.cell_state(coord) == Some(CellState::Wall)));
    }

    #[test]
    fn dimension_accessors() {
        let g = small_grid();
        assert_eq!(g.rows(), RowsCount(3));
        assert_eq!(g.columns(), ColumnsCount(4));
    }

    #[test]
    fn carving_opens_a_cell_and_only_that_cell() {
        let mut g = small_grid();
        g.carve(gc(1, 2));
        assert_eq!(g.cell_state(gc(1, 2)), Some(CellState::Passage));
        let other_passages = g.iter()
                              .filter(|coord| g.is_passage(*coord))
                              .count();
        assert_eq!(other_passages, 1);

        // A second carve of the same cell changes nothing.
        g.carve(gc(1, 2));
        assert_eq!(g.cell_state(gc(1, 2)), Some(CellState::Passage));
    }

    #[test]
    fn out_of_bounds_cells_have_no_state() {
        let g = small_grid();
        assert_eq!(g.cell_state(gc(4, 0)), None);
        assert_eq!(g.cell_state(gc(0, 3)), None);
        assert!(!g.is_passage(gc(4, 0)));
    }

    #[test]
    fn neighbour_at_direction_respects_bounds() {
        let g = small_grid();
        assert_eq!(g.neighbour_at_direction(gc(0, 0), GridDirection::North), None);
        assert_eq!(g.neighbour_at_direction(gc(0, 0), GridDirection::West), None);
        assert_eq!(g.neighbour_at_direction(gc(0, 0), GridDirection::East), Some(gc(1, 0)));
        assert_eq!(g.neighbour_at_direction(gc(3, 2), GridDirection::East), None);
        assert_eq!(g.neighbour_at_direction(gc(3, 2), GridDirection::South), None);
        assert_eq!(g.neighbour_at_direction(gc(3, 2), GridDirection::North), Some(gc(3, 1)));
    }

    #[test]
    fn passage_neighbours_ignores_walls() {
        let mut g = small_grid();
        g.carve(gc(1, 1));
        g.carve(gc(0, 1));
        g.carve(gc(1, 0));
        let neighbours: Vec<_> = g.passage_neighbours(gc(1, 1)).iter().cloned().sorted();
        assert_eq!(neighbours, vec![gc(1, 0), gc(0, 1)].into_iter().sorted());

        assert!(g.passage_neighbours(gc(3, 2)).is_empty());
    }

    #[test]
    fn cell_iter_is_row_major() {
        let g = Grid::new(RowsCount(2), ColumnsCount(2));
        assert_eq!(g.iter().collect::<Vec<Cartesian2DCoordinate>>(),
                   &[gc(0, 0), gc(1, 0), gc(0, 1), gc(1, 1)]);
        assert_eq!(g.iter().size_hint(), (4, Some(4)));
    }

    #[test]
    fn display_renders_walls_and_passages() {
        let mut g = Grid::new(RowsCount(2), ColumnsCount(3));
        g.carve(gc(0, 0));
        g.carve(gc(1, 0));
        g.carve(gc(2, 1));
        assert_eq!(format!("{}", g), "  #\n## \n");
    }
}
