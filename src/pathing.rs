use std::fmt;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, GridDirection};
use crate::grid::{CellState, Grid};
use crate::masks::VisitedMask;
use crate::units::{Height, Width};
use crate::utils;
use crate::utils::FnvHashSet;

/// Neighbour exploration preference for the depth first search: east, west,
/// south then north. Any order finds a route when one exists; fixing it
/// makes the returned route reproducible for a given grid.
const EXPLORATION_ORDER: [GridDirection; 4] = [GridDirection::East,
                                               GridDirection::West,
                                               GridDirection::South,
                                               GridDirection::North];

/// Observation seam for presentation layers that want to watch the search,
/// one cell entry or backtrack at a time. Observers see the path so far and
/// the visited mask and must not (and cannot) alter the search state.
pub trait SolveObserver {
    fn cell_entered(&mut self,
                    _coord: Cartesian2DCoordinate,
                    _path: &[Cartesian2DCoordinate],
                    _visited: &VisitedMask) {
    }
    fn cell_backtracked(&mut self,
                        _coord: Cartesian2DCoordinate,
                        _path: &[Cartesian2DCoordinate],
                        _visited: &VisitedMask) {
    }
}

/// The do nothing observer.
impl SolveObserver for () {}

/// One suspended search position: a cell on the current path and the next
/// compass direction to try from it. An explicit stack of these replaces
/// the call stack of a recursive search, so route finding never risks
/// recursion depth limits on large grids.
#[derive(Debug, Copy, Clone)]
struct Frame {
    coord: Cartesian2DCoordinate,
    next_direction: usize,
}

/// Find a route between two passage cells with an exhaustive depth first
/// search, visiting each cell at most once.
///
/// Returns the route as coordinates from `start` to `end` inclusive, every
/// consecutive pair adjacent, or `None` when no route exists. A wall or out
/// of bounds endpoint is simply unreachable, so it also gives `None` rather
/// than an error. The route is *a* route, not necessarily the shortest,
/// though on a perfect maze the two coincide as there is only one.
pub fn depth_first_path(grid: &Grid,
                        start: Cartesian2DCoordinate,
                        end: Cartesian2DCoordinate)
                        -> Option<Vec<Cartesian2DCoordinate>> {
    depth_first_path_observed(grid, start, end, &mut ())
}

/// The same as `depth_first_path`, reporting every cell entry and backtrack
/// to `observer`.
pub fn depth_first_path_observed<O>(grid: &Grid,
                                    start: Cartesian2DCoordinate,
                                    end: Cartesian2DCoordinate,
                                    observer: &mut O)
                                    -> Option<Vec<Cartesian2DCoordinate>>
    where O: SolveObserver
{
    if !grid.is_passage(start) {
        return None;
    }

    let mut visited = VisitedMask::new(Width(grid.columns().0), Height(grid.rows().0));
    let mut path = Vec::new();
    let mut stack = Vec::new();

    visited.visit(start);
    path.push(start);
    stack.push(Frame {
        coord: start,
        next_direction: 0,
    });
    observer.cell_entered(start, &path, &visited);
    if start == end {
        return Some(path);
    }

    while let Some(frame) = stack.last_mut() {

        if frame.next_direction >= EXPLORATION_ORDER.len() {
            // Every direction from this cell failed: undo the move.
            let abandoned = frame.coord;
            stack.pop();
            path.pop();
            observer.cell_backtracked(abandoned, &path, &visited);
            continue;
        }

        let direction = EXPLORATION_ORDER[frame.next_direction];
        frame.next_direction += 1;
        let current = frame.coord;

        let next = match offset_coordinate(current, direction, 1) {
            Some(coord) => coord,
            None => continue,
        };
        if !grid.is_passage(next) || visited.is_visited(next) {
            continue;
        }

        visited.visit(next);
        path.push(next);
        stack.push(Frame {
            coord: next,
            next_direction: 0,
        });
        observer.cell_entered(next, &path, &visited);

        if next == end {
            return Some(path);
        }
    }

    // The start cell's own frame was abandoned: every reachable cell failed.
    None
}

/// Textual rendering of a grid with a route overlaid on it.
#[derive(Debug)]
pub struct PathDisplay<'a> {
    grid: &'a Grid,
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}
impl<'a> PathDisplay<'a> {
    pub fn new(grid: &'a Grid, path: &[Cartesian2DCoordinate]) -> PathDisplay<'a> {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay {
            grid,
            on_path_coordinates,
        }
    }
}
impl<'a> fmt::Display for PathDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let last_column = self.grid.columns().0 as u32 - 1;
        let mut output = String::with_capacity(self.grid.size() + self.grid.rows().0);
        for coord in self.grid.iter() {
            if self.on_path_coordinates.contains(&coord) {
                output.push('.');
            } else {
                output.push(self.grid.cell_state(coord).map_or('#', CellState::as_char));
            }
            if coord.x == last_column {
                output.push('\n');
            }
        }
        write!(f, "{}", output)
    }
}
