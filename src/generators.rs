use rand::Rng;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, CoordinateSmallVec,
                   COMPASS_PRIMARIES};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// Observation seam for presentation layers that want to watch a maze being
/// carved, one frontier evaluation at a time. Observers see the grid after
/// the evaluation and must not (and cannot) alter it.
pub trait CarveObserver {
    fn wall_opened(&mut self,
                   _candidate: Cartesian2DCoordinate,
                   _link: Cartesian2DCoordinate,
                   _grid: &Grid) {
    }
    fn wall_rejected(&mut self, _candidate: Cartesian2DCoordinate, _grid: &Grid) {
    }
}

/// The do nothing observer.
impl CarveObserver for () {}

/// Carve a perfect maze into a new `rows` x `columns` grid of walls with a
/// randomised Prim's style wall adder.
///
/// Carving anchors to lattice points - the even x, even y cells - so that a
/// wall cell always sits between two anchors. Starting from one random
/// anchor, a frontier holds the anchors at lattice distance 2 from any
/// opened cell. Each iteration removes one frontier candidate uniformly at
/// random and opens it only if exactly one of its lattice distance 2
/// neighbours is already a passage, together with the wall cell between the
/// two. Opening a cell next to exactly one existing passage extends the
/// spanning tree without ever closing a loop, which is what keeps the maze
/// perfect. Candidates next to zero or two or more open anchors are
/// discarded.
///
/// Once the frontier drains the top left and bottom right cells are forced
/// open so that the maze has fixed entry and exit points. On grids where
/// both dimensions are even the bottom right cell can never touch a carved
/// anchor and is left as an isolated island; route finding treats that as an
/// ordinary no-route outcome.
///
/// The maze is fully determined by the sequence the `rng` produces.
pub fn randomised_prim<R>(row_count: RowsCount,
                          column_count: ColumnsCount,
                          rng: &mut R)
                          -> Result<Grid>
    where R: Rng
{
    randomised_prim_observed(row_count, column_count, rng, &mut ())
}

/// The same as `randomised_prim`, reporting every frontier evaluation to `observer`.
pub fn randomised_prim_observed<R, O>(row_count: RowsCount,
                                      column_count: ColumnsCount,
                                      rng: &mut R,
                                      observer: &mut O)
                                      -> Result<Grid>
    where R: Rng,
          O: CarveObserver
{
    let (rows, columns) = (row_count.0, column_count.0);
    if rows < 2 || columns < 2 {
        return Err(ErrorKind::InvalidDimensions(rows, columns).into());
    }

    let mut grid = Grid::new(row_count, column_count);

    let start = Cartesian2DCoordinate::new(rand_even_aligned(rng, columns),
                                           rand_even_aligned(rng, rows));
    grid.carve(start);

    let mut frontier: Vec<Cartesian2DCoordinate> = wall_candidates(&grid, start).into_vec();
    while !frontier.is_empty() {

        let chosen_index = rng.gen_range(0, frontier.len());
        let candidate = frontier.swap_remove(chosen_index);

        // A candidate may be queued more than once, from different
        // directions. Re-evaluating an already open one connects it to the
        // same sole neighbour again, which changes nothing.
        if let Some(open_neighbour) = sole_open_neighbour(&grid, candidate) {
            grid.carve(candidate);
            let link = connecting_wall(candidate, open_neighbour);
            grid.carve(link);
            frontier.extend(wall_candidates(&grid, candidate));
            observer.wall_opened(candidate, link, &grid);
        } else {
            observer.wall_rejected(candidate, &grid);
        }
    }

    // Fixed entry and exit cells, whether or not carving reached them.
    grid.carve(Cartesian2DCoordinate::new(0, 0));
    grid.carve(Cartesian2DCoordinate::new(columns as u32 - 1, rows as u32 - 1));

    Ok(grid)
}

/// A random lattice anchor component: even and strictly inside `cell_count` cells.
fn rand_even_aligned<R: Rng>(rng: &mut R, cell_count: usize) -> u32 {
    2 * rng.gen_range(0, (cell_count + 1) / 2) as u32
}

/// The in bounds lattice points two cells away from `coord`.
fn wall_candidates(grid: &Grid, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
    COMPASS_PRIMARIES
        .iter()
        .filter_map(|dir| offset_coordinate(coord, *dir, 2))
        .filter(|candidate| grid.is_valid_coordinate(*candidate))
        .collect()
}

/// The already open lattice neighbour of `coord`, provided there is exactly
/// one. Zero or several open neighbours disqualify the candidate.
fn sole_open_neighbour(grid: &Grid,
                       coord: Cartesian2DCoordinate)
                       -> Option<Cartesian2DCoordinate> {
    let mut sole = None;
    for dir in &COMPASS_PRIMARIES {
        if let Some(neighbour) = offset_coordinate(coord, *dir, 2) {
            if grid.is_passage(neighbour) {
                if sole.is_some() {
                    return None;
                }
                sole = Some(neighbour);
            }
        }
    }
    sole
}

/// The wall cell between two lattice points at lattice distance 2.
fn connecting_wall(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
