use docopt::Docopt;
use rand::{Rng, SeedableRng, XorShiftRng};
use serde_derive::Deserialize;
use std::{
    io,
    io::prelude::*,
    fs::File
};
use warren::{
    cells::Cartesian2DCoordinate,
    generators,
    pathing::{self, PathDisplay},
    units::{ColumnsCount, RowsCount},
};

const USAGE: &str = "Warren

Usage:
    warren_driver -h | --help
    warren_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--show-path] [--start-point-x=<x> --start-point-y=<y>] [--end-point-x=<e1> --end-point-y=<e2>] [--text-out=<path>]

Options:
    -h --help            Show this screen.
    --grid-size=<n>      The grid size is n * n.
    --grid-width=<w>     The grid width in a w*h grid [default: 21].
    --grid-height=<h>    The grid height in a w*h grid [default: 21].
    --seed=<s>           Unsigned integer seeding the random number generator, for reproducible mazes.
    --show-path          Overlay the route between the start and end points on the rendering.
    --start-point-x=<x>  x coordinate of the route start [default: 0].
    --start-point-y=<y>  y coordinate of the route start [default: 0].
    --end-point-x=<e1>   x coordinate of the route end. Defaults to the bottom right cell.
    --end-point-y=<e2>   y coordinate of the route end. Defaults to the bottom right cell.
    --text-out=<path>    Output file path for the textual rendering of the maze.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_start_point_x: u32,
    flag_start_point_y: u32,
    flag_end_point_x: Option<u32>,
    flag_end_point_y: Option<u32>,
    flag_text_out: String,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Warren(::warren::errors::Error, ::warren::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = seeded_rng(seed);
    let maze_grid = generators::randomised_prim(RowsCount(height), ColumnsCount(width), &mut rng)?;

    let rendering = if args.flag_show_path {

        let start = Cartesian2DCoordinate::new(args.flag_start_point_x, args.flag_start_point_y);
        let end = Cartesian2DCoordinate::new(args.flag_end_point_x
                                                 .unwrap_or(width as u32 - 1),
                                             args.flag_end_point_y
                                                 .unwrap_or(height as u32 - 1));

        match pathing::depth_first_path(&maze_grid, start, end) {
            Some(path) => format!("{}", PathDisplay::new(&maze_grid, &path)),
            None => {
                // No route is an ordinary outcome, e.g. an isolated forced
                // open corner on an even sized grid. Render the bare maze.
                eprintln!("No route from ({}, {}) to ({}, {}) exists in this maze.",
                          start.x, start.y, end.x, end.y);
                format!("{}", maze_grid)
            }
        }
    } else {
        format!("{}", maze_grid)
    };

    if args.flag_text_out.is_empty() {
        print!("{}", rendering);
    } else {
        write_text_to_file(&rendering, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Spread a user supplied seed over the four words an xorshift generator
/// wants. The last word keeps a bit set so the all zero state cannot occur.
fn seeded_rng(seed: u64) -> XorShiftRng {
    let low = seed as u32;
    let high = (seed >> 32) as u32;
    XorShiftRng::from_seed([low ^ 0x9E37_79B9,
                            high ^ 0x7F4A_7C15,
                            low.wrapping_add(0x6C07_8965),
                            high | 1])
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
