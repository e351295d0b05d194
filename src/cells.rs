use smallvec::SmallVec;
use std::convert::From;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}
impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}
impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDirection {
    North,
    South,
    East,
    West,
}

pub const COMPASS_PRIMARIES: [GridDirection; 4] = [GridDirection::North,
                                                   GridDirection::South,
                                                   GridDirection::East,
                                                   GridDirection::West];

/// Creates a new coordinate offset `step` cells away in the given direction.
/// Returns None if the coordinate is not representable - x or y would be
/// negative, which an unsigned coordinate cannot hold. There is no upper
/// bounds check here, grids check against their own dimensions.
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: GridDirection,
                         step: u32)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        GridDirection::North => y.checked_sub(step).map(|new_y| Cartesian2DCoordinate::new(x, new_y)),
        GridDirection::South => Some(Cartesian2DCoordinate::new(x, y + step)),
        GridDirection::East => Some(Cartesian2DCoordinate::new(x + step, y)),
        GridDirection::West => x.checked_sub(step).map(|new_x| Cartesian2DCoordinate::new(new_x, y)),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offsets_by_one_step() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::North, 1), Some(gc(1, 0)));
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::South, 1), Some(gc(1, 2)));
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::East, 1), Some(gc(2, 1)));
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::West, 1), Some(gc(0, 1)));
    }

    #[test]
    fn offsets_by_two_steps() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(offset_coordinate(gc(2, 2), GridDirection::North, 2), Some(gc(2, 0)));
        assert_eq!(offset_coordinate(gc(2, 2), GridDirection::West, 2), Some(gc(0, 2)));
        assert_eq!(offset_coordinate(gc(2, 2), GridDirection::South, 2), Some(gc(2, 4)));
        assert_eq!(offset_coordinate(gc(2, 2), GridDirection::East, 2), Some(gc(4, 2)));
    }

    #[test]
    fn unrepresentable_offsets_are_none() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(offset_coordinate(gc(0, 0), GridDirection::North, 1), None);
        assert_eq!(offset_coordinate(gc(0, 0), GridDirection::West, 1), None);
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::North, 2), None);
        assert_eq!(offset_coordinate(gc(1, 1), GridDirection::West, 2), None);
    }

    #[test]
    fn coordinate_from_pair() {
        assert_eq!(Cartesian2DCoordinate::from((3, 4)),
                   Cartesian2DCoordinate::new(3, 4));
    }
}
