use bit_set::BitSet;

use crate::cells::Cartesian2DCoordinate;
use crate::units::{Height, Width};

/// A grid shaped boolean mask recording the cells already explored by a
/// single search. Created when a solve starts and dropped when it concludes.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    visited: BitSet,
    pub width: u32,
    pub height: u32,
}

impl VisitedMask {
    pub fn new(width: Width, height: Height) -> VisitedMask {
        VisitedMask {
            visited: BitSet::with_capacity(width.0 * height.0),
            width: width.0 as u32,
            height: height.0 as u32,
        }
    }

    /// Mark a cell as explored. Cells outside the mask's 2d space are ignored.
    pub fn visit(&mut self, coord: Cartesian2DCoordinate) {
        if coord.x < self.width && coord.y < self.height {
            self.visited.insert((coord.y * self.width + coord.x) as usize);
        }
    }

    /// Has the cell been explored already?
    ///
    /// A coordinate outside the bounds of the mask's 2d space is never visited.
    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        if coord.x < self.width && coord.y < self.height {
            let bit_index = (coord.y * self.width + coord.x) as usize;
            self.visited.contains(bit_index)
        } else {
            false
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn fresh_mask_has_nothing_visited() {
        let mask = VisitedMask::new(Width(4), Height(3));
        assert_eq!(mask.visited_count(), 0);
        assert!(!mask.is_visited(Cartesian2DCoordinate::new(0, 0)));
    }

    #[test]
    fn visiting_marks_only_that_cell() {
        let mut mask = VisitedMask::new(Width(4), Height(3));
        let coord = Cartesian2DCoordinate::new(2, 1);
        mask.visit(coord);
        assert!(mask.is_visited(coord));
        assert!(!mask.is_visited(Cartesian2DCoordinate::new(1, 2)));
        assert_eq!(mask.visited_count(), 1);

        mask.visit(coord);
        assert_eq!(mask.visited_count(), 1);
    }

    #[test]
    fn out_of_bounds_cells_are_never_visited() {
        let mut mask = VisitedMask::new(Width(2), Height(2));
        let outside = Cartesian2DCoordinate::new(5, 5);
        mask.visit(outside);
        assert!(!mask.is_visited(outside));
        assert_eq!(mask.visited_count(), 0);
    }
}
