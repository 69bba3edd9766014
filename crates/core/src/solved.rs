//! Solved layout - the canonical sticker arrangement and solved detection
//!
//! The 3x3x3 layout is the template. Larger cubes repeat its middle layer
//! along each axis; the 2x2x2 drops it. Cells whose template entry has no
//! stickers are the hidden interior and get no piece.

use crate::cube::Cube;
use crate::piece::OrientationMap;
use crate::types::{Axis, Coord, Face};

/// Stickers of a template cell: low/high faces on each axis it touches
fn template_colors(cell: [u8; 3]) -> Vec<Face> {
    Axis::ALL
        .into_iter()
        .filter_map(|axis| match cell[axis.index()] {
            0 => Some(axis.low()),
            2 => Some(axis.high()),
            _ => None,
        })
        .collect()
}

/// Template coordinate standing in for `value` on a cube of `dimension`
fn template_index(value: u8, dimension: u8) -> u8 {
    if value == 0 {
        0
    } else if value + 1 == dimension {
        2
    } else {
        1
    }
}

/// Sticker colors for every cell of a solved cube
#[derive(Debug, Clone)]
pub struct SolvedLayout {
    dimension: u8,
    cells: Vec<OrientationMap>,
}

impl SolvedLayout {
    pub fn new(dimension: u8) -> Self {
        let cells = cells(dimension)
            .map(|coord| {
                let cell = coord.0.map(|v| template_index(v, dimension));
                OrientationMap::identity(&template_colors(cell))
            })
            .collect();
        Self { dimension, cells }
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Identity orientation for the cell, empty for the interior
    pub fn get(&self, coord: Coord) -> Option<&OrientationMap> {
        let d = self.dimension as usize;
        let [x, y, z] = coord.0.map(usize::from);
        if x >= d || y >= d || z >= d {
            return None;
        }
        self.cells.get((x * d + y) * d + z)
    }

    /// `(cell, stickers)` in x-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &OrientationMap)> + '_ {
        cells(self.dimension).zip(self.cells.iter())
    }
}

/// Every grid cell, x-major then y then z
pub fn cells(dimension: u8) -> impl Iterator<Item = Coord> {
    (0..dimension).flat_map(move |x| {
        (0..dimension).flat_map(move |y| (0..dimension).map(move |z| Coord::new(x, y, z)))
    })
}

impl Cube {
    /// True iff every piece is at its home cell with every sticker on its
    /// own face
    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(|p| p.is_home())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_colors() {
        assert_eq!(template_colors([0, 0, 0]), vec![Face::W, Face::B, Face::R]);
        assert_eq!(template_colors([2, 1, 2]), vec![Face::Y, Face::O]);
        assert_eq!(template_colors([1, 2, 1]), vec![Face::G]);
        assert!(template_colors([1, 1, 1]).is_empty());
    }

    #[test]
    fn test_template_index_expands_middle() {
        assert_eq!((0..2).map(|v| template_index(v, 2)).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(
            (0..5).map(|v| template_index(v, 5)).collect::<Vec<_>>(),
            vec![0, 1, 1, 1, 2]
        );
    }

    #[test]
    fn test_sticker_counts() {
        // 6 faces * d^2 stickers
        for d in 2..=5u8 {
            let layout = SolvedLayout::new(d);
            let stickers: usize = layout.iter().map(|(_, o)| o.len()).sum();
            assert_eq!(stickers, 6 * (d as usize).pow(2));
        }
    }

    #[test]
    fn test_sticker_faces_match_cell() {
        let layout = SolvedLayout::new(4);
        let map = layout.get(Coord::new(3, 0, 2)).unwrap();
        assert_eq!(map.get(Face::Y), Some(Face::Y));
        assert_eq!(map.get(Face::B), Some(Face::B));
        assert_eq!(map.len(), 2);
        assert!(layout.get(Coord::new(1, 2, 1)).unwrap().is_empty());
        assert!(layout.get(Coord::new(4, 0, 0)).is_none());
    }

    #[test]
    fn test_cells_order() {
        let all: Vec<Coord> = cells(2).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Coord::new(0, 0, 0));
        assert_eq!(all[1], Coord::new(0, 0, 1));
        assert_eq!(all[7], Coord::new(1, 1, 1));
    }
}
