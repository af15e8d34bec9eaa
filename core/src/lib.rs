#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod render;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl FieldConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(FieldError::EmptyDimension);
        }

        let capacity = mult(size.0, size.1);
        if mines > capacity {
            return Err(FieldError::TooManyMines {
                requested: mines,
                capacity,
            });
        }

        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn is_full(&self) -> bool {
        self.mines >= self.total_cells()
    }
}

/// A fully labeled field: every cell is either a mine or carries its adjacent mine count.
///
/// Only built through the labeling pass, deserialized fields are relabeled and rejected when their
/// labels disagree. There is no way to mutate cells afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LabeledCells")]
pub struct Minefield {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
}

/// Untrusted serialized form of a [`Minefield`].
#[derive(Deserialize)]
struct LabeledCells {
    cells: Array2<Cell>,
}

impl TryFrom<LabeledCells> for Minefield {
    type Error = FieldError;

    fn try_from(raw: LabeledCells) -> Result<Self> {
        let field = Self::from_mine_mask(&raw.cells.map(|cell| cell.is_mine()))?;
        if field.cells != raw.cells {
            return Err(FieldError::InvalidLabels);
        }
        Ok(field)
    }
}

impl Minefield {
    /// Labels every safe cell of `mine_mask` with the number of mines around it.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let size = array_size(mine_mask).ok_or(FieldError::InvalidBoardShape)?;
        Ok(Self::label(mine_mask, size))
    }

    /// `size` must be the shape of `mine_mask`.
    pub(crate) fn label(mine_mask: &Array2<bool>, size: Coord2) -> Self {
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            if mine_mask[(x, y)] {
                mine_count = mine_count.saturating_add(1);
                return Cell::Mine;
            }

            // indices stay below `size`, which is a Coord2
            let coords = (x as Coord, y as Coord);
            let adjacent = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::from_count(adjacent as u8)
        });

        Self {
            size,
            cells,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(FieldError::EmptyDimension);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(FieldError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::label(&mine_mask, size))
    }

    pub fn config(&self) -> FieldConfig {
        FieldConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (x, y) = self.size();
        mult(x, y)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(FieldError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Mines among the in-bounds neighbors of `coords`, counted regardless of what `coords` holds.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count();
        count as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        self.cells.iter_neighbors(coords)
    }

    /// Rows in increasing `y`, each yielding cells in increasing `x`.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.axis_iter(Axis(1))
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(FieldConfig::new((0, 3), 0), Err(FieldError::EmptyDimension));
        assert_eq!(FieldConfig::new((3, 0), 0), Err(FieldError::EmptyDimension));
    }

    #[test]
    fn config_rejects_more_mines_than_cells() {
        assert_eq!(
            FieldConfig::new((2, 2), 5),
            Err(FieldError::TooManyMines {
                requested: 5,
                capacity: 4
            })
        );
        assert!(FieldConfig::new((2, 2), 4).unwrap().is_full());
        assert!(!FieldConfig::new((2, 2), 0).unwrap().is_full());
    }

    #[test]
    fn labels_count_surrounding_mines() {
        // M 2 M
        // 1 2 1
        let field = Minefield::from_mine_coords((3, 2), &[(0, 0), (2, 0)]).unwrap();

        assert_eq!(field[(0, 0)], Cell::Mine);
        assert_eq!(field[(1, 0)], Cell::Count(2));
        assert_eq!(field[(0, 1)], Cell::Count(1));
        assert_eq!(field[(1, 1)], Cell::Count(2));
        assert_eq!(field[(2, 1)], Cell::Count(1));
        assert_eq!(field.mine_count(), 2);
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let mines = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];
        let field = Minefield::from_mine_coords((3, 3), &mines).unwrap();

        assert_eq!(field[(1, 1)], Cell::Count(8));
        assert_eq!(field.adjacent_mine_count((1, 1)), 8);
    }

    #[test]
    fn no_mines_leaves_every_cell_empty() {
        let field = Minefield::from_mine_coords((4, 3), &[]).unwrap();

        assert!(field.rows().flatten().all(|&cell| cell == Cell::Empty));
        assert_eq!(field.mine_count(), 0);
    }

    #[test]
    fn out_of_bounds_mine_is_rejected() {
        assert_eq!(
            Minefield::from_mine_coords((2, 2), &[(2, 0)]),
            Err(FieldError::InvalidCoords)
        );
        assert_eq!(
            Minefield::from_mine_coords((0, 2), &[]),
            Err(FieldError::EmptyDimension)
        );
    }

    #[test]
    fn accessors_report_shape() {
        let field = Minefield::from_mine_coords((5, 2), &[(4, 1)]).unwrap();

        assert_eq!(field.size(), (5, 2));
        assert_eq!(field.width(), 5);
        assert_eq!(field.height(), 2);
        assert_eq!(field.total_cells(), 10);
        assert_eq!(field.config(), FieldConfig::new_unchecked((5, 2), 1));
        assert_eq!(field.cell_at((4, 1)), Ok(Cell::Mine));
        assert_eq!(field.cell_at((5, 0)), Err(FieldError::InvalidCoords));
    }

    #[test]
    fn rows_run_along_x() {
        let field = Minefield::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        let last_row = field.rows().nth(1).unwrap();

        assert_eq!(last_row.len(), 3);
        assert_eq!(last_row[2], Cell::Mine);
    }

    #[test]
    fn wide_mask_is_labeled_across_its_width() {
        let mut mask: Array2<bool> = Array2::default((300, 1));
        mask[[299, 0]] = true;

        let field = Minefield::from_mine_mask(&mask).unwrap();

        assert_eq!(field.size(), (300, 1));
        assert_eq!(field[(298, 0)], Cell::Count(1));
        assert_eq!(field[(297, 0)], Cell::Empty);
    }

    #[test]
    fn mask_past_coordinate_range_is_rejected() {
        let mask: Array2<bool> = Array2::default((usize::from(Coord::MAX) + 1, 1));

        assert_eq!(
            Minefield::from_mine_mask(&mask),
            Err(FieldError::InvalidBoardShape)
        );
    }

    #[test]
    fn serializes_round_trip() {
        let field = Minefield::from_mine_coords((2, 2), &[(1, 1)]).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        let back: Minefield = serde_json::from_str(&json).unwrap();

        assert_eq!(back, field);
    }

    #[test]
    fn mislabeled_json_is_rejected() {
        let field = Minefield::from_mine_coords((2, 1), &[(0, 0)]).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        let tampered = json.replace(r#"{"Count":1}"#, r#""Empty""#);

        assert_ne!(tampered, json);
        assert!(serde_json::from_str::<Minefield>(&tampered).is_err());
    }

    #[test]
    fn mine_count_is_recomputed_from_cells() {
        let field = Minefield::from_mine_coords((2, 1), &[(0, 0)]).unwrap();
        let json = serde_json::to_string(&field)
            .unwrap()
            .replace(r#""mine_count":1"#, r#""mine_count":2"#);

        let back: Minefield = serde_json::from_str(&json).unwrap();

        assert_eq!(back.mine_count(), 1);
    }
}
