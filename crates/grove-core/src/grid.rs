use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two tile kinds a cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Tree,
    Grass,
}

impl Tile {
    /// Get the other tile kind.
    pub fn opposite(self) -> Tile {
        match self {
            Tile::Tree => Tile::Grass,
            Tile::Grass => Tile::Tree,
        }
    }

    /// Single-character form used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Tile::Tree => 'T',
            Tile::Grass => 'G',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Tree => write!(f, "Tree"),
            Tile::Grass => write!(f, "Grass"),
        }
    }
}

/// Reason a grid could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// Width or height was zero.
    Zero,
    /// Width or height was odd; an odd side cannot split half and half.
    Odd(usize),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::Zero => write!(f, "grid dimensions must be positive"),
            DimensionError::Odd(n) => {
                write!(f, "grid dimensions must be even, got {n}")
            }
        }
    }
}

impl std::error::Error for DimensionError {}

/// The puzzle board: a fixed-size rectangle of optional tiles.
///
/// Cells are `None` until the generator assigns them. `(0, 0)` is the
/// upper-left corner; `x` grows to the right and `y` grows downward. Cells
/// are stored in a flat row-major vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an all-unset grid.
    ///
    /// Both dimensions must be positive and even, otherwise no assignment
    /// can put exactly as many trees as grass tiles in every row and column.
    pub fn new(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError::Zero);
        }
        if width % 2 != 0 {
            return Err(DimensionError::Odd(width));
        }
        if height % 2 != 0 {
            return Err(DimensionError::Odd(height));
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Tile at `(x, y)`, or `None` while the cell is unset.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.cells[self.index(x, y)]
    }

    /// Assign the tile at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(tile);
    }

    /// Blank every cell without reallocating. Used between fill attempts.
    pub fn reset_all(&mut self) {
        self.cells.fill(None);
    }

    /// Whether every cell has been assigned a tile.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = match self.get(x, y) {
                    Some(tile) => tile.symbol(),
                    None => '.',
                };
                write!(f, "{c}")?;
                if x + 1 < self.width {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Tile::Tree.opposite(), Tile::Grass);
        assert_eq!(Tile::Grass.opposite(), Tile::Tree);
    }

    #[test]
    fn test_new_starts_unset() {
        let grid = Grid::new(6, 8).unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 8);
        assert!(!grid.is_complete());
        for y in 0..8 {
            for x in 0..6 {
                assert_eq!(grid.get(x, y), None);
            }
        }
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(Grid::new(0, 4), Err(DimensionError::Zero));
        assert_eq!(Grid::new(4, 0), Err(DimensionError::Zero));
        assert_eq!(Grid::new(0, 0), Err(DimensionError::Zero));
    }

    #[test]
    fn test_rejects_odd_dimensions() {
        assert_eq!(Grid::new(3, 4), Err(DimensionError::Odd(3)));
        assert_eq!(Grid::new(4, 7), Err(DimensionError::Odd(7)));
        assert_eq!(Grid::new(5, 5), Err(DimensionError::Odd(5)));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 0, Tile::Tree);
        assert_eq!(grid.get(1, 0), Some(Tile::Tree));
        assert_eq!(grid.get(0, 0), None);

        grid.set(1, 0, Tile::Grass);
        assert_eq!(grid.get(1, 0), Some(Tile::Grass));

        // Reads are stable until the next mutation.
        assert_eq!(grid.get(1, 0), Some(Tile::Grass));
        assert_eq!(grid.get(1, 0), Some(Tile::Grass));
    }

    #[test]
    fn test_reset_all_blanks_every_cell() {
        let mut grid = Grid::new(4, 2).unwrap();
        for y in 0..2 {
            for x in 0..4 {
                grid.set(x, y, Tile::Tree);
            }
        }
        assert!(grid.is_complete());

        grid.reset_all();
        assert!(!grid.is_complete());
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), None);
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_range_panics() {
        let grid = Grid::new(2, 2).unwrap();
        grid.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_out_of_range_panics() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 2, Tile::Tree);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, Tile::Tree);
        grid.set(1, 0, Tile::Grass);
        grid.set(0, 1, Tile::Grass);
        assert_eq!(grid.to_string(), "T G\nG .\n");
    }

    #[test]
    fn test_tile_serde_roundtrip() {
        let json = serde_json::to_string(&Tile::Tree).unwrap();
        assert_eq!(json, "\"Tree\"");
        let tile: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, Tile::Tree);
    }
}
