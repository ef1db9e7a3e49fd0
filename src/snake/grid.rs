//! Board geometry and movement directions.
//!
//! Cells are addressed by a flat index `0..n*n`, row-major. Wall detection
//! is a property of `Grid::neighbor`: it answers in explicit row/column
//! terms and returns `None` when the move would leave the board, which
//! covers both the out-of-range cases and the horizontal wrap cases the
//! flat-index arithmetic would otherwise hide.

/// Movement direction for the snake head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Map a `KeyboardEvent.key` value to a direction. Arrow keys and WASD;
    /// anything else is not a steering key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" => Some(Direction::Up),
            "ArrowDown" | "s" => Some(Direction::Down),
            "ArrowLeft" | "a" => Some(Direction::Left),
            "ArrowRight" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Square board of `side x side` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    side: usize,
}

impl Grid {
    pub const fn new(side: usize) -> Self {
        Self { side }
    }

    pub const fn side(&self) -> usize {
        self.side
    }

    pub const fn cell_count(&self) -> usize {
        self.side * self.side
    }

    pub const fn row(&self, index: usize) -> usize {
        index / self.side
    }

    pub const fn col(&self, index: usize) -> usize {
        index % self.side
    }

    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// The adjacent cell in `direction`, or `None` when that move would
    /// cross the board edge.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (row, col) = (self.row(index), self.col(index));
        match direction {
            Direction::Up if row > 0 => Some(self.index(row - 1, col)),
            Direction::Down if row + 1 < self.side => Some(self.index(row + 1, col)),
            Direction::Left if col > 0 => Some(self.index(row, col - 1)),
            Direction::Right if col + 1 < self.side => Some(self.index(row, col + 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_roundtrip() {
        let grid = Grid::new(10);
        for index in 0..grid.cell_count() {
            assert_eq!(grid.index(grid.row(index), grid.col(index)), index);
        }
    }

    #[test]
    fn test_neighbor_interior() {
        let grid = Grid::new(10);
        assert_eq!(grid.neighbor(44, Direction::Right), Some(45));
        assert_eq!(grid.neighbor(44, Direction::Left), Some(43));
        assert_eq!(grid.neighbor(44, Direction::Up), Some(34));
        assert_eq!(grid.neighbor(44, Direction::Down), Some(54));
    }

    #[test]
    fn test_neighbor_outer_edges() {
        let grid = Grid::new(10);
        assert_eq!(grid.neighbor(5, Direction::Up), None);
        assert_eq!(grid.neighbor(95, Direction::Down), None);
        assert_eq!(grid.neighbor(30, Direction::Left), None);
        assert_eq!(grid.neighbor(39, Direction::Right), None);
    }

    #[test]
    fn test_neighbor_refuses_horizontal_wrap() {
        let grid = Grid::new(10);
        // Index 19 is (row 1, col 9); +1 in flat terms would be (row 2,
        // col 0), which the explicit column check rules out.
        assert_eq!(grid.neighbor(19, Direction::Right), None);
        // Same on the left edge: 20 -> 19 must not happen.
        assert_eq!(grid.neighbor(20, Direction::Left), None);
    }

    #[test]
    fn test_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("a"), Some(Direction::Left));
        assert_eq!(Direction::from_key("d"), Some(Direction::Right));
        assert_eq!(Direction::from_key("Escape"), None);
        assert_eq!(Direction::from_key("W"), None);
    }
}
