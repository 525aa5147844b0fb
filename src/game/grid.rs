use super::{action::Direction, state::Point};

/// Square board with 1-indexed cells in `[1, size]` on both axes.
///
/// The board is toroidal: leaving one edge re-enters from the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    /// Check if a point is on the board
    pub fn contains(&self, point: Point) -> bool {
        (1..=self.size).contains(&point.x) && (1..=self.size).contains(&point.y)
    }

    /// Bring a point that stepped one cell off the board back onto it.
    pub fn wrap(&self, point: Point) -> Point {
        Point::new(self.wrap_axis(point.x), self.wrap_axis(point.y))
    }

    fn wrap_axis(&self, value: i32) -> i32 {
        if value > self.size {
            1
        } else if value < 1 {
            self.size
        } else {
            value
        }
    }

    /// The neighbouring cell in `direction`, wrapped around the edges
    pub fn step(&self, point: Point, direction: Direction) -> Point {
        self.wrap(point.moved_in_direction(direction))
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (1..=self.size).flat_map(move |y| (1..=self.size).map(move |x| Point::new(x, y)))
    }

    /// Cells food may be placed on: `[1, size - 1]` on both axes.
    /// The last row and column never hold food.
    pub fn food_cells(&self) -> impl Iterator<Item = Point> + '_ {
        (1..self.size).flat_map(move |y| (1..self.size).map(move |x| Point::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let grid = Grid::default();
        assert!(grid.contains(Point::new(1, 1)));
        assert!(grid.contains(Point::new(10, 10)));
        assert!(!grid.contains(Point::new(0, 5)));
        assert!(!grid.contains(Point::new(5, 11)));
    }

    #[test]
    fn test_wrap_edges() {
        let grid = Grid::default();
        assert_eq!(grid.wrap(Point::new(11, 4)), Point::new(1, 4));
        assert_eq!(grid.wrap(Point::new(0, 4)), Point::new(10, 4));
        assert_eq!(grid.wrap(Point::new(4, 0)), Point::new(4, 10));
        assert_eq!(grid.wrap(Point::new(4, 11)), Point::new(4, 1));
        assert_eq!(grid.wrap(Point::new(4, 4)), Point::new(4, 4));
    }

    #[test]
    fn test_step_wraps() {
        let grid = Grid::default();
        assert_eq!(grid.step(Point::new(3, 1), Direction::Up), Point::new(3, 10));
        assert_eq!(grid.step(Point::new(10, 3), Direction::Right), Point::new(1, 3));
        assert_eq!(grid.step(Point::new(3, 3), Direction::Down), Point::new(3, 4));
    }

    #[test]
    fn test_cell_counts() {
        let grid = Grid::default();
        assert_eq!(grid.cells().count(), 100);
        assert_eq!(grid.food_cells().count(), 81);
        assert!(grid.food_cells().all(|p| p.x < 10 && p.y < 10));
        assert_eq!(grid.cells().next(), Some(Point::new(1, 1)));
        assert_eq!(grid.cells().nth(1), Some(Point::new(2, 1)));
    }
}
