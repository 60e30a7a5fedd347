use std::fmt;
use std::ops::Add;

use crate::collections::FxIndexSet;
use crate::errors::GridError;


/// Position on a 2D grid
/// y is the row (grows downward), x is the column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

impl Point {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }
}

impl Add for Point {
    type Output = Self;

    /// Sum coordinates, e.g. to apply a direction delta
    fn add(self, rhs: Self) -> Self {
        Self::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}


/// Straight direction deltas: down, up, right, left
pub const STRAIGHT_DIRECTIONS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// Diagonal direction deltas: down-left, down-right, up-left, up-right
pub const DIAGONAL_DIRECTIONS: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(-1, 1),
];

/// Map an arrow symbol (`v ^ > <`) to its straight direction delta
pub fn arrow_direction(symbol: char) -> Option<Point> {
    match symbol {
        'v' => Some(Point::new(1, 0)),
        '^' => Some(Point::new(-1, 0)),
        '>' => Some(Point::new(0, 1)),
        '<' => Some(Point::new(0, -1)),
        _ => None,
    }
}


/// How parsing treats blank lines
/// Puzzle inputs use both layouts, so the caller must pick one explicitly
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankLines {
    /// Stop at the first blank line (grid followed by a trailing section)
    Stop,
    /// Skip blank lines and keep parsing (blank-line-delimited grid rows)
    Skip,
}


/// Rectangular 2D grid parsed from a block of text
/// Invariant: all rows have the same length, or the grid is empty
/// A deep, independent copy is a `clone()`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
}

impl Grid<char> {
    /// Parse a text block into a grid of characters
    /// Lines are split on `'\n'` and trailing whitespace is trimmed per line
    pub fn parse(input: &str, blank_lines: BlankLines) -> Result<Self, GridError> {
        parse_rows(input, blank_lines, |c| c)
    }
}

impl Grid<Option<u32>> {
    /// Parse a text block into a grid of decimal digits
    /// A character that is not a digit is stored as `None` rather than erroring
    pub fn parse_digits(input: &str, blank_lines: BlankLines) -> Result<Self, GridError> {
        parse_rows(input, blank_lines, |c| c.to_digit(10))
    }
}

fn parse_rows<T>(
    input: &str,
    blank_lines: BlankLines,
    cell: impl Fn(char) -> T,
) -> Result<Grid<T>, GridError> {
    let mut cells = Vec::new();

    for line in input.split('\n') {
        let line = line.trim_end();
        if line.is_empty() {
            match blank_lines {
                BlankLines::Stop => break,
                BlankLines::Skip => continue,
            }
        }
        cells.push(line.chars().map(&cell).collect());
    }

    Grid::from_rows(cells)
}

impl<T> Grid<T> {
    /// Build a grid from pre-split rows, enforcing the equal-length invariant
    fn from_rows(cells: Vec<Vec<T>>) -> Result<Self, GridError> {
        if let Some(first) = cells.first() {
            let expected = first.len();
            for (row, values) in cells.iter().enumerate() {
                if values.len() != expected {
                    return Err(GridError::MalformedGrid {
                        row,
                        found: values.len(),
                        expected,
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Check if the point is within the bounds of the grid
    pub fn in_bounds(&self, p: Point) -> bool {
        p.y >= 0 && p.x >= 0 && (p.y as usize) < self.rows() && (p.x as usize) < self.cols()
    }

    /// Bounds-checked read; an out-of-bounds point reads as `None`
    pub fn get(&self, p: Point) -> Option<&T> {
        if self.in_bounds(p) {
            Some(&self.cells[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    /// Bounds-checked write; writes to out-of-bounds points are ignored
    pub fn set(&mut self, p: Point, value: T) {
        if self.in_bounds(p) {
            self.cells[p.y as usize][p.x as usize] = value;
        }
    }

    /// All in-bounds neighbors of `p` along the requested direction classes
    /// At least one of the two classes must be requested
    /// The set iterates in direction-table order (down, up, right, left, then diagonals)
    pub fn neighbors(
        &self,
        p: Point,
        include_straight: bool,
        include_diagonal: bool,
    ) -> Result<FxIndexSet<Point>, GridError> {
        let mut directions: Vec<Point> = Vec::new();
        if include_straight {
            directions.extend(STRAIGHT_DIRECTIONS);
        }
        if include_diagonal {
            directions.extend(DIAGONAL_DIRECTIONS);
        }
        if directions.is_empty() {
            return Err(GridError::InvalidArgument(
                "include_straight or include_diagonal must be true",
            ));
        }

        let mut neighbors = FxIndexSet::default();
        for delta in directions {
            let neighbor = p + delta;
            if self.in_bounds(neighbor) {
                neighbors.insert(neighbor);
            }
        }
        Ok(neighbors)
    }

    /// Iterate over all cells in row-major order, column-major within a row
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, value)| (Point::new(y as i32, x as i32), value))
        })
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Render rows joined by newlines, suitable for logging or debugging
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_grid() {
        let grid = Grid::parse("ab\ncd\nef", BlankLines::Stop).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(Point::new(0, 0)), Some(&'a'));
        assert_eq!(grid.get(Point::new(2, 1)), Some(&'f'));
    }

    #[test]
    fn test_parse_trims_trailing_whitespace() {
        let grid = Grid::parse("ab  \ncd\t\n", BlankLines::Stop).unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn test_parse_stops_at_blank_line() {
        let grid = Grid::parse("ab\ncd\n\nrest of the input", BlankLines::Stop).unwrap();

        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Grid::parse("ab\n\ncd\n\nef", BlankLines::Skip).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.get(Point::new(2, 0)), Some(&'e'));
    }

    #[test]
    fn test_parse_rejects_unequal_rows() {
        let result = Grid::parse("ab\ncde", BlankLines::Stop);

        assert_eq!(
            result.unwrap_err(),
            GridError::MalformedGrid {
                row: 1,
                found: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let grid = Grid::parse("", BlankLines::Stop).unwrap();

        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert!(!grid.in_bounds(Point::new(0, 0)));
    }

    #[test]
    fn test_parse_digits() {
        let grid = Grid::parse_digits("12\n3x", BlankLines::Stop).unwrap();

        assert_eq!(grid.get(Point::new(0, 0)), Some(&Some(1)));
        assert_eq!(grid.get(Point::new(1, 0)), Some(&Some(3)));
        // Non-digit cells are absent, not an error
        assert_eq!(grid.get(Point::new(1, 1)), Some(&None));
    }

    #[test]
    fn test_in_bounds_covers_exact_rectangle() {
        let grid = Grid::parse("abc\ndef", BlankLines::Stop).unwrap();

        for y in 0..2 {
            for x in 0..3 {
                assert!(grid.in_bounds(Point::new(y, x)));
            }
        }
        assert!(!grid.in_bounds(Point::new(-1, 0)));
        assert!(!grid.in_bounds(Point::new(0, -1)));
        assert!(!grid.in_bounds(Point::new(2, 0)));
        assert!(!grid.in_bounds(Point::new(0, 3)));
    }

    #[test]
    fn test_get_out_of_bounds_returns_none() {
        let grid = Grid::parse("ab", BlankLines::Stop).unwrap();

        assert_eq!(grid.get(Point::new(0, 2)), None);
        assert_eq!(grid.get(Point::new(-1, -1)), None);
    }

    #[test]
    fn test_set_in_bounds_mutates() {
        let mut grid = Grid::parse("ab\ncd", BlankLines::Stop).unwrap();

        grid.set(Point::new(1, 1), 'z');
        assert_eq!(grid.get(Point::new(1, 1)), Some(&'z'));
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let mut grid = Grid::parse("ab\ncd", BlankLines::Stop).unwrap();
        let original = grid.clone();

        grid.set(Point::new(5, 5), 'z');
        grid.set(Point::new(-1, 0), 'z');
        assert_eq!(grid, original);
    }

    #[test]
    fn test_neighbors_requires_a_direction_class() {
        let grid = Grid::parse("abc\ndef\nghi", BlankLines::Stop).unwrap();

        let result = grid.neighbors(Point::new(1, 1), false, false);
        assert!(matches!(result, Err(GridError::InvalidArgument(_))));
    }

    #[test]
    fn test_neighbors_straight_only() {
        let grid = Grid::parse("abc\ndef\nghi", BlankLines::Stop).unwrap();

        let neighbors = grid.neighbors(Point::new(1, 1), true, false).unwrap();
        let expected: FxIndexSet<Point> = [
            Point::new(2, 1),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(1, 0),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn test_neighbors_straight_and_diagonal() {
        let grid = Grid::parse("abc\ndef\nghi", BlankLines::Stop).unwrap();

        let neighbors = grid.neighbors(Point::new(1, 1), true, true).unwrap();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|&p| grid.in_bounds(p)));
    }

    #[test]
    fn test_neighbors_clipped_at_corner() {
        let grid = Grid::parse("abc\ndef\nghi", BlankLines::Stop).unwrap();

        let straight = grid.neighbors(Point::new(0, 0), true, false).unwrap();
        assert_eq!(straight.len(), 2);

        let both = grid.neighbors(Point::new(0, 0), true, true).unwrap();
        assert_eq!(both.len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Grid::parse("ab\ncd", BlankLines::Stop).unwrap();
        let mut copy = original.clone();

        assert_eq!(copy, original);
        copy.set(Point::new(0, 0), 'z');
        assert_eq!(original.get(Point::new(0, 0)), Some(&'a'));
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::parse("ab\ncd", BlankLines::Stop).unwrap();

        let cells: Vec<(Point, char)> = grid.iter().map(|(p, &c)| (p, c)).collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, 0), 'a'),
                (Point::new(0, 1), 'b'),
                (Point::new(1, 0), 'c'),
                (Point::new(1, 1), 'd'),
            ]
        );
    }

    #[test]
    fn test_display_round_trip() {
        let input = "ab\ncd";
        let grid = Grid::parse(input, BlankLines::Stop).unwrap();

        assert_eq!(grid.to_string(), input);
    }

    #[test]
    fn test_point_addition() {
        let p = Point::new(2, 3) + Point::new(-1, 1);
        assert_eq!(p, Point::new(1, 4));
    }

    #[test]
    fn test_arrow_direction() {
        assert_eq!(arrow_direction('v'), Some(Point::new(1, 0)));
        assert_eq!(arrow_direction('^'), Some(Point::new(-1, 0)));
        assert_eq!(arrow_direction('>'), Some(Point::new(0, 1)));
        assert_eq!(arrow_direction('<'), Some(Point::new(0, -1)));
        assert_eq!(arrow_direction('x'), None);
    }
}
