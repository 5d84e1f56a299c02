//! Board data model and textual encoding.
//!
//! The board is a square grid of cells indexed column-major: `(x, y)` is
//! column `x`, row `y`, with `(0, 0)` at the visual bottom-left. A cell may
//! be offline (a hole in the board), represented as `None`.
//!
//! Cross-cell relationships (chain membership, liberties) are stored as
//! coordinate pairs rather than references, so a deep copy of the board is a
//! plain `Clone` with no fix-up pass.

use std::fmt;

/// A board coordinate, `(x, y)`.
pub type Coord = (usize, usize);

/// Stone color, with `Empty` as the third state of a playable cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Empty,
}

impl Color {
    /// Get the opposing color. `Empty` has no opponent and maps to itself.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    /// The SimpleBoard character for this color.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
            Color::Empty => '.',
        }
    }
}

/// One playable cell of the board.
///
/// `chain` is `None` until chain analysis runs; afterwards it holds the id of
/// the chain this point belongs to (the column-major-first member coordinate).
/// `liberties` is `Some` only for analyzed stone chains; empty-point chains
/// keep `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    pub chain: Option<Coord>,
    pub liberties: Option<Vec<Coord>>,
}

impl Point {
    fn new(x: usize, y: usize, color: Color) -> Self {
        Point {
            x,
            y,
            color,
            chain: None,
            liberties: None,
        }
    }
}

/// A square Go board with offline holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Point>>,
}

impl Board {
    /// Create an all-empty board of the given size.
    pub fn empty(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for x in 0..size {
            for y in 0..size {
                cells.push(Some(Point::new(x, y, Color::Empty)));
            }
        }
        Board { size, cells }
    }

    /// Build a board from its SimpleBoard form: one string per column, with
    /// character `j` of string `i` describing the cell at `(i, j)`.
    ///
    /// `X` is Black, `O` is White, `#` is an offline hole. Any other
    /// character (including `.`) ingests as an empty cell; ingestion is total
    /// and never fails.
    pub fn from_simple<S: AsRef<str>>(columns: &[S]) -> Self {
        let size = columns.len();
        let mut cells = Vec::with_capacity(size * size);
        for (x, column) in columns.iter().enumerate() {
            let mut chars = column.as_ref().chars();
            for y in 0..size {
                cells.push(match chars.next() {
                    Some('#') => None,
                    Some('X') => Some(Point::new(x, y, Color::Black)),
                    Some('O') => Some(Point::new(x, y, Color::White)),
                    _ => Some(Point::new(x, y, Color::Empty)),
                });
            }
        }
        Board { size, cells }
    }

    /// Render the board back to its SimpleBoard form. Exact inverse of
    /// [`Board::from_simple`] modulo chain and liberty fields.
    pub fn to_simple(&self) -> Vec<String> {
        (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| match self.get(x, y) {
                        Some(point) => point.color.to_char(),
                        None => '#',
                    })
                    .collect()
            })
            .collect()
    }

    /// The concatenated-columns text form used for whole-board comparison
    /// (superko history entries).
    pub fn to_text(&self) -> String {
        self.to_simple().concat()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// The cell at `(x, y)`, or `None` when out of bounds or offline.
    pub fn get(&self, x: usize, y: usize) -> Option<&Point> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)].as_ref()
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Point> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let idx = self.idx(x, y);
        self.cells[idx].as_mut()
    }

    /// In-bounds orthogonal neighbor coordinates of a point, in
    /// north, east, south, west order. Offline cells are included; callers
    /// that need playable cells filter through [`Board::get`].
    pub fn neighbor_coords(&self, x: usize, y: usize) -> impl Iterator<Item = Coord> + '_ {
        let s = self.size;
        [
            (y + 1 < s).then(|| (x, y + 1)),
            (x + 1 < s).then(|| (x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (x > 0).then(|| (x - 1, y)),
        ]
        .into_iter()
        .flatten()
    }

    /// Existing (non-offline) orthogonal neighbors of a point.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = &Point> + '_ {
        self.neighbor_coords(x, y)
            .filter_map(|(nx, ny)| self.get(nx, ny))
    }

    /// All non-offline points, in column-major scan order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.cells.iter().filter_map(|cell| cell.as_ref())
    }

    /// All coordinates of the grid, column-major, including offline holes.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let s = self.size;
        (0..s).flat_map(move |x| (0..s).map(move |y| (x, y)))
    }

    /// Number of non-offline cells.
    pub fn live_cell_count(&self) -> usize {
        self.points().count()
    }

    /// Reset chain ids and liberty lists on every cell.
    pub fn clear_analysis(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.chain = None;
            cell.liberties = None;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            write!(f, " {y:>2} ")?;
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(point) => point.color.to_char(),
                    None => '#',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for x in 0..self.size {
            write!(f, " {x}")?;
        }
        writeln!(f)
    }
}
