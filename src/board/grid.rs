//! Rectangular grids.
//!
//! Every map layer is a `Grid<T>` stored row-major. Coordinates are signed so
//! that unclipped hex neighbours can be represented; any coordinate outside
//! the grid simply has no cell.

/// A `(row, col)` position. May lie outside any particular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }
}

/// A dense `height x width` matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid {
            height: 0,
            width: 0,
            cells: Vec::new(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Grid {
            height,
            width,
            cells: vec![value; height * width],
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from rows. Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return None;
            }
            cells.extend(row);
        }
        Some(Grid {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if both grids have identical dimensions.
    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.height == other.height && self.width == other.width
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        if r >= self.height || col >= self.width {
            return None;
        }
        Some(r * self.width + col)
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Option<&T> {
        self.index(c).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        self.index(c).map(move |i| &mut self.cells[i])
    }

    /// Overwrites a cell. Returns false if `c` is outside the grid.
    pub fn set(&mut self, c: Coord, value: T) -> bool {
        match self.get_mut(c) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index / self.width) as i32, (index % self.width) as i32)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// Cells with their coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| (self.coord_of(i), v))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks() panics on zero, and a zero-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Builds a new grid of the same shape by transforming each cell.
    pub fn map<U>(&self, mut f: impl FnMut(&T, Coord) -> U) -> Grid<U> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, v)| f(v, self.coord_of(i)))
            .collect();
        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Folds over every cell in row-major order.
    pub fn fold<A>(&self, init: A, mut f: impl FnMut(A, &T, Coord) -> A) -> A {
        let mut acc = init;
        for (i, v) in self.cells.iter().enumerate() {
            acc = f(acc, v, self.coord_of(i));
        }
        acc
    }

    /// Coordinates of the cells matching `pred`, row-major.
    pub fn filter_coords(&self, mut pred: impl FnMut(&T, Coord) -> bool) -> Vec<Coord> {
        self.iter()
            .filter(|(c, v)| pred(v, *c))
            .map(|(c, _)| c)
            .collect()
    }

    pub fn for_each(&self, mut f: impl FnMut(&T, Coord)) {
        for (c, v) in self.iter() {
            f(v, c);
        }
    }
}

/// Runs `f` over every cell of `grid`; does nothing when there is no grid.
pub fn visit<T>(grid: Option<&Grid<T>>, f: impl FnMut(&T, Coord)) {
    if let Some(g) = grid {
        g.for_each(f);
    }
}
