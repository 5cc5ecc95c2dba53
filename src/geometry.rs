use crate::config::WindowConfig;
use crate::snake::Direction;

/// A grid square, addressed in cell units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when the two rectangles share some area. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Maps cells onto the pixel playfield and knows where the border walls are.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(window: &WindowConfig, cell_size: i32) -> Self {
        Self { cell_size, width: window.width, height: window.height }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Top-left pixel of a cell.
    pub fn cell_to_px(&self, cell: Cell) -> (i32, i32) {
        (cell.x * self.cell_size, cell.y * self.cell_size)
    }

    pub fn px_to_cell(&self, x: i32, y: i32) -> Cell {
        Cell::new(x.div_euclid(self.cell_size), y.div_euclid(self.cell_size))
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let (x, y) = self.cell_to_px(cell);
        Rect::new(x, y, self.cell_size, self.cell_size)
    }

    /// Top, bottom, left and right border, one cell thick.
    pub fn walls(&self) -> [Rect; 4] {
        let (w, h, c) = (self.width, self.height, self.cell_size);
        [
            Rect::new(0, 0, w, c),
            Rect::new(0, h - c, w, c),
            Rect::new(0, 0, c, h),
            Rect::new(w - c, 0, c, h),
        ]
    }

    /// Cells lying fully inside the border.
    pub fn is_interior(&self, cell: Cell) -> bool {
        (1..self.columns() - 1).contains(&cell.x) && (1..self.rows() - 1).contains(&cell.y)
    }

    pub fn interior_capacity(&self) -> usize {
        let cols = (self.columns() - 2).max(0) as usize;
        let rows = (self.rows() - 2).max(0) as usize;
        cols * rows
    }

    /// Where a fresh snake's head starts: three quarters across, halfway down.
    pub fn spawn_cell(&self) -> Cell {
        self.px_to_cell(self.width * 3 / 4, self.height / 2)
    }
}
