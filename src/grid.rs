//! Cell space of the game.
//!
//! The grid is a torus: leaving one edge re-enters from the opposite one.
//! Nothing is ever rejected for being out of bounds, it is wrapped instead.

use crate::{Coord, Point, Result, SnakeError};

use rand::Rng;

/// Window fraction reserved for the score band at the top.
const UI_BAND_DIVISOR: u32 = 10;
/// Cells along the shorter window side.
const CELLS_ON_SHORT_SIDE: u32 = 40;

/// Longest allowed side. Keeps a step or a grown tail past the far edge
/// inside `Coord` before it is wrapped back.
pub const MAX_SIDE: Coord = 1 << 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: Coord,
    height: Coord,
}

impl Grid {
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        if !(1..=MAX_SIDE).contains(&width) || !(1..=MAX_SIDE).contains(&height) {
            return Err(SnakeError::InvalidDimensions { width, height });
        }

        Ok(Grid { width, height })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Wraps `p` into `[0, width) x [0, height)`.
    pub fn normalize(&self, p: Point) -> Point {
        if self.contains(p) {
            return p;
        }

        Point::new(p.x.rem_euclid(self.width), p.y.rem_euclid(self.height))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }
}

/// Pixel geometry a window host derives from its size. The grid dimensions
/// come out of it, the rest is for the host's drawing code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: u32,
    pub ui_height: u32,
    /// Top-left pixel of cell (0, 0). Leftover pixels are split on both sides.
    pub origin: (u32, u32),
    pub food_radius: u32,
    grid: Grid,
}

impl Layout {
    pub fn from_window(px_width: u32, px_height: u32) -> Result<Self> {
        let ui_height = px_height / UI_BAND_DIVISOR;
        let cell_size = px_width.min(px_height) / CELLS_ON_SHORT_SIDE;

        if cell_size == 0 {
            return Err(SnakeError::WindowTooSmall {
                width: px_width,
                height: px_height,
            });
        }

        let width = px_width / cell_size;
        let height = (px_height - ui_height) / cell_size;
        let grid = Grid::new(to_coord(width), to_coord(height))?;

        Ok(Layout {
            cell_size,
            ui_height,
            origin: (
                (px_width % cell_size) / 2,
                ui_height + (px_height % cell_size) / 2,
            ),
            food_radius: cell_size / 2,
            grid,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Top-left pixel of the cell at `p`, or `None` if `p` is off the grid.
    pub fn cell_origin(&self, p: Point) -> Option<(u32, u32)> {
        if !self.grid.contains(p) {
            return None;
        }

        Some((
            self.origin.0 + p.x as u32 * self.cell_size,
            self.origin.1 + p.y as u32 * self.cell_size,
        ))
    }
}

fn to_coord(cells: u32) -> Coord {
    Coord::try_from(cells).unwrap_or(Coord::MAX)
}
