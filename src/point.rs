use std::ops::{Add, Sub};

use crate::Coord;
use Direction::*;

use crossterm::event::KeyCode;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Right, Down, Left, Up];

    /// Unit step `(dx, dy)`, with y growing downwards.
    pub fn delta(self) -> (Coord, Coord) {
        match self {
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
            Up => (0, -1),
        }
    }

    pub fn inverse(self) -> Direction {
        match self {
            Right => Left,
            Down => Up,
            Left => Right,
            Up => Down,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Arrow keys and WASD. Any other key is not a direction.
    pub fn from_key(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Right),
            _ => None,
        }
    }
}

/// A cell position. Plain value: copying a point never shares it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }

    pub fn translated(self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (Coord, Coord) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
