use crate::{Direction, Grid, Point};

use log::debug;
use rand::Rng;

/// The body is ordered head first. Positions are plain values, so shifting
/// the body copies coordinates and never aliases two slots.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Point>,
    direction: Direction,
    alive: bool,
    score: u32,
}

impl Snake {
    /// Spawns at `start` heading a random way, with `length` extra segments
    /// laid out straight behind the head.
    pub fn new<R: Rng + ?Sized>(start: Point, length: usize, rng: &mut R) -> Self {
        Self::with_direction(start, length, Direction::random(rng))
    }

    pub fn with_direction(start: Point, length: usize, direction: Direction) -> Self {
        let behind = direction.inverse();
        let body = std::iter::successors(Some(start), |p| Some(p.translated(behind)))
            .take(length + 1)
            .collect();

        Snake {
            body,
            direction,
            alive: true,
            score: 0,
        }
    }

    /// Builds a snake from an explicit body, head first. Returns `None` for
    /// an empty body.
    pub fn from_body(body: Vec<Point>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }

        Some(Snake {
            body,
            direction,
            alive: true,
            score: 0,
        })
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Turns towards `direction` unless that step would put the head onto
    /// the segment right behind it.
    pub fn redirect(&mut self, direction: Direction) -> bool {
        let head = self.head();
        self.redirect_if(direction, |neck| head.translated(direction) == neck)
    }

    /// Same as [`Snake::redirect`], but compares wrapped positions so the
    /// turn is also refused when head and neck sit on opposite edges.
    pub fn redirect_on(&mut self, direction: Direction, grid: &Grid) -> bool {
        let candidate = grid.normalize(self.head().translated(direction));
        self.redirect_if(direction, |neck| candidate == grid.normalize(neck))
    }

    fn redirect_if(&mut self, direction: Direction, hits_neck: impl Fn(Point) -> bool) -> bool {
        if !self.alive {
            return false;
        }

        if let Some(&neck) = self.body.get(1) {
            if hits_neck(neck) {
                debug!(
                    "ignoring turn {:?} into the body while heading {:?}",
                    direction, self.direction
                );
                return false;
            }
        }

        self.direction = direction;
        true
    }

    /// Steps the head once along the heading; every other segment takes the
    /// place its predecessor had. No wrapping happens here.
    pub fn move_step(&mut self) {
        if !self.alive {
            return;
        }

        let mut previous = self.body[0];
        self.body[0] = previous.translated(self.direction);

        for segment in self.body.iter_mut().skip(1) {
            previous = std::mem::replace(segment, previous);
        }
    }

    /// Re-maps every segment into the grid.
    pub fn wrap(&mut self, grid: &Grid) {
        for segment in self.body.iter_mut() {
            *segment = grid.normalize(*segment);
        }
    }

    /// Marks the snake dead if its head overlaps any other segment.
    pub fn detect_collision(&mut self) -> bool {
        let head = self.head();
        if self.body[1..].contains(&head) {
            self.alive = false;
        }

        !self.alive
    }

    /// Eats `food` if the head is on it: scores and grows one segment past
    /// the tail, continuing the line of the last two segments.
    pub fn try_eat(&mut self, food: Point) -> bool {
        if !self.alive || self.head() != food {
            return false;
        }

        let tail = self.body[self.body.len() - 1];
        let new_tail = match self.body.len() {
            1 => tail.translated(self.direction.inverse()),
            n => tail + (tail - self.body[n - 2]),
        };

        self.body.push(new_tail);
        self.score += 1;
        true
    }
}
