use crate::{Grid, Point, Result, Snake, SnakeError};

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_ATTEMPTS: usize = 64;

/// Places food on a cell no snake is on.
#[derive(Copy, Clone, Debug)]
pub struct FoodSpawner {
    attempts: usize,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        FoodSpawner::new(DEFAULT_ATTEMPTS)
    }
}

impl FoodSpawner {
    /// `attempts` bounds the random draws made before falling back to a scan
    /// of the free cells.
    pub fn new(attempts: usize) -> Self {
        FoodSpawner { attempts }
    }

    pub fn relocate<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        snakes: &[&Snake],
        rng: &mut R,
    ) -> Result<Point> {
        let is_free = |p: &Point| !snakes.iter().any(|s| s.occupies(*p));

        for _ in 0..self.attempts {
            let cell = grid.random_cell(rng);
            if is_free(&cell) {
                return Ok(cell);
            }
        }

        warn!("no free cell after {} random draws, scanning the board", self.attempts);

        let choices: Vec<Point> = grid.cells().filter(is_free).collect();
        choices.choose(rng).copied().ok_or(SnakeError::BoardFull {
            width: grid.width(),
            height: grid.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn never_lands_on_a_snake() {
        let grid = Grid::new(6, 6).unwrap();
        let snake = Snake::with_direction(Point::new(5, 2), 5, Right);
        let other = Snake::with_direction(Point::new(2, 0), 4, Up);
        let spawner = FoodSpawner::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let food = spawner.relocate(&grid, &[&snake, &other], &mut rng).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.occupies(food));
            assert!(!other.occupies(food));
        }
    }

    #[test]
    fn scan_finds_the_last_free_cell() {
        crate::init_test_logger();

        let grid = Grid::new(3, 1).unwrap();
        let snake = Snake::from_body(vec![Point::new(0, 0), Point::new(1, 0)], Left).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let food = FoodSpawner::new(0).relocate(&grid, &[&snake], &mut rng).unwrap();
        assert_eq!(food, Point::new(2, 0));
    }

    #[test]
    fn full_board_is_reported() {
        crate::init_test_logger();

        let grid = Grid::new(2, 2).unwrap();
        let body = grid.cells().collect();
        let snake = Snake::from_body(body, Down).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let res = FoodSpawner::default().relocate(&grid, &[&snake], &mut rng);
        match res {
            Err(SnakeError::BoardFull { width, height }) => assert_eq!((width, height), (2, 2)),
            other => panic!("expected a full board, got {:?}", other),
        }
    }
}
