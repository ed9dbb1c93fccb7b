use crate::{Coord, Direction, FoodSpawner, GameConfig, Grid, Layout, Point, Result, Snake};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What a single [`SnakeGame::advance`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    /// The head reached the food; it has already been placed elsewhere.
    Ate,
    /// The head ran into the body. The game is over from here on.
    Crashed,
    /// The snake was already dead, nothing happened.
    Finished,
}

/// One running game: the grid, a snake and its food.
///
/// The host calls [`SnakeGame::redirect`] for input, [`SnakeGame::advance`]
/// once per tick and reads the accessors to draw. Nothing in here waits or
/// sleeps; pacing is up to the host.
pub struct SnakeGame {
    grid: Grid,
    snake: Snake,
    food: Point,
    spawner: FoodSpawner,
    rng: StdRng,
}

impl SnakeGame {
    /// Starts a game with the snake on a random cell, heading a random way,
    /// and the first food placed.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let grid = config.grid()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // The body must not wrap onto itself along either axis.
        let fits = grid.width().min(grid.height()) as usize - 1;
        let length = config.initial_length.min(fits);
        if length < config.initial_length {
            warn!(
                "initial length {} does not fit a {}x{} grid, spawning with {}",
                config.initial_length,
                grid.width(),
                grid.height(),
                length
            );
        }

        let start = grid.random_cell(&mut rng);
        let mut snake = Snake::new(start, length, &mut rng);
        snake.wrap(&grid);

        let spawner = FoodSpawner::new(config.food_attempts);
        let food = spawner.relocate(&grid, &[&snake], &mut rng)?;

        info!(
            "new game on a {}x{} grid, head at {:?} heading {:?}",
            grid.width(),
            grid.height(),
            start,
            snake.direction()
        );

        Ok(SnakeGame {
            grid,
            snake,
            food,
            spawner,
            rng,
        })
    }

    /// Assembles a game from existing state, for replays and tests.
    pub fn from_parts(
        grid: Grid,
        snake: Snake,
        food: Point,
        spawner: FoodSpawner,
        rng: StdRng,
    ) -> Self {
        SnakeGame {
            grid,
            snake,
            food,
            spawner,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn is_over(&self) -> bool {
        !self.snake.is_alive()
    }

    /// Applies a direction change before the next tick. Turning back onto
    /// the body is ignored, so is any turn once the game is over.
    pub fn redirect(&mut self, direction: Direction) -> bool {
        self.snake.redirect_on(direction, &self.grid)
    }

    /// Swaps in a grid of the new size. Snake and food are not rescaled;
    /// they wrap into the new bounds on the next tick.
    pub fn resize(&mut self, width: Coord, height: Coord) -> Result<()> {
        self.grid = Grid::new(width, height)?;
        info!("grid resized to {}x{}", width, height);
        Ok(())
    }

    /// Resizes to fit a window and hands the layout back for drawing.
    pub fn resize_to_window(&mut self, px_width: u32, px_height: u32) -> Result<Layout> {
        let layout = Layout::from_window(px_width, px_height)?;
        self.grid = layout.grid();
        info!(
            "window {}x{} px gives a {}x{} grid",
            px_width,
            px_height,
            self.grid.width(),
            self.grid.height()
        );
        Ok(layout)
    }

    /// Runs one tick: move, wrap, check the collision, then eat.
    pub fn advance(&mut self) -> Result<TickOutcome> {
        if !self.snake.is_alive() {
            return Ok(TickOutcome::Finished);
        }

        self.snake.move_step();
        self.snake.wrap(&self.grid);

        if self.snake.detect_collision() {
            info!("crashed at {:?} with score {}", self.snake.head(), self.snake.score());
            return Ok(TickOutcome::Crashed);
        }

        self.food = self.grid.normalize(self.food);

        if self.snake.try_eat(self.food) {
            self.snake.wrap(&self.grid);
            self.food = self.spawner.relocate(&self.grid, &[&self.snake], &mut self.rng)?;
            info!("ate, score {} and length {}", self.snake.score(), self.snake.body().len());
            return Ok(TickOutcome::Ate);
        }

        debug!("head at {:?}", self.snake.head());
        Ok(TickOutcome::Moved)
    }
}
