//! wrapsnake: the simulation core of a snake game on a wrap-around grid.
//!
//! The crate owns no window, no input device and no clock. A host feeds it
//! direction changes and resize events, calls [`SnakeGame::advance`] once per
//! tick, and reads the state back to draw it.
//!
//! ```
//! use wrapsnake::{Direction, GameConfig, SnakeGame};
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = SnakeGame::new(&config).unwrap();
//! game.redirect(Direction::Up);
//! game.advance().unwrap();
//! assert!(game.snake().body().len() >= 3);
//! ```

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod point;
pub mod snake;

pub type Coord = i32;

pub use config::GameConfig;
pub use error::{Result, SnakeError};
pub use food::FoodSpawner;
pub use game::{SnakeGame, TickOutcome};
pub use grid::{Grid, Layout};
pub use point::{Direction, Point};
pub use snake::Snake;

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
