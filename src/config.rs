//! Game settings.
//!
//! * Read from `wrapsnake.toml` unless another path is given.
//! * Every field has a default, so the file and each key are optional.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::food::DEFAULT_ATTEMPTS;
use crate::{Coord, Grid, Result};

use log::warn;
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "wrapsnake.toml";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Grid size in cells.
    pub width: Coord,
    pub height: Coord,
    /// Segments behind the head at spawn.
    pub initial_length: usize,
    /// Random food draws before scanning for a free cell.
    pub food_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 20,
            height: 20,
            initial_length: 2,
            food_attempts: DEFAULT_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads `path`, or [`DEFAULT_PATH`]. A missing file gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_PATH));

        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.width, self.height)
    }
}
