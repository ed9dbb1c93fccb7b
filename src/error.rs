use crate::Coord;

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, thiserror::Error)]
pub enum SnakeError {
    #[error("invalid grid dimensions {width}x{height}: each side must be in 1..=2^30")]
    InvalidDimensions { width: Coord, height: Coord },
    #[error("window of {width}x{height} px is too small to hold a single cell")]
    WindowTooSmall { width: u32, height: u32 },
    #[error("no free cell left for food on a {width}x{height} board")]
    BoardFull { width: Coord, height: Coord },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
}
