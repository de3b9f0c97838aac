use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board side must be between 1 and 40")]
    InvalidSize,
    #[error("hazard count must be between 1 and the cell count minus one")]
    InvalidHazardCount,
    #[error("coordinates are outside the board")]
    InvalidCoords,
    #[error("hazards have not been placed yet")]
    NotInitialized,
    #[error("hazards have already been placed")]
    AlreadyInitialized,
    #[error("placement does not match the configured hazard count")]
    PlacementMismatch,
    #[error("adjacent hazard count {0} exceeds the 8 possible neighbors")]
    AdjacentOverflow(u8),
}

pub type Result<T> = core::result::Result<T, GameError>;
