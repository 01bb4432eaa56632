//! Engine configuration

use crate::types::{GridError, GRID_HEIGHT, GRID_WIDTH, MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// Grid dimensions for a new engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
}

impl EngineConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Reject grids a spawned piece cannot fit on
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width < MIN_GRID_WIDTH || self.height < MIN_GRID_HEIGHT {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
