use thiserror::Error;

use crate::grid::{Breakpoint, GRID_COLUMNS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid slot count {slots} at breakpoint '{}', expected one of {:?}", .breakpoint.as_str(), GRID_COLUMNS)]
    InvalidSlotCount { breakpoint: Breakpoint, slots: u32 },
}
