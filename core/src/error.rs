use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field width and height must be greater than 0")]
    EmptyDimension,
    #[error("Too many mines, requested {requested} but the field only fits {capacity}")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
    #[error("Cell labels do not match the mines around them")]
    InvalidLabels,
}

pub type Result<T> = core::result::Result<T, FieldError>;
