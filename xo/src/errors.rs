/// The error type for [`Table::set_symbol_cell`](crate::Table::set_symbol_cell),
/// i.e. for placing a single symbol.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
    CellOccupied {
        row: usize,
        column: usize,
    },
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfBounds { row, column, size } => write!(
                f,
                "Cell ({}, {}) is outside the {}x{} playing field",
                row, column, size, size
            ),
            InvalidMove::CellOccupied { row, column } => {
                write!(f, "Cell ({}, {}) is already occupied", row, column)
            }
        }
    }
}

/// The error type for [`Table::new`](crate::Table::new): the requested run
/// length does not fit the board. Fatal, cannot be recovered mid-game.
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidRunLength {
    pub run_length: usize,
    pub size: usize,
}

impl std::error::Error for InvalidRunLength {}

impl std::fmt::Display for InvalidRunLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Run length {} is not within 1..={} for a board of size {}",
            self.run_length, self.size, self.size
        )
    }
}

/// A strategy was asked for a move but every cell is occupied.
///
/// Callers are expected to check
/// [`Table::count_free_cells`](crate::Table::count_free_cells) first, so
/// hitting this is a caller precondition violation rather than a normal
/// gameplay outcome.
#[derive(Debug, PartialEq, Eq)]
pub struct NoMovesAvailable;

impl std::error::Error for NoMovesAvailable {}

impl std::fmt::Display for NoMovesAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No empty cell is left to play")
    }
}

#[derive(Debug)]
/// The error type for one AI-driven turn.
pub enum AiStepError {
    NoMovesAvailable(NoMovesAvailable),
    InvalidMove(InvalidMove),
}

impl std::error::Error for AiStepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AiStepError::NoMovesAvailable(err) => Some(err),
            AiStepError::InvalidMove(err) => Some(err),
        }
    }
}

impl std::fmt::Display for AiStepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiStepError::NoMovesAvailable(_) => {
                write!(f, "The strategy could not produce a move")
            }
            AiStepError::InvalidMove(_) => {
                write!(f, "The strategy produced an unplayable move")
            }
        }
    }
}

impl From<NoMovesAvailable> for AiStepError {
    fn from(err: NoMovesAvailable) -> Self {
        AiStepError::NoMovesAvailable(err)
    }
}

impl From<InvalidMove> for AiStepError {
    fn from(err: InvalidMove) -> Self {
        AiStepError::InvalidMove(err)
    }
}
