use serde::{Deserialize, Serialize};

/// A mark placed in a cell by a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "X")]
    Cross,
    #[serde(rename = "O")]
    Nought,
}

impl Symbol {
    /// The opposing mark.
    pub fn other(self) -> Symbol {
        match self {
            Symbol::Cross => Symbol::Nought,
            Symbol::Nought => Symbol::Cross,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Cross => 'X',
            Symbol::Nought => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A 0-indexed `(row, column)` coordinate pair on the grid.
pub type CellIndex = (usize, usize);

/// A single grid position.
///
/// Identity is `(row, column)`. A cell starts out empty and is occupied at
/// most once per game; all mutation goes through [`Table`](crate::Table).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub symbol: Option<Symbol>,
}

impl Cell {
    pub(crate) fn empty(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            symbol: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.symbol.is_none()
    }

    pub fn index(&self) -> CellIndex {
        (self.row, self.column)
    }
}
