use serde::{Deserialize, Serialize};

use crate::combination::winning_combinations;
use crate::{Combination, Grid, InvalidMove, InvalidRunLength, Symbol};

/// Board configuration: dimension N and the run length K required to win.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableParams {
    pub size: usize,
    pub run_length: usize,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            size: 3,
            run_length: 3,
        }
    }
}

/// Owns the N×N grid and the precomputed set of winning combinations.
///
/// The combinations are a pure function of the parameters, derived once at
/// construction and read-only for the table's lifetime.
#[derive(Clone, Debug)]
pub struct Table {
    params: TableParams,
    grid: Grid,
    combinations: Vec<Combination>,
}

impl Table {
    /// Creates an empty table, validating that `1 <= run_length <= size`.
    pub fn new(params: TableParams) -> Result<Self, InvalidRunLength> {
        if params.size == 0 || params.run_length == 0 || params.run_length > params.size {
            return Err(InvalidRunLength {
                run_length: params.run_length,
                size: params.size,
            });
        }
        Ok(Self {
            params,
            grid: Grid::new(params.size),
            combinations: winning_combinations(params.size, params.run_length),
        })
    }

    pub fn size(&self) -> usize {
        self.params.size
    }

    pub fn run_length(&self) -> usize {
        self.params.run_length
    }

    pub fn params(&self) -> TableParams {
        self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every candidate winning line for this board, in no guaranteed order.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Places `symbol` on the given cell.
    ///
    /// Fails without touching the grid if the coordinates are out of bounds
    /// or the cell is already occupied.
    pub fn set_symbol_cell(
        &mut self,
        row: usize,
        column: usize,
        symbol: Symbol,
    ) -> Result<(), InvalidMove> {
        if !self.grid.is_in_bounds(row, column) {
            return Err(InvalidMove::OutOfBounds {
                row,
                column,
                size: self.params.size,
            });
        }
        if !self.grid.is_free((row, column)) {
            return Err(InvalidMove::CellOccupied { row, column });
        }
        self.grid.occupy(row, column, symbol);
        Ok(())
    }

    pub fn count_free_cells(&self) -> usize {
        self.grid.count_free_cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_run_length_outside_board() {
        for (size, run_length) in [(3, 0), (3, 4), (0, 0), (1, 2)] {
            let err = Table::new(TableParams { size, run_length }).unwrap_err();
            assert_eq!(err, InvalidRunLength { run_length, size });
        }
    }

    #[test]
    fn default_params_give_classic_board() {
        let table = Table::new(TableParams::default()).unwrap();
        assert_eq!(table.size(), 3);
        assert_eq!(table.run_length(), 3);
        assert_eq!(table.count_free_cells(), 9);
        assert_eq!(table.combinations().len(), 8);
    }

    #[test]
    fn set_symbol_cell_occupies_once() {
        let mut table = Table::new(TableParams::default()).unwrap();
        table.set_symbol_cell(1, 2, Symbol::Cross).unwrap();
        assert_eq!(table.grid().symbol_at((1, 2)), Some(Symbol::Cross));
        assert_eq!(table.count_free_cells(), 8);

        // A failed re-occupation leaves the grid unchanged
        let before = table.grid().clone();
        let err = table.set_symbol_cell(1, 2, Symbol::Nought).unwrap_err();
        assert_eq!(err, InvalidMove::CellOccupied { row: 1, column: 2 });
        assert_eq!(table.grid(), &before);
    }

    #[test]
    fn set_symbol_cell_rejects_out_of_bounds() {
        let mut table = Table::new(TableParams::default()).unwrap();
        let err = table.set_symbol_cell(0, 3, Symbol::Cross).unwrap_err();
        assert_eq!(
            err,
            InvalidMove::OutOfBounds {
                row: 0,
                column: 3,
                size: 3
            }
        );
        assert_eq!(table.count_free_cells(), 9);
    }
}
