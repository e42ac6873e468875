use crate::{Cell, CellIndex, Symbol};

/// Row-major N×N storage of [`Cell`]s.
///
/// The grid hands out read access only; writes go through
/// [`Table::set_symbol_cell`](crate::Table::set_symbol_cell) so that the
/// occupied-once invariant is enforced in a single place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn new(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for column in 0..size {
                cells.push(Cell::empty(row, column));
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size
    }

    /// Returns the cell at the given coordinates, if they are in bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        if self.is_in_bounds(row, column) {
            Some(&self.cells[row * self.size + column])
        } else {
            None
        }
    }

    /// The occupying symbol at `(row, column)`, or `None` for a free or
    /// out-of-bounds cell.
    pub fn symbol_at(&self, index: CellIndex) -> Option<Symbol> {
        self.cell(index.0, index.1).and_then(|cell| cell.symbol)
    }

    pub fn is_free(&self, index: CellIndex) -> bool {
        self.cell(index.0, index.1).map_or(false, Cell::is_free)
    }

    pub fn count_free_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_free()).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn free_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_free())
    }

    // The sole mutation point, reachable only via Table.
    pub(crate) fn occupy(&mut self, row: usize, column: usize, symbol: Symbol) {
        debug_assert!(self.is_in_bounds(row, column));
        let cell = &mut self.cells[row * self.size + column];
        debug_assert!(cell.is_free());
        cell.symbol = Some(symbol);
    }
}
