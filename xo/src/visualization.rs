use crate::Grid;

/// Renders the grid as one text row per board row, with `.` for free cells.
pub fn visualize_grid(grid: &Grid) -> String {
    let size = grid.size();
    let mut result = String::with_capacity(size * (2 * size + 1));
    for row in 0..size {
        for column in 0..size {
            if column > 0 {
                result.push(' ');
            }
            match grid.symbol_at((row, column)) {
                Some(symbol) => result.push(symbol.as_char()),
                None => result.push('.'),
            }
        }
        result.push('\n');
    }
    result
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_grid(self))
    }
}
