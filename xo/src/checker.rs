use crate::{Combination, Grid, Symbol};

/// The capability of deciding whether a symbol has completed a winning line.
///
/// Implementations must be pure: they only read the grid and combinations,
/// so they are safe to call concurrently against an immutable snapshot. Any
/// conforming implementation can be injected at
/// [`Game`](crate::Game) construction.
pub trait Checker {
    /// Returns some combination fully occupied by `symbol`, or `None`.
    ///
    /// The iteration order over `combinations` is not guaranteed; callers
    /// may only rely on a satisfying combination being returned if one
    /// exists.
    fn result_for_symbol<'a>(
        &self,
        symbol: Symbol,
        grid: &Grid,
        combinations: &'a [Combination],
    ) -> Option<&'a Combination>;
}

/// Default checker: scans the combination set and stops at the first line
/// whose every cell holds the symbol.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineChecker;

impl Checker for LineChecker {
    fn result_for_symbol<'a>(
        &self,
        symbol: Symbol,
        grid: &Grid,
        combinations: &'a [Combination],
    ) -> Option<&'a Combination> {
        // `all` short-circuits on the first mismatching cell
        combinations
            .iter()
            .find(|comb| comb.iter().all(|&index| grid.symbol_at(index) == Some(symbol)))
    }
}
