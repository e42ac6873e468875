use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::{CellIndex, Combination, Grid, NoMovesAvailable, Symbol};

/// The capability of picking the next cell to play.
///
/// Implementations get full visibility of the grid and the combination set
/// and must return a currently-free cell. Any conforming implementation can
/// be injected at [`Game`](crate::Game) construction.
pub trait Strategy {
    fn get_step(
        &mut self,
        symbol: Symbol,
        grid: &Grid,
        combinations: &[Combination],
    ) -> Result<CellIndex, NoMovesAvailable>;
}

/// Picks a uniformly random free cell.
#[derive(Debug)]
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAi {
    fn get_step(
        &mut self,
        _symbol: Symbol,
        grid: &Grid,
        _combinations: &[Combination],
    ) -> Result<CellIndex, NoMovesAvailable> {
        grid.free_cells()
            .choose(&mut self.rng)
            .map(|cell| cell.index())
            .ok_or(NoMovesAvailable)
    }
}

/// Takes an immediately winning cell if one exists, otherwise blocks the
/// opponent's immediately winning cell, otherwise plays a random free cell.
#[derive(Debug)]
pub struct HeuristicAi {
    rng: StdRng,
}

impl HeuristicAi {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The free cell that would complete `comb` for `symbol`, if the other
    /// cells of the line are all occupied by `symbol`.
    fn completing_cell(
        comb: &Combination,
        grid: &Grid,
        symbol: Symbol,
    ) -> Option<CellIndex> {
        let mut free = None;
        for &index in comb {
            match grid.symbol_at(index) {
                Some(occupant) if occupant == symbol => {}
                Some(_) => return None,
                None if free.is_some() => return None,
                None => free = Some(index),
            }
        }
        free
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicAi {
    fn get_step(
        &mut self,
        symbol: Symbol,
        grid: &Grid,
        combinations: &[Combination],
    ) -> Result<CellIndex, NoMovesAvailable> {
        for candidate in [symbol, symbol.other()] {
            if let Some(index) = combinations
                .iter()
                .find_map(|comb| Self::completing_cell(comb, grid, candidate))
            {
                return Ok(index);
            }
        }
        grid.free_cells()
            .choose(&mut self.rng)
            .map(|cell| cell.index())
            .ok_or(NoMovesAvailable)
    }
}
