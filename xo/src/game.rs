use serde::{Deserialize, Serialize};

use crate::{
    AiStepError, CellIndex, Checker, Combination, HeuristicAi, InvalidMove, LineChecker,
    NoMovesAvailable, Player, Players, Strategy, Symbol, Table,
};

/// The terminal classification of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    InProgress,
    Winner,
    AllCellsUsed,
}

/// The result of a game so far.
///
/// Starts at [`ResultCode::InProgress`] and transitions exactly once to a
/// terminal code via [`Game::set_winner`] or [`Game::set_draw`]; after that
/// it never changes again. Externally read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    code: ResultCode,
    win_player: Option<Symbol>,
    win_combination: Option<Combination>,
}

impl GameState {
    fn new() -> Self {
        Self {
            code: ResultCode::InProgress,
            win_player: None,
            win_combination: None,
        }
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }

    pub fn win_player(&self) -> Option<Symbol> {
        self.win_player
    }

    pub fn win_combination(&self) -> Option<&Combination> {
        self.win_combination.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.code != ResultCode::InProgress
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates the table, the player rotation and the injected checker and
/// strategy into the turn/result state machine.
///
/// Players are addressed by their [`Symbol`] in the move API; symbols
/// uniquely identify players within one game.
pub struct Game {
    players: Players,
    table: Table,
    state: GameState,
    checker: Box<dyn Checker>,
    ai: Box<dyn Strategy>,
}

impl Game {
    /// Creates a game with the default checker and strategy.
    pub fn new(players: Players, table: Table) -> Self {
        Self::with_parts(
            players,
            table,
            Box::new(LineChecker),
            Box::new(HeuristicAi::new()),
        )
    }

    /// Creates a game with an injected checker and strategy.
    pub fn with_parts(
        players: Players,
        table: Table,
        checker: Box<dyn Checker>,
        ai: Box<dyn Strategy>,
    ) -> Self {
        Self {
            players,
            table,
            state: GameState::new(),
            checker,
            ai,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Read-only view of the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> &Player {
        self.players.current_player()
    }

    pub fn player(&self, symbol: Symbol) -> &Player {
        self.players.player(symbol)
    }

    /// Rotates to the next player in line and returns it.
    pub fn set_get_next_player(&mut self) -> &Player {
        self.players.set_get_next_player()
    }

    /// Places the player's symbol and increments its step counter.
    ///
    /// A failed placement is propagated unmodified and leaves both the grid
    /// and the step counter untouched.
    pub fn step(&mut self, row: usize, column: usize, symbol: Symbol) -> Result<(), InvalidMove> {
        self.table.set_symbol_cell(row, column, symbol)?;
        self.players.player_mut(symbol).add_count_step();
        Ok(())
    }

    /// Evaluates the board for the given player and returns the game state.
    ///
    /// Once the state is terminal this is a no-op. The combination check is
    /// skipped while the player has made fewer moves than the run length,
    /// since no line can be complete yet.
    pub fn result(&mut self, symbol: Symbol) -> &GameState {
        if self.state.is_finished() {
            return &self.state;
        }
        if self.players.player(symbol).count_steps() >= self.table.run_length() {
            let win_combination = self
                .checker
                .result_for_symbol(symbol, self.table.grid(), self.table.combinations())
                .cloned();
            if let Some(combination) = win_combination {
                self.set_winner(symbol, combination);
            } else if self.table.count_free_cells() == 0 {
                self.set_draw();
            }
        }
        &self.state
    }

    /// [`Self::step`] followed by [`Self::result`]; the primary entry point
    /// for a human move.
    pub fn step_result(
        &mut self,
        row: usize,
        column: usize,
        symbol: Symbol,
    ) -> Result<&GameState, InvalidMove> {
        self.step(row, column, symbol)?;
        Ok(self.result(symbol))
    }

    /// Asks the injected strategy for the player's next cell.
    pub fn ai_get_step(&mut self, symbol: Symbol) -> Result<CellIndex, NoMovesAvailable> {
        self.ai
            .get_step(symbol, self.table.grid(), self.table.combinations())
    }

    /// Computes and applies a strategy move.
    pub fn ai_step(&mut self, symbol: Symbol) -> Result<(), AiStepError> {
        let (row, column) = self.ai_get_step(symbol)?;
        self.step(row, column, symbol)?;
        Ok(())
    }

    /// Computes and applies a strategy move, then evaluates the result.
    pub fn ai_step_result(&mut self, symbol: Symbol) -> Result<&GameState, AiStepError> {
        let (row, column) = self.ai_get_step(symbol)?;
        Ok(self.step_result(row, column, symbol)?)
    }

    /// Transitions to [`ResultCode::Winner`]. Callable only once per game.
    pub fn set_winner(&mut self, symbol: Symbol, win_combination: Combination) {
        assert!(
            !self.state.is_finished(),
            "the game already has a terminal result"
        );
        self.state.code = ResultCode::Winner;
        self.state.win_player = Some(symbol);
        self.state.win_combination = Some(win_combination);
    }

    /// Transitions to [`ResultCode::AllCellsUsed`]. Callable only once per
    /// game.
    pub fn set_draw(&mut self) {
        assert!(
            !self.state.is_finished(),
            "the game already has a terminal result"
        );
        self.state.code = ResultCode::AllCellsUsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerKind, TableParams};

    fn classic_game() -> Game {
        let players = Players::new(vec![
            Player::new(Symbol::Cross, PlayerKind::Human),
            Player::new(Symbol::Nought, PlayerKind::Human),
        ]);
        Game::new(players, Table::new(TableParams::default()).unwrap())
    }

    #[test]
    fn cross_wins_the_first_row() {
        let mut game = classic_game();
        let cross_moves = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];
        let nought_moves = [(2, 0), (2, 1), (1, 2), (2, 2)];

        for turn in 0..4 {
            let (row, column) = cross_moves[turn];
            let state = game.step_result(row, column, Symbol::Cross).unwrap();
            assert_eq!(state.code(), ResultCode::InProgress);
            let (row, column) = nought_moves[turn];
            game.step(row, column, Symbol::Nought).unwrap();
        }

        let state = game.step_result(0, 2, Symbol::Cross).unwrap();
        assert_eq!(state.code(), ResultCode::Winner);
        assert_eq!(state.win_player(), Some(Symbol::Cross));
        assert_eq!(
            state.win_combination().unwrap().cells(),
            &[(0, 0), (0, 1), (0, 2)]
        );
        assert_eq!(game.player(Symbol::Cross).count_steps(), 5);
    }

    #[test]
    fn exhausted_board_without_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let mut game = classic_game();
        let cross_moves = [(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)];
        let nought_moves = [(0, 1), (1, 1), (1, 2), (2, 0)];

        for turn in 0..4 {
            let (row, column) = cross_moves[turn];
            assert!(!game
                .step_result(row, column, Symbol::Cross)
                .unwrap()
                .is_finished());
            let (row, column) = nought_moves[turn];
            assert!(!game
                .step_result(row, column, Symbol::Nought)
                .unwrap()
                .is_finished());
        }

        let state = game.step_result(2, 2, Symbol::Cross).unwrap();
        assert_eq!(state.code(), ResultCode::AllCellsUsed);
        assert_eq!(state.win_player(), None);
        assert_eq!(game.table().count_free_cells(), 0);
    }

    #[test]
    fn terminal_state_absorbs_further_result_calls() {
        let mut game = classic_game();
        let cross_moves = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];
        let nought_moves = [(2, 0), (2, 1), (1, 2), (2, 2)];
        for turn in 0..4 {
            let (row, column) = cross_moves[turn];
            game.step(row, column, Symbol::Cross).unwrap();
            let (row, column) = nought_moves[turn];
            game.step(row, column, Symbol::Nought).unwrap();
        }
        game.step(0, 2, Symbol::Cross).unwrap();
        assert_eq!(game.result(Symbol::Cross).code(), ResultCode::Winner);

        // Nought also holds a full row by now, but the state is terminal
        assert_eq!(game.result(Symbol::Nought).code(), ResultCode::Winner);
        assert_eq!(game.result(Symbol::Cross).win_player(), Some(Symbol::Cross));
    }

    #[test]
    fn invalid_moves_propagate_and_change_nothing() {
        let mut game = classic_game();
        game.step_result(1, 1, Symbol::Cross).unwrap();

        let err = game.step_result(1, 1, Symbol::Nought).unwrap_err();
        assert_eq!(err, InvalidMove::CellOccupied { row: 1, column: 1 });
        assert_eq!(game.player(Symbol::Nought).count_steps(), 0);

        let err = game.step_result(3, 0, Symbol::Nought).unwrap_err();
        assert_eq!(
            err,
            InvalidMove::OutOfBounds {
                row: 3,
                column: 0,
                size: 3
            }
        );
        assert_eq!(game.table().count_free_cells(), 8);
    }

    #[test]
    fn ai_players_finish_every_game() {
        for seed in 0..8 {
            let players = Players::new(vec![
                Player::new(Symbol::Cross, PlayerKind::Ai),
                Player::new(Symbol::Nought, PlayerKind::Ai),
            ]);
            let table = Table::new(TableParams {
                size: 4,
                run_length: 3,
            })
            .unwrap();
            let mut game = Game::with_parts(
                players,
                table,
                Box::new(LineChecker),
                Box::new(HeuristicAi::seeded(seed)),
            );

            loop {
                let symbol = game.current_player().symbol();
                let code = game.ai_step_result(symbol).unwrap().code();
                match code {
                    ResultCode::InProgress => {
                        game.set_get_next_player();
                    }
                    ResultCode::Winner => {
                        assert!(game.state().win_combination().is_some());
                        break;
                    }
                    ResultCode::AllCellsUsed => {
                        assert_eq!(game.table().count_free_cells(), 0);
                        break;
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "terminal result")]
    fn set_draw_after_winner_is_a_precondition_violation() {
        let mut game = classic_game();
        game.set_winner(Symbol::Cross, Combination(vec![(0, 0), (0, 1), (0, 2)]));
        game.set_draw();
    }
}
