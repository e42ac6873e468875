use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Whether a player's moves come from outside or from the injected strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Ai,
}

/// One participant: a mark, a move counter and a human/AI flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    symbol: Symbol,
    kind: PlayerKind,
    count_steps: usize,
}

impl Player {
    pub fn new(symbol: Symbol, kind: PlayerKind) -> Self {
        Self {
            symbol,
            kind,
            count_steps: 0,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// How many moves this player has applied so far.
    pub fn count_steps(&self) -> usize {
        self.count_steps
    }

    pub(crate) fn add_count_step(&mut self) {
        self.count_steps += 1;
    }
}

/// Ordered rotation of participants.
///
/// The engine only ever consumes the current player and "advance to the
/// next player"; rotation order is internal.
#[derive(Clone, Debug)]
pub struct Players {
    players: Vec<Player>,
    current: usize,
}

impl Players {
    /// Creates the rotation, starting at the first player given.
    ///
    /// Panics if fewer than two players are given or two players share a
    /// symbol.
    pub fn new(players: Vec<Player>) -> Self {
        assert!(players.len() >= 2, "a game needs at least two players");
        for (i, player) in players.iter().enumerate() {
            assert!(
                players[i + 1..].iter().all(|p| p.symbol != player.symbol),
                "players must have distinct symbols"
            );
        }
        Self {
            players,
            current: 0,
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Rotates to the next player in line and returns it.
    pub fn set_get_next_player(&mut self) -> &Player {
        self.current = (self.current + 1) % self.players.len();
        &self.players[self.current]
    }

    /// Looks up a player by mark. Panics for a symbol that is not part of
    /// this rotation, which is a caller bug.
    pub fn player(&self, symbol: Symbol) -> &Player {
        self.players
            .iter()
            .find(|player| player.symbol == symbol)
            .expect("no player with this symbol")
    }

    pub(crate) fn player_mut(&mut self, symbol: Symbol) -> &mut Player {
        self.players
            .iter_mut()
            .find(|player| player.symbol == symbol)
            .expect("no player with this symbol")
    }
}
