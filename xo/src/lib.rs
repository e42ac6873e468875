pub use ai::*;
pub use cell::*;
pub use checker::*;
pub use combination::*;
pub use errors::*;
pub use game::*;
pub use grid::*;
pub use players::*;
pub use table::*;
pub use visualization::*;

mod ai;
#[cfg(test)]
mod arbitrary;
mod cell;
mod checker;
mod combination;
mod errors;
mod game;
mod grid;
mod players;
mod table;
mod visualization;
