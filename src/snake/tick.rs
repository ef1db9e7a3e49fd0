//! The discrete snake step.
//!
//! Exactly one of these runs per timer firing. Input is consumed first
//! (buffered direction becomes current), then the move is resolved in
//! order: wall, self collision, then apple/tail bookkeeping and the
//! full-board win check.

use super::state::{Phase, SnakeGame};

/// Advance the game by one tick. Does nothing unless the game is running.
pub fn step(game: &mut SnakeGame) {
    if game.phase != Phase::Running {
        return;
    }

    game.direction = game.buffered;

    let head = game.head();
    let next = match game.grid.neighbor(head, game.direction) {
        None => {
            log::info!("snake hit the wall at cell {}", head);
            game.phase = Phase::Lost;
            return;
        }
        // The tail cell counts even though it moves away this step.
        Some(next) if game.occupies(next) => {
            log::info!("snake ran into itself at cell {}", next);
            game.phase = Phase::Lost;
            return;
        }
        Some(next) => next,
    };

    game.body.push_front(next);
    if game.apple == Some(next) {
        game.score += 1;
        game.roll_apple();
    } else {
        game.body.pop_back();
    }

    if game.body.len() == game.grid.cell_count() {
        log::info!("snake filled the board, final score {}", game.score);
        game.phase = Phase::Won;
    }
}
