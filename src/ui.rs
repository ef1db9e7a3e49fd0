//! User-facing copy and overlay bookkeeping.
//!
//! Every string a player can read lives here, so the platform layer and the
//! tests agree on the exact wording.

use crate::snake::Phase;

/// Stand-in name when the player saves a score without entering one.
pub const DEFAULT_PLAYER: &str = "Zoo Hero";

/// Shown in the leaderboard list when nothing has been saved yet.
pub const EMPTY_LEADERBOARD: &str = "No scores yet — be the first!";

/// Class that keeps an overlay off-screen.
pub const HIDDEN_CLASS: &str = "overlay--hidden";

/// Overlay screens on the falling-object page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Instructions,
    Leaderboard,
    RoundComplete,
    GameOver,
}

impl Screen {
    /// DOM id of the overlay element.
    pub const fn element_id(self) -> &'static str {
        match self {
            Screen::Start => "startScreen",
            Screen::Instructions => "instructionsScreen",
            Screen::Leaderboard => "leaderboardScreen",
            Screen::RoundComplete => "roundScreen",
            Screen::GameOver => "gameOverScreen",
        }
    }
}

/// Entered name, trimmed, or the stand-in when blank.
pub fn player_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn correct_display(correct: u32, required: u32) -> String {
    format!("{}/{}", correct, required)
}

pub fn mistake_display(mistakes: u32, limit: u32) -> String {
    format!("{}/{}", mistakes, limit)
}

pub fn round_title(round: u32) -> String {
    format!("Round {} Complete!", round)
}

pub fn round_message(correct: u32) -> String {
    format!(
        "You sliced {} correct animals! Ready for the next challenge?",
        correct
    )
}

pub fn game_over_message(score: u32, round: u32) -> String {
    format!("You scored {} points in {} rounds.", score, round)
}

/// Status line under the snake board.
pub fn snake_status(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Press Start",
        Phase::Running => "Snake is vibing...",
        Phase::Lost => "Game over! Hit reset to try again.",
        Phase::Won => "You win! The grid is full.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name_trims_and_defaults() {
        assert_eq!(player_name("  Ada  "), "Ada");
        assert_eq!(player_name(""), DEFAULT_PLAYER);
        assert_eq!(player_name("   "), DEFAULT_PLAYER);
    }

    #[test]
    fn test_hud_displays() {
        assert_eq!(correct_display(2, 5), "2/5");
        assert_eq!(mistake_display(1, 3), "1/3");
    }

    #[test]
    fn test_round_copy() {
        assert_eq!(round_title(2), "Round 2 Complete!");
        assert_eq!(
            round_message(5),
            "You sliced 5 correct animals! Ready for the next challenge?"
        );
        assert_eq!(
            game_over_message(120, 3),
            "You scored 120 points in 3 rounds."
        );
    }

    #[test]
    fn test_snake_status_lines() {
        assert_eq!(snake_status(Phase::Idle), "Press Start");
        assert_eq!(snake_status(Phase::Running), "Snake is vibing...");
        assert_eq!(snake_status(Phase::Lost), "Game over! Hit reset to try again.");
        assert_eq!(snake_status(Phase::Won), "You win! The grid is full.");
    }
}
