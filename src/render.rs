//! Pure projections from game state to displayable frames.
//!
//! Nothing here touches the DOM or mutates state. Each frame is a plain
//! snapshot the platform layer can apply (or a test can inspect) as-is.

use crate::Leaderboard;
use crate::consts::{ANIMAL_WIDTH, MISTAKE_LIMIT};
use crate::slice::SliceGame;
use crate::snake::SnakeGame;
use crate::ui;

/// What a single grid cell shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Empty,
    Snake,
    Head,
    Apple,
}

impl CellClass {
    /// CSS class list for the cell element.
    pub const fn class_name(self) -> &'static str {
        match self {
            CellClass::Empty => "cell",
            CellClass::Snake => "cell snake",
            CellClass::Head => "cell snake head",
            CellClass::Apple => "cell apple",
        }
    }
}

/// One falling animal, positioned in area space.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteView {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    /// Left edge in pixels.
    pub left: f32,
    pub top: f32,
    pub sliced: bool,
}

/// One swipe-trail dot, centered on the pointer sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Numbers the falling-object HUD displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceHud {
    pub round: u32,
    pub target: &'static str,
    pub score: u32,
    pub correct: u32,
    pub required: u32,
    pub mistakes: u32,
    pub mistake_limit: u32,
}

/// Full frame for the falling-object game.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceFrame {
    pub sprites: Vec<SpriteView>,
    pub trail: Vec<TrailView>,
    pub hud: SliceHud,
}

/// Project the falling-object game into a frame.
pub fn slice_frame(game: &SliceGame) -> SliceFrame {
    let sprites = game
        .animals
        .iter()
        .map(|animal| SpriteView {
            id: animal.id,
            name: animal.spec.name,
            image: animal.spec.image,
            left: animal.pos.x - ANIMAL_WIDTH / 2.0,
            top: animal.pos.y,
            sliced: animal.sliced_for.is_some(),
        })
        .collect();

    let trail = game
        .trail
        .iter()
        .map(|dot| TrailView {
            id: dot.id,
            x: dot.pos.x,
            y: dot.pos.y,
        })
        .collect();

    SliceFrame {
        sprites,
        trail,
        hud: SliceHud {
            round: game.round,
            target: game.target.as_str(),
            score: game.score,
            correct: game.correct,
            required: game.required(),
            mistakes: game.mistakes,
            mistake_limit: MISTAKE_LIMIT,
        },
    }
}

/// Numbers the snake HUD displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeHud {
    pub score: u32,
    pub length: usize,
}

/// Full frame for the snake game: one class per cell, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardFrame {
    pub side: usize,
    pub cells: Vec<CellClass>,
    pub hud: SnakeHud,
}

/// Project the snake game into a frame.
pub fn board_frame(game: &SnakeGame) -> BoardFrame {
    let mut cells = vec![CellClass::Empty; game.grid.cell_count()];

    for &index in game.body.iter() {
        cells[index] = CellClass::Snake;
    }
    cells[game.head()] = CellClass::Head;
    if let Some(apple) = game.apple {
        cells[apple] = CellClass::Apple;
    }

    BoardFrame {
        side: game.grid.side(),
        cells,
        hud: SnakeHud {
            score: game.score,
            length: game.body.len(),
        },
    }
}

/// One line in the saved-scores list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRow {
    /// Shown alone when nothing has been saved yet.
    Placeholder(&'static str),
    /// A saved name/score pair, in stored (descending) order.
    Entry { name: String, score: u32 },
}

/// Project the leaderboard into display rows.
pub fn score_rows(board: &Leaderboard) -> Vec<ScoreRow> {
    if board.is_empty() {
        return vec![ScoreRow::Placeholder(ui::EMPTY_LEADERBOARD)];
    }
    board
        .entries()
        .iter()
        .map(|entry| ScoreRow::Entry {
            name: entry.name.clone(),
            score: entry.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use crate::snake::{Direction, step};

    #[test]
    fn test_board_frame_marks_head_body_and_apple() {
        let mut game = SnakeGame::new(7);
        game.start();
        // Grow once so head and body are distinct cells.
        let head = game.head();
        game.apple = game.grid.neighbor(head, Direction::Right);
        let apple = game.apple.unwrap();
        step(&mut game);

        let frame = board_frame(&game);
        assert_eq!(frame.cells[game.head()], CellClass::Head);
        assert_eq!(frame.cells[head], CellClass::Snake);
        assert_eq!(game.head(), apple, "snake ate the planted apple");
        assert_eq!(frame.hud.length, 2);
        assert_eq!(frame.hud.score, 1);
    }

    #[test]
    fn test_board_frame_apple_cell() {
        let game = SnakeGame::new(7);
        let frame = board_frame(&game);
        let apple = game.apple.unwrap();
        assert_eq!(frame.cells[apple], CellClass::Apple);
        assert_eq!(
            frame.cells.iter().filter(|c| **c == CellClass::Empty).count(),
            frame.cells.len() - 2,
            "one head cell and one apple cell on a fresh board"
        );
    }

    #[test]
    fn test_board_frame_dimensions() {
        let game = SnakeGame::new(1);
        let frame = board_frame(&game);
        assert_eq!(frame.side, 10);
        assert_eq!(frame.cells.len(), 100);
    }

    #[test]
    fn test_cell_class_names() {
        assert_eq!(CellClass::Empty.class_name(), "cell");
        assert_eq!(CellClass::Snake.class_name(), "cell snake");
        assert_eq!(CellClass::Head.class_name(), "cell snake head");
        assert_eq!(CellClass::Apple.class_name(), "cell apple");
    }

    #[test]
    fn test_slice_frame_centers_sprites() {
        let mut game = SliceGame::new(5);
        game.start();
        game.spawn_animal();
        let animal = &game.animals[0];
        let frame = slice_frame(&game);
        assert_eq!(frame.sprites.len(), 1);
        let sprite = &frame.sprites[0];
        assert_eq!(sprite.left, animal.pos.x - ANIMAL_WIDTH / 2.0);
        assert_eq!(sprite.top, animal.pos.y);
        assert!(!sprite.sliced);
        assert_eq!(sprite.name, animal.spec.name);
    }

    #[test]
    fn test_slice_frame_hud_tracks_state() {
        let mut game = SliceGame::new(5);
        game.start();
        game.score = 40;
        game.correct = 2;
        game.mistakes = 1;
        let frame = slice_frame(&game);
        assert_eq!(frame.hud.round, 1);
        assert_eq!(frame.hud.score, 40);
        assert_eq!(frame.hud.correct, 2);
        assert_eq!(frame.hud.required, 3);
        assert_eq!(frame.hud.mistakes, 1);
        assert_eq!(frame.hud.target, game.target.as_str());
    }

    #[test]
    fn test_slice_frame_flags_sliced_sprites() {
        let mut game = SliceGame::new(5);
        game.start();
        game.spawn_animal();
        game.animals[0].sliced_for = Some(0.0);
        let frame = slice_frame(&game);
        assert!(frame.sprites[0].sliced);
    }

    #[test]
    fn test_score_rows_placeholder_when_empty() {
        let rows = score_rows(&Leaderboard::new());
        assert_eq!(rows, vec![ScoreRow::Placeholder(ui::EMPTY_LEADERBOARD)]);
    }

    #[test]
    fn test_score_rows_follow_stored_order() {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        board.record(&mut store, "Ada", 90);
        board.record(&mut store, "Bo", 120);
        assert_eq!(
            score_rows(&board),
            vec![
                ScoreRow::Entry {
                    name: "Bo".to_string(),
                    score: 120
                },
                ScoreRow::Entry {
                    name: "Ada".to_string(),
                    score: 90
                },
            ]
        );
    }
}
