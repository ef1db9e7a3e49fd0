//! Saved-score leaderboard.
//!
//! Persisted as a bare JSON array under a single storage key, so boards
//! written by earlier releases of the game load unchanged. Malformed or
//! missing data is treated as an empty board; persistence never surfaces
//! an error to the player.

use serde::{Deserialize, Serialize};

use crate::platform::ScoreStore;

/// Maximum number of entries kept.
pub const MAX_ENTRIES: usize = 5;

/// A single saved score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub score: u32,
}

/// Saved scores, best first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    /// Storage key shared with earlier releases.
    pub const STORAGE_KEY: &'static str = "zooNinjaLeaderboard";

    pub fn new() -> Self {
        Self::default()
    }

    /// Load the saved board, or an empty one when nothing usable is stored.
    pub fn load(store: &impl ScoreStore) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<Entry>>(&json) {
            Ok(entries) => Self { entries },
            Err(err) => {
                log::debug!("discarding unreadable leaderboard: {}", err);
                Self::new()
            }
        }
    }

    /// Fold a new score in and persist the survivors. Every score is
    /// recorded; low ones simply fall off the end of the board.
    pub fn record(&mut self, store: &mut impl ScoreStore, name: &str, score: u32) {
        self.entries.push(Entry {
            name: name.to_string(),
            score,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);

        if let Ok(json) = serde_json::to_string(&self.entries) {
            store.set(Self::STORAGE_KEY, &json);
            log::info!("saved {} leaderboard entries", self.entries.len());
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best saved score, if any.
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        let board = Leaderboard::load(&store);
        assert!(board.is_empty());
        assert_eq!(board.top_score(), None);
    }

    #[test]
    fn test_load_corrupt_data() {
        let mut store = MemoryStore::new();
        store.set(Leaderboard::STORAGE_KEY, "{not json");
        assert!(Leaderboard::load(&store).is_empty());

        store.set(Leaderboard::STORAGE_KEY, "{\"name\":\"x\"}");
        assert!(Leaderboard::load(&store).is_empty(), "wrong shape is discarded");
    }

    #[test]
    fn test_record_sorts_and_truncates() {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        for score in [30, 90, 10, 50, 70, 20] {
            board.record(&mut store, "p", score);
        }
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 70, 50, 30, 20]);
        assert_eq!(board.top_score(), Some(90));
    }

    #[test]
    fn test_record_persists_bare_array() {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        board.record(&mut store, "Ada", 120);

        let json = store.get(Leaderboard::STORAGE_KEY).unwrap();
        assert_eq!(json, "[{\"name\":\"Ada\",\"score\":120}]");

        let reloaded = Leaderboard::load(&store);
        assert_eq!(reloaded.entries(), board.entries());
    }

    #[test]
    fn test_ties_keep_recording_order() {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        board.record(&mut store, "first", 50);
        board.record(&mut store, "second", 50);
        assert_eq!(board.entries()[0].name, "first");
        assert_eq!(board.entries()[1].name, "second");
    }

    proptest! {
        #[test]
        fn test_board_stays_capped_and_sorted(scores in proptest::collection::vec(0u32..1000, 0..25)) {
            let mut store = MemoryStore::new();
            let mut board = Leaderboard::new();
            for score in scores {
                board.record(&mut store, "p", score);
            }
            prop_assert!(board.entries().len() <= MAX_ENTRIES);
            prop_assert!(
                board.entries().windows(2).all(|w| w[0].score >= w[1].score),
                "entries are descending"
            );
        }
    }
}
