//! Board model: rings, tokens, category labels, player progress
//!
//! Everything the builder emits is immutable puzzle data. Per-player state
//! (placed flags, error count) lives in `PlayerProgress`, parallel to the
//! token list, so the game layer never mutates generated tokens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Concentric placement zones, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    Outer,
    Middle,
    Inner,
}

impl Ring {
    /// Member words a ring's category contains; this count is what
    /// distinguishes rings in a puzzle definition
    pub fn member_words(&self) -> usize {
        match self {
            Ring::Outer => 3,
            Ring::Middle => 2,
            Ring::Inner => 1,
        }
    }

    /// Inverse of `member_words`; `None` for counts no ring can hold
    pub fn from_member_count(count: usize) -> Option<Ring> {
        match count {
            3 => Some(Ring::Outer),
            2 => Some(Ring::Middle),
            1 => Some(Ring::Inner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ring::Outer => "outer",
            Ring::Middle => "middle",
            Ring::Inner => "inner",
        }
    }
}

/// One placeable word, fully positioned. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordToken {
    /// Display text
    pub text: String,
    /// Owning category label, or the `"outlier"` sentinel
    pub category: String,
    /// Assigned ring; absent for the outlier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<Ring>,
    /// Angle in degrees the token is positioned at
    pub theta: f32,
    /// Viewport position, percent
    pub x: f32,
    pub y: f32,
}

impl WordToken {
    pub fn is_outlier(&self) -> bool {
        self.ring.is_none()
    }
}

/// Ring category labels, keyed by member-word count (3 outer, 2 middle,
/// 1 inner).
///
/// The UI legend indexes by cardinality, so the sparse map keeps that shape
/// instead of keying by ring name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabels(BTreeMap<usize, String>);

impl CategoryLabels {
    pub fn insert(&mut self, member_count: usize, label: impl Into<String>) {
        self.0.insert(member_count, label.into());
    }

    pub fn by_count(&self, member_count: usize) -> Option<&str> {
        self.0.get(&member_count).map(String::as_str)
    }

    pub fn for_ring(&self, ring: Ring) -> Option<&str> {
        self.by_count(ring.member_words())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Mutable per-player state, parallel to `Board::words`.
///
/// Owned by the game layer after construction; the builder only ever creates
/// it all-clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    placed: Vec<bool>,
    errors: u32,
}

impl PlayerProgress {
    pub fn new(token_count: usize) -> Self {
        Self {
            placed: vec![false; token_count],
            errors: 0,
        }
    }

    pub fn is_placed(&self, token: usize) -> bool {
        self.placed.get(token).copied().unwrap_or(false)
    }

    /// Flag a token as placed. Out-of-range indices are ignored
    pub fn mark_placed(&mut self, token: usize) {
        if let Some(slot) = self.placed.get_mut(token) {
            *slot = true;
        }
    }

    /// Count one invalid placement attempt
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn placed_count(&self) -> usize {
        self.placed.iter().filter(|&&p| p).count()
    }

    pub fn is_complete(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }
}

/// One puzzle's runtime board: positioned tokens plus the legend and the
/// player's progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Tokens in shuffled placement order
    pub words: Vec<WordToken>,
    /// Ring legend, keyed by member-word count
    pub categories: CategoryLabels,
    /// Placed flags and error counter, all-clear at build
    pub progress: PlayerProgress,
}

impl Board {
    pub fn errors(&self) -> u32 {
        self.progress.errors()
    }

    /// The one token belonging to no ring
    pub fn outlier(&self) -> Option<&WordToken> {
        self.words.iter().find(|t| t.is_outlier())
    }
}
