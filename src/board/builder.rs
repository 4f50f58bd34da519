//! Puzzle definition → board transformation
//!
//! Flattens the three ring specs and the outlier into word tokens, shuffles
//! them with an unbiased Fisher-Yates pass, then merges coordinates pulled
//! from the shared generator in shuffled order.

use rand::Rng;
use rand::seq::SliceRandom;

use super::coords::CoordinateGenerator;
use super::state::{Board, CategoryLabels, PlayerProgress, Ring, WordToken};
use crate::catalog::{PuzzleDefinition, RingSpec};
use crate::consts::{OUTLIER_CATEGORY, TOKENS_PER_BOARD};

/// Errors surfaced while turning catalog data into boards
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("ring spec '{label}' has {count} member words, expected 1, 2, or 3")]
    InvalidPuzzleDefinition { label: String, count: usize },
}

/// Map a ring spec to its ring by member-word count.
///
/// Any cardinality the board cannot represent fails loudly here instead of
/// producing an unlabeled ring downstream.
pub fn assign_ring(spec: &RingSpec) -> Result<Ring, PuzzleError> {
    Ring::from_member_count(spec.words.len()).ok_or_else(|| {
        PuzzleError::InvalidPuzzleDefinition {
            label: spec.label.to_string(),
            count: spec.words.len(),
        }
    })
}

/// Build one board from a puzzle definition.
///
/// The outlier token goes in first and shuffles with the rest, so it is not
/// guaranteed any particular position. Coordinates are merged in shuffled
/// order: placement order equals storage order.
pub fn build_board<R: Rng + ?Sized>(
    def: &PuzzleDefinition,
    coords: &mut CoordinateGenerator,
    rng: &mut R,
) -> Result<Board, PuzzleError> {
    let mut words = Vec::with_capacity(TOKENS_PER_BOARD);
    words.push(WordToken {
        text: def.outlier.to_string(),
        category: OUTLIER_CATEGORY.to_string(),
        ring: None,
        theta: 0.0,
        x: 0.0,
        y: 0.0,
    });

    let mut categories = CategoryLabels::default();
    for spec in def.ring_specs() {
        let ring = assign_ring(spec)?;
        categories.insert(spec.words.len(), spec.label);
        for &word in spec.words {
            words.push(WordToken {
                text: word.to_string(),
                category: spec.label.to_string(),
                ring: Some(ring),
                theta: 0.0,
                x: 0.0,
                y: 0.0,
            });
        }
    }

    words.shuffle(rng);

    for token in &mut words {
        let slot = coords.next_placement();
        token.theta = slot.theta;
        token.x = slot.x;
        token.y = slot.y;
    }

    let progress = PlayerProgress::new(words.len());
    Ok(Board {
        words,
        categories,
        progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashMap;

    use crate::catalog::PUZZLE_CATALOG;

    fn default_board(seed: u64) -> Board {
        let mut coords = CoordinateGenerator::new();
        let mut rng = Pcg32::seed_from_u64(seed);
        build_board(&PUZZLE_CATALOG[0], &mut coords, &mut rng).unwrap()
    }

    #[test]
    fn test_every_board_has_seven_tokens_one_outlier() {
        let mut coords = CoordinateGenerator::new();
        let mut rng = Pcg32::seed_from_u64(1);
        for def in PUZZLE_CATALOG {
            let board = build_board(def, &mut coords, &mut rng).unwrap();
            assert_eq!(board.words.len(), TOKENS_PER_BOARD);
            assert_eq!(board.words.iter().filter(|t| t.is_outlier()).count(), 1);
        }
    }

    #[test]
    fn test_assign_ring_is_pure_in_count() {
        let outer = RingSpec {
            label: "a",
            words: &["x", "y", "z"],
        };
        let middle = RingSpec {
            label: "b",
            words: &["x", "y"],
        };
        let inner = RingSpec {
            label: "c",
            words: &["x"],
        };
        assert_eq!(assign_ring(&outer).unwrap(), Ring::Outer);
        assert_eq!(assign_ring(&middle).unwrap(), Ring::Middle);
        assert_eq!(assign_ring(&inner).unwrap(), Ring::Inner);
    }

    #[test]
    fn test_invalid_cardinality_fails_build() {
        let def = PuzzleDefinition {
            outer: RingSpec {
                label: "too big",
                words: &["a", "b", "c", "d"],
            },
            middle: RingSpec {
                label: "ok",
                words: &["e", "f"],
            },
            inner: RingSpec {
                label: "ok too",
                words: &["g"],
            },
            outlier: "x",
        };
        let mut coords = CoordinateGenerator::new();
        let mut rng = Pcg32::seed_from_u64(2);
        let err = build_board(&def, &mut coords, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InvalidPuzzleDefinition {
                label: "too big".to_string(),
                count: 4
            }
        );
    }

    #[test]
    fn test_shuffle_preserves_word_multiset() {
        for seed in 0..20 {
            let board = default_board(seed);
            let mut texts: Vec<&str> = board.words.iter().map(|t| t.text.as_str()).collect();
            texts.sort_unstable();
            assert_eq!(
                texts,
                vec!["egg", "elephant", "flag", "lie", "nest", "out", "rat"]
            );
        }
    }

    #[test]
    fn test_example_board_end_to_end() {
        let board = default_board(7);
        assert_eq!(board.categories.by_count(3), Some("words with white"));
        assert_eq!(
            board.categories.by_count(2),
            Some("say something you shouldn't")
        );
        assert_eq!(board.categories.by_count(1), Some("uncool"));

        let outlier = board.outlier().unwrap();
        assert_eq!(outlier.text, "nest");
        assert_eq!(outlier.category, OUTLIER_CATEGORY);

        assert_eq!(board.errors(), 0);
        for i in 0..board.words.len() {
            assert!(!board.progress.is_placed(i));
        }
    }

    #[test]
    fn test_tokens_carry_category_of_their_ring() {
        let board = default_board(11);
        for token in &board.words {
            match token.ring {
                Some(ring) => {
                    assert_eq!(board.categories.for_ring(ring), Some(token.category.as_str()))
                }
                None => assert_eq!(token.category, OUTLIER_CATEGORY),
            }
        }
    }

    #[test]
    fn test_tokens_take_generator_slots_in_storage_order() {
        let board = default_board(3);
        let mut reference = CoordinateGenerator::new();
        for token in &board.words {
            let slot = reference.next_placement();
            assert_eq!(token.theta, slot.theta);
            assert_eq!(token.x, slot.x);
            assert_eq!(token.y, slot.y);
        }
    }

    #[test]
    fn test_outlier_position_is_uniform() {
        // The outlier is pushed first but must shuffle like everything else:
        // over many builds it should land in each of the 7 slots equally
        // often. n = 7000, expected 1000 per slot, sd ≈ 29.
        let mut counts = [0u32; TOKENS_PER_BOARD];
        let mut rng = Pcg32::seed_from_u64(0xA11CE);
        for _ in 0..7000 {
            let mut coords = CoordinateGenerator::new();
            let board = build_board(&PUZZLE_CATALOG[0], &mut coords, &mut rng).unwrap();
            let pos = board.words.iter().position(|t| t.is_outlier()).unwrap();
            counts[pos] += 1;
        }
        for &count in &counts {
            assert!(
                (850..=1150).contains(&count),
                "outlier slot counts skewed: {counts:?}"
            );
        }
    }

    #[test]
    fn test_relative_order_of_outer_words_is_uniform() {
        // The three outer-ring words admit 6 relative orderings; an unbiased
        // shuffle hits each with equal frequency. n = 6000, expected 1000
        // per ordering, sd ≈ 29.
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut rng = Pcg32::seed_from_u64(0xBEEF);
        for _ in 0..6000 {
            let mut coords = CoordinateGenerator::new();
            let board = build_board(&PUZZLE_CATALOG[0], &mut coords, &mut rng).unwrap();
            let ordering = board
                .words
                .iter()
                .filter(|t| t.ring == Some(Ring::Outer))
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(",");
            *counts.entry(ordering).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (ordering, &count) in &counts {
            assert!(
                (850..=1150).contains(&count),
                "ordering {ordering:?} seen {count} times"
            );
        }
    }
}
