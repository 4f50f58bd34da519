//! Static puzzle catalog and query-driven selection
//!
//! Pure data plus enumeration. The single-puzzle page variant picks one
//! definition from the `q` query parameter; everything else falls through to
//! the default puzzle.

use serde::Serialize;

use crate::board::{PuzzleError, Ring, assign_ring};

/// One ring's category: a label plus its member words
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RingSpec {
    pub label: &'static str,
    pub words: &'static [&'static str],
}

/// Static specification of one puzzle: three ring specs plus the outlier word.
///
/// Member-word cardinality decides the ring (3 outer, 2 middle, 1 inner).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PuzzleDefinition {
    pub outer: RingSpec,
    pub middle: RingSpec,
    pub inner: RingSpec,
    /// The one word belonging to no ring
    pub outlier: &'static str,
}

impl PuzzleDefinition {
    /// Ring specs in outer → middle → inner order (the flattening order)
    pub fn ring_specs(&self) -> [&RingSpec; 3] {
        [&self.outer, &self.middle, &self.inner]
    }

    /// Construction-time check of the cardinality invariant.
    ///
    /// Stricter than ring assignment alone: each spec must land on the ring
    /// its position claims, so a 2-word outer spec fails here instead of
    /// silently overwriting the middle ring's legend entry.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let expected = [Ring::Outer, Ring::Middle, Ring::Inner];
        for (spec, want) in self.ring_specs().into_iter().zip(expected) {
            if assign_ring(spec)? != want {
                return Err(PuzzleError::InvalidPuzzleDefinition {
                    label: spec.label.to_string(),
                    count: spec.words.len(),
                });
            }
        }
        Ok(())
    }
}

/// Fixed catalog. Entry 0 is the default puzzle, entry 1 the `q=1` puzzle.
pub const PUZZLE_CATALOG: &[PuzzleDefinition] = &[
    PuzzleDefinition {
        outer: RingSpec {
            label: "words with white",
            words: &["elephant", "egg", "flag"],
        },
        middle: RingSpec {
            label: "say something you shouldn't",
            words: &["rat", "lie"],
        },
        inner: RingSpec {
            label: "uncool",
            words: &["out"],
        },
        outlier: "nest",
    },
    PuzzleDefinition {
        outer: RingSpec {
            label: "verb",
            words: &["lose", "seem", "took"],
        },
        middle: RingSpec {
            label: "noun",
            words: &["does", "spat"],
        },
        inner: RingSpec {
            label: "adjective",
            words: &["still"],
        },
        outlier: "and",
    },
];

/// Select a definition by the `q` query parameter value.
///
/// Exact matches map to fixed catalog entries; an absent or unrecognized
/// value falls through to the default puzzle.
pub fn definition_for_query(q: Option<&str>) -> &'static PuzzleDefinition {
    match q {
        Some("1") => &PUZZLE_CATALOG[1],
        _ => &PUZZLE_CATALOG[0],
    }
}

/// Read `q` from the page URL and select the matching definition
#[cfg(target_arch = "wasm32")]
pub fn definition_from_location() -> &'static PuzzleDefinition {
    let q = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .and_then(|href| web_sys::Url::new(&href).ok())
        .and_then(|url| url.search_params().get("q"));
    definition_for_query(q.as_deref())
}
