//! Observable board list
//!
//! Populating this collection is the module's one externally visible side
//! effect. The UI layer subscribes for change notifications and drives the
//! two mutation operations (placing a token, recording an error); board data
//! itself stays immutable after population.

use std::rc::Rc;

use rand::Rng;

use crate::board::{Board, CoordinateGenerator, PuzzleError, build_board};
use crate::catalog::PuzzleDefinition;

/// Notifications delivered to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A board was appended during population
    BoardAdded { index: usize },
    /// The game layer placed a token
    TokenPlaced { board: usize, token: usize },
    /// The game layer counted an invalid placement attempt
    ErrorRecorded { board: usize, errors: u32 },
}

/// Handle for unsubscribing an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

struct Observer {
    id: u64,
    callback: Rc<dyn Fn(BoardEvent)>,
}

/// Ordered list of boards with publish/subscribe change notification.
///
/// Single-threaded by design: populated once at startup, then mutated only
/// from the UI event loop.
#[derive(Default)]
pub struct BoardCollection {
    boards: Vec<Board>,
    observers: Vec<Observer>,
    next_observer_id: u64,
}

impl BoardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a populated collection, or nothing at all if any definition is
    /// invalid
    pub fn from_catalog<R: Rng + ?Sized>(
        catalog: &[PuzzleDefinition],
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let mut collection = Self::new();
        collection.populate(catalog, rng)?;
        Ok(collection)
    }

    /// Build every catalog entry in order and append it.
    ///
    /// One coordinate generator is shared across the whole pass, so angles
    /// keep growing from board to board instead of restarting at zero. All
    /// boards are built before any is appended: an invalid definition aborts
    /// the pass without exposing a partial batch to observers.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        catalog: &[PuzzleDefinition],
        rng: &mut R,
    ) -> Result<(), PuzzleError> {
        if catalog.is_empty() {
            log::warn!("populating from an empty catalog");
        }

        let mut coords = CoordinateGenerator::new();
        let mut built = Vec::with_capacity(catalog.len());
        for def in catalog {
            built.push(build_board(def, &mut coords, rng)?);
        }
        for board in built {
            self.push(board);
        }

        log::info!("board collection populated: {} boards", self.boards.len());
        Ok(())
    }

    /// Append a board and notify observers
    pub fn push(&mut self, board: Board) {
        self.boards.push(board);
        self.notify(BoardEvent::BoardAdded {
            index: self.boards.len() - 1,
        });
    }

    /// Register an observer for all subsequent events
    pub fn subscribe(&mut self, callback: impl Fn(BoardEvent) + 'static) -> ObserverId {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push(Observer {
            id,
            callback: Rc::new(callback),
        });
        ObserverId(id)
    }

    /// Drop an observer; returns false if the id was already gone
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != id.0);
        self.observers.len() < before
    }

    /// Mark a token placed and notify. Unknown indices are ignored
    pub fn mark_placed(&mut self, board: usize, token: usize) {
        if let Some(b) = self.boards.get_mut(board) {
            b.progress.mark_placed(token);
            self.notify(BoardEvent::TokenPlaced { board, token });
        }
    }

    /// Count an invalid placement attempt on a board and notify
    pub fn record_error(&mut self, board: usize) {
        if let Some(b) = self.boards.get_mut(board) {
            b.progress.record_error();
            let errors = b.progress.errors();
            self.notify(BoardEvent::ErrorRecorded { board, errors });
        }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    fn notify(&self, event: BoardEvent) {
        for observer in &self.observers {
            (observer.callback)(event);
        }
    }
}
