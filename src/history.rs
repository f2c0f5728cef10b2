use std::collections::VecDeque;

use log::debug;

use crate::grid::Grid;

/// Recording state for gesture batching.
///
/// A pointer gesture may touch dozens of cells between down and up; only the
/// `Batching → Idle` transition commits a snapshot, and only when at least
/// one change was noted in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    Idle,
    Batching { dirty: bool },
}

/// Undo/redo manager over whole-grid snapshots.
///
/// `entries` holds the committed states oldest first and always contains at
/// least the baseline grid from load time; `redo_stack` holds undone states
/// with the most recently undone at the front. Every snapshot is an
/// independent value copy — nothing here aliases the live grid.
#[derive(Debug)]
pub struct GestureHistory {
    entries: VecDeque<Grid>,
    redo_stack: VecDeque<Grid>,
    max_entries: usize,
    state: RecordState,
}

impl GestureHistory {
    /// Start a history whose baseline is the grid at load time.
    pub fn new(baseline: &Grid, max_entries: usize) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(baseline.clone());
        Self {
            entries,
            redo_stack: VecDeque::new(),
            max_entries,
            state: RecordState::Idle,
        }
    }

    /// Rebuild from persisted stacks. If the persisted history's top does
    /// not match the live grid (or nothing was persisted), the live grid is
    /// appended as baseline so the load-time state is always reachable.
    pub fn from_persisted(
        entries: Vec<Grid>,
        redo: Vec<Grid>,
        live: &Grid,
        max_entries: usize,
    ) -> Self {
        let mut entries: VecDeque<Grid> = entries.into();
        if entries.back() != Some(live) {
            entries.push_back(live.clone());
        }
        while entries.len() > max_entries {
            entries.pop_front();
        }
        Self {
            entries,
            redo_stack: redo.into(),
            max_entries,
            state: RecordState::Idle,
        }
    }

    /// Enter the batching state for a new pointer gesture.
    pub fn begin_gesture(&mut self) {
        if self.state != RecordState::Idle {
            debug!("gesture already in flight, keeping existing batch");
            return;
        }
        self.state = RecordState::Batching { dirty: false };
    }

    /// Note that the in-flight gesture changed the grid.
    pub fn note_change(&mut self) {
        if let RecordState::Batching { dirty } = &mut self.state {
            *dirty = true;
        }
    }

    /// Finish the in-flight gesture, committing one snapshot if it changed
    /// anything. No-op when idle.
    pub fn end_gesture(&mut self, grid: &Grid) {
        let committed = matches!(self.state, RecordState::Batching { dirty: true });
        self.state = RecordState::Idle;
        if committed {
            self.push_gesture(grid);
        }
    }

    /// Drop the in-flight gesture without committing (mode switch mid-drag).
    pub fn cancel_gesture(&mut self) {
        self.state = RecordState::Idle;
    }

    /// Commit `grid` as a single history entry, truncating the oldest past
    /// the bound and invalidating the redo stack.
    pub fn push_gesture(&mut self, grid: &Grid) {
        self.entries.push_back(grid.clone());
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        self.redo_stack.clear();
        debug!("committed snapshot, history depth {}", self.entries.len());
    }

    /// Step back one entry, returning the grid to restore. No-op (`None`)
    /// while only the baseline remains.
    pub fn undo(&mut self) -> Option<Grid> {
        if self.entries.len() < 2 {
            return None;
        }
        let top = self.entries.pop_back()?;
        self.redo_stack.push_front(top);
        self.entries.back().cloned()
    }

    /// Reapply the most recently undone entry, returning the grid to
    /// restore. No-op (`None`) when nothing was undone.
    pub fn redo(&mut self) -> Option<Grid> {
        let next = self.redo_stack.pop_front()?;
        self.entries.push_back(next.clone());
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        Some(next)
    }

    /// Clear both stacks and restart from `grid` (startup and resize — a
    /// resize is deliberately not undoable).
    pub fn reset_baseline(&mut self, grid: &Grid) {
        self.entries.clear();
        self.entries.push_back(grid.clone());
        self.redo_stack.clear();
        self.state = RecordState::Idle;
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshots in storage order (oldest first) for persistence.
    pub fn entries(&self) -> impl Iterator<Item = &Grid> {
        self.entries.iter()
    }

    /// Redo snapshots in storage order (most recently undone first).
    pub fn redo_entries(&self) -> impl Iterator<Item = &Grid> {
        self.redo_stack.iter()
    }
}
