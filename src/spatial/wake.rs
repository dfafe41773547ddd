//! Wake queue - the active-cell scheduler
//!
//! Insertion-ordered set of cells that still need evaluation. Membership is
//! tracked in dense per-cell tables so inserts are idempotent and O(1). The
//! queue is a scheduling optimization only: a cell outside it means
//! "converged, no pending force", and any disturbance re-adds it via `wake`.
//!
//! Removal tombstones the entry; the order vector is compacted once per tick
//! when the step takes its snapshot. Cells enqueued while a tick is running
//! land after the snapshot and are therefore processed next tick, never twice
//! in the same pass.

use crate::spatial::grid::OccupancyGrid;

pub struct WakeQueue {
    width: u32,
    order: Vec<u32>,
    /// Cell is live in the queue.
    queued: Vec<bool>,
    /// Cell has an entry in `order` (live or tombstoned); gates re-pushes.
    in_order: Vec<bool>,
    len: usize,
}

impl WakeQueue {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            order: Vec::new(),
            queued: vec![false; size],
            in_order: vec![false; size],
            len: 0,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    fn coords(&self, idx: u32) -> (u32, u32) {
        (idx % self.width, idx / self.width)
    }

    /// Enqueue a single cell; already-present cells are left untouched.
    pub fn insert(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        if self.queued[idx] {
            return;
        }
        self.queued[idx] = true;
        self.len += 1;
        if !self.in_order[idx] {
            self.in_order[idx] = true;
            self.order.push(idx as u32);
        }
    }

    /// Enqueue every in-bounds, occupied cell of the 3x3 neighborhood
    /// centered at (x, y).
    pub fn wake(&mut self, grid: &OccupancyGrid, x: i32, y: i32) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = x + dx;
                let ny = y + dy;
                if grid.in_bounds(nx, ny) && grid.is_occupied(nx, ny) {
                    self.insert(nx as u32, ny as u32);
                }
            }
        }
    }

    /// Retire a cell. Safe to call for cells that are not queued.
    pub fn remove(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        if self.queued[idx] {
            self.queued[idx] = false;
            self.len -= 1;
        }
    }

    #[inline]
    pub fn is_queued(&self, x: u32, y: u32) -> bool {
        self.queued[self.index(x, y)]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Snapshot the live entries for one tick of processing, compacting
    /// tombstones out of the order vector. Entries stay queued until
    /// explicitly removed.
    pub fn begin_tick(&mut self) -> Vec<(u32, u32)> {
        let mut compacted = Vec::with_capacity(self.len);
        let mut batch = Vec::with_capacity(self.len);
        for &idx in &self.order {
            if self.queued[idx as usize] {
                compacted.push(idx);
                batch.push(self.coords(idx));
            } else {
                self.in_order[idx as usize] = false;
            }
        }
        self.order = compacted;
        batch
    }

    /// Live entries in insertion order; the `activeCells` debug query.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.order
            .iter()
            .filter(|&&idx| self.queued[idx as usize])
            .map(|&idx| self.coords(idx))
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.queued.fill(false);
        self.in_order.fill(false);
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut queue = WakeQueue::new(8, 8);
        queue.insert(3, 3);
        queue.insert(3, 3);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![(3, 3)]);
    }

    #[test]
    fn wake_enqueues_only_occupied_in_bounds_cells() {
        let mut grid = OccupancyGrid::new(8, 8);
        grid.set_occupied(0, 0, true);
        grid.set_occupied(1, 1, true);

        let mut queue = WakeQueue::new(8, 8);
        queue.wake(&grid, 0, 0);

        let cells: Vec<_> = queue.iter().collect();
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(1, 1)));
    }

    #[test]
    fn double_wake_matches_single_wake() {
        let mut grid = OccupancyGrid::new(8, 8);
        grid.set_occupied(4, 4, true);
        grid.set_occupied(5, 4, true);

        let mut once = WakeQueue::new(8, 8);
        once.wake(&grid, 4, 4);
        let mut twice = WakeQueue::new(8, 8);
        twice.wake(&grid, 4, 4);
        twice.wake(&grid, 4, 4);

        assert_eq!(once.iter().collect::<Vec<_>>(), twice.iter().collect::<Vec<_>>());
    }

    #[test]
    fn remove_then_reinsert_yields_one_entry() {
        let mut queue = WakeQueue::new(8, 8);
        queue.insert(2, 2);
        queue.remove(2, 2);
        queue.insert(2, 2);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.begin_tick(), vec![(2, 2)]);
        // Compaction must not have duplicated the entry.
        assert_eq!(queue.begin_tick(), vec![(2, 2)]);
    }

    #[test]
    fn inserts_during_a_tick_are_deferred() {
        let mut queue = WakeQueue::new(8, 8);
        queue.insert(1, 1);
        let batch = queue.begin_tick();
        assert_eq!(batch, vec![(1, 1)]);

        // Simulates a wake issued while processing the batch.
        queue.insert(2, 2);
        assert!(!batch.contains(&(2, 2)));
        let next = queue.begin_tick();
        assert!(next.contains(&(2, 2)));
    }
}
