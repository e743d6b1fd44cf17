//! Cooperative timer queue
//!
//! Nothing here spawns threads or sleeps. The owner calls [`TaskQueue::drain_due`]
//! from its event loop and acts on whatever has expired.

use std::collections::BTreeMap;
use std::time::Instant;

/// Handle to a scheduled task, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Queue of payloads waiting for their due instant
#[derive(Debug)]
pub struct TaskQueue<P> {
    // Keyed by (due, id) so equal due times fire in scheduling order
    tasks: BTreeMap<(Instant, TaskId), P>,
    next_id: u64,
}

impl<P> TaskQueue<P> {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Schedule a payload to become due at `due`
    pub fn schedule(&mut self, due: Instant, payload: P) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert((due, id), payload);
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let key = self.tasks.keys().find(|(_, task)| *task == id).copied();
        match key {
            Some(key) => self.tasks.remove(&key).is_some(),
            None => false,
        }
    }

    /// Remove and return every task whose due instant is at or before `now`
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TaskId, P)> {
        let mut due = Vec::new();
        while let Some(entry) = self.tasks.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((_, id), payload) = entry.remove_entry();
            due.push((id, payload));
        }
        due
    }

    /// Earliest pending due instant
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.keys().next().map(|(due, _)| *due)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.keys().any(|(_, task)| *task == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<P> Default for TaskQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}
