//! Delayed actions, polled from the main loop.
//!
//! Every task belongs to an owner (usually the screen that asked for it), so the
//! owner's pending work can be dropped in one go when it goes away.

use std::fmt::Debug;
use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Task<O, A> {
    id: TaskId,
    owner: O,
    due: Duration,
    action: A,
}

/// A single-threaded timer queue. Time only moves when [`Scheduler::advance`] is
/// called.
#[derive(Debug)]
pub struct Scheduler<O, A> {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task<O, A>>,
}

impl<O, A> Default for Scheduler<O, A> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<O: Copy + PartialEq + Debug, A: Debug> Scheduler<O, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to come due `delay` from now.
    pub fn schedule(&mut self, owner: O, delay: Duration, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        debug!(?id, ?owner, ?delay, ?action, "Task scheduled");
        self.tasks.push(Task {
            id,
            owner,
            due: self.now + delay,
            action,
        });
        id
    }

    /// Drops a pending task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            debug!(?id, "Task cancelled");
        }
        cancelled
    }

    /// Drops every pending task belonging to `owner`, returning how many there were.
    pub fn cancel_owned_by(&mut self, owner: O) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.owner != owner);
        let cancelled = before - self.tasks.len();
        if cancelled > 0 {
            debug!(?owner, cancelled, "Tasks cancelled");
        }
        cancelled
    }

    /// Moves the clock forward and hands back the actions that came due, earliest
    /// first (ties in scheduling order).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<A> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) = self.tasks.drain(..).partition(|task| task.due <= now);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due, task.id));

        due.into_iter()
            .map(|task| {
                debug!(id = ?task.id, owner = ?task.owner, "Task due");
                task.action
            })
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Time advanced since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Owner {
        A,
        B,
    }

    #[test]
    fn test_task_fires_once_due() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Owner::A, Duration::from_millis(100), "exit");

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec!["exit"]);
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_due_actions_come_back_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Owner::A, Duration::from_millis(30), 3);
        scheduler.schedule(Owner::A, Duration::from_millis(10), 1);
        scheduler.schedule(Owner::B, Duration::from_millis(10), 2);

        assert_eq!(scheduler.advance(Duration::from_millis(50)), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(Owner::A, Duration::from_millis(10), "menu");

        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(Duration::from_millis(20)).is_empty());
    }

    #[test]
    fn test_cancel_owned_by_leaves_other_owners_alone() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Owner::A, Duration::from_millis(10), "a1");
        scheduler.schedule(Owner::A, Duration::from_millis(20), "a2");
        scheduler.schedule(Owner::B, Duration::from_millis(10), "b");

        assert_eq!(scheduler.cancel_owned_by(Owner::A), 2);
        assert_eq!(scheduler.advance(Duration::from_millis(30)), vec!["b"]);
    }

    #[test]
    fn test_delay_counts_from_scheduling_time() {
        let mut scheduler = Scheduler::new();
        scheduler.advance(Duration::from_millis(500));
        scheduler.schedule(Owner::B, Duration::from_millis(100), ());

        assert!(scheduler.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(50)).len(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(600));
    }
}
