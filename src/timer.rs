// ============================================================================
// Deferred tasks with revocable tokens
// ============================================================================

/// Work that runs after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Mark the press as a long press if it is still held
    LongPressCheck,
    /// Reverse the press expansion after a quick release
    DeferredRetract,
}

/// Identity of one scheduled task. Cancelling by token only ever removes
/// that exact task, never a later reschedule of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    token: TimerToken,
    deadline_ms: u64,
    task: TimerTask,
}

/// Pending tasks, fired by the owner's clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
    next_token: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: TimerTask, deadline_ms: u64) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push(Scheduled {
            token,
            deadline_ms,
            task,
        });
        log::trace!("Scheduled {:?} at {}ms ({:?})", task, deadline_ms, token);
        token
    }

    /// Remove a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.token != token);
        let removed = self.pending.len() != before;
        if removed {
            log::trace!("Cancelled {:?}", token);
        }
        removed
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|s| s.token == token)
    }

    /// Earliest pending deadline, so a host can sleep until then
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|s| s.deadline_ms).min()
    }

    /// Remove and return the earliest task due at `now_ms`, with its deadline.
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerToken, TimerTask, u64)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.deadline_ms <= now_ms)
            .min_by_key(|(_, s)| (s.deadline_ms, s.token))
            .map(|(index, _)| index)?;
        let due = self.pending.remove(index);
        Some((due.token, due.task, due.deadline_ms))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
