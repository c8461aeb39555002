//! Async task lifecycle tracking.
//!
//! Each async operation the runtime spawns gets a [`TaskId`]; the reducer
//! records started tasks in [`Tasks`] and clears them when the matching
//! result event arrives. Cancellation goes through the stored token.

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Credentials submit round trip.
    Submit,
    /// Post-login navigation delay.
    Redirect,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

/// Task lifecycle state (stored in `AppState`, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub submit: TaskState,
    pub redirect: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Submit => &mut self.submit,
            TaskKind::Redirect => &mut self.redirect,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.submit.is_running() || self.redirect.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_ids_are_unique() {
        let mut seq = TaskSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_finish_ignores_stale_id() {
        let mut state = TaskState::default();
        state.on_started(&TaskStarted {
            id: TaskId(7),
            cancel: None,
        });

        assert!(!state.finish_if_active(TaskId(3)));
        assert!(state.is_running());
        assert!(state.finish_if_active(TaskId(7)));
        assert!(!state.is_running());
    }
}
