use std::cell::Cell;
use std::rc::Rc;

/// Timestamp handed to frame callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Host clock in seconds.
    pub now: f64,
    /// Seconds since the previous tick (`0` on the first tick).
    pub delta: f64,
}

/// Value returned by a frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Run again on the next frame.
    Continue,
    /// The task is complete; never call it again.
    Done,
}

/// Lifecycle of a spawned frame task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Still receiving frame callbacks.
    Running,
    /// Returned [`TaskStatus::Done`].
    Finished,
    /// Stopped through [`TaskHandle::cancel`].
    Cancelled,
}

/// Identifier of a spawned task, unique per scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Handle to a spawned frame task.
///
/// Cancelling guarantees the callback never fires again. Dropping the handle does not
/// cancel the task.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    id: TaskId,
    state: Rc<Cell<TaskState>>,
}

impl TaskHandle {
    /// Stop the task. No-op once it has finished or was already cancelled.
    pub fn cancel(&self) {
        if self.state.get() == TaskState::Running {
            self.state.set(TaskState::Cancelled);
            tracing::debug!(task = self.id.0, "frame task cancelled");
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TaskState {
        self.state.get()
    }

    /// `true` while the task still receives frames.
    pub fn is_running(&self) -> bool {
        self.state.get() == TaskState::Running
    }

    /// Task identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub(crate) fn finished(id: TaskId) -> Self {
        Self {
            id,
            state: Rc::new(Cell::new(TaskState::Finished)),
        }
    }
}

type FrameCallback = Box<dyn FnMut(FrameTime) -> TaskStatus>;

struct Task {
    id: TaskId,
    state: Rc<Cell<TaskState>>,
    callback: FrameCallback,
}

/// Single-threaded per-frame callback scheduler.
///
/// The host calls [`FrameScheduler::tick`] once per rendered frame; every running task is
/// invoked once, in spawn order.
#[derive(Default)]
pub struct FrameScheduler {
    tasks: Vec<Task>,
    next_id: u64,
    last_now: Option<f64>,
}

impl FrameScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to run on every subsequent frame until it returns
    /// [`TaskStatus::Done`] or its handle is cancelled.
    pub fn spawn<F>(&mut self, callback: F) -> TaskHandle
    where
        F: FnMut(FrameTime) -> TaskStatus + 'static,
    {
        let id = self.alloc_id();
        let state = Rc::new(Cell::new(TaskState::Running));
        self.tasks.push(Task {
            id,
            state: Rc::clone(&state),
            callback: Box::new(callback),
        });
        tracing::trace!(task = id.0, "frame task spawned");
        TaskHandle { id, state }
    }

    pub(crate) fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Run one frame at host time `now` (seconds). Returns the number of callbacks invoked.
    pub fn tick(&mut self, now: f64) -> usize {
        let delta = self.last_now.map_or(0.0, |prev| (now - prev).max(0.0));
        self.last_now = Some(now);
        let time = FrameTime { now, delta };

        let mut invoked = 0;
        for task in &mut self.tasks {
            // Re-checked per task: an earlier callback may have cancelled this one.
            if task.state.get() != TaskState::Running {
                continue;
            }
            invoked += 1;
            if (task.callback)(time) == TaskStatus::Done
                && task.state.get() == TaskState::Running
            {
                task.state.set(TaskState::Finished);
            }
        }
        self.tasks.retain(|t| t.state.get() == TaskState::Running);
        invoked
    }

    /// Number of tasks that will run on the next tick.
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.state.get() == TaskState::Running)
            .count()
    }

    /// `true` when no task is running.
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("tasks", &self.tasks.iter().map(|t| t.id).collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .field("last_now", &self.last_now)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/scheduler.rs"]
mod tests;
