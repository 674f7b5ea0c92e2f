//! Progress reporting for engine operations.
//!
//! Lifecycle operations take a sink instead of printing fabricated
//! progress bars themselves. The engine calls `task_started` with the
//! total step count, `step_completed` once per module processed, and
//! `task_finished` when the walk is done. Sinks decide what (if
//! anything) to show; only [`console::ConsoleProgress`] ever blocks.

pub mod console;

pub use console::ConsoleProgress;

/// Receiver for operation progress notifications.
pub trait ProgressSink {
    fn task_started(&mut self, task: &str, steps: u64);
    fn step_completed(&mut self, step: u64);
    fn task_finished(&mut self, task: &str);
}

/// Sink that discards all notifications.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn task_started(&mut self, _task: &str, _steps: u64) {}
    fn step_completed(&mut self, _step: u64) {}
    fn task_finished(&mut self, _task: &str) {}
}

/// A single recorded progress notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started { task: String, steps: u64 },
    Step { step: u64 },
    Finished { task: String },
}

/// Sink that records every notification, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Vec<ProgressEvent>,
}

impl RecordingProgress {
    /// Number of step notifications seen between the start and finish
    /// of the named task.
    pub fn steps(&self, task: &str) -> u64 {
        let mut in_task = false;
        let mut count = 0;
        for event in &self.events {
            match event {
                ProgressEvent::Started { task: t, .. } if t == task => in_task = true,
                ProgressEvent::Finished { task: t } if t == task => in_task = false,
                ProgressEvent::Step { .. } if in_task => count += 1,
                _ => {}
            }
        }
        count
    }
}

impl ProgressSink for RecordingProgress {
    fn task_started(&mut self, task: &str, steps: u64) {
        self.events.push(ProgressEvent::Started {
            task: task.to_string(),
            steps,
        });
    }

    fn step_completed(&mut self, step: u64) {
        self.events.push(ProgressEvent::Step { step });
    }

    fn task_finished(&mut self, task: &str) {
        self.events.push(ProgressEvent::Finished {
            task: task.to_string(),
        });
    }
}
