use super::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// Terminal progress sink backed by an indicatif bar.
///
/// An optional per-step pause reproduces the original demo's simulated
/// operation latency. The pause lives here, not in the engine, so
/// library callers never block.
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
    step_pause: Option<Duration>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            bar: None,
            step_pause: None,
        }
    }

    /// Pauses for `pause` after each step, simulating slow hardware.
    pub fn with_step_pause(pause: Duration) -> Self {
        Self {
            bar: None,
            step_pause: Some(pause),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:10} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleProgress {
    fn task_started(&mut self, task: &str, steps: u64) {
        let bar = ProgressBar::new(steps);
        bar.set_style(Self::style());
        bar.set_message(task.to_string());
        self.bar = Some(bar);
    }

    fn step_completed(&mut self, step: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(step);
        }
        if let Some(pause) = self.step_pause {
            thread::sleep(pause);
        }
    }

    fn task_finished(&mut self, _task: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
