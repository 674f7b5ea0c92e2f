use tracing::debug;

/// Synchronization stub invoked after every module state change.
///
/// The bus performs no real work; it only counts syncs so tests and
/// callers can observe that the side effect happened. Simulated latency
/// is the progress sink's concern, never the bus's.
#[derive(Debug, Default)]
pub struct MemoryBus {
    sync_count: u64,
}

impl MemoryBus {
    pub fn new() -> Self {
        debug!("memory bus initialized");
        Self::default()
    }

    /// Completes one synchronization cycle. Cannot fail.
    pub fn sync(&mut self) {
        self.sync_count += 1;
        debug!(sync_count = self.sync_count, "memory bus sync complete");
    }

    /// Number of sync cycles completed since construction.
    pub fn sync_count(&self) -> u64 {
        self.sync_count
    }
}
