use super::bus::MemoryBus;
use super::module::RamModule;
use crate::progress::ProgressSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Observable lifecycle phase of the engine.
///
/// Purely informational; no operation is gated on the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Idle,
    Installing,
    Installed,
    Uninstalling,
}

impl Default for EngineState {
    fn default() -> Self {
        EngineState::Idle
    }
}

/// Owns the module collection and the bus; orchestrates the lifecycle.
///
/// Modules are kept in insertion order and the bus is synchronized after
/// every individual install/uninstall. All operations are total: there
/// is no partial-failure handling because nothing here can fail.
#[derive(Debug, Default)]
pub struct RamController {
    modules: Vec<RamModule>,
    bus: MemoryBus,
    state: EngineState,
}

impl RamController {
    pub fn new() -> Self {
        info!("ram controller initialized");
        Self {
            modules: Vec::new(),
            bus: MemoryBus::new(),
            state: EngineState::Idle,
        }
    }

    /// Appends a module. No capacity limit, no duplicate check.
    pub fn add_module(&mut self, module: RamModule) {
        info!(name = module.name(), size = module.size().as_gb(), "module added");
        self.modules.push(module);
    }

    pub fn modules(&self) -> &[RamModule] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn bus(&self) -> &MemoryBus {
        &self.bus
    }

    /// Walks the module collection reporting one progress step per
    /// module. Status output only; no state changes.
    pub fn scan_modules(&self, sink: &mut dyn ProgressSink) {
        info!(modules = self.modules.len(), "scanning modules");
        sink.task_started("scan", self.modules.len() as u64);
        for (i, module) in self.modules.iter().enumerate() {
            info!(
                name = module.name(),
                size = module.size().as_gb(),
                ddr = %module.ddr(),
                "module detected"
            );
            sink.step_completed(i as u64 + 1);
        }
        sink.task_finished("scan");
    }

    /// Installs every module in insertion order, synchronizing the bus
    /// after each one.
    pub fn install_all(&mut self, sink: &mut dyn ProgressSink) {
        self.state = EngineState::Installing;
        info!(modules = self.modules.len(), "beginning install sequence");
        sink.task_started("install", self.modules.len() as u64);
        for (i, module) in self.modules.iter_mut().enumerate() {
            module.install();
            self.bus.sync();
            info!(name = module.name(), "module installed");
            sink.step_completed(i as u64 + 1);
        }
        sink.task_finished("install");
        self.state = EngineState::Installed;
        info!("install sequence complete");
    }

    /// Uninstalls every module in insertion order, synchronizing the
    /// bus after each one.
    pub fn uninstall_all(&mut self, sink: &mut dyn ProgressSink) {
        self.state = EngineState::Uninstalling;
        info!(modules = self.modules.len(), "beginning uninstall sequence");
        sink.task_started("uninstall", self.modules.len() as u64);
        for (i, module) in self.modules.iter_mut().enumerate() {
            module.uninstall();
            self.bus.sync();
            info!(name = module.name(), "module removed");
            sink.step_completed(i as u64 + 1);
        }
        sink.task_finished("uninstall");
        self.state = EngineState::Idle;
        info!("uninstall sequence complete");
    }

    /// Snapshots the current module states for reporting.
    pub fn report(&self) -> MemoryReport {
        MemoryReport {
            modules: self.modules.clone(),
        }
    }
}

/// Deterministic dump of all modules in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryReport {
    modules: Vec<RamModule>,
}

impl MemoryReport {
    pub fn modules(&self) -> &[RamModule] {
        &self.modules
    }

    pub fn installed_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_installed()).count()
    }
}

impl fmt::Display for MemoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MEMORY REPORT ===")?;
        for module in &self.modules {
            writeln!(f, "{module}")?;
        }
        write!(f, "=====================")
    }
}
