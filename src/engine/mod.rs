//! Core logic for managing simulated RAM modules.

pub mod bus;
pub mod controller;
pub mod module;
pub mod slots;

pub use bus::MemoryBus;
pub use controller::{EngineState, MemoryReport, RamController};
pub use module::{DdrType, ModuleError, RamModule, RamSize};
pub use slots::{provision, slot_name};
