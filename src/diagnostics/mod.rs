//! Memory region diagnostics and self-test.
//!
//! Free functions over a module slice, independent of the controller.
//! Region count derives from the actual module collection rather than a
//! fixed constant, so the dump can never disagree with the modules it
//! describes.

use crate::engine::module::RamModule;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Health threshold below which a region is reported as degraded.
const DEGRADED_BELOW: u8 = 50;

/// Status of one memory region, backed by one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionStatus {
    pub index: usize,
    pub module: String,
    pub health: u8,
    pub ok: bool,
}

impl fmt::Display for RegionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region {}: {}",
            self.index,
            if self.ok { "OK" } else { "DEGRADED" }
        )
    }
}

/// Snapshots the state of every memory region.
pub fn dump_memory_state(modules: &[RamModule]) -> Vec<RegionStatus> {
    info!(regions = modules.len(), "dumping memory state");
    modules
        .iter()
        .enumerate()
        .map(|(index, module)| RegionStatus {
            index,
            module: module.name().to_string(),
            health: module.health(),
            ok: module.health() >= DEGRADED_BELOW,
        })
        .collect()
}

/// Outcome of a full self-test pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestReport {
    pub regions_checked: usize,
    pub failed_regions: Vec<usize>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.failed_regions.is_empty()
    }
}

impl fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "Self-test: {} regions checked, no issues found", self.regions_checked)
        } else {
            write!(
                f,
                "Self-test: {} regions checked, {} failed",
                self.regions_checked,
                self.failed_regions.len()
            )
        }
    }
}

/// Checks every region, flagging modules whose health has collapsed.
pub fn run_self_test(modules: &[RamModule]) -> SelfTestReport {
    info!(regions = modules.len(), "running self-test");
    let failed_regions = modules
        .iter()
        .enumerate()
        .filter(|(_, m)| m.health() == 0)
        .map(|(i, _)| i)
        .collect();
    let report = SelfTestReport {
        regions_checked: modules.len(),
        failed_regions,
    };
    info!(passed = report.passed(), "self-test finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::module::{DdrType, RamSize};

    fn modules(count: usize) -> Vec<RamModule> {
        (0..count)
            .map(|i| RamModule::new(format!("RAM_SLOT_{i}"), RamSize::Gb8, DdrType::Ddr4))
            .collect()
    }

    #[test]
    fn test_region_count_tracks_module_count() {
        assert_eq!(dump_memory_state(&modules(0)).len(), 0);
        assert_eq!(dump_memory_state(&modules(5)).len(), 5);
        assert_eq!(dump_memory_state(&modules(9)).len(), 9);
    }

    #[test]
    fn test_healthy_regions_render_ok() {
        let regions = dump_memory_state(&modules(2));
        assert_eq!(regions[0].to_string(), "Region 0: OK");
        assert_eq!(regions[1].to_string(), "Region 1: OK");
    }

    #[test]
    fn test_worn_module_shows_degraded() {
        let mut mods = modules(2);
        mods[1].degrade(80);
        let regions = dump_memory_state(&mods);
        assert!(regions[0].ok);
        assert!(!regions[1].ok);
        assert_eq!(regions[1].to_string(), "Region 1: DEGRADED");
    }

    #[test]
    fn test_self_test_passes_on_healthy_modules() {
        let report = run_self_test(&modules(6));
        assert!(report.passed());
        assert_eq!(report.regions_checked, 6);
    }

    #[test]
    fn test_self_test_flags_dead_regions() {
        let mut mods = modules(3);
        mods[2].degrade(100);
        let report = run_self_test(&mods);
        assert!(!report.passed());
        assert_eq!(report.failed_regions, vec![2]);
    }
}
