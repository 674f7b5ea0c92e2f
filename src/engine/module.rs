use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModuleError {
    #[error("unsupported module size: {0}GB")]
    UnsupportedSize(u32),
}

/// The fixed set of module capacities the engine knows about, in GB.
pub const SUPPORTED_SIZES_GB: [u32; 5] = [4, 8, 16, 32, 64];

/// Module capacity, restricted to the supported discrete set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RamSize {
    Gb4,
    Gb8,
    Gb16,
    Gb32,
    Gb64,
}

impl RamSize {
    pub fn as_gb(self) -> u32 {
        match self {
            RamSize::Gb4 => 4,
            RamSize::Gb8 => 8,
            RamSize::Gb16 => 16,
            RamSize::Gb32 => 32,
            RamSize::Gb64 => 64,
        }
    }

    /// Converts a raw GB count into a size, rejecting anything outside
    /// the supported set.
    pub fn from_gb(gb: u32) -> Result<Self, ModuleError> {
        match gb {
            4 => Ok(RamSize::Gb4),
            8 => Ok(RamSize::Gb8),
            16 => Ok(RamSize::Gb16),
            32 => Ok(RamSize::Gb32),
            64 => Ok(RamSize::Gb64),
            other => Err(ModuleError::UnsupportedSize(other)),
        }
    }

    /// Picks a size uniformly at random from the supported set.
    ///
    /// The RNG is injected so callers control determinism; nothing in
    /// the engine seeds from the wall clock.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        const ALL: [RamSize; 5] = [
            RamSize::Gb4,
            RamSize::Gb8,
            RamSize::Gb16,
            RamSize::Gb32,
            RamSize::Gb64,
        ];
        ALL[rng.gen_range(0..ALL.len())]
    }
}

impl fmt::Display for RamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}GB", self.as_gb())
    }
}

/// DDR generation of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DdrType {
    Ddr3,
    Ddr4,
    Ddr5,
    Lpddr4,
}

impl DdrType {
    /// Detects the DDR type for this host.
    ///
    /// ARM targets report LPDDR4; everything else gets a uniform draw
    /// over the desktop DDR generations from the injected RNG.
    pub fn detect<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if std::env::consts::ARCH.contains("arm") || std::env::consts::ARCH == "aarch64" {
            return DdrType::Lpddr4;
        }
        const DESKTOP: [DdrType; 3] = [DdrType::Ddr3, DdrType::Ddr4, DdrType::Ddr5];
        DESKTOP[rng.gen_range(0..DESKTOP.len())]
    }
}

impl fmt::Display for DdrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DdrType::Ddr3 => "DDR3",
            DdrType::Ddr4 => "DDR4",
            DdrType::Ddr5 => "DDR5",
            DdrType::Lpddr4 => "LPDDR4",
        };
        f.write_str(name)
    }
}

/// A single simulated memory module.
///
/// Modules carry no identity beyond their name; duplicates are allowed
/// and never deduplicated. The installed flag reflects only the last
/// install/uninstall applied to the module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamModule {
    name: String,
    size: RamSize,
    ddr: DdrType,
    installed: bool,
    health: u8,
}

impl RamModule {
    /// Creates a module in the uninstalled state at full health.
    pub fn new(name: impl Into<String>, size: RamSize, ddr: DdrType) -> Self {
        Self {
            name: name.into(),
            size,
            ddr,
            installed: false,
            health: 100,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> RamSize {
        self.size
    }

    pub fn ddr(&self) -> DdrType {
        self.ddr
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Remaining health percentage (0-100).
    pub fn health(&self) -> u8 {
        self.health
    }

    pub(crate) fn install(&mut self) {
        self.installed = true;
    }

    pub(crate) fn uninstall(&mut self) {
        self.installed = false;
    }

    /// Wears the module down, saturating at zero health.
    pub fn degrade(&mut self, amount: u8) {
        self.health = self.health.saturating_sub(amount);
    }
}

impl fmt::Display for RamModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Module: {} | Size: {} | Installed: {}",
            self.name,
            self.size,
            if self.installed { "Yes" } else { "No" }
        )
    }
}
