use super::module::{DdrType, RamModule, RamSize};
use rand::Rng;

/// Deterministic slot name for a module index.
pub fn slot_name(index: usize) -> String {
    format!("RAM_SLOT_{index}")
}

/// Builds `count` modules with sequential slot names and random sizes.
///
/// The DDR type is detected once and shared by every module, matching
/// how a real machine populates its slots.
pub fn provision<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<RamModule> {
    let ddr = DdrType::detect(rng);
    (0..count)
        .map(|i| RamModule::new(slot_name(i), RamSize::random(rng), ddr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::module::SUPPORTED_SIZES_GB;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_slot_name_is_pure_and_injective() {
        assert_eq!(slot_name(0), "RAM_SLOT_0");
        assert_eq!(slot_name(0), slot_name(0));

        let names: HashSet<String> = (0..1000).map(slot_name).collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn test_provision_builds_sequentially_named_modules() {
        let mut rng = StdRng::seed_from_u64(7);
        let modules = provision(6, &mut rng);

        assert_eq!(modules.len(), 6);
        for (i, module) in modules.iter().enumerate() {
            assert_eq!(module.name(), slot_name(i));
            assert!(SUPPORTED_SIZES_GB.contains(&module.size().as_gb()));
            assert!(!module.is_installed());
        }
    }

    #[test]
    fn test_provision_shares_one_ddr_type() {
        let mut rng = StdRng::seed_from_u64(7);
        let modules = provision(6, &mut rng);
        let first = modules[0].ddr();
        assert!(modules.iter().all(|m| m.ddr() == first));
    }

    #[test]
    fn test_provision_is_deterministic_for_a_fixed_seed() {
        let a = provision(6, &mut StdRng::seed_from_u64(99));
        let b = provision(6, &mut StdRng::seed_from_u64(99));
        let sizes_a: Vec<u32> = a.iter().map(|m| m.size().as_gb()).collect();
        let sizes_b: Vec<u32> = b.iter().map(|m| m.size().as_gb()).collect();
        assert_eq!(sizes_a, sizes_b);
    }
}
