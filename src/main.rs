use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use ram_engine::diagnostics;
use ram_engine::engine::{slots, RamController};
use ram_engine::progress::ConsoleProgress;

const MODULE_COUNT: usize = 6;
const STEP_PAUSE: Duration = Duration::from_millis(30);

fn main() {
    // Operational logs go to stderr so the report text on stdout stays
    // clean; raise RUST_LOG to see engine internals.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("=== RAM Allocation Engine v{} ===", ram_engine::VERSION);

    let mut rng = StdRng::from_entropy();
    let mut sink = ConsoleProgress::with_step_pause(STEP_PAUSE);
    let mut controller = RamController::new();

    for module in slots::provision(MODULE_COUNT, &mut rng) {
        controller.add_module(module);
    }

    println!("\n[RamController] Scanning modules...");
    controller.scan_modules(&mut sink);

    println!("\n[Diagnostics] Dumping memory state...");
    for region in diagnostics::dump_memory_state(controller.modules()) {
        println!("{region}");
    }

    println!("\n[Diagnostics] Running self-test...");
    println!("{}", diagnostics::run_self_test(controller.modules()));

    println!("\n[Installer] Installing all modules...");
    controller.install_all(&mut sink);
    println!("\n{}", controller.report());

    println!("\n[System] Releasing memory...");
    controller.uninstall_all(&mut sink);
    println!("\n{}", controller.report());

    println!("\n[System] Operation complete.");
    println!("Note: No actual RAM was harmed during this process.");
}
