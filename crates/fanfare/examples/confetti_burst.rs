//! Headless demo: fire a seeded fireworks burst and report what it drew.
//!
//! Run with: cargo run --package fanfare --example confetti_burst

use fanfare::{presets, EngineResult, HeadlessCompositor, Launcher, ManualScheduler, Vec2};

fn main() -> EngineResult<()> {
    let launcher = Launcher::new(HeadlessCompositor::new(Vec2::new(1280.0, 720.0)));

    let mut run = launcher.launch_seeded(presets::fireworks(), 42)?;
    let stats = run.drive(&mut ManualScheduler::default());

    let log = &launcher.compositor().logs()[0];
    println!("burst {} complete", run.id());
    println!("  frames:          {}", stats.frames);
    println!("  particles:       {}", stats.particle_count);
    println!("  circles drawn:   {}", stats.circles_drawn);
    println!("  circles skipped: {}", stats.circles_skipped);
    println!("  overlay attached: {}", run.is_attached());
    println!(
        "  final instance buffer: {} instances ({} bytes each)",
        log.instance_buffer().len(),
        fanfare::CircleInstance::SIZE
    );

    Ok(())
}
