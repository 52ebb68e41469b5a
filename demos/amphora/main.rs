//! Headless amphora demo: builds the mesh once, then runs the animation
//! driver for a few loops the way a host renderer would once per frame.
//!
//! Usage:
//! ```text
//! cargo run --example amphora            # 4 loops at the fixed step
//! cargo run --example amphora -- 600     # run 600 ticks
//! RUST_LOG=amphora=trace cargo run --example amphora
//! ```

use amphora::animation::{Driver, DriverConfig};
use amphora::operations::query::{BoundingBox, IsValid};
use amphora::Result;

/// Log the offset every this many ticks.
const REPORT_EVERY: usize = 30;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for amphora.
    // Override with RUST_LOG env var (e.g. RUST_LOG=amphora=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("amphora=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ticks = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(485);

    let mut driver = Driver::init(DriverConfig::default())?;

    let mesh = driver.current_mesh();
    let aabb = BoundingBox::new(mesh).execute()?;
    tracing::info!(
        valid = IsValid::new(mesh).execute(),
        min = ?aabb.min,
        max = ?aabb.max,
        "mesh bounds"
    );

    for frame in 0..ticks {
        driver.tick(1.0 / 60.0);
        if frame % REPORT_EVERY == 0 {
            let offset = driver.current_offset();
            tracing::info!(
                frame,
                elapsed = driver.elapsed(),
                x = offset.x,
                z = offset.z,
                "offset"
            );
        }
    }

    Ok(())
}
