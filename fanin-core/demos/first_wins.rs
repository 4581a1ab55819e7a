//! Fan in five timers and report when the first one fires.
//!
//! Run with `RUST_LOG=fanin_core=trace` to see the coordination tasks.

use std::time::Duration;

use fanin_core::{signal::after, FanIn, Strategy};
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> fanin_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let strategy: Strategy = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("tree")
        .parse()?;
    let fan = FanIn::new().strategy(strategy).label("demo");

    let start = Instant::now();
    fan.try_combine([
        after(2 * HOUR),
        after(5 * MINUTE),
        after(Duration::from_secs(1)),
        after(HOUR),
        after(MINUTE),
    ])?
    .await;

    println!("done after {:?} ({strategy})", start.elapsed());
    Ok(())
}
