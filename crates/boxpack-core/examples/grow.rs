//! Adds boxes one at a time and repacks the whole set after each addition.
//!
//! `cargo run -p boxpack-core --example grow -- [count] [seed]`
//! Set `RUST_LOG=debug` (or `trace`) to see the packer's own events.

use boxpack_core::{PackBox, pack};
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> boxpack_core::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .try_init();

    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(256);
    let mut rng = match args.next().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let sides = [8u32, 16, 32, 64];
    let mut boxes: Vec<PackBox<u32, usize>> = Vec::with_capacity(n);
    let mut best_fill = 0.0f64;
    for i in 0..n {
        let w = sides[rng.gen_range(0..sides.len())];
        // square 75% of the time
        let h = if rng.gen_bool(0.25) {
            1u32 << rng.gen_range(3u32..7)
        } else {
            w
        };
        boxes.push(PackBox::with_payload(w, h, i));

        let t0 = Instant::now();
        let container = pack(&mut boxes)?;
        let elapsed = t0.elapsed();
        best_fill = best_fill.max(container.fill);

        info!(
            i,
            n,
            progress = %format!("{:.1}%", (i + 1) as f64 / n as f64 * 100.0),
            width = container.width,
            height = container.height,
            fill = %format!("{:.3}", container.fill),
            micros = elapsed.as_micros() as u64,
            "repacked"
        );
    }

    if let Some(last) = boxes.iter().max_by_key(|b| b.payload) {
        info!(
            id = %format!("{:02X}", last.payload),
            position = ?last.position(),
            "last box"
        );
    }
    info!(best_fill = %format!("{:.3}", best_fill), "done");
    Ok(())
}
