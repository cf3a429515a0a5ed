//! Moving average over the most recent samples.
//!
//! Run with `RUST_LOG=slotring=trace` to see the cursor wrap and the resize.

use slotring::{Config, RingBuffer};

fn average(window: &RingBuffer<f64>, filled: usize) -> f64 {
    // The buffer has no fill counter, so the caller tracks it.
    let n = filled.min(window.capacity());
    window.iter().take(n).sum::<f64>() / n as f64
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut window = RingBuffer::with_config(&Config::new(4))?;
    let mut filled = 0;

    for sample in [3.0, 5.0, 4.0, 6.0, 10.0, 2.0] {
        window.add(sample);
        filled += 1;
        println!(
            "sample {sample:>5.1} -> avg {:>5.2} (next slot {})",
            average(&window, filled),
            window.cursor()
        );
    }

    // Growing keeps the slots but forgets the write position, so the next
    // sample lands in slot 0 again.
    window.resize(6)?;
    window.add(1.0);
    println!(
        "after resize: {:?} (next slot {})",
        window.as_slice(),
        window.cursor()
    );

    if let Err(err) = window.resize(2) {
        println!("shrink rejected: {err}");
    }

    Ok(())
}
