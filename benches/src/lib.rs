//! Shared fixtures for the slotring benchmarks.

use slotring::RingBuffer;

pub const SIZES: &[usize] = &[16, 1024, 65536];

/// A buffer of `capacity` slots that has already wrapped once.
pub fn wrapped(capacity: usize) -> RingBuffer<u64> {
    let mut buf = RingBuffer::new(capacity);
    buf.extend(0..capacity as u64 + 1);
    buf
}
