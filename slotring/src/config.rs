use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CAPACITY: usize = 16;

/// Construction parameters for a [`RingBuffer`](crate::RingBuffer).
///
/// Deserializable, so it can sit inside a caller's own config file. Missing
/// fields fall back to [`Config::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capacity: usize,
}

impl Config {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Sets the number of slots.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
