//! A fixed-capacity circular buffer with modulo indexing and wrap-on-write
//! insertion.
//!
//! # Design
//!
//! * One contiguous `Vec<T>` holds every slot. It is allocated once up front
//!   and again, wholesale, by [`RingBuffer::resize`].
//! * A cursor names the next slot to write. [`RingBuffer::add`] writes there
//!   and moves the cursor on, wrapping to slot 0 after the last slot.
//! * There is no fill counter. Iteration, `len()` and `capacity()` always
//!   cover every slot, written or not.
//! * `buf[i]` maps to slot `i % capacity` and never goes out of bounds.
//! * [`RingBuffer::resize`] only grows. It keeps slots in place, resets the
//!   cursor to 0, and invalidates every outstanding [`Position`].
//!
//! ```rust
//! use slotring::RingBuffer;
//!
//! let mut buf = RingBuffer::new(3);
//! for v in 1..=4 {
//!     buf.add(v);
//! }
//! assert_eq!(buf.as_slice(), &[4, 2, 3]);
//! assert_eq!(*buf.last(), 2);
//! assert_eq!(buf[7], 2);
//! ```

mod buffer;
pub mod config;
pub mod error;
pub mod macros;
pub mod position;

pub use buffer::RingBuffer;
pub use config::Config;
pub use error::{Result, RingError};
pub use position::{Iter, IterMut, Position};
