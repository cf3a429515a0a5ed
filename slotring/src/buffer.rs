use std::ops::{Index, IndexMut};

use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::Config;
use crate::error::{Result, RingError};
use crate::position::{Iter, IterMut, Position};

const UNSIZED: &str = "ring buffer is unsized, call `resize` before using it";

/// A fixed-capacity ring buffer (circular buffer) that overwrites slots in
/// order, wrapping back to the first slot after the last one.
///
/// Internally uses a `Vec<T>` holding exactly `capacity` slots and a cursor
/// pointing at the next slot to write. There is no element count: every slot
/// is always part of the buffer, iteration always yields `capacity` items, and
/// `len()` is the capacity. Callers that care about partial fill track it
/// themselves.
///
/// Indexing is modulo the capacity, so `buf[i]` never goes out of bounds.
#[derive(Clone)]
pub struct RingBuffer<T> {
    storage: Vec<T>,
    capacity: usize,
    cursor: usize,
    generation: u64,
}

impl<T: Default> RingBuffer<T> {
    /// Creates a new `RingBuffer` with `capacity` default-valued slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`RingBuffer::try_new`].
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        Self::allocate(capacity)
    }

    /// Like [`RingBuffer::new`], but returns [`RingError::ZeroCapacity`]
    /// instead of panicking.
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self::allocate(capacity))
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Self::try_new(config.capacity)
    }

    fn allocate(capacity: usize) -> Self {
        let storage: Vec<T> = std::iter::repeat_with(T::default).take(capacity).collect();
        RingBuffer {
            storage,
            capacity,
            cursor: 0,
            generation: 0,
        }
    }

    /// Grows the buffer to `new_capacity` slots.
    ///
    /// Slots `0..capacity()` keep their values, new slots hold `T::default()`.
    /// The cursor goes back to slot 0 and every [`Position`] taken before the
    /// call becomes stale, even when the capacity does not change.
    ///
    /// Fails with [`RingError::Shrink`] when `new_capacity` is below the
    /// current capacity, and with [`RingError::Alloc`] when the storage
    /// cannot grow. The buffer is left untouched on failure.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.capacity {
            debug!(
                "rejected shrink of ring buffer from {} to {} slots",
                self.capacity, new_capacity
            );
            return Err(RingError::Shrink {
                requested: new_capacity,
                current: self.capacity,
            });
        }

        // Fill the new slots off to the side so a panicking `T::default`
        // leaves the live storage as it was.
        let extra = new_capacity - self.capacity;
        let mut tail = Vec::new();
        tail.try_reserve_exact(extra)?;
        self.storage.try_reserve_exact(extra)?;
        tail.resize_with(extra, T::default);
        self.storage.append(&mut tail);

        debug!(
            "resized ring buffer from {} to {} slots",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }
}

impl<T> RingBuffer<T> {
    /// Writes `value` at the cursor and advances the cursor, wrapping to slot
    /// 0 after the last slot. Whatever the slot held before is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is unsized.
    #[inline]
    pub fn add(&mut self, value: T) {
        assert!(self.is_sized(), "{}", UNSIZED);
        self.storage[self.cursor] = value;
        self.cursor += 1;
        if self.cursor == self.capacity {
            trace!("ring buffer cursor wrapped after {} slots", self.capacity);
            self.cursor = 0;
        }
    }

    /// Number of slots. This is not the number of `add` calls.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same as [`RingBuffer::capacity`].
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity
    }

    /// True only for an unsized (zero-capacity) buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    #[inline]
    pub fn is_sized(&self) -> bool {
        self.capacity > 0
    }

    /// Slot index the next `add` writes to.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slot `index % capacity`. `None` only when the buffer is unsized.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        index
            .checked_rem(self.capacity)
            .map(|slot| &self.storage[slot])
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        index
            .checked_rem(self.capacity)
            .map(|slot| &mut self.storage[slot])
    }

    /// Physical slot 0. This is not the oldest element.
    #[inline]
    pub fn front(&self) -> &T {
        &self[0]
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    /// Physical slot `capacity - 1`.
    #[inline]
    pub fn back(&self) -> &T {
        let slot = self.last_slot();
        &self.storage[slot]
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let slot = self.last_slot();
        &mut self.storage[slot]
    }

    /// Overwrites slot 0 without moving the cursor.
    #[inline]
    pub fn set_front(&mut self, value: T) {
        *self.front_mut() = value;
    }

    /// Overwrites slot `capacity - 1` without moving the cursor.
    #[inline]
    pub fn set_back(&mut self, value: T) {
        *self.back_mut() = value;
    }

    /// The slot under the cursor, i.e. the one the next `add` overwrites.
    /// It is not the most recently written slot.
    #[inline]
    pub fn last(&self) -> &T {
        assert!(self.is_sized(), "{}", UNSIZED);
        &self.storage[self.cursor]
    }

    #[inline]
    pub fn last_mut(&mut self) -> &mut T {
        assert!(self.is_sized(), "{}", UNSIZED);
        &mut self.storage[self.cursor]
    }

    #[inline]
    fn last_slot(&self) -> usize {
        assert!(self.is_sized(), "{}", UNSIZED);
        self.capacity - 1
    }

    /// Position of slot 0.
    #[inline]
    pub fn begin(&self) -> Position {
        Position::new(0, self.generation)
    }

    /// Position one past the last slot.
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(self.capacity, self.generation)
    }

    /// Position of slot `index % capacity`, or `begin()` when unsized.
    #[inline]
    pub fn position(&self, index: usize) -> Position {
        self.begin() + index.checked_rem(self.capacity).unwrap_or(0)
    }

    #[inline]
    pub fn cursor_position(&self) -> Position {
        self.begin() + self.cursor
    }

    /// Whether `pos` was taken from the current storage.
    #[inline]
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.generation() == self.generation
    }

    pub fn at(&self, pos: Position) -> Result<&T> {
        let slot = self.check(pos)?;
        Ok(&self.storage[slot])
    }

    pub fn at_mut(&mut self, pos: Position) -> Result<&mut T> {
        let slot = self.check(pos)?;
        Ok(&mut self.storage[slot])
    }

    fn check(&self, pos: Position) -> Result<usize> {
        if !self.is_valid(pos) {
            return Err(RingError::StalePosition {
                position: pos,
                current: self.generation,
            });
        }
        if pos.offset() >= self.capacity {
            return Err(RingError::OutOfRange {
                offset: pos.offset(),
                capacity: self.capacity,
            });
        }
        Ok(pos.offset())
    }

    /// Iterates every slot in physical order, `begin()` to `end()`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.storage.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.storage.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Returns the storage in physical slot order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

impl<T> Default for RingBuffer<T> {
    /// An unsized buffer. It has no slots until [`RingBuffer::resize`] is
    /// called with a non-zero capacity.
    fn default() -> Self {
        RingBuffer {
            storage: Vec::new(),
            capacity: 0,
            cursor: 0,
            generation: 0,
        }
    }
}

impl<T> From<Vec<T>> for RingBuffer<T> {
    /// Adopts `storage` as the slots, with the cursor at slot 0.
    fn from(storage: Vec<T>) -> Self {
        let capacity = storage.len();
        RingBuffer {
            storage,
            capacity,
            cursor: 0,
            generation: 0,
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(self.is_sized(), "{}", UNSIZED);
        &self.storage[index % self.capacity]
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(self.is_sized(), "{}", UNSIZED);
        &mut self.storage[index % self.capacity]
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("slots", &self.storage)
            .field("cursor", &self.cursor)
            .finish()
    }
}

// Generations are bookkeeping for positions, not contents.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor && self.storage == other.storage
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

#[derive(Serialize)]
struct RawRingRef<'a, T> {
    slots: &'a [T],
    cursor: usize,
}

#[derive(Deserialize)]
struct RawRing<T> {
    slots: Vec<T>,
    cursor: usize,
}

impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawRingRef {
            slots: &self.storage,
            cursor: self.cursor,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingBuffer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawRing::<T>::deserialize(deserializer)?;
        let capacity = raw.slots.len();
        if raw.cursor >= capacity && !(capacity == 0 && raw.cursor == 0) {
            return Err(serde::de::Error::custom(format!(
                "cursor {} is out of range for {} slots",
                raw.cursor, capacity
            )));
        }
        let mut buffer = RingBuffer::from(raw.slots);
        buffer.cursor = raw.cursor;
        Ok(buffer)
    }
}
