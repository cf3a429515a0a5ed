//! Random-access positions into a [`RingBuffer`](crate::RingBuffer)'s storage.
//!
//! A [`Position`] is a detached offset, not a borrow. It can be held across
//! mutation of the buffer, moved around with arithmetic, compared, and
//! dereferenced through [`RingBuffer::at`](crate::RingBuffer::at). Each
//! position remembers the storage generation it was taken from, so
//! dereferencing it after a `resize` fails with
//! [`RingError::StalePosition`](crate::RingError::StalePosition) instead of
//! reading the wrong slot.
//!
//! For plain traversal prefer [`Iter`] and [`IterMut`], which borrow the
//! buffer and cannot outlive a reallocation.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Borrowing iterator over every slot, in physical order.
pub type Iter<'a, T> = std::slice::Iter<'a, T>;

/// Mutable borrowing iterator over every slot, in physical order.
pub type IterMut<'a, T> = std::slice::IterMut<'a, T>;

/// Detached random-access position of one slot, checked on dereference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    offset: usize,
    generation: u64,
}

impl Position {
    #[inline]
    pub(crate) fn new(offset: usize, generation: u64) -> Self {
        Self { offset, generation }
    }

    /// Physical slot offset this position designates.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl PartialOrd for Position {
    /// Positions from different storage generations are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.generation != other.generation {
            return None;
        }
        Some(self.offset.cmp(&other.offset))
    }
}

// Offsets wrap instead of panicking. A wrapped offset is far past any
// capacity, so `RingBuffer::at` reports it as out of range.
impl Add<usize> for Position {
    type Output = Position;

    #[inline]
    fn add(self, n: usize) -> Position {
        Position::new(self.offset.wrapping_add(n), self.generation)
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, n: usize) -> Position {
        Position::new(self.offset.wrapping_sub(n), self.generation)
    }
}

impl AddAssign<usize> for Position {
    #[inline]
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl SubAssign<usize> for Position {
    #[inline]
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

impl Sub for Position {
    type Output = isize;

    /// Signed distance in slots from `other` to `self`. Both positions must
    /// come from the same storage generation.
    #[inline]
    fn sub(self, other: Position) -> isize {
        debug_assert_eq!(
            self.generation, other.generation,
            "distance between positions of different storage generations"
        );
        self.offset.wrapping_sub(other.offset) as isize
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn arithmetic() {
        let begin = Position::new(0, 0);
        let end = begin + 5;
        assert_eq!(end.offset(), 5);
        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);

        let mut pos = begin;
        pos += 3;
        pos -= 1;
        assert_eq!(pos.offset(), 2);
        assert_eq!((end - 2).offset(), 3);
    }

    #[test]
    fn ordering_within_generation() {
        let a = Position::new(1, 7);
        let b = Position::new(2, 7);
        assert!(a < b);
        assert!(b >= a);
        assert_ne!(a, b);
        assert_eq!(a + 1, b);
    }

    #[test]
    fn different_generations_are_unordered() {
        let old = Position::new(1, 0);
        let new = Position::new(1, 1);
        assert_ne!(old, new);
        assert_eq!(old.partial_cmp(&new), None);
        assert!(!(old < new) && !(old > new));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different storage generations")]
    fn distance_across_generations_panics_in_debug() {
        let _ = Position::new(3, 1) - Position::new(1, 0);
    }

    #[test]
    fn moving_before_begin_wraps() {
        let pos = Position::new(0, 0) - 1;
        assert_eq!(pos.offset(), usize::MAX);
    }
}
