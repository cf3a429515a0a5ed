/// Builds a [`RingBuffer`](crate::RingBuffer) the way `vec!` builds a `Vec`.
///
/// The values land in slots `0..` and the cursor starts at slot 0, so the
/// first `add` overwrites the first value.
///
/// ```rust
/// use slotring::ring;
///
/// let mut window = ring![0.0; 4];
/// window.add(1.5);
/// assert_eq!(window.as_slice(), &[1.5, 0.0, 0.0, 0.0]);
///
/// let names = ring!["a", "b", "c"];
/// assert_eq!(names[4], "b");
/// ```
#[macro_export]
macro_rules! ring {
    () => {
        $crate::RingBuffer::default()
    };
    ($value:expr; $n:expr) => {
        $crate::RingBuffer::from(::std::vec![$value; $n])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::RingBuffer::from(::std::vec![$($value),+])
    };
}
