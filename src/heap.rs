//! Binary max-heap algorithms.
//!
//! A slice `v` is a max-heap when, for every index `i`, neither child
//! `v[2 * i + 1]` nor `v[2 * i + 2]` (where they exist) compares greater than
//! `v[i]`. Equal keys may sit on either side of a parent/child edge.
//!
//! The functions here never allocate and never change the slice length.
//! Growing the storage before [`push_heap`] and shrinking it after
//! [`pop_heap`] is up to the caller:
//!
//! ```rust
//! use heap_algo::heap::{pop_heap, push_heap};
//!
//! let mut queue = Vec::new();
//! for x in [4, 8, 1] {
//!     queue.push(x);
//!     push_heap(&mut queue);
//! }
//! pop_heap(&mut queue);
//! assert_eq!(queue.pop(), Some(8));
//! ```
//!
//! # Preconditions
//!
//! `push_heap`, `pop_heap` and `sort_heap` expect a heap (or, for
//! `push_heap`, a heap plus one trailing element). Breaking that contract is
//! a logic error: the slice ends up in an unspecified order, but it is always
//! a permutation of the input and no access goes out of bounds. The same
//! holds when a comparator is not a strict weak ordering or panics.

use crate::hole::Hole;

/// Moves the held-out value toward `top` while its parent compares less.
///
/// # Safety
///
/// `top` must be the hole position or one of its ancestors.
unsafe fn sift_up<T, F>(hole: &mut Hole<'_, T>, top: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while hole.pos() > top {
        let parent = (hole.pos() - 1) / 2;
        if !is_less(hole.get(parent), hole.element()) {
            break;
        }
        hole.move_to(parent);
    }
}

/// Re-seats `v[pos]` in the subtree rooted at `pos`.
///
/// The hole walks all the way down, always promoting the greater child (the
/// right one on ties), and the held-out value then sifts back up no further
/// than `pos`.
fn adjust<T, F>(v: &mut [T], pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(pos < len);

    // SAFETY: every index touched below is a descendant of `pos` that is
    // checked against `len`, or an ancestor of the hole on the way back up.
    unsafe {
        let mut hole = Hole::new(v, pos);
        let mut child = 2 * pos + 2;
        while child < len {
            if is_less(hole.get(child), hole.get(child - 1)) {
                child -= 1;
            }
            hole.move_to(child);
            child = 2 * hole.pos() + 2;
        }
        if child == len {
            hole.move_to(child - 1);
        }
        sift_up(&mut hole, pos, is_less);
    }
}

/// Restores the heap after one element was appended at the end.
///
/// `v[..v.len() - 1]` must already be a heap; the last element is sifted up
/// into place in O(log n).
///
/// # Examples
///
/// ```rust
/// use heap_algo::push_heap;
///
/// let mut v = vec![9, 6, 4, 1, 5, 3, 2, 8];
/// push_heap(&mut v);
/// assert_eq!(v, [9, 8, 4, 6, 5, 3, 2, 1]);
/// ```
pub fn push_heap<T: Ord>(v: &mut [T]) {
    push_heap_by(v, T::lt)
}

/// [`push_heap`] with `is_less` as the strict less-than.
pub fn push_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    // SAFETY: `len - 1` is in bounds and 0 is an ancestor of every index.
    unsafe {
        let mut hole = Hole::new(v, len - 1);
        sift_up(&mut hole, 0, &mut is_less);
    }
}

/// [`push_heap`] ordering elements by the key `f` extracts.
pub fn push_heap_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    push_heap_by(v, |a, b| f(a).lt(&f(b)))
}

/// Moves the maximum to the last slot and re-heaps the rest.
///
/// `v` must be a heap. Afterwards `v[v.len() - 1]` holds the former maximum
/// and `v[..v.len() - 1]` is a heap of the remaining elements. O(log n).
/// Empty and single-element slices are left alone.
///
/// # Examples
///
/// ```rust
/// use heap_algo::pop_heap;
///
/// let mut v = vec![9, 6, 4, 1, 5, 3, 2, 1];
/// pop_heap(&mut v);
/// assert_eq!(v, [6, 5, 4, 1, 1, 3, 2, 9]);
/// ```
pub fn pop_heap<T: Ord>(v: &mut [T]) {
    pop_heap_by(v, T::lt)
}

/// [`pop_heap`] with `is_less` as the strict less-than.
pub fn pop_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    // The old last element now sits at the root and is re-seated by adjust.
    v.swap(0, len - 1);
    adjust(&mut v[..len - 1], 0, &mut is_less);
}

/// [`pop_heap`] ordering elements by the key `f` extracts.
pub fn pop_heap_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    pop_heap_by(v, |a, b| f(a).lt(&f(b)))
}

/// Rearranges arbitrary content into a heap in O(n).
///
/// # Examples
///
/// ```rust
/// use heap_algo::make_heap;
///
/// let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut v);
/// assert_eq!(v, [9, 6, 4, 1, 5, 3, 2, 1]);
/// ```
pub fn make_heap<T: Ord>(v: &mut [T]) {
    make_heap_by(v, T::lt)
}

/// [`make_heap`] with `is_less` as the strict less-than.
pub fn make_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    tracing::trace!(len, "make_heap");

    // (len - 2) / 2 is the last index with a child.
    for pos in (0..=(len - 2) / 2).rev() {
        adjust(v, pos, &mut is_less);
    }
}

/// [`make_heap`] ordering elements by the key `f` extracts.
pub fn make_heap_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    make_heap_by(v, |a, b| f(a).lt(&f(b)))
}

/// Turns a heap into an ascending sequence in O(n log n).
///
/// `v` must be a heap, normally produced by [`make_heap`]. The heap shape is
/// consumed: the result is sorted, not a heap.
///
/// # Examples
///
/// ```rust
/// use heap_algo::{make_heap, sort_heap};
///
/// let mut v = vec![5, 2, 8, 2, 7];
/// make_heap(&mut v);
/// sort_heap(&mut v);
/// assert_eq!(v, [2, 2, 5, 7, 8]);
/// ```
pub fn sort_heap<T: Ord>(v: &mut [T]) {
    sort_heap_by(v, T::lt)
}

/// [`sort_heap`] with `is_less` as the strict less-than.
pub fn sort_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    tracing::trace!(len = v.len(), "sort_heap");

    let mut end = v.len();
    while end > 1 {
        pop_heap_by(&mut v[..end], &mut is_less);
        end -= 1;
    }
}

/// [`sort_heap`] ordering elements by the key `f` extracts.
pub fn sort_heap_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    sort_heap_by(v, |a, b| f(a).lt(&f(b)))
}

/// Returns the length of the longest prefix of `v` that is a heap.
///
/// ```rust
/// use heap_algo::is_heap_until;
///
/// assert_eq!(is_heap_until(&[9, 6, 4, 7, 5]), 3);
/// assert_eq!(is_heap_until(&[9, 6, 4]), 3);
/// ```
pub fn is_heap_until<T: Ord>(v: &[T]) -> usize {
    is_heap_until_by(v, T::lt)
}

/// [`is_heap_until`] with `is_less` as the strict less-than.
pub fn is_heap_until_by<T, F>(v: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len())
        .find(|&i| is_less(&v[(i - 1) / 2], &v[i]))
        .unwrap_or(v.len())
}

/// [`is_heap_until`] ordering elements by the key `f` extracts.
pub fn is_heap_until_by_key<T, K, F>(v: &[T], mut f: F) -> usize
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    is_heap_until_by(v, |a, b| f(a).lt(&f(b)))
}

/// Returns `true` if `v` is a max-heap.
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, T::lt)
}

/// [`is_heap`] with `is_less` as the strict less-than.
pub fn is_heap_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_heap_until_by(v, is_less) == v.len()
}

/// [`is_heap`] ordering elements by the key `f` extracts.
pub fn is_heap_by_key<T, K, F>(v: &[T], f: F) -> bool
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    is_heap_until_by_key(v, f) == v.len()
}
