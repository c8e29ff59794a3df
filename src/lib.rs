//! In-place binary max-heap algorithms over mutable slices.
//!
//! The crate owns no storage. Every operation borrows a caller's slice,
//! reorders it in place and returns:
//!
//! - [`make_heap`] turns arbitrary content into a max-heap in O(n).
//! - [`push_heap`] restores the heap after the caller appended one element.
//! - [`pop_heap`] moves the maximum to the last slot and re-heaps the rest.
//! - [`sort_heap`] consumes a heap into ascending order.
//!
//! Each operation also has `_by` (strict less-than closure) and `_by_key`
//! forms, and [`is_heap`] / [`is_heap_until`] inspect a slice.
//!
//! ```rust
//! use heap_algo::{make_heap, pop_heap, push_heap, sort_heap};
//!
//! let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! make_heap(&mut v);
//! assert_eq!(v, [9, 6, 4, 1, 5, 3, 2, 1]);
//!
//! pop_heap(&mut v);
//! assert_eq!(v.pop(), Some(9));
//!
//! v.push(8);
//! push_heap(&mut v);
//! assert_eq!(v[0], 8);
//!
//! sort_heap(&mut v);
//! assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 8]);
//! ```

pub mod heap;
mod hole;

pub use heap::{
    is_heap, is_heap_by, is_heap_by_key, is_heap_until, is_heap_until_by, is_heap_until_by_key,
    make_heap, make_heap_by, make_heap_by_key, pop_heap, pop_heap_by, pop_heap_by_key, push_heap,
    push_heap_by, push_heap_by_key, sort_heap, sort_heap_by, sort_heap_by_key,
};
