use std::mem::ManuallyDrop;
use std::ptr;

/// A vacant slot in a slice plus the value that will eventually fill it.
///
/// The slot at `pos` is logically empty while the hole lives; its bits are a
/// stale copy of whatever was moved out last. On drop the held value is
/// written into the current position, which also runs on unwind, so a
/// panicking comparator still leaves the slice a permutation of its input.
pub(crate) struct Hole<'a, T> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Takes the value at `pos` out of `data`, leaving a hole behind.
    ///
    /// # Safety
    ///
    /// `pos` must be within `data`.
    #[inline]
    pub(crate) unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        let elt = ptr::read(data.get_unchecked(pos));
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The held-out value.
    #[inline]
    pub(crate) fn element(&self) -> &T {
        &self.elt
    }

    /// # Safety
    ///
    /// `index` must be within the slice and not equal to the hole position.
    #[inline]
    pub(crate) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        self.data.get_unchecked(index)
    }

    /// Moves the value at `index` into the hole; the hole moves to `index`.
    ///
    /// # Safety
    ///
    /// `index` must be within the slice and not equal to the hole position.
    #[inline]
    pub(crate) unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        let ptr = self.data.as_mut_ptr();
        ptr::copy_nonoverlapping(ptr.add(index), ptr.add(self.pos), 1);
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Hole;

    #[test]
    fn test_refill_on_drop() {
        let mut data = vec![10, 20, 30, 40];
        unsafe {
            let mut hole = Hole::new(&mut data, 3);
            assert_eq!(*hole.element(), 40);
            assert_eq!(*hole.get(1), 20);
            hole.move_to(1);
            hole.move_to(0);
            assert_eq!(hole.pos(), 0);
        }
        assert_eq!(data, [40, 10, 30, 20]);
    }

    #[test]
    fn test_owned_values_survive() {
        let mut data: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        unsafe {
            let mut hole = Hole::new(&mut data, 0);
            hole.move_to(2);
        }
        assert_eq!(data, ["c", "b", "a"]);
    }

    #[test]
    fn test_refill_on_unwind() {
        let mut data = vec![1, 2, 3, 4, 5];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| unsafe {
            let mut hole = Hole::new(&mut data, 4);
            hole.move_to(1);
            panic!("comparator blew up");
        }));
        assert!(result.is_err());
        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
        assert_eq!(data, [1, 5, 3, 4, 2]);
    }
}
