use std::{fmt, iter::FusedIterator};

use crate::error::{DequeError, Result};

/// A double-ended queue with a capacity fixed at construction.
///
/// Slots are stored in a boxed slice and addressed by two wrapping cursors:
/// `front` points at the first live element, `back` at the slot the next
/// `push_back` writes to. `len` alone tells empty from full, since both
/// states leave `front == back`.
pub struct BoundedDeque<T> {
    buf: Box<[Option<T>]>,
    front: usize,
    back: usize,
    len: usize,
}

impl<T> BoundedDeque<T> {
    /// Allocates `capacity` empty slots.
    ///
    /// Fails with [`DequeError::InvalidCapacity`] when `capacity` is zero or
    /// the slots cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(DequeError::InvalidCapacity);
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|_| DequeError::InvalidCapacity)?;
        buf.extend((0..capacity).map(|_| None));
        Ok(Self {
            buf: buf.into_boxed_slice(),
            front: 0,
            back: 0,
            len: 0,
        })
    }

    /// Like [`BoundedDeque::new`], for callers holding a signed capacity.
    /// Negative values are rejected with [`DequeError::InvalidCapacity`].
    pub fn try_with_capacity(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| DequeError::InvalidCapacity)?;
        Self::new(capacity)
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `value` after the last element.
    ///
    /// On a full deque this returns [`DequeError::Overflow`] and `value` is
    /// dropped, it is not handed back to the caller.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DequeError::Overflow);
        }
        self.buf[self.back] = Some(value);
        self.back = self.wrap_inc(self.back);
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` before the first element. Like
    /// [`BoundedDeque::push_back`], a value rejected with
    /// [`DequeError::Overflow`] is dropped.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DequeError::Overflow);
        }
        // the new front is the slot just before the old one
        self.front = self.wrap_dec(self.front);
        self.buf[self.front] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DequeError::Underflow);
        }
        let idx = self.wrap_dec(self.back);
        let value = self.buf[idx].take().ok_or(DequeError::Underflow)?;
        self.back = idx;
        self.len -= 1;
        Ok(value)
    }

    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DequeError::Underflow);
        }
        let value = self.buf[self.front].take().ok_or(DequeError::Underflow)?;
        self.front = self.wrap_inc(self.front);
        self.len -= 1;
        Ok(value)
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.front].as_ref()
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.wrap_dec(self.back)].as_ref()
    }

    /// Drops every live element and rewinds both cursors.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.back = 0;
        self.len = 0;
    }

    /// Iterates live elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            head: 0,
            tail: self.len,
        }
    }

    fn wrap_inc(&self, idx: usize) -> usize {
        if idx + 1 == self.capacity() {
            0
        } else {
            idx + 1
        }
    }

    fn wrap_dec(&self, idx: usize) -> usize {
        if idx == 0 {
            self.capacity() - 1
        } else {
            idx - 1
        }
    }

    // physical slot of the `offset`-th live element
    fn slot(&self, offset: usize) -> usize {
        let idx = self.front + offset;
        if idx >= self.capacity() {
            idx - self.capacity()
        } else {
            idx
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator returned by [`BoundedDeque::iter`].
pub struct Iter<'a, T> {
    deque: &'a BoundedDeque<T>,
    // logical offsets from the deque's front, `head..tail` not yet yielded
    head: usize,
    tail: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let slot = self.deque.slot(self.head);
        self.head += 1;
        self.deque.buf[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.tail - self.head;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        let slot = self.deque.slot(self.tail);
        self.deque.buf[slot].as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
