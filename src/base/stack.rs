// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Growable LIFO stack of strings.
//!
//! [`DynamicStack`] owns every string it holds. `push` copies the value in,
//! `pop` hands ownership back to the caller, and a full buffer doubles in
//! size instead of failing. Every fallible operation returns a
//! [`Result`]; an empty stack is reported as [`Error::Underflow`], never as
//! a sentinel value.
//!
//! The stack is not synchronized. Wrap it in a lock to share it.

use std::fmt;

use super::alloc::{Allocator, SystemAllocator};
use super::errors::{Error, Result};

/// Capacity used by [`DynamicStack::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// A last-in-first-out stack of strings backed by a doubling buffer.
pub struct DynamicStack<A = SystemAllocator> {
    /// Occupied slots, bottom first. Its allocation always covers `capacity`.
    buffer: Vec<String>,
    /// Logical slot count. Only ever doubles.
    capacity: usize,
    alloc: A,
}

impl DynamicStack<SystemAllocator> {
    /// Creates an empty stack with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack with room for `capacity` strings.
    ///
    /// Fails with [`Error::InvalidArgument`] if `capacity` is zero and with
    /// [`Error::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_allocator(capacity, SystemAllocator)
    }
}

impl<A: Allocator> DynamicStack<A> {
    /// Creates an empty stack that obtains all of its storage from `alloc`.
    pub fn with_allocator(capacity: usize, mut alloc: A) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument(
                "initial capacity must be greater than zero",
            ));
        }

        let mut buffer = Vec::new();
        if let Err(err) = reserve_slots(&mut alloc, &mut buffer, capacity) {
            tracing::warn!(capacity, %err, "failed to allocate stack buffer");
            return Err(err);
        }

        tracing::debug!(capacity, "created stack");
        Ok(Self {
            buffer,
            capacity,
            alloc,
        })
    }

    /// Pushes a copy of `value` onto the stack.
    ///
    /// Grows the buffer first if it is full. If copying or growing fails the
    /// stack is left unchanged.
    pub fn push(&mut self, value: &str) -> Result<()> {
        let owned = match self.alloc.duplicate(value) {
            Ok(owned) => owned,
            Err(err) => {
                tracing::warn!(len = value.len(), %err, "failed to copy pushed value");
                return Err(err);
            }
        };
        self.push_owned(owned)
    }

    /// Pushes `value` onto the stack, taking ownership of it.
    ///
    /// If the buffer has to grow and cannot, `value` is dropped and the
    /// stack is left unchanged.
    pub fn push_owned(&mut self, value: String) -> Result<()> {
        if self.buffer.len() == self.capacity {
            self.grow()?;
        }
        debug_assert!(self.buffer.len() < self.buffer.capacity());
        self.buffer.push(value);
        tracing::trace!(len = self.buffer.len(), "pushed");
        Ok(())
    }

    /// Removes the top string and returns it to the caller.
    pub fn pop(&mut self) -> Result<String> {
        let value = self.buffer.pop().ok_or(Error::Underflow)?;
        tracing::trace!(len = self.buffer.len(), "popped");
        Ok(value)
    }

    /// Returns the top string without removing it.
    pub fn peek(&self) -> Result<&str> {
        self.buffer
            .last()
            .map(String::as_str)
            .ok_or(Error::Underflow)
    }

    /// Returns the number of strings on the stack.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the stack holds no strings.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of slots available before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the allocator backing this stack.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Releases every remaining string and the buffer.
    ///
    /// Dropping the stack does the same; this only makes the release
    /// explicit at the call site.
    pub fn destroy(self) {
        tracing::debug!(
            len = self.buffer.len(),
            capacity = self.capacity,
            "destroying stack"
        );
    }

    /// Doubles the capacity, keeping every element at its index.
    fn grow(&mut self) -> Result<()> {
        let len = self.buffer.len();
        let new_capacity = match self.capacity.checked_mul(2) {
            Some(new_capacity) => new_capacity,
            None => {
                tracing::warn!(capacity = self.capacity, "stack capacity overflow");
                return Err(Error::AllocationFailure {
                    requested: self.capacity,
                });
            }
        };

        if let Err(err) = reserve_slots(&mut self.alloc, &mut self.buffer, new_capacity - len) {
            tracing::warn!(
                capacity = self.capacity,
                new_capacity,
                %err,
                "failed to grow stack"
            );
            return Err(err);
        }

        tracing::debug!(from = self.capacity, to = new_capacity, "grew stack");
        self.capacity = new_capacity;
        Ok(())
    }
}

/// Asks `alloc` for `additional` slots, then reserves them in `buffer`.
///
/// `buffer` is untouched on failure.
fn reserve_slots<A: Allocator>(
    alloc: &mut A,
    buffer: &mut Vec<String>,
    additional: usize,
) -> Result<()> {
    alloc.reserve(buffer.len(), additional)?;
    buffer
        .try_reserve_exact(additional)
        .map_err(|_| Error::AllocationFailure {
            requested: additional,
        })
}

impl<A> fmt::Debug for DynamicStack<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicStack")
            .field("len", &self.buffer.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
