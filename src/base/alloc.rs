// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Backing-store acquisition for stacks.
//!
//! Every allocation a [`DynamicStack`](super::DynamicStack) makes is first
//! approved by its [`Allocator`], so tests can make it fail on demand. The
//! allocator only sees sizes; the buffer itself stays private to the stack.

use std::mem;

use super::errors::{Error, Result};

/// Largest number of strings a buffer can hold.
const MAX_SLOTS: usize = isize::MAX as usize / mem::size_of::<String>();

/// Gatekeeper for a stack's buffer growth and its owned values.
pub trait Allocator {
    /// Approves room for `additional` more slots on top of `len` occupied ones.
    ///
    /// The stack performs the reservation itself once this returns `Ok`.
    fn reserve(&mut self, len: usize, additional: usize) -> Result<()>;

    /// Returns an owned copy of `value`.
    fn duplicate(&mut self, value: &str) -> Result<String>;
}

/// The global allocator, with failures reported instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn reserve(&mut self, len: usize, additional: usize) -> Result<()> {
        match len.checked_add(additional) {
            Some(total) if total <= MAX_SLOTS => Ok(()),
            _ => Err(Error::AllocationFailure {
                requested: additional,
            }),
        }
    }

    fn duplicate(&mut self, value: &str) -> Result<String> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| Error::AllocationFailure {
                requested: value.len(),
            })?;
        owned.push_str(value);
        Ok(owned)
    }
}

/// An allocator that fails on request, for exercising error paths.
///
/// Reservations are counted from the first one, which is the one a stack
/// makes when it is constructed.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Default)]
pub struct FailingAllocator {
    reservations: usize,
    fail_after: Option<usize>,
    fail_duplicates: bool,
}

#[cfg(any(test, feature = "test-utils"))]
impl FailingAllocator {
    /// Creates an allocator that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets the first `n` reservations through and fails every later one.
    pub fn fail_reserve_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Fails every value duplication.
    pub fn fail_duplicates(mut self) -> Self {
        self.fail_duplicates = true;
        self
    }

    /// Returns the number of reservations attempted so far.
    pub fn reservations(&self) -> usize {
        self.reservations
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Allocator for FailingAllocator {
    fn reserve(&mut self, len: usize, additional: usize) -> Result<()> {
        self.reservations += 1;
        match self.fail_after {
            Some(n) if self.reservations > n => Err(Error::AllocationFailure {
                requested: additional,
            }),
            _ => SystemAllocator.reserve(len, additional),
        }
    }

    fn duplicate(&mut self, value: &str) -> Result<String> {
        if self.fail_duplicates {
            return Err(Error::AllocationFailure {
                requested: value.len(),
            });
        }
        SystemAllocator.duplicate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_reserve() {
        assert!(SystemAllocator.reserve(0, 6).is_ok());
        assert!(SystemAllocator.reserve(MAX_SLOTS - 1, 1).is_ok());
    }

    #[test]
    fn test_system_reserve_rejects_oversized() {
        assert_eq!(
            SystemAllocator.reserve(1, usize::MAX),
            Err(Error::AllocationFailure {
                requested: usize::MAX
            })
        );
        assert!(SystemAllocator
            .reserve(MAX_SLOTS, 1)
            .unwrap_err()
            .is_allocation_failure());
    }

    #[test]
    fn test_system_duplicate() {
        let copy = SystemAllocator.duplicate("Hello").unwrap();
        assert_eq!(copy, "Hello");
    }

    #[test]
    fn test_failing_allocator() {
        let mut alloc = FailingAllocator::new().fail_reserve_after(1);
        assert!(alloc.reserve(0, 1).is_ok());
        assert!(alloc.reserve(1, 1).unwrap_err().is_allocation_failure());
        assert_eq!(alloc.reservations(), 2);

        let mut alloc = FailingAllocator::new().fail_duplicates();
        assert_eq!(
            alloc.duplicate("abc"),
            Err(Error::AllocationFailure { requested: 3 })
        );
    }
}
