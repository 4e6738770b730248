// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The stack, its storage and its errors.

pub mod alloc;
pub mod errors;
pub mod stack;

#[cfg(any(test, feature = "test-utils"))]
pub use alloc::FailingAllocator;
pub use alloc::{Allocator, SystemAllocator};
pub use errors::{Error, Result};
pub use stack::{DynamicStack, DEFAULT_CAPACITY};
