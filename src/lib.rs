// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A growable last-in-first-out stack of strings.
//!
//! ```
//! use secure_stack::{DynamicStack, Error};
//!
//! let mut stack = DynamicStack::with_capacity(1)?;
//! stack.push("Hello")?;
//! stack.push("World")?;
//!
//! assert_eq!(stack.pop()?, "World");
//! assert_eq!(stack.pop()?, "Hello");
//! assert_eq!(stack.pop(), Err(Error::Underflow));
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base;
pub mod config;

pub use base::{Allocator, DynamicStack, Error, Result, SystemAllocator, DEFAULT_CAPACITY};
pub use config::StackConfig;

#[cfg(any(test, feature = "test-utils"))]
pub use base::FailingAllocator;
