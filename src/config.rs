// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Stack configuration loaded from TOML.

use serde::{Deserialize, Serialize};

use crate::base::{Allocator, DynamicStack, Error, Result, SystemAllocator, DEFAULT_CAPACITY};

/// Settings for constructing a [`DynamicStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Slots allocated up front. Must be at least one.
    pub initial_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StackConfig {
    /// Creates a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Parses a config from TOML.
    ///
    /// Missing keys take their defaults. Malformed input or a zero capacity
    /// is an [`Error::InvalidArgument`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::invalid_argument(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the config can build a stack.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::invalid_argument(
                "initial_capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Builds a stack backed by the system allocator.
    pub fn build(&self) -> Result<DynamicStack> {
        self.build_with(SystemAllocator)
    }

    /// Builds a stack backed by `alloc`.
    pub fn build_with<A: Allocator>(&self, alloc: A) -> Result<DynamicStack<A>> {
        self.validate()?;
        DynamicStack::with_allocator(self.initial_capacity, alloc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StackConfig::from_toml_str("").unwrap();
        assert_eq!(config, StackConfig::default());
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_parse_capacity() {
        let config = StackConfig::from_toml_str("initial_capacity = 10").unwrap();
        assert_eq!(config.initial_capacity, 10);

        let stack = config.build().unwrap();
        assert_eq!(stack.capacity(), 10);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let err = StackConfig::from_toml_str("initial_capacity = 0").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(StackConfig::new(0).build().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_malformed() {
        for content in ["initial_capacity = \"four\"", "initial_capacity = -1", "capacity = 4"] {
            let err = StackConfig::from_toml_str(content).unwrap_err();
            assert!(err.is_invalid_argument(), "{content}: {err}");
        }
    }
}
