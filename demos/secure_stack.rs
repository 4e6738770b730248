// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Pushes a few strings, pops them all, then pops once more to show underflow.
//!
//! Run with `RUST_LOG=secure_stack=trace` to see growth and push/pop events.

use secure_stack::DynamicStack;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut stack = DynamicStack::new()?;
    for value in ["Hello", "World", "Secure", "Stack", "Rust"] {
        stack.push(value)?;
    }

    while !stack.is_empty() {
        println!("Popped: {}", stack.pop()?);
    }

    println!("Attempting to pop from an empty stack...");
    match stack.pop() {
        Ok(value) => println!("Popped: {}", value),
        Err(err) => eprintln!("Error: {}", err),
    }

    stack.destroy();
    Ok(())
}
