// SPDX-License-Identifier: MIT

//! Database layer (in-process document store).

pub mod memory;

pub use memory::MemoryDb;
