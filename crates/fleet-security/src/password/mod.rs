//! Password hashing module.

mod hasher;

pub use hasher::*;
