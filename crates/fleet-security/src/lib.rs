//! # Fleet Security
//!
//! HTTP Basic credential verification and Argon2 password hashing.

pub mod basic;
pub mod password;

pub use basic::*;
pub use password::*;
