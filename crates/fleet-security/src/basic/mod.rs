//! HTTP Basic authentication module.

mod authenticator;

pub use authenticator::*;
