//! Core traits shared across layers.

/// Trait for mapping between domain entities and DTOs.
pub trait Mapper<From, To> {
    /// Maps from source type to target type.
    fn map(from: From) -> To;
}

/// Trait for bidirectional mapping between domain entities and DTOs.
pub trait BiMapper<A, B>: Mapper<A, B> {
    /// Maps from target type back to source type.
    fn map_back(from: B) -> A;
}
