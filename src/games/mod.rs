//! Concrete game implementations built on the core types.

pub mod quoridor;
