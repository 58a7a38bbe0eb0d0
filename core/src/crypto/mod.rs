//! crypto/mod.rs
//! Inner digest primitives shared by the algorithm implementations.

pub mod digest;

pub use self::digest::*;
