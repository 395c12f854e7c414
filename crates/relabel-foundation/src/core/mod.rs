//! Core runtime primitives

pub mod cancellation;
