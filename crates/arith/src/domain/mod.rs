//! Domain layer - Pure computational logic
//!
//! This module contains pure functions without I/O or shared state.

pub mod checked;
pub mod error;
pub mod ops;
