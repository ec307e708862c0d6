//! Read models definitions.

pub mod recipe;
