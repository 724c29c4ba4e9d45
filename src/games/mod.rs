//! Game implementations.

pub mod trivia;
