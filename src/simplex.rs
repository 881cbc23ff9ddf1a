//! Main module for simplex library functionality

pub mod grammar;
pub mod lexing;
pub mod matching;
pub mod parsing;
pub mod testing;
