#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod node;
pub mod parser;
pub mod span;
